pub mod registry;
pub mod session;
pub mod utils;

// Re-export important types
pub use registry::{Role, SeatRegistry};
pub use session::{GameSession, MoveRejection};
