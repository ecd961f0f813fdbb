use actix::Addr;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::game::{GameSession, SeatRegistry};
use crate::websocket::RelayWebSocket;

/// The relayed game itself: seat map plus authoritative state. Both live
/// under one lock so a seat change and a move can never interleave — a
/// disconnect that vacates a seat is fully processed before any move from
/// the seat's next occupant.
pub struct RelayState {
    pub seats: SeatRegistry,
    pub game: GameSession,
}

impl RelayState {
    pub fn new() -> Self {
        RelayState {
            seats: SeatRegistry::new(),
            game: GameSession::new(),
        }
    }
}

/// Application state shared between connections.
///
/// Lock order is `relay` then `sessions`; broadcasts take `sessions` while
/// still holding `relay`, and no path nests them the other way around.
pub struct AppState {
    pub relay: Mutex<RelayState>,
    pub sessions: Mutex<HashMap<String, Addr<RelayWebSocket>>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            relay: Mutex::new(RelayState::new()),
            sessions: Mutex::new(HashMap::new()),
        }
    }
}
