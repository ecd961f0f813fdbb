use chess::Color;

/// What a connection is allowed to do with the shared game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    White,
    Black,
    Spectator,
}

impl Role {
    /// Single-letter wire code sent with `playerRole`. Spectators have none.
    pub fn code(self) -> Option<&'static str> {
        match self {
            Role::White => Some("w"),
            Role::Black => Some("b"),
            Role::Spectator => None,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Role::White => Some(Color::White),
            Role::Black => Some(Color::Black),
            Role::Spectator => None,
        }
    }
}

/// Tracks which connection currently holds each seat.
///
/// Seating is strictly first-come: a vacated seat goes to the next
/// connection that arrives, not back to whoever held it before.
#[derive(Debug, Default)]
pub struct SeatRegistry {
    white: Option<String>,
    black: Option<String>,
}

impl SeatRegistry {
    pub fn new() -> Self {
        SeatRegistry::default()
    }

    /// Seat a new connection: White if vacant, else Black, else spectator.
    pub fn assign(&mut self, connection_id: &str) -> Role {
        if self.white.is_none() {
            self.white = Some(connection_id.to_owned());
            Role::White
        } else if self.black.is_none() {
            self.black = Some(connection_id.to_owned());
            Role::Black
        } else {
            Role::Spectator
        }
    }

    /// Vacate the seat held by this connection, if any. Spectators hold no
    /// seat state, so releasing them is a no-op.
    pub fn release(&mut self, connection_id: &str) {
        if self.white.as_deref() == Some(connection_id) {
            self.white = None;
        } else if self.black.as_deref() == Some(connection_id) {
            self.black = None;
        }
    }

    pub fn role_of(&self, connection_id: &str) -> Role {
        if self.white.as_deref() == Some(connection_id) {
            Role::White
        } else if self.black.as_deref() == Some(connection_id) {
            Role::Black
        } else {
            Role::Spectator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_fill_in_connection_order() {
        let mut seats = SeatRegistry::new();
        assert_eq!(seats.assign("a"), Role::White);
        assert_eq!(seats.assign("b"), Role::Black);
        assert_eq!(seats.assign("c"), Role::Spectator);
        assert_eq!(seats.assign("d"), Role::Spectator);
    }

    #[test]
    fn role_of_unknown_connection_is_spectator() {
        let seats = SeatRegistry::new();
        assert_eq!(seats.role_of("nobody"), Role::Spectator);
    }

    #[test]
    fn disconnect_frees_seat_for_next_connection() {
        let mut seats = SeatRegistry::new();
        seats.assign("a");
        seats.assign("b");

        seats.release("a");
        assert_eq!(seats.role_of("a"), Role::Spectator);

        // The vacated seat goes to the newcomer, with no binding to "a".
        assert_eq!(seats.assign("d"), Role::White);
        assert_eq!(seats.role_of("d"), Role::White);
        assert_eq!(seats.role_of("b"), Role::Black);
    }

    #[test]
    fn spectator_disconnect_leaves_seats_untouched() {
        let mut seats = SeatRegistry::new();
        seats.assign("a");
        seats.assign("b");
        seats.assign("c");

        seats.release("c");
        assert_eq!(seats.role_of("a"), Role::White);
        assert_eq!(seats.role_of("b"), Role::Black);
    }

    #[test]
    fn at_most_one_connection_per_seat() {
        let mut seats = SeatRegistry::new();
        let ids = ["a", "b", "c", "d", "e"];
        for id in ids {
            seats.assign(id);
        }
        seats.release("b");
        seats.assign("f");
        seats.release("a");
        seats.assign("g");

        for seat in [Role::White, Role::Black] {
            let holders: Vec<&str> = ids
                .iter()
                .chain(["f", "g"].iter())
                .copied()
                .filter(|id| seats.role_of(id) == seat)
                .collect();
            assert_eq!(holders.len(), 1, "{seat:?} held by {holders:?}");
        }
    }
}
