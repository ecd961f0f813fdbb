use std::str::FromStr;

use chess::{Piece, Square};

/// Parse an algebraic square like "e2". Case-insensitive.
pub fn parse_square(s: &str) -> Option<Square> {
    Square::from_str(&s.to_lowercase()).ok()
}

/// Parse a promotion piece letter ("q", "r", "b", "n").
pub fn parse_promotion(s: &str) -> Option<Piece> {
    match s.to_lowercase().as_str() {
        "q" => Some(Piece::Queen),
        "r" => Some(Piece::Rook),
        "b" => Some(Piece::Bishop),
        "n" => Some(Piece::Knight),
        _ => None,
    }
}

/// Wire letter for a promotion piece.
pub fn promotion_code(piece: Piece) -> Option<&'static str> {
    match piece {
        Piece::Queen => Some("q"),
        Piece::Rook => Some("r"),
        Piece::Bishop => Some("b"),
        Piece::Knight => Some("n"),
        _ => None,
    }
}
