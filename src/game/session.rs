use chess::{ChessMove, Color, Game, Piece, Rank, Square};

use crate::game::registry::Role;
use crate::game::utils::{parse_promotion, parse_square, promotion_code};
use crate::models::MoveRequest;

/// Why a move request was turned down. Both kinds are reported to the
/// sender only and leave the shared game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The sender is a spectator, or moved out of turn.
    NotYourTurn,
    /// The rules engine refused the move, or the request was malformed.
    IllegalMove,
}

impl MoveRejection {
    /// Wire code carried in the `invalidMove` message.
    pub fn reason(self) -> &'static str {
        match self {
            MoveRejection::NotYourTurn => "notYourTurn",
            MoveRejection::IllegalMove => "illegalMove",
        }
    }
}

/// The single authoritative game, mutated only through the rules engine.
///
/// The coordinator checks who may move; everything about whether a move is
/// legal chess is the `chess` crate's call. In particular there is no
/// game-over tracking here: once the engine has no legal moves left it
/// refuses everything, and that refusal is the only thing ending a game
/// server-side.
pub struct GameSession {
    game: Game,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession { game: Game::new() }
    }

    /// Serialize the current position as FEN.
    pub fn fen(&self) -> String {
        self.game.current_position().to_string()
    }

    /// Run one move transition. On acceptance the returned request is the
    /// normalized descriptor (lowercased squares, effective promotion
    /// letter) that every client should replay.
    pub fn apply(&mut self, role: Role, request: &MoveRequest) -> Result<MoveRequest, MoveRejection> {
        let mover = role.color().ok_or(MoveRejection::NotYourTurn)?;
        if self.game.side_to_move() != mover {
            return Err(MoveRejection::NotYourTurn);
        }

        let from = parse_square(&request.from).ok_or(MoveRejection::IllegalMove)?;
        let to = parse_square(&request.to).ok_or(MoveRejection::IllegalMove)?;
        let promotion = self.promotion_for(mover, from, to, request.promotion.as_deref())?;

        if !self.game.make_move(ChessMove::new(from, to, promotion)) {
            return Err(MoveRejection::IllegalMove);
        }

        Ok(MoveRequest {
            from: from.to_string(),
            to: to.to_string(),
            promotion: promotion.and_then(promotion_code).map(str::to_string),
        })
    }

    /// Replace the game with a fresh starting position and return its FEN.
    pub fn reset(&mut self) -> String {
        self.game = Game::new();
        self.fen()
    }

    /// A pawn reaching the far rank promotes to the requested piece, or to
    /// a queen when the request names none (the client has no
    /// underpromotion flow). A stray promotion letter on any other move is
    /// ignored, matching chess.js.
    fn promotion_for(
        &self,
        mover: Color,
        from: Square,
        to: Square,
        requested: Option<&str>,
    ) -> Result<Option<Piece>, MoveRejection> {
        let far_rank = match mover {
            Color::White => Rank::Eighth,
            Color::Black => Rank::First,
        };
        let board = self.game.current_position();
        if board.piece_on(from) != Some(Piece::Pawn) || to.get_rank() != far_rank {
            return Ok(None);
        }
        match requested {
            Some(letter) => parse_promotion(letter).map(Some).ok_or(MoveRejection::IllegalMove),
            None => Ok(Some(Piece::Queen)),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
