use super::error::IllegalMove;
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, Position, fen::Fen, san::SanPlus, uci::UciMove,
};

pub const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Origin and destination of a move, in algebraic square names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveSquares {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub position: String,
    pub squares: MoveSquares,
}

/// Applies single moves to positions. Positions are opaque strings to the
/// rest of the crate.
pub trait RulesEngine: Send + Sync {
    fn apply(&self, position: &str, move_text: &str) -> Result<AppliedMove, IllegalMove>;

    /// Checks that a starting position is usable, returning the reason if not.
    fn validate(&self, position: &str) -> Result<(), String>;
}

/// Standard chess through `shakmaty`, with FEN positions and SAN moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyRules;

impl ShakmatyRules {
    fn load(position: &str) -> Result<Chess, String> {
        let fen: Fen = position.trim().parse().map_err(|e| format!("{e}"))?;
        fen.into_position(CastlingMode::Standard)
            .map_err(|e| format!("{e}"))
    }
}

impl RulesEngine for ShakmatyRules {
    fn apply(&self, position: &str, move_text: &str) -> Result<AppliedMove, IllegalMove> {
        let illegal = |reason: String| IllegalMove {
            move_text: move_text.to_string(),
            position: position.to_string(),
            reason,
        };

        let mut pos = Self::load(position).map_err(illegal)?;
        let san: SanPlus = move_text
            .parse()
            .map_err(|e| illegal(format!("unreadable move: {e}")))?;
        let m = san.san.to_move(&pos).map_err(|e| illegal(format!("{e}")))?;

        // The UCI form reports the king's destination for castling.
        let squares = match m.clone().to_uci(CastlingMode::Standard) {
            UciMove::Normal { from, to, .. } => MoveSquares {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => MoveSquares {
                from: m.from().map(|sq| sq.to_string()).unwrap_or_default(),
                to: m.to().to_string(),
            },
        };

        pos.play_unchecked(m);
        Ok(AppliedMove {
            position: Fen::from_position(&pos, EnPassantMode::Legal).to_string(),
            squares,
        })
    }

    fn validate(&self, position: &str) -> Result<(), String> {
        Self::load(position).map(|_| ())
    }
}

/// Side to move and fullmove number encoded in a FEN, if it parses.
pub fn fen_turn(position: &str) -> Option<(u32, bool)> {
    let fen: Fen = position.trim().parse().ok()?;
    let setup = fen.as_setup();
    Some((setup.fullmoves.get(), setup.turn == Color::White))
}
