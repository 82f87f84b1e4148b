use super::types::Turn;
use thiserror::Error;

/// A game whose event stream does not describe a well-formed move tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("event received outside of a game")]
    NoGameInProgress,
    #[error("variation closed at depth 0 without a matching open")]
    UnbalancedExit,
    #[error("variation at depth {depth} contains no move")]
    EmptyVariation { depth: usize },
    #[error("game ended with {open} variation(s) still open")]
    UnclosedVariation { open: usize },
    #[error("variation at depth {depth} has no move to branch from")]
    OrphanVariation { depth: usize },
}

/// The rules engine refused a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal move {move_text} in position {position}: {reason}")]
pub struct IllegalMove {
    pub move_text: String,
    pub position: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("invalid starting position {fen}: {reason}")]
    InvalidStartPosition { fen: String, reason: String },
    #[error("move {}{} cannot be played: {source}", .turn.number_label(), .source.move_text)]
    IllegalMove {
        turn: Turn,
        #[source]
        source: IllegalMove,
    },
}

/// Failure of one game inside a batch load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("game could not be parsed: {0}")]
    Structure(#[from] TreeError),
    #[error("failed to read PGN input: {0}")]
    Io(#[from] std::io::Error),
}
