pub mod error;
pub mod header;
pub mod log;
pub mod navigator;
pub mod notation;
pub mod projector;
pub mod reader;
pub mod rules;
pub mod tree;
pub mod types;
pub mod visitor;

pub use error::{IllegalMove, LoadError, ProjectionError, TreeError};
pub use header::GameHeader;
pub use navigator::{
    BranchCandidate, BranchPoint, CursorPosition, LineEnd, Navigator, NextMove,
};
pub use notation::Notation;
pub use projector::{
    DisplayElement, DisplaySequence, MoveLabel, ProjectionOptions, project, project_game,
};
pub use reader::{LoadedGame, load_games, read_games};
pub use rules::{AppliedMove, MoveSquares, RulesEngine, STANDARD_START_FEN, ShakmatyRules};
pub use tree::{PgnEvent, TreeBuilder, build_game};
pub use types::{GameRecord, MoveTreeNode, TagMap, Termination, Turn};
pub use visitor::GameVisitor;
