//! Reads PGN games with nested variations into move trees and projects them
//! into a flat, navigable display sequence.
//!
//! ```no_run
//! use pgn_navigator::{Navigator, NextMove, ProjectionOptions, ShakmatyRules, load_games};
//!
//! let games = load_games("1. e4 e5 2. Nf3 (2. Bc4) 2... Nc6 *", &ShakmatyRules, ProjectionOptions::default());
//! if let Some(sequence) = games[0].sequence() {
//!     let navigator = Navigator::new(sequence);
//!     if let NextMove::Moved(position) = navigator.next_move(navigator.first()) {
//!         println!("{:?}", navigator.current_move(position));
//!     }
//! }
//! ```

pub mod chess;

pub use chess::{
    BranchCandidate, BranchPoint, CursorPosition, DisplayElement, DisplaySequence, GameHeader,
    GameRecord, GameVisitor, LineEnd, LoadError, LoadedGame, MoveLabel, MoveTreeNode, Navigator,
    NextMove, Notation, PgnEvent, ProjectionError, ProjectionOptions, RulesEngine, ShakmatyRules,
    TagMap, Termination, TreeBuilder, TreeError, Turn, build_game, load_games, project_game,
    read_games,
};
