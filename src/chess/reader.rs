//! Loads every game of a PGN file, isolating failures per game.
//!
//! A game that cannot be parsed, or whose moves cannot be played, does not
//! affect its neighbours: it shows up in the batch with its error while the
//! other games stay navigable.

use super::error::{LoadError, ProjectionError};
use super::header::GameHeader;
use super::log;
use super::projector::{DisplaySequence, ProjectionOptions, project_game};
use super::rules::RulesEngine;
use super::types::GameRecord;
use super::visitor::GameVisitor;

use pgn_reader::Reader;
use std::io::Read;

#[derive(Debug)]
pub enum LoadedGame {
    /// Parsed and fully playable.
    Ready {
        record: GameRecord,
        sequence: DisplaySequence,
    },
    /// Parsed, but some move could not be played. Tags remain usable.
    Unplayable {
        record: GameRecord,
        error: ProjectionError,
    },
    /// Could not be parsed at all.
    Rejected { game_index: usize, error: LoadError },
}

impl LoadedGame {
    pub fn record(&self) -> Option<&GameRecord> {
        match self {
            Self::Ready { record, .. } | Self::Unplayable { record, .. } => Some(record),
            Self::Rejected { .. } => None,
        }
    }

    pub fn sequence(&self) -> Option<&DisplaySequence> {
        match self {
            Self::Ready { sequence, .. } => Some(sequence),
            _ => None,
        }
    }

    pub fn header(&self) -> Option<GameHeader> {
        self.record().map(|record| GameHeader::from_tags(&record.tags))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

pub fn load_games<E: RulesEngine + ?Sized>(
    pgn_text: &str,
    engine: &E,
    options: ProjectionOptions,
) -> Vec<LoadedGame> {
    read_games(pgn_text.as_bytes(), engine, options)
}

pub fn read_games<R: Read, E: RulesEngine + ?Sized>(
    input: R,
    engine: &E,
    options: ProjectionOptions,
) -> Vec<LoadedGame> {
    let mut reader = Reader::new(input);
    let mut visitor = GameVisitor::new();
    let mut games = Vec::new();

    loop {
        let game_index = games.len();
        match reader.read_game(&mut visitor) {
            Ok(Some(Ok(record))) => games.push(prepare(record, engine, options, game_index)),
            Ok(Some(Err(error))) => {
                log::warn(format!(
                    "Parser-stage error: stage=build_tree; game_index={game_index}; error={error}"
                ));
                games.push(LoadedGame::Rejected {
                    game_index,
                    error: error.into(),
                });
            }
            Ok(None) => break,
            Err(error) => {
                log::error(format!(
                    "Parser-stage error: stage=read_game; game_index={game_index}; error={error}"
                ));
                games.push(LoadedGame::Rejected {
                    game_index,
                    error: error.into(),
                });
                break;
            }
        }
    }

    log::debug(format!("loaded {} game(s)", games.len()));
    games
}

fn prepare<E: RulesEngine + ?Sized>(
    record: GameRecord,
    engine: &E,
    options: ProjectionOptions,
    game_index: usize,
) -> LoadedGame {
    match project_game(&record, engine, options) {
        Ok(sequence) => LoadedGame::Ready { record, sequence },
        Err(error) => {
            log::warn(format!(
                "Projection error: game_index={game_index}; error={error}"
            ));
            LoadedGame::Unplayable { record, error }
        }
    }
}
