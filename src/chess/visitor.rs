use super::error::TreeError;
use super::rules::fen_turn;
use super::tree::TreeBuilder;
use super::types::{GameRecord, Termination};

use pgn_reader::{Outcome, RawTag, SanPlus, Skip, Visitor};
use std::ops::ControlFlow;

/// Streaming PGN visitor (pgn-reader) feeding a [`TreeBuilder`].
///
/// Variations are entered rather than skipped; comments and NAGs are dropped.
/// A structural error ends the game early through `ControlFlow::Break`, after
/// which the reader skips to the next game.
#[derive(Debug, Default)]
pub struct GameVisitor {
    builder: TreeBuilder,
}

type Flow = ControlFlow<Result<GameRecord, TreeError>>;

fn flow(result: Result<(), TreeError>) -> Flow {
    match result {
        Ok(()) => ControlFlow::Continue(()),
        Err(err) => ControlFlow::Break(Err(err)),
    }
}

impl GameVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for GameVisitor {
    type Tags = ();
    type Movetext = ();
    type Output = Result<GameRecord, TreeError>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.builder.enter_game();
        ControlFlow::Continue(())
    }

    fn tag(
        &mut self,
        _: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let name = String::from_utf8_lossy(key).into_owned();
        let value = String::from_utf8_lossy(value.as_bytes());
        flow(self.builder.tag_pair(name, &value))
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        // pgn-reader drops move numbers, so a custom start position is the
        // only place the first move's number can come from.
        if let Some((number, white)) = self.builder.tags().get("FEN").and_then(fen_turn) {
            flow(self.builder.move_number(number, white))?;
        }
        ControlFlow::Continue(())
    }

    fn san(&mut self, _: &mut Self::Movetext, san: SanPlus) -> ControlFlow<Self::Output> {
        flow(self.builder.push_move(san.to_string()))
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        flow(self.builder.enter_variation())?;
        ControlFlow::Continue(Skip(false))
    }

    fn end_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output> {
        flow(self.builder.exit_variation())
    }

    fn outcome(&mut self, _: &mut Self::Movetext, outcome: Outcome) -> ControlFlow<Self::Output> {
        match Termination::from_token(&outcome.to_string()) {
            Some(kind) => flow(self.builder.termination(kind)),
            None => ControlFlow::Continue(()),
        }
    }

    fn end_game(&mut self, _: Self::Movetext) -> Self::Output {
        self.builder.exit_game()
    }
}
