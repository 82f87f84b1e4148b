//! Projects a move tree into the linear sequence a reader sees, stamping every
//! move with the position it produces.

use super::error::ProjectionError;
use super::notation::Notation;
use super::rules::{MoveSquares, RulesEngine, STANDARD_START_FEN};
use super::types::{GameRecord, MoveTreeNode, Termination, Turn};
use serde_json::{Value as JsonValue, json};
use std::env;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLabel {
    /// Text as displayed, in the configured notation.
    pub text: String,
    /// Move as recorded in the game.
    pub san: String,
    pub turn: Turn,
    /// Position after the move.
    pub position: String,
    pub squares: MoveSquares,
}

impl MoveLabel {
    /// Number, side marker and move, e.g. `2...Nc6`.
    pub fn full_label(&self) -> String {
        format!("{}{}", self.turn.number_label(), self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayElement {
    MoveNumberLabel(String),
    MoveLabel(MoveLabel),
    OpenVariation,
    CloseVariation,
    ResultMarker(Termination),
}

impl DisplayElement {
    pub fn text(&self) -> &str {
        match self {
            Self::MoveNumberLabel(text) => text,
            Self::MoveLabel(label) => &label.text,
            Self::OpenVariation => "(",
            Self::CloseVariation => ")",
            Self::ResultMarker(kind) => kind.as_str(),
        }
    }

    pub fn as_move(&self) -> Option<&MoveLabel> {
        match self {
            Self::MoveLabel(label) => Some(label),
            _ => None,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Self::MoveLabel(_))
    }

    fn to_json(&self) -> JsonValue {
        match self {
            Self::MoveNumberLabel(text) => json!({ "kind": "number", "text": text }),
            Self::MoveLabel(label) => json!({
                "kind": "move",
                "text": label.text,
                "san": label.san,
                "number": label.turn.number,
                "white": label.turn.white,
                "fen": label.position,
                "from": label.squares.from,
                "to": label.squares.to,
            }),
            Self::OpenVariation => json!({ "kind": "open", "text": "(" }),
            Self::CloseVariation => json!({ "kind": "close", "text": ")" }),
            Self::ResultMarker(kind) => json!({ "kind": "result", "text": kind.as_str() }),
        }
    }
}

/// The linear projection of one game. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySequence {
    elements: Vec<DisplayElement>,
}

impl Deref for DisplaySequence {
    type Target = [DisplayElement];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl DisplaySequence {
    pub fn from_elements(elements: Vec<DisplayElement>) -> Self {
        Self { elements }
    }

    pub fn move_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_move()).count()
    }

    /// True when every `(` has a matching `)` and none closes early.
    pub fn is_balanced(&self) -> bool {
        let mut open = 0usize;
        for element in &self.elements {
            match element {
                DisplayElement::OpenVariation => open += 1,
                DisplayElement::CloseVariation => {
                    let Some(remaining) = open.checked_sub(1) else {
                        return false;
                    };
                    open = remaining;
                }
                _ => {}
            }
        }
        open == 0
    }

    /// Renderer hand-off: one JSON object per element.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.elements.iter().map(DisplayElement::to_json).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionOptions {
    pub notation: Notation,
}

impl ProjectionOptions {
    /// Reads `CHESS_NOTATION` (`san` or `figurine`); unknown values keep SAN.
    pub fn from_env() -> Self {
        let notation = env::var("CHESS_NOTATION")
            .ok()
            .and_then(|raw| Notation::parse(&raw))
            .unwrap_or_default();
        Self { notation }
    }
}

/// Projects a whole game, starting from its `FEN` tag or the standard
/// starting position. Fails without a partial sequence if any move is illegal.
pub fn project_game<E: RulesEngine + ?Sized>(
    record: &GameRecord,
    engine: &E,
    options: ProjectionOptions,
) -> Result<DisplaySequence, ProjectionError> {
    let start = record.starting_fen().unwrap_or(STANDARD_START_FEN);
    engine
        .validate(start)
        .map_err(|reason| ProjectionError::InvalidStartPosition {
            fen: start.to_string(),
            reason,
        })?;

    match &record.root {
        Some(root) => project(root, start, engine, options),
        None => Ok(DisplaySequence::default()),
    }
}

/// Projects the tree rooted at `root`, played from `position`.
pub fn project<E: RulesEngine + ?Sized>(
    root: &MoveTreeNode,
    position: &str,
    engine: &E,
    options: ProjectionOptions,
) -> Result<DisplaySequence, ProjectionError> {
    let mut projector = Projector {
        engine,
        notation: options.notation,
        elements: Vec::new(),
    };
    projector.line(root, position, true)?;
    Ok(DisplaySequence::from_elements(projector.elements))
}

struct Projector<'a, E: ?Sized> {
    engine: &'a E,
    notation: Notation,
    elements: Vec<DisplayElement>,
}

impl<E: RulesEngine + ?Sized> Projector<'_, E> {
    fn line(
        &mut self,
        first: &MoveTreeNode,
        start: &str,
        force_number: bool,
    ) -> Result<(), ProjectionError> {
        let mut position = start.to_string();
        let mut force_number = force_number;

        for node in first.line() {
            if node.turn.white || force_number {
                self.elements
                    .push(DisplayElement::MoveNumberLabel(node.turn.number_label()));
            }

            let applied = self
                .engine
                .apply(&position, &node.text)
                .map_err(|source| ProjectionError::IllegalMove {
                    turn: node.turn,
                    source,
                })?;

            self.elements.push(DisplayElement::MoveLabel(MoveLabel {
                text: self.notation.render(&node.text, node.turn.white).into_owned(),
                san: node.text.clone(),
                turn: node.turn,
                position: applied.position.clone(),
                squares: applied.squares,
            }));

            // Alternatives branch from the position before this move.
            for variation in &node.variations {
                self.elements.push(DisplayElement::OpenVariation);
                self.line(variation, &position, true)?;
                self.elements.push(DisplayElement::CloseVariation);
            }

            if let Some(kind) = node.termination {
                self.elements.push(DisplayElement::ResultMarker(kind));
            }

            force_number = !node.variations.is_empty();
            position = applied.position;
        }
        Ok(())
    }
}
