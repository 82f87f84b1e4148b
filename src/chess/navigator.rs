//! Stateless cursor movement over a [`DisplaySequence`].
//!
//! A cursor is an element index plus the nesting level of the line it sits
//! on; the start of the game is `(-1, 0)`. The level cannot be recovered from
//! the index without a scan, so callers carry it from one move to the next.
//! Every function here is pure and never touches the sequence.
//!
//! Moving forward never picks a line on the caller's behalf: when variation
//! blocks open right after the current move, [`next_move`] returns every
//! candidate (the continuation of the current line first) and the caller
//! chooses one with [`resolve_branch`].

use super::log;
use super::projector::{DisplayElement, DisplaySequence, MoveLabel};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub index: isize,
    pub level: usize,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::START
    }
}

impl CursorPosition {
    /// Before the first element.
    pub const START: Self = Self {
        index: -1,
        level: 0,
    };

    pub const fn new(index: isize, level: usize) -> Self {
        Self { index, level }
    }

    pub const fn is_start(self) -> bool {
        self.index == -1
    }

    fn at(index: usize, level: usize) -> Self {
        Self {
            index: index as isize,
            level,
        }
    }
}

/// A line the caller may step into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCandidate {
    /// Move number, side marker and move, e.g. `2.Bc4`.
    pub label: String,
    pub position: CursorPosition,
}

impl BranchCandidate {
    fn new(label: &MoveLabel, position: CursorPosition) -> Self {
        Self {
            label: label.full_label(),
            position,
        }
    }
}

pub type Candidates = SmallVec<[BranchCandidate; 4]>;

/// More than one move may follow the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPoint {
    /// Where the cursor was when the branch was found.
    pub origin: CursorPosition,
    /// Continuation of the current line, absent when the line ends right
    /// after the variations.
    pub mainline: Option<BranchCandidate>,
    /// First move of each variation block, in document order.
    pub variations: Candidates,
}

impl BranchPoint {
    /// Mainline candidate first, then the variations.
    pub fn candidates(&self) -> impl Iterator<Item = &BranchCandidate> {
        self.mainline.iter().chain(self.variations.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// No move follows on the game's main line.
    Mainline,
    /// The variation holding the cursor closes here.
    Variation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextMove {
    Moved(CursorPosition),
    Branch(BranchPoint),
    EndOfLine {
        position: CursorPosition,
        end: LineEnd,
    },
}

/// Backward scan over the cursor's line and, once it leaves a variation, the
/// lines that variation branches from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackwardScan {
    OnLine,
    /// Just left a variation: the next move found is the one the variation
    /// replaces, and the cursor must land before it.
    SkipReplacedMove,
    /// Inside a sibling variation block. `replaced_pending` carries a pending
    /// `SkipReplacedMove` across the block.
    SkippingSibling { depth: usize, replaced_pending: bool },
}

/// Forward scan: on the cursor's line, or inside a variation block opened
/// from it. `awaiting_first_move` stays set until the block's first move has
/// been recorded as a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ForwardScan {
    OnLine,
    InVariation {
        depth: usize,
        awaiting_first_move: bool,
    },
}

pub const fn first() -> CursorPosition {
    CursorPosition::START
}

/// Last move of the main line, following the mainline at every branch.
pub fn last(sequence: &DisplaySequence) -> CursorPosition {
    last_in_line(sequence, CursorPosition::START)
}

/// Last move of the line holding `position`, following the continuation at
/// every branch and stopping where that line ends.
pub fn last_in_line(sequence: &DisplaySequence, position: CursorPosition) -> CursorPosition {
    let mut current = position;
    loop {
        match next_move(sequence, current) {
            NextMove::Moved(next) => current = next,
            NextMove::Branch(branch) => match branch.mainline {
                Some(candidate) => current = candidate.position,
                None => return branch.origin,
            },
            NextMove::EndOfLine { position, .. } => return position,
        }
    }
}

pub fn previous_move(sequence: &DisplaySequence, position: CursorPosition) -> CursorPosition {
    if position.index < 0 {
        return CursorPosition::START;
    }
    let len = sequence.len();
    if position.index as usize >= len {
        log::debug(format!(
            "previous move requested past the end (index {}); clamping",
            position.index
        ));
        return last(sequence);
    }

    let mut level = position.level;
    let mut state = BackwardScan::OnLine;

    for index in (0..position.index as usize).rev() {
        state = match (&sequence[index], state) {
            (DisplayElement::MoveLabel(_), BackwardScan::OnLine) => {
                return CursorPosition::at(index, level);
            }
            (DisplayElement::MoveLabel(_), BackwardScan::SkipReplacedMove) => BackwardScan::OnLine,
            // Leaving a variation towards the line it branches from.
            (
                DisplayElement::OpenVariation,
                BackwardScan::OnLine | BackwardScan::SkipReplacedMove,
            ) => {
                level = level.saturating_sub(1);
                BackwardScan::SkipReplacedMove
            }
            (
                DisplayElement::OpenVariation,
                BackwardScan::SkippingSibling {
                    depth: 1,
                    replaced_pending,
                },
            ) => {
                if replaced_pending {
                    BackwardScan::SkipReplacedMove
                } else {
                    BackwardScan::OnLine
                }
            }
            (
                DisplayElement::OpenVariation,
                BackwardScan::SkippingSibling {
                    depth,
                    replaced_pending,
                },
            ) => BackwardScan::SkippingSibling {
                depth: depth - 1,
                replaced_pending,
            },
            (DisplayElement::CloseVariation, BackwardScan::OnLine) => {
                BackwardScan::SkippingSibling {
                    depth: 1,
                    replaced_pending: false,
                }
            }
            (DisplayElement::CloseVariation, BackwardScan::SkipReplacedMove) => {
                BackwardScan::SkippingSibling {
                    depth: 1,
                    replaced_pending: true,
                }
            }
            (
                DisplayElement::CloseVariation,
                BackwardScan::SkippingSibling {
                    depth,
                    replaced_pending,
                },
            ) => BackwardScan::SkippingSibling {
                depth: depth + 1,
                replaced_pending,
            },
            (_, unchanged) => unchanged,
        };
    }

    CursorPosition::START
}

pub fn next_move(sequence: &DisplaySequence, position: CursorPosition) -> NextMove {
    if position.index < -1 {
        log::debug(format!(
            "next move requested before the start (index {}); clamping",
            position.index
        ));
        return NextMove::Moved(CursorPosition::START);
    }
    let len = sequence.len();
    let scan_from = (position.index + 1) as usize;
    if scan_from > len {
        log::debug(format!(
            "next move requested past the end (index {}); clamping",
            position.index
        ));
        return NextMove::EndOfLine {
            position: last(sequence),
            end: LineEnd::Mainline,
        };
    }

    let line_level = position.level;
    let mut state = ForwardScan::OnLine;
    let mut variations = Candidates::new();

    for index in scan_from..len {
        state = match (&sequence[index], state) {
            (DisplayElement::MoveLabel(label), ForwardScan::OnLine) => {
                let target = CursorPosition::at(index, line_level);
                if variations.is_empty() {
                    return NextMove::Moved(target);
                }
                return NextMove::Branch(BranchPoint {
                    origin: position,
                    mainline: Some(BranchCandidate::new(label, target)),
                    variations,
                });
            }
            (
                DisplayElement::MoveLabel(label),
                ForwardScan::InVariation {
                    depth: 1,
                    awaiting_first_move: true,
                },
            ) => {
                let target = CursorPosition::at(index, line_level + 1);
                variations.push(BranchCandidate::new(label, target));
                ForwardScan::InVariation {
                    depth: 1,
                    awaiting_first_move: false,
                }
            }
            (DisplayElement::OpenVariation, ForwardScan::OnLine) => ForwardScan::InVariation {
                depth: 1,
                awaiting_first_move: true,
            },
            (
                DisplayElement::OpenVariation,
                ForwardScan::InVariation {
                    depth,
                    awaiting_first_move,
                },
            ) => ForwardScan::InVariation {
                depth: depth + 1,
                awaiting_first_move,
            },
            (DisplayElement::CloseVariation, ForwardScan::InVariation { depth: 1, .. }) => {
                ForwardScan::OnLine
            }
            (
                DisplayElement::CloseVariation,
                ForwardScan::InVariation {
                    depth,
                    awaiting_first_move,
                },
            ) => ForwardScan::InVariation {
                depth: depth - 1,
                awaiting_first_move,
            },
            (DisplayElement::CloseVariation, ForwardScan::OnLine) => {
                return line_finished(position, variations, LineEnd::Variation);
            }
            (_, unchanged) => unchanged,
        };
    }

    let end = if line_level == 0 {
        LineEnd::Mainline
    } else {
        LineEnd::Variation
    };
    line_finished(position, variations, end)
}

fn line_finished(position: CursorPosition, variations: Candidates, end: LineEnd) -> NextMove {
    if variations.is_empty() {
        NextMove::EndOfLine { position, end }
    } else {
        NextMove::Branch(BranchPoint {
            origin: position,
            mainline: None,
            variations,
        })
    }
}

pub fn resolve_branch(candidate: &BranchCandidate) -> CursorPosition {
    candidate.position
}

/// Nesting level of the element at `index`.
pub fn level_at(sequence: &DisplaySequence, index: usize) -> usize {
    sequence
        .iter()
        .take(index)
        .fold(0usize, |level, element| match element {
            DisplayElement::OpenVariation => level + 1,
            DisplayElement::CloseVariation => level.saturating_sub(1),
            _ => level,
        })
}

/// Cursor for a move picked directly (e.g. clicked), or `None` if `index`
/// does not hold a move.
pub fn select(sequence: &DisplaySequence, index: usize) -> Option<CursorPosition> {
    sequence
        .get(index)
        .filter(|element| element.is_move())
        .map(|_| CursorPosition::at(index, level_at(sequence, index)))
}

/// Move under the cursor, `None` at the start.
pub fn current_move(sequence: &DisplaySequence, position: CursorPosition) -> Option<&MoveLabel> {
    let index = usize::try_from(position.index).ok()?;
    sequence.get(index).and_then(DisplayElement::as_move)
}

/// Borrowing facade over one game's sequence.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    sequence: &'a DisplaySequence,
}

impl<'a> Navigator<'a> {
    pub fn new(sequence: &'a DisplaySequence) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &'a DisplaySequence {
        self.sequence
    }

    pub fn first(&self) -> CursorPosition {
        first()
    }

    pub fn last(&self) -> CursorPosition {
        last(self.sequence)
    }

    pub fn last_in_line(&self, position: CursorPosition) -> CursorPosition {
        last_in_line(self.sequence, position)
    }

    pub fn previous_move(&self, position: CursorPosition) -> CursorPosition {
        previous_move(self.sequence, position)
    }

    pub fn next_move(&self, position: CursorPosition) -> NextMove {
        next_move(self.sequence, position)
    }

    pub fn resolve_branch(&self, candidate: &BranchCandidate) -> CursorPosition {
        resolve_branch(candidate)
    }

    pub fn select(&self, index: usize) -> Option<CursorPosition> {
        select(self.sequence, index)
    }

    pub fn current_move(&self, position: CursorPosition) -> Option<&'a MoveLabel> {
        current_move(self.sequence, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::projector::{ProjectionOptions, project_game};
    use crate::chess::rules::{RulesEngine, STANDARD_START_FEN, ShakmatyRules};
    use crate::chess::tree::{PgnEvent, build_game};
    use crate::chess::types::Termination;

    fn mv(text: &str) -> PgnEvent {
        PgnEvent::Move(text.to_string())
    }

    fn sequence_of(mut events: Vec<PgnEvent>) -> DisplaySequence {
        events.insert(0, PgnEvent::EnterGame);
        let record = build_game(events).unwrap();
        project_game(&record, &ShakmatyRules, ProjectionOptions::default()).unwrap()
    }

    /// `1. e4 e5 2. Nf3 (2. Bc4 Nc6) 2... Nc6 1-0`
    ///
    /// 0 `1.` 1 e4 2 e5 3 `2.` 4 Nf3 5 `(` 6 `2.` 7 Bc4 8 Nc6 9 `)` 10 `2...`
    /// 11 Nc6 12 `1-0`
    fn italian() -> DisplaySequence {
        sequence_of(vec![
            mv("e4"),
            mv("e5"),
            mv("Nf3"),
            PgnEvent::EnterVariation,
            mv("Bc4"),
            mv("Nc6"),
            PgnEvent::ExitVariation,
            mv("Nc6"),
            PgnEvent::Termination(Termination::WhiteWon),
        ])
    }

    /// `1. e4 (1. d4) (1. c4 c5) 1... e5`
    ///
    /// 0 `1.` 1 e4 2 `(` 3 `1.` 4 d4 5 `)` 6 `(` 7 `1.` 8 c4 9 c5 10 `)`
    /// 11 `1...` 12 e5
    fn siblings() -> DisplaySequence {
        sequence_of(vec![
            mv("e4"),
            PgnEvent::EnterVariation,
            mv("d4"),
            PgnEvent::ExitVariation,
            PgnEvent::EnterVariation,
            mv("c4"),
            mv("c5"),
            PgnEvent::ExitVariation,
            mv("e5"),
        ])
    }

    /// `1. e4 (1. d4 d5 (1... Nf6)) 1... e5`
    ///
    /// 0 `1.` 1 e4 2 `(` 3 `1.` 4 d4 5 d5 6 `(` 7 `1...` 8 Nf6 9 `)` 10 `)`
    /// 11 `1...` 12 e5
    fn nested() -> DisplaySequence {
        sequence_of(vec![
            mv("e4"),
            PgnEvent::EnterVariation,
            mv("d4"),
            mv("d5"),
            PgnEvent::EnterVariation,
            mv("Nf6"),
            PgnEvent::ExitVariation,
            PgnEvent::ExitVariation,
            mv("e5"),
        ])
    }

    /// `1. e4 (1. d4 (1. c4) 1... d5) 1... e5`
    ///
    /// 0 `1.` 1 e4 2 `(` 3 `1.` 4 d4 5 `(` 6 `1.` 7 c4 8 `)` 9 `1...` 10 d5
    /// 11 `)` 12 `1...` 13 e5
    fn stacked() -> DisplaySequence {
        sequence_of(vec![
            mv("e4"),
            PgnEvent::EnterVariation,
            mv("d4"),
            PgnEvent::EnterVariation,
            mv("c4"),
            PgnEvent::ExitVariation,
            mv("d5"),
            PgnEvent::ExitVariation,
            mv("e5"),
        ])
    }

    fn pos(index: isize, level: usize) -> CursorPosition {
        CursorPosition::new(index, level)
    }

    #[test]
    fn test_first_is_before_the_first_element() {
        assert_eq!(first(), pos(-1, 0));
        assert!(first().is_start());
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let sequence = italian();
        assert_eq!(previous_move(&sequence, first()), pos(-1, 0));
    }

    #[test]
    fn test_next_from_start_skips_number_label() {
        let sequence = italian();
        assert_eq!(next_move(&sequence, first()), NextMove::Moved(pos(1, 0)));
        assert_eq!(next_move(&sequence, pos(2, 0)), NextMove::Moved(pos(4, 0)));
    }

    #[test]
    fn test_next_at_branch_offers_mainline_and_variation() {
        let sequence = italian();
        let NextMove::Branch(branch) = next_move(&sequence, pos(4, 0)) else {
            panic!("expected a branch after Nf3");
        };

        assert_eq!(branch.origin, pos(4, 0));
        let mainline = branch.mainline.as_ref().unwrap();
        assert_eq!(mainline.label, "2...Nc6");
        assert_eq!(mainline.position, pos(11, 0));

        assert_eq!(branch.variations.len(), 1);
        assert_eq!(branch.variations[0].label, "2.Bc4");
        assert_eq!(branch.variations[0].position, pos(7, 1));

        let labels: Vec<&str> = branch.candidates().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["2...Nc6", "2.Bc4"]);
        assert_eq!(resolve_branch(&branch.variations[0]), pos(7, 1));
    }

    #[test]
    fn test_next_inside_variation_stops_at_its_end() {
        let sequence = italian();
        assert_eq!(next_move(&sequence, pos(7, 1)), NextMove::Moved(pos(8, 1)));
        assert_eq!(
            next_move(&sequence, pos(8, 1)),
            NextMove::EndOfLine {
                position: pos(8, 1),
                end: LineEnd::Variation,
            }
        );
    }

    #[test]
    fn test_next_at_end_reports_last_mainline_move() {
        let sequence = italian();
        assert_eq!(
            next_move(&sequence, pos(11, 0)),
            NextMove::EndOfLine {
                position: pos(11, 0),
                end: LineEnd::Mainline,
            }
        );
    }

    #[test]
    fn test_previous_from_variation_start_lands_before_replaced_move() {
        let sequence = italian();
        assert_eq!(previous_move(&sequence, pos(8, 1)), pos(7, 1));
        // 2. Bc4 replaces 2. Nf3, so it is played from the position after 1... e5.
        assert_eq!(previous_move(&sequence, pos(7, 1)), pos(2, 0));
    }

    #[test]
    fn test_previous_skips_variation_on_mainline() {
        let sequence = italian();
        assert_eq!(previous_move(&sequence, pos(11, 0)), pos(4, 0));
        assert_eq!(previous_move(&sequence, pos(4, 0)), pos(2, 0));
        assert_eq!(previous_move(&sequence, pos(1, 0)), pos(-1, 0));
    }

    #[test]
    fn test_previous_skips_sibling_variation() {
        let sequence = siblings();
        assert_eq!(previous_move(&sequence, pos(4, 1)), pos(-1, 0));
        assert_eq!(previous_move(&sequence, pos(8, 1)), pos(-1, 0));
        assert_eq!(previous_move(&sequence, pos(9, 1)), pos(8, 1));
        assert_eq!(previous_move(&sequence, pos(12, 0)), pos(1, 0));
    }

    #[test]
    fn test_sibling_variations_are_all_candidates() {
        let sequence = siblings();
        let NextMove::Branch(branch) = next_move(&sequence, pos(1, 0)) else {
            panic!("expected a branch after e4");
        };
        assert_eq!(branch.mainline.unwrap().label, "1...e5");
        let variations: Vec<(&str, CursorPosition)> = branch
            .variations
            .iter()
            .map(|c| (c.label.as_str(), c.position))
            .collect();
        assert_eq!(variations, [("1.d4", pos(4, 1)), ("1.c4", pos(8, 1))]);
    }

    #[test]
    fn test_nested_variations_are_not_candidates_of_outer_branch() {
        let sequence = nested();
        let NextMove::Branch(branch) = next_move(&sequence, pos(1, 0)) else {
            panic!("expected a branch after e4");
        };
        assert_eq!(branch.variations.len(), 1);
        assert_eq!(branch.variations[0].label, "1.d4");
        assert_eq!(branch.mainline.unwrap().position, pos(12, 0));
    }

    #[test]
    fn test_branch_without_continuation_at_variation_end() {
        let sequence = nested();
        assert_eq!(next_move(&sequence, pos(4, 1)), NextMove::Moved(pos(5, 1)));

        let NextMove::Branch(branch) = next_move(&sequence, pos(5, 1)) else {
            panic!("expected a branch after d5");
        };
        assert!(branch.mainline.is_none());
        assert_eq!(branch.variations[0].label, "1...Nf6");
        assert_eq!(branch.variations[0].position, pos(8, 2));

        assert_eq!(previous_move(&sequence, pos(8, 2)), pos(4, 1));
        assert_eq!(previous_move(&sequence, pos(12, 0)), pos(1, 0));
        assert_eq!(last_in_line(&sequence, pos(4, 1)), pos(5, 1));
    }

    #[test]
    fn test_last_follows_mainline() {
        assert_eq!(last(&italian()), pos(11, 0));
        assert_eq!(last(&siblings()), pos(12, 0));
        assert_eq!(last(&nested()), pos(12, 0));
    }

    #[test]
    fn test_last_with_trailing_variation_stops_on_final_mainline_move() {
        // 1. e4 e5 (1... c5)
        let sequence = sequence_of(vec![
            mv("e4"),
            mv("e5"),
            PgnEvent::EnterVariation,
            mv("c5"),
            PgnEvent::ExitVariation,
        ]);
        assert_eq!(last(&sequence), pos(2, 0));
    }

    #[test]
    fn test_last_in_line_inside_variation() {
        let sequence = italian();
        assert_eq!(last_in_line(&sequence, pos(7, 1)), pos(8, 1));
        assert_eq!(last_in_line(&sequence, pos(2, 0)), pos(11, 0));
    }

    #[test]
    fn test_mainline_walk_visits_each_mainline_move_once() {
        let sequence = italian();
        let mut visited = Vec::new();
        let mut current = first();
        let end = loop {
            match next_move(&sequence, current) {
                NextMove::Moved(next) => current = next,
                NextMove::Branch(branch) => current = branch.mainline.unwrap().position,
                NextMove::EndOfLine { position, end } => break (position, end),
            }
            visited.push(current.index);
        };

        assert_eq!(visited, [1, 2, 4, 11]);
        assert_eq!(end, (pos(11, 0), LineEnd::Mainline));
    }

    #[test]
    fn test_previous_undoes_plain_next() {
        for sequence in [italian(), siblings(), nested()] {
            let starts = std::iter::once(first())
                .chain((0..sequence.len()).filter_map(|index| select(&sequence, index)));
            for start in starts {
                if let NextMove::Moved(next) = next_move(&sequence, start) {
                    assert_eq!(previous_move(&sequence, next), start);
                }
            }
        }
    }

    #[test]
    fn test_previous_undoes_mainline_choice_at_branch() {
        let sequence = siblings();
        let NextMove::Branch(branch) = next_move(&sequence, pos(1, 0)) else {
            panic!("expected a branch after e4");
        };
        let mainline = branch.mainline.as_ref().unwrap();
        assert_eq!(previous_move(&sequence, resolve_branch(mainline)), pos(1, 0));
    }

    #[test]
    fn test_previous_variation_start_skips_stacked_replaced_moves() {
        let sequence = stacked();
        // 1. c4 replaces 1. d4, which itself replaces 1. e4.
        assert_eq!(previous_move(&sequence, pos(7, 2)), pos(-1, 0));
        assert_eq!(previous_move(&sequence, pos(10, 1)), pos(4, 1));
        assert_eq!(previous_move(&sequence, pos(13, 0)), pos(1, 0));
    }

    #[test]
    fn test_every_move_replays_from_its_previous_position() {
        for sequence in [italian(), siblings(), nested(), stacked()] {
            for index in 0..sequence.len() {
                let Some(cursor) = select(&sequence, index) else {
                    continue;
                };
                let label = current_move(&sequence, cursor).unwrap();
                let before = previous_move(&sequence, cursor);
                let fen = current_move(&sequence, before)
                    .map_or(STANDARD_START_FEN, |previous| previous.position.as_str());

                let replayed = ShakmatyRules.apply(fen, &label.san).unwrap();
                assert_eq!(replayed.position, label.position, "move at index {index}");
            }
        }
    }

    #[test]
    fn test_out_of_range_requests_clamp_to_boundaries() {
        let sequence = italian();
        assert_eq!(previous_move(&sequence, pos(-7, 0)), pos(-1, 0));
        assert_eq!(previous_move(&sequence, pos(400, 0)), pos(11, 0));
        assert_eq!(next_move(&sequence, pos(-7, 0)), NextMove::Moved(pos(-1, 0)));
        assert_eq!(
            next_move(&sequence, pos(400, 0)),
            NextMove::EndOfLine {
                position: pos(11, 0),
                end: LineEnd::Mainline,
            }
        );
    }

    #[test]
    fn test_empty_sequence() {
        let sequence = DisplaySequence::default();
        assert_eq!(last(&sequence), pos(-1, 0));
        assert_eq!(previous_move(&sequence, first()), pos(-1, 0));
        assert_eq!(
            next_move(&sequence, first()),
            NextMove::EndOfLine {
                position: pos(-1, 0),
                end: LineEnd::Mainline,
            }
        );
    }

    #[test]
    fn test_select_computes_level() {
        let sequence = italian();
        assert_eq!(select(&sequence, 7), Some(pos(7, 1)));
        assert_eq!(select(&sequence, 11), Some(pos(11, 0)));
        assert_eq!(select(&sequence, 5), None);
        assert_eq!(select(&sequence, 99), None);
        assert_eq!(level_at(&sequence, 10), 0);
    }

    #[test]
    fn test_navigator_facade() {
        let sequence = italian();
        let navigator = Navigator::new(&sequence);
        assert_eq!(navigator.last(), pos(11, 0));
        assert_eq!(navigator.current_move(navigator.first()), None);
        assert_eq!(navigator.current_move(pos(4, 0)).unwrap().san, "Nf3");
        assert_eq!(navigator.previous_move(pos(4, 0)), pos(2, 0));
        assert!(matches!(navigator.next_move(pos(4, 0)), NextMove::Branch(_)));
    }
}
