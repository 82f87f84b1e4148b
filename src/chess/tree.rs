//! Builds the recursive move tree of one game out of the flat stream of
//! structural events a PGN parser produces.
//!
//! Nodes live in an arena while the game is open; every open variation depth
//! owns one [`DepthSlot`] recording where its line starts, where it currently
//! ends, whose turn it is and which node of the parent line it branches from.
//! The owned [`MoveTreeNode`] tree is materialized once the game ends.

use super::error::TreeError;
use super::log;
use super::types::{GameRecord, MoveTreeNode, TagMap, Termination, Turn};
use std::mem;

/// Structural parse events, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PgnEvent {
    EnterGame,
    TagPair { name: String, value: String },
    MoveNumber { number: u32, white: bool },
    Move(String),
    EnterVariation,
    ExitVariation,
    Termination(Termination),
    ExitGame,
}

type NodeId = usize;

#[derive(Debug)]
struct PendingNode {
    text: String,
    turn: Turn,
    next: Option<NodeId>,
    variations: Vec<NodeId>,
    termination: Option<Termination>,
}

#[derive(Debug, Default)]
struct DepthSlot {
    root: Option<NodeId>,
    tail: Option<NodeId>,
    turn: Option<Turn>,
    /// Tail of the parent line when this variation opened.
    previous: Option<NodeId>,
    /// Finished variations that opened before this line had any move. They
    /// become alternatives of the first move the line receives.
    parked: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildState {
    Idle,
    Building,
    Failed,
}

#[derive(Debug)]
pub struct TreeBuilder {
    state: BuildState,
    tags: TagMap,
    nodes: Vec<PendingNode>,
    slots: Vec<DepthSlot>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            state: BuildState::Idle,
            tags: TagMap::new(),
            nodes: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Current variation depth, 0 on the mainline.
    pub fn depth(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    /// Feeds one event. Returns the finished game on `ExitGame`.
    pub fn handle(&mut self, event: PgnEvent) -> Result<Option<GameRecord>, TreeError> {
        match event {
            PgnEvent::EnterGame => {
                self.enter_game();
                Ok(None)
            }
            PgnEvent::TagPair { name, value } => self.tag_pair(name, &value).map(|_| None),
            PgnEvent::MoveNumber { number, white } => {
                self.move_number(number, white).map(|_| None)
            }
            PgnEvent::Move(text) => self.push_move(text).map(|_| None),
            PgnEvent::EnterVariation => self.enter_variation().map(|_| None),
            PgnEvent::ExitVariation => self.exit_variation().map(|_| None),
            PgnEvent::Termination(kind) => self.termination(kind).map(|_| None),
            PgnEvent::ExitGame => self.exit_game().map(Some),
        }
    }

    pub fn enter_game(&mut self) {
        self.tags.clear();
        self.nodes.clear();
        self.slots.clear();
        self.slots.push(DepthSlot::default());
        self.state = BuildState::Building;
    }

    pub fn tag_pair(&mut self, name: impl Into<String>, raw_value: &str) -> Result<(), TreeError> {
        self.ensure_building()?;
        self.tags.insert(name, strip_quotes(raw_value));
        Ok(())
    }

    pub fn move_number(&mut self, number: u32, white: bool) -> Result<(), TreeError> {
        self.current_slot()?.turn = Some(Turn::new(number, white));
        Ok(())
    }

    pub fn push_move(&mut self, text: impl Into<String>) -> Result<(), TreeError> {
        self.ensure_building()?;
        let Some(slot) = self.slots.last_mut() else {
            return Err(TreeError::NoGameInProgress);
        };
        let turn = slot.turn.unwrap_or_default();

        let id = self.nodes.len();
        let mut node = PendingNode {
            text: text.into(),
            turn,
            next: None,
            variations: Vec::new(),
            termination: None,
        };

        match slot.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => {
                slot.root = Some(id);
                node.variations = mem::take(&mut slot.parked);
            }
        }

        slot.tail = Some(id);
        slot.turn = Some(turn.advance());
        self.nodes.push(node);
        Ok(())
    }

    pub fn enter_variation(&mut self) -> Result<(), TreeError> {
        let parent = self.current_slot()?;
        let previous = parent.tail;
        let parent_turn = parent.turn;

        // A variation replaces the move it branches from, so it starts on
        // that move's turn until a move number says otherwise.
        let turn = match previous {
            Some(id) => Some(self.nodes[id].turn),
            None => parent_turn,
        };

        self.slots.push(DepthSlot {
            turn,
            previous,
            ..DepthSlot::default()
        });
        Ok(())
    }

    pub fn exit_variation(&mut self) -> Result<(), TreeError> {
        self.ensure_building()?;
        if self.slots.len() < 2 {
            return self.fail(TreeError::UnbalancedExit);
        }

        let depth = self.depth();
        let Some(closed) = self.slots.pop() else {
            return self.fail(TreeError::UnbalancedExit);
        };
        let Some(root) = closed.root else {
            return self.fail(TreeError::EmptyVariation { depth });
        };

        let Some(parent) = self.slots.last_mut() else {
            return self.fail(TreeError::UnbalancedExit);
        };
        match (closed.previous, parent.root) {
            (Some(previous), _) => self.nodes[previous].variations.push(root),
            (None, Some(parent_root)) => self.nodes[parent_root].variations.push(root),
            (None, None) => {
                log::debug(format!(
                    "variation at depth {depth} opened before any move; parking it"
                ));
                parent.parked.push(root);
            }
        }
        Ok(())
    }

    pub fn termination(&mut self, kind: Termination) -> Result<(), TreeError> {
        self.ensure_building()?;
        if let Some(tail) = self.slots.first().and_then(|slot| slot.tail) {
            self.nodes[tail].termination = Some(kind);
        }
        Ok(())
    }

    pub fn exit_game(&mut self) -> Result<GameRecord, TreeError> {
        self.ensure_building()?;
        if self.slots.len() > 1 {
            let open = self.slots.len() - 1;
            return self.fail(TreeError::UnclosedVariation { open });
        }

        let mainline = self.slots.pop().unwrap_or_default();
        if mainline.root.is_none() && !mainline.parked.is_empty() {
            return self.fail(TreeError::OrphanVariation { depth: 0 });
        }

        let root = mainline.root.and_then(|id| self.materialize(id));
        self.nodes.clear();
        self.state = BuildState::Idle;

        Ok(GameRecord {
            tags: mem::take(&mut self.tags),
            root,
        })
    }

    fn ensure_building(&self) -> Result<(), TreeError> {
        match self.state {
            BuildState::Building => Ok(()),
            BuildState::Idle | BuildState::Failed => Err(TreeError::NoGameInProgress),
        }
    }

    fn current_slot(&mut self) -> Result<&mut DepthSlot, TreeError> {
        self.ensure_building()?;
        self.slots.last_mut().ok_or(TreeError::NoGameInProgress)
    }

    fn fail<T>(&mut self, error: TreeError) -> Result<T, TreeError> {
        self.state = BuildState::Failed;
        self.nodes.clear();
        self.slots.clear();
        Err(error)
    }

    /// Converts the arena line starting at `id` into an owned tree. Lines are
    /// walked iteratively; only variations recurse.
    fn materialize(&mut self, id: NodeId) -> Option<MoveTreeNode> {
        let chain: Vec<NodeId> =
            std::iter::successors(Some(id), |&node| self.nodes[node].next).collect();

        let mut built: Option<MoveTreeNode> = None;
        for &node_id in chain.iter().rev() {
            let pending = &mut self.nodes[node_id];
            let text = mem::take(&mut pending.text);
            let variation_ids = mem::take(&mut pending.variations);
            let turn = pending.turn;
            let termination = pending.termination;

            let mut node = MoveTreeNode::new(text, turn);
            node.termination = termination;
            node.variations = variation_ids
                .into_iter()
                .filter_map(|variation| self.materialize(variation))
                .collect();
            node.next = built.take().map(Box::new);
            built = Some(node);
        }
        built
    }
}

/// Drives a complete event stream for a single game.
pub fn build_game(events: impl IntoIterator<Item = PgnEvent>) -> Result<GameRecord, TreeError> {
    let mut builder = TreeBuilder::new();
    for event in events {
        if let Some(record) = builder.handle(event)? {
            return Ok(record);
        }
    }
    builder.exit_game()
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}
