use std::fmt;

/// Move number plus side to move for one ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub number: u32,
    pub white: bool,
}

impl Default for Turn {
    fn default() -> Self {
        Self {
            number: 1,
            white: true,
        }
    }
}

impl Turn {
    pub const fn new(number: u32, white: bool) -> Self {
        Self { number, white }
    }

    /// Turn of the ply that follows this one.
    pub fn advance(self) -> Self {
        if self.white {
            Self {
                number: self.number,
                white: false,
            }
        } else {
            Self {
                number: self.number.saturating_add(1),
                white: true,
            }
        }
    }

    pub fn number_label(self) -> String {
        if self.white {
            format!("{}.", self.number)
        } else {
            format!("{}...", self.number)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    WhiteWon,
    BlackWon,
    Draw,
    Unknown,
}

impl Termination {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "1-0" => Some(Self::WhiteWon),
            "0-1" => Some(Self::BlackWon),
            "1/2-1/2" | "½-½" => Some(Self::Draw),
            "*" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WhiteWon => "1-0",
            Self::BlackWon => "0-1",
            Self::Draw => "1/2-1/2",
            Self::Unknown => "*",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PGN tag pairs in document order. A repeated name overwrites the earlier
/// value but keeps the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: Vec<(String, String)>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One ply of a recorded game.
///
/// A node owns the node continuing its line (`next`) and every alternative
/// line branching off at its own move (`variations`). Each variation is a
/// root whose first move replaces this node's move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTreeNode {
    pub text: String,
    pub turn: Turn,
    pub next: Option<Box<MoveTreeNode>>,
    pub variations: Vec<MoveTreeNode>,
    pub termination: Option<Termination>,
}

impl MoveTreeNode {
    pub fn new(text: impl Into<String>, turn: Turn) -> Self {
        Self {
            text: text.into(),
            turn,
            next: None,
            variations: Vec::new(),
            termination: None,
        }
    }

    /// Iterates this node and its continuations, without entering variations.
    pub fn line(&self) -> impl Iterator<Item = &MoveTreeNode> {
        std::iter::successors(Some(self), |node| node.next.as_deref())
    }

    /// Number of nodes reachable from here, variations included.
    pub fn count_nodes(&self) -> usize {
        self.line()
            .map(|node| 1 + node.variations.iter().map(Self::count_nodes).sum::<usize>())
            .sum()
    }
}

// Long mainlines would otherwise drop through one stack frame per ply.
impl Drop for MoveTreeNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// One game as built from the event stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRecord {
    pub tags: TagMap,
    pub root: Option<MoveTreeNode>,
}

impl GameRecord {
    pub fn starting_fen(&self) -> Option<&str> {
        self.tags.get("FEN")
    }
}
