use std::borrow::Cow;

/// How move labels spell pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Plain SAN letters, as recorded in the game.
    #[default]
    San,
    /// Unicode figurines; white glyphs for white moves, black glyphs for black.
    Figurine,
}

impl Notation {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "san" | "" => Some(Self::San),
            "figurine" | "fan" => Some(Self::Figurine),
            _ => None,
        }
    }

    pub fn render(self, move_text: &str, white: bool) -> Cow<'_, str> {
        match self {
            Self::San => Cow::Borrowed(move_text),
            Self::Figurine => Cow::Owned(to_figurine(move_text, white)),
        }
    }
}

fn figurine(letter: char, white: bool) -> Option<char> {
    let glyph = match (letter, white) {
        ('K', true) => '♔',
        ('Q', true) => '♕',
        ('R', true) => '♖',
        ('B', true) => '♗',
        ('N', true) => '♘',
        ('K', false) => '♚',
        ('Q', false) => '♛',
        ('R', false) => '♜',
        ('B', false) => '♝',
        ('N', false) => '♞',
        _ => return None,
    };
    Some(glyph)
}

/// Replaces SAN piece letters (promotion pieces included) with figurines.
pub fn to_figurine(san: &str, white: bool) -> String {
    san.chars()
        .map(|c| figurine(c, white).unwrap_or(c))
        .collect()
}
