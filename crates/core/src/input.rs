//! Keyboard input as the coordinator sees it.

/// A pressed key, normalised from the DOM `KeyboardEvent.key` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// A printable character, lowercased.
    Char(char),
    Other,
}

impl Key {
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                    _ => Key::Other,
                }
            }
        }
    }

    /// The digit character, for shortcut lookup.
    pub fn digit(self) -> Option<char> {
        match self {
            Key::Char(c) if c.is_ascii_digit() => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Focus is inside an `<input>` or `<textarea>`.
    pub in_text_field: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            in_text_field: false,
        }
    }

    pub fn in_text_field(key: Key) -> Self {
        Self {
            key,
            in_text_field: true,
        }
    }
}
