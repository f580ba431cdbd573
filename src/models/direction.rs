use serde::{Deserialize, Serialize};

/// Arrow key direction for tile chords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Which physical instance of the zoom trigger key was pressed. The two
/// sides are equivalent triggers; they are tracked separately so the toggle
/// machine can tell same-side and cross-side double-taps apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySide {
    Left,
    Right,
}

impl KeySide {
    pub fn opposite(&self) -> Self {
        match self {
            KeySide::Left => KeySide::Right,
            KeySide::Right => KeySide::Left,
        }
    }
}
