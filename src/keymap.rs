//! Key bindings that drive mouse emulation.
//!
//! The bindings are a table from evdev key codes to a [`KeyRole`]. The
//! translator only consults the table, so changing a binding never touches
//! the state machine.

use crate::event::{BTN_LEFT, BTN_MIDDLE, BTN_RIGHT};

// evdev key codes used by the default bindings
const KEY_W: u16 = 17;
const KEY_E: u16 = 18;
const KEY_R: u16 = 19;
const KEY_S: u16 = 31;
const KEY_D: u16 = 32;
const KEY_F: u16 = 33;
const KEY_J: u16 = 36;
const KEY_K: u16 = 37;
const KEY_L: u16 = 38;
const KEY_X: u16 = 45;
const KEY_C: u16 = 46;
const KEY_V: u16 = 47;
const KEY_RIGHTMETA: u16 = 126;

/// One cell of the 3x3 movement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    /// Grid center. Produces zero-valued motion.
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Unit step `(dx, dy)`, with y growing downwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::West => (-1, 0),
            Direction::Center => (0, 0),
            Direction::East => (1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Middle,
    Right,
}

impl Button {
    /// The evdev `BTN_*` code.
    pub const fn code(self) -> u16 {
        match self {
            Button::Left => BTN_LEFT,
            Button::Middle => BTN_MIDDLE,
            Button::Right => BTN_RIGHT,
        }
    }
}

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Gates movement and button remapping while held.
    Modifier,
    /// Moves the pointer while the modifier is held.
    Move(Direction),
    /// Clicks a mouse button while the modifier is held.
    Click(Button),
}

/// Table of bound key codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    modifier: u16,
    bindings: Vec<(u16, KeyRole)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new(
            KEY_RIGHTMETA,
            vec![
                (KEY_W, KeyRole::Move(Direction::NorthWest)),
                (KEY_E, KeyRole::Move(Direction::North)),
                (KEY_R, KeyRole::Move(Direction::NorthEast)),
                (KEY_S, KeyRole::Move(Direction::West)),
                (KEY_D, KeyRole::Move(Direction::Center)),
                (KEY_F, KeyRole::Move(Direction::East)),
                (KEY_X, KeyRole::Move(Direction::SouthWest)),
                (KEY_C, KeyRole::Move(Direction::South)),
                (KEY_V, KeyRole::Move(Direction::SouthEast)),
                (KEY_J, KeyRole::Click(Button::Left)),
                (KEY_K, KeyRole::Click(Button::Middle)),
                (KEY_L, KeyRole::Click(Button::Right)),
            ],
        )
    }
}

impl Keymap {
    /// Build a keymap from a modifier key and a list of bindings.
    ///
    /// Any binding for the modifier code itself is ignored.
    pub fn new(modifier: u16, bindings: Vec<(u16, KeyRole)>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter(|(code, _)| *code != modifier)
            .collect();
        Self { modifier, bindings }
    }

    /// Key code of the modifier.
    pub fn modifier(&self) -> u16 {
        self.modifier
    }

    /// Look up the role of a key code.
    pub fn role(&self, code: u16) -> Option<KeyRole> {
        if code == self.modifier {
            return Some(KeyRole::Modifier);
        }
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, role)| *role)
    }
}
