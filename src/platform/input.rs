//! Keyboard polling model
//!
//! The driver reports which keys are currently held; the sim only ever sees
//! the four logical directions.

use serde::{Deserialize, Serialize};

/// One of the four logical directions (screen y axis points down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in screen coordinates
    pub fn delta(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Physical keys the sandbox listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Escape,
    Q,
    Other,
}

impl Key {
    /// Logical direction for movement keys (arrows or WASD)
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::ArrowUp | Key::W => Some(Direction::Up),
            Key::ArrowDown | Key::S => Some(Direction::Down),
            Key::ArrowLeft | Key::A => Some(Direction::Left),
            Key::ArrowRight | Key::D => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Escape | Key::Q)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "arrowup" => Some(Key::ArrowUp),
            "down" | "arrowdown" => Some(Key::ArrowDown),
            "left" | "arrowleft" => Some(Key::ArrowLeft),
            "right" | "arrowright" => Some(Key::ArrowRight),
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            "esc" | "escape" => Some(Key::Escape),
            "q" => Some(Key::Q),
            _ => None,
        }
    }
}

/// Directions held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    /// Collapse a set of physical keys into held directions
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a Key>) -> Self {
        let mut held = Self::default();
        for dir in keys.into_iter().filter_map(Key::direction) {
            held.press(dir);
        }
        held
    }

    pub fn press(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    pub fn with(mut self, dir: Direction) -> Self {
        self.press(dir);
        self
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Held directions in polling order: up, down, left, right.
    ///
    /// Later entries take precedence wherever a policy overwrites state.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .filter(|d| self.is_held(*d))
    }
}
