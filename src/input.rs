//! Per-tick input snapshot
//!
//! The platform layer polls the keyboard and hands the core one
//! [`InputFrame`] per tick: discrete key-down events plus the continuous
//! held-key state. The core never talks to an input device directly.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
    Return,
    Backspace,
    /// A printable character, used for name entry
    Char(char),
}

/// One tick's worth of input
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    /// Key-down events since the previous tick, in arrival order
    pub pressed: Vec<Key>,
    /// Keys currently held down
    pub held: HashSet<Key>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event (also marks the key held)
    pub fn press(mut self, key: Key) -> Self {
        self.pressed.push(key);
        self.held.insert(key);
        self
    }

    /// Mark a key as held without an event
    pub fn hold(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Map this frame onto simulation commands.
    ///
    /// Movement follows held state; fire is an edge so one press spawns one
    /// projectile no matter how long the key stays down.
    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            rotate_left: self.is_held(Key::Left),
            rotate_right: self.is_held(Key::Right),
            thrust: self.is_held(Key::Up),
            reverse: self.is_held(Key::Down),
            fire: self.was_pressed(Key::Space),
        }
    }
}
