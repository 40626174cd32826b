//! Keyboard state
//!
//! The host records raw key names (as reported by `KeyboardEvent.key`)
//! between frames; the simulation only ever sees the directives derived here.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
    Reveal,
    SlowTime,
}

impl Key {
    /// Map a `KeyboardEvent.key` name; unrecognized names map to `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " | "Space" | "Spacebar" | "ArrowUp" => Some(Key::Jump),
            "d" | "D" => Some(Key::Reveal),
            "t" | "T" => Some(Key::SlowTime),
            _ => None,
        }
    }
}

/// The set of key names currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    names: HashSet<String>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn release(&mut self, name: &str) {
        self.names.remove(name);
    }

    /// Drop everything (focus lost, so key-up events will never arrive)
    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Is any name mapping to `key` held?
    pub fn is_held(&self, key: Key) -> bool {
        self.names.iter().any(|n| Key::from_name(n) == Some(key))
    }

    /// Interpret the held set as this frame's directives
    pub fn directives(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            jump: self.is_held(Key::Jump),
            reveal: self.is_held(Key::Reveal),
            slow_time: self.is_held(Key::SlowTime),
            any_key: !self.is_empty(),
        }
    }
}

impl<'a> FromIterator<&'a str> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut keys = HeldKeys::new();
        for name in iter {
            keys.press(name);
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name(" "), Some(Key::Jump));
        assert_eq!(Key::from_name("D"), Some(Key::Reveal));
        assert_eq!(Key::from_name("t"), Some(Key::SlowTime));
        assert_eq!(Key::from_name("q"), None);
        assert_eq!(Key::from_name("Shift"), None);
    }

    #[test]
    fn test_directives() {
        let keys: HeldKeys = ["ArrowRight", " ", "d"].into_iter().collect();
        let input = keys.directives();
        assert!(input.right && input.jump && input.reveal);
        assert!(!input.left && !input.slow_time);
        assert!(input.any_key);
    }

    #[test]
    fn test_unrecognized_keys_only_count_as_any_key() {
        let keys: HeldKeys = ["q", "Shift"].into_iter().collect();
        assert_eq!(
            keys.directives(),
            TickInput {
                any_key: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_press_release_clear() {
        let mut keys = HeldKeys::new();
        keys.press("ArrowLeft");
        keys.press("ArrowLeft");
        assert!(keys.is_held(Key::Left));
        keys.release("ArrowLeft");
        assert!(keys.is_empty());

        keys.press("t");
        keys.press("ArrowRight");
        keys.clear();
        assert_eq!(keys.directives(), TickInput::default());
    }
}
