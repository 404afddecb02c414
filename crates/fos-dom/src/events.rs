//! DOM Events
//!
//! Keyboard input events as delivered to window-level listeners.

use std::fmt;

/// `KeyboardEvent.key` value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Tab,
    /// Single printable character
    Character(char),
    /// Any other named key (`ArrowUp`, `F5`, ...)
    Named(String),
}

impl Key {
    /// Parse a DOM `key` string
    pub fn parse(s: &str) -> Self {
        match s {
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Named(s.to_string()),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escape => f.write_str("Escape"),
            Self::Tab => f.write_str("Tab"),
            Self::Character(c) => write!(f, "{}", c),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Keyboard event
#[derive(Debug, Clone)]
pub struct KeyboardEvent {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub cancelable: bool,
    default_prevented: bool,
}

impl KeyboardEvent {
    /// Create a cancelable `keydown` event
    pub fn keydown(key: &str) -> Self {
        Self::new(Key::parse(key))
    }

    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
            cancelable: true,
            default_prevented: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("Escape"), Key::Escape);
        assert_eq!(Key::parse("Esc"), Key::Escape);
        assert_eq!(Key::parse("Tab"), Key::Tab);
        assert_eq!(Key::parse("a"), Key::Character('a'));
        assert_eq!(Key::parse("ArrowUp"), Key::Named("ArrowUp".to_string()));
        assert_eq!(Key::parse("ArrowUp").to_string(), "ArrowUp");
        assert_eq!(Key::parse("Enter"), Key::Named("Enter".to_string()));
    }

    #[test]
    fn test_prevent_default() {
        let mut event = KeyboardEvent::keydown("Tab").with_shift();
        assert!(event.shift);
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());

        let mut passive = KeyboardEvent::keydown("Tab");
        passive.cancelable = false;
        passive.prevent_default();
        assert!(!passive.is_default_prevented());
    }
}
