//! Keyboard shortcuts for editor actions.
//!
//! A [`ShortcutMap`] plays the role of a container's input map: it binds key
//! strokes to action names, and the owner of the actions resolves the name
//! when a stroke arrives.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a key stroke string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyStrokeError {
    #[error("Empty key stroke")]
    Empty,

    #[error("Key stroke '{0}' has no key, only modifiers")]
    MissingKey(String),

    #[error("Unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("Unknown key '{0}'")]
    UnknownKey(String),
}

/// A non-modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// A letter or digit, stored upper-case.
    Char(char),
}

impl FromStr for Key {
    type Err = ParseKeyStrokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UP" => Ok(Key::Up),
            "DOWN" => Ok(Key::Down),
            "LEFT" => Ok(Key::Left),
            "RIGHT" => Ok(Key::Right),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphanumeric() => Ok(Key::Char(c)),
                    _ => Err(ParseKeyStrokeError::UnknownKey(s.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => write!(f, "UP"),
            Key::Down => write!(f, "DOWN"),
            Key::Left => write!(f, "LEFT"),
            Key::Right => write!(f, "RIGHT"),
            Key::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Modifier keys held with a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
        meta: false,
    };
}

/// A key plus modifiers, e.g. `ctrl UP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyStroke {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(key: Key) -> Self {
        Self::new(key, Modifiers::CTRL)
    }
}

impl FromStr for KeyStroke {
    type Err = ParseKeyStrokeError;

    /// Accepts space- or plus-separated tokens: `"ctrl UP"`, `"Ctrl+H"`,
    /// `"shift alt LEFT"`. The last token is the key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == '+')
            .filter(|t| !t.is_empty())
            .collect();

        let (key_token, modifier_tokens) = match tokens.split_last() {
            Some(parts) => parts,
            None => return Err(ParseKeyStrokeError::Empty),
        };

        let mut modifiers = Modifiers::NONE;
        for token in modifier_tokens {
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                "meta" | "cmd" | "super" => modifiers.meta = true,
                _ => return Err(ParseKeyStrokeError::UnknownModifier(token.to_string())),
            }
        }

        let key = match key_token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "shift" | "alt" | "meta" | "cmd" | "super" => {
                return Err(ParseKeyStrokeError::MissingKey(s.to_string()))
            }
            _ => key_token.parse()?,
        };

        Ok(Self { key, modifiers })
    }
}

impl fmt::Display for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (held, name) in [
            (m.ctrl, "ctrl"),
            (m.shift, "shift"),
            (m.alt, "alt"),
            (m.meta, "meta"),
        ] {
            if held {
                write!(f, "{} ", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// Key stroke to action-name bindings for one UI container.
#[derive(Debug, Clone, Default)]
pub struct ShortcutMap {
    container: String,
    bindings: HashMap<KeyStroke, String>,
}

impl ShortcutMap {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            bindings: HashMap::new(),
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    /// Binds `stroke` to `action`, returning the action it replaced.
    pub fn register(&mut self, stroke: KeyStroke, action: impl Into<String>) -> Option<String> {
        let action = action.into();
        let previous = self.bindings.insert(stroke, action.clone());
        if let Some(old) = &previous {
            if *old != action {
                tracing::warn!(
                    "Shortcut {} on {} rebound from {} to {}",
                    stroke,
                    self.container,
                    old,
                    action
                );
            }
        }
        previous
    }

    pub fn unregister(&mut self, stroke: &KeyStroke) -> Option<String> {
        self.bindings.remove(stroke)
    }

    /// Action bound to `stroke`, if any.
    pub fn lookup(&self, stroke: &KeyStroke) -> Option<&str> {
        self.bindings.get(stroke).map(String::as_str)
    }

    /// Stroke bound to `action`, if any.
    pub fn stroke_for(&self, action: &str) -> Option<KeyStroke> {
        self.bindings
            .iter()
            .find(|(_, name)| name.as_str() == action)
            .map(|(stroke, _)| *stroke)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
