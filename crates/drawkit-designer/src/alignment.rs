//! Alignment strategies.
//!
//! Each strategy is a pure function from the selection bounding box and one
//! figure's bounds to the translation that makes the figure flush with the
//! chosen edge or centerline of the box.

use crate::shortcuts::{Key, KeyStroke};
use drawkit_core::{Error, Rect, Result, Translation};
use std::fmt;
use std::str::FromStr;

/// Edge or centerline the selection is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignStrategy {
    /// Top edges (smallest y).
    North,
    /// Bottom edges.
    South,
    /// Right edges.
    East,
    /// Left edges.
    West,
    /// Centers on the vertical line through the middle of the box.
    Horizontal,
    /// Centers on the horizontal line through the middle of the box.
    Vertical,
}

impl AlignStrategy {
    pub const ALL: [AlignStrategy; 6] = [
        AlignStrategy::North,
        AlignStrategy::South,
        AlignStrategy::East,
        AlignStrategy::West,
        AlignStrategy::Horizontal,
        AlignStrategy::Vertical,
    ];

    /// Translation moving `figure` into alignment within `bounds`.
    pub fn translation(&self, bounds: &Rect, figure: &Rect) -> Translation {
        match self {
            AlignStrategy::North => Translation::new(0.0, bounds.y - figure.y),
            AlignStrategy::South => Translation::new(0.0, bounds.max_y() - figure.max_y()),
            AlignStrategy::West => Translation::new(bounds.x - figure.x, 0.0),
            AlignStrategy::East => Translation::new(bounds.max_x() - figure.max_x(), 0.0),
            AlignStrategy::Horizontal => {
                Translation::new(bounds.center_x() - figure.center_x(), 0.0)
            }
            AlignStrategy::Vertical => Translation::new(0.0, bounds.center_y() - figure.center_y()),
        }
    }

    /// Resource key used for labels and shortcut configuration.
    pub fn resource_key(&self) -> &'static str {
        match self {
            AlignStrategy::North => "edit.alignNorth",
            AlignStrategy::South => "edit.alignSouth",
            AlignStrategy::East => "edit.alignEast",
            AlignStrategy::West => "edit.alignWest",
            AlignStrategy::Horizontal => "edit.alignHorizontal",
            AlignStrategy::Vertical => "edit.alignVertical",
        }
    }

    /// Accelerator used when the label bundle does not configure one.
    pub fn default_accelerator(&self) -> KeyStroke {
        match self {
            AlignStrategy::North => KeyStroke::ctrl(Key::Up),
            AlignStrategy::South => KeyStroke::ctrl(Key::Down),
            AlignStrategy::East => KeyStroke::ctrl(Key::Right),
            AlignStrategy::West => KeyStroke::ctrl(Key::Left),
            AlignStrategy::Horizontal => KeyStroke::ctrl(Key::Char('H')),
            AlignStrategy::Vertical => KeyStroke::ctrl(Key::Char('V')),
        }
    }

    pub fn from_resource_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.resource_key() == key)
    }
}

impl fmt::Display for AlignStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlignStrategy::North => "north",
            AlignStrategy::South => "south",
            AlignStrategy::East => "east",
            AlignStrategy::West => "west",
            AlignStrategy::Horizontal => "horizontal",
            AlignStrategy::Vertical => "vertical",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AlignStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "top" => Ok(AlignStrategy::North),
            "south" | "bottom" => Ok(AlignStrategy::South),
            "east" | "right" => Ok(AlignStrategy::East),
            "west" | "left" => Ok(AlignStrategy::West),
            "horizontal" | "center-horizontal" => Ok(AlignStrategy::Horizontal),
            "vertical" | "center-vertical" => Ok(AlignStrategy::Vertical),
            _ => Err(Error::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
