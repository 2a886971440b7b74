//! Label and resource lookup for editor actions.
//!
//! Actions are described by a resource key such as `edit.alignNorth`. The
//! bundle stores flat `<key>.<property>` strings, mirroring a classic
//! properties-file layout:
//!
//! - `<key>.text` - display name
//! - `<key>.toolTipText` - description
//! - `<key>.icon` - icon resource path
//! - `<key>.accelerator` - key stroke, e.g. `ctrl UP`

use std::collections::HashMap;

/// Presentation metadata for one action, resolved from a [`Labels`] bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLabels {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub accelerator: Option<String>,
}

/// A flat bundle of label strings keyed by resource key.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    strings: HashMap<String, String>,
}

const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("edit.align.text", "Align"),
    ("edit.alignNorth.text", "Align Top"),
    (
        "edit.alignNorth.toolTipText",
        "Align the top edges of the selected figures",
    ),
    ("edit.alignNorth.icon", "icons/align-north.png"),
    ("edit.alignNorth.accelerator", "ctrl UP"),
    ("edit.alignSouth.text", "Align Bottom"),
    (
        "edit.alignSouth.toolTipText",
        "Align the bottom edges of the selected figures",
    ),
    ("edit.alignSouth.icon", "icons/align-south.png"),
    ("edit.alignSouth.accelerator", "ctrl DOWN"),
    ("edit.alignEast.text", "Align Right"),
    (
        "edit.alignEast.toolTipText",
        "Align the right edges of the selected figures",
    ),
    ("edit.alignEast.icon", "icons/align-east.png"),
    ("edit.alignEast.accelerator", "ctrl RIGHT"),
    ("edit.alignWest.text", "Align Left"),
    (
        "edit.alignWest.toolTipText",
        "Align the left edges of the selected figures",
    ),
    ("edit.alignWest.icon", "icons/align-west.png"),
    ("edit.alignWest.accelerator", "ctrl LEFT"),
    ("edit.alignHorizontal.text", "Align Horizontal Centers"),
    (
        "edit.alignHorizontal.toolTipText",
        "Align the horizontal centers of the selected figures",
    ),
    ("edit.alignHorizontal.icon", "icons/align-horizontal.png"),
    ("edit.alignHorizontal.accelerator", "ctrl H"),
    ("edit.alignVertical.text", "Align Vertical Centers"),
    (
        "edit.alignVertical.toolTipText",
        "Align the vertical centers of the selected figures",
    ),
    ("edit.alignVertical.icon", "icons/align-vertical.png"),
    ("edit.alignVertical.accelerator", "ctrl V"),
];

impl Labels {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in English bundle for the drawing editor.
    pub fn builtin() -> Self {
        let strings = DEFAULT_LABELS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { strings }
    }

    /// Looks up a raw string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Looks up a string, falling back to the key itself so missing labels
    /// stay visible in the UI.
    pub fn get_string(&self, key: &str) -> String {
        match self.get(key) {
            Some(value) => value.to_string(),
            None => {
                tracing::warn!("Missing label for resource key {}", key);
                key.to_string()
            }
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Applies overrides on top of this bundle.
    pub fn merge<'a, I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (key, value) in overrides {
            self.strings.insert(key.clone(), value.clone());
        }
    }

    /// Resolves the presentation metadata for an action key.
    pub fn action_labels(&self, key: &str) -> ActionLabels {
        let lookup = |suffix: &str| self.get(&format!("{}.{}", key, suffix)).map(str::to_string);
        ActionLabels {
            name: lookup("text"),
            description: lookup("toolTipText"),
            icon: lookup("icon"),
            accelerator: lookup("accelerator"),
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
