//! Commands that align the selected shapes.
//!
//! One [`AlignAction`] exists per [`AlignStrategy`]. The action carries its
//! presentation (name, description, icon, accelerator) and an enabled flag;
//! the drawing view and undo sink are passed in on every invocation.

use crate::alignment::AlignStrategy;
use crate::commands::{CompositeEditScope, DesignerCommand, MoveShapes, UndoableEditSink};
use crate::shortcuts::{KeyStroke, ShortcutMap};
use drawkit_core::DrawingView;
use drawkit_settings::Labels;

/// Resource key of the undo label shared by all alignment edits.
pub const ALIGN_EDIT_KEY: &str = "edit.align.text";

/// Outcome of one alignment invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignReport {
    /// Transformable shapes the strategy was applied to.
    pub aligned: usize,
    /// Shapes that actually changed position.
    pub moved: usize,
    /// Selected shapes skipped because they are not transformable.
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct AlignAction {
    strategy: AlignStrategy,
    name: String,
    description: Option<String>,
    icon: Option<String>,
    accelerator: KeyStroke,
    edit_label: String,
    enabled: bool,
}

impl AlignAction {
    /// Creates a disabled action configured from `labels`.
    pub fn new(strategy: AlignStrategy, labels: &Labels) -> Self {
        let mut action = Self {
            strategy,
            name: strategy.resource_key().to_string(),
            description: None,
            icon: None,
            accelerator: strategy.default_accelerator(),
            edit_label: String::new(),
            enabled: false,
        };
        action.configure_action(labels);
        action
    }

    /// Applies name, description, icon, accelerator and edit label from the
    /// label bundle.
    ///
    /// An accelerator that fails to parse keeps the strategy's default.
    pub fn configure_action(&mut self, labels: &Labels) {
        let key = self.strategy.resource_key();
        let action_labels = labels.action_labels(key);

        self.name = action_labels.name.unwrap_or_else(|| key.to_string());
        self.description = action_labels.description;
        self.icon = action_labels.icon;
        self.accelerator = match action_labels.accelerator.as_deref().map(str::parse::<KeyStroke>) {
            Some(Ok(stroke)) => stroke,
            Some(Err(e)) => {
                tracing::warn!("Invalid accelerator for {}: {}", key, e);
                self.strategy.default_accelerator()
            }
            None => self.strategy.default_accelerator(),
        };
        self.edit_label = labels.get_string(ALIGN_EDIT_KEY);
    }

    pub fn strategy(&self) -> AlignStrategy {
        self.strategy
    }

    /// Action name used for shortcut bindings.
    pub fn action_key(&self) -> &'static str {
        self.strategy.resource_key()
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn accelerator(&self) -> KeyStroke {
        self.accelerator
    }

    /// Label of the undoable edit produced by `perform`.
    pub fn edit_label(&self) -> &str {
        &self.edit_label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Re-evaluates enablement: a view must be attached and enabled, and
    /// more than one shape must be selected.
    pub fn update_enabled_state(&mut self, view: Option<&dyn DrawingView>) -> bool {
        self.enabled = match view {
            Some(view) => view.is_enabled() && view.selection_count() > 1,
            None => false,
        };
        self.enabled
    }

    /// Aligns the selected shapes of `view` as one undoable edit.
    ///
    /// The selection bounding box is computed once, before any shape moves.
    /// Shapes that are not transformable are left untouched, and shapes
    /// already in place (up to rounding) are not moved. An empty
    /// selection is a no-op, but the edit is still opened and closed.
    pub fn perform<S>(&self, view: &mut dyn DrawingView, undo: &mut S) -> AlignReport
    where
        S: UndoableEditSink + ?Sized,
    {
        let mut edit = CompositeEditScope::open(undo, self.edit_label.as_str());
        let mut report = AlignReport::default();

        let Some(bounds) = view.selection_bounds() else {
            tracing::debug!("{}: nothing selected", self.strategy);
            return report;
        };

        let magnitude = bounds.magnitude();
        for id in view.selected_ids() {
            let Some(figure) = view.figure_mut(id) else {
                continue;
            };
            if !figure.is_transformable() {
                report.skipped += 1;
                continue;
            }

            figure.will_change();
            let t = self.strategy.translation(&bounds, &figure.bounds());
            let moves = !t.is_negligible(magnitude);
            if moves {
                figure.translate(t);
            }
            figure.changed();
            report.aligned += 1;

            if moves {
                edit.record(DesignerCommand::MoveShapes(MoveShapes {
                    ids: vec![id],
                    dx: t.dx,
                    dy: t.dy,
                }));
                report.moved += 1;
            }
        }

        tracing::info!(
            "Align {}: {} moved, {} aligned, {} skipped",
            self.strategy,
            report.moved,
            report.aligned,
            report.skipped
        );
        report
    }

    /// Binds this action's accelerator in `map`.
    pub fn register_shortcut(&self, map: &mut ShortcutMap) {
        map.register(self.accelerator, self.action_key());
    }
}

/// The six alignment actions of an editor.
#[derive(Debug, Clone)]
pub struct AlignActions {
    actions: [AlignAction; 6],
}

impl AlignActions {
    pub fn new(labels: &Labels) -> Self {
        Self {
            actions: AlignStrategy::ALL.map(|s| AlignAction::new(s, labels)),
        }
    }

    pub fn get(&self, strategy: AlignStrategy) -> &AlignAction {
        // ALL is declared in discriminant order
        &self.actions[strategy as usize]
    }

    /// Looks up an action by its action key (e.g. `edit.alignNorth`).
    pub fn by_key(&self, key: &str) -> Option<&AlignAction> {
        self.actions.iter().find(|a| a.action_key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlignAction> {
        self.actions.iter()
    }

    pub fn update_enabled_state(&mut self, view: Option<&dyn DrawingView>) {
        for action in &mut self.actions {
            action.update_enabled_state(view);
        }
    }

    pub fn register_shortcuts(&self, map: &mut ShortcutMap) {
        for action in &self.actions {
            action.register_shortcut(map);
        }
    }
}
