use drawkit_core::{transform_figure, DrawingView, FigureId, Translation};

/// Undoable edits recorded against a drawing view.
///
/// Commands are recorded after the mutation has happened; `apply` replays
/// them (redo) and `undo` reverts them.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    MoveShapes(MoveShapes),
    CompositeCommand(CompositeCommand),
}

/// A batch of commands that undo and redo as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCommand {
    pub commands: Vec<DesignerCommand>,
    pub name: String,
}

impl CompositeCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            commands: Vec::new(),
            name: name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn apply(&mut self, view: &mut dyn DrawingView) {
        for sub_cmd in &mut self.commands {
            sub_cmd.apply(view);
        }
    }

    pub fn undo(&mut self, view: &mut dyn DrawingView) {
        for sub_cmd in self.commands.iter_mut().rev() {
            sub_cmd.undo(view);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveShapes {
    pub ids: Vec<FigureId>,
    pub dx: f64,
    pub dy: f64,
}

impl MoveShapes {
    fn translation(&self) -> Translation {
        Translation::new(self.dx, self.dy)
    }
}

fn move_figures(view: &mut dyn DrawingView, ids: &[FigureId], t: Translation) {
    for id in ids {
        match view.figure_mut(*id) {
            Some(figure) => transform_figure(figure, t),
            None => tracing::warn!("Shape {} no longer exists, skipping move", id),
        }
    }
}

impl DesignerCommand {
    pub fn apply(&mut self, view: &mut dyn DrawingView) {
        match self {
            DesignerCommand::MoveShapes(cmd) => {
                move_figures(view, &cmd.ids, cmd.translation());
            }
            DesignerCommand::CompositeCommand(cmd) => cmd.apply(view),
        }
    }

    pub fn undo(&mut self, view: &mut dyn DrawingView) {
        match self {
            DesignerCommand::MoveShapes(cmd) => {
                move_figures(view, &cmd.ids, cmd.translation().inverse());
            }
            DesignerCommand::CompositeCommand(cmd) => cmd.undo(view),
        }
    }
}

/// Receiver of composite undoable edits, typically an undo manager.
pub trait UndoableEditSink {
    /// A composite edit labeled `label` has been opened.
    fn begin_edit(&mut self, label: &str);

    /// The composite edit opened by the matching `begin_edit` is complete.
    fn end_edit(&mut self, edit: CompositeCommand);
}

/// Open composite edit that is handed to its sink when dropped.
///
/// The edit is closed on every exit path, including early returns.
pub struct CompositeEditScope<'a, S: UndoableEditSink + ?Sized> {
    sink: &'a mut S,
    edit: Option<CompositeCommand>,
}

impl<'a, S: UndoableEditSink + ?Sized> CompositeEditScope<'a, S> {
    pub fn open(sink: &'a mut S, label: impl Into<String>) -> Self {
        let edit = CompositeCommand::new(label);
        sink.begin_edit(&edit.name);
        Self {
            sink,
            edit: Some(edit),
        }
    }

    /// Records a command that has already been applied.
    pub fn record(&mut self, cmd: DesignerCommand) {
        if let Some(edit) = self.edit.as_mut() {
            edit.commands.push(cmd);
        }
    }

    pub fn len(&self) -> usize {
        self.edit.as_ref().map_or(0, |e| e.commands.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: UndoableEditSink + ?Sized> Drop for CompositeEditScope<'_, S> {
    fn drop(&mut self) {
        if let Some(edit) = self.edit.take() {
            self.sink.end_edit(edit);
        }
    }
}
