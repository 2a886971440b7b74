use drawkit_core::Rect;
use drawkit_designer::{
    CompositeCommand, CompositeEditScope, DesignerCommand, Drawing, MoveShapes, UndoRedoManager,
    UndoableEditSink,
};

fn move_edit(name: &str, id: u64, dx: f64, dy: f64) -> CompositeCommand {
    CompositeCommand {
        commands: vec![DesignerCommand::MoveShapes(MoveShapes {
            ids: vec![id],
            dx,
            dy,
        })],
        name: name.to_string(),
    }
}

#[test]
fn test_undo_redo_manager_creation() {
    let manager = UndoRedoManager::new(50);
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_depth(), 0);
    assert_eq!(manager.redo_depth(), 0);
}

#[test]
fn test_record_through_sink() {
    let mut manager = UndoRedoManager::default();
    manager.begin_edit("Align");
    assert_eq!(manager.open_edit(), Some("Align"));
    manager.end_edit(move_edit("Align", 1, 1.0, 0.0));

    assert_eq!(manager.open_edit(), None);
    assert!(manager.can_undo());
    assert_eq!(manager.undo_depth(), 1);
    assert_eq!(manager.undo_label(), Some("Align"));
}

#[test]
fn test_empty_edit_is_discarded() {
    let mut manager = UndoRedoManager::default();
    {
        let _scope = CompositeEditScope::open(&mut manager, "Align");
    }
    assert!(!manager.can_undo());
    assert_eq!(manager.open_edit(), None);
}

#[test]
fn test_undo_and_redo_move_figures() {
    let mut drawing = Drawing::new();
    let id = drawing.add_shape(Rect::new(0.0, 0.0, 10.0, 10.0));
    drawing.get_shape_mut(id).unwrap().bounds = Rect::new(3.0, 4.0, 10.0, 10.0);

    let mut manager = UndoRedoManager::default();
    manager.begin_edit("Move");
    manager.end_edit(move_edit("Move", id, 3.0, 4.0));

    assert_eq!(manager.undo(&mut drawing).as_deref(), Some("Move"));
    assert_eq!(drawing.get_shape(id).unwrap().bounds, Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(manager.redo_label(), Some("Move"));

    assert_eq!(manager.redo(&mut drawing).as_deref(), Some("Move"));
    assert_eq!(drawing.get_shape(id).unwrap().bounds, Rect::new(3.0, 4.0, 10.0, 10.0));
    assert!(manager.undo(&mut drawing).is_some());
    assert!(manager.undo(&mut drawing).is_none());
}

#[test]
fn test_new_edit_clears_redo() {
    let mut drawing = Drawing::new();
    let id = drawing.add_shape(Rect::new(0.0, 0.0, 1.0, 1.0));
    let mut manager = UndoRedoManager::default();

    manager.end_edit(move_edit("First", id, 1.0, 0.0));
    manager.undo(&mut drawing);
    assert!(manager.can_redo());

    manager.end_edit(move_edit("Second", id, 0.0, 1.0));
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_label(), Some("Second"));
}

#[test]
fn test_undo_limit() {
    let mut manager = UndoRedoManager::new(3);
    for i in 0..5 {
        manager.end_edit(move_edit(&format!("Edit {}", i), 1, 1.0, 0.0));
    }
    assert_eq!(manager.undo_depth(), 3);
    assert_eq!(manager.undo_label(), Some("Edit 4"));

    // The oldest edits are the ones dropped
    let mut drawing = Drawing::new();
    drawing.add_shape(Rect::new(0.0, 0.0, 1.0, 1.0));
    let mut undone = Vec::new();
    while let Some(label) = manager.undo(&mut drawing) {
        undone.push(label);
    }
    assert_eq!(undone, ["Edit 4", "Edit 3", "Edit 2"]);
}

#[test]
fn test_undo_skips_missing_shapes() {
    let mut drawing = Drawing::new();
    let kept = drawing.add_shape(Rect::new(10.0, 0.0, 1.0, 1.0));
    let gone = drawing.add_shape(Rect::new(10.0, 5.0, 1.0, 1.0));
    let mut manager = UndoRedoManager::default();

    let mut edit = move_edit("Align", kept, 10.0, 0.0);
    edit.commands.push(DesignerCommand::MoveShapes(MoveShapes {
        ids: vec![gone],
        dx: 10.0,
        dy: 0.0,
    }));
    manager.end_edit(edit);
    drawing.remove_shape(gone);

    manager.undo(&mut drawing);
    assert_eq!(drawing.get_shape(kept).unwrap().bounds.x, 0.0);
}

#[test]
fn test_clear() {
    let mut manager = UndoRedoManager::default();
    manager.end_edit(move_edit("Move", 1, 1.0, 0.0));
    manager.clear();
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
}
