use drawkit_core::{DrawingView, Rect};
use drawkit_designer::{
    AlignAction, AlignStrategy, CompositeCommand, DesignerCommand, Drawing, DrawingObject,
    MoveShapes, UndoableEditSink,
};
use drawkit_settings::Labels;

#[derive(Default)]
struct RecordingSink {
    opened: Vec<String>,
    closed: Vec<CompositeCommand>,
}

impl UndoableEditSink for RecordingSink {
    fn begin_edit(&mut self, label: &str) {
        self.opened.push(label.to_string());
    }

    fn end_edit(&mut self, edit: CompositeCommand) {
        self.closed.push(edit);
    }
}

fn two_shapes() -> (Drawing, u64, u64) {
    let mut drawing = Drawing::new();
    let a = drawing.add_shape(Rect::new(0.0, 0.0, 10.0, 10.0));
    let b = drawing.add_shape(Rect::new(5.0, 20.0, 10.0, 10.0));
    drawing.select_only(&[a, b]).unwrap();
    (drawing, a, b)
}

fn action(strategy: AlignStrategy) -> AlignAction {
    AlignAction::new(strategy, &Labels::builtin())
}

#[test]
fn test_west_example() {
    let (mut drawing, a, b) = two_shapes();
    let mut sink = RecordingSink::default();

    let report = action(AlignStrategy::West).perform(&mut drawing, &mut sink);

    assert_eq!(report.aligned, 2);
    assert_eq!(report.moved, 1);
    assert_eq!(drawing.get_shape(a).unwrap().bounds.x, 0.0);
    assert_eq!(drawing.get_shape(b).unwrap().bounds.x, 0.0);
    assert_eq!(drawing.get_shape(b).unwrap().bounds.y, 20.0);
}

#[test]
fn test_south_example() {
    let (mut drawing, a, b) = two_shapes();
    let mut sink = RecordingSink::default();

    action(AlignStrategy::South).perform(&mut drawing, &mut sink);

    assert_eq!(drawing.get_shape(a).unwrap().bounds, Rect::new(0.0, 20.0, 10.0, 10.0));
    assert_eq!(drawing.get_shape(b).unwrap().bounds, Rect::new(5.0, 20.0, 10.0, 10.0));
    assert_eq!(
        sink.closed[0].commands,
        vec![DesignerCommand::MoveShapes(MoveShapes {
            ids: vec![a],
            dx: 0.0,
            dy: 20.0,
        })]
    );
}

#[test]
fn test_edit_scope_opened_and_closed_once() {
    let (mut drawing, _, _) = two_shapes();
    let mut sink = RecordingSink::default();

    action(AlignStrategy::North).perform(&mut drawing, &mut sink);

    assert_eq!(sink.opened, vec!["Align"]);
    assert_eq!(sink.closed.len(), 1);
    assert_eq!(sink.closed[0].name, "Align");
}

#[test]
fn test_empty_selection_still_wraps_edit() {
    let mut drawing = Drawing::new();
    drawing.add_shape(Rect::new(0.0, 0.0, 10.0, 10.0));
    let mut sink = RecordingSink::default();

    let report = action(AlignStrategy::East).perform(&mut drawing, &mut sink);

    assert_eq!(report.aligned, 0);
    assert_eq!(sink.opened.len(), 1);
    assert_eq!(sink.closed.len(), 1);
    assert!(sink.closed[0].is_empty());
}

#[test]
fn test_non_transformable_shapes_never_move() {
    let mut drawing = Drawing::new();
    let a = drawing.add_shape(Rect::new(0.0, 0.0, 10.0, 10.0));
    let locked = drawing.add_object(
        DrawingObject::new(0, Rect::new(30.0, 40.0, 5.0, 5.0)).locked(true),
    );
    let mut grouped = DrawingObject::new(0, Rect::new(-20.0, 60.0, 5.0, 5.0));
    grouped.group_id = Some(1);
    let grouped = drawing.add_object(grouped);
    drawing.select_all();

    let before_locked = drawing.get_shape(locked).unwrap().clone();
    let before_grouped = drawing.get_shape(grouped).unwrap().clone();

    for strategy in AlignStrategy::ALL {
        let mut sink = RecordingSink::default();
        let report = action(strategy).perform(&mut drawing, &mut sink);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.aligned, 1);
    }

    assert_eq!(drawing.get_shape(locked).unwrap(), &before_locked);
    assert_eq!(drawing.get_shape(grouped).unwrap(), &before_grouped);
    assert!(drawing.get_shape(a).unwrap().revision() > 0);
}

#[test]
fn test_all_non_transformable_selection_is_wrapped_noop() {
    let mut drawing = Drawing::new();
    let a = drawing.add_object(DrawingObject::new(0, Rect::new(0.0, 0.0, 1.0, 1.0)).locked(true));
    let b = drawing.add_object(DrawingObject::new(0, Rect::new(9.0, 9.0, 1.0, 1.0)).locked(true));
    drawing.select_only(&[a, b]).unwrap();
    let mut sink = RecordingSink::default();

    let report = action(AlignStrategy::North).perform(&mut drawing, &mut sink);

    assert_eq!(report.skipped, 2);
    assert_eq!(sink.opened.len(), 1);
    assert!(sink.closed[0].is_empty());
}

#[test]
fn test_bounds_are_computed_once() {
    // Aligning to the center must use the original box even after earlier
    // shapes in the selection have moved.
    let mut drawing = Drawing::new();
    let a = drawing.add_shape(Rect::new(0.0, 0.0, 10.0, 10.0));
    let b = drawing.add_shape(Rect::new(90.0, 0.0, 10.0, 10.0));
    let c = drawing.add_shape(Rect::new(40.0, 0.0, 2.0, 10.0));
    drawing.select_only(&[a, b, c]).unwrap();
    let mut sink = RecordingSink::default();

    action(AlignStrategy::Horizontal).perform(&mut drawing, &mut sink);

    for id in [a, b, c] {
        assert_eq!(drawing.get_shape(id).unwrap().bounds.center_x(), 50.0);
    }
}

#[test]
fn test_change_notifications_for_each_transformable_shape() {
    let (mut drawing, a, b) = two_shapes();
    let mut sink = RecordingSink::default();

    action(AlignStrategy::West).perform(&mut drawing, &mut sink);

    // a did not move but was still notified
    assert_eq!(drawing.get_shape(a).unwrap().revision(), 1);
    assert_eq!(drawing.get_shape(b).unwrap().revision(), 1);
    assert!(!drawing.get_shape(b).unwrap().is_changing());
}

#[test]
fn test_enablement() {
    let mut drawing = Drawing::new();
    let a = drawing.add_shape(Rect::new(0.0, 0.0, 10.0, 10.0));
    let b = drawing.add_shape(Rect::new(5.0, 20.0, 10.0, 10.0));
    let mut north = action(AlignStrategy::North);
    assert!(!north.is_enabled());

    assert!(!north.update_enabled_state(None));

    assert!(!north.update_enabled_state(Some(&drawing as &dyn DrawingView)));

    drawing.select(a).unwrap();
    assert!(!north.update_enabled_state(Some(&drawing as &dyn DrawingView)));

    drawing.select(b).unwrap();
    assert_eq!(drawing.selection_count(), 2);
    assert!(north.update_enabled_state(Some(&drawing as &dyn DrawingView)));

    drawing.set_enabled(false);
    assert!(!north.update_enabled_state(Some(&drawing as &dyn DrawingView)));
}

#[test]
fn test_action_configured_from_labels() {
    let north = action(AlignStrategy::North);
    assert_eq!(north.name(), "Align Top");
    assert_eq!(north.accelerator(), AlignStrategy::North.default_accelerator());
    assert!(north.description().is_some());
    assert!(north.icon().is_some());

    let mut labels = Labels::builtin();
    labels.insert("edit.alignNorth.accelerator", "alt K");
    labels.insert("edit.align.text", "Line Up");
    let custom = AlignAction::new(AlignStrategy::North, &labels);
    assert_eq!(custom.accelerator().to_string(), "alt K");
    assert_eq!(custom.edit_label(), "Line Up");
}

#[test]
fn test_invalid_accelerator_falls_back_to_default() {
    let mut labels = Labels::new();
    labels.insert("edit.alignVertical.accelerator", "ctrl");
    let vertical = AlignAction::new(AlignStrategy::Vertical, &labels);
    assert_eq!(
        vertical.accelerator(),
        AlignStrategy::Vertical.default_accelerator()
    );
    assert_eq!(vertical.name(), "edit.alignVertical");
    assert_eq!(vertical.edit_label(), "edit.align.text");
}
