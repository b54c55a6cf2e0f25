use std::sync::{Arc, Mutex};

use eframe_diagram::event::EditorEvent;
use eframe_diagram::renderer::AnchorRenderer;
use eframe_diagram::{EditorContext, EditorMode, InputEvent, ShapeKind, Tool};
use egui::{Vec2, pos2};

fn editor_with_tool(tool: Tool) -> EditorContext<AnchorRenderer> {
    let mut editor = EditorContext::new(AnchorRenderer);
    editor.set_tool(tool).unwrap();
    editor
}

/// Draws a shape with the current tool from `(x1, y1)` to `(x2, y2)` and releases
fn drag(editor: &mut EditorContext<AnchorRenderer>, x1: f32, y1: f32, x2: f32, y2: f32) {
    editor.pointer_down(x1, y1).unwrap();
    editor.pointer_move(x2, y2).unwrap();
    editor.pointer_up();
}

fn anchors(editor: &EditorContext<AnchorRenderer>, id: usize) -> (f32, f32, f32, f32) {
    let shape = editor.scene().get(id).unwrap();
    (shape.x1(), shape.y1(), shape.x2(), shape.y2())
}

#[test]
fn test_drag_draw_then_release() {
    let mut editor = editor_with_tool(Tool::Line);

    editor.pointer_down(10.0, 10.0).unwrap();
    assert_eq!(editor.mode(), EditorMode::Drawing);
    assert_eq!(editor.scene().len(), 1);
    assert_eq!(editor.scene().get(0).unwrap().id(), 0);
    assert_eq!(anchors(&editor, 0), (10.0, 10.0, 10.0, 10.0));

    editor.pointer_move(50.0, 60.0).unwrap();
    assert_eq!(anchors(&editor, 0), (10.0, 10.0, 50.0, 60.0));

    editor.pointer_up();
    assert_eq!(editor.mode(), EditorMode::Idle);
    assert!(editor.state().active_shape().is_none());

    let revision = editor.scene().revision();
    editor.pointer_move(80.0, 80.0).unwrap();
    assert_eq!(anchors(&editor, 0), (10.0, 10.0, 50.0, 60.0));
    assert_eq!(editor.scene().revision(), revision);
}

#[test]
fn test_ids_follow_creation_order() {
    let mut editor = editor_with_tool(Tool::Rectangle);
    for i in 0..5 {
        let offset = i as f32 * 10.0;
        drag(&mut editor, offset, offset, offset + 5.0, offset + 5.0);
    }

    assert_eq!(editor.scene().len(), 5);
    for (index, shape) in editor.scene().shapes().iter().enumerate() {
        assert_eq!(shape.id(), index);
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
    }
}

#[test]
fn test_select_and_move() {
    let mut editor = editor_with_tool(Tool::Line);
    // Two lines far away so the rectangle ends up with id 2
    drag(&mut editor, 200.0, 200.0, 300.0, 200.0);
    drag(&mut editor, 200.0, 250.0, 300.0, 250.0);
    editor.set_tool(Tool::Rectangle).unwrap();
    drag(&mut editor, 0.0, 0.0, 20.0, 20.0);

    editor.set_tool(Tool::Select).unwrap();
    editor.pointer_down(10.0, 10.0).unwrap();
    assert_eq!(editor.mode(), EditorMode::Moving);
    assert_eq!(editor.state().active_shape().unwrap().id(), 2);

    editor.pointer_move(5.0, 5.0).unwrap();
    assert_eq!(anchors(&editor, 2), (5.0, 5.0, 25.0, 25.0));
    assert_eq!(editor.scene().len(), 3);

    editor.pointer_up();
    assert_eq!(editor.mode(), EditorMode::Idle);
}

#[test]
fn test_move_preserves_size_across_many_moves() {
    let mut editor = editor_with_tool(Tool::Rectangle);
    // Dragged up and left, so width and height are negative
    drag(&mut editor, 100.0, 100.0, 60.0, 70.0);
    let size = editor.scene().get(0).unwrap().size();
    assert_eq!(size, Vec2::new(-40.0, -30.0));

    editor.set_tool(Tool::Select).unwrap();
    editor.pointer_down(80.0, 80.0).unwrap();
    for (x, y) in [(10.0, 10.0), (300.0, -20.0), (42.5, 17.25)] {
        editor.pointer_move(x, y).unwrap();
        let shape = editor.scene().get(0).unwrap();
        assert_eq!(shape.start(), pos2(x, y));
        assert_eq!(shape.size(), size);
    }
}

#[test]
fn test_moving_a_line() {
    let mut editor = editor_with_tool(Tool::Line);
    drag(&mut editor, 0.0, 0.0, 100.0, 0.0);

    editor.set_tool(Tool::Select).unwrap();
    editor.pointer_down(50.0, 0.0).unwrap();
    editor.pointer_move(10.0, 40.0).unwrap();

    assert_eq!(anchors(&editor, 0), (10.0, 40.0, 110.0, 40.0));
    assert_eq!(editor.scene().get(0).unwrap().kind(), ShapeKind::Line);
}

#[test]
fn test_select_on_empty_space_is_a_no_op() {
    let mut editor = editor_with_tool(Tool::Rectangle);
    drag(&mut editor, 0.0, 0.0, 10.0, 10.0);
    editor.set_tool(Tool::Select).unwrap();

    editor.pointer_down(500.0, 500.0).unwrap();
    assert_eq!(editor.mode(), EditorMode::Idle);
    assert_eq!(editor.scene().len(), 1);

    editor.pointer_move(0.0, 0.0).unwrap();
    assert_eq!(anchors(&editor, 0), (0.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_select_picks_oldest_overlapping_shape() {
    let mut editor = editor_with_tool(Tool::Rectangle);
    drag(&mut editor, 0.0, 0.0, 50.0, 50.0);
    drag(&mut editor, 25.0, 25.0, 75.0, 75.0);

    editor.set_tool(Tool::Select).unwrap();
    editor.pointer_down(30.0, 30.0).unwrap();

    assert_eq!(editor.state().active_shape().unwrap().id(), 0);
}

#[test]
fn test_snapshot_is_not_an_alias() {
    let mut editor = editor_with_tool(Tool::Line);
    editor.pointer_down(0.0, 0.0).unwrap();
    let snapshot = editor.state().active_shape().unwrap().clone();

    editor.pointer_move(30.0, 40.0).unwrap();

    assert_eq!(snapshot.end(), pos2(0.0, 0.0));
    assert_eq!(editor.state().active_shape().unwrap().end(), pos2(30.0, 40.0));
    assert_eq!(
        editor.scene().get(0).unwrap().primitive(),
        &(ShapeKind::Line, pos2(0.0, 0.0), pos2(30.0, 40.0))
    );
}

#[test]
fn test_pointer_up_when_idle_is_harmless() {
    let mut editor = editor_with_tool(Tool::Line);
    editor.pointer_up();
    editor.pointer_up();

    assert_eq!(editor.mode(), EditorMode::Idle);
    assert!(editor.scene().is_empty());
}

#[test]
fn test_off_canvas_coordinates_accepted_verbatim() {
    let mut editor = editor_with_tool(Tool::Line);
    drag(&mut editor, -20.0, -30.0, 5000.0, 4000.0);

    assert_eq!(anchors(&editor, 0), (-20.0, -30.0, 5000.0, 4000.0));
}

#[test]
fn test_handle_event_dispatch() {
    let mut editor = editor_with_tool(Tool::Rectangle);
    let events = [
        InputEvent::PointerDown { position: pos2(1.0, 2.0) },
        InputEvent::PointerMove { position: pos2(11.0, 22.0) },
        InputEvent::PointerUp { position: pos2(11.0, 22.0) },
    ];
    for event in &events {
        editor.handle_event(event).unwrap();
    }

    assert_eq!(anchors(&editor, 0), (1.0, 2.0, 11.0, 22.0));
    assert_eq!(editor.mode(), EditorMode::Idle);
}

#[test]
fn test_events_emitted_for_a_drag() {
    let mut editor = editor_with_tool(Tool::Line);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    editor
        .event_bus()
        .subscribe(Box::new(move |event: &EditorEvent| sink.lock().unwrap().push(*event)));

    drag(&mut editor, 0.0, 0.0, 5.0, 5.0);
    editor.pointer_up();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            EditorEvent::ShapeAdded { id: 0 },
            EditorEvent::StateChanged {
                old: EditorMode::Idle,
                new: EditorMode::Drawing
            },
            EditorEvent::ShapeReplaced { id: 0 },
            EditorEvent::StateChanged {
                old: EditorMode::Drawing,
                new: EditorMode::Idle
            },
        ]
    );
}
