use egui::{PointerButton, Pos2};
use sticker_sketchpad::{Document, InputEvent, ToolPalette};

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        pos: Pos2::new(x, y),
        button: PointerButton::Primary,
    }
}

fn drag(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        pos: Pos2::new(x, y),
        primary_held: true,
    }
}

fn hover(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        pos: Pos2::new(x, y),
        primary_held: false,
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        pos: Pos2::new(x, y),
        button: PointerButton::Primary,
    }
}

fn draw_stroke(doc: &mut Document, points: &[(f32, f32)]) {
    let (x, y) = points[0];
    doc.handle_input(down(x, y));
    for &(x, y) in &points[1..] {
        doc.handle_input(drag(x, y));
    }
    let (x, y) = points[points.len() - 1];
    doc.handle_input(up(x, y));
}

#[test]
fn test_click_without_drag_commits_nothing() {
    let mut doc = Document::default();
    doc.handle_input(down(10.0, 10.0));
    assert!(doc.state().is_drawing());
    doc.handle_input(up(10.0, 10.0));

    assert!(doc.state().is_idle());
    assert!(doc.history().is_empty());
}

#[test]
fn test_drag_commits_one_stroke_with_tool_settings() {
    let mut doc = Document::default();
    doc.palette_mut().select_thick_marker();
    draw_stroke(&mut doc, &[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]);

    assert_eq!(doc.history().len(), 1);
    let stroke = doc.history().commands()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 3);
    assert_eq!(stroke.thickness(), 8.0);
}

#[test]
fn test_sticker_click_places_sticker() {
    let mut doc = Document::default();
    doc.palette_mut().select_sticker("✨");
    doc.handle_input(down(50.0, 50.0));
    doc.handle_input(up(50.0, 50.0));

    assert_eq!(doc.history().len(), 1);
    let sticker = doc.history().commands()[0].as_sticker().unwrap();
    assert_eq!(sticker.glyph(), "✨");
    assert_eq!(sticker.position(), Pos2::new(50.0, 50.0));
}

#[test]
fn test_sticker_drag_repositions_before_commit() {
    let mut doc = Document::default();
    doc.palette_mut().select_sticker("⭐");
    doc.handle_input(down(10.0, 10.0));
    doc.handle_input(drag(30.0, 40.0));
    doc.handle_input(drag(60.0, 70.0));
    doc.handle_input(up(60.0, 70.0));

    let sticker = doc.history().commands()[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), Pos2::new(60.0, 70.0));
}

#[test]
fn test_leaving_canvas_commits_in_progress_stroke() {
    let mut doc = Document::default();
    doc.handle_input(down(10.0, 10.0));
    doc.handle_input(drag(20.0, 20.0));
    doc.handle_input(InputEvent::PointerLeave);

    assert!(doc.state().is_idle());
    assert_eq!(doc.history().len(), 1);
    assert!(doc.hover().is_none());
}

#[test]
fn test_hover_does_not_touch_history() {
    let mut doc = Document::default();
    doc.handle_input(hover(10.0, 10.0));
    doc.handle_input(hover(20.0, 30.0));

    assert!(doc.history().is_empty());
    assert!(doc.state().is_idle());
    assert_eq!(doc.hover(), Some(Pos2::new(20.0, 30.0)));
}

#[test]
fn test_secondary_button_is_ignored() {
    let mut doc = Document::default();
    doc.handle_input(InputEvent::PointerDown {
        pos: Pos2::new(10.0, 10.0),
        button: PointerButton::Secondary,
    });
    assert!(doc.state().is_idle());
}

#[test]
fn test_tool_change_mid_stroke_applies_to_next_command() {
    let mut doc = Document::default();
    doc.handle_input(down(0.0, 0.0));
    doc.handle_input(drag(10.0, 10.0));
    doc.palette_mut().select_sticker("✨");
    doc.handle_input(drag(20.0, 20.0));
    doc.handle_input(up(20.0, 20.0));

    let stroke = doc.history().commands()[0].as_stroke().unwrap();
    assert_eq!(stroke.thickness(), 2.0);
    assert_eq!(stroke.points().len(), 3);

    doc.handle_input(down(40.0, 40.0));
    doc.handle_input(up(40.0, 40.0));
    assert!(doc.history().commands()[1].as_sticker().is_some());
}

#[test]
fn test_clear_discards_everything() {
    let mut doc = Document::default();
    draw_stroke(&mut doc, &[(0.0, 0.0), (5.0, 5.0)]);
    draw_stroke(&mut doc, &[(10.0, 0.0), (15.0, 5.0)]);
    doc.undo();
    doc.handle_input(down(30.0, 30.0));
    doc.handle_input(drag(35.0, 35.0));

    doc.clear();
    assert!(doc.history().is_empty());
    assert!(!doc.history().can_redo());
    assert!(doc.pending().is_none());

    // The pointer-up of the discarded stroke must not resurrect it
    doc.handle_input(up(35.0, 35.0));
    assert!(doc.history().is_empty());
}

#[test]
fn test_scenario_new_stroke_after_undo_loses_redo() {
    let mut doc = Document::new(ToolPalette::default());
    draw_stroke(&mut doc, &[(0.0, 0.0), (1.0, 1.0)]); // A
    draw_stroke(&mut doc, &[(2.0, 2.0), (3.0, 3.0)]); // B
    doc.undo();
    assert_eq!(doc.history().len(), 1);
    assert_eq!(doc.history().redo_stack().len(), 1);

    draw_stroke(&mut doc, &[(4.0, 4.0), (5.0, 5.0)]); // C
    let firsts: Vec<Pos2> = doc
        .history()
        .commands()
        .iter()
        .map(|c| c.as_stroke().unwrap().points()[0])
        .collect();
    assert_eq!(firsts, vec![Pos2::new(0.0, 0.0), Pos2::new(4.0, 4.0)]);
    assert!(!doc.history().can_redo());
}

#[test]
fn test_undo_redo_on_empty_document_are_noops() {
    let mut doc = Document::default();
    let revision = doc.revision();
    doc.undo();
    doc.redo();
    assert_eq!(doc.revision(), revision);
}
