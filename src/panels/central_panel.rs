use crate::SketchApp;
use crate::renderer::PainterSurface;

/// The fixed-size canvas followed by the Clear/Undo/Redo/Export row
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context, ui: &mut egui::Ui) {
    let canvas_size = app.config().canvas_vec2();
    let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
    let canvas_rect = response.rect;

    app.handle_canvas_input(ctx, canvas_rect);

    // Hide the system cursor over the canvas; the tool preview replaces it
    if response.hovered() && app.document().pending().is_none() {
        ctx.set_cursor_icon(egui::CursorIcon::None);
    }

    let mut surface = PainterSurface::new(&painter, canvas_rect);
    app.renderer().render(app.document(), &mut surface);
    painter.rect_stroke(
        canvas_rect,
        0.0,
        egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
    );

    ui.horizontal(|ui| {
        let can_undo = app.document().history().can_undo();
        let can_redo = app.document().history().can_redo();

        if ui.button("Clear").clicked() {
            app.document_mut().clear();
        }
        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            app.document_mut().undo();
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            app.document_mut().redo();
        }
        if ui.button("Export").clicked() {
            app.export();
        }
    });

    if let Some(err) = app.last_error() {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }
}
