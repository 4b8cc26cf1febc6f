use crate::SketchApp;
use crate::components::ToolButton;

/// Marker presets, colour, sticker buttons and the custom sticker field
pub fn tools_panel(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        let palette = app.document().palette();
        let thin = palette.thin_thickness();
        let thick = palette.thick_thickness();
        let thin_selected = palette.is_marker_selected(thin);
        let thick_selected = palette.is_marker_selected(thick);
        let mut color = palette.marker_color();

        if ToolButton::new("Thin", thin_selected).show(ui).clicked() {
            app.document_mut().palette_mut().select_thin_marker();
        }
        if ToolButton::new("Thick", thick_selected).show(ui).clicked() {
            app.document_mut().palette_mut().select_thick_marker();
        }
        if egui::color_picker::color_edit_button_srgba(
            ui,
            &mut color,
            egui::color_picker::Alpha::Opaque,
        )
        .changed()
        {
            app.document_mut().palette_mut().set_marker_color(color);
        }
    });

    ui.horizontal_wrapped(|ui| {
        // Collect first; selecting borrows the palette mutably
        let stickers: Vec<(String, bool)> = {
            let palette = app.document().palette();
            palette
                .stickers()
                .iter()
                .map(|glyph| (glyph.clone(), palette.is_sticker_selected(glyph)))
                .collect()
        };

        for (glyph, selected) in &stickers {
            if ToolButton::glyph(glyph, *selected).show(ui).clicked() {
                app.document_mut().palette_mut().select_sticker(glyph);
            }
        }

        ui.separator();

        let field = ui.add(
            egui::TextEdit::singleline(app.custom_sticker_mut())
                .hint_text("Custom sticker")
                .desired_width(100.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Add sticker").clicked() || submitted {
            app.add_custom_sticker();
        }
    });
}
