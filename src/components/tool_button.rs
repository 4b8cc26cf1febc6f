use eframe::egui;

const MIN_BUTTON_SIZE: egui::Vec2 = egui::vec2(32.0, 32.0);
const BUTTON_PADDING: f32 = 8.0;

/// A palette button that stays highlighted while its tool is selected
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub font_size: f32,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            font_size: 16.0,
            selected,
        }
    }

    /// Glyph buttons read better a bit larger
    pub fn glyph(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            font_size: 22.0,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::FontId::proportional(self.font_size);
        let text_color = if self.selected {
            egui::Color32::BLACK
        } else {
            ui.visuals().text_color()
        };
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_owned(), font_id, text_color);

        let button_size = (galley.size() + egui::vec2(2.0 * BUTTON_PADDING, BUTTON_PADDING))
            .max(MIN_BUTTON_SIZE);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                ui.visuals().widgets.hovered.weak_bg_fill
            } else {
                ui.visuals().widgets.inactive.weak_bg_fill
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter()
                .galley(rect.center() - galley.size() / 2.0, galley, text_color);

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
