use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

use crate::document::Document;
use crate::tools::Tool;

/// Dash pattern for the marker's hover outline, in canvas pixels
const PREVIEW_DASH: f32 = 3.0;
const PREVIEW_GAP: f32 = 2.0;
const PREVIEW_SEGMENTS: usize = 32;

/// Something commands can paint onto. All coordinates are canvas-local.
pub trait Surface {
    /// Wipe the whole surface with a single colour
    fn fill(&mut self, color: Color32);

    /// Polyline with round caps and joins
    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Thin dashed outline, used for the marker's hover preview
    fn dashed_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Text centred on `center`, `size` in points
    fn glyph(&mut self, text: &str, center: Pos2, size: f32, color: Color32);
}

/// Points approximating a circle outline, closed (first point repeated)
pub fn circle_outline(center: Pos2, radius: f32, segments: usize) -> Vec<Pos2> {
    (0..=segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}

/// Paints onto the on-screen canvas through an egui painter
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas_rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            canvas_rect,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.canvas_rect.min.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn fill(&mut self, color: Color32) {
        self.painter.rect_filled(self.canvas_rect, 0.0, color);
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        // egui lines have butt caps; a disc on every vertex rounds both caps and joins
        for point in &screen {
            self.painter.circle_filled(*point, thickness / 2.0, color);
        }
        self.painter
            .add(Shape::line(screen, EguiStroke::new(thickness, color)));
    }

    fn dashed_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let outline: Vec<Pos2> = circle_outline(center, radius, PREVIEW_SEGMENTS)
            .into_iter()
            .map(|p| self.to_screen(p))
            .collect();
        self.painter.extend(Shape::dashed_line(
            &outline,
            EguiStroke::new(1.0, color),
            PREVIEW_DASH,
            PREVIEW_GAP,
        ));
    }

    fn glyph(&mut self, text: &str, center: Pos2, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            color,
        );
    }
}

/// Redraws the whole canvas from the document on every frame
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Background, then history in commit order, then the in-progress
    /// command, then the hover preview when nothing is being drawn.
    pub fn render(&self, document: &Document, surface: &mut dyn Surface) {
        surface.fill(self.background);

        for command in document.history().commands() {
            command.display(surface);
        }

        match document.pending() {
            Some(pending) => pending.display(surface),
            None => {
                if let Some(hover) = document.hover() {
                    document.palette().active().preview(hover, surface);
                }
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}
