use egui::{Color32, Pos2};

use crate::renderer::Surface;

/// A glyph stamped onto the canvas, centred on `position`
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    glyph: String,
    position: Pos2,
    size: f32,
}

/// A sticker still attached to the pointer; it can only be moved
#[derive(Clone, Debug, PartialEq)]
pub struct MutableSticker {
    glyph: String,
    position: Pos2,
    size: f32,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, position: Pos2, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            size,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        surface.glyph(&self.glyph, self.position, self.size, Color32::BLACK);
    }
}

impl MutableSticker {
    pub fn new(glyph: impl Into<String>, position: Pos2, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            size,
        }
    }

    pub fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        surface.glyph(&self.glyph, self.position, self.size, Color32::BLACK);
    }

    pub fn finish(self) -> Sticker {
        Sticker::new(self.glyph, self.position, self.size)
    }
}
