use egui::Color32;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CANVAS_SIZE: [u32; 2] = [256, 256];
pub const THIN_MARKER: f32 = 2.0;
pub const THICK_MARKER: f32 = 8.0;
pub const STICKER_SIZE: f32 = 32.0;
pub const EXPORT_SCALE: u32 = 4;

/// User-tweakable settings for the sketchpad.
///
/// Persisted through eframe storage. The drawing itself is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchConfig {
    /// Canvas size in logical pixels
    pub canvas_size: [u32; 2],
    pub background: Color32,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    pub marker_color: Color32,
    /// Point size stickers are drawn at
    pub sticker_size: f32,
    pub stickers: Vec<String>,
    /// Upscale factor applied to the canvas when exporting
    pub export_scale: u32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            background: Color32::WHITE,
            thin_thickness: THIN_MARKER,
            thick_thickness: THICK_MARKER,
            marker_color: Color32::BLACK,
            sticker_size: STICKER_SIZE,
            stickers: vec!["✨".to_owned(), "⭐".to_owned(), "❤".to_owned()],
            export_scale: EXPORT_SCALE,
        }
    }
}

impl SketchConfig {
    pub fn canvas_vec2(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_size[0] as f32, self.canvas_size[1] as f32)
    }

    /// Pixel dimensions of the exported image
    pub fn export_size(&self) -> (u32, u32) {
        let scale = self.export_scale.max(1);
        (self.canvas_size[0] * scale, self.canvas_size[1] * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_size_scales_canvas() {
        let config = SketchConfig::default();
        assert_eq!(config.export_size(), (1024, 1024));
    }

    #[test]
    fn test_zero_scale_is_treated_as_one() {
        let config = SketchConfig {
            export_scale: 0,
            ..Default::default()
        };
        assert_eq!(config.export_size(), (256, 256));
    }
}
