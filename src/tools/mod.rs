use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::command::PendingCommand;
use crate::config::SketchConfig;
use crate::renderer::Surface;

mod marker_tool;
mod sticker_tool;

pub use marker_tool::MarkerTool;
pub use sticker_tool::StickerTool;

/// Tool trait defines the interface for all drawing tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas: start a new in-progress command
    fn begin(&self, pos: Pos2) -> PendingCommand;

    /// Draw the hover preview at `pos` while nothing is being drawn
    fn preview(&self, pos: Pos2, surface: &mut dyn Surface);
}

/// Enum representing all available tool types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolType {
    Marker(MarkerTool),
    Sticker(StickerTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Marker(tool) => tool.name(),
            Self::Sticker(tool) => tool.name(),
        }
    }

    fn begin(&self, pos: Pos2) -> PendingCommand {
        match self {
            Self::Marker(tool) => tool.begin(pos),
            Self::Sticker(tool) => tool.begin(pos),
        }
    }

    fn preview(&self, pos: Pos2, surface: &mut dyn Surface) {
        match self {
            Self::Marker(tool) => tool.preview(pos, surface),
            Self::Sticker(tool) => tool.preview(pos, surface),
        }
    }
}

impl ToolType {
    pub fn as_marker(&self) -> Option<&MarkerTool> {
        match self {
            Self::Marker(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerTool> {
        match self {
            Self::Sticker(tool) => Some(tool),
            _ => None,
        }
    }
}

/// The marker presets, the sticker set and whichever tool is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolPalette {
    thin_thickness: f32,
    thick_thickness: f32,
    marker_color: Color32,
    sticker_size: f32,
    stickers: Vec<String>,
    active: ToolType,
}

impl Default for ToolPalette {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl ToolPalette {
    /// Starts with the thin marker selected
    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            thin_thickness: config.thin_thickness,
            thick_thickness: config.thick_thickness,
            marker_color: config.marker_color,
            sticker_size: config.sticker_size,
            stickers: config.stickers.clone(),
            active: ToolType::Marker(MarkerTool::new(config.thin_thickness, config.marker_color)),
        }
    }

    pub fn active(&self) -> &ToolType {
        &self.active
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn marker_color(&self) -> Color32 {
        self.marker_color
    }

    pub fn thin_thickness(&self) -> f32 {
        self.thin_thickness
    }

    pub fn thick_thickness(&self) -> f32 {
        self.thick_thickness
    }

    pub fn select_thin_marker(&mut self) {
        self.select_marker(self.thin_thickness);
    }

    pub fn select_thick_marker(&mut self) {
        self.select_marker(self.thick_thickness);
    }

    fn select_marker(&mut self, thickness: f32) {
        log::info!("Marker selected: {thickness}px");
        self.active = ToolType::Marker(MarkerTool::new(thickness, self.marker_color));
    }

    /// True when the active tool is a marker of exactly this thickness
    pub fn is_marker_selected(&self, thickness: f32) -> bool {
        self.active
            .as_marker()
            .is_some_and(|marker| marker.thickness == thickness)
    }

    pub fn is_sticker_selected(&self, glyph: &str) -> bool {
        self.active
            .as_sticker()
            .is_some_and(|sticker| sticker.glyph == glyph)
    }

    /// Changes the colour of future strokes, including from the active marker
    pub fn set_marker_color(&mut self, color: Color32) {
        self.marker_color = color;
        if let ToolType::Marker(marker) = &mut self.active {
            marker.color = color;
        }
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        log::info!("Sticker selected: {glyph}");
        self.active = ToolType::Sticker(StickerTool::new(glyph, self.sticker_size));
    }

    /// Adds a user-supplied sticker and selects it.
    ///
    /// Returns false (and changes nothing) when the text is blank.
    /// A glyph already in the set is selected rather than added twice.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        let glyph = text.trim();
        if glyph.is_empty() {
            log::warn!("Ignoring empty custom sticker");
            return false;
        }
        if !self.stickers.iter().any(|existing| existing == glyph) {
            self.stickers.push(glyph.to_owned());
        }
        self.select_sticker(glyph);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_thin_marker() {
        let palette = ToolPalette::default();
        assert!(palette.is_marker_selected(2.0));
        assert_eq!(palette.active().name(), "Marker");
    }

    #[test]
    fn test_select_thick_marker() {
        let mut palette = ToolPalette::default();
        palette.select_thick_marker();
        assert!(palette.is_marker_selected(8.0));
        assert!(!palette.is_marker_selected(2.0));
    }

    #[test]
    fn test_custom_sticker_is_trimmed_added_and_selected() {
        let mut palette = ToolPalette::default();
        let before = palette.stickers().len();

        assert!(palette.add_custom_sticker("  🦀 "));
        assert_eq!(palette.stickers().len(), before + 1);
        assert!(palette.is_sticker_selected("🦀"));
    }

    #[test]
    fn test_blank_custom_sticker_is_ignored() {
        let mut palette = ToolPalette::default();
        let before = palette.clone();

        assert!(!palette.add_custom_sticker("   "));
        assert_eq!(palette, before);
    }

    #[test]
    fn test_duplicate_sticker_is_not_added_twice() {
        let mut palette = ToolPalette::default();
        let before = palette.stickers().len();

        assert!(palette.add_custom_sticker("✨"));
        assert_eq!(palette.stickers().len(), before);
        assert!(palette.is_sticker_selected("✨"));
    }

    #[test]
    fn test_marker_color_applies_to_active_marker() {
        let mut palette = ToolPalette::default();
        palette.set_marker_color(Color32::RED);
        assert_eq!(palette.active().as_marker().unwrap().color, Color32::RED);

        palette.select_thick_marker();
        assert_eq!(palette.active().as_marker().unwrap().color, Color32::RED);
    }
}
