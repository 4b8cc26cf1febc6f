use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use super::Tool;
use crate::command::PendingCommand;
use crate::renderer::Surface;
use crate::sticker::MutableSticker;

/// Alpha of the ghost glyph that follows the cursor
const GHOST_ALPHA: u8 = 96;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerTool {
    pub glyph: String,
    pub size: f32,
}

impl StickerTool {
    pub fn new(glyph: impl Into<String>, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            size,
        }
    }
}

impl Tool for StickerTool {
    fn name(&self) -> &'static str {
        "Sticker"
    }

    fn begin(&self, pos: Pos2) -> PendingCommand {
        PendingCommand::Sticker(MutableSticker::new(self.glyph.clone(), pos, self.size))
    }

    fn preview(&self, pos: Pos2, surface: &mut dyn Surface) {
        let ghost = Color32::from_black_alpha(GHOST_ALPHA);
        surface.glyph(&self.glyph, pos, self.size, ghost);
    }
}
