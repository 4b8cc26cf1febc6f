use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use super::Tool;
use crate::command::PendingCommand;
use crate::renderer::Surface;
use crate::stroke::MutableStroke;

/// Freehand marker with a fixed thickness and colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerTool {
    pub thickness: f32,
    pub color: Color32,
}

impl MarkerTool {
    pub fn new(thickness: f32, color: Color32) -> Self {
        Self { thickness, color }
    }
}

impl Tool for MarkerTool {
    fn name(&self) -> &'static str {
        "Marker"
    }

    fn begin(&self, pos: Pos2) -> PendingCommand {
        PendingCommand::Stroke(MutableStroke::new(pos, self.color, self.thickness))
    }

    fn preview(&self, pos: Pos2, surface: &mut dyn Surface) {
        surface.dashed_circle(pos, self.thickness / 2.0, self.color);
    }
}
