use uuid::Uuid;

use crate::renderer::Surface;
use crate::sticker::{MutableSticker, Sticker};
use crate::stroke::{MutableStroke, Stroke};

/// Identity of a committed command, stable across undo/redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(Uuid);

impl CommandId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A committed drawing action. Never mutated once it is in history.
#[derive(Clone, Debug)]
pub enum Command {
    Stroke { id: CommandId, stroke: Stroke },
    Sticker { id: CommandId, sticker: Sticker },
}

impl Command {
    pub fn stroke(stroke: Stroke) -> Self {
        Command::Stroke {
            id: CommandId::new(),
            stroke,
        }
    }

    pub fn sticker(sticker: Sticker) -> Self {
        Command::Sticker {
            id: CommandId::new(),
            sticker,
        }
    }

    pub fn id(&self) -> CommandId {
        match self {
            Command::Stroke { id, .. } | Command::Sticker { id, .. } => *id,
        }
    }

    /// Short description for the history list
    pub fn label(&self) -> String {
        match self {
            Command::Stroke { stroke, .. } => {
                format!("Stroke ({} pts, {}px)", stroke.points().len(), stroke.thickness())
            }
            Command::Sticker { sticker, .. } => format!("Sticker {}", sticker.glyph()),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Command::Stroke { stroke, .. } => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Command::Sticker { sticker, .. } => Some(sticker),
            _ => None,
        }
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        match self {
            Command::Stroke { stroke, .. } => stroke.display(surface),
            Command::Sticker { sticker, .. } => sticker.display(surface),
        }
    }
}

/// The command currently under the pointer, not yet in history
#[derive(Clone, Debug)]
pub enum PendingCommand {
    Stroke(MutableStroke),
    Sticker(MutableSticker),
}

impl PendingCommand {
    /// Pointer moved with the button held: extend the stroke or move the sticker
    pub fn drag(&mut self, point: egui::Pos2) {
        match self {
            PendingCommand::Stroke(stroke) => stroke.add_point(point),
            PendingCommand::Sticker(sticker) => sticker.move_to(point),
        }
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        match self {
            PendingCommand::Stroke(stroke) => stroke.display(surface),
            PendingCommand::Sticker(sticker) => sticker.display(surface),
        }
    }

    /// Turns the pending action into a committable command, or nothing if it is empty
    pub fn finish(self) -> Option<Command> {
        match self {
            PendingCommand::Stroke(stroke) => stroke.finish().map(Command::stroke),
            PendingCommand::Sticker(sticker) => Some(Command::sticker(sticker.finish())),
        }
    }
}
