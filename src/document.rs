use egui::{PointerButton, Pos2};

use crate::command::{Command, CommandHistory, PendingCommand};
use crate::input::InputEvent;
use crate::state::EditorState;
use crate::tools::{Tool, ToolPalette};

/// The sketch being edited: committed history, the command in progress,
/// the tool palette and the hover position.
#[derive(Debug, Default)]
pub struct Document {
    history: CommandHistory,
    state: EditorState,
    palette: ToolPalette,
    hover: Option<Pos2>,
    /// Bumped on every change that affects what is drawn
    revision: u64,
}

impl Document {
    pub fn new(palette: ToolPalette) -> Self {
        Self {
            palette,
            ..Default::default()
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn pending(&self) -> Option<&PendingCommand> {
        self.state.pending()
    }

    pub fn palette(&self) -> &ToolPalette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut ToolPalette {
        self.touch();
        &mut self.palette
    }

    pub fn hover(&self) -> Option<Pos2> {
        self.hover
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Run one pointer event through the Idle/Drawing state machine
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos, button } => {
                if button != PointerButton::Primary || self.state.is_drawing() {
                    return;
                }
                self.state = EditorState::Drawing {
                    pending: self.palette.active().begin(pos),
                };
                self.touch();
            }
            InputEvent::PointerMove { pos, primary_held } => {
                self.hover = Some(pos);
                if primary_held {
                    if let Some(pending) = self.state.pending_mut() {
                        pending.drag(pos);
                    }
                }
                self.touch();
            }
            InputEvent::PointerUp { button, .. } => {
                if button == PointerButton::Primary {
                    self.finish_pending();
                }
            }
            InputEvent::PointerLeave => {
                self.hover = None;
                self.finish_pending();
                self.touch();
            }
        }
    }

    /// Commit whatever is being drawn, unless it turned out empty
    fn finish_pending(&mut self) {
        if let Some(pending) = self.state.take_pending() {
            match pending.finish() {
                Some(command) => self.commit(command),
                None => log::debug!("Discarding empty stroke"),
            }
            self.touch();
        }
    }

    pub fn commit(&mut self, command: Command) {
        self.history.commit(command);
        self.touch();
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.touch();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.touch();
        }
    }

    /// Drop all history, the redo stack and the command in progress
    pub fn clear(&mut self) {
        log::debug!("Clearing {} commands", self.history.len());
        self.history.clear();
        self.state = EditorState::Idle;
        self.touch();
    }
}
