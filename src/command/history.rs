use super::Command;

/// Manages the history of committed commands for undo/redo functionality
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Committed commands, oldest first
    undo_stack: Vec<Command>,
    /// Undone commands, most recently undone last
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Anything waiting to be redone is lost.
    pub fn commit(&mut self, command: Command) {
        log::debug!("Committing {}", command.label());
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Move the newest command to the redo stack. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(command) => {
                log::debug!("Undo {}", command.label());
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone command back. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                log::debug!("Redo {}", command.label());
                self.undo_stack.push(command);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Committed commands in paint order
    pub fn commands(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
