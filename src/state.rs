use crate::command::PendingCommand;

/// Pointer state machine for the canvas.
///
/// ```text
/// Idle --(primary down)--> Drawing --(up / leave)--> Idle
/// ```
#[derive(Debug, Clone, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// The primary button is held and a command is being built
    Drawing { pending: PendingCommand },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn pending(&self) -> Option<&PendingCommand> {
        match self {
            Self::Drawing { pending } => Some(pending),
            Self::Idle => None,
        }
    }

    pub fn pending_mut(&mut self) -> Option<&mut PendingCommand> {
        match self {
            Self::Drawing { pending } => Some(pending),
            Self::Idle => None,
        }
    }

    /// Return to idle, handing back whatever was being drawn
    pub fn take_pending(&mut self) -> Option<PendingCommand> {
        match std::mem::take(self) {
            Self::Drawing { pending } => Some(pending),
            Self::Idle => None,
        }
    }
}
