mod commands;
mod history;

pub use commands::{Command, CommandId, PendingCommand};
pub use history::CommandHistory;
