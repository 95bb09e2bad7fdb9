pub use crate::command::error::{InvalidMoveReason, MoveError};
pub use crate::command::move_command::MoveCommand;

mod error;
mod move_command;
