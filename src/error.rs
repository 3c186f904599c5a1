//! Error types for rover control.

use thiserror::Error;

/// Errors raised by [`Rover`](crate::Rover) operations.
///
/// Hazards met while running a program are not errors: they stop the rover and are
/// reported through [`Execution`](crate::Execution).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoverError {
    /// `land` was called on a rover that already landed.
    #[error("rover has already landed")]
    AlreadyLanded,

    /// `execute` was called before `land`.
    #[error("rover has not landed")]
    NotLanded,

    /// The program contains a character with no bound command.
    ///
    /// Only raised under [`UnknownCommandPolicy::Reject`](crate::UnknownCommandPolicy::Reject).
    #[error("unknown command {command:?} at index {index}")]
    UnknownCommand {
        /// The unbound character.
        command: char,
        /// Character index within the program.
        index: usize,
    },
}
