//! # grid-rover
//!
//! A command-execution engine for a rover on an unbounded 2D grid.
//!
//! Single-character programs are resolved through a command table fixed at build time.
//! Each [`Command`] computes a candidate cell, asks every attached [`Sensor`] whether it
//! is safe, and either commits the move or vetoes it. The first veto stops the [`Rover`]
//! for good.
//!
//! ```
//! use grid_rover::{Command, Direction, ObstacleSensor, Rover};
//!
//! let mut rover = Rover::builder()
//!     .program_command('M', Command::MoveForward)
//!     .program_command('R', Command::RotateRight)
//!     .add_sensor([(5, 5)].into_iter().collect::<ObstacleSensor>())
//!     .build();
//!
//! rover.land((0, 0), Direction::North).unwrap();
//! rover.execute("MMRMM").unwrap();
//! assert_eq!(rover.to_string(), "(2, 2) EAST");
//! ```

pub mod command;
pub mod error;
pub mod position;
pub mod rover;
pub mod sensor;

pub use command::*;
pub use error::*;
pub use position::*;
pub use rover::*;
pub use sensor::*;
