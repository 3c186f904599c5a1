//! The rover control loop.
//!
//! A [`Rover`] is assembled once with a [`RoverBuilder`]: bind trigger characters to
//! [`Command`]s with [`RoverBuilder::program_command`], attach sensors with
//! [`RoverBuilder::add_sensor`], then [`build`](RoverBuilder::build). After
//! [`Rover::land`] it accepts programs through [`Rover::execute`].

use crate::command::Command;
use crate::error::RoverError;
use crate::position::{Coordinate, Direction, Position};
use crate::sensor::Sensor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// How [`Rover::execute`] treats characters that have no bound command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownCommandPolicy {
    /// Stop the rover at the unbound character, like a sensor veto.
    #[default]
    Stop,
    /// Refuse the whole program up front with [`RoverError::UnknownCommand`].
    Reject,
}

/// Configuration for rover control.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverConfig {
    /// Handling of unbound characters in a program.
    pub unknown_command: UnknownCommandPolicy,
}

/// How a call to [`Rover::execute`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Execution {
    /// Every command ran successfully.
    Completed,
    /// The command bound to `command` failed: a sensor vetoed it, or it would have
    /// stepped past the coordinate range.
    Vetoed { command: char, index: usize },
    /// `command` has no binding; the rover stopped there.
    UnknownCommand { command: char, index: usize },
}

impl Execution {
    /// Whether the whole program ran.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Read-only snapshot of a rover, suitable for logging or serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverStatus {
    /// `None` until the rover has landed.
    pub position: Option<Position>,
    /// Sticky stop flag.
    pub stopped: bool,
}

/// Accumulates command bindings and sensors for a [`Rover`].
#[derive(Default)]
pub struct RoverBuilder {
    commands: HashMap<char, Command>,
    sensors: Vec<Box<dyn Sensor>>,
    config: RoverConfig,
}

impl RoverBuilder {
    /// Starts with no bindings, no sensors and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `trigger` to `command`, replacing any earlier binding for it.
    pub fn program_command(mut self, trigger: char, command: Command) -> Self {
        self.commands.insert(trigger, command);
        self
    }

    /// Attaches a sensor. Sensors are consulted in the order they were added.
    pub fn add_sensor(self, sensor: impl Sensor + 'static) -> Self {
        self.add_boxed_sensor(Box::new(sensor))
    }

    /// Attaches an already boxed sensor.
    pub fn add_boxed_sensor(mut self, sensor: Box<dyn Sensor>) -> Self {
        self.sensors.push(sensor);
        self
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: RoverConfig) -> Self {
        self.config = config;
        self
    }

    /// Freezes the bindings and sensors into a rover that has not landed yet.
    pub fn build(self) -> Rover {
        Rover {
            commands: self.commands,
            sensors: self.sensors,
            config: self.config,
            position: Position::default(),
            landed: false,
            stopped: false,
        }
    }
}

/// A rover on the grid.
///
/// The command table and sensor list are fixed at build time. `stopped` is sticky:
/// once a program is halted it stays set for the rest of the rover's life, even if
/// later programs complete.
pub struct Rover {
    commands: HashMap<char, Command>,
    sensors: Vec<Box<dyn Sensor>>,
    config: RoverConfig,
    position: Position,
    landed: bool,
    stopped: bool,
}

impl Rover {
    /// Shorthand for [`RoverBuilder::new`].
    pub fn builder() -> RoverBuilder {
        RoverBuilder::new()
    }

    /// Places the rover at `coords` facing `direction`. Allowed exactly once.
    pub fn land(
        &mut self,
        coords: (Coordinate, Coordinate),
        direction: Direction,
    ) -> Result<(), RoverError> {
        if self.landed {
            return Err(RoverError::AlreadyLanded);
        }

        let (x, y) = coords;
        self.position.move_to(x, y);
        self.position.rotate(direction);
        self.landed = true;
        debug!(x, y, %direction, "rover landed");
        Ok(())
    }

    /// Runs `program` one character at a time.
    ///
    /// The first character whose command fails, or which has no binding, stops the
    /// rover: `stopped` is set and the rest of the program is skipped. Under
    /// [`UnknownCommandPolicy::Reject`] a program containing an unbound character is
    /// refused before anything runs.
    pub fn execute(&mut self, program: &str) -> Result<Execution, RoverError> {
        if !self.landed {
            return Err(RoverError::NotLanded);
        }

        if self.config.unknown_command == UnknownCommandPolicy::Reject
            && let Some((index, command)) = program
                .chars()
                .enumerate()
                .find(|(_, c)| !self.commands.contains_key(c))
        {
            return Err(RoverError::UnknownCommand { command, index });
        }

        for (index, trigger) in program.chars().enumerate() {
            let Some(cmd) = self.commands.get(&trigger) else {
                warn!(command = %trigger, index, "no command bound, stopping");
                self.stopped = true;
                return Ok(Execution::UnknownCommand {
                    command: trigger,
                    index,
                });
            };

            if !cmd.execute(&mut self.position, &self.sensors) {
                debug!(command = %trigger, index, "command vetoed, stopping");
                self.stopped = true;
                return Ok(Execution::Vetoed {
                    command: trigger,
                    index,
                });
            }
        }

        debug!(program, position = %self, "program completed");
        Ok(Execution::Completed)
    }

    /// Whether [`land`](Self::land) has succeeded.
    pub fn is_landed(&self) -> bool {
        self.landed
    }

    /// Whether any program has been halted so far.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Current position, or `None` before landing.
    pub fn position(&self) -> Option<Position> {
        self.landed.then_some(self.position)
    }

    /// Snapshot of position and stop flag.
    pub fn status(&self) -> RoverStatus {
        RoverStatus {
            position: self.position(),
            stopped: self.stopped,
        }
    }

    /// The command bound to `trigger`, if any.
    pub fn command(&self, trigger: char) -> Option<&Command> {
        self.commands.get(&trigger)
    }

    /// Number of attached sensors.
    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(pos) = self.position() else {
            return f.write_str("unknown");
        };

        write!(f, "({}, {}) {}", pos.x(), pos.y(), pos.direction())?;
        if self.stopped {
            f.write_str(" stopped")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rover")
            .field("commands", &self.commands)
            .field("sensors", &self.sensors.len())
            .field("config", &self.config)
            .field("position", &self.position())
            .field("stopped", &self.stopped)
            .finish()
    }
}
