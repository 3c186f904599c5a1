//! Movement commands and their effect on a [`Position`].

use crate::position::Position;
use crate::sensor::{Sensor, all_safe};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A unit of rover behaviour.
///
/// Commands are plain values. A [`Composite`](Command::Composite) owns its
/// children, so cloning a command yields a fully independent copy and reusing one
/// command in several composites never shares state between them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Step one cell in the facing direction.
    MoveForward,
    /// Step one cell against the facing direction.
    MoveBackward,
    /// Quarter turn counter-clockwise.
    RotateLeft,
    /// Quarter turn clockwise.
    RotateRight,
    /// Run children in order, stopping at the first failure.
    Composite(Vec<Command>),
}

impl Command {
    /// Builds a composite from owned commands.
    pub fn compose<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        Self::Composite(commands.into_iter().collect())
    }

    /// Builds a composite from borrowed commands, copying each of them.
    pub fn compose_from(commands: &[Command]) -> Self {
        Self::Composite(commands.to_vec())
    }

    /// Applies the command to `position`.
    ///
    /// Returns `true` when no sensor vetoed and the state was advanced. A vetoed move
    /// leaves `position` untouched, as does a step past the coordinate range. Rotations never consult `sensors`.
    ///
    /// A failing composite keeps the effects of the children that ran before the
    /// failing one, exactly as if its children had been executed one by one.
    pub fn execute(&self, position: &mut Position, sensors: &[Box<dyn Sensor>]) -> bool {
        match self {
            Self::MoveForward | Self::MoveBackward => {
                let candidate = if matches!(self, Self::MoveForward) {
                    position.forward_cell()
                } else {
                    position.backward_cell()
                };
                let Some(candidate) = candidate else {
                    debug!(
                        x = position.x(),
                        y = position.y(),
                        "move refused at coordinate limit"
                    );
                    return false;
                };
                if !all_safe(sensors, candidate) {
                    debug!(x = candidate.x, y = candidate.y, "move vetoed by sensor");
                    return false;
                }
                position.move_to(candidate.x, candidate.y);
                true
            }
            Self::RotateLeft => {
                position.rotate(position.direction().left());
                true
            }
            Self::RotateRight => {
                position.rotate(position.direction().right());
                true
            }
            Self::Composite(children) => children
                .iter()
                .all(|child| child.execute(position, sensors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Direction;
    use crate::sensor::ObstacleSensor;

    fn blocked(cells: &[(i32, i32)]) -> Vec<Box<dyn Sensor>> {
        vec![Box::new(cells.iter().copied().collect::<ObstacleSensor>())]
    }

    #[test]
    fn forward_and_backward_follow_direction() {
        let expected = [
            (Direction::North, (0, 1)),
            (Direction::East, (1, 0)),
            (Direction::South, (0, -1)),
            (Direction::West, (-1, 0)),
        ];
        for (direction, (x, y)) in expected {
            let mut pos = Position::new(0, 0, direction);
            assert!(Command::MoveForward.execute(&mut pos, &[]));
            assert_eq!((pos.x(), pos.y()), (x, y));

            let mut pos = Position::new(0, 0, direction);
            assert!(Command::MoveBackward.execute(&mut pos, &[]));
            assert_eq!((pos.x(), pos.y()), (-x, -y));
        }
    }

    #[test]
    fn vetoed_move_leaves_position_unchanged() {
        let sensors = blocked(&[(0, -1)]);
        let mut pos = Position::new(0, 0, Direction::North);
        assert!(!Command::MoveBackward.execute(&mut pos, &sensors));
        assert_eq!(pos, Position::new(0, 0, Direction::North));
    }

    #[test]
    fn move_past_coordinate_limit_fails_without_moving() {
        let mut pos = Position::new(i32::MAX, 0, Direction::East);
        assert!(!Command::MoveForward.execute(&mut pos, &[]));
        assert_eq!(pos, Position::new(i32::MAX, 0, Direction::East));

        let mut pos = Position::new(0, i32::MIN, Direction::North);
        assert!(!Command::MoveBackward.execute(&mut pos, &[]));
        assert_eq!(pos, Position::new(0, i32::MIN, Direction::North));

        // Stepping back inside the range still works.
        let mut pos = Position::new(i32::MAX, 0, Direction::East);
        assert!(Command::MoveBackward.execute(&mut pos, &[]));
        assert_eq!(pos.x(), i32::MAX - 1);
    }

    #[test]
    fn rotation_ignores_sensors() {
        let sensors: Vec<Box<dyn Sensor>> =
            vec![Box::new(|_x: i32, _y: i32| -> bool { false })];
        let mut pos = Position::new(5, 5, Direction::North);
        assert!(Command::RotateLeft.execute(&mut pos, &sensors));
        assert_eq!(pos.direction(), Direction::West);
        assert!(Command::RotateRight.execute(&mut pos, &sensors));
        assert!(Command::RotateRight.execute(&mut pos, &sensors));
        assert_eq!(pos.direction(), Direction::East);
        assert_eq!((pos.x(), pos.y()), (5, 5));
    }

    #[test]
    fn composite_keeps_partial_effects_on_failure() {
        let sensors = blocked(&[(0, 2)]);
        let cmd = Command::compose([
            Command::MoveForward,
            Command::MoveForward,
            Command::RotateRight,
        ]);
        let mut pos = Position::new(0, 0, Direction::North);
        assert!(!cmd.execute(&mut pos, &sensors));
        // First step committed, rotation never reached.
        assert_eq!(pos, Position::new(0, 1, Direction::North));
    }

    #[test]
    fn empty_composite_succeeds() {
        let mut pos = Position::new(1, 1, Direction::South);
        assert!(Command::Composite(Vec::new()).execute(&mut pos, &[]));
        assert_eq!(pos, Position::new(1, 1, Direction::South));
    }

    #[test]
    fn composites_nest_and_copy_independently() {
        let turn_around = Command::compose([Command::RotateRight, Command::RotateRight]);
        let parts = [turn_around.clone(), Command::MoveForward];
        let mut back_step = Command::compose_from(&parts);
        let original = back_step.clone();

        if let Command::Composite(children) = &mut back_step {
            children.push(Command::MoveForward);
        }
        assert_ne!(back_step, original);
        assert_eq!(parts[0], turn_around);

        let mut pos = Position::new(0, 0, Direction::North);
        assert!(original.execute(&mut pos, &[]));
        assert_eq!(pos, Position::new(0, -1, Direction::South));
    }
}
