//! Rover position and orientation on the grid.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single grid coordinate. The grid is unbounded and coordinates may go negative.
pub type Coordinate = i32;

/// The four cardinal directions a rover can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order, starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// One quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// One quarter turn clockwise.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step taken when moving forward while facing this direction.
    ///
    /// North/south move along Y, east/west along X. Moving backward is the negation.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        };
        f.write_str(name)
    }
}

/// Grid cell plus facing direction.
///
/// Only mutated through [`move_to`](Self::move_to) and [`rotate`](Self::rotate).
/// Neither validates anything: callers consult sensors before committing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    cell: IVec2,
    direction: Direction,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            cell: IVec2::ZERO,
            direction: Direction::North,
        }
    }
}

impl Position {
    /// Creates a position at `(x, y)` facing `direction`.
    pub fn new(x: Coordinate, y: Coordinate, direction: Direction) -> Self {
        Self {
            cell: IVec2::new(x, y),
            direction,
        }
    }

    /// Current X coordinate.
    pub fn x(&self) -> Coordinate {
        self.cell.x
    }

    /// Current Y coordinate.
    pub fn y(&self) -> Coordinate {
        self.cell.y
    }

    /// Current cell as a vector.
    pub fn cell(&self) -> IVec2 {
        self.cell
    }

    /// Current facing direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the coordinates unconditionally.
    pub fn move_to(&mut self, x: Coordinate, y: Coordinate) {
        self.cell = IVec2::new(x, y);
    }

    /// Sets the facing direction unconditionally.
    pub fn rotate(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// The cell one step ahead, without moving.
    ///
    /// `None` when the step would leave the representable coordinate range.
    pub fn forward_cell(&self) -> Option<IVec2> {
        let step = self.direction.step();
        Some(IVec2::new(
            self.cell.x.checked_add(step.x)?,
            self.cell.y.checked_add(step.y)?,
        ))
    }

    /// The cell one step behind, without moving.
    ///
    /// `None` when the step would leave the representable coordinate range.
    pub fn backward_cell(&self) -> Option<IVec2> {
        let step = self.direction.step();
        Some(IVec2::new(
            self.cell.x.checked_sub(step.x)?,
            self.cell.y.checked_sub(step.y)?,
        ))
    }
}
