//! Obstacle sensors that can veto a candidate cell.

use crate::position::Coordinate;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A predicate over grid cells. Queried fresh for every candidate move.
pub trait Sensor {
    /// Returns `false` if the rover must not enter `(x, y)`.
    fn is_safe(&self, x: Coordinate, y: Coordinate) -> bool;
}

impl<F> Sensor for F
where
    F: Fn(Coordinate, Coordinate) -> bool,
{
    fn is_safe(&self, x: Coordinate, y: Coordinate) -> bool {
        self(x, y)
    }
}

/// Checks `cell` against every sensor in registration order.
///
/// Stops at the first sensor that reports the cell unsafe; later sensors are not queried.
pub fn all_safe(sensors: &[Box<dyn Sensor>], cell: IVec2) -> bool {
    sensors.iter().all(|sensor| sensor.is_safe(cell.x, cell.y))
}

/// A sensor backed by a known set of obstructed cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleSensor {
    obstacles: HashSet<IVec2>,
}

impl ObstacleSensor {
    /// Creates a sensor with no obstacles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `(x, y)` as obstructed.
    pub fn add(&mut self, x: Coordinate, y: Coordinate) {
        self.obstacles.insert(IVec2::new(x, y));
    }

    /// Whether `(x, y)` is marked as obstructed.
    pub fn contains(&self, x: Coordinate, y: Coordinate) -> bool {
        self.obstacles.contains(&IVec2::new(x, y))
    }

    /// Number of obstructed cells.
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether no cell is obstructed.
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl FromIterator<(Coordinate, Coordinate)> for ObstacleSensor {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Coordinate)>>(iter: I) -> Self {
        Self {
            obstacles: iter.into_iter().map(|(x, y)| IVec2::new(x, y)).collect(),
        }
    }
}

impl Sensor for ObstacleSensor {
    fn is_safe(&self, x: Coordinate, y: Coordinate) -> bool {
        !self.contains(x, y)
    }
}
