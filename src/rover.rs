//! Rover state and operations.

use crate::travel::{Command, Heading, travel};
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence index of a rover's (placement, command string) pair within the input.
pub type RoverId = usize;

/// A serialized rover facing the `Unknown` sentinel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("robot ID {id} cannot be built with an unknown direction")]
pub struct RoverRecordError {
    pub id: RoverId,
}

/// Serialized form of a [`Rover`], validated on the way in.
#[derive(Clone, Debug, Deserialize)]
pub struct RoverRecord {
    pub id: RoverId,
    pub position: I64Vec2,
    pub heading: Heading,
}

/// The state of a single rover.
///
/// Tracks where the rover stands and which way it faces. A rover knows nothing
/// about the surface it is on; bounds are enforced by whoever drives it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoverRecord")]
pub struct Rover {
    /// Position of the pair that declared this rover, counting from zero.
    pub id: RoverId,

    /// Current grid position.
    pub position: I64Vec2,

    /// Current heading.
    pub heading: Heading,
}

impl Rover {
    pub fn new(id: RoverId, position: I64Vec2, heading: Heading) -> Self {
        Self {
            id,
            position,
            heading,
        }
    }

    pub fn x(&self) -> i64 {
        self.position.x
    }

    pub fn y(&self) -> i64 {
        self.position.y
    }

    /// Translates the rover by `displacement` and turns it to face `heading`.
    ///
    /// The update is unchecked. Addition wraps at the `i64` edges so that an
    /// extreme surface cannot trap; the wrapped position is always out of bounds.
    pub fn apply(&mut self, displacement: I64Vec2, heading: Heading) {
        self.position = self.position.wrapping_add(displacement);
        self.heading = heading;
    }

    /// Executes one command from the rover's current heading.
    pub fn step(&mut self, command: Command) {
        let (displacement, heading) = travel(self.heading, command);
        self.apply(displacement, heading);
    }

    /// Renders the rover as `X Y H`, e.g. `1 3 N`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl TryFrom<RoverRecord> for Rover {
    type Error = RoverRecordError;

    fn try_from(record: RoverRecord) -> Result<Self, Self::Error> {
        if record.heading == Heading::Unknown {
            return Err(RoverRecordError { id: record.id });
        }
        Ok(Rover::new(record.id, record.position, record.heading))
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}
