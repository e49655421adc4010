//! Failures that abort a run.

use crate::rover::RoverId;
use crate::runner::{MINIMUM_INPUT_LINES, ROVER_INSTRUCTION_LENGTH, SURFACE_DIMENSIONS};
use crate::surface::{Axis, BoundsError};
use crate::travel::{ParseCommandError, ParseHeadingError};
use std::num::ParseIntError;

/// Everything that can stop a run, one variant per failure kind.
///
/// Every variant is terminal. Rover-scoped variants carry the id of the rover
/// that failed so callers can line the error up with the partial output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(
        "the input should have at least {min} lines - {lines} lines were detected",
        min = MINIMUM_INPUT_LINES
    )]
    TooFewLines { lines: usize },

    /// One surface line plus two lines per rover always gives `2n + 1`.
    #[error("the input should have an odd number of lines - {lines} lines were detected")]
    EvenLineCount { lines: usize },

    #[error(
        "surface '{surface}' does not have the required number of dimensions - expected {expected} - detected {dimensions}",
        expected = SURFACE_DIMENSIONS
    )]
    SurfaceDimensionMismatch { surface: String, dimensions: usize },

    #[error("{axis} coordinate boundary '{boundary}' cannot be transformed into an int")]
    SurfaceBoundaryParse {
        axis: Axis,
        boundary: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unable to create new surface")]
    SurfaceBoundsInvalid(#[from] BoundsError),

    #[error(
        "'{instructions}' for robot ID {id} does not have the required number of instructions - expected {expected} - detected {tokens}",
        expected = ROVER_INSTRUCTION_LENGTH
    )]
    RobotInstructionLength {
        id: RoverId,
        instructions: String,
        tokens: usize,
    },

    #[error("robot ID {id}'s {axis}-coordinate '{position}' cannot be transformed into an int")]
    RobotCoordinateParse {
        id: RoverId,
        axis: Axis,
        position: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unable to parse robot ID {id}'s direction: {direction}")]
    RobotDirectionParse {
        id: RoverId,
        direction: String,
        #[source]
        source: ParseHeadingError,
    },

    /// Raised for an out-of-bounds placement (attempted coordinates) and for a
    /// move that leaves the surface (coordinates after the move).
    #[error("robot ID {id} has moved out of bounds - X: {x} Y: {y}")]
    RobotOutOfBounds { id: RoverId, x: i64, y: i64 },

    #[error("unable to parse robot ID {id}'s movement: {movement}")]
    RobotMovementParse {
        id: RoverId,
        movement: String,
        #[source]
        source: ParseCommandError,
    },
}

impl RunError {
    /// The rover the failure is attributed to, if any.
    pub fn rover_id(&self) -> Option<RoverId> {
        match self {
            RunError::RobotInstructionLength { id, .. }
            | RunError::RobotCoordinateParse { id, .. }
            | RunError::RobotDirectionParse { id, .. }
            | RunError::RobotOutOfBounds { id, .. }
            | RunError::RobotMovementParse { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Stable name of the failure kind, for machine-readable reports.
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::TooFewLines { .. } => "TooFewLines",
            RunError::EvenLineCount { .. } => "EvenLineCount",
            RunError::SurfaceDimensionMismatch { .. } => "SurfaceDimensionMismatch",
            RunError::SurfaceBoundaryParse { .. } => "SurfaceBoundaryParse",
            RunError::SurfaceBoundsInvalid(_) => "SurfaceBoundsInvalid",
            RunError::RobotInstructionLength { .. } => "RobotInstructionLength",
            RunError::RobotCoordinateParse { .. } => "RobotCoordinateParse",
            RunError::RobotDirectionParse { .. } => "RobotDirectionParse",
            RunError::RobotOutOfBounds { .. } => "RobotOutOfBounds",
            RunError::RobotMovementParse { .. } => "RobotMovementParse",
        }
    }
}
