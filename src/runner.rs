//! Runner that turns an instruction text into the resting positions of its rovers.
//!
//! The entry point is [`run`]. It builds a [`Surface`] from the first line, then
//! places and guides one [`Rover`] per following (placement, command string)
//! pair, and returns a [`Mission`] holding every rover that came to rest along
//! with the error that stopped the run, if any.

use crate::error::RunError;
use crate::rover::{Rover, RoverId};
use crate::surface::{Axis, Surface};
use crate::travel::{Command, Heading};
use glam::I64Vec2;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// The smallest instruction text that describes a simulation.
pub const MINIMUM_INPUT_LINES: usize = 3;

/// Number of bounds on the surface definition line.
pub const SURFACE_DIMENSIONS: usize = 2;

/// Number of tokens on a rover placement line: `x y heading`.
pub const ROVER_INSTRUCTION_LENGTH: usize = 3;

/// The outcome of a run.
///
/// `rovers` holds every rover that finished its command string, in input order.
/// When `error` is set, `rovers` stops just before the rover that failed; the
/// failing rover's partial progress is never included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mission {
    pub rovers: Vec<Rover>,
    pub error: Option<RunError>,
}

impl Mission {
    /// Resting positions, one `X Y H` line per rover, joined by `\n`.
    pub fn output(&self) -> String {
        self.rovers
            .iter()
            .map(Rover::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into a `Result`, keeping the partial output on failure.
    pub fn into_result(self) -> Result<String, MissionFailure> {
        let output = self.output();
        match self.error {
            None => Ok(output),
            Some(error) => Err(MissionFailure { output, error }),
        }
    }

    pub fn report(&self) -> MissionReport<'_> {
        MissionReport {
            rovers: &self.rovers,
            error: self.error.as_ref().map(|e| ErrorReport {
                kind: e.kind(),
                message: e.to_string(),
                rover: e.rover_id(),
            }),
        }
    }
}

/// A failed run together with the output of the rovers that finished before it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("run stopped after {resting} resting rover(s)", resting = .output.lines().count())]
pub struct MissionFailure {
    pub output: String,
    #[source]
    pub error: RunError,
}

/// Machine-readable view of a [`Mission`].
#[derive(Serialize)]
pub struct MissionReport<'a> {
    pub rovers: &'a [Rover],
    pub error: Option<ErrorReport>,
}

#[derive(Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    pub rover: Option<RoverId>,
}

/// Runs every rover described by `input` across the surface it defines.
///
/// # Input
///
/// Lines are delimited by `\n` after trimming the whole text; tokens within a
/// line are separated by whitespace.
///
/// ```text
/// 5 5        <- upper-right corner of the surface
/// 1 2 N      <- placement of rover 0
/// LMLMLMLMM  <- commands for rover 0
/// 3 3 E      <- placement of rover 1
/// MMRMMRMRRM <- commands for rover 1
/// ```
///
/// # Failure
///
/// The first failure of any kind stops the run. Rovers that already came to
/// rest are kept in the returned [`Mission`]; the failing rover is not.
pub fn run(input: &str) -> Mission {
    let mut mission = Mission::default();
    if let Err(error) = guide_all(input, &mut mission.rovers) {
        warn!(%error, resting = mission.rovers.len(), "run aborted");
        mission.error = Some(error);
    }
    mission
}

fn guide_all(input: &str, resting: &mut Vec<Rover>) -> Result<(), RunError> {
    let lines: Vec<&str> = input.trim().split('\n').collect();
    if lines.len() < MINIMUM_INPUT_LINES {
        return Err(RunError::TooFewLines { lines: lines.len() });
    }
    if lines.len() % 2 == 0 {
        return Err(RunError::EvenLineCount { lines: lines.len() });
    }

    let surface = build_surface(lines[0])?;
    debug!(%surface, "surface built");

    for (id, pair) in lines[1..].chunks_exact(2).enumerate() {
        let mut rover = build_rover(&surface, id, pair[0])?;
        debug!(id, %rover, "rover placed");
        guide_rover(&surface, &mut rover, pair[1])?;
        debug!(id, %rover, "rover at rest");
        resting.push(rover);
    }
    Ok(())
}

fn build_surface(line: &str) -> Result<Surface, RunError> {
    let bounds: Vec<&str> = line.split_whitespace().collect();
    if bounds.len() != SURFACE_DIMENSIONS {
        return Err(RunError::SurfaceDimensionMismatch {
            surface: line.to_string(),
            dimensions: bounds.len(),
        });
    }

    let bound = |axis: Axis, token: &str| {
        token
            .parse::<i64>()
            .map_err(|source| RunError::SurfaceBoundaryParse {
                axis,
                boundary: token.to_string(),
                source,
            })
    };
    let upper_x = bound(Axis::X, bounds[0])?;
    let upper_y = bound(Axis::Y, bounds[1])?;

    Ok(Surface::new(upper_x, upper_y)?)
}

/// Parses a placement line and checks the rover starts on the surface.
fn build_rover(surface: &Surface, id: RoverId, line: &str) -> Result<Rover, RunError> {
    let config: Vec<&str> = line.split_whitespace().collect();
    if config.len() != ROVER_INSTRUCTION_LENGTH {
        return Err(RunError::RobotInstructionLength {
            id,
            instructions: line.to_string(),
            tokens: config.len(),
        });
    }

    let coordinate = |axis: Axis, token: &str| {
        token
            .parse::<i64>()
            .map_err(|source| RunError::RobotCoordinateParse {
                id,
                axis,
                position: token.to_string(),
                source,
            })
    };
    let x = coordinate(Axis::X, config[0])?;
    let y = coordinate(Axis::Y, config[1])?;
    let heading: Heading = config[2]
        .parse()
        .map_err(|source| RunError::RobotDirectionParse {
            id,
            direction: config[2].to_string(),
            source,
        })?;

    let position = I64Vec2::new(x, y);
    if !surface.contains(position) {
        return Err(RunError::RobotOutOfBounds { id, x, y });
    }
    Ok(Rover::new(id, position, heading))
}

/// Replays `commands` one character at a time, checking bounds after each.
fn guide_rover(surface: &Surface, rover: &mut Rover, commands: &str) -> Result<(), RunError> {
    for c in commands.trim().chars() {
        let command = Command::try_from(c).map_err(|source| RunError::RobotMovementParse {
            id: rover.id,
            movement: c.to_string(),
            source,
        })?;
        rover.step(command);
        trace!(id = rover.id, %command, %rover, "step");

        if !surface.contains(rover.position) {
            return Err(RunError::RobotOutOfBounds {
                id: rover.id,
                x: rover.x(),
                y: rover.y(),
            });
        }
    }
    Ok(())
}
