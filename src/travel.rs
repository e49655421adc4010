//! Heading and command vocabulary, plus the transition table that drives a rover.

use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass heading of a rover.
///
/// `Unknown` only exists so the transition table has a total domain; a placed
/// rover never holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Facing `+y` (`N`).
    #[serde(rename = "N")]
    North,
    /// Facing `+x` (`E`).
    #[serde(rename = "E")]
    East,
    /// Facing `-y` (`S`).
    #[serde(rename = "S")]
    South,
    /// Facing `-x` (`W`).
    #[serde(rename = "W")]
    West,
    /// Placeholder for an unparseable heading (`_`).
    #[serde(rename = "_")]
    Unknown,
}

impl Heading {
    /// The single-character code used in instruction text and rendered output.
    pub fn code(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
            Heading::Unknown => '_',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A heading token that is not exactly one of `N`, `E`, `S`, `W`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{token}' is not a valid direction")]
pub struct ParseHeadingError {
    pub token: String,
}

impl TryFrom<char> for Heading {
    type Error = ParseHeadingError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(ParseHeadingError {
                token: c.to_string(),
            }),
        }
    }
}

impl FromStr for Heading {
    type Err = ParseHeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c).map_err(|_| ParseHeadingError {
                token: s.to_string(),
            }),
            _ => Err(ParseHeadingError {
                token: s.to_string(),
            }),
        }
    }
}

/// A single instruction in a rover's command string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Rotate 90 degrees counter-clockwise (`L`).
    #[serde(rename = "L")]
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    #[serde(rename = "R")]
    TurnRight,
    /// Advance one grid unit along the current heading (`M`).
    #[serde(rename = "M")]
    StepForward,
    /// Placeholder for an unparseable command (`_`).
    #[serde(rename = "_")]
    Unknown,
}

impl Command {
    /// The single-character code used in command strings.
    pub fn code(self) -> char {
        match self {
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
            Command::StepForward => 'M',
            Command::Unknown => '_',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A command token that is not exactly one of `L`, `R`, `M`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{token}' is not a valid move")]
pub struct ParseCommandError {
    pub token: String,
}

impl TryFrom<char> for Command {
    type Error = ParseCommandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Command::TurnLeft),
            'R' => Ok(Command::TurnRight),
            'M' => Ok(Command::StepForward),
            _ => Err(ParseCommandError {
                token: c.to_string(),
            }),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Command::try_from(c).map_err(|_| ParseCommandError {
                token: s.to_string(),
            }),
            _ => Err(ParseCommandError {
                token: s.to_string(),
            }),
        }
    }
}

/// Looks up the displacement and resulting heading for `command` issued while
/// facing `heading`.
///
/// Turns never move the rover. `TurnLeft` cycles N → W → S → E → N and
/// `TurnRight` cycles the other way. `StepForward` moves one unit along the
/// current heading's axis and keeps the heading.
///
/// Any pair involving an `Unknown` sentinel yields a zero displacement and the
/// input heading unchanged.
pub fn travel(heading: Heading, command: Command) -> (I64Vec2, Heading) {
    use Command::{StepForward, TurnLeft, TurnRight};
    use Heading::{East, North, South, West};

    match (heading, command) {
        (North, TurnLeft) => (I64Vec2::ZERO, West),
        (North, TurnRight) => (I64Vec2::ZERO, East),
        (North, StepForward) => (I64Vec2::Y, North),

        (East, TurnLeft) => (I64Vec2::ZERO, North),
        (East, TurnRight) => (I64Vec2::ZERO, South),
        (East, StepForward) => (I64Vec2::X, East),

        (South, TurnLeft) => (I64Vec2::ZERO, East),
        (South, TurnRight) => (I64Vec2::ZERO, West),
        (South, StepForward) => (I64Vec2::NEG_Y, South),

        (West, TurnLeft) => (I64Vec2::ZERO, South),
        (West, TurnRight) => (I64Vec2::ZERO, North),
        (West, StepForward) => (I64Vec2::NEG_X, West),

        (Heading::Unknown, _) | (_, Command::Unknown) => (I64Vec2::ZERO, heading),
    }
}
