//! # rover-runner
//!
//! Simulates rovers driving across a bounded plateau from a textual instruction set.
//!
//! The first line of the instructions defines the [`Surface`]; each following pair
//! of lines places a [`Rover`] and gives it a command string of `L`, `R` and `M`.
//! [`run`] replays every rover in order and reports where each one came to rest.
//! A failure stops the run but never discards the rovers that already finished.

pub mod error;
pub mod rover;
pub mod runner;
pub mod surface;
pub mod travel;

pub use error::*;
pub use rover::*;
pub use runner::*;
pub use surface::*;
pub use travel::*;
