//! The bounded plateau rovers move across.

use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower-left corner of every surface, on both axes.
pub const LOWER_BOUND: i64 = 0;

/// One of the two grid axes. Used to attribute parse and bounds failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// An upper bound that falls below [`LOWER_BOUND`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("the upper bound {value} for coordinate {axis} must be greater than or equal to {lower_bound}")]
pub struct BoundsError {
    pub axis: Axis,
    pub value: i64,
    pub lower_bound: i64,
}

/// A serialized surface that cannot be rebuilt through [`Surface::new`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceRecordError {
    #[error(
        "the lower bounds [{x},{y}] must be the origin [{origin},{origin}]",
        x = .0.x,
        y = .0.y,
        origin = LOWER_BOUND
    )]
    DetachedOrigin(I64Vec2),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

/// Serialized form of a [`Surface`], validated on the way in.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SurfaceRecord {
    pub lower: I64Vec2,
    pub upper: I64Vec2,
}

/// An axis-aligned rectangle anchored at the origin.
///
/// Both bounds are inclusive. A surface never changes after construction, so
/// every rover in a run checks itself against the same shared reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SurfaceRecord")]
pub struct Surface {
    lower: I64Vec2,
    upper: I64Vec2,
}

impl Surface {
    /// Builds a surface spanning `[0, upper_x] × [0, upper_y]`.
    pub fn new(upper_x: i64, upper_y: i64) -> Result<Self, BoundsError> {
        if upper_x < LOWER_BOUND {
            return Err(BoundsError {
                axis: Axis::X,
                value: upper_x,
                lower_bound: LOWER_BOUND,
            });
        }
        if upper_y < LOWER_BOUND {
            return Err(BoundsError {
                axis: Axis::Y,
                value: upper_y,
                lower_bound: LOWER_BOUND,
            });
        }
        Ok(Self {
            lower: I64Vec2::splat(LOWER_BOUND),
            upper: I64Vec2::new(upper_x, upper_y),
        })
    }

    pub fn lower(&self) -> I64Vec2 {
        self.lower
    }

    pub fn upper(&self) -> I64Vec2 {
        self.upper
    }

    /// Returns true when `point` lies inside the surface, edges included.
    pub fn contains(&self, point: I64Vec2) -> bool {
        point.cmpge(self.lower).all() && point.cmple(self.upper).all()
    }
}

impl TryFrom<SurfaceRecord> for Surface {
    type Error = SurfaceRecordError;

    fn try_from(record: SurfaceRecord) -> Result<Self, Self::Error> {
        if record.lower != I64Vec2::splat(LOWER_BOUND) {
            return Err(SurfaceRecordError::DetachedOrigin(record.lower));
        }
        Ok(Surface::new(record.upper.x, record.upper.y)?)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Surface | lower-bounds [{},{}] - upper-bounds [{},{}]",
            self.lower.x, self.lower.y, self.upper.x, self.upper.y
        )
    }
}
