//! Rotation angles and the clockwise convention.
//!
//! All angles are clockwise rotations of the grid as displayed with row 0 at
//! the top. Command-line codes follow the historical `1, 2, 3` numbering,
//! which counts quarter turns anti-clockwise: code 1 is 90° anti-clockwise,
//! i.e. 270° clockwise.

use crate::util::{RotateError, RotateResult};
use std::fmt;

/// A clockwise rotation by a multiple of 90°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationAngle {
    Cw90,
    Cw180,
    Cw270,
}

impl RotationAngle {
    /// All supported angles, in increasing order.
    pub const ALL: [RotationAngle; 3] = [Self::Cw90, Self::Cw180, Self::Cw270];

    /// Maps a command-line rotation code (`1`, `2`, `3`) to an angle.
    pub fn from_code(code: u32) -> RotateResult<Self> {
        match code {
            1 => Ok(Self::Cw270),
            2 => Ok(Self::Cw180),
            3 => Ok(Self::Cw90),
            _ => Err(RotateError::InvalidArgument {
                reason: format!("rotation code {code}, only [1,2,3] permitted"),
            }),
        }
    }

    /// Maps a clockwise angle in degrees to a rotation.
    pub fn from_degrees(degrees: u32) -> RotateResult<Self> {
        match degrees {
            90 => Ok(Self::Cw90),
            180 => Ok(Self::Cw180),
            270 => Ok(Self::Cw270),
            _ => Err(RotateError::InvalidArgument {
                reason: format!("{degrees} degrees is not a multiple of 90 in (0, 360)"),
            }),
        }
    }

    /// Clockwise angle in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Self::Cw90 => 90,
            Self::Cw180 => 180,
            Self::Cw270 => 270,
        }
    }

    /// The command-line code selecting this angle.
    pub fn code(self) -> u32 {
        match self {
            Self::Cw90 => 3,
            Self::Cw180 => 2,
            Self::Cw270 => 1,
        }
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::Cw90 => Self::Cw270,
            Self::Cw180 => Self::Cw180,
            Self::Cw270 => Self::Cw90,
        }
    }

    /// Returns `true` when the rotation swaps rows and columns.
    pub fn is_quarter_turn(self) -> bool {
        !matches!(self, Self::Cw180)
    }

    /// Output `(rows, cols)` for an input of `rows x cols`.
    pub fn output_dims(self, rows: usize, cols: usize) -> (usize, usize) {
        if self.is_quarter_turn() {
            (cols, rows)
        } else {
            (rows, cols)
        }
    }
}

impl fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° clockwise", self.degrees())
    }
}
