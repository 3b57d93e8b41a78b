//! Per-angle affine index maps.
//!
//! Source pixel `(i, j)` (row, column) lands on destination `(x, y)` (column,
//! row) with
//!
//! ```text
//!            x            y            x offset     y offset
//! 90° CW    -i            j            rows - 1     0
//! 180°      -j           -i            cols - 1     rows - 1
//! 270° CW    i           -j            0            cols - 1
//! ```
//!
//! Each linear part is a signed permutation matrix equal to its own transpose,
//! so the inverse map reuses the same coefficients. This is the only place in
//! the crate where raw index arithmetic for rotations happens.

use crate::rotate::RotationAngle;
use crate::util::{RotateError, RotateResult};

/// Closed-form destination index map for one angle and source shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffineMap {
    xi: isize,
    xj: isize,
    yi: isize,
    yj: isize,
    x0: isize,
    y0: isize,
    src_rows: usize,
    src_cols: usize,
    dst_rows: usize,
    dst_cols: usize,
}

impl AffineMap {
    /// Builds the map for rotating a `rows x cols` grid by `angle`.
    pub fn new(angle: RotationAngle, rows: usize, cols: usize) -> RotateResult<Self> {
        let invalid = RotateError::InvalidDimensions { rows, cols };
        if rows == 0 || cols == 0 {
            return Err(invalid);
        }
        let r = isize::try_from(rows).map_err(|_| invalid.clone())?;
        let c = isize::try_from(cols).map_err(|_| invalid)?;

        let (xi, xj, yi, yj, x0, y0) = match angle {
            RotationAngle::Cw90 => (-1, 0, 0, 1, r - 1, 0),
            RotationAngle::Cw180 => (0, -1, -1, 0, c - 1, r - 1),
            RotationAngle::Cw270 => (1, 0, 0, -1, 0, c - 1),
        };
        let (dst_rows, dst_cols) = angle.output_dims(rows, cols);
        Ok(Self {
            xi,
            xj,
            yi,
            yj,
            x0,
            y0,
            src_rows: rows,
            src_cols: cols,
            dst_rows,
            dst_cols,
        })
    }

    /// Destination `(rows, cols)`.
    pub fn output_dims(&self) -> (usize, usize) {
        (self.dst_rows, self.dst_cols)
    }

    /// Maps source `(i, j)` to destination `(x, y)`.
    ///
    /// Returns `None` when either coordinate falls outside its grid.
    #[inline]
    pub fn forward(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        if i >= self.src_rows || j >= self.src_cols {
            return None;
        }
        let (i, j) = (i as isize, j as isize);
        let x = self.xi * i + self.xj * j + self.x0;
        let y = self.yi * i + self.yj * j + self.y0;
        Self::checked(x, y, self.dst_cols, self.dst_rows)
    }

    /// Maps destination `(x, y)` back to source `(i, j)`.
    #[inline]
    pub fn inverse(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        if x >= self.dst_cols || y >= self.dst_rows {
            return None;
        }
        let dx = x as isize - self.x0;
        let dy = y as isize - self.y0;
        let i = self.xi * dx + self.yi * dy;
        let j = self.xj * dx + self.yj * dy;
        Self::checked(i, j, self.src_rows, self.src_cols)
    }

    /// Error for a destination cell `(x, y)` that has no place in the map.
    pub(crate) fn out_of_range(&self, x: usize, y: usize) -> RotateError {
        RotateError::DimensionMismatch {
            expected: self.dst_rows * self.dst_cols,
            got: y.saturating_mul(self.dst_cols).saturating_add(x),
        }
    }

    /// Error for a source cell `(i, j)` that has no place in the map.
    pub(crate) fn source_out_of_range(&self, i: usize, j: usize) -> RotateError {
        RotateError::DimensionMismatch {
            expected: self.src_rows * self.src_cols,
            got: i.saturating_mul(self.src_cols).saturating_add(j),
        }
    }

    fn checked(a: isize, b: isize, a_len: usize, b_len: usize) -> Option<(usize, usize)> {
        let a = usize::try_from(a).ok().filter(|&v| v < a_len)?;
        let b = usize::try_from(b).ok().filter(|&v| v < b_len)?;
        Some((a, b))
    }
}
