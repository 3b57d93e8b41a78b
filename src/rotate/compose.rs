//! Rotation by composing transpose with axis mirrors.
//!
//! ```text
//!  source        transpose     mirror (horizontal)
//! ┌───────┐      ┌─────┐       ┌─────┐
//! │ 1 2 3 │      │ 1 4 │       │ 4 1 │
//! │ 4 5 6 │  ->  │ 2 5 │  ->   │ 5 2 │   = 90° clockwise
//! └───────┘      │ 3 6 │       │ 6 3 │
//!                └─────┘       └─────┘
//! ```
//!
//! Mirroring the transpose vertically instead gives 270° clockwise, and
//! mirroring the untransposed source on both axes gives 180°. These functions
//! exist to validate the direct rotator, not to compete with it.

use crate::grid::PixelGrid;
use crate::rotate::RotationAngle;
use crate::trace::trace_span;
use crate::util::{RotateError, RotateResult};

/// Axis for [`mirror`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mirror {
    /// Reverse the pixel order within each row.
    Horizontal,
    /// Reverse the order of the rows.
    Vertical,
    /// Both of the above.
    Both,
}

/// Returns the transpose of `grid`: `out[j][i] = grid[i][j]`.
pub fn transpose(grid: &PixelGrid) -> RotateResult<PixelGrid> {
    let channels = grid.channels();
    let mut out = PixelGrid::zeroed(grid.cols(), grid.rows(), channels)?;
    let mismatch = RotateError::DimensionMismatch {
        expected: grid.as_slice().len(),
        got: out.as_slice().len(),
    };
    for i in 0..grid.rows() {
        let row = grid.row(i).ok_or_else(|| mismatch.clone())?;
        for (j, px) in row.chunks_exact(channels).enumerate() {
            let dst = out.pixel_mut(j, i).ok_or_else(|| mismatch.clone())?;
            dst.copy_from_slice(px);
        }
    }
    Ok(out)
}

/// Mirrors `grid` in place along `axis`. Pixels move as a whole.
pub fn mirror(grid: &mut PixelGrid, axis: Mirror) {
    let channels = grid.channels();
    if matches!(axis, Mirror::Horizontal | Mirror::Both) {
        for row in grid.rows_mut() {
            row.reverse();
            for px in row.chunks_exact_mut(channels) {
                px.reverse();
            }
        }
    }
    if matches!(axis, Mirror::Vertical | Mirror::Both) {
        let mut rows: Vec<&mut [u8]> = grid.rows_mut().collect();
        let half = rows.len() / 2;
        let (top, bottom) = rows.split_at_mut(half);
        for (a, b) in top.iter_mut().zip(bottom.iter_mut().rev()) {
            a.swap_with_slice(b);
        }
    }
}

/// Transposes `grid`, then mirrors the result along `axis`.
pub fn transpose_mirror(grid: &PixelGrid, axis: Mirror) -> RotateResult<PixelGrid> {
    let mut out = transpose(grid)?;
    mirror(&mut out, axis);
    Ok(out)
}

/// Rotates `grid` 90° clockwise as transpose followed by a horizontal mirror.
pub fn rotate_ninety(grid: &PixelGrid) -> RotateResult<PixelGrid> {
    grid.ensure_rgb()?;
    let _span = trace_span!("rotate_compose", degrees = 90u32).entered();
    transpose_mirror(grid, Mirror::Horizontal)
}

/// Rotates `grid` by any supported angle using transpose and mirrors only.
pub fn compose_rotate(grid: &PixelGrid, angle: RotationAngle) -> RotateResult<PixelGrid> {
    grid.ensure_rgb()?;
    let _span = trace_span!("rotate_compose", degrees = angle.degrees()).entered();
    match angle {
        RotationAngle::Cw90 => transpose_mirror(grid, Mirror::Horizontal),
        RotationAngle::Cw180 => {
            let mut out = grid.clone();
            mirror(&mut out, Mirror::Both);
            Ok(out)
        }
        RotationAngle::Cw270 => transpose_mirror(grid, Mirror::Vertical),
    }
}

/// Reference rotator built from transpose and mirror primitives.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComposeRotator;

impl ComposeRotator {
    /// 90° clockwise rotation.
    pub fn rotate_ninety(&self, grid: &PixelGrid) -> RotateResult<PixelGrid> {
        rotate_ninety(grid)
    }

    /// Rotation by any supported angle.
    pub fn rotate(&self, grid: &PixelGrid, angle: RotationAngle) -> RotateResult<PixelGrid> {
        compose_rotate(grid, angle)
    }
}
