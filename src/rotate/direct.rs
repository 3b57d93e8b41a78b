//! Direct index rotation.

use crate::grid::PixelGrid;
use crate::rotate::scalar::rotate_rows_seq;
use crate::rotate::{AffineMap, Execution, RotationAngle};
use crate::trace::{trace_event, trace_span};
use crate::util::{RotateError, RotateResult};

#[cfg(feature = "rayon")]
use crate::rotate::rayon::rotate_rows_par;

/// Rotates `grid` by `angle` using the closed-form affine index map.
///
/// The input must be a non-empty RGB grid. The result is a freshly allocated
/// grid of `angle.output_dims(rows, cols)`; the input is never modified. Both
/// execution strategies produce identical output.
pub fn rotate_direct(
    grid: &PixelGrid,
    angle: RotationAngle,
    execution: Execution,
) -> RotateResult<PixelGrid> {
    grid.ensure_rgb()?;
    let _span = trace_span!(
        "rotate_direct",
        degrees = angle.degrees(),
        rows = grid.rows(),
        cols = grid.cols(),
        parallel = execution.is_parallel()
    )
    .entered();

    let map = AffineMap::new(angle, grid.rows(), grid.cols())?;
    let (out_rows, out_cols) = map.output_dims();
    let mut out = PixelGrid::zeroed(out_rows, out_cols, grid.channels())?;

    let expected = out_rows * out_cols * grid.channels();
    if out.as_slice().len() != expected {
        return Err(RotateError::DimensionMismatch {
            expected,
            got: out.as_slice().len(),
        });
    }

    match execution {
        Execution::Sequential => rotate_rows_seq(grid, &map, &mut out)?,
        #[cfg(feature = "rayon")]
        Execution::Parallel => rotate_rows_par(grid, &map, &mut out)?,
        #[cfg(not(feature = "rayon"))]
        Execution::Parallel => {
            trace_event!("parallel_unavailable", fallback = "sequential");
            rotate_rows_seq(grid, &map, &mut out)?
        }
    }

    trace_event!("rotate_direct_done", out_rows = out_rows, out_cols = out_cols);
    Ok(out)
}

/// Direct index rotator bound to an execution strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectRotator {
    execution: Execution,
}

impl DirectRotator {
    /// Creates a rotator using the default execution strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the execution strategy.
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Returns the execution strategy in use.
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Rotates `grid` by `angle`.
    pub fn rotate(&self, grid: &PixelGrid, angle: RotationAngle) -> RotateResult<PixelGrid> {
        rotate_direct(grid, angle, self.execution)
    }
}
