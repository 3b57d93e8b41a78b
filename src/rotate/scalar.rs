//! Sequential reference kernel.
//!
//! Walks the source row by row and scatters each pixel to the destination
//! cell chosen by the affine map. Always compiled; it is also the fallback
//! when the parallel strategy is unavailable.

use crate::grid::PixelGrid;
use crate::rotate::AffineMap;
use crate::util::{RotateError, RotateResult};

/// Scatters every pixel of `src` into `dst` through `map`.
pub(crate) fn rotate_rows_seq(
    src: &PixelGrid,
    map: &AffineMap,
    dst: &mut PixelGrid,
) -> RotateResult<()> {
    let channels = src.channels();
    for i in 0..src.rows() {
        let row = src.row(i).ok_or(RotateError::DimensionMismatch {
            expected: src.rows() * src.row_stride(),
            got: src.as_slice().len(),
        })?;
        for (j, px) in row.chunks_exact(channels).enumerate() {
            let (x, y) = map
                .forward(i, j)
                .ok_or_else(|| map.source_out_of_range(i, j))?;
            let out = dst.pixel_mut(y, x).ok_or_else(|| map.out_of_range(x, y))?;
            out.copy_from_slice(px);
        }
    }
    Ok(())
}
