//! Rayon fork-join kernel (feature-gated).
//!
//! The destination is split into disjoint mutable rows with
//! `par_chunks_exact_mut`, and each task owns exactly one of them. A
//! destination row is the image of exactly one source line, which the task
//! walks through the inverse affine map: the unit of work is one source row
//! for 180° and one source column for 90° and 270°. No two tasks can touch
//! the same cell and the output is only read after the join.

use crate::grid::PixelGrid;
use crate::rotate::AffineMap;
use crate::util::RotateResult;
use rayon::prelude::*;

/// Row-parallel rotation of `src` into `dst`.
pub(crate) fn rotate_rows_par(
    src: &PixelGrid,
    map: &AffineMap,
    dst: &mut PixelGrid,
) -> RotateResult<()> {
    let channels = src.channels();
    dst.par_rows_mut()
        .enumerate()
        .try_for_each(|(y, out_row)| fill_row(src, map, y, out_row, channels))
}

fn fill_row(
    src: &PixelGrid,
    map: &AffineMap,
    y: usize,
    out_row: &mut [u8],
    channels: usize,
) -> RotateResult<()> {
    for (x, out) in out_row.chunks_exact_mut(channels).enumerate() {
        let (i, j) = map.inverse(x, y).ok_or_else(|| map.out_of_range(x, y))?;
        let px = src
            .pixel(i, j)
            .ok_or_else(|| map.source_out_of_range(i, j))?;
        out.copy_from_slice(px);
    }
    Ok(())
}
