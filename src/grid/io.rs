//! Loading and saving grids via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Every decoded image is
//! converted to interleaved RGB8, whatever its on-disk layout.

use crate::grid::{PixelGrid, RGB_CHANNELS};
use crate::util::{RotateError, RotateResult};
use image::RgbImage;
use std::path::Path;

/// Creates an owned grid from an RGB image buffer.
pub fn grid_from_rgb_image(img: &RgbImage) -> RotateResult<PixelGrid> {
    let cols = img.width() as usize;
    let rows = img.height() as usize;
    PixelGrid::new(img.as_raw().clone(), rows, cols, RGB_CHANNELS)
}

/// Creates an RGB image buffer holding a copy of `grid`.
pub fn rgb_image_from_grid(grid: &PixelGrid) -> RotateResult<RgbImage> {
    if grid.channels() != RGB_CHANNELS {
        return Err(RotateError::UnsupportedFormat {
            channels: grid.channels(),
        });
    }
    let dims = (u32::try_from(grid.cols()), u32::try_from(grid.rows()));
    let (Ok(width), Ok(height)) = dims else {
        return Err(RotateError::InvalidDimensions {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    };
    RgbImage::from_raw(width, height, grid.as_slice().to_vec()).ok_or(
        RotateError::DimensionMismatch {
            expected: grid.rows() * grid.row_stride(),
            got: grid.as_slice().len(),
        },
    )
}

/// Loads an image from disk and converts it to an RGB grid.
pub fn load_rgb_grid<P: AsRef<Path>>(path: P) -> RotateResult<PixelGrid> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| RotateError::Load {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    let grid = grid_from_rgb_image(&img.to_rgb8())?;
    if grid.is_empty() {
        return Err(RotateError::Load {
            path: path.display().to_string(),
            reason: "image has no pixels".to_string(),
        });
    }
    Ok(grid)
}

/// Encodes `grid` to `path`; the format follows the file extension.
pub fn save_rgb_grid<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> RotateResult<()> {
    let path = path.as_ref();
    let img = rgb_image_from_grid(grid)?;
    img.save(path).map_err(|err| RotateError::Write {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}
