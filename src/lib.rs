//! Quadrot rotates RGB pixel grids by 90°, 180° or 270° clockwise.
//!
//! The direct rotator maps each pixel through a closed-form affine index map
//! and runs row-parallel via the `rayon` feature (enabled by default). A
//! second rotator composed from transpose and mirrors serves as a cross-check,
//! and [`Harness`] times the two against each other. File loading and saving
//! are available behind the `image-io` feature.

pub mod grid;
pub mod harness;
pub mod rotate;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use grid::io;

pub use grid::{Mismatch, PixelGrid, RGB_CHANNELS};
pub use harness::{marked_path, ComposeMode, Harness, HarnessConfig, HarnessReport, Timed};
pub use rotate::compose::{compose_rotate, mirror, rotate_ninety, transpose, transpose_mirror};
pub use rotate::{
    rotate_direct, AffineMap, ComposeRotator, DirectRotator, Execution, Mirror, RotationAngle,
};
pub use util::{RotateError, RotateResult};
