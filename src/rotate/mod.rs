//! Fixed-angle grid rotation.
//!
//! Two independent implementations compute the same result:
//!
//! - [`rotate_direct`] maps every pixel through a closed-form [`AffineMap`]
//!   and can run sequentially or row-parallel, depending on [`Execution`].
//! - [`compose::rotate_ninety`] and [`compose::compose_rotate`] chain a
//!   transpose with axis mirrors and serve as a cross-check.

mod affine;
mod angle;
pub mod compose;
mod direct;
mod scalar;

#[cfg(feature = "rayon")]
mod rayon;

pub use affine::AffineMap;
pub use angle::RotationAngle;
pub use compose::{ComposeRotator, Mirror};
pub use direct::{rotate_direct, DirectRotator};

/// How the direct rotator schedules its row work.
///
/// `Parallel` uses rayon fork-join when the `rayon` feature is enabled and
/// degrades to the sequential loop otherwise; the output is bit-identical
/// either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Execution {
    /// One row after another on the calling thread.
    Sequential,
    /// Rows dispatched to the rayon pool and joined before returning.
    Parallel,
}

impl Execution {
    /// Returns `true` when the `rayon` feature is compiled in.
    pub const fn parallel_available() -> bool {
        cfg!(feature = "rayon")
    }

    /// Returns `true` if rows will actually be processed in parallel.
    pub fn is_parallel(self) -> bool {
        self == Execution::Parallel && Self::parallel_available()
    }
}

impl Default for Execution {
    fn default() -> Self {
        if Self::parallel_available() {
            Execution::Parallel
        } else {
            Execution::Sequential
        }
    }
}
