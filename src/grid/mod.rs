//! Owned pixel grids.
//!
//! A `PixelGrid` is a row-major `rows x cols` array of pixels, each pixel a
//! fixed number of `u8` channel samples stored back to back. The buffer length
//! is always exactly `rows * cols * channels`; every accessor is bounds-checked
//! so that index arithmetic outside `rotate::AffineMap` stays out of the
//! rotation kernels.

use crate::util::{RotateError, RotateResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Channel count of the interleaved RGB layout handled by the rotators.
pub const RGB_CHANNELS: usize = 3;

/// Owned, contiguous, row-major pixel grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
    channels: usize,
}

/// First difference found between two grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// The grids do not even share a shape.
    Shape {
        left: (usize, usize, usize),
        right: (usize, usize, usize),
    },
    /// First differing pixel in row-major order.
    Pixel { row: usize, col: usize },
}

impl PixelGrid {
    /// Wraps an existing buffer, validating its length against the shape.
    pub fn new(data: Vec<u8>, rows: usize, cols: usize, channels: usize) -> RotateResult<Self> {
        if channels == 0 {
            return Err(RotateError::UnsupportedFormat { channels });
        }
        let expected = required_len(rows, cols, channels)?;
        if data.len() != expected {
            return Err(RotateError::DimensionMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            channels,
        })
    }

    /// Allocates a zero-filled grid.
    pub fn zeroed(rows: usize, cols: usize, channels: usize) -> RotateResult<Self> {
        if channels == 0 {
            return Err(RotateError::UnsupportedFormat { channels });
        }
        let len = required_len(rows, cols, channels)?;
        Self::new(vec![0u8; len], rows, cols, channels)
    }

    /// Builds a grid by evaluating `f(row, col, channel)` for every sample.
    pub fn from_fn<F>(rows: usize, cols: usize, channels: usize, mut f: F) -> RotateResult<Self>
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        if channels == 0 {
            return Err(RotateError::UnsupportedFormat { channels });
        }
        let len = required_len(rows, cols, channels)?;
        let mut data = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                for channel in 0..channels {
                    data.push(f(row, col, channel));
                }
            }
        }
        Self::new(data, rows, cols, channels)
    }

    /// Number of pixel rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of pixel columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `true` when the grid holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Samples between the starts of consecutive rows.
    pub fn row_stride(&self) -> usize {
        self.cols * self.channels
    }

    /// Returns the whole sample buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the grid and returns its sample buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the samples of pixel `(row, col)` if it is within bounds.
    pub fn pixel(&self, row: usize, col: usize) -> Option<&[u8]> {
        let start = self.offset(row, col)?;
        self.data.get(start..start + self.channels)
    }

    /// Mutable access to the samples of pixel `(row, col)`.
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> Option<&mut [u8]> {
        let start = self.offset(row, col)?;
        let channels = self.channels;
        self.data.get_mut(start..start + channels)
    }

    /// Returns the samples of row `row`.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let stride = self.row_stride();
        let start = row.checked_mul(stride)?;
        self.data.get(start..start + stride)
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let stride = self.row_stride().max(1);
        self.data.chunks_exact_mut(stride)
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u8> {
        use rayon::prelude::*;
        let stride = self.row_stride().max(1);
        self.data.par_chunks_exact_mut(stride)
    }

    /// Compares two grids and returns the first difference, if any.
    pub fn first_mismatch(&self, other: &PixelGrid) -> Option<Mismatch> {
        let left = (self.rows, self.cols, self.channels);
        let right = (other.rows, other.cols, other.channels);
        if left != right {
            return Some(Mismatch::Shape { left, right });
        }
        let channels = self.channels;
        self.data
            .chunks_exact(channels)
            .zip(other.data.chunks_exact(channels))
            .position(|(a, b)| a != b)
            .map(|idx| Mismatch::Pixel {
                row: idx / self.cols,
                col: idx % self.cols,
            })
    }

    pub(crate) fn ensure_rgb(&self) -> RotateResult<()> {
        if self.channels != RGB_CHANNELS {
            return Err(RotateError::UnsupportedFormat {
                channels: self.channels,
            });
        }
        if self.is_empty() {
            return Err(RotateError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        row.checked_mul(self.cols)?
            .checked_add(col)?
            .checked_mul(self.channels)
    }
}

fn required_len(rows: usize, cols: usize, channels: usize) -> RotateResult<usize> {
    rows.checked_mul(cols)
        .and_then(|v| v.checked_mul(channels))
        .ok_or(RotateError::InvalidDimensions { rows, cols })
}
