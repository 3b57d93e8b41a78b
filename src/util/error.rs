//! Error types for quadrot.

use thiserror::Error;

/// Result alias for quadrot operations.
pub type RotateResult<T> = std::result::Result<T, RotateError>;

/// Errors that can occur when loading, rotating, or writing pixel grids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotateError {
    /// A rotation code or angle outside the supported set.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// The source image could not be read or decoded.
    #[error("cannot load '{path}': {reason}")]
    Load { path: String, reason: String },
    /// The grid has a channel layout the rotators do not handle.
    #[error("unsupported pixel format: {channels} channels (expected 3)")]
    UnsupportedFormat { channels: usize },
    /// Grid dimensions are empty or overflow `usize`.
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// A buffer length disagrees with the dimensions it is supposed to hold.
    #[error("dimension mismatch: expected {expected} samples, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// The destination image could not be encoded or written.
    #[error("cannot write '{path}': {reason}")]
    Write { path: String, reason: String },
}
