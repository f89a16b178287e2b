//! Error types for filter operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or applying filters: invalid parameters, incompatible shapes, and
//! non-finite scalar inputs.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., the actual
//!   kernel dimensions) so callers can report them without re-deriving state.
//! * **Eager**: All conditions are detected before any computation begins;
//!   no operation produces a partial result.
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Window/kernel sizes must be odd and positive,
//!    rotation angles must be quarter turns, scalar factors must be finite.
//! 2. **Shape validation**: Kernels must be square, images must carry the
//!    channel count an operation expects, convolution inputs must be
//!    non-empty.
//!
//! ## Invariants
//!
//! * Every variant provides sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for filter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Convolution-based operations require at least one sample per axis.
    EmptyInput,

    /// Moving-average windows must be odd and positive.
    InvalidWindow(usize),

    /// Convolution kernels must have an odd, positive side length.
    InvalidKernelSize(usize),

    /// Convolution kernels must be square.
    NonSquareKernel {
        /// Number of kernel rows.
        rows: usize,
        /// Number of kernel columns.
        cols: usize,
    },

    /// The image does not carry the channel count the operation expects.
    ChannelMismatch {
        /// Channels the operation requires.
        expected: usize,
        /// Channels the image actually has.
        got: usize,
    },

    /// Rotation is only defined for quarter turns (90, 180, 270 degrees).
    UnsupportedAngle(u32),

    /// A scalar parameter was NaN or infinite.
    InvalidNumericValue(String),
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => {
                write!(f, "input must contain at least one sample per axis")
            }
            Self::InvalidWindow(size) => {
                write!(
                    f,
                    "window size must be odd and positive, got {}",
                    size
                )
            }
            Self::InvalidKernelSize(size) => {
                write!(
                    f,
                    "kernel side length must be odd and positive, got {}",
                    size
                )
            }
            Self::NonSquareKernel { rows, cols } => {
                write!(f, "kernel must be square, got {}x{}", rows, cols)
            }
            Self::ChannelMismatch { expected, got } => {
                write!(
                    f,
                    "expected an image with {} channels, got {}",
                    expected, got
                )
            }
            Self::UnsupportedAngle(angle) => {
                write!(
                    f,
                    "rotation angle must be 90, 180 or 270 degrees, got {}",
                    angle
                )
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "non-finite parameter: {}", detail)
            }
        }
    }
}

impl Error for FilterError {}
