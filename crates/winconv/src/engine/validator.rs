//! Input validation for filter configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation checks applied before any filter
//! computation begins: window and kernel geometry, image shape requirements,
//! and scalar finiteness.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **No partial results**: Every check runs before its operation touches
//!   the data, so a failed call leaves nothing half-computed.
//!
//! ## Key concepts
//!
//! * **Geometry checks**: Odd positive window/kernel sizes, square kernels,
//!   non-empty planes, expected channel counts.
//! * **Finite checks**: Scalar parameters (gain, attenuation, contrast)
//!   must be finite.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the filtering itself.

use ndarray::ArrayView2;
use num_traits::Float;

use crate::primitives::errors::FilterError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter configuration and input data.
///
/// Provides static methods returning `Result<(), FilterError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Geometry Validation
    // ========================================================================

    /// Validate a moving-average window size (odd and positive).
    pub fn validate_window(size: usize) -> Result<(), FilterError> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidWindow(size));
        }
        Ok(())
    }

    /// Validate a kernel side length (odd and positive).
    pub fn validate_kernel_size(size: usize) -> Result<(), FilterError> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(size));
        }
        Ok(())
    }

    /// Validate a kernel array (square, with an odd positive side).
    pub fn validate_kernel<T: Float>(kernel: &ArrayView2<'_, T>) -> Result<(), FilterError> {
        let (rows, cols) = kernel.dim();
        if rows != cols {
            return Err(FilterError::NonSquareKernel { rows, cols });
        }
        Self::validate_kernel_size(rows)
    }

    /// Validate that a plane has at least one sample per axis.
    pub fn validate_plane(height: usize, width: usize) -> Result<(), FilterError> {
        if height == 0 || width == 0 {
            return Err(FilterError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that an image carries exactly the expected channel count.
    pub fn validate_channels(got: usize, expected: usize) -> Result<(), FilterError> {
        if got != expected {
            return Err(FilterError::ChannelMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate that an image carries at least `expected` channels.
    pub fn validate_min_channels(got: usize, expected: usize) -> Result<(), FilterError> {
        if got < expected {
            return Err(FilterError::ChannelMismatch { expected, got });
        }
        Ok(())
    }

    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Validate a single numeric parameter for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), FilterError> {
        if !val.is_finite() {
            return Err(FilterError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}
