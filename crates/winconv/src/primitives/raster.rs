//! Raster casting utilities.
//!
//! ## Purpose
//!
//! This module provides the conversions between 8-bit intensity planes and
//! the `f64` working representation used by the convolution paths, plus the
//! clipping rules applied when a float plane is narrowed back to 8 bits.
//!
//! ## Design notes
//!
//! * **Clipping**: Every narrowed value is clamped to `[0, 255]` first, so
//!   arithmetic overflow can never wrap.
//! * **Truncation vs. rounding**: Pixel transforms truncate (the fractional
//!   part is discarded); gradient normalization rounds. Both entry points are
//!   provided and callers pick the one their contract states.
//!
//! ## Invariants
//!
//! * NaN narrows to 0.
//!
//! ## Non-goals
//!
//! * This module does not allocate or reshape image buffers.

use ndarray::{Array2, ArrayView2};

// ============================================================================
// Plane Lifting
// ============================================================================

/// Lift an 8-bit intensity plane into the `f64` working representation.
#[inline]
pub fn plane_to_f64(plane: ArrayView2<'_, u8>) -> Array2<f64> {
    plane.mapv(f64::from)
}

// ============================================================================
// Narrowing
// ============================================================================

/// Narrow a float intensity to 8 bits, clipping to `[0, 255]` and truncating.
#[inline]
pub fn clip_to_u8(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Narrow a float intensity to 8 bits, clipping to `[0, 255]` and rounding.
#[inline]
pub fn round_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
