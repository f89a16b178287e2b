//! Sobel gradients and edge detection.
//!
//! ## Purpose
//!
//! This module scores edge strength over a grayscale intensity plane: Sobel
//! gradients in both axes, Euclidean gradient magnitude, and normalization
//! of the magnitude field to the 8-bit output range.
//!
//! ## Design notes
//!
//! * **Reflective boundary**: The Sobel convolutions use symmetric
//!   reflection so the image border does not read as an artificial edge.
//! * **Degenerate input**: A uniform plane has zero gradient everywhere,
//!   which would divide by zero during normalization. That case is defined
//!   to produce an all-zero output rather than an error.
//! * **Rounding**: Normalized magnitudes are rounded (not truncated) before
//!   narrowing to 8 bits, so the strongest edge maps to exactly 255.
//!
//! ## Invariants
//!
//! * Output shape always equals input shape.
//!
//! ## Non-goals
//!
//! * This module does not threshold or thin edges.

use ndarray::{Array2, ArrayView2};
use num_traits::Float;

use crate::algorithms::convolution::convolve2d;
use crate::math::boundary::BoundaryPolicy;
use crate::math::kernel::{sobel_x, sobel_y};
use crate::primitives::raster::{plane_to_f64, round_to_u8};

// ============================================================================
// Gradients
// ============================================================================

/// Compute the Sobel gradient pair `(gx, gy)` of a float plane.
///
/// Both convolutions use reflective padding.
pub fn sobel_gradients<T>(plane: ArrayView2<'_, T>) -> (Array2<T>, Array2<T>)
where
    T: Float + Send + Sync,
{
    let gx = convolve2d(plane, sobel_x::<T>().view(), BoundaryPolicy::Reflect);
    let gy = convolve2d(plane, sobel_y::<T>().view(), BoundaryPolicy::Reflect);
    (gx, gy)
}

// ============================================================================
// Edge Detection
// ============================================================================

/// Detect edges in a grayscale plane, normalized to 8-bit intensities.
///
/// Computes the Sobel gradient magnitude `sqrt(gx² + gy²)` and rescales it
/// so the strongest response maps to 255. A uniform input has no gradient
/// anywhere and yields an all-zero output.
pub fn detect_edges(gray: ArrayView2<'_, u8>) -> Array2<u8> {
    let plane = plane_to_f64(gray);
    let (gx, gy) = sobel_gradients(plane.view());

    let mut magnitude = Array2::<f64>::zeros(gray.dim());
    let mut peak = 0.0_f64;
    for (cell, (&x, &y)) in magnitude.iter_mut().zip(gx.iter().zip(gy.iter())) {
        let m = (x * x + y * y).sqrt();
        if m > peak {
            peak = m;
        }
        *cell = m;
    }

    if peak == 0.0 {
        return Array2::zeros(gray.dim());
    }

    magnitude.mapv(|m| round_to_u8(m / peak * 255.0))
}
