//! Convolution kernels.
//!
//! ## Purpose
//!
//! This module provides the kernel constructors used by the filtering
//! algorithms: normalized box (uniform) kernels in one and two dimensions,
//! and the fixed Sobel gradient kernels.
//!
//! ## Key concepts
//!
//! | Kernel  | Shape | Weights                 | Normalized |
//! |---------|-------|-------------------------|------------|
//! | Box 1-D | W     | 1 / W                   | yes        |
//! | Box 2-D | K×K   | 1 / K²                  | yes        |
//! | Sobel-X | 3×3   | [[-1,0,1],[-2,0,2],[-1,0,1]] | no    |
//! | Sobel-Y | 3×3   | [[-1,-2,-1],[0,0,0],[1,2,1]] | no    |
//!
//! Box kernel weights sum to 1, so box convolution computes a local mean.
//! The Sobel kernels are fixed integer matrices and are deliberately not
//! normalized; their responses are rescaled downstream.
//!
//! ## Invariants
//!
//! * Box kernels are built for odd, positive sizes only.
//!
//! ## Non-goals
//!
//! * This module does not perform convolution.

use ndarray::Array2;
use num_traits::Float;

// ============================================================================
// Sobel Weights
// ============================================================================

/// Sobel horizontal-gradient weights (responds to vertical edges).
const SOBEL_X_WEIGHTS: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Sobel vertical-gradient weights (responds to horizontal edges).
const SOBEL_Y_WEIGHTS: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

// ============================================================================
// Box Kernels
// ============================================================================

/// Build a normalized 1-D box kernel of length `len`.
#[inline]
pub fn box_kernel<T: Float>(len: usize) -> Vec<T> {
    debug_assert!(len % 2 == 1, "box_kernel: length must be odd");

    let weight = T::from(1.0 / len as f64).unwrap();
    vec![weight; len]
}

/// Build a normalized 2-D box kernel of side length `size`.
#[inline]
pub fn box_kernel2<T: Float>(size: usize) -> Array2<T> {
    debug_assert!(size % 2 == 1, "box_kernel2: side length must be odd");

    let weight = T::from(1.0 / (size * size) as f64).unwrap();
    Array2::from_elem((size, size), weight)
}

// ============================================================================
// Sobel Kernels
// ============================================================================

/// The fixed 3×3 Sobel-X kernel.
#[inline]
pub fn sobel_x<T: Float>() -> Array2<T> {
    from_weights(&SOBEL_X_WEIGHTS)
}

/// The fixed 3×3 Sobel-Y kernel.
#[inline]
pub fn sobel_y<T: Float>() -> Array2<T> {
    from_weights(&SOBEL_Y_WEIGHTS)
}

// Materialize a 3×3 integer weight matrix as a kernel array.
fn from_weights<T: Float>(weights: &[[i32; 3]; 3]) -> Array2<T> {
    Array2::from_shape_fn((3, 3), |(r, c)| T::from(weights[r][c]).unwrap())
}
