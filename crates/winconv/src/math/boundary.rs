//! Boundary policies for neighborhood sampling.
//!
//! ## Purpose
//!
//! This module defines the rules for sourcing neighborhood values that fall
//! outside the array bounds during convolution. The choice is externally
//! observable at the edges of every convolved output, so it is an explicit,
//! selectable policy rather than an implementation detail.
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: Uses a `BoundaryPolicy` enum to select the rule.
//! * **Zero cost in the interior**: Both policies resolve to a direct read
//!   for in-bounds coordinates.
//!
//! ## Key concepts
//!
//! * **Zero padding**: Out-of-bounds neighbors contribute 0. Biases edge
//!   outputs toward zero; used by the box-blur path.
//! * **Symmetric reflection**: Out-of-bounds coordinates are mirrored across
//!   the edge (half-sample reflection: `-1 → 0`, `n → n - 1`). Avoids
//!   artificial dark borders; used by the edge-detection path.
//!
//! ## Invariants
//!
//! * Reflection is only defined for non-empty axes.
//! * Reflected coordinates always land in `[0, n)`.
//!
//! ## Non-goals
//!
//! * This module does not materialize padded copies of the input.

use ndarray::ArrayView2;
use num_traits::Float;

// ============================================================================
// Boundary Policy
// ============================================================================

/// Policy for sourcing neighborhood values outside the array bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Treat values outside the array as 0.
    #[default]
    Zero,

    /// Mirror values across the edge (symmetric half-sample reflection).
    Reflect,
}

impl BoundaryPolicy {
    /// Sample a plane at a possibly out-of-bounds coordinate.
    #[inline]
    pub fn sample<T: Float>(&self, plane: &ArrayView2<'_, T>, row: isize, col: isize) -> T {
        let (h, w) = plane.dim();
        match self {
            Self::Zero => {
                if row >= 0 && (row as usize) < h && col >= 0 && (col as usize) < w {
                    plane[[row as usize, col as usize]]
                } else {
                    T::zero()
                }
            }
            Self::Reflect => plane[[reflect_index(row, h), reflect_index(col, w)]],
        }
    }
}

// ============================================================================
// Reflection
// ============================================================================

/// Map a coordinate into `[0, n)` by symmetric half-sample reflection.
///
/// The edge sample is repeated on reflection: `-1 → 0`, `-2 → 1`, `n → n - 1`.
/// Coordinates further out than one full period keep reflecting until they
/// land in bounds.
#[inline]
pub fn reflect_index(idx: isize, n: usize) -> usize {
    debug_assert!(n > 0, "reflect_index: axis must be non-empty");

    let n = n as isize;
    let mut i = idx;
    while i < 0 || i >= n {
        if i < 0 {
            i = -i - 1;
        } else {
            i = 2 * n - i - 1;
        }
    }
    i as usize
}
