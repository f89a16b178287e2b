//! Same-size 2-D convolution and the box-blur filter.
//!
//! ## Purpose
//!
//! This module implements the spatial convolution engine shared by the blur
//! and edge-detection paths: a generic same-shape 2-D convolution with a
//! selectable boundary policy, and the box blur built on top of it.
//!
//! ## Design notes
//!
//! * **True convolution**: The kernel is index-reversed over the input, as
//!   in `scipy.signal.convolve2d`. Symmetric kernels (box) are unaffected;
//!   asymmetric kernels (Sobel) get the conventional sign.
//! * **Separable fast path**: The zero-padded box blur runs as two 1-D
//!   running-sum passes instead of the full K² neighborhood walk. The
//!   observable output is identical to the direct convolution.
//! * **Precision**: Neighborhood products accumulate in `f64`.
//! * **Parallelism**: With the `parallel` feature, output cells are computed
//!   across threads; every cell depends only on a read-only neighborhood of
//!   the input, so the output is unchanged.
//!
//! ## Key concepts
//!
//! * **Boundary policy**: Out-of-bounds neighbors are sourced per
//!   [`BoundaryPolicy`]: zero fill for the blur path, symmetric reflection
//!   for the edge-detection path.
//! * **Per-channel application**: Image blur applies the plane filter to
//!   each channel independently, generically in the channel count.
//!
//! ## Invariants
//!
//! * Output shape always equals input shape.
//! * Callers have validated kernel shape and input dimensions (engine
//!   layer); this module guards with debug assertions only.
//!
//! ## Non-goals
//!
//! * This module does not support even-sized or non-square kernels.
//! * This module does not compute gradients (see the gradient module).

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis};
use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::math::boundary::BoundaryPolicy;
use crate::math::kernel::box_kernel2;
use crate::primitives::raster::{clip_to_u8, plane_to_f64};

// ============================================================================
// 2-D Convolution
// ============================================================================

/// Convolve a plane with an odd square kernel, keeping the input shape.
///
/// Each output cell is the sum of elementwise products of the index-reversed
/// kernel and the neighborhood centered at that cell, with out-of-bounds
/// neighbors sourced per `boundary`.
pub fn convolve2d<T>(
    input: ArrayView2<'_, T>,
    kernel: ArrayView2<'_, T>,
    boundary: BoundaryPolicy,
) -> Array2<T>
where
    T: Float + Send + Sync,
{
    let (h, w) = input.dim();
    let (kh, kw) = kernel.dim();
    debug_assert!(kh == kw && kh % 2 == 1, "convolve2d: kernel must be odd and square");

    let half = (kh / 2) as isize;

    // Hoist the kernel into the accumulation precision once.
    let taps: Vec<f64> = kernel
        .iter()
        .map(|v| v.to_f64().unwrap_or(f64::NAN))
        .collect();

    let cell = |r: usize, c: usize| -> T {
        let mut acc = 0.0_f64;
        for i in 0..kh {
            for j in 0..kw {
                let row = r as isize + half - i as isize;
                let col = c as isize + half - j as isize;
                let value = boundary.sample(&input, row, col);
                acc += taps[i * kw + j] * value.to_f64().unwrap_or(f64::NAN);
            }
        }
        T::from(acc).unwrap()
    };

    #[cfg(feature = "parallel")]
    let cells: Vec<T> = (0..h * w)
        .into_par_iter()
        .map(|idx| cell(idx / w, idx % w))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let cells: Vec<T> = (0..h * w).map(|idx| cell(idx / w, idx % w)).collect();

    Array2::from_shape_vec((h, w), cells).expect("cell count matches input shape")
}

// ============================================================================
// Box Blur
// ============================================================================

/// Box-blur a float plane with a `size` × `size` uniform kernel.
///
/// The zero-padded path runs separably; reflective padding falls back to the
/// direct convolution.
pub fn box_blur_plane<T>(
    plane: ArrayView2<'_, T>,
    size: usize,
    boundary: BoundaryPolicy,
) -> Array2<T>
where
    T: Float + Send + Sync,
{
    debug_assert!(size % 2 == 1, "box_blur_plane: kernel side must be odd");

    match boundary {
        BoundaryPolicy::Zero => box_blur_separable(plane, size),
        BoundaryPolicy::Reflect => convolve2d(plane, box_kernel2::<T>(size).view(), boundary),
    }
}

/// Box-blur an 8-bit intensity plane.
pub fn box_blur_gray(
    plane: ArrayView2<'_, u8>,
    size: usize,
    boundary: BoundaryPolicy,
) -> Array2<u8> {
    let lifted = plane_to_f64(plane);
    box_blur_plane(lifted.view(), size, boundary).mapv(clip_to_u8)
}

/// Box-blur an interleaved-channel image, channel by channel.
pub fn box_blur_image(
    image: ArrayView3<'_, u8>,
    size: usize,
    boundary: BoundaryPolicy,
) -> Array3<u8> {
    let (h, w, channels) = image.dim();
    let mut out = Array3::<u8>::zeros((h, w, channels));

    for ch in 0..channels {
        let blurred = box_blur_gray(image.index_axis(Axis(2), ch), size, boundary);
        out.index_axis_mut(Axis(2), ch).assign(&blurred);
    }

    out
}

// Separable zero-padded box blur: horizontal then vertical running sums,
// normalized by K² once at the end.
fn box_blur_separable<T>(plane: ArrayView2<'_, T>, size: usize) -> Array2<T>
where
    T: Float,
{
    let (h, w) = plane.dim();
    let half = size / 2;
    let norm = (size * size) as f64;

    let lifted: Array2<f64> = plane.mapv(|v| v.to_f64().unwrap_or(f64::NAN));

    // Pass 1: window sums along each row.
    let mut row_sums = Array2::<f64>::zeros((h, w));
    for r in 0..h {
        let mut acc = 0.0_f64;
        for c in 0..(half + 1).min(w) {
            acc += lifted[[r, c]];
        }
        for c in 0..w {
            row_sums[[r, c]] = acc;
            if c + half + 1 < w {
                acc += lifted[[r, c + half + 1]];
            }
            if c >= half {
                acc -= lifted[[r, c - half]];
            }
        }
    }

    // Pass 2: window sums down each column of the row sums.
    let mut out = Array2::<T>::zeros((h, w));
    for c in 0..w {
        let mut acc = 0.0_f64;
        for r in 0..(half + 1).min(h) {
            acc += row_sums[[r, c]];
        }
        for r in 0..h {
            out[[r, c]] = T::from(acc / norm).unwrap();
            if r + half + 1 < h {
                acc += row_sums[[r + half + 1, c]];
            }
            if r >= half {
                acc -= row_sums[[r - half, c]];
            }
        }
    }

    out
}
