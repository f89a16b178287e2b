//! Moving-average smoothing over 1-D sample buffers.
//!
//! ## Purpose
//!
//! This module implements the low-pass moving-average filter at the heart of
//! the bass/treble emphasis pipeline, with two interchangeable computation
//! strategies, plus the compositional treble-emphasis transform.
//!
//! ## Design notes
//!
//! * **Two strategies, one contract**: `Windowed` computes each output as the
//!   mean over an explicitly clamped index window; `Convolution` convolves
//!   with a normalized box kernel. They agree in the interior to floating
//!   tolerance but differ at the edges, and the difference is part of the
//!   observable contract (see below), so both are kept as distinct,
//!   separately tested operations.
//! * **Precision**: Accumulation is always in `f64`, regardless of the
//!   sample storage width, so long windows do not truncate.
//!
//! ## Key concepts
//!
//! * **Edge semantics**: The windowed strategy shrinks its window near the
//!   edges and averages only in-bounds samples. The convolution strategy
//!   implicitly zero-pads outside the buffer, biasing edge outputs toward
//!   zero. With `window >= len`, the windowed strategy returns the global
//!   mean everywhere while the convolution strategy does not.
//! * **Treble emphasis**: `signal - smooth(signal)`, the complement of the
//!   low-pass result. Purely compositional; not renormalized.
//!
//! ## Invariants
//!
//! * Output length always equals input length.
//! * A unit window is the identity under the windowed strategy.
//!
//! ## Non-goals
//!
//! * This module does not validate window sizes (see the engine layer).
//! * This module does not resample or renormalize.

use num_traits::Float;

use crate::math::kernel::box_kernel;
use crate::primitives::window::Window;

// ============================================================================
// Smoothing Strategy
// ============================================================================

/// Computation strategy for the moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothingStrategy {
    /// Mean over an explicitly clamped index window; shrinks at the edges.
    #[default]
    Windowed,

    /// Box-kernel convolution; implicitly zero-padded outside the buffer.
    Convolution,
}

impl SmoothingStrategy {
    /// Smooth `data` with the selected strategy.
    #[inline]
    pub fn smooth<T: Float>(&self, data: &[T], window: usize) -> Vec<T> {
        match self {
            Self::Windowed => smooth_windowed(data, window),
            Self::Convolution => smooth_convolved(data, window),
        }
    }
}

// ============================================================================
// Windowed Strategy
// ============================================================================

/// Moving average by explicit window bounds.
///
/// Each output sample is the arithmetic mean of the input samples in the
/// half-open range `[max(0, i - H), min(n, i + H + 1))` with `H = window / 2`.
/// Near the edges the range holds fewer than `window` samples and the mean
/// is taken over the in-bounds samples only.
pub fn smooth_windowed<T: Float>(data: &[T], window: usize) -> Vec<T> {
    debug_assert!(window % 2 == 1, "smooth_windowed: window must be odd");

    let n = data.len();
    let half = window / 2;
    let mut smoothed = Vec::with_capacity(n);

    for i in 0..n {
        let win = Window::centered(i, half, n);

        let mut acc = 0.0_f64;
        for sample in &data[win.start..win.end] {
            acc = acc + sample.to_f64().unwrap_or(f64::NAN);
        }

        smoothed.push(T::from(acc / win.len() as f64).unwrap());
    }

    smoothed
}

// ============================================================================
// Convolution Strategy
// ============================================================================

/// Moving average by box-kernel convolution.
///
/// Convolves with the normalized box kernel of length `window`, keeping the
/// centered `n` samples of the full product (numpy's `same` mode). Samples
/// outside the buffer are taken as zero, so outputs within `window / 2` of
/// either edge are biased toward zero relative to [`smooth_windowed`].
pub fn smooth_convolved<T: Float>(data: &[T], window: usize) -> Vec<T> {
    debug_assert!(window % 2 == 1, "smooth_convolved: window must be odd");

    convolve_same(data, &box_kernel::<T>(window))
}

/// Same-size 1-D convolution with implicit zero padding.
///
/// True convolution: the kernel is index-reversed over the signal. For an
/// odd kernel of length `k`, output sample `i` is
/// `sum(kernel[t] * data[i + k/2 - t])` with out-of-bounds samples read as 0.
pub fn convolve_same<T: Float>(data: &[T], kernel: &[T]) -> Vec<T> {
    debug_assert!(kernel.len() % 2 == 1, "convolve_same: kernel must be odd");

    let n = data.len() as isize;
    let half = (kernel.len() / 2) as isize;

    // Hoist the kernel into the accumulation precision once.
    let taps: Vec<f64> = kernel
        .iter()
        .map(|w| w.to_f64().unwrap_or(f64::NAN))
        .collect();

    let mut out = Vec::with_capacity(data.len());
    for i in 0..n {
        let mut acc = 0.0_f64;
        for (t, tap) in taps.iter().enumerate() {
            let j = i + half - t as isize;
            if j >= 0 && j < n {
                acc += tap * data[j as usize].to_f64().unwrap_or(f64::NAN);
            }
        }
        out.push(T::from(acc).unwrap());
    }

    out
}

// ============================================================================
// Treble Emphasis
// ============================================================================

/// Emphasize the high-frequency content of a signal.
///
/// Computes the low-pass (bass) result with the selected strategy and
/// subtracts it from the original signal, sample-wise. The output is not
/// renormalized and can exceed the input's amplitude bounds; clamping before
/// persistence is the caller's concern.
pub fn emphasize_treble<T: Float>(
    data: &[T],
    window: usize,
    strategy: SmoothingStrategy,
) -> Vec<T> {
    let bass = strategy.smooth(data, window);

    data.iter()
        .zip(bass.iter())
        .map(|(&sample, &low)| sample - low)
        .collect()
}
