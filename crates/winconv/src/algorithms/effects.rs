//! Time-domain signal effects.
//!
//! ## Purpose
//!
//! This module implements the sample-order and amplitude effects: reversal,
//! gain scaling, and single-tap feedforward echo.
//!
//! ## Design notes
//!
//! * **Pure**: Every effect allocates a fresh output buffer; inputs are
//!   never mutated.
//! * **No clipping**: Gain and echo can push samples outside the nominal
//!   `[-1, 1]` range. Clamping to the representable range belongs to the
//!   persistence layer, not here.
//!
//! ## Key concepts
//!
//! * **Feedforward echo**: One delayed, attenuated copy of the signal is
//!   superposed onto the original. It is not a recursive/feedback echo, so
//!   there is no infinite decaying train.
//!
//! ## Invariants
//!
//! * Output length always equals input length.
//! * `reverse` is its own inverse.
//!
//! ## Non-goals
//!
//! * This module does not validate the attenuation factor (see the engine
//!   layer).

use num_traits::Float;

// ============================================================================
// Reversal
// ============================================================================

/// Reverse the sample order of a signal.
#[inline]
pub fn reverse<T: Float>(data: &[T]) -> Vec<T> {
    data.iter().rev().copied().collect()
}

// ============================================================================
// Gain
// ============================================================================

/// Scale every sample by a gain factor.
#[inline]
pub fn gain<T: Float>(data: &[T], factor: T) -> Vec<T> {
    data.iter().map(|&sample| sample * factor).collect()
}

// ============================================================================
// Echo
// ============================================================================

/// Superpose a delayed, attenuated copy of the signal onto itself.
///
/// Output sample `i` is `data[i] + attenuation * data[i - delay]` once the
/// delayed copy has started (`i >= delay`), and `data[i]` before that. The
/// tail of the delayed copy that extends past the input length is truncated,
/// so the output length equals the input length.
pub fn echo<T: Float>(data: &[T], delay: usize, attenuation: T) -> Vec<T> {
    let mut out = Vec::with_capacity(data.len());

    for (i, &sample) in data.iter().enumerate() {
        let delayed = if i >= delay {
            data[i - delay] * attenuation
        } else {
            T::zero()
        };
        out.push(sample + delayed);
    }

    out
}
