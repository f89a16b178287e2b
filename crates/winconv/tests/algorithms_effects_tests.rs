//! Tests for time-domain signal effects.
//!
//! These tests verify reversal, gain scaling, and the feedforward echo:
//! - Reversal as an involution
//! - Gain scaling without clipping
//! - Echo superposition semantics, including zero delay and long delays
//!
//! ## Test Organization
//!
//! 1. **Reversal** - Order, involution, empty input
//! 2. **Gain** - Scaling, no clipping
//! 3. **Echo** - Superposition formula, truncation, validation

use approx::assert_relative_eq;
use winconv::prelude::*;

// ============================================================================
// Reversal Tests
// ============================================================================

/// Test basic sample-order reversal.
#[test]
fn test_reverse_basic() {
    let signal = vec![1.0_f64, 2.0, 3.0];

    assert_eq!(reverse(&signal), vec![3.0, 2.0, 1.0]);
}

/// Test that reversal is its own inverse.
#[test]
fn test_reverse_involution() {
    let signal: Vec<f64> = (0..13).map(|i| (i as f64 * 1.3).sin()).collect();

    assert_eq!(reverse(&reverse(&signal)), signal);
}

/// Test reversal of an empty signal.
#[test]
fn test_reverse_empty() {
    let signal: Vec<f64> = Vec::new();

    assert!(reverse(&signal).is_empty());
}

// ============================================================================
// Gain Tests
// ============================================================================

/// Test the gain scenario: doubling a unit-amplitude signal.
#[test]
fn test_gain_scenario() {
    let signal = vec![1.0_f64, -1.0];

    assert_eq!(gain(&signal, 2.0), vec![2.0, -2.0]);
}

/// Test that gain performs no internal clipping.
///
/// Samples may leave the nominal [-1, 1] range; clamping is the caller's
/// concern.
#[test]
fn test_gain_does_not_clip() {
    let signal = vec![0.9_f64, -0.8];
    let boosted = gain(&signal, 3.7);

    assert_relative_eq!(boosted[0], 3.33, epsilon = 1e-12);
    assert_relative_eq!(boosted[1], -2.96, epsilon = 1e-12);
    assert!(boosted[0] > 1.0, "Gain must not clamp to [-1, 1]");
}

// ============================================================================
// Echo Tests
// ============================================================================

/// Test echo with zero delay.
///
/// With D = 0 the delayed copy lines up with the original, so every sample
/// becomes `s[i] + F * s[i]`.
#[test]
fn test_echo_zero_delay() {
    let signal = vec![0.2_f64, -0.4, 0.8];
    let echoed = echo(&signal, 0, 0.5).unwrap();

    for (&out, &sample) in echoed.iter().zip(signal.iter()) {
        assert_relative_eq!(out, sample * 1.5, epsilon = 1e-15);
    }
}

/// Test the echo superposition formula.
///
/// Samples before the delay pass through unchanged; from the delay onward
/// the attenuated copy is added.
#[test]
fn test_echo_superposition() {
    let signal = vec![1.0_f64, 2.0, 3.0, 4.0];
    let echoed = echo(&signal, 2, 0.5).unwrap();

    let expected = [1.0, 2.0, 3.5, 5.0];
    for (&out, &want) in echoed.iter().zip(expected.iter()) {
        assert_relative_eq!(out, want, epsilon = 1e-15);
    }
}

/// Test that the echo output is truncated to the input length.
#[test]
fn test_echo_preserves_length() {
    let signal = vec![0.1_f64; 7];

    assert_eq!(echo(&signal, 3, 0.5).unwrap().len(), signal.len());
}

/// Test echo with a delay longer than the signal.
///
/// The delayed copy never starts inside the output range, so the signal is
/// returned unchanged.
#[test]
fn test_echo_delay_beyond_length() {
    let signal = vec![0.3_f64, -0.6, 0.9];

    assert_eq!(echo(&signal, 10, 0.5).unwrap(), signal);
}

/// Test that the builder and the function agree.
#[test]
fn test_echo_builder_matches_function() {
    let signal: Vec<f64> = (0..16).map(|i| (i as f64 * 0.5).sin()).collect();

    let by_builder = Echo::new().delay(4).attenuation(0.25).build().unwrap().apply(&signal);
    let by_function = echo(&signal, 4, 0.25).unwrap();

    assert_eq!(by_builder, by_function);
}

/// Test that a non-finite attenuation is rejected before computation.
#[test]
fn test_echo_rejects_non_finite_attenuation() {
    let signal = vec![0.1_f64];

    assert!(matches!(
        echo(&signal, 1, f64::NAN),
        Err(FilterError::InvalidNumericValue(_))
    ));
}
