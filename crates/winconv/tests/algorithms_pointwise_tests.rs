//! Tests for pixel-wise and geometric image transforms.
//!
//! These tests verify the stateless image operations:
//! - Brightness/contrast clipping, inversion
//! - Grayscale reduction (both weightings, truncation semantics)
//! - Channel zeroing and chroma keying
//! - Canvas shift and quarter-turn rotation
//!
//! ## Test Organization
//!
//! 1. **Intensity Transforms** - Brightness, contrast, invert
//! 2. **Channel Transforms** - Grayscale, zero channel, chroma key
//! 3. **Geometric Transforms** - Shift, rotation
//! 4. **Validation** - Channel and angle errors

use ndarray::Array3;
use winconv::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn solid_pixel(r: u8, g: u8, b: u8) -> Array3<u8> {
    Array3::from_shape_vec((1, 1, 3), vec![r, g, b]).unwrap()
}

// ============================================================================
// Intensity Transform Tests
// ============================================================================

/// Test brightness clipping in both directions.
#[test]
fn test_brightness_clips() {
    let image = solid_pixel(250, 100, 10);

    let brighter = adjust_brightness(image.view(), 50);
    assert_eq!(brighter[[0, 0, 0]], 255);
    assert_eq!(brighter[[0, 0, 1]], 150);

    let darker = adjust_brightness(image.view(), -50);
    assert_eq!(darker[[0, 0, 2]], 0);
    assert_eq!(darker[[0, 0, 0]], 200);
}

/// Test contrast scaling and clipping.
#[test]
fn test_contrast_scales_and_clips() {
    let image = solid_pixel(100, 200, 40);

    let contrasted = adjust_contrast(image.view(), 1.5).unwrap();
    assert_eq!(contrasted[[0, 0, 0]], 150);
    assert_eq!(contrasted[[0, 0, 1]], 255);
    assert_eq!(contrasted[[0, 0, 2]], 60);
}

/// Test that a non-finite contrast factor is rejected.
#[test]
fn test_contrast_rejects_non_finite_factor() {
    let image = solid_pixel(1, 2, 3);

    assert!(matches!(
        adjust_contrast(image.view(), f64::INFINITY),
        Err(FilterError::InvalidNumericValue(_))
    ));
}

/// Test color inversion and its involution.
#[test]
fn test_invert() {
    let image = solid_pixel(0, 255, 100);

    let inverted = invert(image.view());
    assert_eq!(inverted[[0, 0, 0]], 255);
    assert_eq!(inverted[[0, 0, 1]], 0);
    assert_eq!(inverted[[0, 0, 2]], 155);

    assert_eq!(invert(inverted.view()), image);
}

// ============================================================================
// Channel Transform Tests
// ============================================================================

/// Test Rec. 601 grayscale weights with truncation.
///
/// Pure white truncates to 254 because the weights sum to 0.9999.
#[test]
fn test_grayscale_rec601() {
    assert_eq!(
        to_grayscale(solid_pixel(255, 0, 0).view(), Rec601).unwrap()[[0, 0]],
        76
    );
    assert_eq!(
        to_grayscale(solid_pixel(0, 255, 0).view(), Rec601).unwrap()[[0, 0]],
        149
    );
    assert_eq!(
        to_grayscale(solid_pixel(0, 0, 255).view(), Rec601).unwrap()[[0, 0]],
        29
    );
    assert_eq!(
        to_grayscale(solid_pixel(255, 255, 255).view(), Rec601).unwrap()[[0, 0]],
        254
    );
}

/// Test the unweighted mean grayscale reduction.
#[test]
fn test_grayscale_mean() {
    assert_eq!(
        to_grayscale(solid_pixel(10, 20, 30).view(), Mean).unwrap()[[0, 0]],
        20
    );
}

/// Test that grayscale requires exactly three channels.
#[test]
fn test_grayscale_requires_rgb() {
    let image = Array3::<u8>::zeros((2, 2, 4));

    assert_eq!(
        to_grayscale(image.view(), Rec601).unwrap_err(),
        FilterError::ChannelMismatch { expected: 3, got: 4 }
    );
}

/// Test zeroing a single channel.
#[test]
fn test_zero_channel() {
    let image = solid_pixel(10, 20, 30);

    let no_red = zero_channel(image.view(), Red).unwrap();
    assert_eq!(no_red[[0, 0, 0]], 0);
    assert_eq!(no_red[[0, 0, 1]], 20);
    assert_eq!(no_red[[0, 0, 2]], 30);
}

/// Test zeroing a channel the image does not have.
#[test]
fn test_zero_channel_out_of_range() {
    let image = Array3::<u8>::zeros((2, 2, 1));

    assert_eq!(
        zero_channel(image.view(), Blue).unwrap_err(),
        FilterError::ChannelMismatch { expected: 3, got: 1 }
    );
}

/// Test chroma keying with exact equality.
///
/// Only the pixel matching the key exactly becomes transparent; an
/// off-by-one color stays opaque.
#[test]
fn test_chroma_key_exact_match() {
    let image =
        Array3::from_shape_vec((1, 2, 3), vec![0, 255, 1, 0, 255, 2]).unwrap();

    let keyed = chroma_key(image.view(), [0, 255, 1]).unwrap();
    assert_eq!(keyed.dim(), (1, 2, 4));
    assert_eq!(keyed[[0, 0, 3]], 0, "Matching pixel should be transparent");
    assert_eq!(keyed[[0, 1, 3]], 255, "Near-miss pixel should stay opaque");
    assert_eq!(keyed[[0, 1, 1]], 255, "RGB channels should be preserved");
}

// ============================================================================
// Geometric Transform Tests
// ============================================================================

/// Test that shift grows the canvas instead of wrapping.
#[test]
fn test_shift_grows_canvas() {
    let image = Array3::from_shape_vec((2, 2, 1), vec![1, 2, 3, 4]).unwrap();

    let shifted = shift(image.view(), 1, 2);
    assert_eq!(shifted.dim(), (4, 3, 1));

    // Vacated band is zero; content sits at the offset.
    assert_eq!(shifted[[0, 0, 0]], 0);
    assert_eq!(shifted[[2, 0, 0]], 0);
    assert_eq!(shifted[[2, 1, 0]], 1);
    assert_eq!(shifted[[2, 2, 0]], 2);
    assert_eq!(shifted[[3, 1, 0]], 3);
    assert_eq!(shifted[[3, 2, 0]], 4);
}

/// Test the quarter-turn orientation.
///
/// A 1x2 row [A, B] rotated 90° counter-clockwise becomes the column
/// [B, A] (top to bottom).
#[test]
fn test_rotate_quarter_orientation() {
    let image = Array3::from_shape_vec((1, 2, 1), vec![1, 2]).unwrap();

    let rotated = rotate(image.view(), 90).unwrap();
    assert_eq!(rotated.dim(), (2, 1, 1));
    assert_eq!(rotated[[0, 0, 0]], 2);
    assert_eq!(rotated[[1, 0, 0]], 1);
}

/// Test that four quarter turns restore the image.
#[test]
fn test_rotate_four_times_is_identity() {
    let image = Array3::from_shape_vec(
        (2, 3, 1),
        vec![1, 2, 3, 4, 5, 6],
    )
    .unwrap();

    let mut rotated = image.clone();
    for _ in 0..4 {
        rotated = rotate(rotated.view(), 90).unwrap();
    }
    assert_eq!(rotated, image);
}

/// Test that a half turn equals two quarter turns.
#[test]
fn test_half_turn_equals_two_quarters() {
    let image = Array3::from_shape_vec((2, 2, 1), vec![1, 2, 3, 4]).unwrap();

    let half = rotate(image.view(), 180).unwrap();
    let quarters = rotate(rotate(image.view(), 90).unwrap().view(), 90).unwrap();
    assert_eq!(half, quarters);
}

/// Test that non-quarter angles are rejected.
#[test]
fn test_rotate_rejects_other_angles() {
    let image = Array3::<u8>::zeros((2, 2, 3));

    assert_eq!(
        rotate(image.view(), 45).unwrap_err(),
        FilterError::UnsupportedAngle(45)
    );
    assert_eq!(
        rotate(image.view(), 0).unwrap_err(),
        FilterError::UnsupportedAngle(0)
    );
}
