//! Pixel-wise and geometric image transforms.
//!
//! ## Purpose
//!
//! This module implements the stateless per-pixel and whole-array
//! transforms: brightness, contrast, inversion, grayscale reduction,
//! channel zeroing, chroma keying, canvas shift, and quarter-turn rotation.
//!
//! ## Design notes
//!
//! * **Clipping**: Every arithmetic transform clips to `[0, 255]` before
//!   narrowing back to 8 bits; intensities never wrap.
//! * **Truncation**: Fractional intensities are truncated, matching the
//!   behavior of an `astype(uint8)` narrowing.
//!
//! ## Key concepts
//!
//! * **Chroma key**: Pixels whose RGB triple equals the key color exactly
//!   become fully transparent in the RGBA output. There is no tolerance.
//! * **Shift grows the canvas**: The shifted image is placed on a larger
//!   zero canvas; nothing wraps around or is cropped away.
//! * **Quarter-turn rotation**: Rotation is built from repeated 90°
//!   counter-clockwise turns. Other angles are rejected at validation time.
//!
//! ## Invariants
//!
//! * Channel order is R, G, B (+ A for chroma output).
//! * Shape-dependent preconditions (channel counts) are validated by the
//!   engine layer; this module guards with debug assertions only.
//!
//! ## Non-goals
//!
//! * This module does not resample; rotation and shift move whole pixels.

use ndarray::{s, Array2, Array3, ArrayView3, Axis};

use crate::primitives::errors::FilterError;

// ============================================================================
// Selector Enums
// ============================================================================

/// Color channel of an R,G,B image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red (channel 0).
    Red,

    /// Green (channel 1).
    Green,

    /// Blue (channel 2).
    Blue,
}

impl Channel {
    /// Index of the channel along the channel axis.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// Weighting used to reduce an RGB image to grayscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayscaleMethod {
    /// ITU-R BT.601 luma weights: `0.2989 R + 0.5870 G + 0.1140 B`.
    #[default]
    Rec601,

    /// Unweighted channel mean.
    Mean,
}

/// Quarter-turn rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// 90° counter-clockwise.
    Quarter,

    /// 180°.
    Half,

    /// 270° counter-clockwise.
    ThreeQuarter,
}

impl Rotation {
    /// Parse a rotation from whole degrees.
    ///
    /// Only 90, 180 and 270 are valid; anything else is
    /// [`FilterError::UnsupportedAngle`].
    pub fn from_degrees(degrees: u32) -> Result<Self, FilterError> {
        match degrees {
            90 => Ok(Self::Quarter),
            180 => Ok(Self::Half),
            270 => Ok(Self::ThreeQuarter),
            other => Err(FilterError::UnsupportedAngle(other)),
        }
    }

    /// Number of 90° counter-clockwise turns.
    #[inline]
    pub fn quarter_turns(&self) -> usize {
        match self {
            Self::Quarter => 1,
            Self::Half => 2,
            Self::ThreeQuarter => 3,
        }
    }
}

// ============================================================================
// Intensity Transforms
// ============================================================================

/// Add a brightness offset to every channel of every pixel.
pub fn adjust_brightness(image: ArrayView3<'_, u8>, delta: i32) -> Array3<u8> {
    image.mapv(|p| (i32::from(p) + delta).clamp(0, 255) as u8)
}

/// Scale every intensity by a contrast factor.
pub fn adjust_contrast(image: ArrayView3<'_, u8>, factor: f64) -> Array3<u8> {
    debug_assert!(factor.is_finite(), "adjust_contrast: factor must be finite");

    image.mapv(|p| (f64::from(p) * factor).clamp(0.0, 255.0) as u8)
}

/// Invert every intensity.
pub fn invert(image: ArrayView3<'_, u8>) -> Array3<u8> {
    image.mapv(|p| 255 - p)
}

// ============================================================================
// Channel Transforms
// ============================================================================

/// Reduce an RGB image to a single grayscale plane.
pub fn to_grayscale(image: ArrayView3<'_, u8>, method: GrayscaleMethod) -> Array2<u8> {
    let (h, w, channels) = image.dim();
    debug_assert!(channels == 3, "to_grayscale: expects an RGB image");

    let mut gray = Array2::<u8>::zeros((h, w));
    for r in 0..h {
        for c in 0..w {
            let red = f64::from(image[[r, c, 0]]);
            let green = f64::from(image[[r, c, 1]]);
            let blue = f64::from(image[[r, c, 2]]);

            let level = match method {
                GrayscaleMethod::Rec601 => 0.2989 * red + 0.5870 * green + 0.1140 * blue,
                GrayscaleMethod::Mean => (red + green + blue) / 3.0,
            };
            gray[[r, c]] = level as u8;
        }
    }

    gray
}

/// Copy an image with one channel set to zero.
pub fn zero_channel(image: ArrayView3<'_, u8>, channel: Channel) -> Array3<u8> {
    debug_assert!(
        channel.index() < image.dim().2,
        "zero_channel: channel out of range"
    );

    let mut out = image.to_owned();
    out.index_axis_mut(Axis(2), channel.index()).fill(0);
    out
}

/// Make every pixel matching the key color transparent.
///
/// Produces an RGBA copy of the RGB input with alpha 0 wherever the RGB
/// triple equals `key` exactly, and alpha 255 everywhere else.
pub fn chroma_key(image: ArrayView3<'_, u8>, key: [u8; 3]) -> Array3<u8> {
    let (h, w, channels) = image.dim();
    debug_assert!(channels == 3, "chroma_key: expects an RGB image");

    let mut out = Array3::<u8>::zeros((h, w, 4));
    for r in 0..h {
        for c in 0..w {
            let pixel = [image[[r, c, 0]], image[[r, c, 1]], image[[r, c, 2]]];
            out[[r, c, 0]] = pixel[0];
            out[[r, c, 1]] = pixel[1];
            out[[r, c, 2]] = pixel[2];
            out[[r, c, 3]] = if pixel == key { 0 } else { 255 };
        }
    }

    out
}

// ============================================================================
// Geometric Transforms
// ============================================================================

/// Place the image on a larger zero canvas at offset `(dy, dx)`.
///
/// The canvas grows to `(height + dy, width + dx)`; the vacated band is
/// left black (and fully transparent if an alpha channel is present).
pub fn shift(image: ArrayView3<'_, u8>, dx: usize, dy: usize) -> Array3<u8> {
    let (h, w, channels) = image.dim();

    let mut out = Array3::<u8>::zeros((h + dy, w + dx, channels));
    out.slice_mut(s![dy.., dx.., ..]).assign(&image);
    out
}

/// Rotate an image by repeated 90° counter-clockwise quarter turns.
pub fn rotate(image: ArrayView3<'_, u8>, rotation: Rotation) -> Array3<u8> {
    let mut out = quarter_turn(image);
    for _ in 1..rotation.quarter_turns() {
        out = quarter_turn(out.view());
    }
    out
}

// One 90° counter-clockwise turn: out[i, j] = in[j, w - 1 - i].
fn quarter_turn(image: ArrayView3<'_, u8>) -> Array3<u8> {
    let (h, w, channels) = image.dim();

    let mut out = Array3::<u8>::zeros((w, h, channels));
    for r in 0..h {
        for c in 0..w {
            for ch in 0..channels {
                out[[w - 1 - c, r, ch]] = image[[r, c, ch]];
            }
        }
    }

    out
}
