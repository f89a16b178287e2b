//! High-level API for windowed and convolution filters.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: fluent builders for
//! the configurable filters (moving average, echo, box blur) and validated
//! functions for the stateless transforms (effects, edge detection, pixel
//! operations).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all
//!   parameters; defaults mirror the classic audio/image pipeline (window
//!   101, delay 5000, attenuation 0.5, blur kernel 5).
//! * **Validated**: Parameters are checked when `.build()` is called (or on
//!   entry for the plain functions); computation never starts on invalid
//!   input.
//! * **Type-Safe**: Signal and float-plane operations are generic over
//!   `Float` sample types.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `MovingAverage::new()`, `Echo::new()`, or
//!    `BoxBlur::new()`.
//! 2. Chain configuration methods (`.window()`, `.strategy()`, ...).
//! 3. Call `.build()` to validate and obtain the filter.
//! 4. Apply the filter to as many buffers as needed; filters are immutable
//!    and reusable.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};
use num_traits::Float;

use crate::algorithms::convolution;
use crate::algorithms::effects;
use crate::algorithms::gradient;
use crate::algorithms::pointwise;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::pointwise::{Channel, GrayscaleMethod, Rotation};
pub use crate::algorithms::smoothing::SmoothingStrategy;
pub use crate::math::boundary::BoundaryPolicy;
pub use crate::math::kernel::{box_kernel, box_kernel2, sobel_x, sobel_y};
pub use crate::primitives::errors::FilterError;

// ============================================================================
// Defaults
// ============================================================================

/// Default moving-average window size.
pub const DEFAULT_WINDOW: usize = 101;

/// Default echo delay, in samples.
pub const DEFAULT_DELAY: usize = 5000;

/// Default echo attenuation factor.
pub const DEFAULT_ATTENUATION: f64 = 0.5;

/// Default box-blur kernel side length.
pub const DEFAULT_BLUR_KERNEL: usize = 5;

// ============================================================================
// Moving Average
// ============================================================================

/// Fluent builder for the moving-average filter.
///
/// ```rust
/// use winconv::prelude::*;
///
/// let signal = vec![0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0];
///
/// let filter = MovingAverage::new()
///     .window(3)
///     .strategy(Windowed)
///     .build()?;
///
/// let smoothed = filter.smooth(&signal);
/// assert_eq!(smoothed.len(), signal.len());
/// # Result::<(), FilterError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct MovingAverageBuilder {
    /// Window size (odd, positive).
    pub window: usize,

    /// Computation strategy.
    pub strategy: SmoothingStrategy,
}

impl Default for MovingAverageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MovingAverageBuilder {
    /// Create a builder with the default window (101) and the windowed
    /// strategy.
    pub fn new() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            strategy: SmoothingStrategy::default(),
        }
    }

    /// Set the window size (must be odd and positive).
    pub fn window(mut self, size: usize) -> Self {
        self.window = size;
        self
    }

    /// Select the computation strategy.
    pub fn strategy(mut self, strategy: SmoothingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validate the configuration and build the filter.
    pub fn build(self) -> Result<MovingAverageFilter, FilterError> {
        Validator::validate_window(self.window)?;

        Ok(MovingAverageFilter {
            window: self.window,
            strategy: self.strategy,
        })
    }
}

/// A validated moving-average filter.
#[derive(Debug, Clone, Copy)]
pub struct MovingAverageFilter {
    /// Window size (odd, positive).
    pub window: usize,

    /// Computation strategy.
    pub strategy: SmoothingStrategy,
}

impl MovingAverageFilter {
    /// Smooth a signal, returning a buffer of the same length.
    ///
    /// An empty input yields an empty output.
    pub fn smooth<T: Float>(&self, data: &[T]) -> Vec<T> {
        self.strategy.smooth(data, self.window)
    }

    /// Emphasize the treble content: `signal - smooth(signal)`.
    ///
    /// The sum of this output and [`smooth`](Self::smooth) reconstructs the
    /// input exactly (to floating tolerance).
    pub fn emphasize_treble<T: Float>(&self, data: &[T]) -> Vec<T> {
        crate::algorithms::smoothing::emphasize_treble(data, self.window, self.strategy)
    }
}

// ============================================================================
// Echo
// ============================================================================

/// Fluent builder for the feedforward echo effect.
///
/// ```rust
/// use winconv::prelude::*;
///
/// let signal = vec![1.0, 0.0, 0.0, 0.0];
///
/// let filter = Echo::new().delay(2).attenuation(0.5).build()?;
/// let echoed = filter.apply(&signal);
///
/// assert_eq!(echoed, vec![1.0, 0.0, 0.5, 0.0]);
/// # Result::<(), FilterError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct EchoBuilder {
    /// Delay before the echo starts, in samples.
    pub delay: usize,

    /// Attenuation factor applied to the delayed copy.
    pub attenuation: f64,
}

impl Default for EchoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoBuilder {
    /// Create a builder with the default delay (5000 samples) and
    /// attenuation (0.5).
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            attenuation: DEFAULT_ATTENUATION,
        }
    }

    /// Set the delay, in samples.
    pub fn delay(mut self, samples: usize) -> Self {
        self.delay = samples;
        self
    }

    /// Set the attenuation factor (must be finite).
    pub fn attenuation(mut self, factor: f64) -> Self {
        self.attenuation = factor;
        self
    }

    /// Validate the configuration and build the filter.
    pub fn build(self) -> Result<EchoFilter, FilterError> {
        Validator::validate_scalar(self.attenuation, "attenuation")?;

        Ok(EchoFilter {
            delay: self.delay,
            attenuation: self.attenuation,
        })
    }
}

/// A validated echo filter.
#[derive(Debug, Clone, Copy)]
pub struct EchoFilter {
    /// Delay before the echo starts, in samples.
    pub delay: usize,

    /// Attenuation factor applied to the delayed copy.
    pub attenuation: f64,
}

impl EchoFilter {
    /// Superpose the delayed, attenuated copy onto the signal.
    pub fn apply<T: Float>(&self, data: &[T]) -> Vec<T> {
        effects::echo(data, self.delay, T::from(self.attenuation).unwrap())
    }
}

// ============================================================================
// Box Blur
// ============================================================================

/// Fluent builder for the box-blur filter.
///
/// ```rust
/// use winconv::prelude::*;
/// use ndarray::Array3;
///
/// let image = Array3::<u8>::from_elem((4, 4, 3), 200);
///
/// let filter = BoxBlur::new().kernel_size(3).boundary(Reflect).build()?;
/// let blurred = filter.apply_image(image.view())?;
///
/// assert_eq!(blurred.dim(), image.dim());
/// # Result::<(), FilterError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct BoxBlurBuilder {
    /// Kernel side length (odd, positive).
    pub kernel_size: usize,

    /// Boundary policy for out-of-bounds neighbors.
    pub boundary: BoundaryPolicy,
}

impl Default for BoxBlurBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxBlurBuilder {
    /// Create a builder with the default kernel (5×5) and zero padding.
    pub fn new() -> Self {
        Self {
            kernel_size: DEFAULT_BLUR_KERNEL,
            boundary: BoundaryPolicy::default(),
        }
    }

    /// Set the kernel side length (must be odd and positive).
    pub fn kernel_size(mut self, size: usize) -> Self {
        self.kernel_size = size;
        self
    }

    /// Select the boundary policy.
    pub fn boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Validate the configuration and build the filter.
    pub fn build(self) -> Result<BoxBlurFilter, FilterError> {
        Validator::validate_kernel_size(self.kernel_size)?;

        Ok(BoxBlurFilter {
            kernel_size: self.kernel_size,
            boundary: self.boundary,
        })
    }
}

/// A validated box-blur filter.
#[derive(Debug, Clone, Copy)]
pub struct BoxBlurFilter {
    /// Kernel side length (odd, positive).
    pub kernel_size: usize,

    /// Boundary policy for out-of-bounds neighbors.
    pub boundary: BoundaryPolicy,
}

impl BoxBlurFilter {
    /// Blur a float plane.
    pub fn apply_plane<T>(&self, plane: ArrayView2<'_, T>) -> Result<Array2<T>, FilterError>
    where
        T: Float + Send + Sync,
    {
        let (h, w) = plane.dim();
        Validator::validate_plane(h, w)?;

        Ok(convolution::box_blur_plane(plane, self.kernel_size, self.boundary))
    }

    /// Blur an 8-bit grayscale plane.
    pub fn apply_gray(&self, plane: ArrayView2<'_, u8>) -> Result<Array2<u8>, FilterError> {
        let (h, w) = plane.dim();
        Validator::validate_plane(h, w)?;

        Ok(convolution::box_blur_gray(plane, self.kernel_size, self.boundary))
    }

    /// Blur an interleaved-channel 8-bit image, channel by channel.
    ///
    /// Works for any channel count, including RGBA.
    pub fn apply_image(&self, image: ArrayView3<'_, u8>) -> Result<Array3<u8>, FilterError> {
        let (h, w, _) = image.dim();
        Validator::validate_plane(h, w)?;

        Ok(convolution::box_blur_image(image, self.kernel_size, self.boundary))
    }
}

// ============================================================================
// Convolution and Edge Detection
// ============================================================================

/// Convolve a plane with an odd square kernel, keeping the input shape.
///
/// The boundary policy is explicitly selectable; see [`BoundaryPolicy`] for
/// the edge semantics of each choice.
pub fn convolve2d<T>(
    input: ArrayView2<'_, T>,
    kernel: ArrayView2<'_, T>,
    boundary: BoundaryPolicy,
) -> Result<Array2<T>, FilterError>
where
    T: Float + Send + Sync,
{
    let (h, w) = input.dim();
    Validator::validate_plane(h, w)?;
    Validator::validate_kernel(&kernel)?;

    Ok(convolution::convolve2d(input, kernel, boundary))
}

/// Detect edges in a grayscale plane via Sobel gradient magnitude.
///
/// The result is normalized so the strongest edge maps to 255; a uniform
/// input yields an all-zero plane.
pub fn detect_edges(gray: ArrayView2<'_, u8>) -> Result<Array2<u8>, FilterError> {
    let (h, w) = gray.dim();
    Validator::validate_plane(h, w)?;

    Ok(gradient::detect_edges(gray))
}

/// Detect edges in an RGB image: grayscale reduction, then Sobel.
pub fn detect_edges_rgb(image: ArrayView3<'_, u8>) -> Result<Array2<u8>, FilterError> {
    let (h, w, channels) = image.dim();
    Validator::validate_plane(h, w)?;
    Validator::validate_channels(channels, 3)?;

    let gray = pointwise::to_grayscale(image, GrayscaleMethod::Rec601);
    Ok(gradient::detect_edges(gray.view()))
}

// ============================================================================
// Signal Effects
// ============================================================================

/// Reverse the sample order of a signal.
pub fn reverse<T: Float>(data: &[T]) -> Vec<T> {
    effects::reverse(data)
}

/// Scale every sample by a gain factor. No clipping is performed; clamping
/// to the representable range before persistence is the caller's concern.
pub fn gain<T: Float>(data: &[T], factor: T) -> Vec<T> {
    effects::gain(data, factor)
}

/// Superpose a delayed, attenuated copy of the signal onto itself.
///
/// Equivalent to [`Echo`](EchoBuilder) with the same parameters; the
/// attenuation must be finite.
pub fn echo<T: Float>(data: &[T], delay: usize, attenuation: T) -> Result<Vec<T>, FilterError> {
    Validator::validate_scalar(attenuation, "attenuation")?;

    Ok(effects::echo(data, delay, attenuation))
}

// ============================================================================
// Pixel Operations
// ============================================================================

/// Add a brightness offset (positive or negative) to every channel,
/// clipping to `[0, 255]`.
pub fn adjust_brightness(image: ArrayView3<'_, u8>, delta: i32) -> Array3<u8> {
    pointwise::adjust_brightness(image, delta)
}

/// Scale every intensity by a contrast factor, clipping to `[0, 255]`.
///
/// The factor must be finite; a NaN factor would otherwise narrow to 0
/// silently.
pub fn adjust_contrast(image: ArrayView3<'_, u8>, factor: f64) -> Result<Array3<u8>, FilterError> {
    Validator::validate_scalar(factor, "factor")?;

    Ok(pointwise::adjust_contrast(image, factor))
}

/// Invert every intensity (`255 - value`).
pub fn invert(image: ArrayView3<'_, u8>) -> Array3<u8> {
    pointwise::invert(image)
}

/// Reduce an RGB image to a single grayscale plane.
pub fn to_grayscale(
    image: ArrayView3<'_, u8>,
    method: GrayscaleMethod,
) -> Result<Array2<u8>, FilterError> {
    Validator::validate_channels(image.dim().2, 3)?;

    Ok(pointwise::to_grayscale(image, method))
}

/// Copy an image with one color channel zeroed.
pub fn zero_channel(
    image: ArrayView3<'_, u8>,
    channel: Channel,
) -> Result<Array3<u8>, FilterError> {
    Validator::validate_min_channels(image.dim().2, channel.index() + 1)?;

    Ok(pointwise::zero_channel(image, channel))
}

/// Produce an RGBA copy with alpha 0 wherever the RGB triple equals `key`
/// exactly.
pub fn chroma_key(image: ArrayView3<'_, u8>, key: [u8; 3]) -> Result<Array3<u8>, FilterError> {
    Validator::validate_channels(image.dim().2, 3)?;

    Ok(pointwise::chroma_key(image, key))
}

/// Place the image on a larger zero canvas at offset `(dy, dx)`.
pub fn shift(image: ArrayView3<'_, u8>, dx: usize, dy: usize) -> Array3<u8> {
    pointwise::shift(image, dx, dy)
}

/// Rotate an image by 90, 180 or 270 degrees (counter-clockwise).
pub fn rotate(image: ArrayView3<'_, u8>, degrees: u32) -> Result<Array3<u8>, FilterError> {
    let rotation = Rotation::from_degrees(degrees)?;

    Ok(pointwise::rotate(image, rotation))
}
