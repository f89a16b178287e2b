//! # winconv — Windowed and Convolution Filters for Rust
//!
//! Pure, allocation-fresh numeric filters over 1-D (audio) sample buffers
//! and 2-D (image) rasters: moving-average smoothing, treble emphasis,
//! echo synthesis, gain and reversal, box blur, Sobel edge detection, and
//! the classic pixel-wise transforms.
//!
//! ## What lives here
//!
//! The crate is the filtering core only. It consumes normalized float
//! samples (nominally `[-1, 1]`) and 8-bit pixel arrays, and produces fresh
//! output buffers of the same shape. File formats, normalization glue,
//! plotting, and channel-count handling belong to the surrounding
//! application.
//!
//! ## Quick Start
//!
//! ### Audio
//!
//! ```rust
//! use winconv::prelude::*;
//!
//! let signal: Vec<f64> = (0..256).map(|i| (i as f64 / 16.0).sin()).collect();
//!
//! // Low-pass (bass) smoothing with a 31-sample moving average
//! let filter = MovingAverage::new().window(31).build()?;
//! let bass = filter.smooth(&signal);
//!
//! // The complementary treble-emphasized signal
//! let treble = filter.emphasize_treble(&signal);
//! assert_eq!(bass.len(), signal.len());
//! assert_eq!(treble.len(), signal.len());
//!
//! // A single-tap echo, 40 samples late at 40% volume
//! let echoed = Echo::new().delay(40).attenuation(0.4).build()?.apply(&signal);
//! assert_eq!(echoed.len(), signal.len());
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ### Images
//!
//! ```rust
//! use winconv::prelude::*;
//! use ndarray::Array3;
//!
//! let image = Array3::<u8>::from_elem((8, 8, 3), 128);
//!
//! // 3x3 box blur, zero-padded at the borders
//! let blurred = BoxBlur::new().kernel_size(3).build()?.apply_image(image.view())?;
//! assert_eq!(blurred.dim(), image.dim());
//!
//! // Sobel edges of a uniform image are all zero by definition
//! let edges = detect_edges_rgb(image.view())?;
//! assert!(edges.iter().all(|&e| e == 0));
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ## Two smoothing strategies
//!
//! The moving average can be computed two ways, selected with
//! `.strategy(...)`:
//!
//! * **`Windowed`** (default): each output is the mean over an explicitly
//!   clamped index window. Near the edges the window shrinks and averages
//!   only the in-bounds samples.
//! * **`Convolution`**: box-kernel convolution with implicit zero padding.
//!   Outputs near the edges are biased toward zero.
//!
//! The strategies agree in the interior to floating tolerance; their edge
//! behavior differs **by design** and is part of the observable contract.
//! The same choice surfaces for 2-D convolution as the `Zero` vs. `Reflect`
//! boundary policies.
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, FilterError>`; the `?` operator is
//! idiomatic:
//!
//! ```rust
//! use winconv::prelude::*;
//!
//! let err = MovingAverage::new().window(100).build().unwrap_err();
//! assert_eq!(err, FilterError::InvalidWindow(100));
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! All parameters are validated before any computation begins; no operation
//! produces a partial result. The one deliberate non-error: edge detection
//! of a uniform image returns an all-zero plane instead of dividing by a
//! zero peak magnitude.
//!
//! ## Cargo Features
//!
//! * `parallel`: parallelize the 2-D convolution hot loop with rayon.
//!   Observable output is unchanged.
//! * `dev`: re-export internal layers under `winconv::internals` for
//!   white-box testing.

// Layer 1: Primitives - errors, windows, raster casts.
mod primitives;

// Layer 2: Math - kernels and boundary policies.
mod math;

// Layer 3: Algorithms - smoothing, effects, convolution, gradient, pointwise.
mod algorithms;

// Layer 4: Engine - validation.
mod engine;

// Layer 5: API - fluent builders and validated public functions.
mod api;

// Standard winconv prelude.
pub mod prelude {
    pub use crate::api::{
        adjust_brightness, adjust_contrast, box_kernel, box_kernel2, chroma_key, convolve2d,
        detect_edges, detect_edges_rgb, echo, gain, invert, reverse, rotate, shift, sobel_x,
        sobel_y, to_grayscale, zero_channel,
        BoundaryPolicy,
        BoundaryPolicy::Reflect,
        BoundaryPolicy::Zero,
        BoxBlurBuilder as BoxBlur,
        BoxBlurFilter,
        Channel,
        Channel::{Blue, Green, Red},
        EchoBuilder as Echo,
        EchoFilter,
        FilterError,
        GrayscaleMethod,
        GrayscaleMethod::{Mean, Rec601},
        MovingAverageBuilder as MovingAverage,
        MovingAverageFilter,
        Rotation,
        Rotation::{Half, Quarter, ThreeQuarter},
        SmoothingStrategy,
        SmoothingStrategy::{Convolution, Windowed},
        DEFAULT_ATTENUATION, DEFAULT_BLUR_KERNEL, DEFAULT_DELAY, DEFAULT_WINDOW,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
