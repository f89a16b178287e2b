//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core filtering algorithms: moving-average
//! smoothing, time-domain effects, 2-D convolution and blur, Sobel edge
//! detection, and the pixel-wise image transforms.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Same-size 2-D convolution and box blur.
pub mod convolution;

/// Time-domain signal effects.
pub mod effects;

/// Sobel gradients and edge detection.
pub mod gradient;

/// Pixel-wise and geometric image transforms.
pub mod pointwise;

/// Moving-average smoothing.
pub mod smoothing;
