#![cfg(feature = "dev")]
//! Tests for the validation layer.
//!
//! These tests verify the fail-fast parameter checks applied before any
//! filter computation:
//! - Window and kernel geometry
//! - Plane and channel shape requirements
//! - Scalar finiteness
//!
//! ## Test Organization
//!
//! 1. **Geometry Validation** - Windows, kernels, planes, channels
//! 2. **Scalar Validation** - Finite and non-finite parameters

use ndarray::Array2;

use winconv::internals::engine::validator::Validator;
use winconv::internals::primitives::errors::FilterError;

// ============================================================================
// Geometry Validation Tests
// ============================================================================

/// Test window size validation.
#[test]
fn test_validate_window() {
    assert!(Validator::validate_window(1).is_ok());
    assert!(Validator::validate_window(101).is_ok());

    assert_eq!(
        Validator::validate_window(0),
        Err(FilterError::InvalidWindow(0))
    );
    assert_eq!(
        Validator::validate_window(4),
        Err(FilterError::InvalidWindow(4))
    );
}

/// Test kernel side length validation.
#[test]
fn test_validate_kernel_size() {
    assert!(Validator::validate_kernel_size(3).is_ok());

    assert_eq!(
        Validator::validate_kernel_size(0),
        Err(FilterError::InvalidKernelSize(0))
    );
    assert_eq!(
        Validator::validate_kernel_size(6),
        Err(FilterError::InvalidKernelSize(6))
    );
}

/// Test kernel array validation.
///
/// Squareness is checked before the side length, so a non-square kernel
/// with an even side reports the shape error.
#[test]
fn test_validate_kernel_array() {
    let square = Array2::<f64>::zeros((3, 3));
    assert!(Validator::validate_kernel(&square.view()).is_ok());

    let tall = Array2::<f64>::zeros((4, 3));
    assert_eq!(
        Validator::validate_kernel(&tall.view()),
        Err(FilterError::NonSquareKernel { rows: 4, cols: 3 })
    );

    let even = Array2::<f64>::zeros((2, 2));
    assert_eq!(
        Validator::validate_kernel(&even.view()),
        Err(FilterError::InvalidKernelSize(2))
    );
}

/// Test plane shape validation.
#[test]
fn test_validate_plane() {
    assert!(Validator::validate_plane(1, 1).is_ok());

    assert_eq!(Validator::validate_plane(0, 5), Err(FilterError::EmptyInput));
    assert_eq!(Validator::validate_plane(5, 0), Err(FilterError::EmptyInput));
}

/// Test exact and minimum channel validation.
#[test]
fn test_validate_channels() {
    assert!(Validator::validate_channels(3, 3).is_ok());
    assert_eq!(
        Validator::validate_channels(4, 3),
        Err(FilterError::ChannelMismatch { expected: 3, got: 4 })
    );

    assert!(Validator::validate_min_channels(4, 3).is_ok());
    assert_eq!(
        Validator::validate_min_channels(1, 3),
        Err(FilterError::ChannelMismatch { expected: 3, got: 1 })
    );
}

// ============================================================================
// Scalar Validation Tests
// ============================================================================

/// Test finite scalar parameters.
#[test]
fn test_validate_scalar_finite() {
    assert!(Validator::validate_scalar(0.5_f64, "factor").is_ok());
    assert!(Validator::validate_scalar(-3.7_f64, "factor").is_ok());
    assert!(Validator::validate_scalar(0.0_f32, "factor").is_ok());
}

/// Test that non-finite scalars are rejected with the parameter name.
#[test]
fn test_validate_scalar_non_finite() {
    let err = Validator::validate_scalar(f64::NAN, "attenuation").unwrap_err();
    match err {
        FilterError::InvalidNumericValue(detail) => {
            assert!(detail.contains("attenuation"));
        }
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }

    assert!(Validator::validate_scalar(f64::INFINITY, "gain").is_err());
}
