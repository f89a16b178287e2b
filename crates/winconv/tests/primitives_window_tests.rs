#![cfg(feature = "dev")]
//! Tests for the clamped window primitive.
//!
//! These tests verify the window bound computation used by the windowed
//! moving-average strategy:
//! - Centering in the interior
//! - Asymmetric shrinking at both edges
//! - Degenerate sizes (unit window, window covering the whole buffer)
//!
//! ## Test Organization
//!
//! 1. **Interior Windows** - Full-width centering
//! 2. **Edge Windows** - Clamping at the start and end
//! 3. **Degenerate Windows** - Unit and oversized windows

use winconv::internals::primitives::window::Window;

// ============================================================================
// Interior Window Tests
// ============================================================================

/// Test centering away from the edges.
///
/// A half-width of 2 around index 5 covers [3, 8).
#[test]
fn test_interior_window_is_centered() {
    let win = Window::centered(5, 2, 10);

    assert_eq!(win.start, 3);
    assert_eq!(win.end, 8);
    assert_eq!(win.len(), 5);
}

/// Test a half-width of zero.
#[test]
fn test_unit_window() {
    let win = Window::centered(4, 0, 10);

    assert_eq!((win.start, win.end), (4, 5));
    assert_eq!(win.len(), 1);
    assert!(!win.is_empty());
}

// ============================================================================
// Edge Window Tests
// ============================================================================

/// Test clamping at the start of the buffer.
///
/// The window keeps its right half but cannot extend left of zero.
#[test]
fn test_window_clamps_at_start() {
    let win = Window::centered(0, 2, 10);

    assert_eq!((win.start, win.end), (0, 3));
    assert_eq!(win.len(), 3);
}

/// Test clamping at the end of the buffer.
#[test]
fn test_window_clamps_at_end() {
    let win = Window::centered(9, 2, 10);

    assert_eq!((win.start, win.end), (7, 10));
    assert_eq!(win.len(), 3);
}

/// Test one step inside each edge.
#[test]
fn test_window_near_edges() {
    let left = Window::centered(1, 2, 10);
    assert_eq!((left.start, left.end), (0, 4));

    let right = Window::centered(8, 2, 10);
    assert_eq!((right.start, right.end), (6, 10));
}

// ============================================================================
// Degenerate Window Tests
// ============================================================================

/// Test a half-width covering the whole buffer.
///
/// Every centered window collapses to the full range, which is what makes
/// an oversized moving average equal the global mean.
#[test]
fn test_window_covering_whole_buffer() {
    for idx in 0..4 {
        let win = Window::centered(idx, 5, 4);
        assert_eq!((win.start, win.end), (0, 4));
        assert_eq!(win.len(), 4);
    }
}
