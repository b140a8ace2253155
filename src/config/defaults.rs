// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Breakpoints**: Window widths that switch the carousel density
//! - **Carousel**: Track geometry and resize debounce
//! - **Lightbox**: Zoom factor and click detection
//! - **Navigation**: Anchor scroll offset

// ==========================================================================
// Breakpoint Defaults
// ==========================================================================

/// Widths up to and including this value show one item per carousel window.
/// The navigation links also collapse behind the menu toggle at this width.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Widths up to and including this value show two items per carousel window.
pub const TABLET_BREAKPOINT: f32 = 968.0;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Fixed gap between two carousel items (logical pixels).
pub const CAROUSEL_GAP: f32 = 20.0;

/// Quiet period after the last resize event before carousels re-measure.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Minimum resize debounce (0 = re-measure on the next tick).
pub const MIN_RESIZE_DEBOUNCE_MS: u64 = 0;

/// Maximum resize debounce.
pub const MAX_RESIZE_DEBOUNCE_MS: u64 = 2_000;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Magnification applied when the lightbox image is zoomed.
pub const LIGHTBOX_ZOOM_FACTOR: f32 = 2.0;

/// Fraction of the overlay the unzoomed image may occupy on each axis.
pub const LIGHTBOX_MAX_FILL: f32 = 0.9;

/// Pointer travel (in pixels) below which a press/release pair counts as a click.
pub const CLICK_MOVEMENT_THRESHOLD: f32 = 5.0;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Distance kept between the top of the window and a section reached via a nav link.
pub const NAV_SCROLL_OFFSET: f32 = 60.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MOBILE_BREAKPOINT < TABLET_BREAKPOINT);
    assert!(MIN_RESIZE_DEBOUNCE_MS <= DEFAULT_RESIZE_DEBOUNCE_MS);
    assert!(DEFAULT_RESIZE_DEBOUNCE_MS <= MAX_RESIZE_DEBOUNCE_MS);
    assert!(LIGHTBOX_ZOOM_FACTOR > 1.0);
    assert!(LIGHTBOX_MAX_FILL > 0.0 && LIGHTBOX_MAX_FILL <= 1.0);
};
