// SPDX-License-Identifier: MPL-2.0
//! Click-to-zoom state and the geometry of the displayed image.
//!
//! The lightbox has exactly two magnifications: fitted (1×) and zoomed
//! ([`LIGHTBOX_ZOOM_FACTOR`]). Zooming happens around a transform origin
//! expressed as percentages of the image's rendered box, and a pan
//! translation is added on top while zoomed.

use crate::config::defaults::{LIGHTBOX_MAX_FILL, LIGHTBOX_ZOOM_FACTOR};
use iced::{Point, Rectangle, Size, Vector};

/// Point of the rendered image box that stays fixed while scaling,
/// as percentages of its width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOrigin {
    pub x_percent: f32,
    pub y_percent: f32,
}

impl TransformOrigin {
    pub const CENTER: Self = Self {
        x_percent: 50.0,
        y_percent: 50.0,
    };

    /// Origin under `click`, relative to the image's rendered box.
    /// Clicks outside the box are clamped onto its edge.
    #[must_use]
    pub fn from_click(click: Point, image_box: Rectangle) -> Self {
        let percent = |offset: f32, extent: f32| {
            if extent > 0.0 {
                (offset / extent * 100.0).clamp(0.0, 100.0)
            } else {
                50.0
            }
        };

        Self {
            x_percent: percent(click.x - image_box.x, image_box.width),
            y_percent: percent(click.y - image_box.y, image_box.height),
        }
    }

    /// Absolute position of the origin inside `rect`.
    #[must_use]
    pub fn resolve(self, rect: Rectangle) -> Point {
        Point::new(
            rect.x + rect.width * self.x_percent / 100.0,
            rect.y + rect.height * self.y_percent / 100.0,
        )
    }
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Zoom flag plus the origin the zoom is anchored on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomState {
    zoomed: bool,
    origin: TransformOrigin,
}

impl ZoomState {
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    #[must_use]
    pub fn origin(&self) -> TransformOrigin {
        self.origin
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        if self.zoomed {
            LIGHTBOX_ZOOM_FACTOR
        } else {
            1.0
        }
    }

    pub fn zoom_at(&mut self, origin: TransformOrigin) {
        self.zoomed = true;
        self.origin = origin;
    }

    /// Back to the fitted view, origin recentered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Scale around an origin followed by a screen-space translation.
///
/// A point `p` of the fitted rectangle lands on
/// `origin + scale * (p - origin) + translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub scale: f32,
    pub origin: TransformOrigin,
    pub translation: Vector,
}

impl ImageTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        origin: TransformOrigin::CENTER,
        translation: Vector::new(0.0, 0.0),
    };

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Where the fitted rectangle `rect` is drawn under this transform.
    #[must_use]
    pub fn apply(&self, rect: Rectangle) -> Rectangle {
        let origin = self.origin.resolve(rect);
        Rectangle {
            x: origin.x + self.scale * (rect.x - origin.x) + self.translation.x,
            y: origin.y + self.scale * (rect.y - origin.y) + self.translation.y,
            width: rect.width * self.scale,
            height: rect.height * self.scale,
        }
    }
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Largest rectangle with the aspect of `natural` that fits in
/// [`LIGHTBOX_MAX_FILL`] of `bounds`, never upscaled, centered.
#[must_use]
pub fn fit_rect(natural: Size, bounds: Rectangle) -> Rectangle {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return Rectangle::new(bounds.center(), Size::ZERO);
    }

    let scale = (bounds.width * LIGHTBOX_MAX_FILL / natural.width)
        .min(bounds.height * LIGHTBOX_MAX_FILL / natural.height)
        .clamp(0.0, 1.0);
    let size = Size::new(natural.width * scale, natural.height * scale);
    let center = bounds.center();

    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}
