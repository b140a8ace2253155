// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture and pan state
//!
//! Tracks one pressed pointer (mouse or a single touch) over the lightbox
//! image. Every press/release pair is classified as a click or a drag; while
//! panning is enabled, movement accumulates into a translation.

use crate::config::defaults::CLICK_MOVEMENT_THRESHOLD;
use iced::touch::Finger;
use iced::{Point, Vector};

/// Which pointer owns the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Touch(Finger),
}

/// Outcome of releasing the pointer that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Pressed and released in place.
    Click(Point),
    /// Moved further than the click threshold.
    Drag,
}

#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether movement currently pans the image
    pub is_dragging: bool,

    /// Pointer that started the gesture
    pointer: Option<Pointer>,

    /// Where the gesture started
    press_position: Option<Point>,

    /// Last position seen for the gesture pointer
    pub last_position: Option<Point>,

    /// Farthest distance from the press position so far
    travel: f32,

    /// Accumulated pan translation
    pub translation: Vector,
}

impl DragState {
    /// Starts a gesture. A press from a second pointer while one is already
    /// down is ignored.
    pub fn press(&mut self, pointer: Pointer, position: Point, pan: bool) {
        if self.pointer.is_some() {
            return;
        }
        self.pointer = Some(pointer);
        self.press_position = Some(position);
        self.last_position = Some(position);
        self.travel = 0.0;
        self.is_dragging = pan;
    }

    /// Follows the gesture pointer; returns true when the translation changed.
    pub fn move_to(&mut self, pointer: Pointer, position: Point) -> bool {
        if self.pointer != Some(pointer) {
            return false;
        }

        if let Some(press) = self.press_position {
            self.travel = self.travel.max(press.distance(position));
        }

        let Some(last) = self.last_position.replace(position) else {
            return false;
        };
        if !self.is_dragging {
            return false;
        }

        let delta = position - last;
        self.translation = self.translation + delta;
        delta != Vector::ZERO
    }

    /// Ends the gesture started by `pointer`.
    pub fn release(&mut self, pointer: Pointer) -> Option<Release> {
        if self.pointer != Some(pointer) {
            return None;
        }

        let press = self.press_position.take();
        self.pointer = None;
        self.last_position = None;
        self.is_dragging = false;

        let travel = std::mem::take(&mut self.travel);
        match press {
            Some(position) if travel < CLICK_MOVEMENT_THRESHOLD => Some(Release::Click(position)),
            _ => Some(Release::Drag),
        }
    }

    /// Drops the gesture started by `pointer` without classifying it;
    /// translation is kept. Returns false for any other pointer.
    pub fn cancel(&mut self, pointer: Pointer) -> bool {
        if self.pointer != Some(pointer) {
            return false;
        }
        self.pointer = None;
        self.press_position = None;
        self.last_position = None;
        self.travel = 0.0;
        self.is_dragging = false;
        true
    }

    /// Clears everything, translation included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pointer.is_some()
    }
}
