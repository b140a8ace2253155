// SPDX-License-Identifier: MPL-2.0
//! Page-wide image lightbox.
//!
//! The lightbox shows one entry of the page's flattened [`ImageList`] at a
//! time. It is either closed or open on an index; while open, the image can
//! be zoomed by clicking it and panned by dragging while zoomed.
//!
//! ```text
//! Closed ──open──▶ Open(i, fitted) ◀──click──▶ Open(i, zoomed) ──close──▶ Closed
//! ```
//!
//! Zoom and pan are reset whenever an entry is shown and when the lightbox
//! closes.

mod canvas;
mod view;

pub use canvas::ImageCanvas;
pub use view::{view, ViewContext};

use crate::page::{ImageEntry, ImageList, ItemKey, Page};
use crate::ui::state::{DragState, ImageTransform, Pointer, Release, TransformOrigin, ZoomState};
use iced::{Point, Rectangle};

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Prev,
    Next,
    Pointer(PointerEvent),
}

/// Pointer activity over the image area, in image-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { pointer: Pointer, position: Point },
    Moved { pointer: Pointer, position: Point },
    /// `image_box` is the fitted (unzoomed) image rectangle.
    Released { pointer: Pointer, image_box: Rectangle },
    Lost { pointer: Pointer },
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    images: ImageList,
    current: Option<usize>,
    zoom: ZoomState,
    drag: DragState,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Number of entries in the list the lightbox was last opened with.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Entry on display, if open.
    #[must_use]
    pub fn current(&self) -> Option<&ImageEntry> {
        self.current.and_then(|index| self.images.get(index))
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.drag.is_pressed()
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        matches!(self.current, Some(index) if index > 0)
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        matches!(self.current, Some(index) if index + 1 < self.images.len())
    }

    /// Transform applied to the fitted image.
    #[must_use]
    pub fn transform(&self) -> ImageTransform {
        if !self.zoom.is_zoomed() {
            return ImageTransform::IDENTITY;
        }
        ImageTransform {
            scale: self.zoom.scale(),
            origin: self.zoom.origin(),
            translation: self.drag.translation,
        }
    }

    /// Opens on the item addressed by `target`.
    ///
    /// The entry list is rebuilt from `page` first. An unknown target leaves
    /// the lightbox untouched and returns false.
    pub fn open(&mut self, page: &Page, target: ItemKey) -> bool {
        let images = ImageList::from_page(page);
        let Some(index) = images.position_of(target) else {
            log::debug!("lightbox target {target:?} not found among {} images", images.len());
            return false;
        };

        self.images = images;
        self.open_at_index(index)
    }

    /// Shows entry `index` of the current list with a fresh view.
    pub fn open_at_index(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current = Some(index);
        self.reset_view();
        true
    }

    pub fn close(&mut self) {
        self.current = None;
        self.reset_view();
    }

    pub fn show_prev(&mut self) -> bool {
        match self.current {
            Some(index) if index > 0 => self.open_at_index(index - 1),
            _ => false,
        }
    }

    pub fn show_next(&mut self) -> bool {
        match self.current {
            Some(index) => self.open_at_index(index + 1),
            None => false,
        }
    }

    /// Zooms in around `click` when fitted, back to fitted when zoomed.
    ///
    /// `image_box` is the rectangle the fitted image occupies; the transform
    /// origin is the click position as a percentage of it.
    pub fn toggle_zoom(&mut self, click: Point, image_box: Rectangle) {
        if !self.is_open() {
            return;
        }
        if self.zoom.is_zoomed() {
            self.reset_view();
        } else {
            self.zoom.zoom_at(TransformOrigin::from_click(click, image_box));
        }
    }

    /// Pointer went down on the image. Panning starts only while zoomed;
    /// otherwise the press is only tracked to recognize a click.
    pub fn start_pan(&mut self, pointer: Pointer, position: Point) {
        if self.is_open() {
            self.drag.press(pointer, position, self.zoom.is_zoomed());
        }
    }

    /// Returns true when the pan translation changed.
    pub fn pan(&mut self, pointer: Pointer, position: Point) -> bool {
        self.is_open() && self.drag.move_to(pointer, position)
    }

    /// Pointer went up; a release that barely moved toggles zoom.
    pub fn end_pan(&mut self, pointer: Pointer, image_box: Rectangle) {
        if let Some(Release::Click(position)) = self.drag.release(pointer) {
            self.toggle_zoom(position, image_box);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Close => self.close(),
            Message::Prev => {
                self.show_prev();
            }
            Message::Next => {
                self.show_next();
            }
            Message::Pointer(event) => self.handle_pointer(event),
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed { pointer, position } => self.start_pan(pointer, position),
            PointerEvent::Moved { pointer, position } => {
                self.pan(pointer, position);
            }
            PointerEvent::Released { pointer, image_box } => self.end_pan(pointer, image_box),
            PointerEvent::Lost { pointer } => {
                if self.drag.cancel(pointer) {
                    log::trace!("pointer left the image area, gesture dropped");
                }
            }
        }
    }

    fn reset_view(&mut self) {
        self.zoom.reset();
        self.drag.reset();
    }
}
