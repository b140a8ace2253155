// SPDX-License-Identifier: MPL-2.0
//! Gallery carousel.
//!
//! A carousel shows a window of `items_per_view` consecutive items of one
//! gallery and moves that window one item at a time. The items sit on a
//! horizontal track whose scroll offset is driven from here; users cannot
//! scroll the track directly.
//!
//! The index always stays in `0..=max_index()` whatever sequence of
//! navigation and resizes happens.

mod view;

pub use view::{view, ViewContext};

use crate::config::defaults::{CAROUSEL_GAP, MOBILE_BREAKPOINT, TABLET_BREAKPOINT};
use crate::page::{layout, GalleryId, ItemKey};
use iced::widget::{operation, scrollable::AbsoluteOffset, Id};
use iced::Task;

/// How many items fit side by side in a window `width` wide.
#[must_use]
pub fn items_per_view(width: f32) -> usize {
    if width <= MOBILE_BREAKPOINT {
        1
    } else if width <= TABLET_BREAKPOINT {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Prev,
    Next,
    ItemPressed(usize),
}

/// Side effects the application performs for a carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The window moved; scroll the track to [`Carousel::track_offset`].
    Render,
    OpenLightbox(ItemKey),
}

#[derive(Debug, Clone)]
pub struct Carousel {
    gallery: GalleryId,
    item_count: usize,
    index: usize,
    items_per_view: usize,
    item_width: f32,
    track_id: Id,
}

impl Carousel {
    #[must_use]
    pub fn new(gallery: GalleryId, item_count: usize, window_width: f32) -> Self {
        let items_per_view = items_per_view(window_width);
        let mut carousel = Self {
            gallery,
            item_count,
            index: 0,
            items_per_view,
            item_width: 0.0,
            track_id: Id::unique(),
        };
        carousel.item_width = carousel.measure(window_width);
        carousel
    }

    #[must_use]
    pub fn gallery(&self) -> GalleryId {
        self.gallery
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    #[must_use]
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    #[must_use]
    pub fn track_id(&self) -> &Id {
        &self.track_id
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Last valid window start.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_view)
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.index < self.max_index()
    }

    /// Track translation: `-(index * (item_width + gap))`.
    #[must_use]
    pub fn offset(&self) -> f32 {
        -(self.index as f32 * (self.item_width + CAROUSEL_GAP))
    }

    /// Horizontal scroll position that realizes [`Self::offset`].
    #[must_use]
    pub fn track_offset(&self) -> f32 {
        -self.offset()
    }

    /// Moves the window one item back. Returns false at the first item.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Moves the window one item forward. Returns false at the last window.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Re-measures for a new window width and clamps the index.
    ///
    /// Returns true when the track has to be scrolled again: the number of
    /// items per view or the item width changed.
    pub fn resize(&mut self, window_width: f32) -> bool {
        let per_view = items_per_view(window_width);
        let per_view_changed = per_view != self.items_per_view;
        self.items_per_view = per_view;

        let width = self.measure(window_width);
        let width_changed = (width - self.item_width).abs() > f32::EPSILON;
        self.item_width = width;

        if per_view_changed {
            self.index = self.index.min(self.max_index());
            log::debug!(
                "carousel {:?}: {} per view, index {}",
                self.gallery,
                per_view,
                self.index
            );
        }

        per_view_changed || width_changed
    }

    /// Scrolls the track to the current window.
    pub fn render<M: Send + 'static>(&self) -> Task<M> {
        operation::scroll_to(
            self.track_id.clone(),
            AbsoluteOffset {
                x: self.track_offset(),
                y: 0.0,
            },
        )
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Prev => {
                if self.prev() {
                    Effect::Render
                } else {
                    Effect::None
                }
            }
            Message::Next => {
                if self.next() {
                    Effect::Render
                } else {
                    Effect::None
                }
            }
            Message::ItemPressed(item) if item < self.item_count => {
                Effect::OpenLightbox(ItemKey::new(self.gallery, item))
            }
            Message::ItemPressed(_) => Effect::None,
        }
    }

    fn measure(&self, window_width: f32) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            layout::item_width(window_width, self.items_per_view)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn carousel(items: usize, width: f32) -> Carousel {
        Carousel::new(GalleryId(0), items, width)
    }

    #[test]
    fn items_per_view_breakpoints() {
        assert_eq!(items_per_view(320.0), 1);
        assert_eq!(items_per_view(768.0), 1);
        assert_eq!(items_per_view(769.0), 2);
        assert_eq!(items_per_view(968.0), 2);
        assert_eq!(items_per_view(969.0), 3);
        assert_eq!(items_per_view(1920.0), 3);
    }

    #[test]
    fn seven_items_on_a_wide_window() {
        let mut c = carousel(7, 1024.0);
        assert_eq!(c.items_per_view(), 3);
        assert_eq!(c.max_index(), 4);
        assert!(!c.can_prev());
        assert!(c.can_next());

        for _ in 0..4 {
            assert!(c.next());
        }
        assert_eq!(c.index(), 4);
        assert!(!c.can_next());
        assert!(!c.next());
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn next_then_prev_returns_to_start() {
        let mut c = carousel(5, 1024.0);
        c.next();
        let before = c.index();
        c.next();
        c.prev();
        assert_eq!(c.index(), before);
    }

    #[test]
    fn prev_at_start_is_a_no_op() {
        let mut c = carousel(5, 1024.0);
        assert!(!c.prev());
        assert_eq!(c.index(), 0);
        assert_eq!(c.handle(Message::Prev), Effect::None);
    }

    #[test]
    fn offset_steps_by_item_width_plus_gap() {
        let mut c = carousel(7, 1024.0);
        c.next();
        c.next();
        assert_abs_diff_eq!(c.offset(), -2.0 * (c.item_width() + CAROUSEL_GAP));
        assert_abs_diff_eq!(c.track_offset(), -c.offset());
    }

    #[test]
    fn shrinking_clamps_the_index() {
        let mut c = carousel(7, 600.0);
        assert_eq!(c.max_index(), 6);
        for _ in 0..6 {
            c.next();
        }
        assert_eq!(c.index(), 6);

        assert!(c.resize(1280.0));
        assert_eq!(c.items_per_view(), 3);
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn same_width_needs_no_render() {
        let mut c = carousel(7, 1024.0);
        assert!(!c.resize(1024.0));
    }

    #[test]
    fn width_change_within_a_breakpoint_rerenders() {
        let mut c = carousel(7, 1024.0);
        c.next();
        assert!(c.resize(1100.0));
        assert_eq!(c.items_per_view(), 3);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn index_stays_in_bounds_under_any_sequence() {
        let widths = [320.0, 1280.0, 800.0, 600.0, 1024.0, 969.0];
        let mut c = carousel(6, 1024.0);
        for step in 0..60 {
            match step % 5 {
                0 | 1 => {
                    c.next();
                }
                2 => {
                    c.prev();
                }
                _ => {
                    c.resize(widths[step % widths.len()]);
                }
            }
            assert!(c.index() <= c.max_index(), "step {step}");
        }
    }

    #[test]
    fn fewer_items_than_view_cannot_move() {
        let mut c = carousel(2, 1280.0);
        assert_eq!(c.max_index(), 0);
        assert!(!c.can_prev());
        assert!(!c.can_next());
        assert_eq!(c.handle(Message::Next), Effect::None);
    }

    #[test]
    fn empty_gallery_is_inert() {
        let mut c = carousel(0, 1280.0);
        assert!(c.is_empty());
        assert_eq!(c.max_index(), 0);
        assert_abs_diff_eq!(c.item_width(), 0.0);
        assert!(!c.can_next());
        assert_eq!(c.handle(Message::ItemPressed(0)), Effect::None);
    }

    #[test]
    fn pressing_an_item_opens_the_lightbox() {
        let mut c = Carousel::new(GalleryId(2), 4, 1024.0);
        assert_eq!(
            c.handle(Message::ItemPressed(3)),
            Effect::OpenLightbox(ItemKey::new(GalleryId(2), 3))
        );
        assert_eq!(c.handle(Message::Next), Effect::Render);
    }
}
