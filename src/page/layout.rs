// SPDX-License-Identifier: MPL-2.0
//! Deterministic page geometry.
//!
//! The page view builds every block with a fixed height taken from here, so
//! section offsets are known without measuring the widget tree. Navigation
//! links scroll to these offsets and carousels size their items from
//! [`item_width`].

use super::Page;
use crate::config::defaults::{CAROUSEL_GAP, NAV_SCROLL_OFFSET};
use crate::ui::carousel::items_per_view;
use crate::ui::design_tokens::{sizing, typography};

/// Width of the centered content column for a window `window_width` wide.
#[must_use]
pub fn content_width(window_width: f32) -> f32 {
    (window_width - 2.0 * sizing::PAGE_PADDING)
        .min(sizing::MAX_CONTENT_WIDTH)
        .max(0.0)
}

/// Width of a carousel track: the content column minus both arrow gutters.
#[must_use]
pub fn track_width(window_width: f32) -> f32 {
    (content_width(window_width) - 2.0 * sizing::CAROUSEL_ARROW_GUTTER).max(0.0)
}

/// Width of one carousel item when `items_per_view` items share the track.
#[must_use]
pub fn item_width(window_width: f32, items_per_view: usize) -> f32 {
    let per_view = items_per_view.max(1) as f32;
    ((track_width(window_width) - CAROUSEL_GAP * (per_view - 1.0)) / per_view).max(0.0)
}

#[must_use]
pub fn item_height(item_width: f32) -> f32 {
    item_width * sizing::CAROUSEL_ITEM_ASPECT
}

/// Height reserved for a carousel block, arrows included.
#[must_use]
pub fn gallery_height(item_count: usize, item_width: f32) -> f32 {
    if item_count == 0 {
        sizing::EMPTY_GALLERY_HEIGHT
    } else {
        item_height(item_width).max(sizing::CAROUSEL_ARROW_SIZE)
    }
}

/// Number of wrapped lines for `text` in a column `width` wide.
///
/// Greedy word wrap over an average glyph advance. Words longer than a line
/// are split across as many lines as they need.
#[must_use]
pub fn wrapped_lines(text: &str, width: f32) -> usize {
    let per_line = ((width / typography::BODY_AVG_GLYPH_WIDTH).floor() as usize).max(1);

    let mut lines = 1;
    let mut current = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if current == 0 { len } else { current + 1 + len };

        if needed <= per_line {
            current = needed;
        } else if len <= per_line {
            if current > 0 {
                lines += 1;
            }
            current = len;
        } else {
            if current > 0 {
                lines += 1;
            }
            lines += (len - 1) / per_line;
            current = len - (len - 1) / per_line * per_line;
        }
    }
    lines
}

#[must_use]
pub fn paragraph_height(text: &str, width: f32) -> f32 {
    wrapped_lines(text, width) as f32 * typography::BODY_LINE_HEIGHT
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub id: String,
    /// Offset of the section's top edge from the top of the page.
    pub top: f32,
    pub height: f32,
    pub paragraph_heights: Vec<f32>,
    pub gallery_height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub window_width: f32,
    pub content_width: f32,
    pub sections: Vec<SectionLayout>,
    pub total_height: f32,
}

impl PageLayout {
    /// Lays out `page` for a window `window_width` wide.
    #[must_use]
    pub fn compute(page: &Page, window_width: f32) -> Self {
        let content = content_width(window_width);
        let per_view = items_per_view(window_width);
        let width = item_width(window_width, per_view);

        let mut top = sizing::HERO_HEIGHT;
        let mut sections = Vec::with_capacity(page.sections.len());

        for section in &page.sections {
            let paragraph_heights: Vec<f32> = section
                .paragraphs
                .iter()
                .map(|text| paragraph_height(text, content))
                .collect();
            let gallery_height = section
                .gallery
                .as_ref()
                .map(|gallery| gallery_height(gallery.len(), width));

            let mut height = 2.0 * sizing::SECTION_PADDING + sizing::HEADING_HEIGHT;
            for paragraph in &paragraph_heights {
                height += sizing::PARAGRAPH_SPACING + paragraph;
            }
            if let Some(gallery) = gallery_height {
                height += sizing::GALLERY_MARGIN + gallery;
            }

            sections.push(SectionLayout {
                id: section.id.clone(),
                top,
                height,
                paragraph_heights,
                gallery_height,
            });
            top += height;
        }

        Self {
            window_width,
            content_width: content,
            sections,
            total_height: top,
        }
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&SectionLayout> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Vertical scroll offset that puts section `id` just under the
    /// navigation bar. `None` for unknown ids.
    #[must_use]
    pub fn scroll_target(&self, id: &str) -> Option<f32> {
        self.section(id)
            .map(|section| (section.top - NAV_SCROLL_OFFSET).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Gallery, GalleryItem, Section};
    use crate::test_utils::assert_abs_diff_eq;

    fn section(id: &str, paragraphs: &[&str], items: Option<usize>) -> Section {
        Section {
            id: id.to_string(),
            nav_label: Some(id.to_string()),
            heading: id.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            gallery: items.map(|count| {
                Gallery::new(
                    (0..count)
                        .map(|i| GalleryItem::placeholder(format!("item {i}")))
                        .collect(),
                )
            }),
        }
    }

    #[test]
    fn content_width_is_capped_and_padded() {
        assert_abs_diff_eq!(content_width(1024.0), 1024.0 - 2.0 * sizing::PAGE_PADDING);
        assert_abs_diff_eq!(content_width(4000.0), sizing::MAX_CONTENT_WIDTH);
        assert_abs_diff_eq!(content_width(10.0), 0.0);
    }

    #[test]
    fn items_and_gaps_fill_the_track() {
        for (width, per_view) in [(1024.0, 3), (900.0, 2), (500.0, 1)] {
            let item = item_width(width, per_view);
            let used = item * per_view as f32 + CAROUSEL_GAP * (per_view as f32 - 1.0);
            assert_abs_diff_eq!(used, track_width(width), epsilon = 1e-3);
        }
    }

    #[test]
    fn narrow_window_never_yields_negative_widths() {
        assert_abs_diff_eq!(track_width(50.0), 0.0);
        assert_abs_diff_eq!(item_width(50.0, 3), 0.0);
    }

    #[test]
    fn wrapping_counts_lines() {
        let per_line = (200.0 / typography::BODY_AVG_GLYPH_WIDTH).floor() as usize;
        assert_eq!(wrapped_lines("", 200.0), 1);
        assert_eq!(wrapped_lines("short", 200.0), 1);

        let word = "a".repeat(per_line);
        let two_lines = format!("{word} {word}");
        assert_eq!(wrapped_lines(&two_lines, 200.0), 2);

        let long_word = "b".repeat(per_line * 2 + 1);
        assert_eq!(wrapped_lines(&long_word, 200.0), 3);
    }

    #[test]
    fn sections_stack_below_the_hero() {
        let page = Page {
            title: "t".into(),
            tagline: None,
            sections: vec![
                section("a", &["hello"], None),
                section("b", &[], Some(3)),
                section("c", &[], Some(0)),
            ],
        };

        let layout = PageLayout::compute(&page, 1024.0);

        let a = &layout.sections[0];
        assert_abs_diff_eq!(a.top, sizing::HERO_HEIGHT);
        let expected_a = 2.0 * sizing::SECTION_PADDING
            + sizing::HEADING_HEIGHT
            + sizing::PARAGRAPH_SPACING
            + typography::BODY_LINE_HEIGHT;
        assert_abs_diff_eq!(a.height, expected_a);

        let b = &layout.sections[1];
        assert_abs_diff_eq!(b.top, a.top + a.height);
        let gallery = item_height(item_width(1024.0, 3));
        assert_abs_diff_eq!(b.gallery_height.unwrap_or_default(), gallery);

        let c = &layout.sections[2];
        assert_eq!(c.gallery_height, Some(sizing::EMPTY_GALLERY_HEIGHT));
        assert_abs_diff_eq!(layout.total_height, c.top + c.height);
    }

    #[test]
    fn scroll_target_leaves_room_for_the_nav_bar() {
        let page = Page {
            title: "t".into(),
            tagline: None,
            sections: vec![section("a", &[], None), section("b", &[], None)],
        };
        let layout = PageLayout::compute(&page, 1024.0);

        let b_top = layout.section("b").map(|s| s.top).unwrap_or_default();
        assert_eq!(layout.scroll_target("b"), Some(b_top - NAV_SCROLL_OFFSET));
        assert_eq!(layout.scroll_target("missing"), None);
    }
}
