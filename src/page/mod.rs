// SPDX-License-Identifier: MPL-2.0
//! Page document model.
//!
//! A page is an ordered list of sections; a section may own a gallery, and a
//! gallery is an ordered list of items. Items are either real images or
//! placeholders that only carry a caption. Galleries are numbered in document
//! order, which is also the order of the flattened [`ImageList`] the lightbox
//! navigates.

pub mod demo;
pub mod image_list;
pub mod layout;
pub mod loader;

pub use image_list::{ImageEntry, ImageList};
pub use loader::{load_from_path, parse};

use crate::ui::placeholder;
use iced::widget::{image, svg};
use iced::Size;
use std::path::PathBuf;

/// Position of a gallery among all galleries of a page (document order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GalleryId(pub usize);

/// Address of one item: its gallery and its index inside that gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub gallery: GalleryId,
    pub item: usize,
}

impl ItemKey {
    #[must_use]
    pub fn new(gallery: GalleryId, item: usize) -> Self {
        Self { gallery, item }
    }
}

/// What an item displays.
#[derive(Debug, Clone)]
pub enum ItemSource {
    /// A real image file with its pixel dimensions.
    Image {
        path: PathBuf,
        size: Size<u32>,
        handle: image::Handle,
    },
    /// No image yet: a generated graphic with an explanatory caption.
    Placeholder { caption: String, handle: svg::Handle },
}

impl ItemSource {
    /// Natural size used to fit the item inside the lightbox.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        match self {
            ItemSource::Image { size, .. } => Size::new(size.width as f32, size.height as f32),
            ItemSource::Placeholder { .. } => placeholder::NATURAL_SIZE,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ItemSource::Placeholder { .. })
    }
}

#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub source: ItemSource,
    /// Alternative text; the lightbox falls back to a generic label.
    pub alt: Option<String>,
}

impl GalleryItem {
    #[must_use]
    pub fn image(path: PathBuf, size: Size<u32>, alt: Option<String>) -> Self {
        let handle = image::Handle::from_path(&path);
        Self {
            source: ItemSource::Image { path, size, handle },
            alt,
        }
    }

    #[must_use]
    pub fn placeholder(caption: impl Into<String>) -> Self {
        let caption = caption.into();
        let handle = placeholder::handle(&caption);
        Self {
            source: ItemSource::Placeholder { caption, handle },
            alt: None,
        }
    }

    /// Caption shown under the item in the lightbox (placeholders only).
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        match &self.source {
            ItemSource::Placeholder { caption, .. } => Some(caption),
            ItemSource::Image { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    /// Anchor used by navigation links.
    pub id: String,
    /// Label in the navigation bar; sections without one are not linked.
    pub nav_label: Option<String>,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub gallery: Option<Gallery>,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub tagline: Option<String>,
    pub sections: Vec<Section>,
}

impl Page {
    /// Galleries in document order, numbered from zero.
    pub fn galleries(&self) -> impl Iterator<Item = (GalleryId, &Gallery)> {
        self.sections
            .iter()
            .filter_map(|section| section.gallery.as_ref())
            .enumerate()
            .map(|(index, gallery)| (GalleryId(index), gallery))
    }

    #[must_use]
    pub fn gallery(&self, id: GalleryId) -> Option<&Gallery> {
        self.galleries()
            .find(|(gallery_id, _)| *gallery_id == id)
            .map(|(_, gallery)| gallery)
    }

    #[must_use]
    pub fn gallery_count(&self) -> usize {
        self.galleries().count()
    }

    #[must_use]
    pub fn item(&self, key: ItemKey) -> Option<&GalleryItem> {
        self.gallery(key.gallery)?.items.get(key.item)
    }

    /// `(section id, label)` for every section that appears in the navigation bar.
    pub fn nav_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections.iter().filter_map(|section| {
            section
                .nav_label
                .as_deref()
                .map(|label| (section.id.as_str(), label))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, gallery: Option<Gallery>) -> Section {
        Section {
            id: id.to_string(),
            nav_label: Some(id.to_uppercase()),
            heading: id.to_string(),
            paragraphs: Vec::new(),
            gallery,
        }
    }

    fn sample_page() -> Page {
        Page {
            title: "Sample".into(),
            tagline: None,
            sections: vec![
                section("intro", None),
                section(
                    "work",
                    Some(Gallery::new(vec![
                        GalleryItem::placeholder("a"),
                        GalleryItem::placeholder("b"),
                    ])),
                ),
                section("more", Some(Gallery::new(vec![GalleryItem::placeholder("c")]))),
            ],
        }
    }

    #[test]
    fn galleries_are_numbered_in_document_order() {
        let page = sample_page();
        let ids: Vec<_> = page.galleries().map(|(id, g)| (id, g.len())).collect();
        assert_eq!(ids, vec![(GalleryId(0), 2), (GalleryId(1), 1)]);
    }

    #[test]
    fn item_lookup_follows_keys() {
        let page = sample_page();
        let item = page
            .item(ItemKey::new(GalleryId(1), 0))
            .expect("item should exist");
        assert_eq!(item.caption(), Some("c"));
        assert!(page.item(ItemKey::new(GalleryId(1), 1)).is_none());
        assert!(page.item(ItemKey::new(GalleryId(2), 0)).is_none());
    }

    #[test]
    fn placeholders_use_generated_size() {
        let item = GalleryItem::placeholder("soon");
        assert!(item.source.is_placeholder());
        assert_eq!(item.source.natural_size(), placeholder::NATURAL_SIZE);
    }

    #[test]
    fn nav_links_skip_unlabelled_sections() {
        let mut page = sample_page();
        page.sections[0].nav_label = None;
        let links: Vec<_> = page.nav_links().collect();
        assert_eq!(links, vec![("work", "WORK"), ("more", "MORE")]);
    }
}
