// SPDX-License-Identifier: MPL-2.0
//! Flattened list of every gallery item of a page.
//!
//! The lightbox rebuilds this list each time it opens, so it always reflects
//! the page currently shown. Placeholders are included alongside real images.

use super::{GalleryItem, ItemKey, Page};

#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub key: ItemKey,
    pub item: GalleryItem,
}

#[derive(Debug, Clone, Default)]
pub struct ImageList {
    entries: Vec<ImageEntry>,
}

impl ImageList {
    /// Collects all items of all galleries in document order.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        let entries = page
            .galleries()
            .flat_map(|(gallery_id, gallery)| {
                gallery
                    .items
                    .iter()
                    .enumerate()
                    .map(move |(index, item)| ImageEntry {
                        key: ItemKey::new(gallery_id, index),
                        item: item.clone(),
                    })
            })
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Position of `key` in the flattened list.
    #[must_use]
    pub fn position_of(&self, key: ItemKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Gallery, GalleryId, Section};

    fn gallery_section(id: &str, captions: &[&str]) -> Section {
        Section {
            id: id.to_string(),
            nav_label: None,
            heading: id.to_string(),
            paragraphs: Vec::new(),
            gallery: Some(Gallery::new(
                captions.iter().map(|c| GalleryItem::placeholder(*c)).collect(),
            )),
        }
    }

    #[test]
    fn flattens_galleries_in_order() {
        let page = Page {
            title: "t".into(),
            tagline: None,
            sections: vec![
                gallery_section("a", &["a0", "a1"]),
                gallery_section("b", &["b0", "b1", "b2"]),
            ],
        };

        let list = ImageList::from_page(&page);

        assert_eq!(list.len(), 5);
        let captions: Vec<_> = list.iter().filter_map(|e| e.item.caption()).collect();
        assert_eq!(captions, vec!["a0", "a1", "b0", "b1", "b2"]);
        assert_eq!(list.position_of(ItemKey::new(GalleryId(1), 0)), Some(2));
    }

    #[test]
    fn unknown_key_has_no_position() {
        let page = Page {
            title: "t".into(),
            tagline: None,
            sections: vec![gallery_section("a", &["a0"])],
        };
        let list = ImageList::from_page(&page);
        assert_eq!(list.position_of(ItemKey::new(GalleryId(0), 3)), None);
        assert_eq!(list.position_of(ItemKey::new(GalleryId(4), 0)), None);
    }

    #[test]
    fn page_without_galleries_is_empty() {
        let page = Page {
            title: "t".into(),
            tagline: None,
            sections: Vec::new(),
        };
        assert!(ImageList::from_page(&page).is_empty());
    }
}
