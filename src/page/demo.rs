// SPDX-License-Identifier: MPL-2.0
//! Built-in page shown when no page document is given (or it fails to load).
//!
//! Every gallery item is a placeholder so the demo needs no files on disk.

use super::{Gallery, GalleryItem, Page, Section};

fn placeholders(captions: &[&str]) -> Gallery {
    Gallery::new(
        captions
            .iter()
            .map(|caption| GalleryItem::placeholder(*caption))
            .collect(),
    )
}

#[must_use]
pub fn demo_page() -> Page {
    Page {
        title: "Northlight Studio".into(),
        tagline: Some("Architecture, interiors and the spaces in between".into()),
        sections: vec![
            Section {
                id: "about".into(),
                nav_label: Some("About".into()),
                heading: "About the studio".into(),
                paragraphs: vec![
                    "Northlight is a small practice working on homes, workshops and public rooms. \
                     We care about daylight, honest materials and buildings that age well."
                        .into(),
                ],
                gallery: None,
            },
            Section {
                id: "projects".into(),
                nav_label: Some("Projects".into()),
                heading: "Selected projects".into(),
                paragraphs: vec![
                    "Click any picture to open it full size, then click again to zoom in.".into(),
                ],
                gallery: Some(placeholders(&[
                    "Dune house, west elevation",
                    "Dune house, living room",
                    "Harbour workshop, exterior",
                    "Harbour workshop, timber roof",
                    "Library annex, reading room",
                    "Library annex, courtyard",
                    "Library annex, stair detail",
                ])),
            },
            Section {
                id: "process".into(),
                nav_label: Some("Process".into()),
                heading: "How we work".into(),
                paragraphs: vec![
                    "Every project starts with a site visit and a stack of sketches.".into(),
                    "Models and mock-ups follow long before the first drawing is final.".into(),
                ],
                gallery: Some(placeholders(&[
                    "Site sketch",
                    "Card model",
                    "Material samples",
                    "Full-scale mock-up",
                ])),
            },
            Section {
                id: "contact".into(),
                nav_label: Some("Contact".into()),
                heading: "Get in touch".into(),
                paragraphs: vec!["hello@northlight.example".into()],
                gallery: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_has_unique_section_ids() {
        let page = demo_page();
        let ids: HashSet<_> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), page.sections.len());
    }

    #[test]
    fn demo_galleries_hold_only_placeholders() {
        let page = demo_page();
        assert_eq!(page.gallery_count(), 2);
        assert!(page
            .galleries()
            .flat_map(|(_, gallery)| gallery.items.iter())
            .all(|item| item.source.is_placeholder()));
    }
}
