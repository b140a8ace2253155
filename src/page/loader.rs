// SPDX-License-Identifier: MPL-2.0
//! Loads a page document from TOML.
//!
//! ```toml
//! title = "Northlight Studio"
//! tagline = "Architecture and interiors"
//!
//! [[sections]]
//! id = "work"
//! nav = "Work"
//! heading = "Selected work"
//! body = ["Residential projects, 2019-2024."]
//!
//! [[sections.gallery]]
//! image = "images/house.jpg"
//! alt = "House on the dunes"
//!
//! [[sections.gallery]]
//! placeholder = "Photos coming soon"
//! ```
//!
//! Relative image paths resolve against the page file's directory. Image
//! dimensions are read once here so later layout never touches the disk.

use super::{Gallery, GalleryItem, Page, Section};
use crate::error::{Error, Result};
use iced::Size;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPage {
    title: String,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSection {
    id: String,
    #[serde(default)]
    nav: Option<String>,
    heading: String,
    #[serde(default)]
    body: Vec<String>,
    #[serde(default)]
    gallery: Option<Vec<RawItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    #[serde(default)]
    image: Option<PathBuf>,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    alt: Option<String>,
}

/// Reads and validates the page document at `path`.
pub fn load_from_path(path: &Path) -> Result<Page> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse(&content, base_dir)
}

/// Parses a page document; relative image paths are joined onto `base_dir`.
pub fn parse(content: &str, base_dir: &Path) -> Result<Page> {
    let raw: RawPage = toml::from_str(content).map_err(|err| Error::Page(err.to_string()))?;

    let mut seen = HashSet::new();
    let mut sections = Vec::with_capacity(raw.sections.len());
    for raw_section in raw.sections {
        let id = raw_section.id.trim().to_string();
        if id.is_empty() {
            return Err(Error::Page(format!(
                "section `{}` has an empty id",
                raw_section.heading
            )));
        }
        if !seen.insert(id.clone()) {
            return Err(Error::Page(format!("duplicate section id `{id}`")));
        }

        let gallery = raw_section
            .gallery
            .map(|items| build_gallery(&id, items, base_dir))
            .transpose()?;

        sections.push(Section {
            id,
            nav_label: raw_section.nav,
            heading: raw_section.heading,
            paragraphs: raw_section.body,
            gallery,
        });
    }

    let page = Page {
        title: raw.title,
        tagline: raw.tagline,
        sections,
    };
    log::debug!(
        "loaded page `{}` with {} sections and {} galleries",
        page.title,
        page.sections.len(),
        page.gallery_count()
    );
    Ok(page)
}

fn build_gallery(section_id: &str, items: Vec<RawItem>, base_dir: &Path) -> Result<Gallery> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| build_item(section_id, index, item, base_dir))
        .collect::<Result<Vec<_>>>()
        .map(Gallery::new)
}

fn build_item(section_id: &str, index: usize, item: RawItem, base_dir: &Path) -> Result<GalleryItem> {
    match (item.image, item.placeholder) {
        (Some(image), None) => {
            let path = if image.is_absolute() {
                image
            } else {
                base_dir.join(image)
            };
            let (width, height) = image_rs::image_dimensions(&path).map_err(|err| {
                Error::Page(format!("cannot read image {}: {}", path.display(), err))
            })?;
            Ok(GalleryItem::image(path, Size::new(width, height), item.alt))
        }
        (None, Some(caption)) => {
            let mut placeholder = GalleryItem::placeholder(caption);
            placeholder.alt = item.alt;
            Ok(placeholder)
        }
        _ => Err(Error::Page(format!(
            "item {index} of section `{section_id}` needs exactly one of `image` or `placeholder`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ItemSource;
    use tempfile::tempdir;

    const PLACEHOLDER_PAGE: &str = r#"
title = "Studio"

[[sections]]
id = "about"
nav = "About"
heading = "About us"
body = ["One.", "Two."]

[[sections]]
id = "work"
heading = "Work"

[[sections.gallery]]
placeholder = "Coming soon"

[[sections.gallery]]
placeholder = "Also soon"
alt = "Second"
"#;

    #[test]
    fn parses_sections_and_placeholders() {
        let page = parse(PLACEHOLDER_PAGE, Path::new(".")).expect("page should parse");

        assert_eq!(page.title, "Studio");
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].paragraphs.len(), 2);
        assert!(page.sections[0].gallery.is_none());

        let gallery = page.sections[1].gallery.as_ref().expect("gallery");
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.items[0].caption(), Some("Coming soon"));
        assert_eq!(gallery.items[1].alt.as_deref(), Some("Second"));
    }

    #[test]
    fn empty_gallery_is_kept() {
        let content = "title = \"t\"\n[[sections]]\nid = \"g\"\nheading = \"G\"\ngallery = []\n";
        let page = parse(content, Path::new(".")).expect("page should parse");
        let gallery = page.sections[0].gallery.as_ref().expect("gallery");
        assert!(gallery.is_empty());
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let content = "title = \"t\"\n[[sections]]\nid = \"a\"\nheading = \"A\"\n[[sections]]\nid = \"a\"\nheading = \"B\"\n";
        let err = parse(content, Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::Page(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn blank_section_id_is_rejected() {
        let content = "title = \"t\"\n[[sections]]\nid = \"  \"\nheading = \"A\"\n";
        assert!(matches!(parse(content, Path::new(".")), Err(Error::Page(_))));
    }

    #[test]
    fn item_needs_exactly_one_source() {
        let content = "title = \"t\"\n[[sections]]\nid = \"a\"\nheading = \"A\"\n[[sections.gallery]]\nimage = \"x.png\"\nplaceholder = \"y\"\n";
        let err = parse(content, Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::Page(msg) if msg.contains("exactly one")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let content = "title = \"t\"\ncolour = \"red\"\n";
        assert!(matches!(parse(content, Path::new(".")), Err(Error::Page(_))));
    }

    #[test]
    fn missing_image_is_reported() {
        let dir = tempdir().expect("temp dir");
        let content = "title = \"t\"\n[[sections]]\nid = \"a\"\nheading = \"A\"\n[[sections.gallery]]\nimage = \"missing.png\"\n";
        let err = parse(content, dir.path()).unwrap_err();
        assert!(matches!(err, Error::Page(msg) if msg.contains("missing.png")));
    }

    #[test]
    fn relative_images_resolve_against_page_directory() {
        let dir = tempdir().expect("temp dir");
        let image_path = dir.path().join("photo.png");
        image_rs::RgbaImage::new(4, 3)
            .save(&image_path)
            .expect("write test image");

        let page_path = dir.path().join("page.toml");
        fs::write(
            &page_path,
            "title = \"t\"\n[[sections]]\nid = \"a\"\nheading = \"A\"\n[[sections.gallery]]\nimage = \"photo.png\"\nalt = \"A photo\"\n",
        )
        .expect("write page");

        let page = load_from_path(&page_path).expect("page should load");
        let item = &page.sections[0].gallery.as_ref().expect("gallery").items[0];
        match &item.source {
            ItemSource::Image { path, size, .. } => {
                assert_eq!(path, &image_path);
                assert_eq!((size.width, size.height), (4, 3));
            }
            ItemSource::Placeholder { .. } => panic!("expected an image item"),
        }
        assert_eq!(item.alt.as_deref(), Some("A photo"));
    }
}
