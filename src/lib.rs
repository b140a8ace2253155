// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` renders a single-page portfolio with the Iced GUI framework.
//!
//! A page is a list of sections with text and image galleries. Each gallery
//! is shown as a paged carousel, and any image can be opened in a lightbox
//! with click-to-zoom and drag panning. Sections are reachable from a
//! navigation bar that collapses into a menu on narrow windows.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod page;
pub mod ui;

#[cfg(test)]
mod test_utils;
