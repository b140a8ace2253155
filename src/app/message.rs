// SPDX-License-Identifier: MPL-2.0
//! Application messages and launch flags.

use crate::page::GalleryId;
use crate::ui::carousel;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::state::DebounceToken;
use iced::Size;
use std::path::PathBuf;

/// Keyboard shortcuts the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Escape,
    Previous,
    Next,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Carousel(GalleryId, carousel::Message),
    Lightbox(lightbox::Message),
    Shortcut(Shortcut),
    /// The window appeared with this size; applied immediately.
    WindowOpened(Size),
    /// The window was resized; applied once resizing settles.
    WindowResized(Size),
    ResizeSettled(DebounceToken),
    DismissNotice,
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Page document to show; the built-in demo page when absent.
    pub page_path: Option<PathBuf>,
}
