// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components update their own state and report effects; the handlers here
//! turn those effects into tasks (page and track scrolling, resize debounce).

use super::{page_scrollable_id, App, Message, Shortcut};
use crate::page::layout::PageLayout;
use crate::page::GalleryId;
use crate::ui::carousel::{self, Effect as CarouselEffect};
use crate::ui::lightbox;
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Size, Task};

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar(app, message),
        Message::Carousel(gallery, message) => handle_carousel(app, gallery, message),
        Message::Lightbox(message) => {
            app.lightbox.update(message);
            Task::none()
        }
        Message::Shortcut(shortcut) => {
            handle_shortcut(app, shortcut);
            Task::none()
        }
        Message::WindowOpened(size) => {
            app.pending_size = None;
            apply_window_size(app, size)
        }
        Message::WindowResized(size) => {
            app.pending_size = Some(size);
            app.resize_debouncer.schedule(Message::ResizeSettled)
        }
        Message::ResizeSettled(token) => {
            if !app.resize_debouncer.is_current(token) {
                return Task::none();
            }
            match app.pending_size.take() {
                Some(size) => apply_window_size(app, size),
                None => Task::none(),
            }
        }
        Message::DismissNotice => {
            app.notice = None;
            Task::none()
        }
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(id) => match app.layout.scroll_target(&id) {
            Some(y) => operation::scroll_to(page_scrollable_id(), AbsoluteOffset { x: 0.0, y }),
            None => {
                log::debug!("no section with id {id:?}, ignoring link");
                Task::none()
            }
        },
    }
}

fn handle_carousel(
    app: &mut App,
    gallery: GalleryId,
    message: carousel::Message,
) -> Task<Message> {
    let Some(carousel) = app
        .carousels
        .iter_mut()
        .find(|carousel| carousel.gallery() == gallery)
    else {
        log::warn!("message for unknown gallery {gallery:?}");
        return Task::none();
    };

    match carousel.handle(message) {
        CarouselEffect::None => Task::none(),
        CarouselEffect::Render => carousel.render(),
        CarouselEffect::OpenLightbox(key) => {
            if app.lightbox.open(&app.page, key) {
                app.menu_open = false;
            }
            Task::none()
        }
    }
}

/// Keyboard navigation applies to the lightbox only while it is open.
fn handle_shortcut(app: &mut App, shortcut: Shortcut) {
    if app.lightbox.is_open() {
        let message = match shortcut {
            Shortcut::Escape => lightbox::Message::Close,
            Shortcut::Previous => lightbox::Message::Prev,
            Shortcut::Next => lightbox::Message::Next,
        };
        app.lightbox.update(message);
    } else if shortcut == Shortcut::Escape {
        app.menu_open = false;
    }
}

/// Lays the page out again for `size` and re-renders every carousel whose
/// measurements changed.
fn apply_window_size(app: &mut App, size: Size) -> Task<Message> {
    app.window_size = size;
    app.layout = PageLayout::compute(&app.page, size.width);
    if !navbar::is_compact(size.width) {
        app.menu_open = false;
    }

    let tasks: Vec<Task<Message>> = app
        .carousels
        .iter_mut()
        .filter_map(|carousel| carousel.resize(size.width).then(|| carousel.render()))
        .collect();

    log::debug!(
        "window {}x{}: {} carousel(s) re-rendered",
        size.width,
        size.height,
        tasks.len()
    );

    Task::batch(tasks)
}
