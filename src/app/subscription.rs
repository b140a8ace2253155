// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and keyboard events to application messages. Pointer
//! input is handled by the widgets themselves.

use super::{Message, Shortcut};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| route(&event))
}

fn route(event: &Event) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowOpened(*size)),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            shortcut(key).map(Message::Shortcut)
        }
        _ => None,
    }
}

fn shortcut(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Named(Named::Escape) => Some(Shortcut::Escape),
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn navigation_keys_map_to_shortcuts() {
        assert_eq!(shortcut(&Key::Named(Named::Escape)), Some(Shortcut::Escape));
        assert_eq!(shortcut(&Key::Named(Named::ArrowLeft)), Some(Shortcut::Previous));
        assert_eq!(shortcut(&Key::Named(Named::ArrowRight)), Some(Shortcut::Next));
        assert_eq!(shortcut(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(shortcut(&Key::Character("a".into())), None);
    }

    #[test]
    fn resize_events_are_routed() {
        let event = Event::Window(window::Event::Resized(Size::new(800.0, 600.0)));
        assert!(matches!(
            route(&event),
            Some(Message::WindowResized(size)) if size == Size::new(800.0, 600.0)
        ));
    }

    #[test]
    fn unrelated_events_are_dropped() {
        let event = Event::Window(window::Event::Focused);
        assert!(route(&event).is_none());
    }
}
