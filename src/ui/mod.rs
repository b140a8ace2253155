// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own `Message`, and tells the application what
//! else has to happen.
//!
//! # Components
//!
//! - [`carousel`] - Gallery carousel with a movable window of items
//! - [`lightbox`] - Page-wide image overlay with click-to-zoom and pan
//! - [`navbar`] - Navigation bar with a collapsible link menu
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (zoom, drag, debounce)
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`placeholder`] - Generated artwork for items without an image

pub mod carousel;
pub mod design_tokens;
pub mod lightbox;
pub mod navbar;
pub mod placeholder;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
