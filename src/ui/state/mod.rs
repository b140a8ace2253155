// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that several widgets share, kept apart from the widgets that draw it.

pub mod debounce;
pub mod drag;
pub mod zoom;

pub use debounce::{DebounceToken, Debouncer};
pub use drag::{DragState, Pointer, Release};
pub use zoom::{fit_rect, ImageTransform, TransformOrigin, ZoomState};
