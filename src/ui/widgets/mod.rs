// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod scroll_lock;

pub use scroll_lock::{scroll_lock, ScrollLock};
