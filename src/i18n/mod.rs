// SPDX-License-Identifier: MPL-2.0
//! Interface translations backed by Fluent.
//!
//! Locale files are embedded at build time. The active locale comes from the
//! command line, then the settings file, then the system locale, falling back
//! to `en-US` for anything missing.

pub mod fluent;
