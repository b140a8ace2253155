// SPDX-License-Identifier: MPL-2.0
//! Float assertions for layout and transform tests.

pub use approx::assert_abs_diff_eq;
