// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each screen or widget follows the same shape: a `State` struct, a
//! `Message` enum, an `Event` enum for what bubbles up to the
//! application, and free `update`/`view` functions.

pub mod comments;
pub mod design_tokens;
pub mod exercises;
pub mod module_page;
pub mod navbar;
pub mod notifications;
pub mod overview;
pub mod reading_progress;
pub mod settings;
pub mod theming;
