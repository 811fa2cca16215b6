// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and UX timing constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// How long a toast stays fully visible before it starts leaving (seconds).
pub const TOAST_DISMISS_SECS: u64 = 3;

/// Duration of the toast leaving (fade-out) phase (milliseconds).
pub const TOAST_LEAVING_MS: u64 = 300;

// ==========================================================================
// Copy Affordance Defaults
// ==========================================================================

/// How long a copy button shows its "Copied!" label after a successful
/// clipboard write (seconds).
pub const COPIED_BADGE_SECS: u64 = 2;

// ==========================================================================
// Exercise Defaults
// ==========================================================================

/// Absolute tolerance applied to fill-in-the-blank answers when the course
/// catalog does not configure one.
pub const DEFAULT_FILL_BLANK_TOLERANCE: f64 = 0.0;

// ==========================================================================
// Comment Defaults
// ==========================================================================

/// Author name used when a comment is submitted with a blank author field.
pub const DEFAULT_COMMENT_AUTHOR: &str = "Anonymous";
