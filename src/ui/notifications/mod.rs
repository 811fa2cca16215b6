// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily as a single toast in the corner of
//! the window. A new notification replaces the current one, so the most
//! recent message always wins. Toasts show for a few seconds, then fade
//! briefly before disappearing; a dismiss button removes them early.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - Single-slot `Manager` for the toast lifecycle
//! - [`toast`] - Toast widget component for rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Phase, Severity};
pub use toast::Toast;
