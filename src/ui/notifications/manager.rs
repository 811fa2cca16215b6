// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` holds a single toast slot. Pushing a new notification
//! replaces whatever is currently showing, so the latest message always
//! wins and toasts never stack.

use super::notification::Notification;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss the current notification.
    Dismiss,
    /// Tick for phase transitions and expiry.
    Tick,
}

/// Manages the single visible notification.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing whatever was showing before.
    pub fn push(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    /// Removes the current notification immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Advances the toast lifecycle.
    ///
    /// An active toast whose display time is up starts fading; a fading
    /// toast whose fade time is up is removed. Call periodically while a
    /// notification is showing.
    pub fn tick(&mut self) {
        let Some(notification) = self.current.as_mut() else {
            return;
        };
        if !notification.phase_expired() {
            return;
        }
        if notification.is_leaving() {
            self.current = None;
        } else {
            notification.start_leaving();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss => self.dismiss(),
            Message::Tick => self.tick(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Whether the tick subscription needs to keep running.
    #[must_use]
    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }
}
