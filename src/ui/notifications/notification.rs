// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::config::defaults::{TOAST_DISMISS_SECS, TOAST_LEAVING_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Severity level determines the accent color of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Something went wrong (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Lifecycle phase of a displayed toast.
///
/// A toast shows at full opacity while `Active`, then fades while
/// `Leaving` before it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Leaving,
}

/// A notification to be displayed as a toast.
#[derive(Debug, Clone)]
pub struct Notification {
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    phase: Phase,
    /// Start of the current phase.
    phase_started: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            phase: Phase::Active,
            phase_started: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.phase == Phase::Leaving
    }

    /// Starts the fade-out phase.
    pub fn start_leaving(&mut self) {
        if self.phase == Phase::Active {
            self.phase = Phase::Leaving;
            self.phase_started = Instant::now();
        }
    }

    /// Whether the current phase has run its course.
    #[must_use]
    pub fn phase_expired(&self) -> bool {
        let limit = match self.phase {
            Phase::Active => Duration::from_secs(TOAST_DISMISS_SECS),
            Phase::Leaving => Duration::from_millis(TOAST_LEAVING_MS),
        };
        self.phase_started.elapsed() >= limit
    }

    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.phase_started -= by;
    }
}
