// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::module_page;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::overview;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Overview(overview::Message),
    ModulePage(module_page::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast lifecycle and the copied badge.
    Tick(Instant),
    /// Arrow-key navigation between modules.
    NavigatePrevious,
    NavigateNext,
    /// A click landed outside any interactive widget.
    BackgroundPressed,
    /// Result of a clipboard copy started for a prompt block.
    PromptCopied {
        prompt: usize,
        result: Result<(), String>,
    },
}

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `en-US`.
    pub lang: Option<String>,
    /// Configuration directory override.
    pub config_dir: Option<PathBuf>,
    /// Data directory override.
    pub data_dir: Option<PathBuf>,
}
