// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `App::update` builds an [`UpdateContext`] over its mutable fields and
//! dispatches to the handlers here, so every state transition funnels
//! through one auditable place per concern.

use super::{Message, Screen};
use crate::analytics::AnalyticsSink;
use crate::config::{self, Config};
use crate::course::Course;
use crate::store::{EngagementStore, PageEngagement, ProgressStore};
use crate::ui::module_page::{self, Event as ModulePageEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{Manager as NotificationManager, Notification};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::Task;
use std::path::PathBuf;

/// Mutable slices of `App` state the handlers operate on.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub navbar: &'a mut navbar::State,
    pub module_page: &'a mut Option<module_page::State>,
    pub course: &'a Course,
    pub progress: &'a mut ProgressStore,
    pub engagement: &'a mut EngagementStore,
    pub page_engagement: &'a mut PageEngagement,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub notifications: &'a mut NotificationManager,
    pub analytics: &'a dyn AnalyticsSink,
}

pub fn handle_navbar(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(ctx.navbar, message) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::GoOverview => {
            *ctx.screen = Screen::Overview;
            *ctx.module_page = None;
            Task::none()
        }
        NavbarEvent::GoModule(number) => open_module(ctx, number),
        NavbarEvent::GoSettings => {
            *ctx.screen = Screen::Settings;
            *ctx.module_page = None;
            Task::none()
        }
        NavbarEvent::ToggleTheme => {
            set_theme_mode(ctx, ctx.theme_mode.toggled());
            Task::none()
        }
    }
}

pub fn handle_settings(ctx: &mut UpdateContext<'_>, message: settings::Message) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::SetThemeMode(mode) => {
            set_theme_mode(ctx, mode);
            Task::none()
        }
    }
}

pub fn handle_module_page(
    ctx: &mut UpdateContext<'_>,
    message: module_page::Message,
) -> Task<Message> {
    let Some(number) = ctx.screen.module_number() else {
        return Task::none();
    };
    let (Some(module), Some(state)) = (ctx.course.module(number), ctx.module_page.as_mut()) else {
        return Task::none();
    };

    match module_page::update(state, module, message) {
        ModulePageEvent::None => Task::none(),
        ModulePageEvent::SnapTo(offset) => operation::snap_to(module_page::scroll_id(), offset),
        ModulePageEvent::CopyPrompt { prompt, content } => Task::perform(
            async move { copy_to_clipboard(content) },
            move |result| Message::PromptCopied { prompt, result },
        ),
        ModulePageEvent::MarkComplete => {
            mark_complete(ctx, number);
            Task::none()
        }
        ModulePageEvent::GoModule(target) => open_module(ctx, target),
        ModulePageEvent::AddComment { author, content } => {
            let page_id = module.page_id();
            if let Some(key) = ctx.engagement.add_comment(&page_id, &author, &content) {
                ctx.notifications.push(Notification::error(key));
            }
            *ctx.page_engagement = ctx.engagement.for_page(&page_id);
            Task::none()
        }
        ModulePageEvent::EmptyComment => {
            ctx.notifications
                .push(Notification::error("notification-comment-empty"));
            Task::none()
        }
        ModulePageEvent::ToggleLike => {
            let page_id = module.page_id();
            let (snapshot, warning) = ctx.engagement.toggle_like(&page_id);
            *ctx.page_engagement = snapshot;
            if let Some(key) = warning {
                ctx.notifications.push(Notification::error(key));
            }
            Task::none()
        }
    }
}

/// Switches to a module page, resetting per-page state and scrolling to
/// the top.
pub fn open_module(ctx: &mut UpdateContext<'_>, number: u32) -> Task<Message> {
    let Some(module) = ctx.course.module(number) else {
        return Task::none();
    };

    *ctx.screen = Screen::Module(number);
    *ctx.module_page = Some(module_page::State::for_module(module));
    *ctx.page_engagement = ctx.engagement.for_page(&module.page_id());
    ctx.analytics.module_view(number);

    operation::snap_to(module_page::scroll_id(), RelativeOffset::START)
}

/// Arrow-key navigation relative to the open module.
pub fn navigate(ctx: &mut UpdateContext<'_>, forward: bool) -> Task<Message> {
    let Some(current) = ctx.screen.module_number() else {
        return Task::none();
    };
    let target = if forward {
        ctx.course.next_module(current)
    } else {
        ctx.course.previous_module(current)
    };
    match target {
        Some(number) => open_module(ctx, number),
        None => Task::none(),
    }
}

fn mark_complete(ctx: &mut UpdateContext<'_>, number: u32) {
    let newly_completed = !ctx.progress.is_completed(number);
    if let Some(key) = ctx.progress.complete_module(number) {
        ctx.notifications.push(Notification::error(key));
        return;
    }
    if newly_completed {
        ctx.analytics.module_completed(number);
        ctx.notifications
            .push(Notification::success("notification-module-completed"));
    }
}

/// Applies a theme preference and persists it.
fn set_theme_mode(ctx: &mut UpdateContext<'_>, mode: ThemeMode) {
    *ctx.theme_mode = mode;
    ctx.config.general.theme_mode = mode;
    if let Err(error) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        log::warn!("failed to save config: {error}");
        ctx.notifications
            .push(Notification::error("notification-config-save-error"));
    }
}

pub fn handle_prompt_copied(
    ctx: &mut UpdateContext<'_>,
    prompt: usize,
    result: Result<(), String>,
) {
    match result {
        Ok(()) => {
            if let Some(state) = ctx.module_page.as_mut() {
                state.mark_copied(prompt);
            }
            ctx.notifications
                .push(Notification::success("notification-copy-success"));
        }
        Err(error) => {
            log::warn!("clipboard copy failed: {error}");
            ctx.notifications
                .push(Notification::error("notification-copy-error"));
        }
    }
}

fn copy_to_clipboard(content: String) -> Result<(), String> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(content))
        .map_err(|error| error.to_string())
}
