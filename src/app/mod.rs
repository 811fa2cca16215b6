// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the course catalog, the persisted
//! stores, localization and theming, and translates messages into side
//! effects like clipboard copies or config persistence. Policy decisions
//! (window size, persistence behavior, theme fallback) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::analytics::{self, AnalyticsSink};
use crate::config::{self, Config};
use crate::course::Course;
use crate::i18n::I18n;
use crate::store::{EngagementStore, PageEngagement, ProgressStore};
use crate::ui::module_page;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging UI components, localization and
/// persisted stores.
pub struct App {
    pub i18n: I18n,
    config: Config,
    config_dir: Option<PathBuf>,
    screen: Screen,
    navbar: navbar::State,
    /// Page state for the open module, if any.
    module_page: Option<module_page::State>,
    course: Course,
    progress: ProgressStore,
    engagement: EngagementStore,
    /// Engagement snapshot for the open module page.
    page_engagement: PageEngagement,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    analytics: Box<dyn AnalyticsSink>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait bound
    // while only consuming them once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config file, the embedded
    /// course catalog and the persisted stores. Load problems surface as
    /// toasts instead of aborting startup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let course = match Course::load_embedded() {
            Ok(course) => course,
            Err(error) => {
                log::error!("failed to load course catalog: {error}");
                Course {
                    title: i18n.tr("window-title"),
                    modules: Vec::new(),
                }
            }
        };
        let course_broken = course.modules.is_empty();

        let (progress, progress_warning) = ProgressStore::open(flags.data_dir.clone());
        let (engagement, engagement_warning) = EngagementStore::open(flags.data_dir.clone());

        let theme_mode = config.general.theme_mode;
        let analytics = analytics::from_config(&config);

        let mut app = App {
            i18n,
            config,
            config_dir: flags.config_dir,
            screen: Screen::Overview,
            navbar: navbar::State::new(),
            module_page: None,
            course,
            progress,
            engagement,
            page_engagement: PageEngagement::default(),
            theme_mode,
            notifications: notifications::Manager::new(),
            analytics,
        };

        if course_broken {
            app.notifications.push(notifications::Notification::error(
                "notification-course-load-error",
            ));
        }
        for warning in [config_warning, progress_warning, engagement_warning]
            .into_iter()
            .flatten()
        {
            app.notifications
                .push(notifications::Notification::error(warning));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Module(number) => match self.course.module(number) {
                Some(module) => format!("{} - {}", module.title, self.i18n.tr("window-title")),
                None => self.i18n.tr("window-title"),
            },
            _ => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        crate::ui::theming::iced_theme(self.theme_mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        let has_copied_badge = self
            .module_page
            .as_ref()
            .is_some_and(module_page::State::has_copied_badge);

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.notifications.has_notification(),
                has_copied_badge,
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            navbar: &mut self.navbar,
            module_page: &mut self.module_page,
            course: &self.course,
            progress: &mut self.progress,
            engagement: &mut self.engagement,
            page_engagement: &mut self.page_engagement,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            config_dir: &self.config_dir,
            notifications: &mut self.notifications,
            analytics: self.analytics.as_ref(),
        };

        match message {
            Message::Navbar(message) => update::handle_navbar(&mut ctx, message),
            Message::Overview(crate::ui::overview::Message::OpenModule(number)) => {
                update::open_module(&mut ctx, number)
            }
            Message::ModulePage(message) => update::handle_module_page(&mut ctx, message),
            Message::Settings(message) => update::handle_settings(&mut ctx, message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                if let Some(state) = self.module_page.as_mut() {
                    state.tick_copied();
                }
                Task::none()
            }
            Message::NavigatePrevious => update::navigate(&mut ctx, false),
            Message::NavigateNext => update::navigate(&mut ctx, true),
            Message::BackgroundPressed => {
                self.navbar.close_menu();
                Task::none()
            }
            Message::PromptCopied { prompt, result } => {
                update::handle_prompt_copied(&mut ctx, prompt, result);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            course: &self.course,
            progress: &self.progress,
            engagement: &self.page_engagement,
            navbar: &self.navbar,
            module_page: self.module_page.as_ref(),
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::comments;
    use crate::ui::settings;
    use tempfile::{tempdir, TempDir};

    fn test_app() -> (App, TempDir, TempDir) {
        let data_dir = tempdir().expect("data dir");
        let config_dir = tempdir().expect("config dir");
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(config_dir.path().to_path_buf()),
            data_dir: Some(data_dir.path().to_path_buf()),
        };
        let (app, _task) = App::new(flags);
        (app, data_dir, config_dir)
    }

    fn open_module(app: &mut App, number: u32) {
        let _ = app.update(Message::Overview(crate::ui::overview::Message::OpenModule(
            number,
        )));
    }

    #[test]
    fn fresh_app_starts_on_overview_without_notifications() {
        let (app, _data, _config) = test_app();
        assert_eq!(app.screen, Screen::Overview);
        assert!(!app.notifications.has_notification());
        assert!(app.course.module_count() > 0);
    }

    #[test]
    fn corrupt_config_surfaces_a_notification() {
        let data_dir = tempdir().expect("data dir");
        let config_dir = tempdir().expect("config dir");
        std::fs::write(
            config_dir.path().join(config::CONFIG_FILE),
            "general = \"not a table\"",
        )
        .expect("write config");

        let flags = Flags {
            lang: None,
            config_dir: Some(config_dir.path().to_path_buf()),
            data_dir: Some(data_dir.path().to_path_buf()),
        };
        let (app, _task) = App::new(flags);
        assert!(app.notifications.has_notification());
    }

    #[test]
    fn opening_a_module_switches_screen_and_resets_page_state() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 2);

        assert_eq!(app.screen, Screen::Module(2));
        let page = app.module_page.as_ref().expect("page state");
        assert_eq!(page.module_number(), 2);
        assert_eq!(page.scroll_fraction(), 0.0);
    }

    #[test]
    fn marking_a_module_complete_updates_progress_and_toasts() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 1);

        let _ = app.update(Message::ModulePage(module_page::Message::MarkComplete));

        assert!(app.progress.is_completed(1));
        assert_eq!(app.progress.record().current_module, 2);
        let toast = app.notifications.current().expect("toast");
        assert_eq!(toast.message_key(), "notification-module-completed");
    }

    #[test]
    fn completing_twice_only_toasts_once() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 1);

        let _ = app.update(Message::ModulePage(module_page::Message::MarkComplete));
        app.notifications.dismiss();
        let _ = app.update(Message::ModulePage(module_page::Message::MarkComplete));

        assert!(!app.notifications.has_notification());
        assert!(app.progress.is_completed(1));
    }

    #[test]
    fn arrow_keys_move_between_modules() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 2);

        let _ = app.update(Message::NavigateNext);
        assert_eq!(app.screen, Screen::Module(3));

        let _ = app.update(Message::NavigatePrevious);
        let _ = app.update(Message::NavigatePrevious);
        assert_eq!(app.screen, Screen::Module(1));

        // No previous module before the first.
        let _ = app.update(Message::NavigatePrevious);
        assert_eq!(app.screen, Screen::Module(1));
    }

    #[test]
    fn arrow_keys_are_inert_outside_module_screens() {
        let (mut app, _data, _config) = test_app();
        let _ = app.update(Message::NavigateNext);
        assert_eq!(app.screen, Screen::Overview);
    }

    #[test]
    fn submitting_a_comment_stores_it_and_refreshes_the_snapshot() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 1);

        let _ = app.update(Message::ModulePage(module_page::Message::Comments(
            comments::Message::ContentChanged("Clear explanation".into()),
        )));
        let _ = app.update(Message::ModulePage(module_page::Message::Comments(
            comments::Message::Submit,
        )));

        assert_eq!(app.page_engagement.comments.len(), 1);
        assert_eq!(app.page_engagement.comments[0].content, "Clear explanation");
        assert_eq!(app.page_engagement.comments[0].author, "Anonymous");
    }

    #[test]
    fn empty_comment_is_rejected_with_a_toast_and_not_stored() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 1);

        let _ = app.update(Message::ModulePage(module_page::Message::Comments(
            comments::Message::Submit,
        )));

        assert!(app.page_engagement.comments.is_empty());
        let toast = app.notifications.current().expect("toast");
        assert_eq!(toast.message_key(), "notification-comment-empty");
    }

    #[test]
    fn toggling_like_twice_returns_to_baseline() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 1);

        let _ = app.update(Message::ModulePage(module_page::Message::Comments(
            comments::Message::ToggleLike,
        )));
        assert_eq!(app.page_engagement.likes, 1);
        assert!(app.page_engagement.liked);

        let _ = app.update(Message::ModulePage(module_page::Message::Comments(
            comments::Message::ToggleLike,
        )));
        assert_eq!(app.page_engagement.likes, 0);
        assert!(!app.page_engagement.liked);
    }

    #[test]
    fn theme_toggle_persists_an_explicit_mode() {
        let (mut app, _data, config_dir) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));

        assert!(matches!(
            app.theme_mode,
            ThemeMode::Light | ThemeMode::Dark
        ));

        let saved = config::load_from_path(&config_dir.path().join(config::CONFIG_FILE))
            .expect("saved config");
        assert_eq!(saved.general.theme_mode, app.theme_mode);
    }

    #[test]
    fn settings_screen_sets_the_selected_mode() {
        let (mut app, _data, _config) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::GoSettings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Dark,
        )));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn background_press_closes_the_menu() {
        let (mut app, _data, _config) = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.navbar.menu_open());

        let _ = app.update(Message::BackgroundPressed);
        assert!(!app.navbar.menu_open());
    }

    #[test]
    fn failed_copy_shows_an_error_toast() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 1);

        let _ = app.update(Message::PromptCopied {
            prompt: 0,
            result: Err("no clipboard".into()),
        });

        let toast = app.notifications.current().expect("toast");
        assert_eq!(toast.message_key(), "notification-copy-error");
    }

    #[test]
    fn successful_copy_marks_the_prompt_and_toasts() {
        let (mut app, _data, _config) = test_app();
        open_module(&mut app, 1);

        let _ = app.update(Message::PromptCopied {
            prompt: 0,
            result: Ok(()),
        });

        let page = app.module_page.as_ref().expect("page state");
        assert!(page.has_copied_badge());
        let toast = app.notifications.current().expect("toast");
        assert_eq!(toast.message_key(), "notification-copy-success");
    }

    #[test]
    fn progress_survives_a_restart() {
        let data_dir = tempdir().expect("data dir");
        let config_dir = tempdir().expect("config dir");
        let flags = Flags {
            lang: None,
            config_dir: Some(config_dir.path().to_path_buf()),
            data_dir: Some(data_dir.path().to_path_buf()),
        };

        {
            let (mut app, _task) = App::new(flags.clone());
            open_module(&mut app, 1);
            let _ = app.update(Message::ModulePage(module_page::Message::MarkComplete));
        }

        let (app, _task) = App::new(flags);
        assert!(app.progress.is_completed(1));
        assert_eq!(app.progress.record().current_module, 2);
    }
}
