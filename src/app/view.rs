// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Builds the navbar, the reading progress bar and the current screen,
//! then stacks the dropdown menu and toast overlay on top.

use super::{Message, Screen};
use crate::course::Course;
use crate::i18n::I18n;
use crate::store::{PageEngagement, ProgressStore};
use crate::ui::module_page::{self, ViewContext as ModulePageViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager as NotificationManager, Toast};
use crate::ui::overview::{self, ViewContext as OverviewViewContext};
use crate::ui::reading_progress;
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::widget::{stack, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub course: &'a Course,
    pub progress: &'a ProgressStore,
    /// Engagement snapshot for the open module page.
    pub engagement: &'a PageEngagement,
    pub navbar: &'a navbar::State,
    pub module_page: Option<&'a module_page::State>,
    pub theme_mode: ThemeMode,
    pub notifications: &'a NotificationManager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_ctx = NavbarViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        course: ctx.course,
        progress: ctx.progress,
        theme_mode: ctx.theme_mode,
    };
    let navbar_view = navbar::view(&navbar_ctx).map(Message::Navbar);

    let progress_view = reading_progress::view(reading_percentage(&ctx));

    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Overview => overview::view(&OverviewViewContext {
            i18n: ctx.i18n,
            course: ctx.course,
            progress: ctx.progress,
        })
        .map(Message::Overview),
        Screen::Module(number) => view_module(&ctx, number),
        Screen::Settings => settings::view(&SettingsViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
    };

    let base = Column::new()
        .push(navbar_view)
        .push(progress_view)
        .push(
            Container::new(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![base];

    if ctx.navbar.menu_open() {
        let menu = navbar::menu_view(&navbar_ctx).map(Message::Navbar);
        layers = layers.push(
            Container::new(menu)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Left)
                .align_y(alignment::Vertical::Top)
                .padding([
                    crate::ui::design_tokens::sizing::NAVBAR_HEIGHT,
                    crate::ui::design_tokens::spacing::SM,
                ]),
        );
    }

    let toast_overlay =
        Toast::view_overlay(ctx.notifications.current(), ctx.i18n).map(Message::Notification);
    layers = layers.push(toast_overlay);

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_module<'a>(ctx: &ViewContext<'a>, number: u32) -> Element<'a, Message> {
    let (Some(module), Some(state)) = (ctx.course.module(number), ctx.module_page) else {
        // Unknown module numbers fall back to a plain message rather
        // than panicking on a corrupt navigation state.
        return Container::new(Text::new(ctx.i18n.tr("module-not-found")))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    };

    module_page::view(&ModulePageViewContext {
        i18n: ctx.i18n,
        state,
        course: ctx.course,
        module,
        progress: ctx.progress,
        engagement: ctx.engagement,
    })
    .map(Message::ModulePage)
}

/// Course-wide reading percentage for the thin bar under the navbar.
///
/// Module screens blend the module position with the in-page scroll;
/// every other screen shows the raw completion percentage.
fn reading_percentage(ctx: &ViewContext<'_>) -> f32 {
    match ctx.screen {
        Screen::Module(number) => {
            let fraction = ctx
                .module_page
                .map(module_page::State::scroll_fraction)
                .unwrap_or(0.0);
            reading_progress::course_percentage(number, ctx.course.module_count(), fraction)
        }
        _ => ctx.progress.completion_percentage(ctx.course.module_count()) as f32,
    }
}
