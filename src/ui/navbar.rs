// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with the course menu and theme toggle.
//!
//! The bar shows the course title (a link back to the overview), a
//! hamburger button opening the module menu, and buttons for the theme
//! toggle and settings screen. The menu itself is rendered as a dropdown
//! under the bar; the parent closes it when a click lands elsewhere.

use crate::course::Course;
use crate::i18n::I18n;
use crate::store::ProgressStore;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

#[derive(Debug, Clone, Default)]
pub struct State {
    menu_open: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    GoOverview,
    GoModule(u32),
    GoSettings,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    GoOverview,
    GoModule(u32),
    GoSettings,
    ToggleTheme,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::GoOverview => {
            state.menu_open = false;
            Event::GoOverview
        }
        Message::GoModule(number) => {
            state.menu_open = false;
            Event::GoModule(number)
        }
        Message::GoSettings => {
            state.menu_open = false;
            Event::GoSettings
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub course: &'a Course,
    pub progress: &'a ProgressStore,
    pub theme_mode: ThemeMode,
}

/// Renders the bar itself.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(Text::new("\u{2630}").size(typography::BODY))
        .on_press(Message::ToggleMenu)
        .padding(spacing::SM)
        .style(flat_button_style);

    let brand = button(
        Text::new(ctx.course.title.as_str())
            .size(typography::TITLE_SM)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
    )
    .on_press(Message::GoOverview)
    .padding(spacing::SM)
    .style(flat_button_style);

    let theme_glyph = if ctx.theme_mode.is_dark() {
        "\u{2600}"
    } else {
        "\u{263E}"
    };
    let theme_button = button(Text::new(theme_glyph).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding(spacing::SM)
        .style(flat_button_style);

    let settings_button = button(Text::new(ctx.i18n.tr("nav-settings")).size(typography::BODY))
        .on_press(Message::GoSettings)
        .padding(spacing::SM)
        .style(flat_button_style);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(menu_button)
        .push(brand)
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(settings_button)
        .push(theme_button);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..Default::default()
        })
        .into()
}

/// Renders the dropdown module menu. Only called while the menu is open.
pub fn menu_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);

    for module in &ctx.course.modules {
        let mut args = FluentArgs::new();
        args.set("number", module.number);
        let mut label = format!(
            "{} {}",
            ctx.i18n.tr_with_args("nav-module-prefix", &args),
            module.title
        );
        if ctx.progress.is_completed(module.number) {
            label.push_str(" \u{2713}");
        }
        column = column.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::GoModule(module.number))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(flat_button_style),
        );
    }

    Container::new(column)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.base.color,
            )),
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

fn flat_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(
            iced::Color {
                a: 0.4,
                ..theme.extended_palette().background.strong.color
            },
        )),
        _ => None,
    };
    button::Style {
        background,
        text_color: theme.palette().text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
