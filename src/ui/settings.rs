// SPDX-License-Identifier: MPL-2.0
//! Settings screen.
//!
//! Currently hosts the theme preference. The chosen mode is written to
//! the configuration file by the parent, so it survives restarts.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{radio, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    ThemeModeSelected(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SetThemeMode(ThemeMode),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::ThemeModeSelected(mode) => Event::SetThemeMode(mode),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);
    let theme_label = Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::TITLE_SM);

    let options = Column::new()
        .spacing(spacing::SM)
        .push(radio(
            ctx.i18n.tr("settings-theme-light"),
            ThemeMode::Light,
            Some(ctx.theme_mode),
            Message::ThemeModeSelected,
        ))
        .push(radio(
            ctx.i18n.tr("settings-theme-dark"),
            ThemeMode::Dark,
            Some(ctx.theme_mode),
            Message::ThemeModeSelected,
        ))
        .push(radio(
            ctx.i18n.tr("settings-theme-system"),
            ThemeMode::System,
            Some(ctx.theme_mode),
            Message::ThemeModeSelected,
        ));

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(theme_label)
        .push(options);

    Container::new(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}
