// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the current notification.
//!
//! The toast is a small card with a severity-colored accent and a
//! dismiss button. During the leaving phase the whole card is faded.

use super::manager::Message;
use super::notification::{Notification, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders the current toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();
        let fade = if notification.is_leaving() {
            opacity::TOAST_LEAVING
        } else {
            1.0
        };

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let mut args = FluentArgs::new();
            for (key, value) in notification.message_args() {
                args.set(key.as_str(), value.as_str());
            }
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let icon_widget = Text::new(Self::severity_glyph(severity))
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(accent_color, fade)),
            });

        let message_widget =
            Text::new(message_text)
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, fade)),
                });

        let dismiss_button = button(Text::new("\u{2715}").size(typography::CAPTION))
            .on_press(Message::Dismiss)
            .padding(spacing::XXS)
            .style(|theme: &Theme, _status| button::Style {
                background: None,
                text_color: theme.palette().text,
                ..Default::default()
            });

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, fade))
            .into()
    }

    /// Renders the toast overlay anchored to the bottom-right corner.
    pub fn view_overlay<'a>(
        notification: Option<&'a Notification>,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        match notification {
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
            Some(notification) => Container::new(Self::view(notification, i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into(),
        }
    }

    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "\u{2713}",
            Severity::Info => "\u{2139}",
            Severity::Error => "\u{26A0}",
        }
    }
}

fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color, fade: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, fade))),
        border: iced::Border {
            color: faded(accent_color, fade),
            width: 2.0,
            radius: radius::MD.into(),
        },
        text_color: Some(faded(theme.palette().text, fade)),
        ..Default::default()
    }
}
