// SPDX-License-Identifier: MPL-2.0
//! Course overview screen.
//!
//! Shows the overall completion percentage and one card per module.
//! Completed modules carry a badge; clicking a card opens the module.

use crate::course::Course;
use crate::i18n::I18n;
use crate::store::ProgressStore;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use fluent_bundle::FluentArgs;
use iced::widget::{button, progress_bar, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    OpenModule(u32),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub course: &'a Course,
    pub progress: &'a ProgressStore,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let total = ctx.course.module_count();
    let percentage = ctx.progress.completion_percentage(total);

    let title = Text::new(ctx.course.title.as_str()).size(typography::TITLE_LG);

    let mut args = FluentArgs::new();
    args.set("percent", percentage);
    let progress_label =
        Text::new(ctx.i18n.tr_with_args("overview-progress-label", &args)).size(typography::BODY);
    let progress = progress_bar(0.0..=100.0, f32::from(percentage));

    let mut cards = Column::new().spacing(spacing::MD);
    for module in &ctx.course.modules {
        cards = cards.push(module_card(ctx, module));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(progress_label)
        .push(progress)
        .push(cards);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn module_card<'a>(
    ctx: &ViewContext<'a>,
    module: &'a crate::course::Module,
) -> Element<'a, Message> {
    let completed = ctx.progress.is_completed(module.number);

    let mut args = FluentArgs::new();
    args.set("number", module.number);
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr_with_args("overview-module-number", &args))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }),
        )
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(if completed {
            Text::new(ctx.i18n.tr("overview-completed-badge"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::SUCCESS_500),
                })
        } else {
            Text::new("")
        });

    let body = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(Text::new(module.title.as_str()).size(typography::TITLE_MD))
        .push(Text::new(module.summary.as_str()).size(typography::BODY));

    button(body)
        .on_press(Message::OpenModule(module.number))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(move |theme: &Theme, status| card_style(theme, status, completed))
        .into()
}

fn card_style(theme: &Theme, status: button::Status, completed: bool) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    let border_color = if completed {
        palette::SUCCESS_500
    } else if hovered {
        palette::PRIMARY_500
    } else {
        theme.extended_palette().background.strong.color
    };

    button::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        text_color: theme.palette().text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
