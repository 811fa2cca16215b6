// SPDX-License-Identifier: MPL-2.0
//! Per-page comment form, comment list and like button.
//!
//! The component owns only the form inputs. Stored comments and like
//! counts live in the engagement store; the parent passes the current
//! page snapshot in for rendering and applies store mutations when the
//! component emits an event.

use crate::i18n::I18n;
use crate::store::{Comment, PageEngagement};
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use chrono::{DateTime, Utc};
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, text, text_input, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};

/// Comment form inputs for one page.
#[derive(Debug, Clone, Default)]
pub struct State {
    author_input: String,
    content_input: String,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    AuthorChanged(String),
    ContentChanged(String),
    Submit,
    ToggleLike,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A non-empty comment was submitted.
    Submit { author: String, content: String },
    /// Submission was attempted with empty content.
    RejectedEmpty,
    ToggleLike,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::AuthorChanged(value) => {
            state.author_input = value;
            Event::None
        }
        Message::ContentChanged(value) => {
            state.content_input = value;
            Event::None
        }
        Message::Submit => {
            let content = state.content_input.trim().to_string();
            if content.is_empty() {
                return Event::RejectedEmpty;
            }
            let author = state.author_input.trim().to_string();
            state.content_input.clear();
            Event::Submit { author, content }
        }
        Message::ToggleLike => Event::ToggleLike,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub engagement: &'a PageEngagement,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let like_glyph = if ctx.engagement.liked {
        "\u{2665}"
    } else {
        "\u{2661}"
    };
    let like_button = button(
        Row::new()
            .spacing(spacing::XS)
            .push(Text::new(like_glyph).size(typography::BODY).style(
                |_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                },
            ))
            .push(Text::new(ctx.engagement.likes.to_string()).size(typography::BODY)),
    )
    .on_press(Message::ToggleLike)
    .padding(spacing::SM);

    let title = Text::new(ctx.i18n.tr("comment-section-title")).size(typography::TITLE_MD);

    let author_input = text_input(
        &ctx.i18n.tr("comment-author-placeholder"),
        &ctx.state.author_input,
    )
    .on_input(Message::AuthorChanged)
    .padding(spacing::SM);

    let content_input = text_input(
        &ctx.i18n.tr("comment-content-placeholder"),
        &ctx.state.content_input,
    )
    .on_input(Message::ContentChanged)
    .on_submit(Message::Submit)
    .padding(spacing::SM);

    let submit_button = button(Text::new(ctx.i18n.tr("comment-submit")).size(typography::BODY))
        .on_press(Message::Submit)
        .padding(spacing::SM);

    let form = Column::new()
        .spacing(spacing::SM)
        .push(author_input)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(content_input)
                .push(submit_button),
        );

    let mut list = Column::new().spacing(spacing::SM);
    let comments = sorted_newest_first(&ctx.engagement.comments);
    if comments.is_empty() {
        list = list.push(
            Text::new(ctx.i18n.tr("comment-empty-state"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }),
        );
    } else {
        for comment in comments {
            list = list.push(comment_card(ctx, comment));
        }
    }

    Column::new()
        .spacing(spacing::MD)
        .push(Row::new().spacing(spacing::MD).push(title).push(like_button))
        .push(form)
        .push(list)
        .into()
}

fn comment_card<'a>(ctx: &ViewContext<'a>, comment: &'a Comment) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(comment.author.as_str())
                .size(typography::BODY)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                }),
        )
        .push(
            Text::new(relative_date(ctx.i18n, &comment.date, Utc::now()))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }),
        );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(Text::new(comment.content.as_str()).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(|theme: &Theme| container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

fn sorted_newest_first(comments: &[Comment]) -> Vec<&Comment> {
    let mut sorted: Vec<&Comment> = comments.iter().collect();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted
}

/// Formats a stored RFC 3339 timestamp as a relative age.
///
/// Falls back to the plain calendar date past a week, and to the raw
/// string when the timestamp does not parse.
fn relative_date(i18n: &I18n, date: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(date) else {
        return date.to_string();
    };
    let seconds = (now - parsed.with_timezone(&Utc)).num_seconds().max(0);

    if seconds < 60 {
        i18n.tr("comment-date-just-now")
    } else if seconds < 3_600 {
        let mut args = FluentArgs::new();
        args.set("count", seconds / 60);
        i18n.tr_with_args("comment-date-minutes-ago", &args)
    } else if seconds < 86_400 {
        let mut args = FluentArgs::new();
        args.set("count", seconds / 3_600);
        i18n.tr_with_args("comment-date-hours-ago", &args)
    } else if seconds < 604_800 {
        let mut args = FluentArgs::new();
        args.set("count", seconds / 86_400);
        i18n.tr_with_args("comment-date-days-ago", &args)
    } else {
        parsed.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn submit_with_content_emits_event_and_clears_input() {
        let mut state = State::new();
        update(&mut state, Message::AuthorChanged("Ada".into()));
        update(&mut state, Message::ContentChanged("  Great module  ".into()));

        let event = update(&mut state, Message::Submit);
        match event {
            Event::Submit { author, content } => {
                assert_eq!(author, "Ada");
                assert_eq!(content, "Great module");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(state.content_input.is_empty());
        // The author field is kept for the next comment.
        assert_eq!(state.author_input, "Ada");
    }

    #[test]
    fn submit_with_blank_content_is_rejected() {
        let mut state = State::new();
        update(&mut state, Message::ContentChanged("   ".into()));
        let event = update(&mut state, Message::Submit);
        assert!(matches!(event, Event::RejectedEmpty));
    }

    #[test]
    fn comments_render_newest_first() {
        let comments = vec![
            Comment {
                id: 1,
                author: "A".into(),
                content: "first".into(),
                date: "2026-01-01T00:00:00.000Z".into(),
            },
            Comment {
                id: 2,
                author: "B".into(),
                content: "second".into(),
                date: "2026-01-02T00:00:00.000Z".into(),
            },
        ];
        let sorted = sorted_newest_first(&comments);
        assert_eq!(sorted[0].content, "second");
        assert_eq!(sorted[1].content, "first");
    }

    #[test]
    fn relative_date_buckets() {
        let i18n = I18n::default();
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();

        let just_now = relative_date(&i18n, "2026-08-29T11:59:30Z", now);
        assert_eq!(just_now, i18n.tr("comment-date-just-now"));

        let minutes = relative_date(&i18n, "2026-08-29T11:15:00Z", now);
        assert!(minutes.contains("45"));

        let hours = relative_date(&i18n, "2026-08-29T06:00:00Z", now);
        assert!(hours.contains('6'));

        let days = relative_date(&i18n, "2026-08-26T12:00:00Z", now);
        assert!(days.contains('3'));

        let old = relative_date(&i18n, "2026-01-05T12:00:00Z", now);
        assert_eq!(old, "2026-01-05");
    }

    #[test]
    fn unparseable_date_is_passed_through() {
        let i18n = I18n::default();
        let now = Utc::now();
        assert_eq!(relative_date(&i18n, "yesterday", now), "yesterday");
    }
}
