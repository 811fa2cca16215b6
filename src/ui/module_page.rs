// SPDX-License-Identifier: MPL-2.0
//! A single module page.
//!
//! Renders the module body (sections, exercises, prompt blocks),
//! the completion button, previous/next navigation and the comment
//! section. The page tracks its own scroll fraction so the reading
//! progress bar can blend it into the course-wide percentage.

use crate::config::defaults::COPIED_BADGE_SECS;
use crate::course::{Course, Module, PromptBlock, Section};
use crate::i18n::I18n;
use crate::store::{PageEngagement, ProgressStore};
use crate::ui::comments;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::exercises;
use fluent_bundle::FluentArgs;
use iced::widget::scrollable::{self, RelativeOffset, Viewport};
use iced::widget::{button, container, text, Column, Container, Id, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Identifier of the page scrollable, used for anchor jumps.
pub fn scroll_id() -> Id {
    Id::new("module-page-scroll")
}

#[derive(Debug, Clone)]
pub struct State {
    module_number: u32,
    scroll_fraction: f32,
    /// Indices of currently open collapsible sections.
    expanded: HashSet<usize>,
    exercises: exercises::State,
    comments: comments::State,
    /// Prompt block showing its transient "copied" badge.
    copied_prompt: Option<(usize, Instant)>,
}

impl State {
    /// Fresh page state. Exercises reset on every visit.
    pub fn for_module(module: &Module) -> Self {
        Self {
            module_number: module.number,
            scroll_fraction: 0.0,
            expanded: HashSet::new(),
            exercises: exercises::State::for_module(module),
            comments: comments::State::new(),
            copied_prompt: None,
        }
    }

    pub fn module_number(&self) -> u32 {
        self.module_number
    }

    pub fn scroll_fraction(&self) -> f32 {
        self.scroll_fraction
    }

    /// Shows the "copied" badge on a prompt block.
    pub fn mark_copied(&mut self, prompt: usize) {
        self.copied_prompt = Some((prompt, Instant::now()));
    }

    /// Clears the badge once its display time is up.
    pub fn tick_copied(&mut self) {
        if let Some((_, since)) = self.copied_prompt {
            if since.elapsed() >= Duration::from_secs(COPIED_BADGE_SECS) {
                self.copied_prompt = None;
            }
        }
    }

    /// Whether the tick subscription needs to keep running for this page.
    pub fn has_copied_badge(&self) -> bool {
        self.copied_prompt.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(Viewport),
    ToggleSection(usize),
    JumpToSection(usize),
    Exercise(exercises::Message),
    Comments(comments::Message),
    CopyPrompt(usize),
    MarkComplete,
    GoModule(u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Scroll the page to the given relative offset.
    SnapTo(RelativeOffset),
    /// Copy a prompt block's text to the clipboard.
    CopyPrompt { prompt: usize, content: String },
    MarkComplete,
    GoModule(u32),
    AddComment { author: String, content: String },
    EmptyComment,
    ToggleLike,
}

pub fn update(state: &mut State, module: &Module, message: Message) -> Event {
    match message {
        Message::Scrolled(viewport) => {
            state.scroll_fraction = viewport.relative_offset().y;
            Event::None
        }
        Message::ToggleSection(index) => {
            if !state.expanded.remove(&index) {
                state.expanded.insert(index);
            }
            Event::None
        }
        Message::JumpToSection(index) => {
            let count = module.sections.len().max(1);
            Event::SnapTo(RelativeOffset {
                x: 0.0,
                y: index as f32 / count as f32,
            })
        }
        Message::Exercise(message) => {
            exercises::update(&mut state.exercises, module, message);
            Event::None
        }
        Message::Comments(message) => match comments::update(&mut state.comments, message) {
            comments::Event::None => Event::None,
            comments::Event::Submit { author, content } => Event::AddComment { author, content },
            comments::Event::RejectedEmpty => Event::EmptyComment,
            comments::Event::ToggleLike => Event::ToggleLike,
        },
        Message::CopyPrompt(prompt) => match module.prompts.get(prompt) {
            Some(block) => Event::CopyPrompt {
                prompt,
                content: block.text.clone(),
            },
            None => Event::None,
        },
        Message::MarkComplete => Event::MarkComplete,
        Message::GoModule(number) => Event::GoModule(number),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub course: &'a Course,
    pub module: &'a Module,
    pub progress: &'a ProgressStore,
    pub engagement: &'a PageEngagement,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut args = FluentArgs::new();
    args.set("number", ctx.module.number);
    let kicker = Text::new(ctx.i18n.tr_with_args("module-number-kicker", &args))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let mut content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(kicker)
        .push(Text::new(ctx.module.title.as_str()).size(typography::TITLE_LG))
        .push(Text::new(ctx.module.summary.as_str()).size(typography::BODY));

    if ctx.module.sections.len() > 1 {
        content = content.push(toc_view(ctx));
    }

    for (index, section) in ctx.module.sections.iter().enumerate() {
        content = content.push(section_view(ctx, index, section));
    }

    if ctx.module.has_exercises() {
        content = content
            .push(Text::new(ctx.i18n.tr("module-exercises-title")).size(typography::TITLE_MD))
            .push(
                exercises::view(&exercises::ViewContext {
                    i18n: ctx.i18n,
                    state: &ctx.state.exercises,
                    module: ctx.module,
                })
                .map(Message::Exercise),
            );
    }

    for (index, prompt) in ctx.module.prompts.iter().enumerate() {
        content = content.push(prompt_view(ctx, index, prompt));
    }

    content = content
        .push(complete_button(ctx))
        .push(prev_next_row(ctx))
        .push(
            comments::view(&comments::ViewContext {
                i18n: ctx.i18n,
                state: &ctx.state.comments,
                engagement: ctx.engagement,
            })
            .map(Message::Comments),
        );

    scrollable::Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::LG),
    )
    .id(scroll_id())
    .on_scroll(Message::Scrolled)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn toc_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("module-contents-title")).size(typography::CAPTION));

    for (index, section) in ctx.module.sections.iter().enumerate() {
        column = column.push(
            button(
                Text::new(section.title.as_str())
                    .size(typography::BODY)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::PRIMARY_500),
                    }),
            )
            .on_press(Message::JumpToSection(index))
            .padding(spacing::XXS)
            .style(|theme: &Theme, _status| button::Style {
                background: None,
                text_color: theme.palette().text,
                ..Default::default()
            }),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn section_view<'a>(ctx: &ViewContext<'a>, index: usize, section: &'a Section) -> Element<'a, Message> {
    if !section.collapsible {
        return Column::new()
            .spacing(spacing::SM)
            .push(Text::new(section.title.as_str()).size(typography::TITLE_MD))
            .push(Text::new(section.body.as_str()).size(typography::BODY))
            .into();
    }

    let expanded = ctx.state.expanded.contains(&index);
    let chevron = if expanded { "\u{25BE}" } else { "\u{25B8}" };

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(chevron).size(typography::BODY))
            .push(Text::new(section.title.as_str()).size(typography::TITLE_MD)),
    )
    .on_press(Message::ToggleSection(index))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(|theme: &Theme, _status| button::Style {
        background: None,
        text_color: theme.palette().text,
        ..Default::default()
    });

    let mut column = Column::new().spacing(spacing::SM).push(header);
    if expanded {
        column = column.push(
            Container::new(Text::new(section.body.as_str()).size(typography::BODY))
                .padding([0.0, spacing::MD]),
        );
    }
    column.into()
}

fn prompt_view<'a>(ctx: &ViewContext<'a>, index: usize, prompt: &'a PromptBlock) -> Element<'a, Message> {
    let copied = matches!(ctx.state.copied_prompt, Some((p, _)) if p == index);
    let copy_label = if copied {
        ctx.i18n.tr("copy-done")
    } else {
        ctx.i18n.tr("copy-button")
    };

    let copy_button = button(Text::new(copy_label).size(typography::CAPTION))
        .on_press(Message::CopyPrompt(index))
        .padding(spacing::XS);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(prompt.title.as_str()).size(typography::TITLE_SM))
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(copy_button);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(Text::new(prompt.text.as_str()).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(|theme: &Theme| container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            color: palette::PRIMARY_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    })
    .into()
}

fn complete_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let completed = ctx.progress.is_completed(ctx.module.number);
    let label = if completed {
        ctx.i18n.tr("module-completed-label")
    } else {
        ctx.i18n.tr("module-complete-button")
    };

    let mut complete = button(Text::new(label).size(typography::BODY))
        .padding(spacing::SM)
        .style(move |theme: &Theme, _status| button::Style {
            background: Some(iced::Background::Color(if completed {
                theme.extended_palette().background.weak.color
            } else {
                palette::PRIMARY_500
            })),
            text_color: if completed {
                palette::SUCCESS_500
            } else {
                palette::WHITE
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });
    // Completion is permanent, so the button goes inert once pressed.
    if !completed {
        complete = complete.on_press(Message::MarkComplete);
    }

    complete.into()
}

fn prev_next_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);

    if let Some(previous) = ctx.course.previous_module(ctx.module.number) {
        row = row.push(
            button(
                Text::new(format!("\u{2190} {}", ctx.i18n.tr("module-previous")))
                    .size(typography::BODY),
            )
            .on_press(Message::GoModule(previous))
            .padding(spacing::SM),
        );
    }
    row = row.push(Container::new(Text::new("")).width(Length::Fill));
    if let Some(next) = ctx.course.next_module(ctx.module.number) {
        row = row.push(
            button(
                Text::new(format!("{} \u{2192}", ctx.i18n.tr("module-next")))
                    .size(typography::BODY),
            )
            .on_press(Message::GoModule(next))
            .padding(spacing::SM),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{FillBlank, Quiz, QuizOption};

    fn sample_module() -> Module {
        Module {
            number: 2,
            title: "Discounted cash flow".into(),
            summary: "Intrinsic valuation".into(),
            sections: vec![
                Section {
                    title: "Forecasting".into(),
                    body: "Project free cash flows.".into(),
                    collapsible: true,
                },
                Section {
                    title: "Terminal value".into(),
                    body: "Gordon growth or exit multiple.".into(),
                    collapsible: false,
                },
            ],
            quizzes: vec![Quiz {
                prompt: "q".into(),
                options: vec![QuizOption {
                    value: "a".into(),
                    label: "A".into(),
                }],
                correct: "a".into(),
                correct_feedback: None,
                incorrect_feedback: None,
                explanation: None,
            }],
            fill_blanks: vec![FillBlank {
                prompt: "f".into(),
                expected: 1.0,
                tolerance: 0.0,
                placeholder: None,
            }],
            dilemmas: Vec::new(),
            prompts: vec![PromptBlock {
                title: "Prompt".into(),
                text: "Explain WACC to a founder.".into(),
            }],
        }
    }

    #[test]
    fn toggle_section_flips_expansion() {
        let module = sample_module();
        let mut state = State::for_module(&module);
        update(&mut state, &module, Message::ToggleSection(0));
        assert!(state.expanded.contains(&0));
        update(&mut state, &module, Message::ToggleSection(0));
        assert!(!state.expanded.contains(&0));
    }

    #[test]
    fn jump_to_section_maps_index_to_offset() {
        let module = sample_module();
        let mut state = State::for_module(&module);
        let event = update(&mut state, &module, Message::JumpToSection(1));
        match event {
            Event::SnapTo(offset) => assert!((offset.y - 0.5).abs() < f32::EPSILON),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn copy_prompt_carries_the_block_text() {
        let module = sample_module();
        let mut state = State::for_module(&module);
        let event = update(&mut state, &module, Message::CopyPrompt(0));
        match event {
            Event::CopyPrompt { prompt, content } => {
                assert_eq!(prompt, 0);
                assert_eq!(content, "Explain WACC to a founder.");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn copy_prompt_out_of_range_is_ignored() {
        let module = sample_module();
        let mut state = State::for_module(&module);
        let event = update(&mut state, &module, Message::CopyPrompt(5));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn copied_badge_expires() {
        let module = sample_module();
        let mut state = State::for_module(&module);
        state.mark_copied(0);
        assert!(state.has_copied_badge());

        // Not yet expired
        state.tick_copied();
        assert!(state.has_copied_badge());

        state.copied_prompt = Some((0, Instant::now() - Duration::from_secs(COPIED_BADGE_SECS)));
        state.tick_copied();
        assert!(!state.has_copied_badge());
    }

    #[test]
    fn empty_comment_bubbles_up() {
        let module = sample_module();
        let mut state = State::for_module(&module);
        let event = update(
            &mut state,
            &module,
            Message::Comments(comments::Message::Submit),
        );
        assert!(matches!(event, Event::EmptyComment));
    }
}
