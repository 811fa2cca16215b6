// SPDX-License-Identifier: MPL-2.0
//! Interactive exercise widgets embedded in module pages.
//!
//! Three kinds of exercises exist. Quizzes evaluate a selection the
//! moment an option is clicked. Fill-in-the-blank exercises accept a
//! numeric answer and are checked on demand. Dilemmas have no right
//! answer; any choice reveals a discussion panel.
//!
//! Exercise answers are deliberately not persisted. Reopening a module
//! presents its exercises fresh.

use crate::course::{Dilemma, FillBlank, Module, Quiz};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{button, container, text, text_input, Column, Container, Row, Text};
use iced::{Border, Color, Element, Length, Theme};

/// Per-module exercise answers, indexed in catalog order.
#[derive(Debug, Clone, Default)]
pub struct State {
    quizzes: Vec<QuizState>,
    fill_blanks: Vec<FillBlankState>,
    dilemmas: Vec<DilemmaState>,
}

#[derive(Debug, Clone, Default)]
struct QuizState {
    /// Index of the chosen option. Choosing evaluates immediately.
    selected: Option<usize>,
}

#[derive(Debug, Clone, Default)]
struct FillBlankState {
    input: String,
    /// `None` until a check produced a verdict.
    verdict: Option<bool>,
}

#[derive(Debug, Clone, Default)]
struct DilemmaState {
    chosen: Option<usize>,
}

impl State {
    /// Creates fresh answer slots for every exercise in the module.
    pub fn for_module(module: &Module) -> Self {
        Self {
            quizzes: vec![QuizState::default(); module.quizzes.len()],
            fill_blanks: vec![FillBlankState::default(); module.fill_blanks.len()],
            dilemmas: vec![DilemmaState::default(); module.dilemmas.len()],
        }
    }

    pub fn quiz_selection(&self, quiz: usize) -> Option<usize> {
        self.quizzes.get(quiz).and_then(|q| q.selected)
    }

    pub fn fill_blank_verdict(&self, index: usize) -> Option<bool> {
        self.fill_blanks.get(index).and_then(|f| f.verdict)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    QuizOptionSelected { quiz: usize, option: usize },
    FillBlankInput { index: usize, value: String },
    FillBlankCheck { index: usize },
    DilemmaChosen { dilemma: usize, option: usize },
}

pub fn update(state: &mut State, module: &Module, message: Message) {
    match message {
        Message::QuizOptionSelected { quiz, option } => {
            if let Some(slot) = state.quizzes.get_mut(quiz) {
                slot.selected = Some(option);
            }
        }
        Message::FillBlankInput { index, value } => {
            if let Some(slot) = state.fill_blanks.get_mut(index) {
                slot.input = value;
                slot.verdict = None;
            }
        }
        Message::FillBlankCheck { index } => {
            if let (Some(slot), Some(blank)) = (
                state.fill_blanks.get_mut(index),
                module.fill_blanks.get(index),
            ) {
                slot.verdict = evaluate_fill_blank(&slot.input, blank.expected, blank.tolerance);
            }
        }
        Message::DilemmaChosen { dilemma, option } => {
            if let Some(slot) = state.dilemmas.get_mut(dilemma) {
                slot.chosen = Some(option);
            }
        }
    }
}

/// True when the user picked the option whose value matches the key.
pub fn quiz_is_correct(quiz: &Quiz, selected: usize) -> bool {
    quiz.options
        .get(selected)
        .is_some_and(|option| option.value == quiz.correct)
}

/// Strips everything except digits, minus signs and decimal points.
fn sanitize_numeric(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect()
}

/// Evaluates a fill-in-the-blank answer.
///
/// Returns `None` when the sanitized input does not parse as a number,
/// in which case the exercise stays unanswered rather than flagging an
/// error.
pub fn evaluate_fill_blank(input: &str, expected: f64, tolerance: f64) -> Option<bool> {
    let sanitized = sanitize_numeric(input);
    let value: f64 = sanitized.parse().ok()?;
    Some((value - expected).abs() <= tolerance)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub module: &'a Module,
}

/// Renders every exercise of the module in catalog order.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::LG);

    for (index, quiz) in ctx.module.quizzes.iter().enumerate() {
        column = column.push(quiz_view(ctx, index, quiz));
    }
    for (index, blank) in ctx.module.fill_blanks.iter().enumerate() {
        column = column.push(fill_blank_view(ctx, index, blank));
    }
    for (index, dilemma) in ctx.module.dilemmas.iter().enumerate() {
        column = column.push(dilemma_view(ctx, index, dilemma));
    }

    column.into()
}

fn quiz_view<'a>(ctx: &ViewContext<'a>, index: usize, quiz: &'a Quiz) -> Element<'a, Message> {
    let selected = ctx.state.quiz_selection(index);
    let answered_correctly = selected.map(|s| quiz_is_correct(quiz, s));

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(quiz.prompt.as_str()).size(typography::TITLE_SM));

    for (option_index, option) in quiz.options.iter().enumerate() {
        let is_selected = selected == Some(option_index);
        let is_correct_option = option.value == quiz.correct;
        // Once answered, the correct option is highlighted regardless of
        // which one was chosen.
        let accent = match (selected, is_selected, is_correct_option) {
            (Some(_), _, true) => Some(palette::SUCCESS_500),
            (Some(_), true, false) => Some(palette::ERROR_500),
            _ => None,
        };

        let label = Text::new(option.label.as_str()).size(typography::BODY);
        // Re-selection stays possible after answering; picking a new
        // option replaces the verdict.
        let option_button = button(label)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |theme: &Theme, _status| answer_button_style(theme, accent, is_selected))
            .on_press(Message::QuizOptionSelected {
                quiz: index,
                option: option_index,
            });
        column = column.push(option_button);
    }

    if let Some(correct) = answered_correctly {
        column = column.push(quiz_feedback(ctx, quiz, correct));
    }

    exercise_card(column.into())
}

fn quiz_feedback<'a>(ctx: &ViewContext<'a>, quiz: &'a Quiz, correct: bool) -> Element<'a, Message> {
    let (color, mut body) = if correct {
        (
            palette::SUCCESS_500,
            quiz.correct_feedback
                .clone()
                .unwrap_or_else(|| ctx.i18n.tr("quiz-correct")),
        )
    } else {
        (
            palette::ERROR_500,
            quiz.incorrect_feedback
                .clone()
                .unwrap_or_else(|| ctx.i18n.tr("quiz-incorrect")),
        )
    };
    if !correct {
        if let Some(explanation) = &quiz.explanation {
            body.push(' ');
            body.push_str(explanation);
        }
    }

    Text::new(body)
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
        .into()
}

fn fill_blank_view<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    blank: &'a FillBlank,
) -> Element<'a, Message> {
    let slot = &ctx.state.fill_blanks[index];

    let input = text_input(
        blank.placeholder.as_deref().unwrap_or(""),
        slot.input.as_str(),
    )
    .on_input(move |value| Message::FillBlankInput { index, value })
    .on_submit(Message::FillBlankCheck { index })
    .padding(spacing::SM)
    .width(Length::Fixed(160.0));

    let check_button = button(Text::new(ctx.i18n.tr("fill-blank-check")).size(typography::BODY))
        .on_press(Message::FillBlankCheck { index })
        .padding(spacing::SM);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(blank.prompt.as_str()).size(typography::TITLE_SM))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(input)
                .push(check_button),
        );

    if let Some(correct) = slot.verdict {
        let (key, color) = if correct {
            ("fill-blank-correct", palette::SUCCESS_500)
        } else {
            ("fill-blank-incorrect", palette::ERROR_500)
        };
        column = column.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style { color: Some(color) }),
        );
    }

    exercise_card(column.into())
}

fn dilemma_view<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    dilemma: &'a Dilemma,
) -> Element<'a, Message> {
    let chosen = ctx.state.dilemmas[index].chosen;

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(dilemma.prompt.as_str()).size(typography::TITLE_SM));

    for (option_index, option) in dilemma.options.iter().enumerate() {
        let is_selected = chosen == Some(option_index);
        let option_button = button(Text::new(option.as_str()).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |theme: &Theme, _status| answer_button_style(theme, None, is_selected))
            .on_press(Message::DilemmaChosen {
                dilemma: index,
                option: option_index,
            });
        column = column.push(option_button);
    }

    if chosen.is_some() {
        column = column.push(
            Container::new(Text::new(dilemma.reveal.as_str()).size(typography::BODY))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(|theme: &Theme| {
                    reveal_panel_style(theme)
                }),
        );
    }

    exercise_card(column.into())
}

fn exercise_card(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
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

fn answer_button_style(
    theme: &Theme,
    accent: Option<Color>,
    is_selected: bool,
) -> button::Style {
    let base = theme.extended_palette().background.base;
    let border_color = accent.unwrap_or_else(|| {
        if is_selected {
            palette::PRIMARY_500
        } else {
            theme.extended_palette().background.strong.color
        }
    });

    button::Style {
        background: Some(iced::Background::Color(base.color)),
        text_color: theme.palette().text,
        border: Border {
            color: border_color,
            width: if accent.is_some() || is_selected {
                2.0
            } else {
                1.0
            },
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

fn reveal_panel_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            color: palette::INFO_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
