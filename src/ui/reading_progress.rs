// SPDX-License-Identifier: MPL-2.0
//! Course-wide reading progress bar.
//!
//! The thin bar under the navbar fills as the reader advances through
//! the whole course. Each module owns an equal slice of the bar; the
//! scroll position within the current module fills its slice.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::progress_bar;
use iced::{Element, Length, Theme};

/// Percentage of the course read, given the open module and how far it
/// has been scrolled (0.0 to 1.0).
///
/// Modules before the current one count as fully read. The result is
/// clamped to 100 so rounding in the scroll fraction can never overshoot.
pub fn course_percentage(module: u32, total_modules: u32, scroll_fraction: f32) -> f32 {
    if total_modules == 0 || module == 0 {
        return 0.0;
    }
    // Single division keeps the endpoint exact: a fully scrolled last
    // module lands on 100.0 rather than just below it.
    let position = (module - 1) as f32 + scroll_fraction.clamp(0.0, 1.0);
    (position / total_modules as f32 * 100.0).min(100.0)
}

pub fn view<'a, Message: 'a>(percentage: f32) -> Element<'a, Message> {
    progress_bar(0.0..=100.0, percentage)
        .girth(sizing::PROGRESS_BAR_HEIGHT)
        .length(Length::Fill)
        .style(|theme: &Theme| progress_bar::Style {
            background: iced::Background::Color(theme.extended_palette().background.weak.color),
            bar: iced::Background::Color(palette::PRIMARY_500),
            border: iced::Border::default(),
        })
        .into()
}
