// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.
//!
//! Theme resolution follows a strict priority order: an explicit stored
//! preference (`Light`/`Dark`) always wins; `System` defers to the OS
//! preference on every lookup, so OS-level changes keep taking effect live
//! until the user toggles manually for the first time.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_tertiary: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Detects the OS theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
            Self::dark()
        } else {
            // Light mode, unspecified, or detection error all resolve light
            Self::light()
        }
    }
}

/// Stored theme preference.
///
/// `System` is the state before any manual toggle: the OS preference is
/// consulted on every resolution, so it keeps updating live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual OS theme; light on failure.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Returns the explicit mode a manual toggle should switch to.
    ///
    /// Toggling always produces an explicit `Light`/`Dark` preference, never
    /// back to `System`: once the user has chosen, OS changes stop applying.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

impl ColorScheme {
    fn iced_palette(&self) -> iced::theme::Palette {
        iced::theme::Palette {
            background: self.surface_primary,
            text: self.text_primary,
            primary: self.brand_primary,
            success: self.success,
            warning: self.warning,
            danger: self.error,
        }
    }
}

/// Builds the iced theme for a preference, resolving `System` against
/// the OS at call time.
#[must_use]
pub fn iced_theme(mode: ThemeMode) -> iced::Theme {
    let (name, scheme) = match mode {
        ThemeMode::Light => ("Coursedeck Light", ColorScheme::light()),
        ThemeMode::Dark => ("Coursedeck Dark", ColorScheme::dark()),
        ThemeMode::System => {
            if mode.is_dark() {
                ("Coursedeck Dark", ColorScheme::dark())
            } else {
                ("Coursedeck Light", ColorScheme::light())
            }
        }
    };
    iced::Theme::custom(name.to_string(), scheme.iced_palette())
}
