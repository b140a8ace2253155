// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::Deserialize;

/// Colors the page and overlay views draw with.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_nav: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,

    pub placeholder_background: Color,
    pub placeholder_text: Color,

    /// Lightbox backdrop and controls are always dark, whatever the mode.
    pub overlay_background: Color,
    pub overlay_control: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_nav: Color {
                a: 0.95,
                ..palette::WHITE
            },

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            placeholder_background: palette::GRAY_200,
            placeholder_text: palette::GRAY_700,

            overlay_background: Color {
                a: opacity::OVERLAY_BACKDROP,
                ..palette::BLACK
            },
            overlay_control: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_nav: Color {
                a: 0.95,
                ..palette::GRAY_900
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            placeholder_background: palette::GRAY_700,
            placeholder_text: palette::GRAY_100,

            overlay_background: Color {
                a: opacity::OVERLAY_BACKDROP,
                ..palette::BLACK
            },
            overlay_control: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            overlay_text: palette::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Resolved theme: the mode plus the colors it selects.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    /// Resolves `mode`; `System` queries the OS once here.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Built-in iced theme matching the resolved mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn overlay_stays_dark_in_both_modes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.overlay_background.r < 0.1);
            assert!(scheme.overlay_background.a > 0.8);
        }
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), Theme::Dark);
        assert!(AppTheme::new(ThemeMode::Dark).is_dark());
        // System mode depends on the host; it only has to resolve.
        let _ = AppTheme::new(ThemeMode::System);
    }
}
