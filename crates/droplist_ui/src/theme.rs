//! Color themes for the dropdown
//!
//! Provides dark and light palettes. The dropdown never reads a theme from
//! ambient state: callers pass one to [`DropdownStyle::resolve`](crate::DropdownStyle::resolve).

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Which palette to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }
}

/// A complete color theme for the dropdown
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // ==========================================================================
    // Anchor
    // ==========================================================================
    /// Anchor background
    pub button_bg: Color,

    /// Anchor background on hover or while open
    pub button_hover: Color,

    /// Anchor background when the dropdown is disabled
    pub button_disabled: Color,

    // ==========================================================================
    // Borders
    // ==========================================================================
    /// Default border color
    pub border: Color,

    /// Border color when the anchor holds focus
    pub border_focused: Color,

    // ==========================================================================
    // Text
    // ==========================================================================
    /// Primary text color
    pub text_primary: Color,

    /// Placeholder text color
    pub text_placeholder: Color,

    /// Text color when disabled
    pub text_disabled: Color,

    // ==========================================================================
    // Overlay
    // ==========================================================================
    /// Overlay surface background
    pub popup_bg: Color,

    /// Highlighted row background
    pub option_hover: Color,

    /// Background of the currently selected row
    pub accent_subtle: Color,

    /// Accent color (selection marker)
    pub accent: Color,

    /// Overlay shadow
    pub shadow: Color,
}

impl Theme {
    /// Create the default dark theme
    pub fn dark() -> Self {
        Self {
            button_bg: Color::rgb(0.18, 0.18, 0.22),
            button_hover: Color::rgb(0.26, 0.26, 0.32),
            button_disabled: Color::rgb(0.14, 0.14, 0.17),

            border: Color::rgb(0.20, 0.20, 0.26),
            border_focused: Color::rgb(0.40, 0.58, 0.98),

            text_primary: Color::rgb(0.95, 0.95, 0.97),
            text_placeholder: Color::rgb(0.42, 0.42, 0.50),
            text_disabled: Color::rgb(0.35, 0.35, 0.40),

            // Darker popup for depth
            popup_bg: Color::rgba(0.11, 0.11, 0.14, 0.98),
            option_hover: Color::rgba(0.22, 0.22, 0.28, 1.0),
            accent_subtle: Color::rgba(0.40, 0.58, 0.98, 0.12),
            accent: Color::rgb(0.40, 0.58, 0.98),
            shadow: Color::rgba(0.0, 0.0, 0.0, 0.5),
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            button_bg: Color::rgb(0.94, 0.94, 0.96),
            button_hover: Color::rgb(0.88, 0.88, 0.92),
            button_disabled: Color::rgb(0.96, 0.96, 0.97),

            border: Color::rgb(0.82, 0.82, 0.86),
            border_focused: Color::rgb(0.35, 0.52, 0.92),

            text_primary: Color::rgb(0.12, 0.12, 0.15),
            text_placeholder: Color::rgb(0.62, 0.62, 0.68),
            text_disabled: Color::rgb(0.70, 0.70, 0.74),

            popup_bg: Color::rgba(1.0, 1.0, 1.0, 0.98),
            option_hover: Color::rgba(0.92, 0.94, 0.98, 1.0),
            accent_subtle: Color::rgba(0.35, 0.52, 0.92, 0.1),
            accent: Color::rgb(0.35, 0.52, 0.92),
            shadow: Color::rgba(0.0, 0.0, 0.0, 0.25),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_contrast() {
        let theme = Theme::dark();

        // Text should be lighter than the anchor (dark theme)
        assert!(theme.text_primary.r > theme.button_bg.r);
        assert!(theme.text_primary.g > theme.button_bg.g);
        assert!(theme.text_primary.b > theme.button_bg.b);
    }

    #[test]
    fn test_light_theme_contrast() {
        let theme = Theme::light();

        assert!(theme.text_primary.r < theme.button_bg.r);
        assert!(theme.text_primary.g < theme.button_bg.g);
        assert!(theme.text_primary.b < theme.button_bg.b);
    }

    #[test]
    fn test_disabled_text_differs_from_primary() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.text_disabled, theme.text_primary);
        }
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
        assert_eq!(ThemeChoice::default().theme(), Theme::dark());
    }
}
