//! Dropdown configuration and the resolved style bundle.
//!
//! `DropdownConfig` is the pass-through configuration surface: sizes, icons,
//! optional color overrides and behavior flags. `DropdownStyle` is what the
//! view functions consume; it is resolved once from a config and a theme and
//! handed to row rendering explicitly.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{
    DROPDOWN_ANCHOR_HEIGHT, DROPDOWN_BORDER_RADIUS, DROPDOWN_DEFAULT_WIDTH, DROPDOWN_ELEVATION,
    DROPDOWN_ICON_WIDTH, DROPDOWN_PLACEHOLDER, DROPDOWN_ROW_HEIGHT, DROPDOWN_TEXT_PADDING_X,
    DEFAULT_FONT_SIZE,
};
use crate::icon::DropdownIcons;
use crate::theme::Theme;
use crate::{builder_field, builder_option};

/// Configuration for dropdown appearance and behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Requested width of the anchor; the overlay follows the laid-out anchor
    pub width: f32,
    /// Requested height of the collapsed anchor
    pub anchor_height: f32,
    /// Fixed height of each row in the expanded list
    pub row_height: f32,
    /// Rows shown before the list scrolls; `None` shows every row
    pub max_visible_rows: Option<usize>,
    /// Corner radius of the anchor and overlay
    pub border_radius: f32,
    /// Overlay shadow depth
    pub elevation: f32,
    /// Label font size
    pub font_size: f32,
    /// Label shown when nothing is selected
    pub placeholder: String,
    /// Repeat the anchor row inside the overlay, next to the anchor
    pub include_anchor_in_overlay: bool,
    /// Open as soon as the anchor gains focus
    pub open_on_focus: bool,
    /// Icon set
    pub icons: DropdownIcons,
    /// Color overrides; `None` takes colors from the theme
    pub colors: Option<DropdownColors>,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            width: DROPDOWN_DEFAULT_WIDTH,
            anchor_height: DROPDOWN_ANCHOR_HEIGHT,
            row_height: DROPDOWN_ROW_HEIGHT,
            max_visible_rows: None,
            border_radius: DROPDOWN_BORDER_RADIUS,
            elevation: DROPDOWN_ELEVATION,
            font_size: DEFAULT_FONT_SIZE,
            placeholder: DROPDOWN_PLACEHOLDER.to_string(),
            include_anchor_in_overlay: false,
            open_on_focus: false,
            icons: DropdownIcons::default(),
            colors: None,
        }
    }
}

impl DropdownConfig {
    /// Create a new dropdown configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    builder_field!(width, f32);
    builder_field!(anchor_height, f32);
    builder_field!(row_height, f32);
    builder_option!(max_visible_rows, usize);
    builder_field!(border_radius, f32);
    builder_field!(elevation, f32);
    builder_field!(font_size, f32);
    builder_field!(include_anchor_in_overlay, bool);
    builder_field!(open_on_focus, bool);
    builder_field!(icons, DropdownIcons);
    builder_option!(colors, DropdownColors);

    /// Set the placeholder label.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Number of rows shown at once for a list of `item_count` items.
    pub fn visible_rows(&self, item_count: usize) -> usize {
        match self.max_visible_rows {
            Some(max) => item_count.min(max),
            None => item_count,
        }
    }

    /// Horizontal inset of labels inside the anchor and rows.
    pub fn text_padding(&self) -> f32 {
        DROPDOWN_TEXT_PADDING_X
    }

    /// Width reserved at the trailing edge for icons.
    pub fn icon_width(&self) -> f32 {
        DROPDOWN_ICON_WIDTH
    }
}

/// Explicit colors for the enabled and disabled dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropdownColors {
    pub enabled_bg: Color,
    pub enabled_text: Color,
    pub disabled_bg: Color,
    pub disabled_text: Color,
    pub hover_bg: Color,
    pub placeholder_text: Color,
    pub border: Color,
    pub border_focused: Color,
    pub popup_bg: Color,
    pub row_highlight: Color,
    pub row_selected: Color,
    pub marker: Color,
    pub shadow: Color,
}

impl DropdownColors {
    /// Take every color from a theme.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            enabled_bg: theme.button_bg,
            enabled_text: theme.text_primary,
            disabled_bg: theme.button_disabled,
            disabled_text: theme.text_disabled,
            hover_bg: theme.button_hover,
            placeholder_text: theme.text_placeholder,
            border: theme.border,
            border_focused: theme.border_focused,
            popup_bg: theme.popup_bg,
            row_highlight: theme.option_hover,
            row_selected: theme.accent_subtle,
            marker: theme.accent,
            shadow: theme.shadow,
        }
    }
}

/// Style bundle shared by the anchor and every row of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownStyle {
    pub colors: DropdownColors,
    pub icons: DropdownIcons,
    pub width: f32,
    pub anchor_height: f32,
    pub row_height: f32,
    pub border_radius: f32,
    pub elevation: f32,
    pub font_size: f32,
    pub text_padding: f32,
    pub icon_width: f32,
}

impl DropdownStyle {
    /// Resolve the style from a config, falling back to the theme for colors.
    pub fn resolve(config: &DropdownConfig, theme: &Theme) -> Self {
        Self {
            colors: config
                .colors
                .unwrap_or_else(|| DropdownColors::from_theme(theme)),
            icons: config.icons,
            width: config.width,
            anchor_height: config.anchor_height,
            row_height: config.row_height,
            border_radius: config.border_radius,
            elevation: config.elevation,
            font_size: config.font_size,
            text_padding: config.text_padding(),
            icon_width: config.icon_width(),
        }
    }
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self::resolve(&DropdownConfig::default(), &Theme::default())
    }
}
