//! View description of a dropdown.
//!
//! The render functions here are pure: they map dropdown state, the item list
//! and a [`DropdownStyle`] to plain data the host can draw. Row rendering takes
//! the style bundle as an argument instead of looking it up.

use crate::color::Color;
use crate::config::DropdownStyle;
use crate::icon::Icon;
use crate::layout::Bounds;
use crate::placement::Placement;
use crate::state::{DropdownState, OpenState};

/// Everything the host needs to draw one dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownView {
    pub anchor: AnchorView,
    /// Present while open
    pub overlay: Option<OverlayView>,
}

/// The collapsed control.
///
/// `width` and `height` are the size the host should lay the anchor out at.
/// Placement always uses the size the host reports back.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorView {
    pub width: f32,
    pub height: f32,
    pub label: String,
    /// `label` is the placeholder, not an item
    pub is_placeholder: bool,
    pub icon: Icon,
    pub enabled: bool,
    pub focused: bool,
    pub open: bool,
    pub background: Color,
    pub text_color: Color,
    pub border_color: Color,
    pub border_radius: f32,
    pub font_size: f32,
    pub text_padding: f32,
    /// Trailing space reserved for `icon`
    pub icon_width: f32,
}

/// The floating list surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayView {
    pub bounds: Bounds,
    pub placement: Placement,
    pub background: Color,
    pub shadow: Color,
    pub elevation: f32,
    pub border_radius: f32,
    /// Repeated anchor row, when configured
    pub header: Option<HeaderView>,
    /// Visible rows, top to bottom
    pub rows: Vec<RowView>,
    /// First visible item
    pub scroll_offset: usize,
    /// Total number of items, visible or not
    pub total_rows: usize,
}

/// One row of the expanded list.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Index into the item list
    pub index: usize,
    pub label: String,
    pub bounds: Bounds,
    pub highlighted: bool,
    pub selected: bool,
    pub background: Color,
    pub text_color: Color,
    pub marker: Option<Icon>,
    pub font_size: f32,
    pub text_padding: f32,
}

/// The anchor repeated inside the overlay. It is not an item and cannot be chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub label: String,
    pub bounds: Bounds,
    pub icon: Icon,
    pub text_color: Color,
    pub font_size: f32,
    pub text_padding: f32,
}

/// Per-row flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowFlags {
    pub highlighted: bool,
    pub selected: bool,
}

/// Render a single row.
pub fn render_row(index: usize, label: &str, bounds: Bounds, flags: RowFlags, style: &DropdownStyle) -> RowView {
    let colors = &style.colors;
    let background = if flags.highlighted {
        colors.row_highlight
    } else if flags.selected {
        colors.row_selected
    } else {
        Color::TRANSPARENT
    };
    RowView {
        index,
        label: label.to_string(),
        bounds,
        highlighted: flags.highlighted,
        selected: flags.selected,
        background,
        text_color: colors.enabled_text,
        marker: if flags.selected { style.icons.selected } else { None },
        font_size: style.font_size,
        text_padding: style.text_padding,
    }
}

/// Inputs to [`render_anchor`] that do not come from the open state.
#[derive(Debug, Clone, Copy)]
pub struct AnchorInputs<'a> {
    pub selected_label: Option<&'a str>,
    pub placeholder: &'a str,
    pub enabled: bool,
    pub focused: bool,
    pub open: bool,
}

/// Render the collapsed control.
pub fn render_anchor(inputs: AnchorInputs<'_>, style: &DropdownStyle) -> AnchorView {
    let colors = &style.colors;
    let (label, is_placeholder) = match inputs.selected_label {
        Some(label) => (label.to_string(), false),
        None => (inputs.placeholder.to_string(), true),
    };
    let (background, text_color) = if !inputs.enabled {
        (colors.disabled_bg, colors.disabled_text)
    } else if inputs.open {
        (colors.hover_bg, colors.enabled_text)
    } else if is_placeholder {
        (colors.enabled_bg, colors.placeholder_text)
    } else {
        (colors.enabled_bg, colors.enabled_text)
    };
    let border_color = if inputs.focused && inputs.enabled {
        colors.border_focused
    } else {
        colors.border
    };
    AnchorView {
        width: style.width,
        height: style.anchor_height,
        label,
        is_placeholder,
        icon: style.icons.anchor_icon(inputs.open),
        enabled: inputs.enabled,
        focused: inputs.focused,
        open: inputs.open,
        background,
        text_color,
        border_color,
        border_radius: style.border_radius,
        font_size: style.font_size,
        text_padding: style.text_padding,
        icon_width: style.icon_width,
    }
}

/// Render the overlay for an open dropdown.
pub fn render_overlay(
    open: &OpenState,
    items: &[String],
    selected: Option<usize>,
    anchor_label: &str,
    style: &DropdownStyle,
) -> OverlayView {
    let rows = open
        .visible_range()
        .enumerate()
        .filter_map(|(slot, index)| {
            let label = items.get(index)?;
            let flags = RowFlags {
                highlighted: open.highlighted == Some(index),
                selected: selected == Some(index),
            };
            Some(render_row(index, label, open.row_bounds(slot), flags, style))
        })
        .collect();

    let header = open.header_bounds().map(|bounds| HeaderView {
        label: anchor_label.to_string(),
        bounds,
        icon: style.icons.anchor_icon(true),
        text_color: style.colors.placeholder_text,
        font_size: style.font_size,
        text_padding: style.text_padding,
    });

    OverlayView {
        bounds: open.overlay_bounds(),
        placement: open.decision.placement,
        background: style.colors.popup_bg,
        shadow: style.colors.shadow,
        elevation: style.elevation,
        border_radius: style.border_radius,
        header,
        rows,
        scroll_offset: open.scroll_offset,
        total_rows: open.item_count,
    }
}

/// Render the full view from dropdown state.
pub fn render(
    state: &DropdownState,
    items: &[String],
    selected: Option<usize>,
    anchor: AnchorInputs<'_>,
    style: &DropdownStyle,
) -> DropdownView {
    let anchor_view = render_anchor(anchor, style);
    let overlay = state
        .open_state()
        .map(|open| render_overlay(open, items, selected, &anchor_view.label, style));
    DropdownView {
        anchor: anchor_view,
        overlay,
    }
}
