//! Default values for dropdown configuration.
//!
//! These only seed [`DropdownConfig::default`](crate::DropdownConfig); widgets read
//! the configured values, never these constants directly.

// =============================================================================
// Typography
// =============================================================================

/// Default font size for anchor and row labels
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Compact vertical padding inside rows
pub const PADDING_COMPACT: f32 = 6.0;

/// Standard horizontal padding
pub const PADDING_STANDARD: f32 = 8.0;

// =============================================================================
// Dropdown
// =============================================================================

/// Height of one row in the expanded list.
/// Derived from: line_height(DEFAULT_FONT_SIZE) + PADDING_COMPACT * 2.0
pub const DROPDOWN_ROW_HEIGHT: f32 = DEFAULT_FONT_SIZE * LINE_HEIGHT_FACTOR + PADDING_COMPACT * 2.0;

/// Height of the collapsed anchor control
pub const DROPDOWN_ANCHOR_HEIGHT: f32 = 32.0;

/// Default dropdown width
pub const DROPDOWN_DEFAULT_WIDTH: f32 = 200.0;

/// Horizontal padding for dropdown text
pub const DROPDOWN_TEXT_PADDING_X: f32 = PADDING_STANDARD;

/// Width reserved for the expand/collapse icon
pub const DROPDOWN_ICON_WIDTH: f32 = 20.0;

/// Corner radius of the anchor and the overlay surface
pub const DROPDOWN_BORDER_RADIUS: f32 = 4.0;

/// Elevation (shadow depth) of the overlay surface
pub const DROPDOWN_ELEVATION: f32 = 8.0;

/// Label shown when nothing is selected
pub const DROPDOWN_PLACEHOLDER: &str = "Select...";

/// Wheel delta that scrolls the list by one row
pub const DROPDOWN_SCROLL_STEP: f32 = 1.0;
