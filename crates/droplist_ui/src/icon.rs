//! Icons used by the dropdown.
//!
//! Icons are named glyphs; the host decides how to draw them.

use serde::{Deserialize, Serialize};

/// A named icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    ChevronDown,
    ChevronUp,
    TriangleDown,
    TriangleUp,
    Check,
    Dot,
}

/// Icon set for the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownIcons {
    /// Shown on the anchor while closed
    pub collapsed: Icon,
    /// Shown on the anchor while open
    pub expanded: Icon,
    /// Marks the selected row; `None` draws no marker
    pub selected: Option<Icon>,
}

impl Default for DropdownIcons {
    fn default() -> Self {
        Self {
            collapsed: Icon::ChevronDown,
            expanded: Icon::ChevronUp,
            selected: Some(Icon::Check),
        }
    }
}

impl DropdownIcons {
    /// Anchor icon for the given open state.
    pub fn anchor_icon(&self, is_open: bool) -> Icon {
        if is_open {
            self.expanded
        } else {
            self.collapsed
        }
    }
}
