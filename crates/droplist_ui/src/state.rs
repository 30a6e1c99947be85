//! Dropdown interaction state
//!
//! The state is a plain value. [`Dropdown`](crate::Dropdown) is the only thing
//! that moves it between `Closed` and `Open`; the view is rendered from it.

use crate::layout::Bounds;
use crate::placement::{Placement, PlacementDecision};

/// Open/closed state of a dropdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open(OpenState),
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        matches!(self, DropdownState::Open(_))
    }

    pub fn open_state(&self) -> Option<&OpenState> {
        match self {
            DropdownState::Open(open) => Some(open),
            DropdownState::Closed => None,
        }
    }

    pub fn open_state_mut(&mut self) -> Option<&mut OpenState> {
        match self {
            DropdownState::Open(open) => Some(open),
            DropdownState::Closed => None,
        }
    }

    /// Placement of the open overlay.
    pub fn placement(&self) -> Option<Placement> {
        self.open_state().map(|open| open.decision.placement)
    }
}

/// Everything fixed for the lifetime of one open overlay, plus the
/// highlight and scroll position that change while it is open.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenState {
    /// Anchor geometry measured when the overlay opened
    pub anchor: Bounds,
    /// Placement resolved when the overlay opened
    pub decision: PlacementDecision,
    /// Height of the repeated anchor row inside the overlay (0 when absent)
    pub header_height: f32,
    /// Fixed row height
    pub row_height: f32,
    /// Number of items in the list
    pub item_count: usize,
    /// Rows shown at once
    pub visible_rows: usize,
    /// Currently highlighted item
    pub highlighted: Option<usize>,
    /// Index of the first visible item
    pub scroll_offset: usize,
}

impl OpenState {
    pub fn new(
        anchor: Bounds,
        decision: PlacementDecision,
        header_height: f32,
        row_height: f32,
        item_count: usize,
        visible_rows: usize,
        initial: Option<usize>,
    ) -> Self {
        let highlighted = if item_count == 0 {
            None
        } else {
            Some(initial.unwrap_or(0).min(item_count - 1))
        };
        let mut state = Self {
            anchor,
            decision,
            header_height,
            row_height,
            item_count,
            visible_rows,
            highlighted,
            scroll_offset: 0,
        };
        state.ensure_highlighted_visible();
        state
    }

    /// Absolute bounds of the overlay surface.
    pub fn overlay_bounds(&self) -> Bounds {
        self.decision.overlay_bounds(self.anchor)
    }

    /// Anchor and overlay together; presses inside do not dismiss.
    pub fn capture_bounds(&self) -> Bounds {
        self.anchor.union(&self.overlay_bounds())
    }

    /// Bounds of the repeated anchor row, on the side facing the anchor.
    pub fn header_bounds(&self) -> Option<Bounds> {
        if self.header_height <= 0.0 {
            return None;
        }
        let overlay = self.overlay_bounds();
        let y = match self.decision.placement {
            Placement::Below => overlay.y,
            Placement::Above => overlay.bottom() - self.header_height,
        };
        Some(Bounds::new(overlay.x, y, overlay.width, self.header_height))
    }

    /// Top edge of the first visible row.
    fn rows_top(&self) -> f32 {
        let overlay = self.overlay_bounds();
        match self.decision.placement {
            Placement::Below => overlay.y + self.header_height,
            Placement::Above => overlay.y,
        }
    }

    /// Bounds of the `slot`-th visible row (0 = first visible).
    pub fn row_bounds(&self, slot: usize) -> Bounds {
        let overlay = self.overlay_bounds();
        Bounds::new(
            overlay.x,
            self.rows_top() + slot as f32 * self.row_height,
            overlay.width,
            self.row_height,
        )
    }

    /// Item index under a point, accounting for scroll.
    pub fn item_at(&self, x: f32, y: f32) -> Option<usize> {
        if self.row_height <= 0.0 || self.visible_rows == 0 {
            return None;
        }
        let rows = Bounds::new(
            self.anchor.x,
            self.rows_top(),
            self.anchor.width,
            self.visible_rows as f32 * self.row_height,
        );
        if !rows.contains(x, y) {
            return None;
        }
        let slot = (((y - rows.y) / self.row_height) as usize).min(self.visible_rows - 1);
        let index = self.scroll_offset + slot;
        (index < self.item_count).then_some(index)
    }

    /// Item indices currently shown, in order.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.scroll_offset + self.visible_rows).min(self.item_count);
        self.scroll_offset..end
    }

    pub fn is_scrollable(&self) -> bool {
        self.item_count > self.visible_rows
    }

    /// Move the highlight by `delta` rows, clamped to the list.
    pub fn move_highlight(&mut self, delta: isize) {
        if self.item_count == 0 {
            return;
        }
        let current = self.highlighted.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.item_count as isize - 1) as usize;
        self.highlighted = Some(next);
        self.ensure_highlighted_visible();
    }

    pub fn highlight_first(&mut self) {
        if self.item_count > 0 {
            self.highlighted = Some(0);
            self.ensure_highlighted_visible();
        }
    }

    pub fn highlight_last(&mut self) {
        if self.item_count > 0 {
            self.highlighted = Some(self.item_count - 1);
            self.ensure_highlighted_visible();
        }
    }

    /// Scroll the list by a delta (positive = down, negative = up)
    pub fn scroll_by(&mut self, delta: isize) {
        if self.item_count <= self.visible_rows {
            self.scroll_offset = 0;
            return;
        }

        let max_scroll = self.item_count.saturating_sub(self.visible_rows);
        self.scroll_offset = (self.scroll_offset as isize)
            .saturating_add(delta)
            .clamp(0, max_scroll as isize) as usize;
    }

    /// Ensure the highlighted item is visible within the scroll view
    pub fn ensure_highlighted_visible(&mut self) {
        if let Some(highlighted) = self.highlighted {
            if highlighted < self.scroll_offset {
                self.scroll_offset = highlighted;
            } else if highlighted >= self.scroll_offset + self.visible_rows {
                self.scroll_offset = highlighted.saturating_sub(self.visible_rows.saturating_sub(1));
            }
        }
    }
}
