//! Overlay placement: decide whether the expanded list opens above or below its anchor.
//!
//! The list prefers to open below. It flips above only when the space below is
//! exhausted (`<= 0`) and the space above is strictly positive. When neither side
//! fits, it still opens below and is allowed to clip at the bottom of the viewport.
//!
//! Everything here is a pure function of the geometry passed in. The dropdown
//! measures fresh geometry and resolves once per open; nothing is cached across opens.

use crate::layout::Bounds;

/// Which side of the anchor the overlay occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Above,
    #[default]
    Below,
}

/// Decide the overlay placement.
///
/// * `anchor_y` - distance of the anchor's top edge from the viewport's top edge
/// * `anchor_height` - rendered height of the anchor
/// * `overlay_extent` - total height the expanded overlay occupies
/// * `viewport_height` - available vertical space
///
/// Total over its domain: degenerate inputs (zero items, zero viewport, NaN)
/// fall through to [`Placement::Below`].
///
/// ```
/// use droplist_ui::{resolve_placement, Placement};
///
/// // Anchor near the bottom edge: 150px short below, 500px free above.
/// assert_eq!(resolve_placement(700.0, 50.0, 200.0, 800.0), Placement::Above);
/// // Neither side fits: clip downward.
/// assert_eq!(resolve_placement(50.0, 20.0, 500.0, 400.0), Placement::Below);
/// ```
pub fn resolve_placement(
    anchor_y: f32,
    anchor_height: f32,
    overlay_extent: f32,
    viewport_height: f32,
) -> Placement {
    let space_below = viewport_height - (anchor_y + anchor_height + overlay_extent);
    let space_above = anchor_y - overlay_extent;

    if space_below <= 0.0 && space_above > 0.0 {
        Placement::Above
    } else {
        Placement::Below
    }
}

/// Total height of the overlay for a list.
///
/// `visible_rows * row_height`, plus `anchor_height` when the overlay repeats
/// the anchor row.
pub fn overlay_extent(visible_rows: usize, row_height: f32, anchor_height: f32, include_anchor: bool) -> f32 {
    let rows = visible_rows as f32 * row_height;
    if include_anchor {
        rows + anchor_height
    } else {
        rows
    }
}

/// A resolved placement together with the overlay's vertical offset.
///
/// The offset is measured from the anchor's bottom edge for [`Placement::Below`]
/// (always `0`) and from the anchor's top edge for [`Placement::Above`]
/// (`-extent`, so the overlay sits entirely above the anchor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementDecision {
    pub placement: Placement,
    pub offset: f32,
    /// Height the decision was made for
    pub extent: f32,
}

impl PlacementDecision {
    /// Resolve placement and offset for an anchor snapshot.
    pub fn resolve(anchor: Bounds, extent: f32, viewport_height: f32) -> Self {
        let placement = resolve_placement(anchor.y, anchor.height, extent, viewport_height);
        let offset = match placement {
            Placement::Below => 0.0,
            Placement::Above => -extent,
        };
        log::debug!(
            "placement {:?}: anchor y={} h={}, extent={}, viewport={}",
            placement,
            anchor.y,
            anchor.height,
            extent,
            viewport_height
        );
        Self {
            placement,
            offset,
            extent,
        }
    }

    /// Absolute bounds of the overlay surface. Horizontal extent follows the anchor.
    pub fn overlay_bounds(&self, anchor: Bounds) -> Bounds {
        let y = match self.placement {
            Placement::Below => anchor.bottom() + self.offset,
            Placement::Above => anchor.y + self.offset,
        };
        Bounds::new(anchor.x, y, anchor.width, self.extent)
    }
}
