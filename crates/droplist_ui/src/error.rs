//! Error types for the dropdown and its host.

use crate::host::{AnchorId, OverlayHandle};

/// Errors reported by an [`OverlayHost`](crate::OverlayHost).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    /// The anchor has not been laid out yet, so it has no geometry
    #[error("anchor {0:?} has not been laid out")]
    NotLaidOut(AnchorId),

    /// The handle does not name a live overlay entry
    #[error("overlay {0:?} is not in the overlay stack")]
    UnknownOverlay(OverlayHandle),
}

/// Errors that can occur when building or opening a dropdown.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DropdownError {
    /// Initial selection does not index into the item list
    #[error("selected index {index} is out of range for {len} items")]
    SelectionOutOfRange { index: usize, len: usize },

    /// The host could not measure the anchor; the open attempt was aborted
    #[error("host error: {0}")]
    Host(#[from] HostError),
}
