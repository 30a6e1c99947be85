//! Overlay ownership and dismissal rules.
//!
//! - [`OverlaySlot`] owns the one overlay entry a dropdown may have in the
//!   host's stack and pairs every insert with exactly one removal.
//! - [`OverlayCloseHelper`] decides which events dismiss an open overlay.

use crate::event::{Event, KeyCode};
use crate::host::{OverlayHandle, OverlayHost};
use crate::layout::Bounds;
use crate::placement::PlacementDecision;
use crate::view::OverlayView;

/// Holds at most one live overlay handle.
#[derive(Debug, Default)]
pub struct OverlaySlot {
    handle: Option<OverlayHandle>,
}

impl OverlaySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<OverlayHandle> {
        self.handle
    }

    /// Insert `content` into the host. Refuses (returns `None`) while occupied.
    pub fn insert<H: OverlayHost + ?Sized>(
        &mut self,
        host: &mut H,
        content: OverlayView,
        decision: &PlacementDecision,
    ) -> Option<OverlayHandle> {
        if self.handle.is_some() {
            log::warn!("overlay slot already occupied by {:?}; not inserting", self.handle);
            return None;
        }
        let handle = host.insert_overlay(content, decision.placement, decision.offset);
        log::debug!("inserted overlay {:?}", handle);
        self.handle = Some(handle);
        Some(handle)
    }

    /// Push new content to the live entry, if any.
    pub fn update<H: OverlayHost + ?Sized>(&self, host: &mut H, content: OverlayView) {
        if let Some(handle) = self.handle {
            if let Err(e) = host.update_overlay(handle, content) {
                log::warn!("failed to update overlay: {}", e);
            }
        }
    }

    /// Remove the live entry from the host. The handle is taken first, so a
    /// second call is a no-op. Returns whether an entry was released.
    pub fn release<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        if let Err(e) = host.remove_overlay(handle) {
            log::warn!("failed to remove overlay: {}", e);
        } else {
            log::debug!("removed overlay {:?}", handle);
        }
        true
    }
}

/// Dismissal rules for an open overlay.
pub struct OverlayCloseHelper;

impl OverlayCloseHelper {
    /// A global press dismisses when it lands outside `capture_bounds`
    /// (the anchor and overlay together).
    #[inline]
    pub fn should_close_on_global_press(position: (f32, f32), capture_bounds: Bounds) -> bool {
        !capture_bounds.contains(position.0, position.1)
    }

    /// Escape, Tab and focus loss always dismiss.
    #[inline]
    pub fn should_close_on_event(event: &Event) -> bool {
        matches!(
            event,
            Event::KeyPress {
                key: KeyCode::Escape | KeyCode::Tab,
                ..
            } | Event::FocusLost
        )
    }
}
