//! The host runtime the dropdown talks to.
//!
//! The dropdown does no drawing or layout of its own. It asks the host for the
//! anchor's geometry and the viewport height, and tells the host when to push or
//! pop its overlay entry. [`HeadlessHost`] is an in-memory implementation used
//! by tests and the demo driver.

use std::collections::HashMap;

use crate::error::HostError;
use crate::layout::Bounds;
use crate::placement::Placement;
use crate::view::OverlayView;

/// Identifies an anchor control inside the host's widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u32);

/// Identifies one entry in the host's overlay stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayHandle(pub u64);

/// Capabilities the dropdown requires from the GUI runtime.
pub trait OverlayHost {
    /// Absolute screen bounds of a laid-out anchor.
    fn measure(&self, anchor: AnchorId) -> Result<Bounds, HostError>;

    /// Current available vertical space.
    fn viewport_height(&self) -> f32;

    /// Push an overlay entry above all other content.
    fn insert_overlay(&mut self, content: OverlayView, placement: Placement, offset: f32) -> OverlayHandle;

    /// Replace the content of a live entry (highlight or scroll changed).
    fn update_overlay(&mut self, handle: OverlayHandle, content: OverlayView) -> Result<(), HostError>;

    /// Pop an overlay entry.
    fn remove_overlay(&mut self, handle: OverlayHandle) -> Result<(), HostError>;
}

/// A live entry in the headless overlay stack.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEntry {
    pub handle: OverlayHandle,
    pub content: OverlayView,
    pub placement: Placement,
    pub offset: f32,
}

/// In-memory host with settable geometry.
///
/// Counts every insertion and removal so callers can check that overlay
/// entries are paired.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    viewport_height: f32,
    anchors: HashMap<AnchorId, Bounds>,
    overlays: Vec<OverlayEntry>,
    next_handle: u64,
    inserted: usize,
    removed: usize,
    rejected_removals: usize,
}

impl HeadlessHost {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            anchors: HashMap::new(),
            overlays: Vec::new(),
            next_handle: 1,
            inserted: 0,
            removed: 0,
            rejected_removals: 0,
        }
    }

    /// Lay out (or move) an anchor.
    pub fn place_anchor(&mut self, anchor: AnchorId, bounds: Bounds) {
        self.anchors.insert(anchor, bounds);
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    /// Entries currently in the overlay stack, bottom first.
    pub fn overlays(&self) -> &[OverlayEntry] {
        &self.overlays
    }

    /// The entry for a handle, if live.
    pub fn overlay(&self, handle: OverlayHandle) -> Option<&OverlayEntry> {
        self.overlays.iter().find(|e| e.handle == handle)
    }

    /// Total successful insertions.
    pub fn insert_count(&self) -> usize {
        self.inserted
    }

    /// Total successful removals.
    pub fn remove_count(&self) -> usize {
        self.removed
    }

    /// Removals that named a handle not in the stack (double release).
    pub fn rejected_removals(&self) -> usize {
        self.rejected_removals
    }
}

impl OverlayHost for HeadlessHost {
    fn measure(&self, anchor: AnchorId) -> Result<Bounds, HostError> {
        self.anchors
            .get(&anchor)
            .copied()
            .ok_or(HostError::NotLaidOut(anchor))
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn insert_overlay(&mut self, content: OverlayView, placement: Placement, offset: f32) -> OverlayHandle {
        let handle = OverlayHandle(self.next_handle);
        self.next_handle += 1;
        self.inserted += 1;
        self.overlays.push(OverlayEntry {
            handle,
            content,
            placement,
            offset,
        });
        handle
    }

    fn update_overlay(&mut self, handle: OverlayHandle, content: OverlayView) -> Result<(), HostError> {
        let entry = self
            .overlays
            .iter_mut()
            .find(|e| e.handle == handle)
            .ok_or(HostError::UnknownOverlay(handle))?;
        entry.content = content;
        Ok(())
    }

    fn remove_overlay(&mut self, handle: OverlayHandle) -> Result<(), HostError> {
        match self.overlays.iter().position(|e| e.handle == handle) {
            Some(index) => {
                self.overlays.remove(index);
                self.removed += 1;
                Ok(())
            }
            None => {
                self.rejected_removals += 1;
                Err(HostError::UnknownOverlay(handle))
            }
        }
    }
}
