//! droplist_ui - a dropdown selector for retained widget toolkits
//!
//! The dropdown owns its open/closed state and one overlay entry in a host
//! overlay stack. Drawing and layout belong to the host, reached through the
//! [`OverlayHost`] trait; the dropdown describes what to draw as a
//! [`DropdownView`].

mod macros;
mod callback;
mod color;
mod config;
pub mod constants;
mod dropdown;
mod error;
mod event;
mod host;
mod icon;
mod layout;
mod overlay;
mod placement;
mod state;
mod theme;
pub mod view;

pub use callback::Callback;
pub use color::Color;
pub use config::{DropdownColors, DropdownConfig, DropdownStyle};
pub use dropdown::{dropdown, Dropdown};
pub use error::{DropdownError, HostError};
pub use event::{Event, KeyCode, KeyModifiers, MouseButton};
pub use host::{AnchorId, HeadlessHost, OverlayEntry, OverlayHandle, OverlayHost};
pub use icon::{DropdownIcons, Icon};
pub use layout::Bounds;
pub use overlay::{OverlayCloseHelper, OverlaySlot};
pub use placement::{overlay_extent, resolve_placement, Placement, PlacementDecision};
pub use state::{DropdownState, OpenState};
pub use theme::{Theme, ThemeChoice};
pub use view::{AnchorView, DropdownView, HeaderView, OverlayView, RowView};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnchorId, Bounds, Dropdown, DropdownConfig, DropdownError, Event, HeadlessHost, KeyCode,
        MouseButton, OverlayHost, Placement, Theme,
    };
}
