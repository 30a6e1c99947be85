//! Dropdown selector.
//!
//! The dropdown owns its state and at most one overlay entry in the host.
//! It opens below its anchor unless the space below is exhausted and there is
//! room above. It closes when:
//! - An option is selected
//! - The anchor is activated again
//! - Focus is lost, Escape/Tab is pressed, or the pointer presses outside
//! - The wheel scrolls while the list cannot scroll
//!
//! Every close path releases the overlay entry exactly once.

use crate::callback::Callback;
use crate::callback_setter;
use crate::config::{DropdownConfig, DropdownStyle};
use crate::error::DropdownError;
use crate::event::{Event, KeyCode, MouseButton};
use crate::host::{AnchorId, OverlayHost};
use crate::overlay::{OverlayCloseHelper, OverlaySlot};
use crate::placement::{overlay_extent, Placement, PlacementDecision};
use crate::state::{DropdownState, OpenState};
use crate::theme::Theme;
use crate::view::{self, AnchorInputs, DropdownView, OverlayView};

/// A dropdown for selecting one item from a list.
pub struct Dropdown<M> {
    anchor: AnchorId,
    items: Vec<String>,
    selected: Option<usize>,
    config: DropdownConfig,
    style: DropdownStyle,
    state: DropdownState,
    overlay: OverlaySlot,
    focused: bool,
    on_select: Callback<usize, M>,
    on_toggle: Callback<bool, M>,
}

impl<M> Dropdown<M> {
    /// Create a dropdown bound to `anchor`.
    ///
    /// Fails when `selected` does not index into `items`.
    pub fn new(anchor: AnchorId, items: Vec<String>, selected: Option<usize>) -> Result<Self, DropdownError> {
        if let Some(index) = selected {
            if index >= items.len() {
                return Err(DropdownError::SelectionOutOfRange {
                    index,
                    len: items.len(),
                });
            }
        }
        let config = DropdownConfig::default();
        let style = DropdownStyle::resolve(&config, &Theme::default());
        Ok(Self {
            anchor,
            items,
            selected,
            config,
            style,
            state: DropdownState::Closed,
            overlay: OverlaySlot::new(),
            focused: false,
            on_select: Callback::none(),
            on_toggle: Callback::none(),
        })
    }

    // Called with the 0-based index of the chosen item
    callback_setter!(on_select, usize);
    // Called with the new open state when the dropdown opens or closes without a selection
    callback_setter!(on_toggle, bool);

    /// Apply a configuration. Colors not overridden by it come from `theme`.
    pub fn config(mut self, config: DropdownConfig, theme: &Theme) -> Self {
        self.style = DropdownStyle::resolve(&config, theme);
        self.config = config;
        self
    }

    pub fn anchor(&self) -> AnchorId {
        self.anchor
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.and_then(|i| self.items.get(i)).map(String::as_str)
    }

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    pub fn style(&self) -> &DropdownStyle {
        &self.style
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Placement of the open overlay.
    pub fn placement(&self) -> Option<Placement> {
        self.state.placement()
    }

    /// Enabled iff a selection callback is set and there is at least one item.
    pub fn is_enabled(&self) -> bool {
        self.on_select.is_some() && !self.items.is_empty()
    }

    /// Replace the item list. An open overlay is closed first, and a selection
    /// that no longer fits is cleared.
    pub fn set_items<H: OverlayHost + ?Sized>(&mut self, host: &mut H, items: Vec<String>) {
        self.close_silently(host);
        if self.selected.is_some_and(|i| i >= items.len()) {
            self.selected = None;
        }
        self.items = items;
    }

    /// Toggle the dropdown, as a tap on the anchor does.
    ///
    /// Disabled dropdowns ignore activation. If the anchor cannot be measured
    /// the open is aborted, the dropdown stays closed and the error is returned.
    pub fn activate<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Result<Option<M>, DropdownError> {
        if self.is_open() {
            return Ok(self.close(host));
        }
        self.open(host)
    }

    /// Open the overlay. No-op when already open or disabled.
    pub fn open<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Result<Option<M>, DropdownError> {
        if self.is_open() {
            return Ok(None);
        }
        if !self.is_enabled() {
            log::debug!("dropdown {:?} is disabled; ignoring activation", self.anchor);
            return Ok(None);
        }

        let anchor = host.measure(self.anchor).map_err(|e| {
            log::warn!("aborting open of {:?}: {}", self.anchor, e);
            DropdownError::from(e)
        })?;
        let visible_rows = self.config.visible_rows(self.items.len());
        let extent = overlay_extent(
            visible_rows,
            self.config.row_height,
            anchor.height,
            self.config.include_anchor_in_overlay,
        );
        let decision = PlacementDecision::resolve(anchor, extent, host.viewport_height());
        let header_height = if self.config.include_anchor_in_overlay {
            anchor.height
        } else {
            0.0
        };
        let open = OpenState::new(
            anchor,
            decision,
            header_height,
            self.config.row_height,
            self.items.len(),
            visible_rows,
            self.selected,
        );

        let content = self.render_overlay(&open);
        if self.overlay.insert(host, content, &decision).is_none() {
            return Ok(None);
        }
        self.state = DropdownState::Open(open);
        log::debug!("dropdown {:?} opened {:?}", self.anchor, decision.placement);
        Ok(self.on_toggle.call(true))
    }

    /// Close the overlay. No-op when already closed.
    pub fn close<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Option<M> {
        if self.close_silently(host) {
            self.on_toggle.call(false)
        } else {
            None
        }
    }

    /// Select the item at `index` and close. Out-of-range indices are ignored.
    pub fn select<H: OverlayHost + ?Sized>(&mut self, host: &mut H, index: usize) -> Option<M> {
        if index >= self.items.len() || !self.is_enabled() {
            return None;
        }
        self.close_silently(host);
        self.selected = Some(index);
        log::debug!("dropdown {:?} selected {}", self.anchor, index);
        self.on_select.call(index)
    }

    /// Focus moved onto the anchor.
    pub fn focus_gained<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Option<M> {
        self.focused = true;
        if self.config.open_on_focus {
            return self.open_or_log(host);
        }
        None
    }

    /// Focus moved away from the anchor.
    pub fn focus_lost<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Option<M> {
        self.focused = false;
        self.close(host)
    }

    /// Close and release the overlay without emitting a message.
    /// Call before dropping an open dropdown.
    pub fn dispose<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        self.close_silently(host);
    }

    /// Handle an input event, optionally producing a message.
    pub fn on_event<H: OverlayHost + ?Sized>(&mut self, event: &Event, host: &mut H) -> Option<M> {
        match event {
            Event::FocusGained => self.focus_gained(host),
            Event::FocusLost => self.focus_lost(host),
            Event::MousePress {
                button: MouseButton::Left,
                position,
            } => self.on_press(*position, host),
            Event::MousePress { position, .. } | Event::GlobalMousePress { position, .. } => {
                let outside = self
                    .state
                    .open_state()
                    .is_some_and(|open| OverlayCloseHelper::should_close_on_global_press(*position, open.capture_bounds()));
                if outside {
                    self.close(host)
                } else {
                    None
                }
            }
            Event::MouseMove { position } => {
                let open = self.state.open_state_mut()?;
                let hovered = open.item_at(position.0, position.1);
                if hovered.is_some() && hovered != open.highlighted {
                    open.highlighted = hovered;
                    self.refresh_overlay(host);
                }
                None
            }
            Event::MouseScroll { delta, position } => self.on_scroll(*delta, *position, host),
            Event::KeyPress { key, .. } => self.on_key(*key, event, host),
        }
    }

    /// The current view, rendered from state.
    pub fn view(&self) -> DropdownView {
        view::render(&self.state, &self.items, self.selected, self.anchor_inputs(), &self.style)
    }

    fn anchor_inputs(&self) -> AnchorInputs<'_> {
        AnchorInputs {
            selected_label: self.selected_label(),
            placeholder: &self.config.placeholder,
            enabled: self.is_enabled(),
            focused: self.focused,
            open: self.is_open(),
        }
    }

    fn render_overlay(&self, open: &OpenState) -> OverlayView {
        let anchor_label = self.selected_label().unwrap_or(&self.config.placeholder);
        view::render_overlay(open, &self.items, self.selected, anchor_label, &self.style)
    }

    fn refresh_overlay<H: OverlayHost + ?Sized>(&self, host: &mut H) {
        if let Some(open) = self.state.open_state() {
            self.overlay.update(host, self.render_overlay(open));
        }
    }

    /// Transition to `Closed`, releasing the overlay. Returns whether it was open.
    fn close_silently<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let was_open = self.is_open();
        self.overlay.release(host);
        self.state = DropdownState::Closed;
        if was_open {
            log::debug!("dropdown {:?} closed", self.anchor);
        }
        was_open
    }

    fn open_or_log<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Option<M> {
        self.open(host).unwrap_or_else(|e| {
            log::warn!("dropdown {:?} could not open: {}", self.anchor, e);
            None
        })
    }

    fn on_press<H: OverlayHost + ?Sized>(&mut self, position: (f32, f32), host: &mut H) -> Option<M> {
        let Some(open) = self.state.open_state() else {
            let on_anchor = host
                .measure(self.anchor)
                .is_ok_and(|bounds| bounds.contains(position.0, position.1));
            return if on_anchor { self.open_or_log(host) } else { None };
        };

        if open.anchor.contains(position.0, position.1) {
            return self.close(host);
        }
        if let Some(index) = open.item_at(position.0, position.1) {
            return self.select(host, index);
        }
        if OverlayCloseHelper::should_close_on_global_press(position, open.capture_bounds()) {
            return self.close(host);
        }
        // Padding or header inside the overlay
        None
    }

    fn on_scroll<H: OverlayHost + ?Sized>(&mut self, delta: f32, position: (f32, f32), host: &mut H) -> Option<M> {
        let open = self.state.open_state_mut()?;
        let over_list = open.overlay_bounds().contains(position.0, position.1);
        if over_list && open.is_scrollable() {
            if delta.is_nan() {
                return None;
            }
            // Saturates for huge or infinite deltas
            let rows = (delta / crate::constants::DROPDOWN_SCROLL_STEP).round() as isize;
            open.scroll_by(rows);
            self.refresh_overlay(host);
            return None;
        }
        self.close(host)
    }

    fn on_key<H: OverlayHost + ?Sized>(&mut self, key: KeyCode, event: &Event, host: &mut H) -> Option<M> {
        if !self.is_open() {
            return match key {
                KeyCode::Enter | KeyCode::Space | KeyCode::Down if self.focused => self.open_or_log(host),
                _ => None,
            };
        }
        if OverlayCloseHelper::should_close_on_event(event) {
            return self.close(host);
        }

        let open = self.state.open_state_mut()?;
        match key {
            KeyCode::Up => open.move_highlight(-1),
            KeyCode::Down => open.move_highlight(1),
            KeyCode::Home => open.highlight_first(),
            KeyCode::End => open.highlight_last(),
            KeyCode::Enter | KeyCode::Space => {
                let highlighted = open.highlighted;
                return match highlighted {
                    Some(index) => self.select(host, index),
                    None => self.close(host),
                };
            }
            _ => return None,
        }
        self.refresh_overlay(host);
        None
    }
}

impl<M> Drop for Dropdown<M> {
    fn drop(&mut self) {
        if self.overlay.is_occupied() {
            log::warn!(
                "dropdown {:?} dropped while open; overlay {:?} was never released (call dispose)",
                self.anchor,
                self.overlay.handle()
            );
        }
    }
}

impl<M> std::fmt::Debug for Dropdown<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("anchor", &self.anchor)
            .field("items", &self.items.len())
            .field("selected", &self.selected)
            .field("state", &self.state)
            .field("overlay", &self.overlay.handle())
            .finish_non_exhaustive()
    }
}

/// Helper function to create a dropdown.
pub fn dropdown<M>(anchor: AnchorId, items: Vec<String>, selected: Option<usize>) -> Result<Dropdown<M>, DropdownError> {
    Dropdown::new(anchor, items, selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;
    use crate::event::KeyModifiers;
    use crate::host::HeadlessHost;
    use crate::layout::Bounds;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Selected(usize),
        Toggled(bool),
    }

    const ANCHOR: AnchorId = AnchorId(1);

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Item {}", i)).collect()
    }

    fn host_with_anchor_at(y: f32) -> HeadlessHost {
        let mut host = HeadlessHost::new(800.0);
        host.place_anchor(ANCHOR, Bounds::new(10.0, y, 200.0, 50.0));
        host
    }

    fn enabled(n: usize) -> Dropdown<Msg> {
        Dropdown::new(ANCHOR, items(n), None)
            .unwrap()
            .config(DropdownConfig::default().row_height(20.0), &Theme::dark())
            .on_select(Msg::Selected)
            .on_toggle(Msg::Toggled)
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
        }
    }

    fn assert_released(host: &HeadlessHost) {
        assert!(host.overlays().is_empty(), "leaked overlay: {:?}", host.overlays());
        assert_eq!(host.insert_count(), host.remove_count());
        assert_eq!(host.rejected_removals(), 0);
    }

    #[test]
    fn test_out_of_range_selection_is_rejected() {
        let err = Dropdown::<Msg>::new(ANCHOR, items(3), Some(3)).unwrap_err();
        assert_eq!(err, DropdownError::SelectionOutOfRange { index: 3, len: 3 });
        assert!(Dropdown::<Msg>::new(ANCHOR, items(3), Some(2)).is_ok());
    }

    #[test]
    fn test_disabled_without_callback_never_opens() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd: Dropdown<Msg> = Dropdown::new(ANCHOR, items(3), None).unwrap();
        assert!(!dd.is_enabled());
        assert_eq!(dd.activate(&mut host), Ok(None));
        assert_eq!(dd.on_event(&press(20.0, 110.0), &mut host), None);
        assert!(!dd.is_open());
        assert_eq!(host.insert_count(), 0);
    }

    #[test]
    fn test_disabled_with_empty_items_never_opens() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(0);
        assert!(!dd.is_enabled());
        assert_eq!(dd.activate(&mut host), Ok(None));
        dd.on_event(&Event::FocusGained, &mut host);
        dd.on_event(&Event::key(KeyCode::Enter), &mut host);
        assert!(!dd.is_open());
        assert_eq!(host.insert_count(), 0);
    }

    #[test]
    fn test_opens_below_with_room() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(10);
        assert_eq!(dd.activate(&mut host), Ok(Some(Msg::Toggled(true))));
        assert_eq!(dd.placement(), Some(Placement::Below));

        let entry = &host.overlays()[0];
        assert_eq!(entry.placement, Placement::Below);
        assert_eq!(entry.offset, 0.0);
        assert_eq!(entry.content.bounds, Bounds::new(10.0, 150.0, 200.0, 200.0));
        assert_eq!(entry.content.rows.len(), 10);
    }

    #[test]
    fn test_opens_above_near_bottom() {
        let mut host = host_with_anchor_at(700.0);
        let mut dd = enabled(10);
        dd.activate(&mut host).unwrap();
        assert_eq!(dd.placement(), Some(Placement::Above));
        let entry = &host.overlays()[0];
        assert_eq!(entry.offset, -200.0);
        assert_eq!(entry.content.bounds.y, 500.0);
    }

    #[test]
    fn test_clips_down_when_nothing_fits() {
        let mut host = HeadlessHost::new(400.0);
        host.place_anchor(ANCHOR, Bounds::new(0.0, 50.0, 200.0, 20.0));
        let mut dd = enabled(25); // 500px of rows
        dd.activate(&mut host).unwrap();
        assert_eq!(dd.placement(), Some(Placement::Below));
    }

    #[test]
    fn test_placement_fixed_while_open_and_recomputed_on_reopen() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(10);
        dd.activate(&mut host).unwrap();
        assert_eq!(dd.placement(), Some(Placement::Below));

        // anchor moves while open: the decision does not change
        host.place_anchor(ANCHOR, Bounds::new(10.0, 700.0, 200.0, 50.0));
        dd.on_event(&Event::key(KeyCode::Down), &mut host);
        assert_eq!(dd.placement(), Some(Placement::Below));

        dd.close(&mut host);
        dd.activate(&mut host).unwrap();
        assert_eq!(dd.placement(), Some(Placement::Above));
        dd.dispose(&mut host);
        assert_released(&host);
    }

    #[test]
    fn test_item_count_change_changes_extent() {
        let mut host = host_with_anchor_at(500.0);
        let mut dd = enabled(5); // 100px fits below (550 + 100 < 800)
        dd.activate(&mut host).unwrap();
        assert_eq!(dd.placement(), Some(Placement::Below));

        dd.set_items(&mut host, items(20)); // 400px no longer fits below
        assert!(!dd.is_open());
        dd.activate(&mut host).unwrap();
        assert_eq!(dd.placement(), Some(Placement::Above));
        dd.dispose(&mut host);
        assert_released(&host);
    }

    #[test]
    fn test_measure_failure_aborts_open() {
        let mut host = HeadlessHost::new(800.0);
        let mut dd = enabled(3);
        assert_eq!(
            dd.activate(&mut host),
            Err(DropdownError::Host(HostError::NotLaidOut(ANCHOR)))
        );
        assert!(!dd.is_open());
        assert_eq!(host.insert_count(), 0);
    }

    #[test]
    fn test_second_activation_closes() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(3);
        assert_eq!(dd.on_event(&press(20.0, 120.0), &mut host), Some(Msg::Toggled(true)));
        assert_eq!(dd.on_event(&press(20.0, 120.0), &mut host), Some(Msg::Toggled(false)));
        assert!(!dd.is_open());
        assert_released(&host);
    }

    #[test]
    fn test_press_on_row_selects_and_closes() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(3);
        dd.activate(&mut host).unwrap();
        // rows start at 150, 20px each
        assert_eq!(dd.on_event(&press(20.0, 175.0), &mut host), Some(Msg::Selected(1)));
        assert_eq!(dd.selected(), Some(1));
        assert_eq!(dd.selected_label(), Some("Item 1"));
        assert!(!dd.is_open());
        assert_released(&host);
    }

    #[test]
    fn test_focus_loss_closes() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(3);
        dd.on_event(&Event::FocusGained, &mut host);
        assert!(!dd.is_open());
        dd.on_event(&Event::key(KeyCode::Enter), &mut host);
        assert!(dd.is_open());
        assert_eq!(dd.on_event(&Event::FocusLost, &mut host), Some(Msg::Toggled(false)));
        assert!(!dd.is_focused());
        assert_released(&host);
    }

    #[test]
    fn test_open_on_focus() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(3).config(DropdownConfig::default().open_on_focus(true), &Theme::dark());
        assert_eq!(dd.on_event(&Event::FocusGained, &mut host), Some(Msg::Toggled(true)));
        assert!(dd.is_open());
        dd.on_event(&Event::FocusLost, &mut host);
        assert_released(&host);
    }

    #[test]
    fn test_every_close_trigger_releases_exactly_once() {
        let outside = Event::GlobalMousePress {
            button: MouseButton::Left,
            position: (600.0, 10.0),
        };
        let triggers: Vec<Event> = vec![
            press(20.0, 120.0),
            press(20.0, 155.0),
            Event::FocusLost,
            Event::key(KeyCode::Escape),
            Event::KeyPress {
                key: KeyCode::Tab,
                modifiers: KeyModifiers::default(),
            },
            Event::key(KeyCode::Enter),
            outside,
            press(600.0, 10.0),
            Event::MouseScroll {
                delta: 1.0,
                position: (600.0, 10.0),
            },
        ];

        for trigger in triggers {
            let mut host = host_with_anchor_at(100.0);
            let mut dd = enabled(3);
            dd.on_event(&Event::FocusGained, &mut host);
            dd.activate(&mut host).unwrap();
            assert!(dd.is_open());

            dd.on_event(&trigger, &mut host);
            assert!(!dd.is_open(), "{:?} did not close", trigger);
            assert_eq!(host.remove_count(), 1, "{:?}", trigger);

            // Further close attempts must not touch the host again
            dd.close(&mut host);
            dd.on_event(&Event::FocusLost, &mut host);
            dd.dispose(&mut host);
            assert_released(&host);
        }
    }

    #[test]
    fn test_keyboard_navigation_and_enter_selects() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(5);
        dd.on_event(&Event::FocusGained, &mut host);
        dd.on_event(&Event::key(KeyCode::Down), &mut host);
        assert!(dd.is_open());

        dd.on_event(&Event::key(KeyCode::Down), &mut host);
        dd.on_event(&Event::key(KeyCode::Down), &mut host);
        dd.on_event(&Event::key(KeyCode::Up), &mut host);
        let handle = dd.overlay.handle().unwrap();
        let highlighted: Vec<usize> = host
            .overlay(handle)
            .unwrap()
            .content
            .rows
            .iter()
            .filter(|r| r.highlighted)
            .map(|r| r.index)
            .collect();
        assert_eq!(highlighted, vec![1]);

        dd.on_event(&Event::key(KeyCode::End), &mut host);
        assert_eq!(dd.on_event(&Event::key(KeyCode::Enter), &mut host), Some(Msg::Selected(4)));
        assert_released(&host);
    }

    #[test]
    fn test_hover_moves_highlight() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(3);
        dd.activate(&mut host).unwrap();
        dd.on_event(&Event::MouseMove { position: (20.0, 195.0) }, &mut host);
        let open = dd.state().open_state().unwrap();
        assert_eq!(open.highlighted, Some(2));
    }

    #[test]
    fn test_wheel_scrolls_long_list() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(20).config(
            DropdownConfig::default().row_height(20.0).max_visible_rows(5),
            &Theme::dark(),
        );
        dd.activate(&mut host).unwrap();
        assert_eq!(host.overlays()[0].content.bounds.height, 100.0);

        dd.on_event(&Event::MouseScroll { delta: 3.0, position: (20.0, 160.0) }, &mut host);
        assert!(dd.is_open());
        assert_eq!(host.overlays()[0].content.scroll_offset, 3);
        assert_eq!(host.overlays()[0].content.rows[0].label, "Item 3");

        // wheel outside the list closes
        dd.on_event(&Event::MouseScroll { delta: 1.0, position: (600.0, 10.0) }, &mut host);
        assert!(!dd.is_open());
        assert_released(&host);
    }

    #[test]
    fn test_include_anchor_extends_overlay() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(3).config(
            DropdownConfig::default().row_height(20.0).include_anchor_in_overlay(true),
            &Theme::dark(),
        );
        dd.activate(&mut host).unwrap();
        let overlay = &host.overlays()[0].content;
        assert_eq!(overlay.bounds.height, 3.0 * 20.0 + 50.0);
        let header = overlay.header.as_ref().unwrap();
        assert_eq!(header.label, "Select...");
        assert_eq!(header.bounds, Bounds::new(10.0, 150.0, 200.0, 50.0));
        // first row sits under the repeated anchor row
        assert_eq!(overlay.rows[0].bounds.y, 200.0);
        assert_eq!(dd.on_event(&press(20.0, 205.0), &mut host), Some(Msg::Selected(0)));
    }

    #[test]
    fn test_view_reflects_state() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(3);
        let closed = dd.view();
        assert!(closed.overlay.is_none());
        assert!(closed.anchor.is_placeholder);

        dd.activate(&mut host).unwrap();
        let open = dd.view();
        assert!(open.anchor.open);
        assert_eq!(open.overlay.as_ref(), host.overlays().first().map(|e| &e.content));
    }

    #[test]
    fn test_huge_wheel_delta_clamps_to_last_page() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = enabled(20).config(
            DropdownConfig::default().row_height(20.0).max_visible_rows(5),
            &Theme::dark(),
        );
        dd.activate(&mut host).unwrap();

        dd.on_event(&Event::MouseScroll { delta: 3.0, position: (20.0, 160.0) }, &mut host);
        dd.on_event(&Event::MouseScroll { delta: 1.0e30, position: (20.0, 160.0) }, &mut host);
        assert!(dd.is_open());
        assert_eq!(dd.state().open_state().unwrap().scroll_offset, 15);

        dd.on_event(&Event::MouseScroll { delta: -1.0e30, position: (20.0, 160.0) }, &mut host);
        assert_eq!(dd.state().open_state().unwrap().scroll_offset, 0);

        dd.on_event(&Event::MouseScroll { delta: f32::INFINITY, position: (20.0, 160.0) }, &mut host);
        assert!(dd.is_open());
        assert_eq!(dd.state().open_state().unwrap().scroll_offset, 15);
        assert_eq!(host.overlays()[0].content.rows[0].label, "Item 15");

        dd.on_event(&Event::MouseScroll { delta: f32::NAN, position: (20.0, 160.0) }, &mut host);
        assert!(dd.is_open());
        assert_eq!(dd.state().open_state().unwrap().scroll_offset, 15);
    }

    #[test]
    fn test_drop_after_dispose_leaves_host_clean() {
        let mut host = host_with_anchor_at(100.0);
        {
            let mut dd = enabled(3);
            dd.activate(&mut host).unwrap();
            dd.dispose(&mut host);
        }
        assert_released(&host);
    }

    #[test]
    fn test_drop_while_open_keeps_host_entry() {
        let mut host = host_with_anchor_at(100.0);
        {
            let mut dd = enabled(3);
            dd.activate(&mut host).unwrap();
        }
        // Drop has no host to release into; the entry stays until the host clears it
        assert_eq!(host.overlays().len(), 1);
        assert_eq!(host.remove_count(), 0);
    }

    #[test]
    fn test_set_items_clears_stale_selection() {
        let mut host = host_with_anchor_at(100.0);
        let mut dd = Dropdown::new(ANCHOR, items(5), Some(4)).unwrap().on_select(Msg::Selected);
        dd.set_items(&mut host, items(2));
        assert_eq!(dd.selected(), None);
        dd.set_items(&mut host, items(5));
        assert_eq!(dd.selected(), None);
    }
}
