//! Scripted headless sessions.
//!
//! A session lays out one anchor in a [`HeadlessHost`], builds a dropdown over
//! it and replays a list of input steps, collecting the messages the dropdown
//! emits and the placement chosen on every open.

use std::fmt;

use droplist_ui::{
    AnchorId, Bounds, Dropdown, DropdownError, Event, HeadlessHost, KeyCode, KeyModifiers, MouseButton,
    OverlayHost, Placement,
};
use serde::{Deserialize, Serialize};

use crate::config::DemoConfig;

/// Keys a script can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKey {
    Enter,
    Space,
    Escape,
    Tab,
    Up,
    Down,
    Home,
    End,
}

impl From<ScriptKey> for KeyCode {
    fn from(key: ScriptKey) -> Self {
        match key {
            ScriptKey::Enter => KeyCode::Enter,
            ScriptKey::Space => KeyCode::Space,
            ScriptKey::Escape => KeyCode::Escape,
            ScriptKey::Tab => KeyCode::Tab,
            ScriptKey::Up => KeyCode::Up,
            ScriptKey::Down => KeyCode::Down,
            ScriptKey::Home => KeyCode::Home,
            ScriptKey::End => KeyCode::End,
        }
    }
}

/// One scripted input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Give the anchor focus
    Focus,
    /// Take focus away
    Blur,
    /// Left press at the anchor's center
    PressAnchor,
    /// Left press at an absolute position
    Press { x: f32, y: f32 },
    /// Press anywhere in the window (outside-click detection)
    GlobalPress { x: f32, y: f32 },
    /// Pointer move
    Hover { x: f32, y: f32 },
    /// Wheel over the overlay if open, else over the anchor
    Scroll { delta: f32 },
    /// Key press
    Key { key: ScriptKey },
    /// Change the viewport height
    Resize { viewport_height: f32 },
    /// Move the anchor, keeping its size
    MoveAnchor { x: f32, y: f32 },
    /// Replace the item list
    SetItems { items: Vec<String> },
}

/// Messages the demo's dropdown emits.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoMessage {
    Selected(usize),
    Toggled(bool),
}

/// Errors that prevent a session from starting.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid dropdown setup: {0}")]
    Dropdown(#[from] DropdownError),
}

/// Outcome of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Every message emitted, in order
    pub messages: Vec<DemoMessage>,
    /// Placement chosen on each open
    pub placements: Vec<Placement>,
    /// Label of the final selection
    pub final_selection: Option<String>,
    /// Overlay entries still in the host stack
    pub live_overlays: usize,
    /// Removals the host rejected (double release)
    pub rejected_removals: usize,
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "opens: {}", self.placements.len())?;
        for (i, placement) in self.placements.iter().enumerate() {
            writeln!(f, "  open #{}: {:?}", i + 1, placement)?;
        }
        writeln!(f, "messages: {:?}", self.messages)?;
        writeln!(
            f,
            "selection: {}",
            self.final_selection.as_deref().unwrap_or("(none)")
        )?;
        write!(
            f,
            "overlays live: {}, rejected removals: {}",
            self.live_overlays, self.rejected_removals
        )
    }
}

/// A dropdown wired to a headless host.
pub struct Session {
    host: HeadlessHost,
    dropdown: Dropdown<DemoMessage>,
    messages: Vec<DemoMessage>,
    placements: Vec<Placement>,
}

impl Session {
    pub const ANCHOR: AnchorId = AnchorId(1);

    pub fn new(config: &DemoConfig) -> Result<Self, SessionError> {
        let mut host = HeadlessHost::new(config.viewport_height);
        host.place_anchor(Self::ANCHOR, config.anchor);

        let dropdown = Dropdown::new(Self::ANCHOR, config.items.clone(), config.selected)?
            .config(config.dropdown.clone(), &config.theme.theme())
            .on_select(DemoMessage::Selected)
            .on_toggle(DemoMessage::Toggled);

        Ok(Self {
            host,
            dropdown,
            messages: Vec::new(),
            placements: Vec::new(),
        })
    }

    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    pub fn dropdown(&self) -> &Dropdown<DemoMessage> {
        &self.dropdown
    }

    /// Apply one step.
    pub fn step(&mut self, step: &ScriptStep) {
        let was_open = self.dropdown.is_open();
        log::debug!("step {:?}", step);

        let message = match step {
            ScriptStep::Resize { viewport_height } => {
                self.host.set_viewport_height(*viewport_height);
                None
            }
            ScriptStep::MoveAnchor { x, y } => {
                if let Ok(bounds) = self.host.measure(Self::ANCHOR) {
                    let moved = Bounds::new(*x, *y, bounds.width, bounds.height);
                    self.host.place_anchor(Self::ANCHOR, moved);
                }
                None
            }
            ScriptStep::SetItems { items } => {
                self.dropdown.set_items(&mut self.host, items.clone());
                if was_open {
                    log::info!("item list replaced while open; overlay closed");
                }
                None
            }
            _ => match self.to_event(step) {
                Some(event) => self.dropdown.on_event(&event, &mut self.host),
                None => None,
            },
        };

        if let Some(message) = message {
            log::info!("message: {:?}", message);
            self.messages.push(message);
        }
        if !was_open {
            if let Some(placement) = self.dropdown.placement() {
                log::info!("opened {:?}", placement);
                self.placements.push(placement);
            }
        }
    }

    /// Replay every step, then release anything still open.
    pub fn run_script(&mut self, script: &[ScriptStep]) -> SessionReport {
        for step in script {
            self.step(step);
        }
        self.dropdown.dispose(&mut self.host);
        self.report()
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            messages: self.messages.clone(),
            placements: self.placements.clone(),
            final_selection: self.dropdown.selected_label().map(str::to_string),
            live_overlays: self.host.overlays().len(),
            rejected_removals: self.host.rejected_removals(),
        }
    }

    fn to_event(&self, step: &ScriptStep) -> Option<Event> {
        let event = match step {
            ScriptStep::Focus => Event::FocusGained,
            ScriptStep::Blur => Event::FocusLost,
            ScriptStep::PressAnchor => {
                let anchor = self.host.measure(Self::ANCHOR).ok()?;
                Event::MousePress {
                    button: MouseButton::Left,
                    position: (anchor.x + anchor.width / 2.0, anchor.y + anchor.height / 2.0),
                }
            }
            ScriptStep::Press { x, y } => Event::MousePress {
                button: MouseButton::Left,
                position: (*x, *y),
            },
            ScriptStep::GlobalPress { x, y } => Event::GlobalMousePress {
                button: MouseButton::Left,
                position: (*x, *y),
            },
            ScriptStep::Hover { x, y } => Event::MouseMove { position: (*x, *y) },
            ScriptStep::Scroll { delta } => {
                let target = match self.dropdown.state().open_state() {
                    Some(open) => open.overlay_bounds(),
                    None => self.host.measure(Self::ANCHOR).ok()?,
                };
                Event::MouseScroll {
                    delta: *delta,
                    position: (target.x + target.width / 2.0, target.y + target.height / 2.0),
                }
            }
            ScriptStep::Key { key } => Event::KeyPress {
                key: (*key).into(),
                modifiers: KeyModifiers::default(),
            },
            ScriptStep::Resize { .. } | ScriptStep::MoveAnchor { .. } | ScriptStep::SetItems { .. } => return None,
        };
        Some(event)
    }
}

/// Build a session from a config and replay its script.
pub fn run(config: &DemoConfig) -> Result<SessionReport, SessionError> {
    let mut session = Session::new(config)?;
    Ok(session.run_script(&config.script))
}
