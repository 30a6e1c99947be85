//! droplist - headless driver for the droplist dropdown
//!
//! Loads a JSON session description, lays out a dropdown in an in-memory host
//! and replays scripted input against it.

pub mod config;
pub mod session;

pub use config::{ConfigError, DemoConfig, LogLevel, CONFIG_VERSION};
pub use session::{run, DemoMessage, ScriptKey, ScriptStep, Session, SessionError, SessionReport};
