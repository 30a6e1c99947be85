//! Configuration file support for the droplist demo.
//!
//! A `DemoConfig` describes one headless session: the viewport, where the
//! anchor sits, the items, the dropdown configuration and a script of input
//! steps to replay. It is stored as JSON.

use std::path::Path;

use droplist_ui::{Bounds, DropdownConfig, ThemeChoice};
use serde::{Deserialize, Serialize};

use crate::session::{ScriptKey, ScriptStep};

/// Log level setting for the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// A headless demo session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Logging verbosity
    #[serde(default)]
    pub log_level: LogLevel,

    /// Viewport height the host reports
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,

    /// Where the anchor is laid out
    #[serde(default = "default_anchor")]
    pub anchor: Bounds,

    /// Items in the list
    #[serde(default = "default_items")]
    pub items: Vec<String>,

    /// Initially selected item
    #[serde(default)]
    pub selected: Option<usize>,

    /// Color palette
    #[serde(default)]
    pub theme: ThemeChoice,

    /// Dropdown appearance and behavior
    #[serde(default)]
    pub dropdown: DropdownConfig,

    /// Input steps to replay
    #[serde(default = "default_script")]
    pub script: Vec<ScriptStep>,
}

fn default_viewport_height() -> f32 {
    600.0
}

fn default_anchor() -> Bounds {
    Bounds::new(24.0, 480.0, 200.0, 32.0)
}

fn default_items() -> Vec<String> {
    ["Normal", "Multiply", "Screen", "Overlay", "Darken", "Lighten"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::Focus,
        ScriptStep::PressAnchor,
        ScriptStep::Key { key: ScriptKey::Down },
        ScriptStep::Key { key: ScriptKey::Down },
        ScriptStep::Key { key: ScriptKey::Enter },
        ScriptStep::MoveAnchor { x: 24.0, y: 40.0 },
        ScriptStep::PressAnchor,
        ScriptStep::Key { key: ScriptKey::Escape },
        ScriptStep::Blur,
    ]
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            viewport_height: default_viewport_height(),
            anchor: default_anchor(),
            items: default_items(),
            selected: None,
            theme: ThemeChoice::default(),
            dropdown: DropdownConfig::default(),
            script: default_script(),
        }
    }
}

impl DemoConfig {
    /// Serialize configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON, rejecting newer format versions.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get the default config file name.
    pub fn default_filename() -> &'static str {
        "droplist.json"
    }

    /// Get the default config file path (platform-specific config directory).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|p| p.join("droplist").join(Self::default_filename()))
    }

    /// Load configuration from the default path, if present and valid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load configuration from {:?}: {}", path, e);
                None
            }
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let config = DemoConfig::default();
        let json = config.to_json().unwrap();
        let parsed = DemoConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let parsed = DemoConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(parsed.viewport_height, 600.0);
        assert_eq!(parsed.items.len(), 6);
        assert_eq!(parsed.log_level, LogLevel::Info);
        assert_eq!(parsed.script, default_script());
    }

    #[test]
    fn test_newer_version_rejected() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        match DemoConfig::from_json(&json) {
            Err(ConfigError::VersionTooNew {
                file_version,
                supported_version,
            }) => {
                assert_eq!(file_version, CONFIG_VERSION + 1);
                assert_eq!(supported_version, CONFIG_VERSION);
            }
            other => panic!("expected VersionTooNew, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            DemoConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_script_steps_parse() {
        let json = r#"{
            "version": 1,
            "log_level": "debug",
            "theme": "light",
            "dropdown": { "max_visible_rows": 3 },
            "script": [
                { "action": "press_anchor" },
                { "action": "key", "key": "down" },
                { "action": "press", "x": 30.0, "y": 40.0 },
                { "action": "resize", "viewport_height": 300.0 }
            ]
        }"#;
        let parsed = DemoConfig::from_json(json).unwrap();
        assert_eq!(parsed.log_level.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(parsed.theme, ThemeChoice::Light);
        assert_eq!(parsed.dropdown.max_visible_rows, Some(3));
        assert_eq!(
            parsed.script,
            vec![
                ScriptStep::PressAnchor,
                ScriptStep::Key { key: ScriptKey::Down },
                ScriptStep::Press { x: 30.0, y: 40.0 },
                ScriptStep::Resize { viewport_height: 300.0 },
            ]
        );
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("droplist-test-{}", std::process::id()))
            .join(DemoConfig::default_filename());
        let config = DemoConfig {
            selected: Some(2),
            ..DemoConfig::default()
        };
        config.save(&path).unwrap();
        let loaded = DemoConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
