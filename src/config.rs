//! Configuration module for rowpick
//!
//! Declares the listings the CLI can open: where each one is fetched from,
//! how its selection behaves and which actions it offers. Configuration is
//! stored in the user's config directory.
//!
//! ```toml
//! default_listing = "files"
//! base_url = "http://localhost:8080/"
//!
//! [listings.files]
//! source = "/files/list"
//! sorted = true
//! selection = "ordered"
//! toggles = [{ name = "watched", active = true }]
//!
//! [[listings.files.actions]]
//! name = "play"
//! endpoint = "/files/play"
//! ```

use crate::filter::{FilterEngine, MatchStrategy};
use crate::remote::Transport;
use crate::selection::{RangeAnchor, SelectionMode, SelectionModel};
use crate::session::{ActionSpec, ListSession};
use crate::toggles::{ViewToggle, ViewToggleSet};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// The listing to open when none is specified
    #[serde(default)]
    pub default_listing: Option<String>,

    /// Base against which relative sources and endpoints are resolved
    #[serde(default)]
    pub base_url: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Map of listing names to their settings
    #[serde(default)]
    pub listings: BTreeMap<String, ListingConfig>,
}

/// Settings of one listing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    /// URL the listing fragment is fetched from
    pub source: String,

    /// Sort entries by kind, then label, on every refresh
    #[serde(default)]
    pub sorted: bool,

    #[serde(default)]
    pub selection: SelectionMode,

    #[serde(default)]
    pub range_anchor: RangeAnchor,

    #[serde(default)]
    pub matching: MatchStrategy,

    /// Filter quiet window in milliseconds (250-500)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub toggles: Vec<ViewToggle>,

    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

const fn default_debounce_ms() -> u64 {
    500
}

impl ListingConfig {
    /// A listing with default behavior and no actions
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            sorted: false,
            selection: SelectionMode::default(),
            range_anchor: RangeAnchor::default(),
            matching: MatchStrategy::default(),
            debounce_ms: default_debounce_ms(),
            toggles: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Look up an action by name
    #[must_use]
    pub fn action(&self, name: &str) -> Option<&ActionSpec> {
        self.actions.iter().find(|action| action.name == name)
    }

    /// Build an empty session for this listing
    pub fn session<T: Transport>(&self, transport: T) -> ListSession<T> {
        ListSession::new(transport, self.source.clone())
            .with_sorting(self.sorted)
            .with_selection(SelectionModel::new(self.selection, self.range_anchor))
            .with_filter(FilterEngine::new(
                self.matching,
                Duration::from_millis(self.debounce_ms),
            ))
            .with_toggles(ViewToggleSet::from_toggles(self.toggles.clone()))
    }
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("rowpick").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve a listing by name, falling back to the default listing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no name is given and no default is set, or if
    /// the listing does not exist.
    pub fn listing(&self, name: Option<&str>) -> Result<&ListingConfig, ConfigError> {
        let name = name
            .or(self.default_listing.as_deref())
            .ok_or_else(|| {
                ConfigError::Message("No listing given and no default_listing configured".into())
            })?;

        self.listings.get(name).ok_or_else(|| {
            ConfigError::Message(format!("Listing '{name}' does not exist in configuration"))
        })
    }
}
