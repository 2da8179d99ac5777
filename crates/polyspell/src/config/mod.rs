//! Settings and the configuration source the dictionary set reads from.

pub mod watcher;

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use polyspell_core::LanguageCode;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

pub use watcher::{WatchError, watch_config_file};

/// Key of the desired language list. The only key the set reacts to.
pub const SELECTED_DICTIONARIES: &str = "selected_dictionaries";

/// Key of the dictionary search directories.
pub const DICTIONARY_DIRS: &str = "dictionary_dirs";

pub const STARTUP_DELAY_MS: &str = "startup_delay_ms";

pub const MAX_SUGGESTIONS: &str = "max_suggestions";

const CHANGE_CHANNEL_CAPACITY: usize = 32;

/// Notification that one configuration key changed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChange {
    pub key: String,
}

impl ConfigChange {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Source of the desired dictionary list.
pub trait ConfigSource: Send + Sync {
    /// Current desired language codes. May contain duplicates.
    fn selected_dictionaries(&self) -> Vec<LanguageCode>;

    /// Receive a [`ConfigChange`] for every key that changes from now on.
    fn subscribe(&self) -> broadcast::Receiver<ConfigChange>;
}

/// Persisted settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub selected_dictionaries: Vec<LanguageCode>,
    pub dictionary_dirs: Vec<PathBuf>,
    /// Grace period before the first reload after startup.
    pub startup_delay_ms: u64,
    pub max_suggestions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_dictionaries: Vec::new(),
            dictionary_dirs: Vec::new(),
            startup_delay_ms: 1000,
            max_suggestions: crate::wordlist::DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Keys whose values differ between `self` and `other`.
    fn changed_keys(&self, other: &Settings) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.selected_dictionaries != other.selected_dictionaries {
            keys.push(SELECTED_DICTIONARIES);
        }
        if self.dictionary_dirs != other.dictionary_dirs {
            keys.push(DICTIONARY_DIRS);
        }
        if self.startup_delay_ms != other.startup_delay_ms {
            keys.push(STARTUP_DELAY_MS);
        }
        if self.max_suggestions != other.max_suggestions {
            keys.push(MAX_SUGGESTIONS);
        }
        keys
    }
}

/// In-memory [`ConfigSource`] that broadcasts a change per modified key.
pub struct MemoryConfig {
    settings: RwLock<Settings>,
    changes: broadcast::Sender<ConfigChange>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl MemoryConfig {
    pub fn new(settings: Settings) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            settings: RwLock::new(settings),
            changes,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    pub fn set_selected_dictionaries(&self, codes: Vec<LanguageCode>) {
        self.update(|s| s.selected_dictionaries = codes);
    }

    pub fn set_dictionary_dirs(&self, dirs: Vec<PathBuf>) {
        self.update(|s| s.dictionary_dirs = dirs);
    }

    /// Replace all settings at once.
    pub fn replace(&self, settings: Settings) {
        self.update(|s| *s = settings);
    }

    /// Re-read `path` and apply it. On error the current settings stay.
    pub fn reload_from_file(&self, path: &Path) -> Result<(), ConfigError> {
        let settings = Settings::load(path)?;
        self.replace(settings);
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Settings)) {
        let changed = {
            let mut settings = self.settings.write();
            let before = settings.clone();
            apply(&mut settings);
            before.changed_keys(&settings)
        };
        for key in changed {
            tracing::debug!(key, "config changed");
            // No subscribers is fine.
            let _ = self.changes.send(ConfigChange::new(key));
        }
    }
}

impl ConfigSource for MemoryConfig {
    fn selected_dictionaries(&self) -> Vec<LanguageCode> {
        self.settings.read().selected_dictionaries.clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<ConfigChange> {
        self.changes.subscribe()
    }
}
