use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

pub const DEFAULT_CHECKBOX_VARIANTS: &str = " x-/<>?!*";
pub const DEFAULT_CALLOUT_SUGGESTIONS: &str = "note, abstract, info, todo, tip, success, question, warning, failure, danger, bug, example, quote";

/// User-facing switches for block selection and prefix replacement.
///
/// Every engine entry point takes this by reference; nothing reads settings
/// from global state. Missing keys in a config file fall back to [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Replace an existing list prefix when a different one is typed after it.
    pub replace_blocks: bool,
    /// Single-line block selection starts after the block prefix.
    pub select_block_avoids_prefixes: bool,
    /// A block selection that changes nothing falls back to the host's broader selection.
    pub select_all_if_unchanged: bool,
    /// A caret inside a fenced code block selects the whole block interior.
    pub select_full_code_block: bool,
    /// One character per checkbox suggestion.
    pub checkbox_variants: String,
    /// Comma separated callout names.
    pub callout_suggestions: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            replace_blocks: true,
            select_block_avoids_prefixes: true,
            select_all_if_unchanged: true,
            select_full_code_block: true,
            checkbox_variants: DEFAULT_CHECKBOX_VARIANTS.to_string(),
            callout_suggestions: DEFAULT_CALLOUT_SUGGESTIONS.to_string(),
        }
    }
}

impl Settings {
    /// Checkbox suggestion candidates, one per configured character.
    pub fn checkbox_candidates(&self) -> Vec<String> {
        self.checkbox_variants
            .chars()
            .map(|c| c.to_string())
            .collect()
    }

    /// Callout suggestion candidates, trimmed, blanks dropped.
    pub fn callout_candidates(&self) -> Vec<String> {
        self.callout_suggestions
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(settings))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads settings from `config_path` (after `~`/`$VAR` expansion), or the
    /// default location when `None`. A missing file yields the defaults.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match config_path {
            Some(path) => {
                let path = Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
                Self::load_from_path(&path)?
            }
            None => Self::load()?,
        };
        Ok(loaded.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blockwise");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
