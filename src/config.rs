use crate::error::{CommonsError, Result};
use crate::table::{RenderOptions, TablePreset};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV_VAR: &str = "COMMONS_HOME";
const APP_DIR_NAME: &str = "commons";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommonsConfig {
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    #[serde(default)]
    pub preset: TablePreset,

    #[serde(default = "default_align_numbers")]
    pub align_numbers: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            preset: TablePreset::default(),
            align_numbers: default_align_numbers(),
        }
    }
}

fn default_align_numbers() -> bool {
    true
}

/// Directory holding `config.toml`: `$COMMONS_HOME` when set, otherwise the
/// platform configuration directory.
pub fn config_home() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV_VAR).filter(|home| !home.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| {
            CommonsError::ConfigError("Unable to determine the configuration directory".to_string())
        })
}

/// Loads the configuration from `explicit` when given, otherwise from
/// [`config_home`].
pub fn new_commons_config(explicit: Option<&Path>) -> Result<CommonsConfig> {
    match explicit {
        Some(path) => CommonsConfig::load_file(path),
        None => CommonsConfig::load(&config_home()?),
    }
}

impl CommonsConfig {
    pub fn load(commons_home: &Path) -> Result<Self> {
        Self::load_file(&commons_home.join(CONFIG_FILE_NAME))
    }

    pub fn load_file(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)?;
        let config: CommonsConfig = toml::from_str(&contents)
            .map_err(|e| CommonsError::ConfigError(format!("Failed to parse config.toml: {e}")))?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    pub fn save(&self, commons_home: &Path) -> Result<()> {
        let config_path = commons_home.join(CONFIG_FILE_NAME);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CommonsError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            preset: self.table.preset,
            align_numbers: self.table.align_numbers,
        }
    }
}
