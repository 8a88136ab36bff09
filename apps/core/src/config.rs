use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::groups::{GROUP_APP, GROUP_FILE, GROUP_FOLDER};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "config io error: {error}"),
            Self::Parse(error) => write!(f, "config parse error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub preview_limit: u8,
    pub group_order: Vec<String>,
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let base = std::env::temp_dir().join("glance");
        Self {
            preview_limit: 5,
            group_order: default_group_order(),
            config_path: base.join("config.toml"),
        }
    }
}

pub fn default_group_order() -> Vec<String> {
    vec![
        GROUP_APP.to_string(),
        GROUP_FOLDER.to_string(),
        GROUP_FILE.to_string(),
    ]
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if !(1..=25).contains(&cfg.preview_limit) {
        return Err("preview_limit out of range".into());
    }

    if cfg.group_order.is_empty() {
        return Err("group_order must name at least one group".into());
    }

    if cfg.group_order.iter().any(|class| class.trim().is_empty()) {
        return Err("group_order entries must be non-empty".into());
    }

    if cfg.config_path.as_os_str().is_empty() {
        return Err("config_path is required".into());
    }

    Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    preview_limit: Option<u8>,
    group_order: Option<Vec<String>>,
}

/// Loads the config file at `path` (or the default location), applying it
/// over defaults. A missing file yields the default config. `.json`/`.json5`
/// files are parsed as JSON5, anything else as TOML.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    if let Some(path) = path {
        config.config_path = path.to_path_buf();
    }

    if config.config_path.exists() {
        let raw = fs::read_to_string(&config.config_path)?;
        let file = parse_config_file(&config.config_path, &raw)?;
        if let Some(limit) = file.preview_limit {
            config.preview_limit = limit;
        }
        if let Some(order) = file.group_order {
            config.group_order = order;
        }
    }

    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

fn parse_config_file(path: &Path, raw: &str) -> Result<ConfigFile, ConfigError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json") || ext.eq_ignore_ascii_case("json5"))
        .unwrap_or(false);

    if is_json {
        json5::from_str(raw).map_err(|error| ConfigError::Parse(error.to_string()))
    } else {
        toml::from_str(raw).map_err(|error| ConfigError::Parse(error.to_string()))
    }
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    validate(config).map_err(ConfigError::Invalid)?;

    let file = ConfigFile {
        preview_limit: Some(config.preview_limit),
        group_order: Some(config.group_order.clone()),
    };
    let rendered =
        toml::to_string_pretty(&file).map_err(|error| ConfigError::Parse(error.to_string()))?;

    if let Some(parent) = config.config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config.config_path, rendered)?;
    Ok(())
}
