//! Configuration management for `sbom_index`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides
//! 2. Environment variables (`SBOM_INDEX_*`)
//! 3. Project config (`./.sbom-index.yaml`)
//! 4. User config (`~/.config/sbom-index/config.yaml`)
//! 5. Defaults

use crate::error::{Result, SbomError};
use crate::storage::SqliteStorage;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default database filename, relative to the working directory.
pub const DEFAULT_DB_FILENAME: &str = "sbom.db";
/// Project config filename looked up in the working directory.
pub const PROJECT_CONFIG_FILENAME: &str = ".sbom-index.yaml";
/// Prefix for environment overrides, e.g. `SBOM_INDEX_DB`.
pub const ENV_PREFIX: &str = "SBOM_INDEX_";

const DB_KEY: &str = "db";
const JSON_KEY: &str = "json";

/// A flat key/value configuration layer with normalized keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub values: HashMap<String, String>,
}

impl ConfigLayer {
    /// Merge another layer on top of this one (higher precedence wins).
    pub fn merge_from(&mut self, other: &Self) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Merge multiple layers in precedence order (lowest to highest).
    #[must_use]
    pub fn merge_layers(layers: &[Self]) -> Self {
        let mut merged = Self::default();
        for layer in layers {
            merged.merge_from(layer);
        }
        merged
    }

    /// Build a layer from a YAML file path. Missing files return empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&contents)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(layer_from_yaml_value(&value))
    }

    /// Build a layer from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_vars(env::vars())
    }

    /// Build a layer from `SBOM_INDEX_*` entries of the given variables.
    #[must_use]
    pub fn from_env_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut layer = Self::default();
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
                if !stripped.is_empty() {
                    layer.insert(stripped, value);
                }
            }
        }
        layer
    }

    /// Look up a value by key (normalized before lookup).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.values.get(&normalize_key(key))
    }

    pub fn insert(&mut self, key: &str, value: String) {
        self.values.insert(normalize_key(key), value);
    }
}

/// CLI overrides for config loading (optional).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db: Option<PathBuf>,
    pub json: Option<bool>,
}

impl CliOverrides {
    #[must_use]
    pub fn as_layer(&self) -> ConfigLayer {
        let mut layer = ConfigLayer::default();

        if let Some(path) = &self.db {
            layer.insert(DB_KEY, path.to_string_lossy().to_string());
        }
        if let Some(json) = self.json {
            layer.insert(JSON_KEY, json.to_string());
        }

        layer
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub json: bool,
}

impl Settings {
    /// Resolve settings from a merged layer.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but malformed.
    pub fn from_layer(layer: &ConfigLayer) -> Result<Self> {
        let db_path = layer
            .get(DB_KEY)
            .map(String::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DB_FILENAME), PathBuf::from);

        let json = match layer.get(JSON_KEY) {
            Some(value) => parse_bool(value).ok_or_else(|| {
                SbomError::Config(format!("invalid boolean for {JSON_KEY}: {value:?}"))
            })?,
            None => false,
        };

        Ok(Self { db_path, json })
    }
}

/// Load project config from `dir`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(dir: &Path) -> Result<ConfigLayer> {
    ConfigLayer::from_yaml(&dir.join(PROJECT_CONFIG_FILENAME))
}

/// Load user config (~/.config/sbom-index/config.yaml).
///
/// Without `HOME` there is no user config and an empty layer is returned.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<ConfigLayer> {
    let Ok(home) = env::var("HOME") else {
        return Ok(ConfigLayer::default());
    };
    let path = Path::new(&home)
        .join(".config")
        .join("sbom-index")
        .join("config.yaml");
    ConfigLayer::from_yaml(&path)
}

/// Default config layer (lowest precedence).
#[must_use]
pub fn default_config_layer() -> ConfigLayer {
    let mut layer = ConfigLayer::default();
    layer.insert(DB_KEY, DEFAULT_DB_FILENAME.to_string());
    layer.insert(JSON_KEY, "false".to_string());
    layer
}

/// Load configuration in precedence order and resolve it into [`Settings`].
///
/// # Errors
///
/// Returns an error if any config file cannot be read or parsed, or a value is malformed.
pub fn load_settings(project_dir: &Path, cli: &CliOverrides) -> Result<Settings> {
    let merged = ConfigLayer::merge_layers(&[
        default_config_layer(),
        load_user_config()?,
        load_project_config(project_dir)?,
        ConfigLayer::from_env(),
        cli.as_layer(),
    ]);
    let settings = Settings::from_layer(&merged)?;
    debug!(db = %settings.db_path.display(), json = settings.json, "Resolved settings");
    Ok(settings)
}

/// Open storage at the configured database path. The schema is created if absent.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or initialized.
pub fn open_storage(settings: &Settings) -> Result<SqliteStorage> {
    SqliteStorage::open(&settings.db_path)
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn layer_from_yaml_value(value: &serde_yaml::Value) -> ConfigLayer {
    let mut layer = ConfigLayer::default();
    let mut flat = HashMap::new();
    flatten_yaml(value, "", &mut flat);

    for (key, value) in flat {
        layer.insert(&key, value);
    }

    layer
}

fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, out: &mut HashMap<String, String>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, value) in map {
                let Some(key_str) = key.as_str() else {
                    continue;
                };
                let next_prefix = if prefix.is_empty() {
                    key_str.to_string()
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml(value, &next_prefix, out);
            }
        }
        serde_yaml::Value::Sequence(values) => {
            let joined = values
                .iter()
                .filter_map(yaml_scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.insert(prefix.to_string(), joined);
        }
        _ => {
            if let Some(value) = yaml_scalar_to_string(value) {
                out.insert(prefix.to_string(), value);
            }
        }
    }
}

fn yaml_scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Bool(v) => Some(v.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Null
        | serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Mapping(_) => None,
        serde_yaml::Value::Tagged(tagged) => yaml_scalar_to_string(&tagged.value),
    }
}
