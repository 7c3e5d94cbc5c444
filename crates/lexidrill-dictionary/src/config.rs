//! Trainer configuration and dictionary factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lexidrill_core::traits::Dictionary;

use crate::tianapi::TianapiDictionary;

/// Configuration for the remote dictionary.
///
/// Note: Custom Debug impl masks the API key to prevent accidental
/// exposure in logs.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// tianapi API key. Empty means "not configured"; lookups will fail
    /// with an API error, every offline menu path still works.
    #[serde(default)]
    pub api_key: String,
    /// Endpoint override, mainly for tests.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl std::fmt::Debug for DictionaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Where the word database lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path. Defaults to `vocabulary.db` next to the
    /// executable.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Top-level lexidrill configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainerConfig {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl TrainerConfig {
    /// The database path to use: configured value, or the default next to
    /// the running executable.
    pub fn database_path(&self) -> PathBuf {
        self.database
            .path
            .clone()
            .unwrap_or_else(default_db_path)
    }
}

/// `vocabulary.db` alongside the running executable, falling back to the
/// working directory when the executable path is unavailable.
pub fn default_db_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocabulary.db")
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Apply `LEXIDRILL_API_KEY` / `LEXIDRILL_DB` overrides and resolve
/// `${VAR}` placeholders left in the file values.
fn apply_env(config: &mut TrainerConfig) {
    if let Ok(key) = std::env::var("LEXIDRILL_API_KEY") {
        config.dictionary.api_key = key;
    }
    if let Ok(db) = std::env::var("LEXIDRILL_DB") {
        config.database.path = Some(PathBuf::from(db));
    }

    config.dictionary.api_key = resolve_env_vars(&config.dictionary.api_key);
    config.dictionary.base_url = config
        .dictionary
        .base_url
        .as_ref()
        .map(|u| resolve_env_vars(u));
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `lexidrill.toml` in the current directory
/// 2. `~/.config/lexidrill/config.toml`
///
/// Environment variable overrides: `LEXIDRILL_API_KEY`, `LEXIDRILL_DB`.
pub fn load_config() -> Result<TrainerConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TrainerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("lexidrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<TrainerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TrainerConfig::default(),
    };

    apply_env(&mut config);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("lexidrill"))
}

/// Create the dictionary client from its configuration.
pub fn create_dictionary(config: &DictionaryConfig) -> Arc<dyn Dictionary> {
    Arc::new(TianapiDictionary::new(
        &config.api_key,
        config.base_url.clone(),
    ))
}
