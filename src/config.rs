// Runtime configuration: where the API lives, which key to send, and where
// the food log is kept. Everything comes from the environment so the binary
// has no config file of its own.

use crate::error::{FoodError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const LOG_FILE_NAME: &str = "food_log.jsonl";

const API_KEY_VAR: &str = "USDA_API_KEY";
const API_URL_VAR: &str = "FOOD_CLI_API_URL";
const DATA_DIR_VAR: &str = "FOOD_CLI_DATA_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
    /// Fallback location for the API key when the env var is unset.
    pub key_file: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from `FOOD_CLI_API_URL`, `FOOD_CLI_DATA_DIR`
    /// and the user's home/data directories.
    pub fn from_env() -> Self {
        let api_url = non_empty_var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.into());
        let data_dir = non_empty_var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let key_file = dirs::home_dir().map(|home| home.join("pa").join("usda"));
        debug!(%api_url, data_dir = %data_dir.display(), "loaded configuration");
        Config {
            api_url,
            data_dir,
            key_file,
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    /// Resolve the API key: the environment variable wins, then the key file.
    /// Only commands that hit the network call this.
    pub fn api_key(&self) -> Result<String> {
        if let Some(key) = non_empty_var(API_KEY_VAR) {
            return Ok(key);
        }
        match &self.key_file {
            Some(path) => read_key_file(path),
            None => Err(FoodError::MissingApiKey),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("food-cli")
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_key_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(FoodError::MissingApiKey);
    }
    let key = std::fs::read_to_string(path)?.trim().to_string();
    if key.is_empty() {
        return Err(FoodError::MissingApiKey);
    }
    debug!(path = %path.display(), "read API key from file");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_file_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usda");
        std::fs::write(&path, "  abc123\n").unwrap();
        assert_eq!(read_key_file(&path).unwrap(), "abc123");
    }

    #[test]
    fn missing_or_blank_key_file_is_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usda");
        assert!(matches!(read_key_file(&path), Err(FoodError::MissingApiKey)));

        std::fs::write(&path, "\n  \n").unwrap();
        assert!(matches!(read_key_file(&path), Err(FoodError::MissingApiKey)));
    }

    #[test]
    fn log_path_lives_in_data_dir() {
        let config = Config {
            api_url: DEFAULT_API_URL.into(),
            data_dir: PathBuf::from("/tmp/food"),
            key_file: None,
        };
        assert_eq!(config.log_path(), PathBuf::from("/tmp/food/food_log.jsonl"));
    }
}
