use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gcg-hub");

        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            storage: StorageConfig { data_dir },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Storage(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.server.host.is_empty() {
            return Err(AppError::validation("Server host cannot be empty"));
        }
        if self.server.port == 0 {
            return Err(AppError::validation("Server port cannot be 0"));
        }
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(AppError::validation("Data directory cannot be empty"));
        }
        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Storage(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gcg-hub")
            .join("config.toml")
    }

    pub fn ensure_data_dir_exists(&self) -> AppResult<()> {
        std::fs::create_dir_all(&self.storage.data_dir).map_err(|e| AppError::Io(e.to_string()))?;
        Ok(())
    }

    /// Path of one entity collection file, e.g. `<data_dir>/divisi.json`.
    pub fn collection_path(&self, name: &str) -> PathBuf {
        self.storage.data_dir.join(format!("{}.json", name))
    }

    /// Path of the shared metadata slot file.
    pub fn metadata_path(&self) -> PathBuf {
        self.storage.data_dir.join("metadata.json")
    }
}
