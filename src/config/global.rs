use crate::config::schema::GlobalConfig;
use crate::config::validation::validate_launcher_config;
use crate::core::error::Result;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tokio::fs;

const GLOBAL_CONFIG_FILE: &str = "config.toml";

pub struct GlobalConfigManager {
    config_path: PathBuf,
}

impl GlobalConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: Self::get_config_dir().join(GLOBAL_CONFIG_FILE),
        }
    }

    /// Use an explicit config file instead of the per-user default.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    fn get_config_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "homelab", "homelab") {
            proj_dirs.config_dir().to_path_buf()
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".homelab")
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Missing file yields the defaults; the file is optional.
    pub async fn load(&self) -> Result<GlobalConfig> {
        if !self.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: GlobalConfig = toml::from_str(&content)?;
        validate_launcher_config(&config.launcher)?;
        tracing::debug!(path = %self.config_path.display(), "loaded config");
        Ok(config)
    }
}

impl Default for GlobalConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
