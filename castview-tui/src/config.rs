use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default aggregation API the client talks to.
pub const DEFAULT_SERVER_URL: &str = "https://api.neynar.com/v2/farcaster";

/// Application-wide fallback viewer fid, used for interaction counts when no
/// account is configured. Deliberately configurable rather than baked in.
pub const DEFAULT_VIEWER_FID: u64 = 1;

/// Settings stored locally in `~/.castview/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredConfig {
    pub server_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub viewer_fid: Option<u64>,
    pub last_updated: DateTime<Utc>,
}

impl Default for StoredConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_key: None,
            viewer_fid: None,
            last_updated: Utc::now(),
        }
    }
}

/// Configuration manager for the .castview directory
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager rooted at `~/.castview`.
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Could not determine home directory")?;
        Self::with_dir(home_dir.join(".castview"))
    }

    /// Create a config manager rooted at an explicit directory (tests).
    pub fn with_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create .castview directory")?;
        }
        Ok(Self { config_dir })
    }

    fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Load the stored configuration, if any.
    pub fn load(&self) -> Result<Option<StoredConfig>> {
        let path = self.config_file();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: StoredConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(Some(config))
    }

    /// Save the configuration, stamping the update time.
    pub fn save(&self, config: &StoredConfig) -> Result<()> {
        let mut config = config.clone();
        config.last_updated = Utc::now();

        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        fs::write(self.config_file(), json).context("Failed to write config file")?;
        Ok(())
    }

    /// Determine the server URL to use based on priority:
    /// 1. CLI argument (highest priority)
    /// 2. Environment variable CASTVIEW_SERVER_URL
    /// 3. Saved configuration file
    /// 4. Built-in default (lowest priority)
    pub fn determine_server_url(&self, cli_override: Option<String>) -> Result<String> {
        if let Some(url) = cli_override {
            return Ok(url);
        }

        if let Ok(url) = std::env::var("CASTVIEW_SERVER_URL") {
            return Ok(url);
        }

        if let Some(config) = self.load()? {
            return Ok(config.server_url);
        }

        Ok(DEFAULT_SERVER_URL.to_string())
    }

    /// Determine the viewer fid with the same priority chain. Falls back to
    /// the application-wide default when nothing is configured.
    pub fn determine_viewer_fid(&self, cli_override: Option<u64>) -> Result<u64> {
        if let Some(fid) = cli_override {
            return Ok(fid);
        }

        if let Ok(raw) = std::env::var("CASTVIEW_VIEWER_FID") {
            let fid = raw
                .parse()
                .with_context(|| format!("Invalid CASTVIEW_VIEWER_FID: {:?}", raw))?;
            return Ok(fid);
        }

        if let Some(config) = self.load()? {
            if let Some(fid) = config.viewer_fid {
                return Ok(fid);
            }
        }

        Ok(DEFAULT_VIEWER_FID)
    }

    /// API key: environment first, then the config file. Absent is fine;
    /// requests simply go out unauthenticated.
    pub fn determine_api_key(&self) -> Result<Option<String>> {
        if let Ok(key) = std::env::var("CASTVIEW_API_KEY") {
            if !key.is_empty() {
                return Ok(Some(key));
            }
        }

        Ok(self.load()?.and_then(|c| c.api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_dir(temp_dir.path().join("castview")).unwrap()
    }

    #[test]
    fn test_load_without_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);

        assert!(manager.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);

        let config = StoredConfig {
            server_url: "http://localhost:8080".to_string(),
            api_key: Some("secret".to_string()),
            viewer_fid: Some(42),
            last_updated: Utc::now(),
        };
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap().unwrap();
        assert_eq!(loaded.server_url, "http://localhost:8080");
        assert_eq!(loaded.api_key.as_deref(), Some("secret"));
        assert_eq!(loaded.viewer_fid, Some(42));
    }

    #[test]
    fn test_cli_override_beats_saved_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);

        manager
            .save(&StoredConfig {
                server_url: "http://saved:1".to_string(),
                ..Default::default()
            })
            .unwrap();

        let url = manager
            .determine_server_url(Some("http://cli:2".to_string()))
            .unwrap();
        assert_eq!(url, "http://cli:2");
    }

    #[test]
    fn test_viewer_fid_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);

        // No CLI value, no env var set for this key, no saved config
        std::env::remove_var("CASTVIEW_VIEWER_FID");
        let fid = manager.determine_viewer_fid(None).unwrap();
        assert_eq!(fid, DEFAULT_VIEWER_FID);
    }

    #[test]
    fn test_viewer_fid_prefers_saved_config_over_default() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);

        std::env::remove_var("CASTVIEW_VIEWER_FID");
        manager
            .save(&StoredConfig {
                viewer_fid: Some(7),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(manager.determine_viewer_fid(None).unwrap(), 7);
        assert_eq!(manager.determine_viewer_fid(Some(9)).unwrap(), 9);
    }
}
