//! Client Configuration
//!
//! JSON設定ファイルの読み込みと上書き

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::adapter::http::client::DEFAULT_BASE_ADDRESS;
use crate::application::dto::session_config::SessionConfig;
use crate::domain::entities::clarification::ClarificationPolicy;

/// Environment variable holding the drafting engine base address
pub const API_BASE_ENV: &str = "LFD_API_BASE";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the drafting engine
    pub base_address: String,

    /// Clarification policy sent with every refine
    pub policy: ClarificationPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
            policy: ClarificationPolicy::default(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む（`~` は展開）
    ///
    /// ファイルが存在しない場合は既定値を返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply base address overrides: flag first, then environment
    pub fn with_base_address_override(
        mut self,
        flag: Option<&str>,
        env: Option<String>,
    ) -> Self {
        if let Some(base) = flag.map(str::to_string).or(env) {
            let base = base.trim();
            if !base.is_empty() {
                self.base_address = base.to_string();
            }
        }
        self
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let config = Config::load(&path.to_string_lossy()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.base_address, "http://localhost:8000");
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "base_address": "https://lfd.example.com", "policy": { "max_questions": 5 } }"#,
        )
        .unwrap();

        let config = Config::load(&path.to_string_lossy()).unwrap();

        assert_eq!(config.base_address, "https://lfd.example.com");
        assert_eq!(config.policy.max_questions, 5);
        assert!(config.policy.allow_proceed_with_assumptions);
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = Config::load(&path.to_string_lossy());

        assert!(result.is_err());
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = Config::default().with_base_address_override(
            Some("http://flag:1"),
            Some("http://env:2".to_string()),
        );
        assert_eq!(config.base_address, "http://flag:1");
    }

    #[test]
    fn test_env_overrides_file() {
        let config =
            Config::default().with_base_address_override(None, Some("http://env:2".to_string()));
        assert_eq!(config.base_address, "http://env:2");
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = Config::default().with_base_address_override(None, Some("  ".to_string()));
        assert_eq!(config.base_address, DEFAULT_BASE_ADDRESS);
    }

    #[test]
    fn test_session_config_carries_policy() {
        let config = Config {
            policy: ClarificationPolicy {
                max_questions: 2,
                allow_proceed_with_assumptions: false,
            },
            ..Config::default()
        };

        assert_eq!(config.session_config().policy.max_questions, 2);
    }
}
