//! Service configuration.
//!
//! Loaded from an optional JSON file, then overridden by environment
//! variables. Every collaborator is optional: without an analysis endpoint
//! the service serves baseline budgets, without a voice endpoint the
//! transcribe endpoint reports unsupported, and without a JWT secret the
//! feedback endpoints are disabled.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_addr: String,
    pub database_path: PathBuf,
    /// HS256 secret shared with the authentication collaborator.
    pub jwt_secret: Option<String>,
    /// Text-analysis collaborator for feedback-driven adjustments.
    pub analysis: Option<EndpointConfig>,
    /// Speech-to-text collaborator for voice field entry.
    pub voice: Option<EndpointConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            database_path: PathBuf::from("campus_budget.db"),
            jwt_secret: None,
            analysis: None,
            voice: None,
        }
    }
}

impl Config {
    /// Load configuration from `path` (if given and present), then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(p) if p.exists() => {
                let contents = std::fs::read_to_string(p)?;
                serde_json::from_str(&contents)?
            }
            _ => Config::default(),
        };

        if let Ok(v) = std::env::var("CAMPUS_BUDGET_BIND") {
            if !v.is_empty() {
                config.bind_addr = v;
            }
        }
        if let Ok(v) = std::env::var("CAMPUS_BUDGET_DB") {
            if !v.is_empty() {
                config.database_path = PathBuf::from(v);
            }
        }
        if let Ok(v) = std::env::var("CAMPUS_BUDGET_JWT_SECRET") {
            if !v.is_empty() {
                config.jwt_secret = Some(v);
            }
        }
        if let Ok(endpoint) = std::env::var("CAMPUS_BUDGET_ANALYSIS_URL") {
            if !endpoint.is_empty() {
                config.analysis = Some(EndpointConfig {
                    endpoint,
                    api_key: std::env::var("CAMPUS_BUDGET_ANALYSIS_KEY").ok(),
                });
            }
        }
        if let Ok(endpoint) = std::env::var("CAMPUS_BUDGET_VOICE_URL") {
            if !endpoint.is_empty() {
                config.voice = Some(EndpointConfig {
                    endpoint,
                    api_key: std::env::var("CAMPUS_BUDGET_VOICE_KEY").ok(),
                });
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.jwt_secret.is_none());
        assert!(config.analysis.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "bind_addr": "127.0.0.1:8080",
                "jwt_secret": "s3cret",
                "analysis": {{"endpoint": "https://analysis.example/run", "api_key": "k"}}
            }}"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.jwt_secret.as_deref(), Some("s3cret"));
        let analysis = config.analysis.unwrap();
        assert_eq!(analysis.endpoint, "https://analysis.example/run");
        assert_eq!(analysis.api_key.as_deref(), Some("k"));
        // Unset sections stay at their defaults.
        assert_eq!(config.database_path, PathBuf::from("campus_budget.db"));
        assert!(config.voice.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/config.json"))).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }
}
