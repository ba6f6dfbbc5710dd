//! Serializable scenario configuration files.
//!
//! A scenario file is a TOML document with an optional top-level `label`
//! and a `[scenario]` table holding the five input knobs:
//!
//! ```toml
//! label = "steady state"
//!
//! [scenario]
//! users = 3200
//! data_tb = 22
//! resilience = "balanced"
//! failure = "none"
//! dr_mode = "warm"
//! ```
//!
//! Files are validated on load: unknown mode tokens fail in parsing, and
//! out-of-range numeric knobs are rejected before any evaluation runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use archlab_core::domain::{InputRangeError, ScenarioInputs};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    /// Optional human label carried into reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub scenario: ScenarioInputs,
}

impl ScenarioConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.scenario.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Range(#[from] InputRangeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use archlab_core::domain::{DrMode, FailureMode, ResilienceMode};

    const SAMPLE: &str = r#"
label = "launch rehearsal"

[scenario]
users = 9200
data_tb = 36
resilience = "balanced"
failure = "none"
dr_mode = "warm"
"#;

    #[test]
    fn test_parse_full_file() {
        let config = ScenarioConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.label.as_deref(), Some("launch rehearsal"));
        assert_eq!(config.scenario.users, 9200);
        assert_eq!(config.scenario.data_tb, 36);
        assert_eq!(config.scenario.resilience, ResilienceMode::Balanced);
        assert_eq!(config.scenario.failure, FailureMode::None);
        assert_eq!(config.scenario.dr_mode, DrMode::Warm);
    }

    #[test]
    fn test_label_is_optional() {
        let text = r#"
[scenario]
users = 400
data_tb = 2
resilience = "cost"
failure = "az"
dr_mode = "cold"
"#;
        let config = ScenarioConfig::from_toml(text).unwrap();
        assert!(config.label.is_none());
        assert_eq!(config.scenario.failure, FailureMode::Az);
    }

    #[test]
    fn test_unknown_mode_token_fails_in_parsing() {
        let text = SAMPLE.replace("\"balanced\"", "\"extreme\"");
        let err = ScenarioConfig::from_toml(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_knob_fails_in_parsing() {
        let text = SAMPLE.replace("data_tb = 36\n", "");
        assert!(matches!(
            ScenarioConfig::from_toml(&text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_knob_is_rejected() {
        let text = SAMPLE.replace("users = 9200", "users = 90000");
        let err = ScenarioConfig::from_toml(&text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Range(InputRangeError::Users(90000))
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ScenarioConfig::from_toml(SAMPLE).unwrap();
        let text = toml::to_string(&config).unwrap();
        let reparsed = ScenarioConfig::from_toml(&text).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_from_file_reports_the_path() {
        let err = ScenarioConfig::from_file(Path::new("/nonexistent/scenario.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scenario.toml"));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let config = ScenarioConfig::from_file(&path).unwrap();
        assert_eq!(config.scenario.users, 9200);
    }
}
