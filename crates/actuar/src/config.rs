//! Configuration loading.
//!
//! Suites usually keep timeouts and pacing in a YAML file next to the tests:
//!
//! ```yaml
//! webdriver_url: "http://localhost:4444"
//! timeouts:
//!   short_sec: 2.0
//!   medium_sec: 5.0
//!   long_sec: 10.0
//!   absurd_sec: 20.0
//! find_element_timeout_sec: 5.0
//! wait_for_condition_timeout_sec: 10.0
//! wait_between_sec: 0.5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::result::{ActuarError, ActuarResult};
use crate::timeout::Timeouts;

/// Tier durations in seconds, as written in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutsConfig {
    /// Short tier in seconds
    pub short_sec: f64,
    /// Medium tier in seconds
    pub medium_sec: f64,
    /// Long tier in seconds
    pub long_sec: f64,
    /// Absurd tier in seconds
    pub absurd_sec: f64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            short_sec: 2.0,
            medium_sec: 5.0,
            long_sec: 10.0,
            absurd_sec: 20.0,
        }
    }
}

/// Suite configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActuarConfig {
    /// WebDriver server URL, when the real backend is used
    pub webdriver_url: Option<String>,
    /// Tier durations
    pub timeouts: TimeoutsConfig,
    /// Default element lookup timeout in seconds
    pub find_element_timeout_sec: f64,
    /// Default condition wait timeout in seconds
    pub wait_for_condition_timeout_sec: f64,
    /// Pause between actions in seconds
    pub wait_between_sec: f64,
}

impl Default for ActuarConfig {
    fn default() -> Self {
        Self {
            webdriver_url: None,
            timeouts: TimeoutsConfig::default(),
            find_element_timeout_sec: 5.0,
            wait_for_condition_timeout_sec: 10.0,
            wait_between_sec: 0.5,
        }
    }
}

impl ActuarConfig {
    /// Parse a YAML document
    ///
    /// # Errors
    ///
    /// Returns [`ActuarError::Config`] on malformed YAML.
    pub fn from_yaml_str(yaml: &str) -> ActuarResult<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| ActuarError::Config {
            message: e.to_string(),
        })
    }

    /// Load from a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`ActuarError::Io`] if the file cannot be read and
    /// [`ActuarError::Config`] on malformed YAML.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ActuarResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Typed tier table for the finder
    #[must_use]
    pub fn timeouts(&self) -> Timeouts {
        Timeouts::new()
            .with_short(Duration::from_secs_f64(self.timeouts.short_sec.max(0.0)))
            .with_medium(Duration::from_secs_f64(self.timeouts.medium_sec.max(0.0)))
            .with_long(Duration::from_secs_f64(self.timeouts.long_sec.max(0.0)))
            .with_absurd(Duration::from_secs_f64(self.timeouts.absurd_sec.max(0.0)))
            .with_default(Duration::from_secs_f64(
                self.find_element_timeout_sec.max(0.0),
            ))
    }

    /// Default condition wait timeout
    #[must_use]
    pub fn wait_for_condition_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.wait_for_condition_timeout_sec.max(0.0))
    }

    /// Pause between actions
    #[must_use]
    pub fn wait_between(&self) -> Duration {
        Duration::from_secs_f64(self.wait_between_sec.max(0.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::timeout::TimeoutTier;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ActuarConfig::default();
        assert_eq!(config.webdriver_url, None);
        assert_eq!(
            config.timeouts().duration_for(TimeoutTier::Absurd),
            Duration::from_secs(20)
        );
        assert_eq!(config.wait_between(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_full_document() {
        let config = ActuarConfig::from_yaml_str(
            r#"
webdriver_url: "http://localhost:4444"
timeouts:
  short_sec: 1.0
  medium_sec: 3.0
  long_sec: 8.0
  absurd_sec: 30.0
find_element_timeout_sec: 4.0
wait_for_condition_timeout_sec: 12.0
wait_between_sec: 0.25
"#,
        )
        .unwrap();
        assert_eq!(config.webdriver_url.as_deref(), Some("http://localhost:4444"));
        let timeouts = config.timeouts();
        assert_eq!(
            timeouts.duration_for(TimeoutTier::Short),
            Duration::from_secs(1)
        );
        assert_eq!(timeouts.default_duration(), Duration::from_secs(4));
        assert_eq!(
            config.wait_for_condition_timeout(),
            Duration::from_secs(12)
        );
        assert_eq!(config.wait_between(), Duration::from_millis(250));
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = ActuarConfig::from_yaml_str("wait_between_sec: 0.0\n").unwrap();
        assert_eq!(config.wait_between(), Duration::ZERO);
        assert_eq!(
            config.timeouts().duration_for(TimeoutTier::Medium),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let err = ActuarConfig::from_yaml_str("timeouts: [not, a, map]").unwrap_err();
        assert!(matches!(err, ActuarError::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "find_element_timeout_sec: 7.0").unwrap();
        let config = ActuarConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(
            config.timeouts().default_duration(),
            Duration::from_secs(7)
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ActuarConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ActuarError::Io(_)));
    }
}
