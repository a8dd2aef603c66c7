use std::path::PathBuf;

use grainboard_db::models::project::ProjectDeletePolicy;
use grainboard_events::bus::DEFAULT_CAPACITY;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format for the binary's tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Dashboard configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local demo.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// JSON seed file. `None` loads the built-in fixtures.
    pub seed_path: Option<PathBuf>,
    /// What deleting a project does to its grains (default: cascade).
    pub project_delete_policy: ProjectDeletePolicy,
    /// Notification channel capacity (default: `1024`).
    pub notification_capacity: usize,
    /// Log output format (default: text).
    pub log_format: LogFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            project_delete_policy: ProjectDeletePolicy::default(),
            notification_capacity: DEFAULT_CAPACITY,
            log_format: LogFormat::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                            | Default            |
    /// |------------------------------------|--------------------|
    /// | `GRAINBOARD_SEED_PATH`             | built-in fixtures  |
    /// | `GRAINBOARD_PROJECT_DELETE_POLICY` | `cascade`          |
    /// | `GRAINBOARD_NOTIFICATION_CAPACITY` | `1024`             |
    /// | `GRAINBOARD_LOG_FORMAT`            | `text`             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_path = lookup("GRAINBOARD_SEED_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let project_delete_policy = match lookup("GRAINBOARD_PROJECT_DELETE_POLICY") {
            Some(raw) => {
                raw.parse::<ProjectDeletePolicy>()
                    .map_err(|e| ConfigError::Invalid {
                        var: "GRAINBOARD_PROJECT_DELETE_POLICY",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?
            }
            None => ProjectDeletePolicy::default(),
        };

        let notification_capacity = match lookup("GRAINBOARD_NOTIFICATION_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "GRAINBOARD_NOTIFICATION_CAPACITY",
                        value: raw,
                        reason: "must be a positive integer".into(),
                    })
                }
            },
            None => DEFAULT_CAPACITY,
        };

        let log_format = match lookup("GRAINBOARD_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "GRAINBOARD_LOG_FORMAT",
                    value: other.to_string(),
                    reason: "must be 'text' or 'json'".into(),
                })
            }
        };

        Ok(Self {
            seed_path,
            project_delete_policy,
            notification_capacity,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<DashboardConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.seed_path, None);
        assert_eq!(config.project_delete_policy, ProjectDeletePolicy::Cascade);
        assert_eq!(config.notification_capacity, 1024);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn default_matches_empty_environment() {
        assert_eq!(load(&[]).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("GRAINBOARD_SEED_PATH", "/tmp/seed.json"),
            ("GRAINBOARD_PROJECT_DELETE_POLICY", "restrict"),
            ("GRAINBOARD_NOTIFICATION_CAPACITY", "16"),
            ("GRAINBOARD_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.project_delete_policy, ProjectDeletePolicy::Restrict);
        assert_eq!(config.notification_capacity, 16);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_seed_path_means_fixtures() {
        let config = load(&[("GRAINBOARD_SEED_PATH", "  ")]).unwrap();
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = load(&[("GRAINBOARD_PROJECT_DELETE_POLICY", "orphan")]).unwrap_err();
        assert!(err.to_string().contains("GRAINBOARD_PROJECT_DELETE_POLICY"));
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(load(&[("GRAINBOARD_NOTIFICATION_CAPACITY", "0")]).is_err());
        assert!(load(&[("GRAINBOARD_NOTIFICATION_CAPACITY", "many")]).is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(load(&[("GRAINBOARD_LOG_FORMAT", "xml")]).is_err());
    }
}
