use crate::{ConfigError, FromEnv};
use std::env;

/// Origins accepted when `CORS_ALLOWED_ORIGIN` is not set
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5500",
    "http://127.0.0.1:5500",
    "http://localhost:3001",
];

/// Cross-origin allow-list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS)
    }
}

impl FromEnv for CorsConfig {
    /// Reads comma-separated `CORS_ALLOWED_ORIGIN`.
    ///
    /// Unset falls back to [`DEFAULT_ALLOWED_ORIGINS`]; set but empty is an error.
    fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = env::var("CORS_ALLOWED_ORIGIN") else {
            return Ok(Self::default());
        };

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self {
            allowed_origins: origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_defaults_when_unset() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config, CorsConfig::default());
            assert!(config.is_allowed("http://localhost:5500"));
            assert!(!config.is_allowed("http://evil.example"));
        });
    }

    #[test]
    fn test_cors_config_parses_comma_separated_list() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some(" http://a.test , https://b.test,,"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["http://a.test".to_string(), "https://b.test".to_string()]
                );
            },
        );
    }

    #[test]
    fn test_cors_config_rejects_empty_list() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }
}
