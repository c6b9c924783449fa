//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Minimum password length accepted by the auth screens.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

/// Name shown on the completion screen when the user never typed one.
pub const DEFAULT_USER_NAME: &str = "Usuario";

/// Flow configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Minimum password length, in UTF-16 code units.
    pub min_password_len: usize,
    /// How long the splash screen stays up before handing off to welcome.
    pub splash_delay: Duration,
    /// Fallback display name for the completion greeting.
    pub default_user_name: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            splash_delay: Duration::from_millis(4000),
            default_user_name: DEFAULT_USER_NAME.to_string(),
        }
    }
}

impl FlowConfig {
    /// Build from `FINWELL_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("FINWELL_MIN_PASSWORD_LEN") {
            let len: usize = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "FINWELL_MIN_PASSWORD_LEN".to_string(),
                    message: format!("{e}"),
                })?;
            if len == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "FINWELL_MIN_PASSWORD_LEN".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
            config.min_password_len = len;
        }

        if let Some(raw) = lookup("FINWELL_SPLASH_DELAY_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "FINWELL_SPLASH_DELAY_MS".to_string(),
                    message: format!("{e}"),
                })?;
            config.splash_delay = Duration::from_millis(ms);
        }

        if let Some(name) = lookup("FINWELL_DEFAULT_USER_NAME") {
            let name = name.trim();
            if !name.is_empty() {
                config.default_user_name = name.to_string();
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = FlowConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, FlowConfig::default());
        assert_eq!(config.min_password_len, 6);
        assert_eq!(config.splash_delay, Duration::from_millis(4000));
        assert_eq!(config.default_user_name, "Usuario");
    }

    #[test]
    fn overrides_are_applied() {
        let config = FlowConfig::from_lookup(lookup_from(&[
            ("FINWELL_MIN_PASSWORD_LEN", "8"),
            ("FINWELL_SPLASH_DELAY_MS", " 1500 "),
            ("FINWELL_DEFAULT_USER_NAME", "Amiga"),
        ]))
        .unwrap();
        assert_eq!(config.min_password_len, 8);
        assert_eq!(config.splash_delay, Duration::from_millis(1500));
        assert_eq!(config.default_user_name, "Amiga");
    }

    #[test]
    fn blank_name_keeps_default() {
        let config =
            FlowConfig::from_lookup(lookup_from(&[("FINWELL_DEFAULT_USER_NAME", "  ")])).unwrap();
        assert_eq!(config.default_user_name, "Usuario");
    }

    #[test]
    fn rejects_bad_values() {
        let err = FlowConfig::from_lookup(lookup_from(&[("FINWELL_MIN_PASSWORD_LEN", "six")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "FINWELL_MIN_PASSWORD_LEN"));

        let err = FlowConfig::from_lookup(lookup_from(&[("FINWELL_MIN_PASSWORD_LEN", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("at least 1"));

        let err = FlowConfig::from_lookup(lookup_from(&[("FINWELL_SPLASH_DELAY_MS", "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
