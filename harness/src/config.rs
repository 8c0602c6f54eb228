//! Harness configuration.
//!
//! # Design
//! `HarnessConfig` is constructed once at startup and passed by reference —
//! there is no ambient global lookup. Precedence, later wins: built-in
//! defaults, then an optional TOML file (`HARNESS_CONFIG` path or
//! `harness.toml` in the working directory), then namespaced `PLAYER_API_*`
//! environment variables.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::HarnessError;

const DEFAULT_CONFIG_FILE: &str = "harness.toml";
const CONFIG_PATH_VAR: &str = "HARNESS_CONFIG";

/// Immutable harness configuration.
///
/// `retry_count` and `retry_delay_ms` are part of the configuration surface
/// but are deliberately not wired into the call path: a failed HTTP call is
/// fatal for its test and is never retried.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub retry_count: u32,
    pub retry_delay_ms: u64,
    pub thread_count: usize,
    pub environment: String,
    pub logging_enabled: bool,
    pub schema_validation_enabled: bool,

    pub supervisor_editor: String,
    pub admin_editor: String,
    pub invalid_editor: String,

    pub default_password: String,
    pub login_prefix: String,

    pub login_min_len: usize,
    pub login_max_len: usize,
    pub password_min_len: usize,
    pub password_max_len: usize,
    pub screen_name_min_len: usize,
    pub screen_name_max_len: usize,
    pub age_min: i64,
    pub age_max: i64,

    pub valid_roles: Vec<String>,
    pub valid_genders: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout_ms: 30_000,
            connect_timeout_ms: 10_000,
            retry_count: 3,
            retry_delay_ms: 1_000,
            thread_count: 3,
            environment: "TEST".to_string(),
            logging_enabled: true,
            schema_validation_enabled: true,
            supervisor_editor: "supervisor".to_string(),
            admin_editor: "admin".to_string(),
            invalid_editor: "invalid_user".to_string(),
            default_password: "testPassword123".to_string(),
            login_prefix: "test_user_".to_string(),
            login_min_len: 3,
            login_max_len: 50,
            password_min_len: 6,
            password_max_len: 50,
            screen_name_min_len: 2,
            screen_name_max_len: 30,
            age_min: 17,
            age_max: 59,
            valid_roles: vec!["user".to_string(), "admin".to_string()],
            valid_genders: vec![
                "MALE".to_string(),
                "FEMALE".to_string(),
                "OTHER".to_string(),
            ],
        }
    }
}

impl HarnessConfig {
    /// Load configuration with full precedence: defaults, optional file,
    /// environment overrides.
    pub fn load() -> Result<Self, HarnessError> {
        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a TOML configuration file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| HarnessError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| HarnessError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Apply `PLAYER_API_*` environment variable overrides. Every key has
    /// one; list values are comma-separated. Unparseable values are ignored
    /// rather than panicking mid-suite.
    fn apply_env(&mut self) {
        override_from_env("PLAYER_API_BASE_URL", &mut self.base_url);
        override_from_env("PLAYER_API_REQUEST_TIMEOUT_MS", &mut self.request_timeout_ms);
        override_from_env("PLAYER_API_CONNECT_TIMEOUT_MS", &mut self.connect_timeout_ms);
        override_from_env("PLAYER_API_RETRY_COUNT", &mut self.retry_count);
        override_from_env("PLAYER_API_RETRY_DELAY_MS", &mut self.retry_delay_ms);
        override_from_env("PLAYER_API_THREAD_COUNT", &mut self.thread_count);
        override_from_env("PLAYER_API_ENVIRONMENT", &mut self.environment);
        override_from_env("PLAYER_API_LOGGING_ENABLED", &mut self.logging_enabled);
        override_from_env(
            "PLAYER_API_SCHEMA_VALIDATION_ENABLED",
            &mut self.schema_validation_enabled,
        );
        override_from_env("PLAYER_API_SUPERVISOR_EDITOR", &mut self.supervisor_editor);
        override_from_env("PLAYER_API_ADMIN_EDITOR", &mut self.admin_editor);
        override_from_env("PLAYER_API_INVALID_EDITOR", &mut self.invalid_editor);
        override_from_env("PLAYER_API_DEFAULT_PASSWORD", &mut self.default_password);
        override_from_env("PLAYER_API_LOGIN_PREFIX", &mut self.login_prefix);
        override_from_env("PLAYER_API_LOGIN_MIN_LEN", &mut self.login_min_len);
        override_from_env("PLAYER_API_LOGIN_MAX_LEN", &mut self.login_max_len);
        override_from_env("PLAYER_API_PASSWORD_MIN_LEN", &mut self.password_min_len);
        override_from_env("PLAYER_API_PASSWORD_MAX_LEN", &mut self.password_max_len);
        override_from_env("PLAYER_API_SCREEN_NAME_MIN_LEN", &mut self.screen_name_min_len);
        override_from_env("PLAYER_API_SCREEN_NAME_MAX_LEN", &mut self.screen_name_max_len);
        override_from_env("PLAYER_API_AGE_MIN", &mut self.age_min);
        override_from_env("PLAYER_API_AGE_MAX", &mut self.age_max);
        override_list_from_env("PLAYER_API_VALID_ROLES", &mut self.valid_roles);
        override_list_from_env("PLAYER_API_VALID_GENDERS", &mut self.valid_genders);
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Log the effective configuration once at suite startup.
    pub fn log_summary(&self) {
        tracing::info!(
            base_url = %self.base_url,
            request_timeout_ms = self.request_timeout_ms,
            connect_timeout_ms = self.connect_timeout_ms,
            thread_count = self.thread_count,
            environment = %self.environment,
            retry_count = self.retry_count,
            retry_delay_ms = self.retry_delay_ms,
            "harness configuration loaded"
        );
    }
}

fn override_from_env<T: std::str::FromStr>(key: &str, slot: &mut T) {
    if let Ok(raw) = env::var(key) {
        if let Ok(value) = raw.parse() {
            *slot = value;
        }
    }
}

fn override_list_from_env(key: &str, slot: &mut Vec<String>) {
    if let Ok(raw) = env::var(key) {
        *slot = raw.split(',').map(|item| item.trim().to_string()).collect();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = HarnessConfig::default();
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(config.supervisor_editor, "supervisor");
        assert!(config.age_min < config.age_max);
        assert!(config.valid_roles.contains(&"user".to_string()));
    }

    #[test]
    fn file_overrides_defaults_and_keeps_the_rest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"http://10.0.0.1:8080\"\nrequest_timeout_ms = 5000"
        )
        .unwrap();

        let config = HarnessConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.1:8080");
        assert_eq!(config.request_timeout_ms, 5000);
        // Untouched keys keep their defaults.
        assert_eq!(config.connect_timeout_ms, 10_000);
        assert_eq!(config.invalid_editor, "invalid_user");
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let err = HarnessConfig::from_file(Path::new("/does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();
        let err = HarnessConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
    }

    #[test]
    fn env_overrides_win_over_defaults() {
        env::set_var("PLAYER_API_BASE_URL", "http://env-host:9999");
        env::set_var("PLAYER_API_REQUEST_TIMEOUT_MS", "1234");

        let config = HarnessConfig::load().unwrap();
        assert_eq!(config.base_url, "http://env-host:9999");
        assert_eq!(config.request_timeout_ms, 1234);

        env::remove_var("PLAYER_API_BASE_URL");
        env::remove_var("PLAYER_API_REQUEST_TIMEOUT_MS");
    }

    #[test]
    fn env_overrides_cover_bounds_lists_and_identities() {
        env::set_var("PLAYER_API_RETRY_COUNT", "7");
        env::set_var("PLAYER_API_INVALID_EDITOR", "nobody");
        env::set_var("PLAYER_API_AGE_MAX", "40");
        env::set_var("PLAYER_API_VALID_ROLES", "user, moderator");
        env::set_var("PLAYER_API_SCHEMA_VALIDATION_ENABLED", "false");

        let mut config = HarnessConfig::default();
        config.apply_env();
        assert_eq!(config.retry_count, 7);
        assert_eq!(config.invalid_editor, "nobody");
        assert_eq!(config.age_max, 40);
        assert_eq!(config.valid_roles, vec!["user", "moderator"]);
        assert!(!config.schema_validation_enabled);

        env::remove_var("PLAYER_API_RETRY_COUNT");
        env::remove_var("PLAYER_API_INVALID_EDITOR");
        env::remove_var("PLAYER_API_AGE_MAX");
        env::remove_var("PLAYER_API_VALID_ROLES");
        env::remove_var("PLAYER_API_SCHEMA_VALIDATION_ENABLED");
    }

    #[test]
    fn unparseable_env_value_keeps_the_default() {
        env::set_var("PLAYER_API_LOGIN_MAX_LEN", "not-a-number");
        let mut config = HarnessConfig::default();
        config.apply_env();
        assert_eq!(config.login_max_len, 50);
        env::remove_var("PLAYER_API_LOGIN_MAX_LEN");
    }

    #[test]
    fn timeout_helpers_convert_to_durations() {
        let config = HarnessConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }
}
