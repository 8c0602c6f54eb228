//! Client-side field validators mirroring the service's documented rules.
//!
//! Used by the data generators (and their tests) to know which generated
//! values the service should accept. Length bounds come from the
//! configuration; character rules are fixed patterns.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::HarnessConfig;

static LOGIN_PATTERN: OnceLock<Regex> = OnceLock::new();
static SCREEN_NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn login_pattern() -> &'static Regex {
    LOGIN_PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("login pattern is valid"))
}

fn screen_name_pattern() -> &'static Regex {
    SCREEN_NAME_PATTERN
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_ -]+$").expect("screen name pattern is valid"))
}

pub fn is_valid_login(config: &HarnessConfig, login: &str) -> bool {
    login.len() >= config.login_min_len
        && login.len() <= config.login_max_len
        && login_pattern().is_match(login)
}

pub fn is_valid_password(config: &HarnessConfig, password: &str) -> bool {
    !password.trim().is_empty()
        && password.len() >= config.password_min_len
        && password.len() <= config.password_max_len
}

pub fn is_valid_age(config: &HarnessConfig, age: i64) -> bool {
    age >= config.age_min && age <= config.age_max
}

pub fn is_valid_screen_name(config: &HarnessConfig, screen_name: &str) -> bool {
    screen_name.len() >= config.screen_name_min_len
        && screen_name.len() <= config.screen_name_max_len
        && screen_name_pattern().is_match(screen_name)
}

pub fn is_valid_role(config: &HarnessConfig, role: &str) -> bool {
    config.valid_roles.iter().any(|valid| valid == role)
}

pub fn is_valid_gender(config: &HarnessConfig, gender: &str) -> bool {
    config.valid_genders.iter().any(|valid| valid == gender)
}
