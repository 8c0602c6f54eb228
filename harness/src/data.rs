//! Test-data generation: valid, boundary, invalid, and malicious inputs.
//!
//! Logins are salted with a timestamp and a random suffix so scenarios
//! running in parallel worker threads never collide on the shared remote
//! service.

use rand::Rng;

use crate::config::HarnessConfig;
use crate::model::{CreatePlayer, UpdatePlayer};

const SCREEN_NAMES: &[&str] = &[
    "TestPlayer",
    "GameMaster",
    "ProGamer",
    "CoolUser",
    "PlayerOne",
    "Champion",
    "Warrior",
    "Mage",
    "Archer",
    "Knight",
];

const INVALID_ROLES: &[&str] = &["guest", "unknown", "root", "superuser", "owner"];
const INVALID_GENDERS: &[&str] = &["male", "female", "M", "F", "UNKNOWN"];
const INVALID_LOGINS: &[&str] = &["", " ", "ab", "x"];
const INVALID_PASSWORDS: &[&str] = &["", " ", "123", "abc", "12345"];
const INVALID_SCREEN_NAMES: &[&str] = &["", " ", "x", "a"];

const SQL_INJECTION_STRINGS: &[&str] = &[
    "'; DROP TABLE players; --",
    "' OR '1'='1",
    "admin'--",
    "' UNION SELECT * FROM users--",
];

const XSS_STRINGS: &[&str] = &[
    "<script>alert('xss')</script>",
    "javascript:alert('xss')",
    "<img src=x onerror=alert('xss')>",
    "'\"><script>alert('xss')</script>",
];

fn pick<'a, T: ?Sized>(rng: &mut impl Rng, pool: &'a [&'a T]) -> &'a T {
    pool[rng.gen_range(0..pool.len())]
}

/// Unique login: configured prefix + timestamp + random suffix.
pub fn unique_login(config: &HarnessConfig) -> String {
    let mut rng = rand::thread_rng();
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let suffix: u32 = rng.gen_range(1000..10_000);
    format!("{}{stamp}_{suffix}", config.login_prefix)
}

pub fn valid_age(config: &HarnessConfig) -> i64 {
    rand::thread_rng().gen_range(config.age_min..=config.age_max)
}

pub fn valid_role(config: &HarnessConfig) -> String {
    let mut rng = rand::thread_rng();
    config.valid_roles[rng.gen_range(0..config.valid_roles.len())].clone()
}

pub fn valid_gender(config: &HarnessConfig) -> String {
    let mut rng = rand::thread_rng();
    config.valid_genders[rng.gen_range(0..config.valid_genders.len())].clone()
}

pub fn valid_screen_name() -> String {
    let mut rng = rand::thread_rng();
    let base = pick(&mut rng, SCREEN_NAMES);
    let suffix: u32 = rng.gen_range(1..999);
    format!("{base}{suffix}")
}

/// A fully valid creation payload the service should accept.
pub fn valid_player(config: &HarnessConfig) -> CreatePlayer {
    CreatePlayer {
        login: unique_login(config),
        password: Some(config.default_password.clone()),
        role: valid_role(config),
        age: valid_age(config),
        gender: valid_gender(config),
        screen_name: valid_screen_name(),
    }
}

/// Values sitting exactly on the configured limits; still acceptable.
pub fn boundary_player(config: &HarnessConfig) -> CreatePlayer {
    let mut rng = rand::thread_rng();
    let login = if rng.gen_bool(0.5) {
        "a".repeat(config.login_min_len)
    } else {
        "a".repeat(config.login_max_len)
    };
    let screen_name = if rng.gen_bool(0.5) {
        "b".repeat(config.screen_name_min_len)
    } else {
        "b".repeat(config.screen_name_max_len)
    };
    let age = if rng.gen_bool(0.5) {
        config.age_min
    } else {
        config.age_max
    };
    CreatePlayer {
        login,
        password: Some("1".repeat(config.password_min_len)),
        role: valid_role(config),
        age,
        gender: valid_gender(config),
        screen_name,
    }
}

/// A payload the service should reject on every field.
pub fn invalid_player(config: &HarnessConfig) -> CreatePlayer {
    let mut rng = rand::thread_rng();
    let age = if rng.gen_bool(0.5) {
        config.age_min - rng.gen_range(1..=100)
    } else {
        config.age_max + rng.gen_range(1..=100)
    };
    let login = if rng.gen_bool(0.5) {
        pick(&mut rng, INVALID_LOGINS).to_string()
    } else {
        "a".repeat(config.login_max_len + 1)
    };
    CreatePlayer {
        login,
        password: Some(pick(&mut rng, INVALID_PASSWORDS).to_string()),
        role: pick(&mut rng, INVALID_ROLES).to_string(),
        age,
        gender: pick(&mut rng, INVALID_GENDERS).to_string(),
        screen_name: pick(&mut rng, INVALID_SCREEN_NAMES).to_string(),
    }
}

/// SQL-injection payload in the string fields, valid everything else.
pub fn sql_injection_player(config: &HarnessConfig) -> CreatePlayer {
    let mut rng = rand::thread_rng();
    let injection = pick(&mut rng, SQL_INJECTION_STRINGS).to_string();
    CreatePlayer {
        login: injection.clone(),
        password: Some(injection.clone()),
        role: valid_role(config),
        age: valid_age(config),
        gender: valid_gender(config),
        screen_name: injection,
    }
}

/// XSS payload in the screen name, valid everything else.
pub fn xss_player(config: &HarnessConfig) -> CreatePlayer {
    let mut rng = rand::thread_rng();
    CreatePlayer {
        login: unique_login(config),
        password: Some(config.default_password.clone()),
        role: valid_role(config),
        age: valid_age(config),
        gender: valid_gender(config),
        screen_name: pick(&mut rng, XSS_STRINGS).to_string(),
    }
}

/// An update touching every field with fresh valid values.
pub fn valid_update(config: &HarnessConfig) -> UpdatePlayer {
    UpdatePlayer {
        login: Some(unique_login(config)),
        password: Some(config.default_password.clone()),
        role: Some(valid_role(config)),
        age: Some(valid_age(config)),
        gender: Some(valid_gender(config)),
        screen_name: Some(valid_screen_name()),
    }
}

/// An update touching a random subset of fields. May be empty.
pub fn partial_update(config: &HarnessConfig) -> UpdatePlayer {
    let mut rng = rand::thread_rng();
    UpdatePlayer {
        login: rng.gen_bool(0.5).then(|| unique_login(config)),
        password: None,
        role: rng.gen_bool(0.5).then(|| valid_role(config)),
        age: rng.gen_bool(0.5).then(|| valid_age(config)),
        gender: rng.gen_bool(0.5).then(|| valid_gender(config)),
        screen_name: rng.gen_bool(0.5).then(valid_screen_name),
    }
}
