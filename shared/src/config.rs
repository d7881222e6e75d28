//! Client settings, resolved from named string values supplied by the host
//! page.

use std::fmt;
use std::str::FromStr;

use tracing::Level;

pub const API_BASE_KEY: &str = "commentdeck-api";
pub const USER_ID_KEY: &str = "commentdeck-user";
pub const LOG_LEVEL_KEY: &str = "commentdeck-log";

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_USER_ID: i64 = 1;
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    /// User shown on both screens.
    pub current_user_id: i64,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            current_user_id: DEFAULT_USER_ID,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// A setting the host supplied but that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSetting {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for RejectedSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ignoring invalid {} value {:?}", self.key, self.value)
    }
}

impl ClientConfig {
    /// Builds the config from `lookup`, which returns the raw value for a
    /// key if the host set one. Blank values select the default; values that
    /// do not parse select the default and are returned alongside the
    /// config so the caller can report them once logging is up.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<RejectedSetting>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };
        let defaults = Self::default();
        let mut rejected = Vec::new();

        let api_base = match value(API_BASE_KEY) {
            Some(raw) if raw.trim_end_matches('/').is_empty() => {
                rejected.push(RejectedSetting {
                    key: API_BASE_KEY,
                    value: raw,
                });
                defaults.api_base
            }
            Some(raw) => raw.trim_end_matches('/').to_string(),
            None => defaults.api_base,
        };

        let current_user_id = parse_or(
            USER_ID_KEY,
            value(USER_ID_KEY),
            defaults.current_user_id,
            &mut rejected,
        );
        let log_level = parse_or(
            LOG_LEVEL_KEY,
            value(LOG_LEVEL_KEY),
            defaults.log_level,
            &mut rejected,
        );

        let config = Self {
            api_base,
            current_user_id,
            log_level,
        };
        (config, rejected)
    }

    pub fn comments_url(&self) -> String {
        format!("{}/comments", self.api_base)
    }

    pub fn user_url(&self) -> String {
        format!("{}/users/{}", self.api_base, self.current_user_id)
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    rejected: &mut Vec<RejectedSetting>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            rejected.push(RejectedSetting { key, value: raw });
            default
        }
    }
}
