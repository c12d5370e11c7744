use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::search::SearchConfig;
use self::server::ServerConfig;

pub mod dictionary;
pub mod search;
pub mod server;

fn default_ping_message() -> String {
    "ping".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub search: SearchConfig,
    /// Body of the ping endpoint
    #[serde(default = "default_ping_message")]
    pub ping_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dictionary: DictionaryConfig::default(),
            search: SearchConfig::default(),
            ping_message: default_ping_message(),
        }
    }
}

impl Config {
    /// Defaults overridden by process environment variables
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `var` returns for each known key
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let ping_message = var("PING_MESSAGE").unwrap_or(defaults.ping_message);

        Config {
            server: ServerConfig::from_vars(&var),
            dictionary: DictionaryConfig::from_vars(&var),
            search: SearchConfig::from_vars(&var),
            ping_message,
        }
    }
}

/// Parse `key` if present and valid, else `default`
pub(crate) fn parsed_or<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    var(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
