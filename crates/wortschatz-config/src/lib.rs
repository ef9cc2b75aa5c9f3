use std::env;

use serde::{Deserialize, Serialize};

use self::wiktionary::WiktionaryConfig;

pub mod wiktionary;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub wiktionary: WiktionaryConfig,

    /// Remote call timeout
    pub timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            wiktionary: WiktionaryConfig::new(),

            timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
