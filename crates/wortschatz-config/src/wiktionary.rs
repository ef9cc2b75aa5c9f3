use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct WiktionaryConfig {
    /// MediaWiki API endpoint of the wiki to query
    pub api_url: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl WiktionaryConfig {
    pub fn new() -> Self {
        let api_url = env::var("WIKTIONARY_API_URL")
            .unwrap_or_else(|_| "https://de.wiktionary.org/w/api.php".to_string());

        let user_agent = env::var("WIKTIONARY_USER_AGENT")
            .unwrap_or_else(|_| concat!("wortschatz/", env!("CARGO_PKG_VERSION")).to_string());

        Self { api_url, user_agent }
    }
}

impl Default for WiktionaryConfig {
    fn default() -> Self {
        Self::new()
    }
}
