use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use wortschatz_config::wiktionary::WiktionaryConfig;
use wortschatz_core::{SourceError, SourceMetadata, WordSource};

/// Client for the MediaWiki API of a Wiktionary instance.
#[derive(Clone)]
pub struct WiktionaryClient {
    api_url: String,
    client: reqwest::Client,
}

impl WiktionaryClient {
    pub fn new(config: &WiktionaryConfig, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            api_url: config.api_url.clone(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl WordSource for WiktionaryClient {
    async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "opensearch"),
                ("search", query),
                ("limit", &limit),
                ("namespace", "0"),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;
        Ok(titles_from_opensearch(&data))
    }

    async fn fetch_wikitext(&self, title: &str) -> Result<Option<String>, SourceError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "parse"),
                ("page", title),
                ("prop", "wikitext"),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await?;

        // A missing page is an absence, not a failure.
        if !response.status().is_success() {
            return Ok(None);
        }

        let data: ParseResponse = response.json().await?;
        Ok(data.into_wikitext())
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "wiktionary".to_string(),
            language: "de".to_string(),
            base_url: self.api_url.clone(),
        }
    }
}

// opensearch returns [query, [titles], [descriptions], [urls]]
fn titles_from_opensearch(data: &Value) -> Vec<String> {
    data.get(1)
        .and_then(Value::as_array)
        .map(|titles| {
            titles
                .iter()
                .filter_map(|title| title.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Deserialize)]
struct ParseResponse {
    parse: Option<ParseBody>,
    error: Option<Value>,
}

#[derive(Deserialize)]
struct ParseBody {
    wikitext: Option<WikitextBody>,
}

#[derive(Deserialize)]
struct WikitextBody {
    #[serde(rename = "*")]
    content: String,
}

impl ParseResponse {
    fn into_wikitext(self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }

        self.parse
            .and_then(|body| body.wikitext)
            .map(|wikitext| wikitext.content)
            .filter(|content| !content.is_empty())
    }
}
