use crate::error::SourceError;

/// Remote dictionary source interface
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Search for candidate page titles matching a query.
    /// Ranking is owned by the remote service; results come back in
    /// relevance order.
    async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<String>, SourceError>;

    /// Fetch the raw wikitext body for an exact page title.
    /// `Ok(None)` means the page does not exist.
    async fn fetch_wikitext(&self, title: &str) -> Result<Option<String>, SourceError>;

    /// Source metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    /// ISO 639-1 code of the dictionary language
    pub language: String,
    pub base_url: String,
}
