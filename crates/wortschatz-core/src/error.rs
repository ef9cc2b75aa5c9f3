#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
