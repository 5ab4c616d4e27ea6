#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
    #[error("Failed to parse date/time: {0}")]
    DateTimeError(String),
}
