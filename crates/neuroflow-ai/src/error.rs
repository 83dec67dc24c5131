use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service returned no completion text")]
    Empty,

    #[error("failed to parse service response: {source}\n  body: {body}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AiError {
    /// Externally rate-limited call; the caller must not retry
    /// automatically.
    pub fn is_quota(&self) -> bool {
        matches!(self, AiError::Status { status: 429, .. })
    }
}

pub type Result<T> = std::result::Result<T, AiError>;
