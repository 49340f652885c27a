/// Report-source errors, raised while fetching the corpus to rank.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("report source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("invalid report record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("failed to decode reports: {message}")]
    Decode { message: String },
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}
