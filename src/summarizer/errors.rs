use thiserror::Error;

use crate::summarizer::types::FailureKind;

/// Longest slice of an error body kept for the message.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed: HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected API response: {0}")]
    Shape(String),
}

impl SummarizeError {
    pub fn status(status: reqwest::StatusCode, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Request(_) | Self::Status { .. } => FailureKind::ApiRequest,
            Self::Shape(_) => FailureKind::ApiResponseShape,
        }
    }
}
