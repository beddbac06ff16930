use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::language::SupportedLanguage;

/// Validated input for one summarize-and-translate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    target_language: SupportedLanguage,
}

impl TranslationRequest {
    /// Returns `None` when `text` is blank.
    pub fn new(text: impl Into<String>, target_language: SupportedLanguage) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text,
            target_language,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target_language(&self) -> SupportedLanguage {
        self.target_language
    }
}

/// Signals that the reply was accepted but could not be split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ParseWarning {
    /// No `TRANSLATION:` marker in the reply; both fields are empty.
    MissingTranslationMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Neither text nor a URL was supplied.
    InvalidInput,
    /// The article page could not be retrieved.
    Fetch,
    /// The page was retrieved but held no readable paragraphs.
    EmptyArticle,
    /// Transport failure or non-2xx status from the chat endpoint.
    ApiRequest,
    /// 2xx from the chat endpoint, but not the JSON we expect.
    ApiResponseShape,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationResult {
    Success {
        summary: String,
        translation: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        warning: Option<ParseWarning>,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

impl TranslationResult {
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failure { kind, .. } => Some(*kind),
            Self::Success { .. } => None,
        }
    }
}
