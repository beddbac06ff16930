use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::language::SupportedLanguage;
use crate::summarizer::{FailureKind, ParseWarning};

const MAX_URL_LEN: usize = 2048;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProcessArticleRequest {
    /// Article text. Takes precedence over `url` when both are set.
    pub text: Option<String>,
    /// Page to fetch and extract when no text is given.
    pub url: Option<String>,
    pub language: SupportedLanguage,
}

impl ProcessArticleRequest {
    pub fn validate(&self) -> Result<(), String> {
        let has_text = self.text.as_deref().is_some_and(|t| !t.trim().is_empty());
        let has_url = self.url.as_deref().is_some_and(|u| !u.trim().is_empty());

        if !has_text && !has_url {
            return Err("Please provide either a URL or text content.".to_string());
        }
        if !has_text && self.url.as_deref().is_some_and(|u| u.len() > MAX_URL_LEN) {
            return Err("URL too long".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessArticleResponse {
    pub summary: String,
    pub translation: String,
    pub language: SupportedLanguage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<ParseWarning>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LanguagesResponse {
    pub languages: Vec<SupportedLanguage>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: FailureKind,
}
