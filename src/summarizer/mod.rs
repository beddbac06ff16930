pub mod client;
pub mod errors;
pub mod parse;
pub mod prompt;
pub mod types;

pub use client::SummarizeTranslateClient;
pub use errors::SummarizeError;
pub use types::{FailureKind, ParseWarning, TranslationRequest, TranslationResult};

use async_trait::async_trait;

use crate::language::SupportedLanguage;

/// Anything that can summarize an article and translate the summary.
///
/// Implementations never return an error: every failure is folded into
/// [`TranslationResult::Failure`] so callers only have to match on the result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn process(&self, text: &str, target_language: SupportedLanguage) -> TranslationResult;
}
