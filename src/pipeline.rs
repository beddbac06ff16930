//! Resolves what the user handed us into article text and runs it through a
//! [`Summarizer`].

use tracing::{info, instrument, warn};

use crate::extractor;
use crate::language::SupportedLanguage;
use crate::summarizer::{FailureKind, Summarizer, TranslationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleSource {
    Url(String),
    RawText(String),
}

impl ArticleSource {
    /// Pick a source from the two optional inputs. Text wins when both are
    /// present; blank inputs count as absent.
    pub fn from_inputs(text: Option<&str>, url: Option<&str>) -> Option<Self> {
        let text = text.filter(|t| !t.trim().is_empty());
        let url = url.map(str::trim).filter(|u| !u.is_empty());

        match (text, url) {
            (Some(text), _) => Some(Self::RawText(text.to_string())),
            (None, Some(url)) => Some(Self::Url(url.to_string())),
            (None, None) => None,
        }
    }
}

/// Entry point shared by the CLI and the HTTP API.
pub async fn process_article<S: Summarizer + ?Sized>(
    summarizer: &S,
    text: Option<&str>,
    url: Option<&str>,
    target_language: SupportedLanguage,
) -> TranslationResult {
    match ArticleSource::from_inputs(text, url) {
        Some(source) => process_source(summarizer, source, target_language).await,
        None => TranslationResult::failure(
            FailureKind::InvalidInput,
            "Please provide either a URL or text content.",
        ),
    }
}

#[instrument(skip_all, fields(language = %target_language))]
pub async fn process_source<S: Summarizer + ?Sized>(
    summarizer: &S,
    source: ArticleSource,
    target_language: SupportedLanguage,
) -> TranslationResult {
    let text = match source {
        ArticleSource::RawText(text) => text,
        ArticleSource::Url(url) => match extractor::extract(&url).await {
            Ok(extracted) if extracted.is_empty() => {
                warn!(%url, "no readable paragraphs found");
                return TranslationResult::failure(
                    FailureKind::EmptyArticle,
                    format!("No readable article text found at {url}"),
                );
            }
            Ok(extracted) => extracted.into_string(),
            Err(e) => {
                warn!(%url, error = %e, "failed to fetch article");
                return TranslationResult::failure(
                    FailureKind::Fetch,
                    format!("Failed to fetch article content: {e}"),
                );
            }
        },
    };

    let result = summarizer.process(&text, target_language).await;
    info!(success = result.is_success(), "processed article");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::MockSummarizer;

    #[test]
    fn text_wins_over_url() {
        assert_eq!(
            ArticleSource::from_inputs(Some("body"), Some("http://x.test/a")),
            Some(ArticleSource::RawText("body".into()))
        );
    }

    #[test]
    fn blank_inputs_are_absent() {
        assert_eq!(
            ArticleSource::from_inputs(Some("  "), Some(" http://x.test/a ")),
            Some(ArticleSource::Url("http://x.test/a".into()))
        );
        assert_eq!(ArticleSource::from_inputs(Some(""), Some("   ")), None);
        assert_eq!(ArticleSource::from_inputs(None, None), None);
    }

    #[tokio::test]
    async fn missing_input_never_calls_summarizer() {
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_process().never();

        let result = process_article(&summarizer, None, None, SupportedLanguage::Hindi).await;

        assert_eq!(result.failure_kind(), Some(FailureKind::InvalidInput));
    }

    #[tokio::test]
    async fn raw_text_goes_straight_to_summarizer() {
        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_process()
            .withf(|text, language| {
                text.contains("Already plain text.") && *language == SupportedLanguage::Marathi
            })
            .times(1)
            .returning(|_, _| TranslationResult::Success {
                summary: "S".into(),
                translation: "T".into(),
                warning: None,
            });

        let result = process_article(
            &summarizer,
            Some("Already plain text."),
            None,
            SupportedLanguage::Marathi,
        )
        .await;

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn invalid_url_is_a_fetch_failure() {
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_process().never();

        let result =
            process_article(&summarizer, None, Some("not a url"), SupportedLanguage::French).await;

        match result {
            TranslationResult::Failure { kind, message } => {
                assert_eq!(kind, FailureKind::Fetch);
                assert!(message.starts_with("Failed to fetch article content: invalid url"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
