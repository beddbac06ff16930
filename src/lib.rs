pub mod api;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod language;
pub mod pipeline;
pub mod summarizer;
pub mod telemetry;

pub use language::SupportedLanguage;
pub use pipeline::{ArticleSource, process_article};
pub use summarizer::{
    FailureKind, ParseWarning, SummarizeTranslateClient, Summarizer, TranslationResult,
};
