use crate::summarizer::types::ParseWarning;

pub const SUMMARY_LABEL: &str = "SUMMARY:";
pub const TRANSLATION_LABEL: &str = "TRANSLATION:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub summary: String,
    pub translation: String,
    pub warning: Option<ParseWarning>,
}

/// Split a completion into its summary and translation.
///
/// The summary is everything before the first `TRANSLATION:` with any
/// `SUMMARY:` label removed; the label itself is optional. The translation runs
/// up to a second `TRANSLATION:` if the model repeated the marker. Without the
/// marker both fields are empty and a warning is attached.
pub fn parse_reply(content: &str) -> ParsedReply {
    let mut parts = content.split(TRANSLATION_LABEL);
    let before = parts.next().unwrap_or_default();

    match parts.next() {
        Some(after) => ParsedReply {
            summary: before.replace(SUMMARY_LABEL, "").trim().to_string(),
            translation: after.trim().to_string(),
            warning: None,
        },
        None => ParsedReply {
            summary: String::new(),
            translation: String::new(),
            warning: Some(ParseWarning::MissingTranslationMarker),
        },
    }
}
