use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Plain article text with markup stripped and whitespace normalized.
///
/// An empty value is a legitimate extraction result (the page simply had no
/// paragraphs we could find), not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn from_paragraphs<'a>(paragraphs: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = paragraphs
            .into_iter()
            .map(normalize_whitespace)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ExtractedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ExtractedText> for String {
    fn from(text: ExtractedText) -> Self {
        text.0
    }
}

/// Collapse every run of whitespace (including newlines) into a single space
/// and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
