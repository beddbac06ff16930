pub mod cleaner;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::ExtractedText;

use scraper::Html;
use tracing::{debug, info, instrument};

use crate::fetcher::{FetchError, fetch};

/// Fetch `url` and extract its readable text.
///
/// Fails only when the page cannot be retrieved. A page with no usable
/// paragraphs yields an empty [`ExtractedText`].
#[instrument(skip_all, fields(url = %url))]
pub async fn extract(url: &str) -> Result<ExtractedText, FetchError> {
    let page = fetch(url).await?;
    let text = extract_text(&page.body_utf8);

    info!(
        final_url = %page.url_final,
        fetched_at = %page.fetched_at,
        words = text.word_count(),
        "extracted article text"
    );
    Ok(text)
}

/// Pure extraction over an HTML string.
pub fn extract_text(html: &str) -> ExtractedText {
    // 1. Parse
    let mut document = Html::parse_document(html);

    // 2. Drop script/style/nav/header/footer and ad subtrees
    let removed = cleaner::remove_noise(&mut document);

    // 3. Pick a container and join its paragraphs
    let (container, text) = reader::read_paragraphs(&document);

    debug!(removed, ?container, chars = text.as_str().len(), "read paragraphs");
    text
}
