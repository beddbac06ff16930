use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::extractor::model::ExtractedText;

static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").unwrap());

// Whole class tokens, matched in document order.
static CONTENT_CLASS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".article, .content, .post").unwrap());

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Which rule picked the region paragraphs were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    ArticleTag,
    ContentClass,
    WholeDocument,
}

/// Pick the main content container: the first `<article>`, else the first
/// element with an `article`/`content`/`post` class, else nothing.
///
/// Searches from the root element: `Html::select` also visits subtrees that
/// were detached as noise.
pub fn find_container(document: &Html) -> Option<(Container, ElementRef<'_>)> {
    let root = document.root_element();
    if let Some(article) = root.select(&ARTICLE_SELECTOR).next() {
        return Some((Container::ArticleTag, article));
    }

    root.select(&CONTENT_CLASS_SELECTOR)
        .next()
        .map(|element| (Container::ContentClass, element))
}

/// Join the paragraphs of the chosen container, or of the whole document when
/// no container matched.
pub fn read_paragraphs(document: &Html) -> (Container, ExtractedText) {
    match find_container(document) {
        Some((container, element)) => (container, join_paragraphs(element)),
        None => (
            Container::WholeDocument,
            join_paragraphs(document.root_element()),
        ),
    }
}

fn join_paragraphs(scope: ElementRef<'_>) -> ExtractedText {
    let texts: Vec<String> = scope
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .collect();
    ExtractedText::from_paragraphs(texts.iter().map(String::as_str))
}
