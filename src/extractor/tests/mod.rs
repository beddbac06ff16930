use std::fs;

use crate::extractor::extract_text;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_article_container() {
    let text = extract_text(&fixture("article.html"));

    assert_eq!(
        text.as_str(),
        "The city council voted 7-2 on Tuesday to approve a new transit plan. \
         The plan adds three bus routes and extends light rail service to the airport. \
         Construction is expected to begin next spring."
    );
}

#[test]
fn test_article_excludes_nested_noise() {
    let text = extract_text(&fixture("article.html"));

    for noise in [
        "trackParagraph",
        "Advertisement",
        "Related:",
        "Reporting by",
        "Sponsored",
        "newsletter",
        "Copyright",
    ] {
        assert!(!text.as_str().contains(noise), "leaked {noise:?}");
    }
}

#[test]
fn test_extract_content_class_container() {
    let text = extract_text(&fixture("blog.html"));

    assert_eq!(
        text.as_str(),
        "Rivers migrate across their floodplains over decades. \
         Erosion on the outer bank and deposition on the inner bank drive the change."
    );
}

#[test]
fn test_fallback_to_all_paragraphs() {
    let text = extract_text(&fixture("plain.html"));

    assert_eq!(
        text.as_str(),
        "Markets rallied on Friday. Analysts expect volatility to continue. Trading volume was light."
    );
}

#[test]
fn test_no_paragraphs_yields_empty_text() {
    let text = extract_text(&fixture("empty.html"));

    assert!(text.is_empty());
    assert_eq!(text.as_str(), "");
}

#[test]
fn test_two_paragraph_article() {
    let text =
        extract_text("<article><p>Hello world.</p><p>Second para.</p></article>");

    assert_eq!(text.as_str(), "Hello world. Second para.");
}

#[test]
fn test_containers_inside_noise_are_skipped() {
    let text = extract_text(
        r#"<header><div class="content"><p>Site tagline</p></div></header><div class="post"><p>Real story.</p></div>"#,
    );
    assert_eq!(text.as_str(), "Real story.");

    let text = extract_text(
        "<nav><article><p>Teaser link</p></article></nav><p>Body one.</p><p>Body two.</p>",
    );
    assert_eq!(text.as_str(), "Body one. Body two.");

    let text = extract_text(
        r#"<footer><article><p>More stories</p></article></footer><div class="ad"><div class="content"><p>Promo</p></div></div><p>Only text.</p>"#,
    );
    assert_eq!(text.as_str(), "Only text.");
}

#[test]
fn test_malformed_html() {
    let text = extract_text("<html><body><article><p>Unclosed tags<p>Still here</div></body>");

    assert_eq!(text.as_str(), "Unclosed tags Still here");
}

#[test]
fn test_non_html_input() {
    assert!(extract_text("").is_empty());
    assert!(extract_text("just some words without markup").is_empty());
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_text(&html);
        }

        #[test]
        fn test_output_is_whitespace_normalized(
            paragraphs in proptest::collection::vec("[a-zA-Z \\t\\n]{0,40}", 0..8)
        ) {
            let html = paragraphs
                .iter()
                .map(|p| format!("<p>{p}</p>"))
                .collect::<String>();
            let text = extract_text(&html);
            let s = text.as_str();
            prop_assert_eq!(s.trim(), s);
            prop_assert!(!s.contains("  "));
            prop_assert!(!s.contains('\n'));
            prop_assert!(!s.contains('\t'));
        }
    }
}
