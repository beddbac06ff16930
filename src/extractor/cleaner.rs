use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Elements that never carry article text.
const NOISE_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "ads"];

/// Class or id tokens that mark an element as an advertisement.
const AD_TOKENS: [&str; 4] = ["ad", "ads", "advert", "advertisement"];

static ANY_ELEMENT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("*").unwrap());

/// Detach every noise subtree from the document in place.
///
/// Returns how many subtrees were removed.
pub fn remove_noise(document: &mut Html) -> usize {
    let doomed: Vec<_> = document
        .select(&ANY_ELEMENT)
        .filter(is_noise)
        .map(|element| element.id())
        .collect();

    let mut removed = 0;
    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
            removed += 1;
        }
    }
    removed
}

fn is_noise(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    if NOISE_TAGS.contains(&value.name()) {
        return true;
    }
    if value.attr("data-ad").is_some() {
        return true;
    }
    if value.classes().any(is_ad_token) {
        return true;
    }
    value.id().is_some_and(is_ad_token)
}

fn is_ad_token(token: &str) -> bool {
    AD_TOKENS.iter().any(|ad| token.eq_ignore_ascii_case(ad))
}
