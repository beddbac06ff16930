use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, VariantNames};
use utoipa::ToSchema;

/// Target languages the summary can be translated into.
///
/// The display name is what goes into the prompt, so adding a language is just
/// adding a variant here.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    VariantNames,
    ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum SupportedLanguage {
    Telugu,
    Hindi,
    Tamil,
    Bengali,
    Marathi,
    French,
    Spanish,
    German,
    Chinese,
    Japanese,
    Korean,
}

impl SupportedLanguage {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn names() -> &'static [&'static str] {
        Self::VARIANTS
    }
}
