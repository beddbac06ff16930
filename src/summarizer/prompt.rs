use serde::Serialize;

use crate::summarizer::types::TranslationRequest;

pub const SYSTEM_PROMPT: &str = "You are a professional translator and summarizer. \
Provide concise summaries and accurate translations.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// The fixed two-message conversation sent for every article.
pub fn build_messages(request: &TranslationRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: "system",
            content: SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
            role: "user",
            content: user_prompt(request),
        },
    ]
}

fn user_prompt(request: &TranslationRequest) -> String {
    format!(
        "Please analyze this article and provide:\n\
         1. A concise summary in English (100-150 words)\n\
         2. An accurate translation of the summary in {language}\n\
         \n\
         Article: {text}\n\
         \n\
         Format your response exactly as:\n\
         SUMMARY: <english_summary>\n\
         TRANSLATION: <translated_summary>",
        language = request.target_language(),
        text = request.text(),
    )
}
