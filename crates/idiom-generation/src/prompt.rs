//! Prompt sent to the generation oracle.
//!
//! The line order requested here (idiom, literal translation, explanation)
//! is what [`crate::parser`] expects back.

const INSTRUCTIONS: &str = "You are a wise assistant. Given a situation, respond with exactly:
1. A Chinese idiom (includes 成語、俗語、諺語),
   written in simplified Chinese characters,
   that conveys the idea of the given situation.
2. Its literal English translation
3. Explain idiom. Keep explanation to 2-3 concise sentences.

Format:
Idiom
Literal translation
Explanation";

/// Build the full prompt for one situation.
pub fn build_prompt(situation: &str) -> String {
    format!("{INSTRUCTIONS}\n\nSituation: {}\nAnswer:", situation.trim())
}
