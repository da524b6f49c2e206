//! Tone-marked pinyin annotation.

use pinyin::ToPinyin;

/// Annotate `text` with tone-marked pinyin.
///
/// Each Han character becomes one syllable; a run of non-Han characters is
/// kept verbatim as a single token. Tokens are joined by single spaces, and
/// whitespace-only runs are dropped.
///
/// ```
/// assert_eq!(idiom_core::phonetic::annotate("举棋不定"), "jǔ qí bù dìng");
/// ```
pub fn annotate(text: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut run = String::new();

    for c in text.chars() {
        match c.to_pinyin() {
            Some(p) => {
                push_run(&mut run, &mut tokens);
                tokens.push(p.with_tone().to_string());
            }
            None => run.push(c),
        }
    }
    push_run(&mut run, &mut tokens);
    tokens.join(" ")
}

fn push_run(run: &mut String, tokens: &mut Vec<String>) {
    let trimmed = run.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    run.clear();
}
