//! Oracle response parsing.
//!
//! The oracle is asked for three lines (idiom, literal translation,
//! explanation) but answers drift: list numbering, bold markup, blank lines
//! and explanations wrapped over several lines all occur. Lines are
//! cleaned, blank ones dropped, and the first remaining line is the
//! candidate idiom.

use std::sync::LazyLock;

use regex::Regex;

static LIST_MARKER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:\d{1,2}\s*[.)、]|[-*•])\s*").ok());

/// A response split into its candidate idiom and the lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub idiom: String,
    /// Cleaned, non-empty lines after the idiom, in order.
    pub details: Vec<String>,
}

impl ParsedResponse {
    /// Literal translation, present only when the response had at least
    /// three lines.
    pub fn translation(&self) -> Option<&str> {
        if self.details.len() >= 2 {
            Some(self.details[0].as_str())
        } else {
            None
        }
    }

    /// Explanation: every line after the translation joined by a space.
    pub fn meaning(&self) -> Option<String> {
        if self.details.len() >= 2 {
            Some(self.details[1..].join(" "))
        } else {
            None
        }
    }

    /// Final explanation text shown with an accepted idiom.
    ///
    /// `pinyin`, a blank line, the translation, a blank line, the meaning.
    /// Short responses degrade to `pinyin`, a blank line, and whatever
    /// detail lines exist joined by a space.
    pub fn explanation(&self, pinyin: &str) -> String {
        match (self.translation(), self.meaning()) {
            (Some(translation), Some(meaning)) => {
                format!("{pinyin}\n\n{translation}\n\n{meaning}")
            }
            _ => format!("{pinyin}\n\n{}", self.details.join(" ")),
        }
    }
}

/// Split free text into a [`ParsedResponse`]. `None` if nothing but
/// whitespace or markup came back.
pub fn parse_response(text: &str) -> Option<ParsedResponse> {
    let mut lines = text.lines().filter_map(clean_line);
    let idiom = lines.next()?;
    Some(ParsedResponse {
        idiom,
        details: lines.collect(),
    })
}

/// Trim, drop bold markup and a leading list marker. Empty results are
/// discarded.
fn clean_line(line: &str) -> Option<String> {
    let unmarked = line.replace("**", "");
    let mut cleaned = unmarked.trim();
    if let Some(re) = LIST_MARKER_RE.as_ref() {
        if let Some(found) = re.find(cleaned) {
            cleaned = cleaned[found.end()..].trim();
        }
    }
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_line_response() {
        let parsed = parse_response("对症下药\nTo prescribe the right medicine\nTake the right approach.")
            .unwrap();
        assert_eq!(parsed.idiom, "对症下药");
        assert_eq!(parsed.translation(), Some("To prescribe the right medicine"));
        assert_eq!(parsed.meaning().as_deref(), Some("Take the right approach."));
    }

    #[test]
    fn strips_markers_and_bold() {
        assert_eq!(clean_line("1. **画蛇添足**").as_deref(), Some("画蛇添足"));
        assert_eq!(clean_line("- Draw a snake").as_deref(), Some("Draw a snake"));
        assert_eq!(clean_line("* Draw a snake").as_deref(), Some("Draw a snake"));
        assert_eq!(clean_line("2) second").as_deref(), Some("second"));
        assert_eq!(clean_line("   **   ").as_deref(), None);
    }

    #[test]
    fn keeps_interior_numbers() {
        assert_eq!(
            clean_line("Used since 200 BC.").as_deref(),
            Some("Used since 200 BC.")
        );
    }

    #[test]
    fn blank_or_markup_only_is_none() {
        assert!(parse_response("").is_none());
        assert!(parse_response("\n  \n\t\n").is_none());
        assert!(parse_response("**\n-").is_none());
    }

    #[test]
    fn single_line_has_no_details() {
        let parsed = parse_response("  守株待兔  ").unwrap();
        assert_eq!(parsed.idiom, "守株待兔");
        assert!(parsed.details.is_empty());
        assert_eq!(parsed.explanation("shǒu zhū dài tù"), "shǒu zhū dài tù\n\n");
    }

    #[test]
    fn two_lines_degrade_to_joined_rest() {
        let parsed = parse_response("众志成城\nUnity is strength").unwrap();
        assert_eq!(parsed.translation(), None);
        assert_eq!(parsed.meaning(), None);
        assert_eq!(
            parsed.explanation("zhòng zhì chéng chéng"),
            "zhòng zhì chéng chéng\n\nUnity is strength"
        );
    }

    #[test]
    fn full_explanation_layout() {
        let parsed = parse_response("画蛇添足\nDraw a snake and add feet\nOverdoing it\nruins it.").unwrap();
        assert_eq!(
            parsed.explanation("huà shé tiān zú"),
            "huà shé tiān zú\n\nDraw a snake and add feet\n\nOverdoing it ruins it."
        );
    }
}
