//! Property tests for oracle response parsing.

use idiom_generation::parse_response;
use proptest::prelude::*;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[\\p{Han}]{1,8}",
        "[A-Za-z ,.'-]{0,40}",
        Just(String::new()),
        Just("   ".to_string()),
        Just("**".to_string()),
        "[0-9]\\. \\*\\*[\\p{Han}]{2,6}\\*\\*",
    ]
}

proptest! {
    #[test]
    fn parsed_lines_are_trimmed_and_non_empty(lines in prop::collection::vec(line(), 0..8)) {
        let text = lines.join("\n");
        if let Some(parsed) = parse_response(&text) {
            prop_assert!(!parsed.idiom.is_empty());
            prop_assert_eq!(parsed.idiom.trim(), parsed.idiom.as_str());
            prop_assert!(!parsed.idiom.contains('\n'));
            for detail in &parsed.details {
                prop_assert!(!detail.is_empty());
                prop_assert_eq!(detail.trim(), detail.as_str());
                prop_assert!(!detail.contains("**"));
            }
        }
    }

    #[test]
    fn translation_present_iff_three_lines(lines in prop::collection::vec("[a-z]{1,10}", 1..6)) {
        let parsed = parse_response(&lines.join("\n")).unwrap();
        prop_assert_eq!(parsed.details.len(), lines.len() - 1);
        prop_assert_eq!(parsed.translation().is_some(), lines.len() >= 3);
        prop_assert_eq!(parsed.meaning().is_some(), lines.len() >= 3);
    }

    #[test]
    fn explanation_starts_with_pinyin(lines in prop::collection::vec("[a-z]{1,10}", 1..6)) {
        let parsed = parse_response(&lines.join("\n")).unwrap();
        prop_assert!(parsed.explanation("pīn yīn").starts_with("pīn yīn\n\n"));
    }
}
