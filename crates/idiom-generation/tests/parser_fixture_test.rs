//! Golden oracle responses parsed into idiom, translation and meaning.

use idiom_generation::parse_response;
use serde::Deserialize;

#[derive(Deserialize)]
struct Responses {
    responses: Vec<ResponseCase>,
}

#[derive(Deserialize)]
struct ResponseCase {
    name: String,
    text: String,
    idiom: String,
    translation: Option<String>,
    meaning: Option<String>,
}

#[test]
fn golden_oracle_responses() {
    let fixture: Responses = test_fixtures::load_fixture("golden/generation/oracle_responses.json");
    assert!(!fixture.responses.is_empty());

    for case in fixture.responses {
        let parsed = parse_response(&case.text)
            .unwrap_or_else(|| panic!("{}: nothing parsed", case.name));
        assert_eq!(parsed.idiom, case.idiom, "{}: idiom", case.name);
        assert_eq!(
            parsed.translation().map(str::to_string),
            case.translation,
            "{}: translation",
            case.name
        );
        assert_eq!(parsed.meaning(), case.meaning, "{}: meaning", case.name);
    }
}
