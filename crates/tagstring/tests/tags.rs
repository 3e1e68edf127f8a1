//! Behavioural tests for the public parse/render surface.

use rstest::rstest;

use tagstring::{
    ParseOptions, Remainder, TagError, accept_suggestion, normalise, parse_raw, parse_tags,
    parse_tags_with, render_tags, tokenize,
};

#[rstest]
#[case("")]
#[case("adam brian chris")]
#[case("adam, brian chris")]
#[case("\"adam one\",\"brian two\" \"chris three\"")]
#[case("adam\"brian,chris dave")]
#[case("adam, br\"\"ian, \"\"chris, dave\"\"")]
#[case("\"\"adam\"\" brian\"\", chris")]
#[case("\"adam,one\",\"brian,two\",\"chris, dave")]
#[case("\"adam\" , , brian , ")]
#[case("\" leading space\" trailing\"")]
#[case("\"\"\"")]
#[case("a\"\"\" b, \"c")]
#[case("日本, \"語 文\"")]
fn parsing_rendered_tags_is_idempotent(#[case] input: &str) {
    for space_delimiter in [true, false] {
        let tags = parse_tags(input, space_delimiter);
        let rendered = render_tags(&tags);
        assert_eq!(
            parse_tags(&rendered, space_delimiter),
            tags,
            "input {input:?} rendered as {rendered:?}"
        );
    }
}

#[rstest]
#[case(&["adam", "brian", "chris"])]
#[case(&["adam brian", "chris, dave", "ed"])]
#[case(&["ad\"am", "\"brian", "chris\"", "\"dave\""])]
#[case(&["\"adam brian\", \"chris, dave", "ed, frank", "gary"])]
fn rendering_is_stable_across_a_round_trip(#[case] tags: &[&str]) {
    let rendered = render_tags(tags);
    assert_eq!(render_tags(parse_tags(&rendered, true)), rendered);
}

#[test]
fn raw_mode_reports_incomplete_trailing_tag() {
    let (tags, raws) = parse_raw("chris,adam,brian", true).into_parts();
    assert_eq!(tags, vec!["chris", "adam", "brian"]);
    assert_eq!(
        raws,
        vec![
            Remainder::Closed("adam,brian"),
            Remainder::Closed("brian"),
            Remainder::Incomplete,
        ]
    );
}

#[test]
fn limit_errors_carry_the_configured_maximum() {
    let options = ParseOptions::default().with_max_count(2);
    let Err(TagError::TooManyTags(info)) = parse_tags_with("\"adam\",\"brian\",chris", &options)
    else {
        panic!("expected tag limit error");
    };
    assert_eq!(info.max, 2);
    assert_eq!(info.found, 3);
    assert_eq!(info.to_string(), "this field can only have 2 arguments");
}

#[test]
fn live_editing_then_commit_normalises_once() {
    let value = "chris brian ad";
    let edit = match accept_suggestion(value, value.len(), "adam smith", true) {
        Ok(edit) => edit,
        Err(err) => panic!("caret should be valid: {err}"),
    };
    assert_eq!(edit.value, "chris brian \"adam smith\"");
    assert_eq!(
        normalise(&edit.value, &ParseOptions::default()),
        Ok("\"adam smith\", brian, chris".to_string())
    );
}

#[test]
fn tokenize_returns_the_unfinished_tag_to_the_input() {
    let tokens = tokenize("\"adam one", true);
    assert!(tokens.completed.is_empty());
    assert_eq!(tokens.remainder, "\"adam one");
}

#[cfg(feature = "serde")]
#[test]
fn raw_tags_serialise_incomplete_as_null() {
    let raw = parse_raw("adam,bri", true);
    let json = match serde_json::to_value(&raw) {
        Ok(json) => json,
        Err(err) => panic!("raw tags should serialise: {err}"),
    };
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "adam", "remainder": "bri", "span": {"start": 0, "end": 4}},
            {"name": "bri", "remainder": null, "span": {"start": 5, "end": 8}},
        ])
    );
}
