//! Input coercion at the pipeline boundary.

use axiom_engine::EngineSettings;

use crate::common::{buffered_engine, quiet_engine};

#[test]
fn numeric_text_produces_the_same_trace_as_the_float() {
    let engine = quiet_engine();
    let from_text = engine.run("12345.6789").unwrap();
    let from_number = engine.run(12345.6789).unwrap();
    assert_eq!(from_text.input(), from_number.input());
    assert_eq!(from_text.trace(), from_number.trace());
    assert_eq!(from_text.nucleus(), from_number.nucleus());
    assert_eq!(from_text.verdict(), from_number.verdict());
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let engine = quiet_engine();
    let result = engine.run("  24714.9130\n").unwrap();
    assert_eq!(result.input(), 24714.9130);
}

#[test]
fn unconvertible_input_is_a_structured_error() {
    let engine = quiet_engine();
    for raw in ["not a number", "", "12,5", "0x1f", "--3"] {
        let err = engine.run(raw).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input type", "input {raw:?}");
    }
}

#[test]
fn failed_coercion_invokes_no_stage() {
    let (engine, sink) = buffered_engine(EngineSettings::default());
    let banner_len = sink.entries().len();

    engine.run("not a number").unwrap_err();

    let entries = sink.entries();
    let new_tags: Vec<&str> = entries[banner_len..]
        .iter()
        .map(|(tag, _)| tag.as_str())
        .collect();
    assert_eq!(new_tags, ["ERROR"], "only the coercion error is reported");
}
