// Evnames End-to-End Generation Tests
//
// These tests verify the complete pipeline on a realistic header slice:
// header text -> extract -> render, compared against golden artifacts.
//
// Run with: cargo test --test generate_test

use evnames_core::{extract, render, Category, OutputFormat};

const SAMPLE_HEADER: &str = include_str!("data/sample-input.h");
const EXPECTED_C: &str = include_str!("data/expected-event-names.h");
const EXPECTED_PYTHON: &str = include_str!("data/expected-event-names.py");

#[test]
fn test_sample_header_classification() {
    let constants = extract(SAMPLE_HEADER.lines());

    let events = constants.table(Category::Event).unwrap();
    assert_eq!(events.get(&1).map(String::as_str), Some("EV_KEY"));

    let keys = constants.table(Category::Key).unwrap();
    assert_eq!(keys.get(&28).map(String::as_str), Some("KEY_ENTER"));
    assert_eq!(keys.get(&272).map(String::as_str), Some("BTN_LEFT"));

    // EV_VERSION and BTN_MOUSE are denylisted; KEY_MIN_INTERESTING has a
    // macro value and is skipped.
    assert!(!events.values().any(|n| n == "EV_VERSION"));
    assert!(!keys.values().any(|n| n == "BTN_MOUSE"));
    assert!(!keys.values().any(|n| n == "KEY_MIN_INTERESTING"));
}

#[test]
fn test_c_artifact_matches_golden_file() {
    let constants = extract(SAMPLE_HEADER.lines());
    assert_eq!(render(&constants, OutputFormat::C), EXPECTED_C);
}

#[test]
fn test_python_artifact_matches_golden_file() {
    let constants = extract(SAMPLE_HEADER.lines());
    assert_eq!(render(&constants, OutputFormat::Python), EXPECTED_PYTHON);
}

#[test]
fn test_both_modes_tolerate_empty_input() {
    let constants = extract(std::iter::empty::<&str>());
    let c = render(&constants, OutputFormat::C);
    assert!(c.contains("static const char * const ev_map[EV_MAX + 1] = {"));
    assert!(c.ends_with("#endif /* EVENT_NAMES_H */\n"));

    let py = render(&constants, OutputFormat::Python);
    assert!(py.contains("\nmap = {\n}\n"));
    assert!(py.contains("return 'UNKNOWN'"));
}
