//! Exercises the file-reading collaborator path: puzzle text on disk,
//! read and trimmed the way the `sudoku-check` binary does before it
//! hands the blob to the core.

use std::fs;
use std::io::Write;

use sudoku_validator::validation::validate;
use tempfile::NamedTempFile;

const SOLVED: &str = "534678912\n\
                      672195348\n\
                      198342567\n\
                      859761423\n\
                      426853791\n\
                      713924856\n\
                      961537284\n\
                      287419635\n\
                      345286179";

#[test]
fn test_puzzle_file_with_trailing_newline_validates_after_trim() {
    let mut file = NamedTempFile::new().expect("create temp puzzle file");
    writeln!(file, "{SOLVED}").expect("write puzzle");

    let raw = fs::read_to_string(file.path()).expect("read puzzle back");
    assert_eq!(validate(raw.trim_end()).code(), 1);
}

#[test]
fn test_untrimmed_trailing_newline_reaches_core_as_extra_row() {
    let mut file = NamedTempFile::new().expect("create temp puzzle file");
    writeln!(file, "{SOLVED}").expect("write puzzle");

    // Without the wrapper's trim the core sees a tenth, empty row token.
    let raw = fs::read_to_string(file.path()).expect("read puzzle back");
    assert_eq!(validate(&raw).code(), 0);
}

#[test]
fn test_crlf_puzzle_file_validates() {
    let mut file = NamedTempFile::new().expect("create temp puzzle file");
    write!(file, "{}", SOLVED.replace('\n', "\r\n")).expect("write puzzle");

    let raw = fs::read_to_string(file.path()).expect("read puzzle back");
    assert_eq!(validate(raw.trim_end()).code(), 1);
}

#[test]
fn test_json_report_serializes() {
    let broken = SOLVED.replace("534678912", "534678915");
    let report = serde_json::to_string_pretty(&validate(&broken)).expect("serialize report");
    assert!(report.contains("\"diagnostics\""));
    assert!(report.contains("row 1"));
}
