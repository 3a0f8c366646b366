use std::error::Error;

use tja_rs::tja::{DecodeError, decode_str, parse::ParseError};

fn decode_err(source: &str) -> DecodeError {
    decode_str(source).expect_err("must fail to decode")
}

#[test]
fn line_without_colon() {
    let err = decode_err("TITLE:Example\nGARBAGE\nCOURSE:Oni\n");

    assert_eq!(err.line_number, 2);
    assert_eq!(err.line, "GARBAGE");
    let message = err.to_string();
    assert!(message.contains("line 2"), "message was: {message}");
    assert!(message.contains("\"GARBAGE\""), "message was: {message}");
    assert!(matches!(err.cause, ParseError::MissingColon));
}

#[test]
fn end_of_stream_during_metadata() {
    let err = decode_err("TITLE:Colorful Voice\nSUBTITLE:cosMo\nBPM:240\n");

    // Three lines plus the read that detected end of stream.
    assert_eq!(err.line_number, 4);
    assert_eq!(err.line, "");
    assert_eq!(
        err.source().expect("must have a cause").to_string(),
        "encountered end of stream when parsing metadata"
    );
}

#[test]
fn duplicate_metadata_key_reports_both_values() {
    let err = decode_err("BPM:100\nBPM:200\nCOURSE:Oni\n");

    assert_eq!(err.line_number, 2);
    let cause = err.cause.to_string();
    assert!(cause.contains("`BPM`"), "cause was: {cause}");
    assert!(cause.contains("100"), "cause was: {cause}");
    assert!(cause.contains("200"), "cause was: {cause}");
}

/// The old value in a duplicate-key message is the canonical token of the
/// stored variant, not the alias the file used.
#[test]
fn duplicate_enum_key_renders_the_canonical_token() {
    let err = decode_err("SIDE:2\nSIDE:Normal\nCOURSE:Oni\n");

    assert_eq!(
        err.cause.to_string(),
        "attempted to set key `SIDE` to `Normal`, but it was already set to `Ex`"
    );
}

#[test]
fn duplicate_level_in_one_course() {
    let err = decode_err("TITLE:Example\nCOURSE:Oni\nLEVEL:12\nLEVEL:7\n");

    assert_eq!(err.line_number, 4);
    assert_eq!(
        err.cause.to_string(),
        "attempted to set key `LEVEL` to `7`, but it was already set to `12`"
    );
}

/// The duplicate check comes first, so a blank re-assignment still faults.
#[test]
fn blank_reassignment_is_still_a_duplicate() {
    let err = decode_err("BPM:100\nBPM:\nCOURSE:Oni\n");

    assert!(matches!(&err.cause, ParseError::DuplicateKey { key, .. } if key == "BPM"));
}

#[test]
fn duplicate_balloon_renders_the_comma_joined_list() {
    let err = decode_err("TITLE:Example\nCOURSE:Oni\nBALLOON:3,5,7,\nBALLOON:9\n");

    assert_eq!(
        err.cause.to_string(),
        "attempted to set key `BALLOON` to `9`, but it was already set to `3,5,7`"
    );
}

#[test]
fn unknown_metadata_key() {
    let err = decode_err("WAVY:foo.ogg\nCOURSE:Oni\n");

    assert_eq!(
        err.cause.to_string(),
        "key `WAVY` does not match any field of `Metadata`"
    );
}

#[test]
fn unknown_language_suffix() {
    let err = decode_err("TITLEXX:foo\nCOURSE:Oni\n");

    assert_eq!(
        err.cause.to_string(),
        "key `TITLEXX` does not match any field of `LocalizedString`"
    );
}

#[test]
fn unknown_course_key() {
    let err = decode_err("TITLE:Example\nCOURSE:Oni\nSPROCKET:4\n");

    assert_eq!(
        err.cause.to_string(),
        "key `SPROCKET` does not match any field of `CourseVariant`"
    );
}

/// The dojo gauge slots are only addressable through their EXAM spellings.
#[test]
fn dojo_gauge_field_names_are_not_keys() {
    let err = decode_err("TITLE:Example\nCOURSE:Dan\nDOJOGAUGE1:g,80,95,m\n");

    assert!(matches!(
        &err.cause,
        ParseError::UnknownKey { target: "CourseVariant", key } if key == "DOJOGAUGE1"
    ));
}

#[test]
fn unknown_difficulty_token() {
    let err = decode_err("TITLE:Example\nCOURSE:Bananas\n");

    assert_eq!(err.line_number, 2);
    let ParseError::InvalidValue { key, cause, .. } = &err.cause else {
        panic!("expected an invalid-value fault, got {:?}", err.cause);
    };
    assert_eq!(key, "COURSE");
    assert!(cause.to_string().contains("`Bananas`"));
    assert!(cause.to_string().contains("`Difficulty`"));
}

#[test]
fn coercion_fault_names_key_and_shape() {
    let err = decode_err("BPM:fast\nCOURSE:Oni\n");

    assert_eq!(
        err.cause.to_string(),
        "invalid value for key `BPM`, expected a number"
    );
    assert_eq!(
        err.cause.source().expect("must have a cause").to_string(),
        "`fast` is not a valid number"
    );
}

#[test]
fn malformed_exam_descriptor() {
    let err = decode_err("TITLE:Example\nCOURSE:Dan\nEXAM1:g,80,95\n");

    assert_eq!(err.line_number, 3);
    assert_eq!(
        err.cause.to_string(),
        "invalid value for key `EXAM1`, expected an exam descriptor"
    );
}

#[test]
fn malformed_boolean() {
    let err = decode_err("TITLE:Example\nCOURSE:Oni\nHIDDENBRANCH:yes\n");

    assert_eq!(
        err.cause.source().expect("must have a cause").to_string(),
        "`yes` is not a valid boolean, expected `0` or `1`"
    );
}
