//! Tests for metadata extraction and continuation handling

use crate::app::services::record_parser::parse_metadata;

#[test]
fn test_basic_key_value_extraction() {
    let text = "#TITLE  Neutron capture cross section of Pb-204\n\
                #YEAR   1998\n\
                #REACTION (82-PB-204(N,G)82-PB-205,,SIG)\n";

    let record = parse_metadata(text);

    assert_eq!(
        record.get("TITLE"),
        Some("Neutron capture cross section of Pb-204")
    );
    assert_eq!(record.get("YEAR"), Some("1998"));
    assert_eq!(
        record.get("REACTION"),
        Some("(82-PB-204(N,G)82-PB-205,,SIG)")
    );
    assert_eq!(record.len(), 3);
}

#[test]
fn test_continuation_appends_space_joined() {
    let text = "#TITLE Example\n#+ continued\n";

    let record = parse_metadata(text);

    assert_eq!(record.get("TITLE"), Some("Example continued"));
}

#[test]
fn test_multiple_continuations() {
    let text = "#AUTHORS R.L.Macklin,\n#+ J.Halperin,\n#+ R.R.Winters\n";

    let record = parse_metadata(text);

    assert_eq!(
        record.get("AUTHORS"),
        Some("R.L.Macklin, J.Halperin, R.R.Winters")
    );
}

#[test]
fn test_unrecognized_key_resets_continuation_state() {
    // The DETECTOR line is not in the recognized set; the continuation that
    // follows it must be dropped rather than appended to TITLE
    let text = "#TITLE Example\n\
                #DETECTOR Ionization chamber\n\
                #+ orphaned text\n";

    let record = parse_metadata(text);

    assert_eq!(record.get("TITLE"), Some("Example"));
    assert!(!record.contains("DETECTOR"));
}

#[test]
fn test_later_occurrence_overwrites() {
    let text = "#YEAR 1997\n#YEAR 1998\n";

    let record = parse_metadata(text);

    assert_eq!(record.get("YEAR"), Some("1998"));
}

#[test]
fn test_non_marker_lines_ignored() {
    let text = "random text\n\
                #TITLE Example\n\
                1.0 2.0 3.0\n";

    let record = parse_metadata(text);

    assert_eq!(record.len(), 1);
    assert_eq!(record.get("TITLE"), Some("Example"));
}

#[test]
fn test_bare_marker_line_preserves_continuation_state() {
    // A '#' line with no content is skipped without clearing the current
    // field, so the continuation still attaches to TITLE
    let text = "#TITLE Example\n#\n#+ continued\n";

    let record = parse_metadata(text);

    assert_eq!(record.get("TITLE"), Some("Example continued"));
}

#[test]
fn test_leading_continuation_is_dropped() {
    let text = "#+ orphan before any field\n#TITLE Example\n";

    let record = parse_metadata(text);

    assert_eq!(record.len(), 1);
    assert_eq!(record.get("TITLE"), Some("Example"));
}

#[test]
fn test_key_with_no_value() {
    let text = "#TARGET\n";

    let record = parse_metadata(text);

    assert_eq!(record.get("TARGET"), Some(""));
}

#[test]
fn test_empty_input() {
    let record = parse_metadata("");
    assert!(record.is_empty());
}
