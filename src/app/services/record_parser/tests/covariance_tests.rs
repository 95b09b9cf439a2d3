//! Tests for covariance block location and row tokenizing

use crate::app::services::record_parser::{parse_covariance_block, ParseStats};

fn parse(text: &str) -> (Option<Vec<crate::app::models::CovariancePoint>>, ParseStats) {
    let mut stats = ParseStats::new();
    let points = parse_covariance_block(text, &mut stats);
    (points, stats)
}

#[test]
fn test_block_with_two_rows() {
    let text = "#TITLE Example\n\
                #COVARDATA\n\
                #E-min E-max Data Std Corr\n\
                0.0 1.0 10.0 5.0 100\n\
                1.0 2.0 20.0 8.0 50 100\n\
                #/COVARDATA\n";

    let (points, stats) = parse(text);
    let points = points.expect("block should be found");

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].e_min, 0.0);
    assert_eq!(points[0].e_max, 1.0);
    assert_eq!(points[0].value, 10.0);
    assert_eq!(points[0].std_pct, 5.0);
    assert_eq!(points[0].correlations, vec![100.0]);
    assert_eq!(points[1].correlations, vec![50.0, 100.0]);

    assert_eq!(stats.total_rows, 2);
    assert_eq!(stats.rows_parsed, 2);
    assert_eq!(stats.rows_skipped, 0);
}

#[test]
fn test_missing_block_reports_not_found() {
    let (points, stats) = parse("#TITLE Example\n1.0 2.0 3.0 4.0\n");
    assert!(points.is_none());
    assert_eq!(stats.total_rows, 0);
}

#[test]
fn test_missing_end_marker_reports_not_found() {
    let text = "#COVARDATA\n0.0 1.0 10.0 5.0 100\n";
    let (points, _) = parse(text);
    assert!(points.is_none());
}

#[test]
fn test_end_before_start_reports_not_found() {
    let text = "#/COVARDATA\n#COVARDATA\n";
    let (points, _) = parse(text);
    assert!(points.is_none());
}

#[test]
fn test_empty_block_yields_empty_points() {
    let text = "#COVARDATA\n#header only\n\n#/COVARDATA\n";
    let (points, stats) = parse(text);
    assert_eq!(points.unwrap().len(), 0);
    assert_eq!(stats.total_rows, 0);
}

#[test]
fn test_short_row_is_skipped() {
    let text = "#COVARDATA\n\
                0.0 1.0 10.0\n\
                0.0 1.0 10.0 5.0 100\n\
                #/COVARDATA\n";

    let (points, stats) = parse(text);
    let points = points.unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(stats.total_rows, 2);
    assert_eq!(stats.rows_skipped, 1);
    assert_eq!(stats.errors.len(), 1);
}

#[test]
fn test_unparseable_leading_field_skips_row() {
    let text = "#COVARDATA\n\
                0.0 1.0 abc 5.0 100\n\
                #/COVARDATA\n";

    let (points, stats) = parse(text);

    assert_eq!(points.unwrap().len(), 0);
    assert_eq!(stats.rows_skipped, 1);
}

#[test]
fn test_unparseable_correlation_token_is_dropped() {
    let text = "#COVARDATA\n\
                0.0 1.0 10.0 5.0 100\n\
                1.0 2.0 20.0 8.0 50 xx 100\n\
                #/COVARDATA\n";

    let (points, stats) = parse(text);
    let points = points.unwrap();

    // The row survives with the unparseable token removed; order of the
    // remaining tokens is preserved
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].correlations, vec![50.0, 100.0]);
    assert_eq!(stats.tokens_dropped, 1);
    assert_eq!(stats.rows_skipped, 0);
}

#[test]
fn test_blank_and_comment_lines_inside_block_skipped() {
    let text = "#COVARDATA\n\
                # header comment\n\
                \n\
                0.0 1.0 10.0 5.0 100\n\
                \n\
                #/COVARDATA\n";

    let (points, stats) = parse(text);

    assert_eq!(points.unwrap().len(), 1);
    assert_eq!(stats.total_rows, 1);
}

#[test]
fn test_first_end_marker_wins() {
    // Rows after the first end marker are outside the block
    let text = "#COVARDATA\n\
                0.0 1.0 10.0 5.0 100\n\
                #/COVARDATA\n\
                1.0 2.0 20.0 8.0 50 100\n\
                #/COVARDATA\n";

    let (points, _) = parse(text);
    assert_eq!(points.unwrap().len(), 1);
}
