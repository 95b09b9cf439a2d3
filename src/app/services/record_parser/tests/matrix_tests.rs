//! Tests for triangular-to-full matrix reconstruction

use crate::app::models::CovariancePoint;
use crate::app::services::record_parser::{reconstruct, ParseStats};

fn point(e_min: f64, e_max: f64, value: f64, std_pct: f64, correlations: Vec<f64>) -> CovariancePoint {
    CovariancePoint {
        e_min,
        e_max,
        value,
        std_pct,
        correlations,
    }
}

#[test]
fn test_empty_input_yields_empty_result() {
    let mut stats = ParseStats::new();
    let data = reconstruct(&[], &mut stats);
    assert!(data.is_empty());
    assert!(data.corr.is_empty());
    assert!(data.cov.is_empty());
}

#[test]
fn test_spec_worked_example() {
    // row0 = "0.0 1.0 10.0 5.0 100", row1 = "1.0 2.0 20.0 8.0 50 100"
    let points = vec![
        point(0.0, 1.0, 10.0, 5.0, vec![100.0]),
        point(1.0, 2.0, 20.0, 8.0, vec![50.0, 100.0]),
    ];

    let mut stats = ParseStats::new();
    let data = reconstruct(&points, &mut stats);

    assert_eq!(data.len(), 2);
    assert_eq!(data.sigma, vec![0.5, 1.6]);
    assert_eq!(data.corr, vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
    assert!((data.cov[0][1] - 0.4).abs() < 1e-12);
    assert!((data.cov[1][0] - 0.4).abs() < 1e-12);
    assert!((data.cov[0][0] - 0.25).abs() < 1e-12);
    assert!((data.cov[1][1] - 2.56).abs() < 1e-12);
    assert_eq!(data.energy_bounds, vec![(0.0, 1.0), (1.0, 2.0)]);
}

#[test]
fn test_matrices_are_symmetric() {
    let points = vec![
        point(0.0, 1.0, 10.0, 5.0, vec![100.0]),
        point(1.0, 2.0, 20.0, 8.0, vec![30.0, 100.0]),
        point(2.0, 3.0, 15.0, 4.0, vec![10.0, 60.0, 100.0]),
    ];

    let mut stats = ParseStats::new();
    let data = reconstruct(&points, &mut stats);

    let n = data.len();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(data.corr[i][j], data.corr[j][i]);
            assert_eq!(data.cov[i][j], data.cov[j][i]);
            assert!((data.cov[i][j] - data.corr[i][j] * data.sigma[i] * data.sigma[j]).abs() < 1e-12);
        }
    }
}

#[test]
fn test_diagonal_defaults_to_one_when_not_listed() {
    // Row 1 lists only its correlation with row 0, not its own diagonal
    let points = vec![
        point(0.0, 1.0, 10.0, 5.0, vec![]),
        point(1.0, 2.0, 20.0, 8.0, vec![25.0]),
    ];

    let mut stats = ParseStats::new();
    let data = reconstruct(&points, &mut stats);

    assert_eq!(data.corr[0][0], 1.0);
    assert_eq!(data.corr[1][1], 1.0);
    assert_eq!(data.corr[1][0], 0.25);
    assert_eq!(data.corr[0][1], 0.25);
}

#[test]
fn test_diagonal_can_be_overwritten_by_row_data() {
    let points = vec![point(0.0, 1.0, 10.0, 5.0, vec![90.0])];

    let mut stats = ParseStats::new();
    let data = reconstruct(&points, &mut stats);

    assert_eq!(data.corr[0][0], 0.9);
}

#[test]
fn test_entries_beyond_diagonal_are_ignored_and_counted() {
    // Row 0 lists two extra entries past its diagonal; they must not land
    // anywhere in the matrix
    let points = vec![
        point(0.0, 1.0, 10.0, 5.0, vec![100.0, 70.0, 80.0]),
        point(1.0, 2.0, 20.0, 8.0, vec![50.0, 100.0]),
    ];

    let mut stats = ParseStats::new();
    let data = reconstruct(&points, &mut stats);

    assert_eq!(stats.tokens_out_of_range, 2);
    assert_eq!(data.corr[0][1], 0.5); // from row 1, not row 0's overflow
    assert_eq!(data.corr[1][0], 0.5);
}

#[test]
fn test_sigma_independent_of_correlation_data() {
    let points = vec![point(0.0, 1.0, 200.0, 2.5, vec![])];

    let mut stats = ParseStats::new();
    let data = reconstruct(&points, &mut stats);

    assert_eq!(data.sigma, vec![5.0]);
}
