//! Symmetric matrix reconstruction from triangular covariance rows
//!
//! Builds the full N x N correlation matrix, the per-point sigma vector, and
//! the covariance matrix from the ordered covariance points. Pure and
//! deterministic, O(N^2), with no error conditions beyond the empty-input
//! short-circuit.

use super::stats::ParseStats;
use crate::app::models::{CovarianceData, CovariancePoint};
use tracing::warn;

/// Reconstruct correlation, sigma, and covariance from ordered points.
///
/// Row i's correlation list entry j is the correlation in percent between
/// points i and j; the format stores a lower-triangular listing per row
/// including the diagonal, so entries are valid only for j <= i. Entries
/// beyond the diagonal indicate a layout the parser does not understand:
/// they are ignored for placement but counted and surfaced loudly so a
/// misaligned format shows up during testing instead of silently skewing
/// the matrix.
pub fn reconstruct(points: &[CovariancePoint], stats: &mut ParseStats) -> CovarianceData {
    let n = points.len();
    if n == 0 {
        return CovarianceData::default();
    }

    // Unit diagonal by default; row data may overwrite it
    let mut corr = vec![vec![0.0; n]; n];
    for (i, row) in corr.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    for (i, point) in points.iter().enumerate() {
        for (j, &pct) in point.correlations.iter().enumerate() {
            if j > i {
                warn!(
                    "Correlation row {} lists {} entries, expected at most {}; \
                     ignoring entry ({}, {})",
                    i,
                    point.correlations.len(),
                    i + 1,
                    i,
                    j
                );
                stats.tokens_out_of_range += 1;
                continue;
            }
            let rho = pct / 100.0;
            corr[i][j] = rho;
            corr[j][i] = rho;
        }
    }

    let sigma: Vec<f64> = points
        .iter()
        .map(|p| (p.std_pct / 100.0) * p.value)
        .collect();

    let mut cov = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            cov[i][j] = corr[i][j] * sigma[i] * sigma[j];
        }
    }

    CovarianceData {
        energy_bounds: points.iter().map(|p| (p.e_min, p.e_max)).collect(),
        values: points.iter().map(|p| p.value).collect(),
        std_pct: points.iter().map(|p| p.std_pct).collect(),
        sigma,
        corr,
        cov,
    }
}
