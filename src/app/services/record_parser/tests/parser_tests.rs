//! Tests for full-record parsing orchestration

use crate::app::services::record_parser::parse_record;

const SAMPLE_C5M: &str = "\
#TITLE  Neutron capture cross section of Pb-204\n\
#+ measured with the ORELA spectrometer\n\
#AUTHORS R.L.Macklin, J.Halperin\n\
#YEAR   1998\n\
#INSTITUTE (1USAORL)\n\
#REACTION (82-PB-204(N,G)82-PB-205,,SIG)\n\
#MF      3\n\
#MT      102\n\
#COVARDATA\n\
#E-min      E-max       Data        Std%   Corr%\n\
0.0 1.0 10.0 5.0 100\n\
1.0 2.0 20.0 8.0 50 100\n\
#/COVARDATA\n";

#[test]
fn test_full_record_parse() {
    let result = parse_record(SAMPLE_C5M);

    assert_eq!(
        result.metadata.get("TITLE"),
        Some("Neutron capture cross section of Pb-204 measured with the ORELA spectrometer")
    );
    assert_eq!(result.metadata.get("MT"), Some("102"));
    assert_eq!(result.stats.metadata_fields, 7);

    let cov = result.covariance.expect("covariance block present");
    assert_eq!(cov.len(), 2);
    assert_eq!(cov.sigma, vec![0.5, 1.6]);
    assert_eq!(cov.corr[0][1], 0.5);
    assert_eq!(result.stats.rows_parsed, 2);
}

#[test]
fn test_record_without_covariance_block() {
    let result = parse_record("#TITLE Example\n#YEAR 1998\n");

    assert_eq!(result.stats.metadata_fields, 2);
    assert!(result.covariance.is_none());
    assert_eq!(result.stats.total_rows, 0);
}

#[test]
fn test_block_present_but_empty_yields_empty_covariance() {
    let result = parse_record("#COVARDATA\n#/COVARDATA\n");

    let cov = result.covariance.expect("block markers present");
    assert!(cov.is_empty());
}

#[test]
fn test_success_rate_reflects_skipped_rows() {
    let text = "#COVARDATA\n\
                0.0 1.0 10.0 5.0 100\n\
                not a data row at all\n\
                #/COVARDATA\n";

    let result = parse_record(text);

    assert_eq!(result.stats.total_rows, 2);
    assert_eq!(result.stats.rows_parsed, 1);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.success_rate(), 50.0);
}
