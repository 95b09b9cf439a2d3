//! Tests for C5M record parsing components

pub mod covariance_tests;
pub mod matrix_tests;
pub mod metadata_tests;
pub mod parser_tests;
