//! Tests for tabular reading and column resolution

pub mod reader_tests;
