//! Tests for request-parameter construction
