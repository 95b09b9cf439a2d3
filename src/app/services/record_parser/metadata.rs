//! C5M metadata extraction
//!
//! Parses the marker-prefixed header lines of a C5M record into a flat
//! key/value record, handling `#+` continuation lines.

use crate::app::models::MetadataRecord;
use crate::constants::{is_recognized_metadata_key, CONTINUATION_MARKER, METADATA_MARKER};
use tracing::trace;

/// Extract experiment metadata from a C5M text blob.
///
/// Lines not beginning with the `#` marker are ignored. A `#+` continuation
/// appends its trailing content, space-joined, to the most recently
/// recognized field; a line whose key is not in the recognized set clears
/// that "current field" state so unrelated metadata is never concatenated.
/// Pure function with no error conditions: malformed lines are skipped.
pub fn parse_metadata(text: &str) -> MetadataRecord {
    let mut record = MetadataRecord::new();
    // Explicit continuation target; None means continuations are dropped
    let mut current_key: Option<String> = None;

    for line in text.lines() {
        if !line.starts_with(METADATA_MARKER) {
            continue;
        }

        if let Some(rest) = line.strip_prefix(CONTINUATION_MARKER) {
            if let Some(key) = &current_key {
                if record.contains(key) {
                    record.append(key, rest.trim());
                }
            }
            continue;
        }

        let content = line[METADATA_MARKER.len_utf8()..].trim();
        if content.is_empty() {
            continue;
        }

        let (key, value) = match content.split_once(char::is_whitespace) {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (content, ""),
        };

        if is_recognized_metadata_key(key) {
            record.set(key, value);
            current_key = Some(key.to_string());
        } else {
            trace!("Unrecognized metadata key '{}', clearing continuation state", key);
            current_key = None;
        }
    }

    record
}
