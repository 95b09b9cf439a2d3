//! Application constants for the EXFOR processor
//!
//! This module contains the Web API endpoints, the C5M format markers,
//! the recognized metadata key set, and the column-name priority lists
//! used throughout the EXFOR processor.

// =============================================================================
// Web API Endpoints and Client Identity
// =============================================================================

/// Base URL of the IAEA EXFOR Web API
pub const DEFAULT_BASE_URL: &str = "https://nds.iaea.org/exfor";

/// Dataset search endpoint (list datasets matching criteria)
pub const SEARCH_ENDPOINT: &str = "x4list";

/// Single dataset / entry retrieval endpoint
pub const DATASET_ENDPOINT: &str = "x4get";

/// One-step search-and-retrieve endpoint for many datasets
pub const BULK_ENDPOINT: &str = "x4dat";

/// User-Agent header sent with every request
pub const USER_AGENT: &str = "exfor-processor/0.1 (+https://nds.iaea.org/exfor/x4guide/API/)";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Retry Constants for Transient Errors
// =============================================================================

/// Maximum number of attempts per request
pub const MAX_RETRY_ATTEMPTS: usize = 3;

/// Base backoff in seconds; attempt n waits BASE + n seconds
pub const RETRY_BACKOFF_BASE_SECS: u64 = 1;

// =============================================================================
// C5M Format Markers
// =============================================================================

/// Marker character that begins every metadata line
pub const METADATA_MARKER: char = '#';

/// Two-character prefix of a metadata continuation line
pub const CONTINUATION_MARKER: &str = "#+";

/// Line prefix that opens the covariance block
pub const COVARIANCE_START_MARKER: &str = "#COVARDATA";

/// Line prefix that closes the covariance block
pub const COVARIANCE_END_MARKER: &str = "#/COVARDATA";

/// Minimum token count for a covariance data row
/// (E_min, E_max, value, std_pct before any correlation entries)
pub const COVARIANCE_ROW_MIN_TOKENS: usize = 4;

/// Metadata keys recognized in C5M headers; anything else resets the
/// continuation state so unrelated fields are never concatenated
pub const RECOGNIZED_METADATA_KEYS: &[&str] = &[
    "TITLE",
    "AUTHORS",
    "AUTHOR1",
    "YEAR",
    "REFERENCE1",
    "X4REF1",
    "INSTITUTE",
    "METHOD",
    "REACTION",
    "MF",
    "MT",
    "TARGET",
    "PROJ",
    "PRODUCT",
];

// =============================================================================
// Tabular Column Resolution
// =============================================================================

/// Column name candidates for the two EXFOR CSV export conventions.
///
/// The computational export (plus=1) uses EN/DATA field prefixes with unit
/// suffixes; the universal export (plus=2) uses short symbolic names with an
/// optional d-prefix for uncertainties. Candidates are tried in order and
/// the first one present in the header union wins.
pub mod columns {
    /// Independent variable (incident energy) candidates, highest priority first
    pub const ENERGY_PRIORITY: &[&str] = &[
        "EN (EV) 1.1", // plus=1
        "x2(eV)",      // plus=2 incident energy
        "EN(EV)",      // sometimes without space
        "x1(eV)",      // rare
    ];

    /// Dependent value candidates, highest priority first
    pub const VALUE_PRIORITY: &[&str] = &[
        "DATA (B) 0.1", // plus=1
        "y",            // plus=2 numeric value
        "y:Value",      // label column sometimes used to describe units
        "Data(B)",
        "DATA(B)",
    ];

    /// Uncertainty candidates, highest priority first
    pub const UNCERTAINTY_PRIORITY: &[&str] = &[
        "DATA-ERR (B) 0.911",
        "ERR-T",
        "ERR-S",
        "ERR-SYS",
        "dy",
    ];

    /// Structural fallback: energy headers start with this prefix...
    pub const ENERGY_FIELD_PREFIX: &str = "EN";

    /// ...and contain this unit marker (both compared uppercased)
    pub const ENERGY_UNIT_MARKER: &str = "EV";

    /// Structural fallback: value headers start with this prefix (uppercased)
    pub const VALUE_FIELD_PREFIX: &str = "DATA";

    /// Short alias accepted verbatim as the value column
    pub const VALUE_COLUMN_ALIAS: &str = "y";
}

/// Explicit missing-value marker in CSV exports (matched case-insensitively)
pub const CSV_MISSING_VALUE: &str = "null";

// =============================================================================
// Retrieval Operation Vocabularies
// =============================================================================

/// Valid `op` codes for single-dataset retrieval (x4get)
pub const DATASET_OPS: &[&str] = &["csv", "c4", "c5", "c5a", "c5m", "c5ma"];

/// Valid `op` codes for bulk retrieval (x4dat)
pub const BULK_OPS: &[&str] = &["c4", "c5", "c5a", "c5m", "c5ma"];

/// Valid output format flags for dataset search (x4list)
pub const SEARCH_OUTPUTS: &[&str] = &["json", "xml", "csv", "txt"];

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a metadata key belongs to the recognized set
pub fn is_recognized_metadata_key(key: &str) -> bool {
    RECOGNIZED_METADATA_KEYS.contains(&key)
}

/// Check whether a header qualifies as an energy column under the
/// structural fallback rule
pub fn is_energy_like_header(header: &str) -> bool {
    let upper = header.to_uppercase();
    upper.starts_with(columns::ENERGY_FIELD_PREFIX) && upper.contains(columns::ENERGY_UNIT_MARKER)
}

/// Check whether a header qualifies as a value column under the
/// structural fallback rule
pub fn is_value_like_header(header: &str) -> bool {
    header.to_uppercase().starts_with(columns::VALUE_FIELD_PREFIX)
        || header == columns::VALUE_COLUMN_ALIAS
}
