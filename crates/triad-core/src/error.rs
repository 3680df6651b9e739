//! Error types for taxonomy loading and analyzer construction.
//!
//! Per-call analysis has no error path; every lookup degrades to a documented fallback.

/// A taxonomy table failed to load or violates the 64-record invariant.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("taxonomy must hold exactly {expected} records, found {found}")]
    WrongSize { expected: usize, found: usize },

    #[error("trait id {0} is outside 1..=64")]
    IdOutOfRange(u8),

    #[error("trait id {0} appears more than once")]
    DuplicateId(u8),

    #[error("trait {0} has an empty name")]
    EmptyName(u8),

    #[error("failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while building an [`crate::Analyzer`] from configuration.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),
}
