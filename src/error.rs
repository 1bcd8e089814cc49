//! Error types for catalog lookups, ladder calculation and report output

use thiserror::Error;

/// Errors raised while building ladders or rendering reports
#[derive(Debug, Error)]
pub enum LadderError {
    /// Institution name not present in the catalog
    #[error("Unknown institution: {0}")]
    UnknownInstitution(String),

    /// Strategy key or name not present in the catalog
    #[error("Unknown ladder strategy: {0}")]
    UnknownStrategy(String),

    /// Term label that is neither `<n>mo` nor `<n>yr`
    #[error("Invalid term label: {0}. Expected e.g. 6mo or 2yr.")]
    InvalidTerm(String),

    /// Rate table has no entry for a term that must be quoted exactly
    #[error("{institution} publishes no rate for {term}")]
    MissingRate { institution: String, term: String },

    /// Maturity date past the end of the supported calendar
    #[error("{term} rung matures outside the supported date range")]
    DateOutOfRange { term: String },

    /// Failure writing report output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure writing CSV rows
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure serializing the JSON snapshot
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate result type
pub type Result<T> = std::result::Result<T, LadderError>;
