//! Shared error types for the library.

use thiserror::Error;

/// Main error type for layermap operations.
///
/// The classification core itself is total; errors only arise from rule-table
/// configuration and from the scanning/reporting edges.
#[derive(Debug, Error)]
pub enum Error {
    /// Rule table misconfiguration (duplicate id, zero weight, missing field)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A rule pattern that failed to compile
    #[error("Invalid pattern in rule `{rule}`: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// Git history errors while computing churn
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Directory walk errors
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Rules file parse errors
    #[error("Rules file error: {0}")]
    RulesFile(#[from] toml::de::Error),
}

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, Error>;
