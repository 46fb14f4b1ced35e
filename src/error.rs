use thiserror::Error;

/// Unified error type for release-tagger operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("No project id configured and no webhook trigger present")]
    MissingProject,

    #[error("No host client configured for this run")]
    NoClientConfigured,

    #[error("No tag matching schema '{schema}' found")]
    NoMatchingTag { schema: String },

    #[error("Malformed tag '{tag}': cannot split into segments")]
    MalformedTag { tag: String },

    #[error("Tag '{tag}' has non-numeric trailing segment '{segment}'")]
    NonNumericSegment { tag: String, segment: String },

    #[error("Invalid tag schema pattern '{pattern}': {reason}")]
    InvalidSchemaPattern { pattern: String, reason: String },

    #[error("Host operation failed: {0}")]
    Host(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-tagger
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a host error with context
    pub fn host(msg: impl Into<String>) -> Self {
        ReleaseError::Host(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Whether this error is an expected outcome rather than a fault.
    ///
    /// "No prior matching tag" is the normal state for a first release and
    /// must be reported as informational, not as a failure.
    pub fn is_benign(&self) -> bool {
        matches!(self, ReleaseError::NoMatchingTag { .. })
    }
}

impl From<reqwest::Error> for ReleaseError {
    fn from(err: reqwest::Error) -> Self {
        ReleaseError::Host(err.to_string())
    }
}
