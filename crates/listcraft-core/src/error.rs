use thiserror::Error;

/// Core error type shared across listcraft crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The banned-term policy cannot be built.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
    /// Limits or other settings are inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results returned by listcraft crates.
pub type Result<T> = std::result::Result<T, Error>;
