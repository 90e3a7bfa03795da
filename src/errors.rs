use thiserror::Error;

/// Fatal conditions detected before any mutating call is issued.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
