use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy configuration error: {0}")]
    Config(String),

    #[error("unknown policy {0:?} (expected random, back-to-front)")]
    UnknownPolicy(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
