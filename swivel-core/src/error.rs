// Error types for the Swivel core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Logic error: {0}")]
    Logic(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Unregistered static strategy: {0}")]
    UnresolvedStrategy(String),

    #[error("Invalid feature slug: {0}")]
    InvalidSlug(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;
