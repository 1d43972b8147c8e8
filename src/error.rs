// error.rs - Domain errors
//
// Server functions turn these into ServerFnError; binaries wrap them in
// anyhow.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstateError {
    #[error("Property not found: {0}")]
    PropertyNotFound(u32),

    #[error("Invalid contact message: {0}")]
    InvalidContact(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EstateError>;
