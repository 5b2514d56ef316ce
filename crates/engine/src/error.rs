//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`DuplicateName`] thrown when a unique name is already taken.
//! - [`NotFound`] thrown when a referenced row does not exist.
//! - [`InUse`] thrown when a delete is blocked by a dish reference.
//! - [`InvalidInput`] thrown when a value fails validation.
//!
//!  [`DuplicateName`]: EngineError::DuplicateName
//!  [`NotFound`]: EngineError::NotFound
//!  [`InUse`]: EngineError::InUse
//!  [`InvalidInput`]: EngineError::InvalidInput
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" already present!")]
    DuplicateName(String),
    #[error("\"{0}\" not found!")]
    NotFound(String),
    #[error("\"{0}\" still in use!")]
    InUse(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateName(a), Self::DuplicateName(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::InUse(a), Self::InUse(b)) => a == b,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
