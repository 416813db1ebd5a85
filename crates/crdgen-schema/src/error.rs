//! Schema derivation error types

use thiserror::Error;

use crdgen_core::CoreError;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
