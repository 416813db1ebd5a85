//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(
        "Class {name} could not be found neither in the compilation unit, nor in the runtime registry"
    )]
    StatusClassNotFound { name: String },

    #[error("Duplicate type definition: {name}")]
    DuplicateType { name: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
