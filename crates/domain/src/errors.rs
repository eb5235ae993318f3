use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Required field missing or empty: {0}")]
    MissingRequiredField(&'static str),
}
