use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatakitError {
    #[error("Malformed relation '{relation}': {reason}")]
    MalformedRelation { relation: String, reason: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DatakitError>;
