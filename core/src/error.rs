use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid scale factor: {scale} (supported range is 1 to 100000)")]
    InvalidScale { scale: i32 },

    #[error("Unknown table '{name}'")]
    UnknownTable { name: String },

    #[error("Table '{name}' is a join target only and cannot be generated")]
    MetadataOnlyTable { name: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
