use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Prompt missing")]
    MissingPrompt,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Malformed translation output: {0}")]
    MalformedOutput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
