use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Discount configuration is not a valid rule array: {0}")]
    ConfigMalformed(#[source] serde_json::Error),

    #[error("Run input is not valid JSON: {0}")]
    InputMalformed(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
