use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("-{0} flag has to be specified")]
    MissingFlag(&'static str),

    #[error("Operation {0} not allowed!")]
    UnknownOperation(String),

    #[error("Invalid item JSON: {0}")]
    InvalidItem(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
