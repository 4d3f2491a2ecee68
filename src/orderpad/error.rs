use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderpadError {
    #[error("Order not found: {0}")]
    OrderNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Angle must be a number between 0 and 360, got {0}")]
    AngleOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, OrderpadError>;
