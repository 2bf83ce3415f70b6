use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Data parse error at row {row}: {reason}")]
    DataParse { row: usize, reason: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Delivery provider error (status {status}): {body}")]
    Provider { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, DispatchError>;
