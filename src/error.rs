#[derive(Debug, thiserror::Error)]
pub enum TickerError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Exceeds maximum interval: {0}")]
    ExceedsMaximumInterval(String),

    #[error("No data: {0}")]
    NoData(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, TickerError>;
