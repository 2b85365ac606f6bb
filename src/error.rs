use thiserror::Error;

/// Errors that can occur while building a client or transmitting metrics.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// A custom error with a free-form message.
    #[error("Custom error: {0}")]
    Custom(String),

    /// An I/O error from the standard library.
    #[error("Std Io error: {0}")]
    StdIo(#[from] std::io::Error),

    /// The destination address did not resolve to any socket address.
    #[error("Address resolution error: {0}")]
    Resolve(String),

    /// The client was closed and its transport released.
    #[error("Client is closed")]
    Closed,
}

impl From<String> for MetricsError {
    fn from(value: String) -> Self {
        Self::Custom(value)
    }
}

impl From<&str> for MetricsError {
    fn from(value: &str) -> Self {
        Self::Custom(value.to_string())
    }
}
