use thiserror::Error;

/// Failure while fetching a single sheet tab
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Request URL could not be built from the configured base
    #[error("invalid request URL: {0}")]
    Url(String),

    /// Transport failure (DNS, TLS, connection reset, ...)
    #[error("HTTP request for sheet '{sheet}' failed: {message}")]
    Request { sheet: String, message: String },

    /// Non-2xx response from the values endpoint
    #[error("sheet '{sheet}' returned HTTP {status}")]
    Status { sheet: String, status: u16 },

    /// Response body was not a values payload
    #[error("malformed payload for sheet '{sheet}': {message}")]
    Decode { sheet: String, message: String },
}

/// bizsync error types
#[derive(Error, Debug)]
pub enum SyncError {
    /// Required configuration absent
    #[error("missing required environment variables: {}", missing.join(", "))]
    Config { missing: Vec<String> },

    /// Sheet fetch failed
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Header row does not match the expected column layout
    #[error("header mismatch: {0}")]
    Header(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bizsync
pub type Result<T> = std::result::Result<T, SyncError>;
