//! NOAA feed error types.

/// Errors that can occur when fetching from the NOAA feed.
#[derive(Debug, thiserror::Error)]
pub enum NoaaError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the XML document
    #[error("XML parse error: {message}")]
    Xml { message: String },

    /// Station id cannot form a request URL
    #[error("invalid station ID: {0:?}")]
    InvalidStationId(String),

    /// Mock data directory could not be loaded
    #[error("mock data error: {message}")]
    Mock { message: String },
}
