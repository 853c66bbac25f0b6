/// Errors that can occur while reading the packaged catalog.
///
/// These never reach the user: the loader swaps in the sample entity instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons an image reference could not be turned into a displayable image.
///
/// The `Display` text is the short diagnostic shown under the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("Not a valid URL and not found locally: {reference}")]
    NotFound { reference: String },

    #[error("Could not create valid URL from: {reference}")]
    InvalidUrl { reference: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP Error: {status}")]
    HttpStatus { status: u16 },

    #[error("No data received")]
    NoData,

    #[error("Could not create image from data (size: {bytes} bytes)")]
    Decode { bytes: usize },
}
