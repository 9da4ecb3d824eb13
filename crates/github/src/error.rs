/// Errors from the release source: network, API, buffer, and config.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// GitHub returned a non-2xx status code.
    #[error("GitHub API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// Buffer or config file I/O failed.
    #[error("File I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A listing or config file was not valid JSON of the expected shape.
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
