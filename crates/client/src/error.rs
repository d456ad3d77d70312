/// Errors surfaced by the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Api {
        status: u16,
        /// The server's `error` string, or a generic fallback.
        message: String,
    },

    /// The configured base URL cannot carry a project path.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The editor draft is missing required fields.
    #[error("{0}")]
    Validation(String),

    /// A mutation was attempted outside admin mode.
    #[error("Admin mode is required for this action")]
    AdminRequired,
}
