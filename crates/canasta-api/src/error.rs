use thiserror::Error;

/// Top-level error type for the `canasta-api` crate.
///
/// Covers every failure mode of a call: transport, response decoding, and
/// server-side rejections reported through the response envelope.
/// `canasta-core` and UI consumers surface these unchanged.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Server-side rejection parsed from the `{resultado, error}` envelope.
    ///
    /// The server reports these with arbitrary HTTP status codes, so this
    /// takes precedence over the status line. Only `message` is meaningful;
    /// no other field of the payload may be relied on.
    #[error("API error: {message}")]
    Api { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient transport error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// The server's rejection message, if this is an [`Error::Api`].
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }
}
