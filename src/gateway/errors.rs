use thiserror::Error;

/// Stable user-facing message shown when the backend rejects field values.
pub const VALIDATION_FAILED_MESSAGE: &str =
    "The server rejected one or more client fields. Review the form and try again.";

/// Substring the backend embeds in field-rejection messages.
pub(crate) const VALIDATION_FAILED_PATTERN: &str = "Client validation failed";

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("http error: {0}")]
    Http(String),

    /// Non-success HTTP status with whatever message the backend supplied.
    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The backend rejected submitted field values.
    #[error("{VALIDATION_FAILED_MESSAGE}")]
    Validation(String),

    /// The response body did not match the canonical envelope. Treated as a
    /// hard error, never as success.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// The gateway could not be constructed from its configuration.
    #[error("gateway configuration error: {0}")]
    Config(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Http(err.to_string())
    }
}
