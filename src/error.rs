use crate::dto::rpc::ApiError;
use thiserror::Error;

/// Errors surfaced by the session manager and the RPC gateway.
#[derive(Error, Debug)]
pub enum BetfairError {
    /// The request never produced a response body (connect, TLS, read failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with an empty body or a JSON `null`.
    #[error("empty response from {endpoint}")]
    EmptyResponse { endpoint: String },

    /// The endpoint answered with something that is not JSON.
    #[error("unparsable response from {endpoint}: {source}")]
    InvalidResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The identity endpoint did not hand out a session token.
    #[error("login failed: status={status}, error={error}")]
    LoginFailed { status: String, error: String },

    /// A JSON-RPC `error` member, only produced by the typed decode helpers.
    #[error("API error {}: {}", .0.code, .0.message)]
    Api(ApiError),

    #[error("invalid instruction: {0}")]
    InvalidInstruction(String),
}

pub type Result<T> = std::result::Result<T, BetfairError>;
