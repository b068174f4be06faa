//! Error types for the auth flow.

use thiserror::Error;

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// PORT is set but not a valid port number.
    #[error("invalid PORT value: '{0}'")]
    InvalidPort(String),
}

/// Errors from decoding the payload segment of a compact JWT.
#[derive(Debug, Error)]
pub enum JwtError {
    /// The token has no payload segment (fewer than two dot-separated parts).
    #[error("token has no payload segment")]
    MissingPayload,

    /// The payload segment is not valid base64url.
    #[error("payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded payload is not valid JSON for the requested claims.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from building provider URLs or exchanging tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The configured Cognito base URI is not an absolute URL.
    #[error("invalid Cognito base URI: '{0}'")]
    InvalidBaseUri(String),

    /// A provider or redirect URL could not be constructed.
    #[error("URL construction failed: {0}")]
    Url(#[from] url::ParseError),

    /// The token endpoint request failed at the network level.
    #[error("token endpoint request failed: {0}")]
    TokenEndpoint(#[from] reqwest::Error),

    /// The ID token returned by the provider does not decode.
    #[error("ID token decode failed: {0}")]
    Jwt(#[from] JwtError),
}
