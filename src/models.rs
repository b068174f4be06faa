use serde::{Deserialize, Serialize};

/// Token endpoint response.
///
/// Every field is optional so that provider error bodies such as
/// `{"error": "invalid_grant"}` still deserialize; callers check the shape
/// rather than relying on HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Claims read from the unverified `id_token` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct IdTokenClaims {
    pub email: String,
}

/// Request-scoped identity, attached as a request extension by the
/// session gate and read by protected handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub email: String,
}
