//! Unverified JWT payload decoding.
//!
//! Pulls the middle segment out of a compact `header.payload.signature`
//! token and parses it as JSON. No signature, expiry, issuer, or audience
//! checks — the claims are trusted as-is, which is the deliberate
//! simplification this skeleton makes.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;

use crate::error::JwtError;

/// Decode the payload segment of a compact JWT into caller-chosen claims.
pub fn decode_claims<T: DeserializeOwned>(token: &str) -> Result<T, JwtError> {
    let payload = token.split('.').nth(1).ok_or(JwtError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn encode_segment(value: &Value) -> String {
        URL_SAFE_NO_PAD.encode(value.to_string())
    }

    fn token_with_payload(payload: &Value) -> String {
        let header = encode_segment(&json!({"alg": "RS256", "typ": "JWT"}));
        format!("{header}.{}.signature", encode_segment(payload))
    }

    #[test]
    fn decodes_payload_exactly() {
        let payload = json!({"email": "user@example.com", "exp": 1700000000});
        let token = token_with_payload(&payload);

        let claims: Value = decode_claims(&token).expect("decode");
        assert_eq!(claims, payload);
    }

    #[test]
    fn decodes_into_typed_claims() {
        #[derive(serde::Deserialize)]
        struct Claims {
            email: String,
        }

        let token = token_with_payload(&json!({"email": "a@b.nl", "sub": "123"}));
        let claims: Claims = decode_claims(&token).expect("decode");
        assert_eq!(claims.email, "a@b.nl");
    }

    #[test]
    fn rejects_token_without_payload_segment() {
        let err = decode_claims::<Value>("onlyonesegment").expect_err("no payload");
        assert!(matches!(err, JwtError::MissingPayload));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_claims::<Value>("header.!!!not-base64!!!.sig").expect_err("bad base64");
        assert!(matches!(err, JwtError::Base64(_)));
    }

    #[test]
    fn rejects_non_json_payload() {
        let payload = URL_SAFE_NO_PAD.encode("this is not json");
        let token = format!("header.{payload}.sig");
        let err = decode_claims::<Value>(&token).expect_err("bad json");
        assert!(matches!(err, JwtError::Json(_)));
    }
}
