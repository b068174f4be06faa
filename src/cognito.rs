//! Cognito hosted UI URLs and token endpoint exchange.
//!
//! URLs follow the login/logout endpoints of the hosted UI:
//! <https://docs.aws.amazon.com/cognito/latest/developerguide/login-endpoint.html>
//! Token exchange follows the token endpoint:
//! <https://docs.aws.amazon.com/cognito/latest/developerguide/token-endpoint.html>

use url::Url;

use crate::config::CognitoConfig;
use crate::error::AuthError;
use crate::models::TokenResponse;

pub const LOGIN_CALLBACK_PATH: &str = "/auth/login-callback/";
pub const LOGOUT_CALLBACK_PATH: &str = "/auth/logout-callback/";

const SCOPES: &str = "email openid phone";

/// The two grants the token endpoint accepts. Exactly one of a code or a
/// refresh token, enforced by construction.
#[derive(Debug, Clone)]
pub enum Grant {
    AuthorizationCode(String),
    RefreshToken(String),
}

impl Grant {
    fn grant_type(&self) -> &'static str {
        match self {
            Grant::AuthorizationCode(_) => "authorization_code",
            Grant::RefreshToken(_) => "refresh_token",
        }
    }
}

/// Client for the Cognito hosted UI and token endpoint.
#[derive(Debug, Clone)]
pub struct CognitoClient {
    config: CognitoConfig,
    http: reqwest::Client,
}

impl CognitoClient {
    pub fn new(config: CognitoConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn base_url(&self) -> Result<Url, AuthError> {
        Url::parse(&self.config.base_uri)
            .map_err(|_| AuthError::InvalidBaseUri(self.config.base_uri.clone()))
    }

    fn login_redirect_uri(&self) -> Result<String, AuthError> {
        let url = Url::parse(&self.config.app_base_url)?.join(LOGIN_CALLBACK_PATH)?;
        Ok(url.to_string())
    }

    fn logout_redirect_uri(&self) -> Result<String, AuthError> {
        let url = Url::parse(&self.config.app_base_url)?.join(LOGOUT_CALLBACK_PATH)?;
        Ok(url.to_string())
    }

    /// Hosted UI sign-in URL for the authorization code grant.
    pub fn login_url(&self) -> Result<String, AuthError> {
        let mut url = self.base_url()?.join("/login")?;
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.login_redirect_uri()?)
            .append_pair("scope", SCOPES);
        Ok(url.to_string())
    }

    /// Hosted UI sign-out URL. Cognito clears its own session cookie and
    /// redirects the browser to our logout callback.
    pub fn logout_url(&self) -> Result<String, AuthError> {
        let mut url = self.base_url()?.join("/logout")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("logout_uri", &self.logout_redirect_uri()?);
        Ok(url.to_string())
    }

    /// Exchange an authorization code or refresh token at the token
    /// endpoint.
    ///
    /// The JSON body is parsed into [`TokenResponse`] regardless of HTTP
    /// status — Cognito reports grant failures as a JSON error body, so
    /// callers inspect the returned shape rather than the status. One
    /// outbound call, no retry.
    pub async fn exchange_tokens(&self, grant: Grant) -> Result<TokenResponse, AuthError> {
        let url = self.base_url()?.join("/oauth2/token/")?;
        let redirect_uri = self.login_redirect_uri()?;

        let mut params = vec![
            ("grant_type", grant.grant_type().to_string()),
            ("client_id", self.config.client_id.clone()),
            ("client_secret", self.config.client_secret.clone()),
            ("redirect_uri", redirect_uri),
        ];
        match grant {
            Grant::AuthorizationCode(code) => params.push(("code", code)),
            Grant::RefreshToken(token) => params.push(("refresh_token", token)),
        }

        let response = self
            .http
            .post(url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&params)
            .send()
            .await?;

        Ok(response.json::<TokenResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn test_config(base_uri: &str) -> CognitoConfig {
        CognitoConfig {
            base_uri: base_uri.into(),
            client_id: "client-123".into(),
            client_secret: "secret".into(),
            app_base_url: "https://app.example.com".into(),
        }
    }

    fn query_map(url: &str) -> HashMap<String, String> {
        Url::parse(url)
            .expect("parse url")
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn login_url_carries_exact_parameters() {
        let client = CognitoClient::new(test_config(
            "https://example.auth.us-east-1.amazoncognito.com",
        ));
        let url = client.login_url().expect("login url");

        assert!(url.starts_with("https://example.auth.us-east-1.amazoncognito.com/login?"));

        let params = query_map(&url);
        assert_eq!(params.len(), 4);
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(
            params["redirect_uri"],
            "https://app.example.com/auth/login-callback/"
        );
        assert_eq!(params["scope"], "email openid phone");
    }

    #[test]
    fn login_url_rejects_non_absolute_base_uri() {
        let client = CognitoClient::new(test_config("not-a-url"));
        let err = client.login_url().expect_err("relative base");
        assert!(matches!(err, AuthError::InvalidBaseUri(_)));
    }

    #[test]
    fn logout_url_carries_client_id_and_logout_uri() {
        let client = CognitoClient::new(test_config(
            "https://example.auth.us-east-1.amazoncognito.com",
        ));
        let url = client.logout_url().expect("logout url");

        assert!(url.starts_with("https://example.auth.us-east-1.amazoncognito.com/logout?"));

        let params = query_map(&url);
        assert_eq!(params.len(), 2);
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(
            params["logout_uri"],
            "https://app.example.com/auth/logout-callback/"
        );
    }

    #[test]
    fn grant_type_matches_grant() {
        assert_eq!(
            Grant::AuthorizationCode("abc".into()).grant_type(),
            "authorization_code"
        );
        assert_eq!(Grant::RefreshToken("r".into()).grant_type(), "refresh_token");
    }
}
