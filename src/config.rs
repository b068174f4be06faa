use std::env;

use crate::error::ConfigError;

/// Cognito hosted UI and token endpoint settings.
#[derive(Debug, Clone)]
pub struct CognitoConfig {
    /// Hosted UI base URI, e.g. `https://example.auth.us-east-1.amazoncognito.com`.
    pub base_uri: String,
    pub client_id: String,
    pub client_secret: String,
    /// Public base URL of this app, used to derive the callback redirect
    /// URIs. These must byte-match the URIs registered with Cognito.
    pub app_base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cognito: CognitoConfig,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment. Missing required variables
    /// are fatal at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cognito = CognitoConfig {
            base_uri: require("COGNITO_BASE_URI")?,
            client_id: require("COGNITO_CLIENT_ID")?,
            client_secret: require("AUTH_COGNITO_SECRET")?,
            app_base_url: require("CF_PAGES_URL")?,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8000,
        };

        Ok(Self { cognito, port })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
