use std::sync::Arc;

use crate::cognito::CognitoClient;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub cognito: Arc<CognitoClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let cognito = CognitoClient::new(config.cognito.clone());
        Self {
            config: Arc::new(config),
            cognito: Arc::new(cognito),
        }
    }
}
