use crate::application::auth_api::AuthApi;
use crate::domain::http::HttpTransport;
use crate::infrastructure::config::Config;
use crate::infrastructure::http::ReqwestTransport;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transport: Arc<dyn HttpTransport>,
    pub api: AuthApi,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        let api = AuthApi::new(config.api_base_url.clone());
        Self {
            config: Arc::new(config),
            transport,
            api,
        }
    }

    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.http_timeout_secs)?);
        Ok(Self::new(config, transport))
    }
}
