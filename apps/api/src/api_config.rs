use std::env;

/// Runtime configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface the listener binds to.
    pub api_host: String,
    /// Port the listener binds to.
    pub api_port: u16,
}

impl ApiConfig {
    /// Loads configuration from the environment, with local defaults.
    #[must_use]
    pub fn load() -> Self {
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        Self { api_host, api_port }
    }
}
