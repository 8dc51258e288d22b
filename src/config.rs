use crate::errors::CustomError;

const DEFAULT_BASE_URL: &str = "https://api.g.alchemy.com";

pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| CustomError::ConfigError(format!("Failed to parse PORT: {}", e)))?;

        let api_key = std::env::var("ALCHEMY_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CustomError::ConfigError("ALCHEMY_API_KEY is not set".to_string()))?;

        let base_url = std::env::var("DATA_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            port,
            api_key,
            base_url,
        })
    }
}
