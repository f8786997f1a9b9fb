use std::env;

pub const DEFAULT_API_HOST: &str = "dev.zu.casa";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// ZDK API key. May be absent; requests that need it then fail with a
    /// configuration error instead of crashing the process.
    pub api_key: Option<String>,
    pub api_host: String,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            api_key: env::var("ZDK_API_KEY").ok().filter(|k| !k.is_empty()),
            api_host: env::var("ZDK_API_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string()),
            request_timeout_seconds: env::var("ZDK_REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout)?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("Invalid ZDK request timeout")]
    InvalidTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 9090,
            api_key: None,
            api_host: DEFAULT_API_HOST.to_string(),
            request_timeout_seconds: 10,
        };

        assert_eq!(config.server_addr(), "127.0.0.1:9090");
    }
}
