use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// File name of the scoring artifact shipped next to the binary.
pub const MODEL_FILE_NAME: &str = "model.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("APP_PORT is not a valid port: {v}"))?,
            Err(_) => 8080,
        };
        let model_path = std::env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_path());
        Ok(Self {
            host,
            port,
            model_path,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `model.json` in the directory holding the running executable.
pub fn default_model_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MODEL_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(MODEL_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_path_sits_next_to_the_binary() {
        let path = default_model_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(MODEL_FILE_NAME));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".into(),
            port: 6000,
            model_path: PathBuf::from("model.json"),
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:6000");
    }
}
