use anyhow::Context;
use inference_client::{HostedConfig, DEFAULT_BASE_URL, DEFAULT_TOKEN_ENV};
use protocol::DEFAULT_MODEL;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ServerConfig {
    pub(crate) listen_addr: String,
    pub(crate) inference: InferenceConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct InferenceConfig {
    pub(crate) base_url: String,
    pub(crate) model: String,
    /// Name of the environment variable holding the API token.
    pub(crate) token_env: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            inference: InferenceConfig::default(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

impl ServerConfig {
    pub(crate) fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("invalid listen_addr {}", self.listen_addr))
    }

    pub(crate) fn hosted_config(&self, token: Option<String>) -> HostedConfig {
        HostedConfig {
            base_url: self.inference.base_url.trim().to_string(),
            model: self.inference.model.trim().to_string(),
            token,
        }
    }

    pub(crate) fn read_token(&self) -> Option<String> {
        std::env::var(&self.inference.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

fn validate_server_config(config: &ServerConfig) -> anyhow::Result<()> {
    config.socket_addr()?;
    if config.inference.base_url.trim().is_empty() {
        anyhow::bail!("inference.base_url must not be empty");
    }
    if config.inference.model.trim().is_empty() {
        anyhow::bail!("inference.model must not be empty");
    }
    if config.inference.token_env.trim().is_empty() {
        anyhow::bail!("inference.token_env must not be empty");
    }
    Ok(())
}

/// Loads the config file when one is given; defaults otherwise. `listen_addr`
/// wins over the file.
pub(crate) fn load_server_config(
    path: Option<&Path>,
    listen_addr: Option<String>,
) -> anyhow::Result<ServerConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => ServerConfig::default(),
    };
    if let Some(listen_addr) = listen_addr {
        config.listen_addr = listen_addr;
    }
    validate_server_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert!(validate_server_config(&config).is_ok());
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.inference.model, DEFAULT_MODEL);
        assert_eq!(config.inference.token_env, "HUGGINGFACE_API_TOKEN");
    }

    #[test]
    fn reads_inference_section() {
        let input = r#"
listen_addr = "0.0.0.0:8080"

[inference]
base_url = "http://127.0.0.1:9000"
model = "distilbert-base-uncased-finetuned-sst-2-english"
"#;
        let config: ServerConfig = toml::from_str(input).unwrap();
        assert!(validate_server_config(&config).is_ok());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        let hosted = config.hosted_config(Some("hf_x".to_string()));
        assert_eq!(hosted.base_url, "http://127.0.0.1:9000");
        assert_eq!(
            hosted.model,
            "distilbert-base-uncased-finetuned-sst-2-english"
        );
        assert_eq!(hosted.token.as_deref(), Some("hf_x"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let parsed: Result<ServerConfig, _> = toml::from_str("listen = \"x\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn rejects_bad_listen_addr() {
        let input = r#"listen_addr = "localhost""#;
        let config: ServerConfig = toml::from_str(input).unwrap();
        let err = validate_server_config(&config)
            .err()
            .expect("expected error")
            .to_string();
        assert!(err.contains("listen_addr"));
    }

    #[test]
    fn rejects_blank_model() {
        let input = r#"
[inference]
model = " "
"#;
        let config: ServerConfig = toml::from_str(input).unwrap();
        assert!(validate_server_config(&config).is_err());
    }

    #[test]
    fn cli_listen_addr_overrides_defaults() {
        let config = load_server_config(None, Some("127.0.0.1:4100".to_string())).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:4100");
        assert!(load_server_config(None, Some("nope".to_string())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = Path::new("/nonexistent/sentiment-server.toml");
        let err = load_server_config(Some(path), None)
            .err()
            .expect("expected error")
            .to_string();
        assert!(err.contains("failed to read config"));
    }
}
