use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;

/// Errors that stop the server before it binds a socket.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("COZE_API_KEY is not set; define it in the environment or in a .env file")]
    MissingApiKey,
    #[error("invalid server configuration: {0}")]
    Settings(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    #[serde(default)]
    coze_api_key: Option<String>,
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_document_root")]
    document_root: PathBuf,
    #[serde(default)]
    token_endpoint: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_document_root() -> PathBuf {
    PathBuf::from(".")
}

/// Validated server settings. The API key is guaranteed non-empty.
#[derive(Debug)]
pub struct ServerConfig {
    pub coze_api_key: SecretString,
    pub host: String,
    pub port: u16,
    pub document_root: PathBuf,
    /// Base URL of a site server to fetch the assistant token from when
    /// rendering pages. Unset means the configured key is used directly.
    pub token_endpoint: Option<String>,
}

impl ServerConfig {
    pub fn from_settings(settings: config::Config) -> Result<Self, StartupError> {
        let raw: RawServerConfig = settings.try_deserialize()?;
        let key = raw
            .coze_api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(StartupError::MissingApiKey)?;

        Ok(Self {
            coze_api_key: SecretString::from(key),
            host: raw.host,
            port: raw.port,
            document_root: raw.document_root,
            token_endpoint: raw.token_endpoint.filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load settings from `.env`, `config/server.*`, `ECOMIMIC_*` variables and
/// finally `COZE_API_KEY`, later sources winning.
pub fn load_server_config() -> Result<ServerConfig, StartupError> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }

    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(config::Environment::with_prefix("ECOMIMIC"))
        .set_override_option("coze_api_key", std::env::var("COZE_API_KEY").ok())?
        .build()?;

    ServerConfig::from_settings(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn settings(pairs: &[(&str, &str)]) -> config::Config {
        let mut builder = config::Config::builder();
        for (key, value) in pairs {
            builder = builder.set_override(*key, *value).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_defaults_with_key() {
        let config = ServerConfig::from_settings(settings(&[("coze_api_key", "abc123")])).unwrap();
        assert_eq!(config.coze_api_key.expose_secret(), "abc123");
        assert_eq!(config.port, 3001);
        assert_eq!(config.listen_addr(), "0.0.0.0:3001");
        assert_eq!(config.document_root, PathBuf::from("."));
        assert_eq!(config.token_endpoint, None);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = ServerConfig::from_settings(settings(&[("port", "8080")])).unwrap_err();
        assert!(matches!(err, StartupError::MissingApiKey));
    }

    #[test]
    fn test_blank_key_is_fatal() {
        let err = ServerConfig::from_settings(settings(&[("coze_api_key", "  ")])).unwrap_err();
        assert!(matches!(err, StartupError::MissingApiKey));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_settings(settings(&[
            ("coze_api_key", "k"),
            ("host", "127.0.0.1"),
            ("port", "8080"),
            ("document_root", "public"),
            ("token_endpoint", "http://tokens.internal:3001"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.document_root, PathBuf::from("public"));
        assert_eq!(config.token_endpoint.as_deref(), Some("http://tokens.internal:3001"));
    }

    #[test]
    fn test_bad_port_is_settings_error() {
        let err = ServerConfig::from_settings(settings(&[("coze_api_key", "k"), ("port", "abc")]))
            .unwrap_err();
        assert!(matches!(err, StartupError::Settings(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ServerConfig::from_settings(settings(&[("coze_api_key", "abc123")])).unwrap();
        assert!(!format!("{config:?}").contains("abc123"));
    }
}
