// HTTP implementation of the token port
use crate::application::token_source::{TokenPayload, TokenSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

pub const TOKEN_PATH: &str = "/api/get-coze-token";

/// Fetches the token from the site server. No timeout or retry is configured.
#[derive(Debug, Clone)]
pub struct HttpTokenSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTokenSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn token_url(&self) -> String {
        format!("{}{}", self.base_url, TOKEN_PATH)
    }
}

#[async_trait]
impl TokenSource for HttpTokenSource {
    async fn fetch_token(&self) -> Result<String> {
        let response = self
            .client
            .get(self.token_url())
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to reach token endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Token endpoint answered with status {}", response.status());
        }

        let payload = response
            .json::<TokenPayload>()
            .await
            .context("Failed to parse token response")?;

        if payload.token.is_empty() {
            anyhow::bail!("Token endpoint returned an empty token");
        }
        Ok(payload.token)
    }
}

/// Hands out the key this process was configured with, without a network hop.
#[derive(Debug, Clone)]
pub struct ConfiguredTokenSource {
    key: SecretString,
}

impl ConfiguredTokenSource {
    pub fn new(key: SecretString) -> Self {
        Self { key }
    }
}

#[async_trait]
impl TokenSource for ConfiguredTokenSource {
    async fn fetch_token(&self) -> Result<String> {
        let token = self.key.expose_secret();
        if token.trim().is_empty() {
            anyhow::bail!("No assistant token configured");
        }
        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_source_returns_key() {
        let source = ConfiguredTokenSource::new(SecretString::from("abc123".to_string()));
        assert_eq!(source.fetch_token().await.unwrap(), "abc123");
        assert!(!format!("{source:?}").contains("abc123"));
    }

    #[tokio::test]
    async fn test_configured_source_rejects_blank_key() {
        let source = ConfiguredTokenSource::new(SecretString::from(" ".to_string()));
        assert!(source.fetch_token().await.is_err());
    }

    #[test]
    fn test_token_url_trims_trailing_slash() {
        let source = HttpTokenSource::new("http://localhost:3001/");
        assert_eq!(source.token_url(), "http://localhost:3001/api/get-coze-token");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_error() {
        // port 9 (discard) on loopback is essentially never served
        let source = HttpTokenSource::new("http://127.0.0.1:9");
        assert!(source.fetch_token().await.is_err());
    }
}
