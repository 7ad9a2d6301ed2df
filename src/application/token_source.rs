// Port for obtaining the assistant API token
use async_trait::async_trait;

#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch the token once. No retries; callers decide how to degrade.
    async fn fetch_token(&self) -> anyhow::Result<String>;
}

/// Wire body of the token endpoint: `{"token": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenPayload {
    pub token: String,
}
