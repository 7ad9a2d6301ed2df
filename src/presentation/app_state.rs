// Application state for HTTP handlers
use crate::application::token_source::TokenSource;
use secrecy::SecretString;
use std::sync::Arc;

pub struct AppState {
    /// Validated at startup; handlers never read the environment.
    pub coze_api_key: SecretString,
    /// Where rendered pages obtain the assistant token at load.
    pub tokens: Arc<dyn TokenSource>,
}

impl AppState {
    pub fn new(coze_api_key: SecretString, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            coze_api_key,
            tokens,
        }
    }
}
