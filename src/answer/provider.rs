//! Generation providers
//!
//! Defines the provider trait and the HTTP-backed implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::GenerationConfig;

use super::types::GenerationError;

/// Instruction sent with every generation request
const SYSTEM_PROMPT: &str = "You are a chatbot that answers questions based on the given PDF text. \
     Provide concise answers, limited to 2 lines, ensuring clarity and relevance.";

/// Placeholder answer when the endpoint succeeds without an output field
const NO_RESPONSE: &str = "No response received.";

/// Header carrying the developer token credential
const TOKEN_HEADER: &str = "X-Developer-Token";

/// Answer generation provider
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Ask the model a question, returning the answer text
    async fn generate(&self, query: &str) -> Result<String, GenerationError>;
}

/// Provider backed by the remote text-generation HTTP endpoint
pub struct RemoteGenerationProvider {
    client: reqwest::Client,
    api_url: String,
    model: String,
    developer_token: String,
}

impl RemoteGenerationProvider {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            developer_token: config.developer_token.clone(),
        }
    }
}

#[async_trait]
impl GenerationProvider for RemoteGenerationProvider {
    async fn generate(&self, query: &str) -> Result<String, GenerationError> {
        let payload = serde_json::json!({
            "input": query,
            "model": self.model,
            "system": SYSTEM_PROMPT,
        });

        // No retry and no bespoke timeout: a failed request is terminal for
        // the current ask.
        let response = self
            .client
            .post(&self.api_url)
            .header(TOKEN_HEADER, &self.developer_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let result: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        Ok(result
            .get("output")
            .and_then(Value::as_str)
            .unwrap_or(NO_RESPONSE)
            .to_string())
    }
}

/// Scripted provider for tests
#[cfg(test)]
pub struct MockProvider {
    pub text: String,
    pub reachable: bool,
}

#[cfg(test)]
#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate(&self, _query: &str) -> Result<String, GenerationError> {
        if !self.reachable {
            return Err(GenerationError::Transport("connection refused".to_string()));
        }
        Ok(self.text.clone())
    }
}
