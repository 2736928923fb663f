//! Configuration management for Folio Server

use serde::Deserialize;
use std::env;

/// Fixed production endpoint for the text-generation API
const DEFAULT_API_URL: &str = "https://gwcteq-partner.domo.com/api/ai/v1/text/generation";

/// Default model identifier sent with every generation request
const DEFAULT_MODEL: &str = "domo.domo_ai.domogpt-chat-small-v1:anthropic";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Endpoint URL for the text-generation API
    pub api_url: String,
    /// Model identifier sent in the request payload
    pub model: String,
    /// Developer token credential sent with every request
    pub developer_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            generation: GenerationConfig {
                api_url: DEFAULT_API_URL.to_string(),
                model: DEFAULT_MODEL.to_string(),
                developer_token: String::new(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GENERATION_DEVELOPER_TOKEN` is required; everything else falls back
    /// to a default.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            generation: GenerationConfig {
                api_url: env::var("GENERATION_API_URL")
                    .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
                model: env::var("GENERATION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                developer_token: env::var("GENERATION_DEVELOPER_TOKEN")?,
            },
        })
    }
}
