//! Application state management

use std::sync::Arc;

use crate::answer::{GenerationProvider, RemoteGenerationProvider};
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    sessions: SessionStore,
    provider: Arc<dyn GenerationProvider>,
}

impl AppState {
    /// Create application state with the HTTP-backed generation provider
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(RemoteGenerationProvider::new(&config.generation));
        Self::with_provider(config, provider)
    }

    /// Create application state with a specific provider.
    ///
    /// Tests substitute a scripted provider here.
    pub fn with_provider(config: Config, provider: Arc<dyn GenerationProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                sessions: SessionStore::new(),
                provider,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the session store
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// Get the generation provider
    pub fn provider(&self) -> &Arc<dyn GenerationProvider> {
        &self.inner.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::{GenerationError, MockProvider};

    #[tokio::test]
    async fn with_provider_substitutes_the_generation_backend() {
        let provider = Arc::new(MockProvider {
            text: "stub answer".to_string(),
            reachable: true,
        });
        let state = AppState::with_provider(Config::default(), provider);

        let answer = state
            .provider()
            .generate("anything")
            .await
            .expect("mock answers");
        assert_eq!(answer, "stub answer");
    }

    #[tokio::test]
    async fn unreachable_provider_reports_a_transport_error() {
        let provider = Arc::new(MockProvider {
            text: String::new(),
            reachable: false,
        });
        let state = AppState::with_provider(Config::default(), provider);

        let err = state
            .provider()
            .generate("anything")
            .await
            .expect_err("provider is unreachable");
        assert!(matches!(err, GenerationError::Transport(_)));
    }
}
