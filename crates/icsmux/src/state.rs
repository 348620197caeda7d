//! Shared application state passed to all request handlers.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::broadcast;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler; the configuration sits behind an `Arc`
/// and the reqwest client is already a cheap handle.
#[derive(Clone)]
pub struct AppState {
    /// Feed configuration loaded at startup.
    pub config: Arc<Config>,
    /// HTTP client shared by all source fetches. Carries the per-fetch
    /// timeout, bounding how long any one source can hold a worker.
    pub client: reqwest::Client,
    /// Shutdown signal sender for open calendar streams.
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    /// Create state from configuration, building the shared HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(concat!("icsmux/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let (shutdown_tx, _) = broadcast::channel(1);

        Ok(Self {
            config: Arc::new(config),
            client,
            shutdown_tx,
        })
    }

    /// Subscribe to shutdown signal.
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Notify all open streams that the server is shutting down.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}
