//! Snapshot manager for a tracked store's configuration.
//!
//! # Responsibilities
//! - Fetch the store's `/config` document over the owned client
//! - Publish each decoded snapshot with a single atomic swap
//! - Serve lock-free threshold reads to any number of callers

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use thiserror::Error;

use crate::config::schema::{
    StoreConfig, DEFAULT_REGION_MAX_KEYS, DEFAULT_REGION_MAX_SIZE, DEFAULT_REGION_SPLIT_KEYS,
    DEFAULT_REGION_SPLIT_SIZE,
};
use crate::net::tls::{self, SecurityConfig};

/// Errors that can occur while refreshing a store's configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The status endpoint could not be reached or its body not read.
    #[error("status endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a decodable config document.
    #[error("malformed config document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Holds the latest configuration fetched from one store.
///
/// Shared freely across tasks and threads; reads never block and a failed
/// refresh never disturbs the held snapshot.
pub struct StoreConfigManager {
    current: ArcSwapOption<StoreConfig>,
    client: reqwest::Client,
    scheme: &'static str,
}

impl StoreConfigManager {
    /// Create a manager for one store.
    ///
    /// With no security config the manager speaks plain http. With one, it
    /// speaks https if the certificate material builds into a client; when
    /// it does not, the manager logs and stays on http rather than failing
    /// construction.
    pub fn new(security: Option<&SecurityConfig>) -> Self {
        let mut scheme = "http";
        let mut client = reqwest::Client::new();
        if let Some(security) = security {
            match tls::build_https_client(security) {
                Ok(Some(https_client)) => {
                    client = https_client;
                    scheme = "https";
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "client TLS setup failed, staying on plain http");
                }
            }
        }
        Self {
            current: ArcSwapOption::empty(),
            client,
            scheme,
        }
    }

    /// URL scheme requests are issued with, `http` or `https`.
    pub fn scheme(&self) -> &str {
        self.scheme
    }

    /// Fetch the store's configuration and publish it.
    ///
    /// `status_addr` is the host:port of the store's status endpoint. Any
    /// transport or decode failure is returned to the caller and leaves
    /// the held snapshot exactly as it was.
    pub async fn load(&self, status_addr: &str) -> Result<(), LoadError> {
        let url = format!("{}://{}/config", self.scheme, status_addr);
        let response = self.client.get(&url).send().await?;
        let body = response.bytes().await?;
        let config: StoreConfig = serde_json::from_slice(&body)?;
        tracing::info!(url = %url, config = %config, "store config refreshed");
        self.update(Arc::new(config));
        Ok(())
    }

    /// Atomically replace the held snapshot.
    ///
    /// Concurrent readers see either the previous snapshot or `config`,
    /// never a mix. Last store wins when updates race.
    pub fn update(&self, config: Arc<StoreConfig>) {
        self.current.store(Some(config));
    }

    /// The most recently published snapshot, or `None` before the first
    /// successful load. Lock-free.
    pub fn current(&self) -> Option<Arc<StoreConfig>> {
        self.current.load_full()
    }

    /// Max region size in MB of the tracked store, defaulted when no
    /// snapshot has been loaded yet.
    pub fn region_max_size(&self) -> u64 {
        self.current()
            .map_or(DEFAULT_REGION_MAX_SIZE, |config| config.region_max_size())
    }

    /// Region split size in MB.
    pub fn region_split_size(&self) -> u64 {
        self.current()
            .map_or(DEFAULT_REGION_SPLIT_SIZE, |config| {
                config.region_split_size()
            })
    }

    /// Max region key count.
    pub fn region_max_keys(&self) -> u64 {
        self.current()
            .map_or(DEFAULT_REGION_MAX_KEYS, |config| config.region_max_keys())
    }

    /// Region split key count.
    pub fn region_split_keys(&self) -> u64 {
        self.current()
            .map_or(DEFAULT_REGION_SPLIT_KEYS, |config| {
                config.region_split_keys()
            })
    }
}
