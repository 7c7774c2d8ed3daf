use crate::error::{LapscoreError, Result};
use crate::types::pricing::SwissPrice;
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Where the generated price file is read from at runtime.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<SwissPrice>>;

    fn describe(&self) -> String;
}

pub struct HttpPriceSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPriceSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch(&self) -> Result<Vec<SwissPrice>> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        serde_json::from_str(&body).map_err(|e| LapscoreError::PriceParse {
            path: self.url.clone(),
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub struct FilePriceSource {
    path: PathBuf,
}

impl FilePriceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PriceSource for FilePriceSource {
    async fn fetch(&self) -> Result<Vec<SwissPrice>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| LapscoreError::PriceParse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

type SharedFetch = Shared<BoxFuture<'static, Arc<Vec<SwissPrice>>>>;

/// Single-flight cache over a [`PriceSource`].
///
/// The first caller starts the fetch; everyone arriving before or after it
/// resolves awaits the same shared future. A failed fetch resolves to an
/// empty list and is not retried until [`PriceCache::reset`].
pub struct PriceCache {
    source: Arc<dyn PriceSource>,
    inflight: Mutex<Option<SharedFetch>>,
}

impl PriceCache {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            inflight: Mutex::new(None),
        }
    }

    pub async fn prices(&self) -> Arc<Vec<SwissPrice>> {
        let fetch = {
            let mut slot = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
            slot.get_or_insert_with(|| self.start_fetch()).clone()
        };
        fetch.await
    }

    /// Remote prices when the fetch produced any, otherwise `seed`.
    pub async fn prices_or_seed(&self, seed: &[SwissPrice]) -> Vec<SwissPrice> {
        let remote = self.prices().await;
        if remote.is_empty() {
            seed.to_vec()
        } else {
            remote.as_ref().clone()
        }
    }

    /// Forgets the cached result so the next call fetches again.
    pub fn reset(&self) {
        let mut slot = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    fn start_fetch(&self) -> SharedFetch {
        let source = Arc::clone(&self.source);
        async move {
            let origin = source.describe();
            match source.fetch().await {
                Ok(prices) => {
                    debug!(source = %origin, count = prices.len(), "remote prices loaded");
                    Arc::new(prices)
                }
                Err(err) => {
                    warn!(source = %origin, error = %err, "remote prices unavailable, using seed data");
                    Arc::new(Vec::new())
                }
            }
        }
        .boxed()
        .shared()
    }
}
