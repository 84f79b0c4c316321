//! Dataset fetch service
//!
//! Owns the tokio runtime. The fetch runs once as a background task and its
//! outcome is handed to the synchronous UI loop through a oneshot channel.

use std::sync::Arc;

use anyhow::{Context, Result};
use country_explorer_core::{Country, DatasetLoader};
use country_explorer_provider::{create_source, CountrySource};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Result of the startup fetch, as seen by the UI.
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded(Vec<Country>),
    /// The fetch failed; the error has already been logged.
    Unavailable,
}

/// Handle to a fetch in flight.
pub struct PendingFetch {
    rx: Option<oneshot::Receiver<FetchOutcome>>,
}

impl PendingFetch {
    /// Non-blocking check for the outcome.
    ///
    /// Yields the outcome exactly once, then `None` forever.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let rx = self.rx.as_mut()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.rx = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.rx = None;
                log::error!("Fetch task ended without a result");
                Some(FetchOutcome::Unavailable)
            }
        }
    }
}

/// Country data service
pub struct CountryService {
    runtime: Runtime,
    loader: Arc<DatasetLoader>,
}

impl CountryService {
    /// Service fetching from `endpoint`.
    pub fn new(endpoint: &str) -> Result<Self> {
        let source = create_source(Some(endpoint)).context("Failed to create country source")?;
        Self::with_source(source)
    }

    pub fn with_source(source: Arc<dyn CountrySource>) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("country-fetch")
            .enable_all()
            .build()
            .context("Failed to build tokio runtime")?;

        Ok(Self {
            runtime,
            loader: Arc::new(DatasetLoader::new(source)),
        })
    }

    /// Start the fetch in the background.
    pub fn spawn_fetch(&self) -> PendingFetch {
        let (tx, rx) = oneshot::channel();
        let loader = Arc::clone(&self.loader);

        log::debug!("Fetching countries from {}", loader.source_name());
        self.runtime.spawn(async move {
            let outcome = match loader.load().await {
                Some(countries) => FetchOutcome::Loaded(countries),
                None => FetchOutcome::Unavailable,
            };
            if tx.send(outcome).is_err() {
                log::debug!("Fetch finished after the UI closed");
            }
        });

        PendingFetch { rx: Some(rx) }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use country_explorer_provider::FetchError;

    use super::*;

    struct FixedSource(Option<Vec<Country>>);

    #[async_trait]
    impl CountrySource for FixedSource {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch_all(&self) -> country_explorer_provider::Result<Vec<Country>> {
            self.0.clone().ok_or_else(|| FetchError::Network {
                source_name: "fixed".to_string(),
                detail: "unreachable".to_string(),
            })
        }
    }

    fn wait(fetch: &mut PendingFetch) -> FetchOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = fetch.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "fetch did not complete");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    fn sample() -> Vec<Country> {
        serde_json::from_str(r#"[{"name": {"common": "Chile", "official": "Republic of Chile"}}]"#)
            .unwrap()
    }

    #[test]
    fn delivers_loaded_dataset_once() {
        let service = CountryService::with_source(Arc::new(FixedSource(Some(sample())))).unwrap();
        let mut fetch = service.spawn_fetch();

        match wait(&mut fetch) {
            FetchOutcome::Loaded(countries) => assert_eq!(countries.len(), 1),
            FetchOutcome::Unavailable => panic!("expected a dataset"),
        }
        assert!(fetch.poll().is_none());
    }

    #[test]
    fn failure_is_unavailable() {
        let service = CountryService::with_source(Arc::new(FixedSource(None))).unwrap();
        let mut fetch = service.spawn_fetch();
        assert!(matches!(wait(&mut fetch), FetchOutcome::Unavailable));
    }
}
