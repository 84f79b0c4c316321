//! Test helpers
//!
//! A recording presenter, record factories and mock data sources.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use country_explorer_provider::{CountrySource, FetchError};

use crate::traits::Presenter;
use crate::types::{Country, CountryName, PageInfo};

// ===== Record factories =====

/// A minimal record with the given official name.
pub fn country(official: &str) -> Country {
    Country {
        name: CountryName {
            common: official.to_string(),
            official: official.to_string(),
            native_name: Default::default(),
        },
        population: 0,
        region: String::new(),
        subregion: None,
        capital: None,
        languages: None,
        cca2: String::new(),
        cca3: String::new(),
        idd: Default::default(),
        flags: Default::default(),
        alt_spellings: Vec::new(),
    }
}

/// `"Country 01"`, `"Country 02"`, ... up to `count`.
pub fn numbered_dataset(count: usize) -> Vec<Country> {
    (1..=count)
        .map(|i| country(&format!("Country {i:02}")))
        .collect()
}

/// Official names of `countries`, in order.
pub fn ids<'a>(countries: &[&'a Country]) -> Vec<&'a str> {
    countries.iter().map(|c| c.id()).collect()
}

// ===== RecordingPresenter =====

/// Presenter that keeps the last value of every call.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub rows: Vec<String>,
    pub label: Option<String>,
    pub page_info: Option<PageInfo>,
    pub navigation: Option<(bool, bool)>,
    pub detail: Option<Country>,
    pub render_count: usize,
}

impl Presenter for RecordingPresenter {
    fn show_rows(&mut self, rows: &[&Country]) {
        self.rows = rows.iter().map(|c| c.id().to_string()).collect();
        self.render_count += 1;
    }

    fn set_page_label(&mut self, info: PageInfo) {
        self.label = Some(info.label());
        self.page_info = Some(info);
    }

    fn set_navigation(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.navigation = Some((prev_enabled, next_enabled));
    }

    fn show_detail(&mut self, country: &Country) {
        self.detail = Some(country.clone());
    }

    fn hide_detail(&mut self) {
        self.detail = None;
    }
}

// ===== Mock sources =====

/// Source that always returns the same records.
pub struct StaticSource {
    countries: Vec<Country>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch_all(&self) -> country_explorer_provider::Result<Vec<Country>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.countries.clone())
    }
}

/// Source that always fails with the given error.
pub struct FailingSource {
    error: FetchError,
}

impl FailingSource {
    pub fn network() -> Self {
        Self {
            error: FetchError::Network {
                source_name: "failing".to_string(),
                detail: "connection refused".to_string(),
            },
        }
    }

    pub fn parse() -> Self {
        Self {
            error: FetchError::Parse {
                source_name: "failing".to_string(),
                detail: "expected a sequence".to_string(),
            },
        }
    }
}

#[async_trait]
impl CountrySource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_all(&self) -> country_explorer_provider::Result<Vec<Country>> {
        Err(self.error.clone())
    }
}
