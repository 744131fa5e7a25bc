//! Country lookup
//!
//! The company step needs a list of countries keyed by ISO code. The list comes
//! from an external [`CountryLookup`]; [`CountryDirectory`] caches the first
//! successful answer and serves a short static list while the source is down.

use crate::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

const FALLBACK_COUNTRIES: [(&str, &str); 7] = [
    ("PH", "Philippines"),
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("JP", "Japan"),
    ("CN", "China"),
    ("SG", "Singapore"),
    ("AU", "Australia"),
];

/// Countries served when the lookup fails
pub fn fallback_countries() -> Vec<Country> {
    FALLBACK_COUNTRIES
        .iter()
        .map(|(code, name)| Country::new(*code, *name))
        .collect()
}

/// Source of the country list
#[async_trait]
pub trait CountryLookup: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<Country>>;
}

/// Lookup over a fixed list
#[derive(Debug, Clone)]
pub struct StaticCountryLookup {
    countries: Vec<Country>,
}

impl StaticCountryLookup {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

impl Default for StaticCountryLookup {
    fn default() -> Self {
        Self::new(fallback_countries())
    }
}

#[async_trait]
impl CountryLookup for StaticCountryLookup {
    async fn fetch_countries(&self) -> Result<Vec<Country>> {
        Ok(self.countries.clone())
    }
}

/// Caching front for a [`CountryLookup`]
#[derive(Debug)]
pub struct CountryDirectory<L> {
    lookup: L,
    cache: RwLock<Option<Arc<[Country]>>>,
}

impl<L: CountryLookup> CountryDirectory<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            cache: RwLock::new(None),
        }
    }

    /// Countries sorted by name
    ///
    /// A failed lookup yields the fallback list, which is not cached so the
    /// next call tries the source again.
    pub async fn countries(&self) -> Arc<[Country]> {
        let cached = self.cache.read().clone();
        if let Some(cached) = cached {
            return cached;
        }

        match self.lookup.fetch_countries().await {
            Ok(mut countries) => {
                countries.sort_by(|a, b| a.name.cmp(&b.name));
                let countries: Arc<[Country]> = countries.into();
                debug!(count = countries.len(), "Country list cached");
                *self.cache.write() = Some(Arc::clone(&countries));
                countries
            }
            Err(e) => {
                warn!(error = %e, "Country lookup failed, serving fallback list");
                let mut countries = fallback_countries();
                countries.sort_by(|a, b| a.name.cmp(&b.name));
                countries.into()
            }
        }
    }

    /// Display name for `code`, or the code itself when unknown or not cached
    pub fn country_name(&self, code: &str) -> String {
        self.cache
            .read()
            .as_ref()
            .and_then(|countries| countries.iter().find(|c| c.code == code))
            .map(|country| country.name.clone())
            .unwrap_or_else(|| code.to_string())
    }

    pub fn is_cached(&self) -> bool {
        self.cache.read().is_some()
    }

    pub fn invalidate(&self) {
        *self.cache.write() = None;
    }
}
