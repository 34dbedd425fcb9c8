//! Caching wrapper around a geolocation provider.

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;

use cartgate_core::result::AppResult;
use cartgate_entity::tracking::GeoLocation;

use super::provider::GeoProvider;

/// Caches successful lookups per address, indefinitely and unbounded.
///
/// Concurrent first-time lookups for the same address may race and call
/// the inner provider redundantly; the overwrite is idempotent, and
/// serializing them behind a lock would stall request handling.
#[derive(Clone)]
pub struct CachedGeoProvider {
    inner: Arc<dyn GeoProvider>,
    cache: Cache<String, GeoLocation>,
}

impl std::fmt::Debug for CachedGeoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedGeoProvider")
            .field("inner", &self.inner)
            .field("cached_entries", &self.cache.entry_count())
            .finish()
    }
}

impl CachedGeoProvider {
    /// Wrap a provider with a fresh cache.
    pub fn new(inner: Arc<dyn GeoProvider>) -> Self {
        Self {
            inner,
            cache: Cache::builder().build(),
        }
    }

    /// Number of cached addresses (test observability).
    pub fn cached_entries(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[async_trait]
impl GeoProvider for CachedGeoProvider {
    async fn lookup(&self, ip: &str) -> AppResult<GeoLocation> {
        if let Some(hit) = self.cache.get(ip).await {
            return Ok(hit);
        }
        // Failures are not cached: the next request retries the lookup.
        let location = self.inner.lookup(ip).await?;
        self.cache.insert(ip.to_string(), location.clone()).await;
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GeoProvider for CountingProvider {
        async fn lookup(&self, _ip: &str) -> AppResult<GeoLocation> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(GeoLocation {
                country: Some("US".to_string()),
                region: None,
                city: None,
            })
        }
    }

    #[tokio::test]
    async fn test_second_lookup_hits_cache() {
        let inner = Arc::new(CountingProvider::default());
        let cached = CachedGeoProvider::new(inner.clone());

        cached.lookup("93.184.216.34").await.unwrap();
        cached.lookup("93.184.216.34").await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }
}
