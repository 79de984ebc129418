use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default number of rendered plots kept in memory
pub const DEFAULT_MAX_ENTRIES: usize = 128;

/// A rendered plot ready to be served
#[derive(Clone)]
pub struct CachedPlot {
    /// Rendered PNG bytes
    pub png_bytes: Vec<u8>,
    /// Cache key of the settings that produced it, served as ETag
    pub etag: String,
    /// When this plot was generated
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Cache for rendered plots, keyed by [`PlotSpec::cache_key`](crate::models::PlotSpec::cache_key)
///
/// When full, storing a new plot evicts the oldest one.
pub struct PlotCache {
    cache: Arc<RwLock<HashMap<String, CachedPlot>>>,
    max_entries: usize,
}

impl PlotCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            max_entries: max_entries.max(1),
        }
    }

    /// Store a rendered plot
    pub async fn store(&self, key: &str, plot: CachedPlot) {
        let mut cache = self.cache.write().await;
        if !cache.contains_key(key) && cache.len() >= self.max_entries {
            let oldest = cache
                .iter()
                .min_by_key(|(_, p)| p.generated_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(key = %oldest, "Evicting cached plot");
                cache.remove(&oldest);
            }
        }
        cache.insert(key.to_string(), plot);
    }

    /// Retrieve a cached plot
    pub async fn get(&self, key: &str) -> Option<CachedPlot> {
        let cache = self.cache.read().await;
        cache.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for PlotCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn plot(etag: &str, age_secs: i64) -> CachedPlot {
        CachedPlot {
            png_bytes: vec![1, 2, 3],
            etag: etag.to_string(),
            generated_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    #[tokio::test]
    async fn test_store_and_get() {
        let cache = PlotCache::new();
        assert!(cache.is_empty().await);

        cache.store("abc", plot("abc", 0)).await;
        let hit = cache.get("abc").await.unwrap();
        assert_eq!(hit.etag, "abc");
        assert!(cache.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_evicts_oldest_when_full() {
        let cache = PlotCache::with_capacity(2);
        cache.store("old", plot("old", 60)).await;
        cache.store("new", plot("new", 0)).await;
        cache.store("newest", plot("newest", 0)).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("old").await.is_none());
        assert!(cache.get("new").await.is_some());
        assert!(cache.get("newest").await.is_some());
    }

    #[tokio::test]
    async fn test_replacing_does_not_evict() {
        let cache = PlotCache::with_capacity(2);
        cache.store("a", plot("a", 60)).await;
        cache.store("b", plot("b", 0)).await;
        cache.store("a", plot("a", 0)).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("b").await.is_some());
    }
}
