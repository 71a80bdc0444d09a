//! Single-slot cache for the aggregated all-safes listing.
//!
//! The slot sits behind an async mutex that stays locked while the listing is
//! being computed. Concurrent callers on a cold or expired cache therefore
//! queue behind the one in-flight aggregation and read its result instead of
//! each hitting D4Sign. Failed computations leave the slot untouched, and so
//! do values rejected by the caller's store predicate.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use report_proxy_config_parser::config::CacheConfig;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    /// Computed but not kept, the next call populates again
    NotStored,
    Disabled,
}

#[derive(Debug)]
struct CachedValue<T> {
    value: Arc<T>,
    stored_at: Instant,
}

#[derive(Debug)]
pub struct AggregationCache<T> {
    enabled: bool,
    /// `None` keeps the value for the whole process lifetime
    ttl: Option<Duration>,
    slot: Mutex<Option<CachedValue<T>>>,
}

impl<T> AggregationCache<T> {
    pub fn new(enabled: bool, ttl: Option<Duration>) -> Self {
        Self {
            enabled,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.enabled, config.ttl())
    }

    /// Returns the cached value when fresh, otherwise runs `populate` (at most one at a time).
    /// A successful result is stored only when `keep` accepts it.
    pub async fn get_or_populate<E, F, Fut, K>(&self, populate: F, keep: K) -> Result<(Arc<T>, CacheStatus), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        K: FnOnce(&T) -> bool,
    {
        if !self.enabled {
            return Ok((Arc::new(populate().await?), CacheStatus::Disabled));
        }

        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref()
            && self.is_fresh(cached)
        {
            trace!("Serving aggregated listing from cache");
            return Ok((cached.value.clone(), CacheStatus::Hit));
        }

        debug!("Aggregation cache is cold or expired, populating");
        let value = Arc::new(populate().await?);
        if !keep(&value) {
            debug!("Computed value rejected for caching, slot left as is");
            return Ok((value, CacheStatus::NotStored));
        }
        *slot = Some(CachedValue {
            value: value.clone(),
            stored_at: Instant::now(),
        });
        Ok((value, CacheStatus::Miss))
    }

    fn is_fresh(&self, cached: &CachedValue<T>) -> bool {
        match self.ttl {
            Some(ttl) => cached.stored_at.elapsed() < ttl,
            None => true,
        }
    }
}
