// ── Keyed response memoizer ──
//
// Unbounded, process-lifetime cache for decoded API results. Owned and
// injected by the caller; the client itself never caches. Concurrent misses
// for the same key may fetch more than once; the last insert wins. Errors
// are never cached.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

/// Concurrent map from caller-chosen keys to previously decoded results.
///
/// Values are stored type-erased; a lookup only hits when the stored value
/// downcasts to the requested type, so reusing a key across result types
/// falls back to a fetch rather than misbehaving.
#[derive(Default)]
pub struct Memo {
    entries: DashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or await `fetch` and cache its
    /// success. The future is only polled on a miss.
    pub async fn get_or_fetch<T, E, F>(&self, key: &str, fetch: F) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: Future<Output = Result<T, E>>,
    {
        let hit = self
            .entries
            .get(key)
            .and_then(|entry| entry.downcast_ref::<T>().cloned());
        if let Some(value) = hit {
            trace!(key, "memo hit");
            return Ok(value);
        }

        trace!(key, "memo miss");
        let value = fetch.await?;
        self.entries.insert(key.to_owned(), Arc::new(value.clone()));
        Ok(value)
    }

    /// Drop one cached entry.
    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    async fn counted(calls: &AtomicUsize, value: i32) -> Result<i32, String> {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(value)
    }

    #[tokio::test]
    async fn second_lookup_skips_the_fetch() {
        let memo = Memo::new();
        let calls = AtomicUsize::new(0);

        let first = memo.get_or_fetch("teams", counted(&calls, 7)).await.unwrap();
        let second = memo.get_or_fetch("teams", counted(&calls, 9)).await.unwrap();

        assert_eq!(first, 7);
        assert_eq!(second, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let memo = Memo::new();

        let failed: Result<i32, String> = memo
            .get_or_fetch("season:T1", async { Err("sesión inválida".to_owned()) })
            .await;
        assert_eq!(failed.unwrap_err(), "sesión inválida");
        assert!(memo.is_empty());

        let ok: Result<i32, String> = memo.get_or_fetch("season:T1", async { Ok(3) }).await;
        assert_eq!(ok.unwrap(), 3);
        assert_eq!(memo.len(), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let memo = Memo::new();
        let calls = AtomicUsize::new(0);

        memo.get_or_fetch("k", counted(&calls, 1)).await.unwrap();
        memo.invalidate("k");
        let value = memo.get_or_fetch("k", counted(&calls, 2)).await.unwrap();

        assert_eq!(value, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn type_mismatch_falls_back_to_fetch() {
        let memo = Memo::new();

        let _: i32 = memo
            .get_or_fetch::<i32, String, _>("k", async { Ok(1) })
            .await
            .unwrap();
        let text: String = memo
            .get_or_fetch::<String, String, _>("k", async { Ok("uno".to_owned()) })
            .await
            .unwrap();

        assert_eq!(text, "uno");
    }
}
