use std::collections::HashMap;

use gameshelf_core::MatchedGame;
use tokio::sync::Mutex;

/// Session-scoped cache of successful matches, keyed by the raw source
/// title (case-sensitive, unnormalized).
///
/// Only hits are cached: a title that failed to match may succeed on a
/// retry within the same session (transient API errors), so misses are
/// always re-queried.
#[derive(Default)]
pub struct MatchCache {
    inner: Mutex<HashMap<String, MatchedGame>>,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<MatchedGame> {
        self.inner.lock().await.get(key).cloned()
    }

    pub async fn insert(&self, key: String, matched: MatchedGame) {
        self.inner.lock().await.insert(key, matched);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}
