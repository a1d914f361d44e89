use moka::sync::Cache;
use std::sync::Arc;

use crate::hashing::hash_word_pair;

/// Unbounded, process-lifetime cache of raw pairwise similarities.
///
/// No capacity is configured, so entries are never evicted. Vocabularies in this
/// use case are small enough that growth is not a concern.
pub struct SimilarityCache {
    entries: Cache<[u8; 32], f32>,
}

impl SimilarityCache {
    /// Creates an empty, unbounded cache.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    /// Looks up the raw similarity for a word pair (order and case insensitive).
    #[inline]
    pub fn lookup(&self, word_a: &str, word_b: &str) -> Option<f32> {
        self.lookup_by_key(&hash_word_pair(word_a, word_b))
    }

    /// Looks up an entry by a precomputed pair key.
    #[inline]
    pub fn lookup_by_key(&self, key: &[u8; 32]) -> Option<f32> {
        self.entries.get(key)
    }

    /// Stores the raw similarity for a word pair and returns the computed key.
    #[inline]
    pub fn store(&self, word_a: &str, word_b: &str, value: f32) -> [u8; 32] {
        let key = hash_word_pair(word_a, word_b);
        self.entries.insert(key, value);
        key
    }

    /// Stores a value under a precomputed pair key.
    #[inline]
    pub fn store_by_key(&self, key: [u8; 32], value: f32) {
        self.entries.insert(key, value);
    }

    /// Returns `true` if the pair has a cached similarity.
    #[inline]
    pub fn contains(&self, word_a: &str, word_b: &str) -> bool {
        self.entries.contains_key(&hash_word_pair(word_a, word_b))
    }

    /// Returns the number of cached pairs.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached pair.
    pub fn clear(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks();
    }
}

impl Default for SimilarityCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimilarityCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

#[derive(Clone)]
/// Shared handle to a [`SimilarityCache`].
///
/// Lets several scorers over the same embedding table reuse one set of cosine
/// results.
pub struct SimilarityCacheHandle {
    inner: Arc<SimilarityCache>,
}

impl SimilarityCacheHandle {
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SimilarityCache::new()),
        }
    }

    #[inline]
    pub fn lookup(&self, word_a: &str, word_b: &str) -> Option<f32> {
        self.inner.lookup(word_a, word_b)
    }

    #[inline]
    pub fn store(&self, word_a: &str, word_b: &str, value: f32) -> [u8; 32] {
        self.inner.store(word_a, word_b, value)
    }

    #[inline]
    pub fn contains(&self, word_a: &str, word_b: &str) -> bool {
        self.inner.contains(word_a, word_b)
    }

    pub fn len(&self) -> usize {
        self.inner.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Returns the underlying cache.
    #[inline]
    pub fn cache(&self) -> &SimilarityCache {
        &self.inner
    }

    /// Returns the number of strong references to the underlying cache.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl Default for SimilarityCacheHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimilarityCacheHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityCacheHandle")
            .field("strong_count", &self.strong_count())
            .finish()
    }
}
