#![forbid(unsafe_code)]

//! LRU cache for shaped labels with generation-based invalidation.
//!
//! Tab strips re-shape the same handful of labels over and over (every
//! selection change can alter the width hint of a clamped tab). The cache
//! keys on every field of [`ShapeRequest`] plus a generation counter. When
//! fonts or DPI change, the caller bumps the generation with
//! [`CachedShaper::invalidate`] and stale entries are replaced lazily.
//!
//! The key owns the label text: a cached line carries the drawn text, so two
//! labels must never share an entry.

use crate::features::ShapingFeatures;
use crate::shaping::{ShapeRequest, ShapedLine, TextDirection, TextShaper};
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::num::NonZeroUsize;

/// Deterministic cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ShapingKey {
    text: String,
    language: String,
    direction: TextDirection,
    features: ShapingFeatures,
    max_width: Option<i32>,
}

impl ShapingKey {
    fn new(request: &ShapeRequest<'_>) -> Self {
        Self {
            text: request.text.to_string(),
            language: request.language.to_string(),
            direction: request.direction,
            features: request.features.clone(),
            max_width: request.max_width,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedEntry {
    line: ShapedLine,
    generation: u64,
}

/// Statistics for the shaping cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapingCacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses (triggered shaping).
    pub misses: u64,
    /// Number of stale entries replaced due to generation mismatch.
    pub stale_evictions: u64,
    /// Current number of entries in the cache.
    pub size: usize,
    /// Maximum capacity of the cache.
    pub capacity: usize,
    /// Current invalidation generation.
    pub generation: u64,
}

impl ShapingCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Caching wrapper around another shaper.
pub struct CachedShaper<S: TextShaper> {
    shaper: S,
    cache: LruCache<ShapingKey, CachedEntry, FxBuildHasher>,
    generation: u64,
    stats: ShapingCacheStats,
}

impl<S: TextShaper> std::fmt::Debug for CachedShaper<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedShaper")
            .field("stats", &self.stats())
            .finish()
    }
}

impl<S: TextShaper> CachedShaper<S> {
    /// Create a new cache with the given backend and capacity (min 1).
    pub fn new(shaper: S, capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            shaper,
            cache: LruCache::with_hasher(cap, FxBuildHasher),
            generation: 0,
            stats: ShapingCacheStats {
                capacity: cap.get(),
                ..Default::default()
            },
        }
    }

    /// Bump the generation counter, invalidating all cached entries in O(1).
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.stats.generation = self.generation;
    }

    /// Clear all cached entries and reset stats.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.generation += 1;
        self.stats = ShapingCacheStats {
            capacity: self.stats.capacity,
            generation: self.generation,
            ..Default::default()
        };
    }

    /// Current cache statistics.
    #[inline]
    pub fn stats(&self) -> ShapingCacheStats {
        ShapingCacheStats {
            size: self.cache.len(),
            ..self.stats
        }
    }

    /// The wrapped backend.
    pub fn inner(&self) -> &S {
        &self.shaper
    }
}

impl<S: TextShaper> TextShaper for CachedShaper<S> {
    fn shape(&mut self, request: &ShapeRequest<'_>) -> ShapedLine {
        let key = ShapingKey::new(request);

        if let Some(entry) = self.cache.get(&key) {
            if entry.generation == self.generation {
                self.stats.hits += 1;
                return entry.line.clone();
            }
            self.stats.stale_evictions += 1;
        }

        self.stats.misses += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "shaping_cache.miss",
            text_len = request.text.len(),
            max_width = ?request.max_width,
            generation = self.generation,
            size = self.cache.len()
        );
        let line = self.shaper.shape(request);
        self.cache.put(
            key,
            CachedEntry {
                line: line.clone(),
                generation: self.generation,
            },
        );
        line
    }
}
