//! Glyph metrics cache.
//!
//! Resolving a character through a [`FallbackChain`] can mean two face
//! lookups; text that is laid out every frame resolves the same handful of
//! characters over and over. The cache memoizes resolved metrics per
//! character so repeated builds hit a hash map instead.
//!
//! Metrics are cached in font units, so one cache serves layouts at any font
//! size. Layout correctness never depends on the cache; it is purely a fast
//! path.

use vexel_core::alloc::HashMap;

use crate::font::{FallbackChain, FontMetrics, GlyphMetrics, GlyphResolver};

/// Memoized per-character metrics with hit/miss accounting.
pub struct GlyphCache {
    cache: HashMap<char, GlyphMetrics>,
    /// Statistics for monitoring cache performance
    pub hits: u64,
    pub misses: u64,
}

impl GlyphCache {
    /// Create a new empty glyph cache.
    pub fn new() -> Self {
        Self {
            cache: HashMap::with_capacity(256),
            hits: 0,
            misses: 0,
        }
    }

    /// Number of distinct characters cached.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop all cached metrics. Call when the underlying faces change.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Resolve one character, consulting the chain only on a cache miss.
    pub fn resolve(&mut self, chain: &FallbackChain<'_>, c: char) -> GlyphMetrics {
        if let Some(metrics) = self.cache.get(&c) {
            self.hits += 1;
            return *metrics;
        }
        self.misses += 1;
        let metrics = chain.resolve(c);
        self.cache.insert(c, metrics);
        metrics
    }
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`FallbackChain`] with a [`GlyphCache`] in front of it.
///
/// Plugs into [`crate::TextLayout::build`] wherever a bare chain would.
pub struct CachedChain<'a> {
    pub chain: FallbackChain<'a>,
    pub cache: &'a mut GlyphCache,
}

impl GlyphResolver for CachedChain<'_> {
    fn font_metrics(&self) -> FontMetrics {
        self.chain.metrics()
    }

    fn resolve(&mut self, c: char) -> GlyphMetrics {
        self.cache.resolve(&self.chain, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::UniformSource;
    use crate::layout::{LayoutParams, TextLayout, TextWrap};

    #[test]
    fn test_cache_counts_hits_and_misses() {
        let source = UniformSource::default();
        let chain = FallbackChain::new(&source);
        let mut cache = GlyphCache::new();

        cache.resolve(&chain, 'a');
        cache.resolve(&chain, 'a');
        cache.resolve(&chain, 'b');

        assert_eq!(cache.misses, 2);
        assert_eq!(cache.hits, 1);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear_resets_counters() {
        let source = UniformSource::default();
        let chain = FallbackChain::new(&source);
        let mut cache = GlyphCache::new();
        cache.resolve(&chain, 'a');
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.misses, 0);
    }

    #[test]
    fn test_cached_build_matches_uncached() {
        let source = UniformSource::default();
        let params = LayoutParams::new(20.0).wrap(TextWrap::Word);

        let mut plain = FallbackChain::new(&source);
        let expected = TextLayout::build("the quick brown fox", &mut plain, &params);

        let mut cache = GlyphCache::new();
        let mut cached = CachedChain {
            chain: FallbackChain::new(&source),
            cache: &mut cache,
        };
        let actual = TextLayout::build("the quick brown fox", &mut cached, &params);

        assert_eq!(expected, actual);
        assert!(cache.hits > 0);
    }
}
