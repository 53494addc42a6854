//! Tests for blended-model memoization

#[cfg(test)]
mod tests {
    use phonodrift::model::anchors::{anchor_a, anchor_b};
    use phonodrift::model::blend::blend;
    use phonodrift::model::cache::BlendCache;
    use phonodrift::model::drift::Drift;

    #[test]
    fn test_cache_new() {
        let cache = BlendCache::new(anchor_a(), anchor_b());
        assert_eq!(cache.stats.hits, 0);
        assert_eq!(cache.stats.misses, 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let mut cache = BlendCache::new(anchor_a(), anchor_b());
        let drift = Drift::clamped(0.3);

        let first = cache.get_or_blend(drift).clone();
        assert_eq!(cache.stats.misses, 1);
        assert_eq!(cache.stats.hits, 0);

        let second = cache.get_or_blend(drift).clone();
        assert_eq!(cache.stats.hits, 1);
        assert_eq!(cache.stats.misses, 1);
        assert_eq!(first, second);
    }

    // Cached models are identical to a fresh blend
    #[test]
    fn test_cached_model_matches_fresh_blend() {
        let mut cache = BlendCache::new(anchor_a(), anchor_b());
        let drift = Drift::clamped(0.8);

        assert_eq!(
            *cache.get_or_blend(drift),
            blend(anchor_a(), anchor_b(), drift)
        );
    }

    #[test]
    fn test_distinct_drifts_cached_separately() {
        let mut cache = BlendCache::new(anchor_a(), anchor_b());

        let low = cache.get_or_blend(Drift::ANCHOR_A).drift();
        let high = cache.get_or_blend(Drift::ANCHOR_B).drift();

        assert_eq!(low, Drift::ANCHOR_A);
        assert_eq!(high, Drift::ANCHOR_B);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats.misses, 2);
    }
}
