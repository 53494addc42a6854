use crate::model::blend::{BlendedModel, blend};
use crate::model::drift::Drift;
use crate::model::row::AnchorModel;
use std::collections::HashMap;

/// Memoization of blended models keyed on the drift's bit pattern
///
/// Blending is a pure function of the anchors and the drift, so a cache
/// is only valid for one fixed anchor pair.
pub struct BlendCache<'a> {
    anchor_a: &'a AnchorModel,
    anchor_b: &'a AnchorModel,
    models: HashMap<u64, BlendedModel>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl<'a> BlendCache<'a> {
    /// Create an empty cache over a fixed anchor pair
    pub fn new(anchor_a: &'a AnchorModel, anchor_b: &'a AnchorModel) -> Self {
        Self {
            anchor_a,
            anchor_b,
            models: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Retrieve the cached blend or compute and store it
    pub fn get_or_blend(&mut self, drift: Drift) -> &BlendedModel {
        use std::collections::hash_map::Entry;

        match self.models.entry(drift.value().to_bits()) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(blend(self.anchor_a, self.anchor_b, drift))
            }
        }
    }

    /// Number of cached models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
