//! LRU cache for computed row geometry.
//!
//! Layout is recomputed on every pass by default. Rendering layers that ask
//! for heights far more often than content changes can keep results here.

use std::num::NonZeroUsize;

use lru::LruCache;

use super::engine::RowGeometry;
use crate::model::{LineLimit, RowId};

/// Key for geometry cache lookup.
///
/// Includes everything a row's geometry depends on besides its immutable
/// content: identity, width and current truncation limit. Expanding a row
/// changes its limit and therefore its key, so no explicit invalidation is
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutCacheKey {
    /// Row identity.
    pub id: RowId,
    /// Bit pattern of the width, so equal widths hash equally.
    pub width_bits: u64,
    /// Truncation limit at measurement time.
    pub truncation: LineLimit,
}

impl LayoutCacheKey {
    /// Key for `id` laid out at `width` under `truncation`.
    pub fn new(id: RowId, width: f64, truncation: LineLimit) -> Self {
        Self {
            id,
            width_bits: width.to_bits(),
            truncation,
        }
    }
}

/// Bounded LRU cache of `RowGeometry`.
pub struct LayoutCache {
    cache: LruCache<LayoutCacheKey, RowGeometry>,
}

impl LayoutCache {
    /// Capacity used when zero is requested.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create new cache with given capacity.
    ///
    /// If capacity is 0, uses `DEFAULT_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(Self::DEFAULT_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Get cached geometry if present. Updates LRU ordering.
    pub fn get(&mut self, key: &LayoutCacheKey) -> Option<RowGeometry> {
        self.cache.get(key).copied()
    }

    /// Insert geometry, evicting the least recently used entry when full.
    pub fn put(&mut self, key: LayoutCacheKey, geometry: RowGeometry) {
        self.cache.put(key, geometry);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
