//! Bridge between the controller and a rendering layer.
//!
//! A virtualized list asks three things per visible index: the row, its
//! height at the current width, and where to draw each element. Taps on the
//! "show more" affordance come back as an index; the adapter resolves the
//! row identity at that index and expands through the controller, so no
//! behavior is stored inside content values.

use super::controller::ReviewsController;
use super::observer::ListChange;
use crate::layout::{LayoutCache, LayoutCacheKey, Point, RowGeometry, RowLayout, TextMeasurer};
use crate::model::{RowContent, RowError, RowIndexOutOfRange};

/// Per-index geometry and tap handling for a rendering layer.
pub struct RowAdapter<M> {
    layout: RowLayout<M>,
    cache: Option<LayoutCache>,
}

impl<M: TextMeasurer> RowAdapter<M> {
    /// Adapter that recomputes geometry on every request.
    pub fn new(layout: RowLayout<M>) -> Self {
        Self {
            layout,
            cache: None,
        }
    }

    /// Adapter that keeps up to `capacity` geometries (0 = default capacity).
    pub fn with_cache(layout: RowLayout<M>, capacity: usize) -> Self {
        Self {
            layout,
            cache: Some(LayoutCache::new(capacity)),
        }
    }

    /// Engine used for every measurement.
    pub fn layout(&self) -> &RowLayout<M> {
        &self.layout
    }

    /// Geometry of the row at `index` laid out at `width`.
    ///
    /// # Errors
    ///
    /// `RowError::Index` for an index outside the list,
    /// `RowError::Layout` for an unusable width.
    pub fn geometry(
        &mut self,
        controller: &ReviewsController,
        index: usize,
        width: f64,
    ) -> Result<RowGeometry, RowError> {
        let content = controller.row(index)?;
        let key = LayoutCacheKey::new(content.id(), width, content.truncation());

        if let Some(geometry) = self.cache.as_mut().and_then(|cache| cache.get(&key)) {
            return Ok(geometry);
        }

        let geometry = self.layout.measure(content, width)?;
        tracing::trace!(index, width, height = geometry.height(), "Measured row");

        if let Some(cache) = self.cache.as_mut() {
            cache.put(key, geometry);
        }
        Ok(geometry)
    }

    /// Height of the row at `index`.
    pub fn row_height(
        &mut self,
        controller: &ReviewsController,
        index: usize,
        width: f64,
    ) -> Result<f64, RowError> {
        self.geometry(controller, index, width)
            .map(|geometry| geometry.height())
    }

    /// Sum of all row heights at `width`.
    pub fn content_height(
        &mut self,
        controller: &ReviewsController,
        width: f64,
    ) -> Result<f64, RowError> {
        (0..controller.row_count()).try_fold(0.0, |total, index| {
            Ok(total + self.row_height(controller, index, width)?)
        })
    }

    /// The affordance of the row at `index` was activated.
    ///
    /// Returns the index the controller reports as changed, or `None` when
    /// the row is not an expandable review.
    ///
    /// # Errors
    ///
    /// `RowIndexOutOfRange` for an index outside the list.
    pub fn tap_affordance(
        &self,
        controller: &mut ReviewsController,
        index: usize,
    ) -> Result<Option<usize>, RowIndexOutOfRange> {
        let id = match controller.row(index)? {
            RowContent::Review(row) => row.id(),
            RowContent::Summary(_) => return Ok(None),
        };
        tracing::debug!(index, %id, "Affordance tapped");
        Ok(controller.expand(id))
    }

    /// A tap at row-local `point` in the row at `index`, laid out at `width`.
    ///
    /// Expands the row when the point hits its affordance.
    pub fn tap(
        &mut self,
        controller: &mut ReviewsController,
        index: usize,
        point: Point,
        width: f64,
    ) -> Result<Option<usize>, RowError> {
        let geometry = self.geometry(controller, index, width)?;
        if !geometry.hits_affordance(point) {
            return Ok(None);
        }
        Ok(self.tap_affordance(controller, index)?)
    }

    /// Drop cached geometry made obsolete by `change`.
    ///
    /// Row changes need nothing: the changed row's truncation limit is part
    /// of its cache key.
    pub fn handle_change(&mut self, change: ListChange) {
        if let (ListChange::Reloaded, Some(cache)) = (change, self.cache.as_mut()) {
            cache.clear();
        }
    }

    /// Number of cached geometries (0 without a cache).
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, LayoutCache::len)
    }
}
