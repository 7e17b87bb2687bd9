//! Layout engine - geometry and height of feed rows
//!
//! # Module Structure
//!
//! - `geometry`: Point, Size, Rect, EdgeInsets
//! - `metrics`: LayoutMetrics - fixed sizes and spacings
//! - `measure`: TextMeasurer trait and the default FixedAdvanceMeasurer
//! - `engine`: RowLayout - content + width => RowGeometry
//! - `cache`: LayoutCache - optional LRU of computed geometry

pub mod cache;
pub mod engine;
pub mod geometry;
pub mod measure;
pub mod metrics;

pub use cache::{LayoutCache, LayoutCacheKey};
pub use engine::{ReviewGeometry, RowGeometry, RowLayout, SummaryGeometry};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use measure::{FixedAdvanceMeasurer, TextMeasurer};
pub use metrics::LayoutMetrics;
