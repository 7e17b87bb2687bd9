//! Row layout engine.
//!
//! Turns a row's content plus an available width into the rectangle of every
//! sub-element and the row's total height. Holds no state besides its fixed
//! inputs (metrics, measurer, affordance size), so repeated calls with equal
//! arguments return bit-identical results.

use super::geometry::{Point, Rect, Size};
use super::measure::TextMeasurer;
use super::metrics::LayoutMetrics;
use crate::model::{LayoutError, ReviewRow, RowContent, StyledText, SummaryRow};

/// Geometry of a review row at one width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewGeometry {
    /// Avatar image, pinned to the top-left inset.
    pub avatar: Rect,
    /// Author line, right of the avatar.
    pub author: Rect,
    /// Star strip below the author.
    pub rating: Rect,
    /// Zero height when the body is blank.
    pub body: Rect,
    /// Zero size when `needs_affordance` is false.
    pub affordance: Rect,
    /// Creation date line, last element of the row.
    pub created: Rect,
    /// Whether the body is cut and a "show more" affordance is placed.
    pub needs_affordance: bool,
    /// Total row height, bottom inset included.
    pub height: f64,
}

/// Geometry of the summary row at one width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryGeometry {
    /// Centered count text.
    pub text: Rect,
    /// Total row height, vertical insets included.
    pub height: f64,
}

/// Geometry of any row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowGeometry {
    /// Layout of a review row.
    Review(ReviewGeometry),
    /// Layout of the summary row.
    Summary(SummaryGeometry),
}

impl RowGeometry {
    /// Total row height.
    pub fn height(&self) -> f64 {
        match self {
            RowGeometry::Review(geometry) => geometry.height,
            RowGeometry::Summary(geometry) => geometry.height,
        }
    }

    /// Whether the row shows a "show more" affordance.
    pub fn needs_affordance(&self) -> bool {
        match self {
            RowGeometry::Review(geometry) => geometry.needs_affordance,
            RowGeometry::Summary(_) => false,
        }
    }

    /// Check if a row-local point falls on the affordance.
    pub fn hits_affordance(&self, point: Point) -> bool {
        match self {
            RowGeometry::Review(geometry) => {
                geometry.needs_affordance && geometry.affordance.contains(point)
            }
            RowGeometry::Summary(_) => false,
        }
    }
}

/// Layout engine for feed rows.
#[derive(Debug, Clone)]
pub struct RowLayout<M> {
    metrics: LayoutMetrics,
    measurer: M,
    /// Natural size of the affordance, measured once; width-independent.
    affordance_size: Size,
}

impl<M: TextMeasurer> RowLayout<M> {
    /// Create an engine. `affordance` is the "show more" label.
    pub fn new(measurer: M, metrics: LayoutMetrics, affordance: &StyledText) -> Self {
        let affordance_size = measurer.measure_single_line(affordance);
        Self {
            metrics,
            measurer,
            affordance_size,
        }
    }

    /// Spacing constants in use.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Text measurer in use.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Measure any row.
    pub fn measure(&self, content: &RowContent, max_width: f64) -> Result<RowGeometry, LayoutError> {
        match content {
            RowContent::Review(row) => self.measure_review(row, max_width).map(RowGeometry::Review),
            RowContent::Summary(row) => {
                self.measure_summary(row, max_width).map(RowGeometry::Summary)
            }
        }
    }

    /// Lay out a review row top to bottom.
    ///
    /// # Errors
    ///
    /// `LayoutError::InvalidConstraint` if `max_width` is not a finite number > 0.
    pub fn measure_review(&self, row: &ReviewRow, max_width: f64) -> Result<ReviewGeometry, LayoutError> {
        validate_width(max_width)?;

        let m = &self.metrics;
        let avatar = Rect::new(Point::new(m.insets.left, m.insets.top), m.avatar_size);

        let column_x = m.text_column_x();
        let column_width = m.text_column_width(max_width);
        let mut cursor_y = m.insets.top;

        let author_height = self.measurer.measure(row.author(), column_width).height;
        let author = Rect::new(
            Point::new(column_x, cursor_y),
            Size::new(column_width, author_height),
        );
        cursor_y += author_height + m.author_to_rating;

        let rating = Rect::new(Point::new(column_x, cursor_y), m.rating_size);
        cursor_y += m.rating_size.height + m.rating_to_body;

        let mut needs_affordance = false;
        let mut body = Rect::new(Point::new(column_x, cursor_y), Size::ZERO);

        if !row.body().is_blank() {
            let limit = row.truncation();
            let line_cap = if limit.is_unlimited() {
                0.0
            } else {
                self.measurer.line_height(row.body().style()) * limit.get() as f64
            };
            let natural = self.measurer.measure(row.body(), column_width).height;

            needs_affordance = !limit.is_unlimited() && natural > line_cap;
            let body_height = if needs_affordance { line_cap } else { natural };

            body = Rect::new(
                Point::new(column_x, cursor_y),
                Size::new(column_width, body_height),
            );
            cursor_y += body_height + m.body_to_created;
        }

        let affordance = if needs_affordance {
            let rect = Rect::new(Point::new(column_x, cursor_y), self.affordance_size);
            cursor_y += self.affordance_size.height + m.affordance_to_created;
            rect
        } else {
            Rect::new(Point::new(column_x, cursor_y), Size::ZERO)
        };

        let created_height = self.measurer.measure(row.created(), column_width).height;
        let created = Rect::new(
            Point::new(column_x, cursor_y),
            Size::new(column_width, created_height),
        );

        let height = avatar.max_y().max(created.max_y()) + m.insets.bottom;

        Ok(ReviewGeometry {
            avatar,
            author,
            rating,
            body,
            affordance,
            created,
            needs_affordance,
            height,
        })
    }

    /// Lay out the summary row: one text run between fixed insets.
    ///
    /// # Errors
    ///
    /// `LayoutError::InvalidConstraint` if `max_width` is not a finite number > 0.
    pub fn measure_summary(&self, row: &SummaryRow, max_width: f64) -> Result<SummaryGeometry, LayoutError> {
        validate_width(max_width)?;

        let insets = &self.metrics.summary_insets;
        let text_width = max_width - insets.horizontal();
        let text_height = self.measurer.measure(row.text(), text_width).height.ceil();

        Ok(SummaryGeometry {
            text: Rect::new(
                Point::new(insets.left, insets.top),
                Size::new(text_width, text_height),
            ),
            height: text_height + insets.vertical(),
        })
    }
}

fn validate_width(width: f64) -> Result<(), LayoutError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidConstraint { width })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
