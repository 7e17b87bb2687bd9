//! Fixed sizes and spacings of the row layouts.

use super::geometry::{EdgeInsets, Size};

/// All constants the layout engine places elements with.
///
/// Geometry is a pure function of (content, width, metrics); two passes with
/// equal metrics produce identical results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Insets of a review row.
    pub insets: EdgeInsets,
    /// Avatar square.
    pub avatar_size: Size,
    /// Corner radius the renderer rounds the avatar with.
    pub avatar_corner_radius: f64,
    /// Rating indicator.
    pub rating_size: Size,
    /// Horizontal gap between avatar and text column.
    pub avatar_to_text: f64,
    /// Vertical gap between author and rating.
    pub author_to_rating: f64,
    /// Vertical gap between rating and body.
    pub rating_to_body: f64,
    /// Vertical gap after the body (before affordance or timestamp).
    pub body_to_created: f64,
    /// Vertical gap between affordance and timestamp.
    pub affordance_to_created: f64,
    /// Insets of the summary row.
    pub summary_insets: EdgeInsets,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            insets: EdgeInsets::new(9.0, 12.0, 9.0, 12.0),
            avatar_size: Size::new(36.0, 36.0),
            avatar_corner_radius: 18.0,
            rating_size: Size::new(84.0, 16.0),
            avatar_to_text: 10.0,
            author_to_rating: 6.0,
            rating_to_body: 6.0,
            body_to_created: 6.0,
            affordance_to_created: 6.0,
            summary_insets: EdgeInsets::new(12.0, 12.0, 9.0, 12.0),
        }
    }
}

impl LayoutMetrics {
    /// Width of the text column of a review row at `max_width`.
    ///
    /// Shared by author, body, affordance and timestamp.
    pub fn text_column_width(&self, max_width: f64) -> f64 {
        max_width - self.insets.horizontal() - self.avatar_size.width - self.avatar_to_text
    }

    /// X coordinate of the text column.
    pub fn text_column_x(&self) -> f64 {
        self.insets.left + self.avatar_size.width + self.avatar_to_text
    }
}
