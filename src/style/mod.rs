//! Styling provider.
//!
//! Supplies the text styles used to build content models from raw records.
//! The layout engine never sees a `Theme`; it only measures the runs a theme
//! produced.

use crate::model::{
    Color, Font, LineLimit, Rating, Review, ReviewRow, StyledText, SummaryRow, TextStyle,
};

// ===== Theme =====

/// Text styles for every text role of the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Reviewer name.
    pub author: TextStyle,
    /// Review text.
    pub body: TextStyle,
    /// Creation date.
    pub created: TextStyle,
    /// Count row.
    pub summary: TextStyle,
    /// "Show more" label.
    pub affordance: TextStyle,
    /// Label of the "show more" affordance.
    pub affordance_label: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            author: TextStyle::new(Font::new(17.0, 1.2), Color::BLACK),
            body: TextStyle::new(Font::new(16.0, 1.2), Color::BLACK),
            created: TextStyle::new(Font::new(13.0, 1.2), Color::GRAY),
            summary: TextStyle::new(Font::new(15.0, 1.2), Color::GRAY),
            affordance: TextStyle::new(Font::new(16.0, 1.2), Color::ACCENT),
            affordance_label: "Show more...".to_string(),
        }
    }
}

impl Theme {
    /// Build a review row from a raw record.
    ///
    /// Out-of-range ratings are clamped into `1..=5` and logged.
    pub fn review_row(&self, review: &Review, limit: LineLimit) -> ReviewRow {
        let rating = Rating::new(review.rating).unwrap_or_else(|err| {
            let clamped = Rating::clamped(review.rating);
            tracing::warn!(%err, clamped = clamped.get(), "Clamping review rating");
            clamped
        });

        ReviewRow::new(
            StyledText::new(review.author_name(), self.author),
            rating,
            StyledText::new(review.text.as_str(), self.body),
            StyledText::new(review.created.as_str(), self.created),
            limit,
        )
        .with_avatar_url(review.avatar_url.clone())
    }

    /// Build the trailing summary row for `count` reviews.
    pub fn summary_row(&self, count: usize) -> SummaryRow {
        SummaryRow::new(StyledText::new(count_text(count), self.summary))
    }

    /// The affordance label as a styled run.
    pub fn affordance(&self) -> StyledText {
        StyledText::new(self.affordance_label.as_str(), self.affordance)
    }
}

/// "1 review", "12 reviews".
pub fn count_text(count: usize) -> String {
    if count == 1 {
        "1 review".to_string()
    } else {
        format!("{} reviews", count)
    }
}
