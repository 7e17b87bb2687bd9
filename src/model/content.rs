//! Content models for list rows.
//!
//! Immutable descriptions of what a row shows. No geometry lives here; the
//! layout engine turns a `RowContent` plus a width into a `RowGeometry`.

use super::identifiers::{LineLimit, Rating, RowId};
use super::text::StyledText;

/// A review row: avatar, author, rating, body, optional affordance, timestamp.
///
/// # Invariants
/// - `rating` is always within `1..=5` (enforced by `Rating`)
/// - `truncation` is `LineLimit::UNLIMITED` once the row has been expanded
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    id: RowId,
    author: StyledText,
    rating: Rating,
    body: StyledText,
    created: StyledText,
    truncation: LineLimit,
    avatar_url: Option<String>,
}

impl ReviewRow {
    /// Create a new review row with a fresh identity.
    pub fn new(
        author: StyledText,
        rating: Rating,
        body: StyledText,
        created: StyledText,
        truncation: LineLimit,
    ) -> Self {
        Self {
            id: RowId::next(),
            author,
            rating,
            body,
            created,
            truncation,
            avatar_url: None,
        }
    }

    /// Attach an avatar location. Image loading happens outside the core.
    pub fn with_avatar_url(mut self, url: Option<String>) -> Self {
        self.avatar_url = url;
        self
    }

    /// Identity assigned when the row was built.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Styled "First Last" line.
    pub fn author(&self) -> &StyledText {
        &self.author
    }

    /// Star rating, already clamped to 1..=5.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Styled review text.
    pub fn body(&self) -> &StyledText {
        &self.body
    }

    /// Styled creation date line.
    pub fn created(&self) -> &StyledText {
        &self.created
    }

    /// Current truncation limit of the body.
    pub fn truncation(&self) -> LineLimit {
        self.truncation
    }

    /// Avatar location, if the record carried one.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Lift the truncation limit. Identity is unchanged.
    pub(crate) fn expand(&mut self) {
        self.truncation = LineLimit::UNLIMITED;
    }
}

/// The trailing "N reviews" row.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    id: RowId,
    text: StyledText,
}

impl SummaryRow {
    /// Summary row with a fresh identity.
    pub fn new(text: StyledText) -> Self {
        Self {
            id: RowId::next(),
            text,
        }
    }

    /// Identity assigned at construction.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Styled "N reviews" text.
    pub fn text(&self) -> &StyledText {
        &self.text
    }
}

/// Content of one list row.
///
/// Sum type enforces exactly one variant; consumers match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    /// One user review.
    Review(ReviewRow),
    /// The trailing count row.
    Summary(SummaryRow),
}

impl RowContent {
    /// Identity of the row, whatever its kind.
    pub fn id(&self) -> RowId {
        match self {
            RowContent::Review(row) => row.id(),
            RowContent::Summary(row) => row.id(),
        }
    }

    /// Review row, if this is one.
    pub fn as_review(&self) -> Option<&ReviewRow> {
        match self {
            RowContent::Review(row) => Some(row),
            RowContent::Summary(_) => None,
        }
    }

    /// Truncation limit relevant to layout; summary rows never truncate.
    pub fn truncation(&self) -> LineLimit {
        match self {
            RowContent::Review(row) => row.truncation(),
            RowContent::Summary(_) => LineLimit::UNLIMITED,
        }
    }
}
