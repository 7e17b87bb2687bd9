//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors.

pub mod content;
pub mod error;
pub mod identifiers;
pub mod review;
pub mod text;

// Re-export for convenience
pub use content::{ReviewRow, RowContent, SummaryRow};
pub use error::{AppError, LayoutError, LoadFailure, RowError, RowIndexOutOfRange, SourceError};
pub use identifiers::{InvalidRating, LineLimit, Rating, RowId};
pub use review::{Review, ReviewsPage};
pub use text::{Color, Font, StyledText, TextStyle};
