//! Review data sources.
//!
//! The controller calls a source exactly once per load and awaits the
//! returned future. Transport, retry and caching are the source's business.
//!
//! - File loading for JSON documents on disk
//! - In-memory records for hosts that already hold the data

use std::cell::Cell;

use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::model::{Review, ReviewsPage, SourceError};

pub mod file;

pub use file::JsonFileSource;

/// Asynchronous provider of raw review records.
///
/// Futures are `'static` so a pending load does not borrow the source; they
/// are not `Send`, matching the single-threaded controller.
pub trait ReviewSource {
    /// Fetch the full list of reviews.
    fn fetch_reviews(&self) -> LocalBoxFuture<'static, Result<Vec<Review>, SourceError>>;
}

/// In-memory source returning the same records (or failure) on every fetch.
#[derive(Debug)]
pub struct StaticSource {
    outcome: Result<Vec<Review>, String>,
    fetches: Cell<usize>,
}

impl StaticSource {
    /// Source that always yields `reviews`.
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            outcome: Ok(reviews),
            fetches: Cell::new(0),
        }
    }

    /// Source that always fails with `SourceError::Unavailable(reason)`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            fetches: Cell::new(0),
        }
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl ReviewSource for StaticSource {
    fn fetch_reviews(&self) -> LocalBoxFuture<'static, Result<Vec<Review>, SourceError>> {
        self.fetches.set(self.fetches.get() + 1);
        let outcome = self.outcome.clone().map_err(SourceError::Unavailable);
        future::ready(outcome).boxed_local()
    }
}

/// Parse a reviews document.
///
/// Accepts either an envelope object with an `items` array or a bare array.
///
/// # Errors
///
/// Returns `SourceError::Decode` if the text is not JSON or does not match
/// either shape.
pub fn parse_reviews(json: &str) -> Result<Vec<Review>, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| SourceError::Decode(e.to_string()))?;

    let reviews = if value.is_array() {
        serde_json::from_value::<Vec<Review>>(value)
    } else {
        serde_json::from_value::<ReviewsPage>(value).map(|page| page.items)
    };

    reviews.map_err(|e| SourceError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    const RECORD: &str =
        r#"{"firstName":"Jane","lastName":"Doe","rating":4,"text":"Fine","created":"today"}"#;

    // ========================================================================
    // parse_reviews() tests
    // ========================================================================

    #[test]
    fn parses_bare_array() {
        let json = format!("[{},{}]", RECORD, RECORD);
        let reviews = parse_reviews(&json).unwrap();
        assert_eq!(reviews.len(), 2);
    }

    #[test]
    fn parses_envelope() {
        let json = format!(r#"{{"items":[{}],"count":1}}"#, RECORD);
        let reviews = parse_reviews(&json).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].last_name, "Doe");
    }

    #[test]
    fn rejects_invalid_json() {
        let result = parse_reviews("{not json");
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }

    #[test]
    fn rejects_record_missing_required_field() {
        let result = parse_reviews(r#"[{"firstName":"Jane"}]"#);
        match result {
            Err(SourceError::Decode(msg)) => {
                assert!(msg.contains("lastName"), "got: {}", msg)
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_object_without_items() {
        let result = parse_reviews(r#"{"count":3}"#);
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }

    // ========================================================================
    // StaticSource tests
    // ========================================================================

    #[test]
    fn static_source_counts_fetches() {
        let source = StaticSource::new(parse_reviews(&format!("[{}]", RECORD)).unwrap());

        let first = block_on(source.fetch_reviews()).unwrap();
        let second = block_on(source.fetch_reviews()).unwrap();

        assert_eq!(first, second);
        assert_eq!(source.fetch_count(), 2);
    }

    #[test]
    fn failing_source_yields_unavailable() {
        let source = StaticSource::failing("offline");
        let result = block_on(source.fetch_reviews());
        match result {
            Err(SourceError::Unavailable(reason)) => assert_eq!(reason, "offline"),
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }
}
