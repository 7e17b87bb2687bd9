//! JSON file data source.
//!
//! Reads a reviews document from disk each time reviews are fetched, so a
//! reload picks up edits to the file.

use std::path::{Path, PathBuf};

use futures::future::{FutureExt, LocalBoxFuture};

use super::{parse_reviews, ReviewSource};
use crate::model::{Review, SourceError};

/// Data source backed by a JSON file.
///
/// Accepts either a `{"items": [...]}` envelope or a bare array of records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for `path`. The file is not touched until a fetch.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file read on every fetch.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReviewSource for JsonFileSource {
    fn fetch_reviews(&self) -> LocalBoxFuture<'static, Result<Vec<Review>, SourceError>> {
        let path = self.path.clone();
        async move {
            tracing::debug!(path = %path.display(), "Reading reviews file");
            let contents = std::fs::read_to_string(&path)
                .map_err(|source| SourceError::Io { path, source })?;
            parse_reviews(&contents)
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::fs;

    #[test]
    fn fetch_reads_envelope_file() {
        let test_file = std::env::temp_dir().join("review_feed_file_source_envelope.json");
        let content = r#"{"items":[{"firstName":"Jane","lastName":"Doe","rating":4,"text":"Good","created":"today"}],"count":1}"#;
        fs::write(&test_file, content).unwrap();

        let source = JsonFileSource::new(&test_file);
        let result = block_on(source.fetch_reviews());

        let _ = fs::remove_file(&test_file);

        let reviews = result.expect("file should parse");
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].first_name, "Jane");
    }

    #[test]
    fn fetch_rereads_file_on_every_call() {
        let test_file = std::env::temp_dir().join("review_feed_file_source_reread.json");
        fs::write(&test_file, "[]").unwrap();

        let source = JsonFileSource::new(&test_file);
        let first = block_on(source.fetch_reviews()).unwrap();

        fs::write(
            &test_file,
            r#"[{"firstName":"A","lastName":"B","rating":5,"created":"now"}]"#,
        )
        .unwrap();
        let second = block_on(source.fetch_reviews()).unwrap();

        let _ = fs::remove_file(&test_file);

        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error_with_path() {
        let source = JsonFileSource::new("/nonexistent/review_feed/reviews.json");
        let result = block_on(source.fetch_reviews());

        match result {
            Err(SourceError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/review_feed/reviews.json"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
