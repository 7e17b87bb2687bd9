//! Raw review records as delivered by a data source.

use serde::Deserialize;

/// One review as received from the backend.
///
/// Plain data: no styling, no identity. Converted into a `ReviewRow` by the
/// controller once a load completes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Author's first name.
    pub first_name: String,
    /// Author's last name.
    pub last_name: String,
    /// Star rating as sent by the backend; not yet validated.
    pub rating: i64,
    /// Review body. May be empty.
    #[serde(default)]
    pub text: String,
    /// Creation time, already formatted for display.
    pub created: String,
    /// Avatar image location, if the author has one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Review {
    /// Author name as shown in the row header.
    pub fn author_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Envelope used by the reviews endpoint.
///
/// Other fields of the envelope (such as a server-side `count`) are ignored;
/// the summary row counts the records actually received.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewsPage {
    /// Review records in display order.
    pub items: Vec<Review>,
}
