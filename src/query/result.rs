use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of a result set, keys in the order the service sent them.
pub type Record = Map<String, Value>;

/// Response body of the query service.
///
/// Both parts are optional and independent. Unknown top-level fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Record>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl QueryResult {
    /// Rows, or an empty slice when `data` was absent.
    pub fn records(&self) -> &[Record] {
        self.data.as_deref().unwrap_or_default()
    }

    /// Summary text when present and non-empty.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}
