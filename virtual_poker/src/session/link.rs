//! Shareable table links.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Origin used when the embedding page reports none.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Query key carrying the table identifier.
pub const TABLE_QUERY_KEY: &str = "table";

const TABLE_ID_LEN: usize = 8;

/// Opaque table token: the first eight hex digits of a v4 UUID.
///
/// Generated once per table session and never validated against anything.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TableId(String);

impl TableId {
    pub fn generate() -> Self {
        Self(
            Uuid::new_v4()
                .simple()
                .to_string()
                .chars()
                .take(TABLE_ID_LEN)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the table is being shown from.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageLocation {
    pub origin: Option<String>,
    pub path: String,
}

impl PageLocation {
    pub fn new(origin: Option<String>, path: impl Into<String>) -> Self {
        Self {
            origin,
            path: path.into(),
        }
    }

    /// The reported origin without trailing slashes, or [`DEFAULT_ORIGIN`]
    /// if nothing is left of it or it's the literal `null` that sandboxed
    /// and `file://` pages report.
    pub fn effective_origin(&self) -> &str {
        match self
            .origin
            .as_deref()
            .map(|origin| origin.trim().trim_end_matches('/'))
        {
            Some(origin) if !origin.is_empty() && origin != "null" => origin,
            _ => DEFAULT_ORIGIN,
        }
    }
}

impl Default for PageLocation {
    fn default() -> Self {
        Self::new(None, "/")
    }
}

/// `<origin><path>?table=<id>`
pub fn share_url(location: &PageLocation, table_id: &TableId) -> String {
    format!(
        "{}{}?{TABLE_QUERY_KEY}={table_id}",
        location.effective_origin(),
        location.path
    )
}
