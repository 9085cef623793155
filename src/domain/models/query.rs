use serde::{Deserialize, Serialize};

/// Sort direction requested by the consuming media library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Newest first. The default throughout the media library UI.
    #[default]
    Desc,
    /// Oldest first.
    Asc,
}

/// Generic media-library query, the inbound contract of the provider.
///
/// All fields are optional; the query translator fills in upstream defaults.
/// Unsupported `order_by` values are silently ignored rather than rejected,
/// matching how the consuming UI probes providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQuery {
    /// 1-based page number.
    pub page: Option<u32>,

    /// Requested page size. Clamped to the upstream limit of 30.
    pub per_page: Option<u32>,

    /// Sort field. Only `"date"` maps to an upstream ordering.
    pub order_by: Option<String>,

    /// Sort direction, meaningful only alongside a supported `order_by`.
    pub order: Option<SortDirection>,

    /// Free-text search term. Presence routes the query to the search
    /// endpoint and forces relevance ordering.
    pub search: Option<String>,
}

impl MediaQuery {
    /// Whether this query should hit the search endpoint.
    #[must_use]
    pub fn is_search(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
    }
}
