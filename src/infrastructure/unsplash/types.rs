/// Raw wire types for the Unsplash API
///
/// These mirror the JSON the API actually returns, limited to the fields
/// the provider consumes. Everything else in the payload is ignored.
use serde::{Deserialize, Serialize};

/// Upstream ordering for listing and search requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Reverse-chronological listing order. The upstream default.
    #[default]
    Latest,
    /// Chronological listing order.
    Oldest,
    /// Relevance order. The only ordering the search endpoint supports.
    Relevant,
}

impl OrderBy {
    /// Wire value for the `order_by` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::Relevant => "relevant",
        }
    }
}

/// A fully translated Unsplash query, ready to serialize onto a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsplashQuery {
    /// 1-based page number.
    pub page: u32,

    /// Page size, at most [`MAX_PER_PAGE`].
    pub per_page: u32,

    /// Result ordering.
    pub order_by: OrderBy,

    /// Search term; routes the request to `/search/photos` when present.
    pub query: Option<String>,
}

/// Hard upstream limit on page size.
pub const MAX_PER_PAGE: u32 = 30;

impl Default for UnsplashQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: MAX_PER_PAGE,
            order_by: OrderBy::Latest,
            query: None,
        }
    }
}

impl UnsplashQuery {
    /// Query parameters in wire form.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("order_by", self.order_by.as_str().to_string()),
        ];
        if let Some(ref query) = self.query {
            params.push(("query", query.clone()));
        }
        params
    }
}

/// One photo object as returned by `/photos` and inside search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPhoto {
    /// Upstream photo id. Duplicated in the stream for promoted entries.
    pub id: String,

    /// Capture timestamp, RFC 3339. Promoted entries carry one too, but it
    /// is not genuine stream-order data and is ignored for them.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Native width in pixels.
    pub width: u32,

    /// Native height in pixels.
    pub height: u32,

    /// Author-supplied description, often absent.
    #[serde(default)]
    pub description: Option<String>,

    /// Machine-generated alternative description, usually present.
    #[serde(default)]
    pub alt_description: Option<String>,

    /// Pre-rendered variant URLs.
    pub urls: RawUrls,

    /// Related links for the photo.
    pub links: RawLinks,

    /// The photographer.
    pub user: RawUser,

    /// Present (non-null) exactly when the entry is a sponsored insert.
    #[serde(default)]
    pub sponsorship: Option<serde_json::Value>,
}

impl RawPhoto {
    /// Whether this entry is a sponsored/promotional insert.
    #[must_use]
    pub const fn is_sponsored(&self) -> bool {
        self.sponsorship.is_some()
    }
}

/// Variant URLs for a photo.
///
/// `raw` is the base URL accepting imgix-style resize parameters; the other
/// variants are pre-rendered JPEGs at fixed widths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUrls {
    /// Base image URL with just the photo path and tracking id.
    pub raw: String,

    /// Maximum-dimension JPEG.
    #[serde(default)]
    pub full: Option<String>,

    /// 1080px-wide JPEG.
    #[serde(default)]
    pub regular: Option<String>,

    /// 400px-wide JPEG.
    #[serde(default)]
    pub small: Option<String>,

    /// 200px-wide JPEG.
    #[serde(default)]
    pub thumb: Option<String>,
}

/// Links attached to a photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLinks {
    /// Permalink to the photo page.
    pub html: String,

    /// Download-tracking endpoint, when provided.
    #[serde(default)]
    pub download_location: Option<String>,
}

/// The photographer who published a photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
    /// Display name.
    pub name: String,

    /// Profile links.
    pub links: RawUserLinks,
}

/// Links attached to a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUserLinks {
    /// Permalink to the profile page.
    pub html: String,
}

/// Envelope for `/search/photos` responses.
///
/// Listing responses are a bare array; search responses wrap the photos in
/// `results` alongside total counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSearchResponse {
    /// Total number of matches across all pages.
    pub total: u64,

    /// Total number of pages at the requested page size.
    pub total_pages: u64,

    /// Matches for the requested page, ordered by relevance.
    pub results: Vec<RawPhoto>,
}
