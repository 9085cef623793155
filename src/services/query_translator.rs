//! Media query translation
//!
//! Converts the host's generic media query into Unsplash query parameters.
//! Permissive on purpose: the media library probes providers with sort
//! fields they may not support, so unsupported fields fall back to the
//! defaults instead of erroring.

use crate::domain::models::{MediaQuery, SortDirection};
use crate::infrastructure::unsplash::{OrderBy, UnsplashQuery, MAX_PER_PAGE};

/// Translate a media-library query into an Unsplash query.
///
/// Defaults: page 1, page size 30 (the upstream hard limit, also the clamp
/// for larger requests), order "latest". A date sort maps desc to "latest"
/// and asc to "oldest"; any other sort field keeps the default. A search
/// term forces relevance ordering, the only ordering the search endpoint
/// supports.
#[must_use]
pub fn translate(input: &MediaQuery) -> UnsplashQuery {
    let mut query = UnsplashQuery::default();

    if let Some(per_page) = input.per_page {
        query.per_page = per_page.min(MAX_PER_PAGE);
    }
    if let Some(page) = input.page {
        query.page = page;
    }

    if input.order_by.as_deref() == Some("date") {
        query.order_by = match input.order.unwrap_or_default() {
            SortDirection::Desc => OrderBy::Latest,
            SortDirection::Asc => OrderBy::Oldest,
        };
    }

    if input.is_search() {
        query.query.clone_from(&input.search);
        query.order_by = OrderBy::Relevant;
    }

    query
}
