use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// MIME type for every record this provider emits. Unsplash serves JPEG only.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Orientation of an image size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Portrait iff height exceeds width; square counts as landscape.
    #[must_use]
    pub const fn from_dimensions(width: u32, height: u32) -> Self {
        if height > width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// A named size variant of a normalized image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    /// Target width in pixels.
    pub width: u32,

    /// Target height in pixels. Zero means unconstrained.
    pub height: u32,

    /// Orientation of the source photo (shared by all variants).
    pub orientation: Orientation,

    /// Render URL with resize parameters applied.
    pub url: String,
}

/// Normalized photo record handed to the consuming media library.
///
/// Records are built transiently per request from raw Unsplash responses and
/// never persisted here. After normalization every record in a result list
/// has a unique `id`; promotional entries have a neighbor's timestamp
/// appended to theirs (see `services::normalizer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Unique identifier within a result list. For promotional entries this
    /// is the upstream id with the borrowed timestamp appended.
    pub id: String,

    /// Upstream photo id, unmodified. Used to route download tracking.
    pub source_id: String,

    /// MIME type, always [`IMAGE_MIME_TYPE`].
    pub mime_type: String,

    /// Base image URL (the upstream `raw` variant, accepts resize params).
    pub url: String,

    /// Generated filename, `{id}.jpg`.
    pub filename: String,

    /// Permalink to the photo page.
    pub link: String,

    /// Display title. May be empty.
    pub title: String,

    /// Source width in pixels.
    pub width: u32,

    /// Source height in pixels.
    pub height: u32,

    /// Alternative text. May be empty.
    pub alt: String,

    /// Ready-to-render photographer credit line.
    pub description: String,

    /// Caption, same credit line as `description`.
    pub caption: String,

    /// Named size variants with resize URLs.
    pub sizes: BTreeMap<String, ImageSize>,

    /// Effective date as a unix timestamp, used purely for ordering.
    ///
    /// `None` for promotional entries until the repair pass borrows a
    /// neighbor's timestamp, and stays `None` when the whole stream is
    /// undated (the explicit terminal case of the repair).
    pub date: Option<i64>,
}

impl Image {
    /// Whether this record still lacks an effective date.
    #[must_use]
    pub const fn is_undated(&self) -> bool {
        self.date.is_none()
    }

    /// Assign a borrowed timestamp and disambiguate the id against the
    /// neighbor it was borrowed from.
    pub fn borrow_date(&mut self, date: i64) {
        self.id = format!("{}{date}", self.id);
        self.date = Some(date);
    }
}

/// Ordered list of normalized records returned for one media query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaList {
    /// Records in result order.
    pub items: Vec<Image>,

    /// Upstream total match count, when the endpoint reports one
    /// (search responses do, listing responses do not).
    pub total: Option<u64>,
}

impl MediaList {
    /// List with items and no total.
    #[must_use]
    pub const fn new(items: Vec<Image>) -> Self {
        Self { items, total: None }
    }

    /// Empty list, the uniform failure outcome at the provider boundary.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: None,
        }
    }

    /// Number of records in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
