use async_trait::async_trait;

use super::models::{Image, MediaList, MediaQuery};

/// Error type for resize URL construction
#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Cropping behavior requested for a resize URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropMode {
    /// No cropping; the image is fitted within the box (`fit=clip`).
    Clip,
    /// Crop to the box using the default focus hint (`faces,focalpoint`).
    Crop,
    /// Crop to the box anchored at the supplied positions. `center` entries
    /// are filtered out before the hint is built.
    Anchored(Vec<String>),
}

/// Media provider interface consumed by the host media library
///
/// This trait defines the contract between the host's media browser and a
/// backing photo source: paged, optionally searched, optionally ordered
/// queries resolving to normalized records.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Stable provider identifier, used to route records back to the
    /// provider that produced them.
    fn id(&self) -> &'static str;

    /// Human-readable provider name.
    fn name(&self) -> &'static str;

    /// Resolve a media query to an ordered list of normalized records.
    ///
    /// Never fails from the caller's perspective: transport errors,
    /// malformed responses, and upstream rejections all collapse to an
    /// empty list. Diagnostics stay internal.
    async fn query(&self, query: &MediaQuery) -> MediaList;

    /// Report a download/insert of a previously returned record, as the
    /// upstream's usage terms require. Fire-and-forget: must not block the
    /// caller and must swallow failures.
    fn track_download(&self, image: &Image);
}

/// Dynamic resize support for providers whose images are resized by URL
///
/// Pure URL construction, no network calls. Implementations must be
/// deterministic: identical inputs yield an identical URL.
pub trait ResizeUrls {
    /// Build a resized-image URL from a stored record's base URL.
    ///
    /// # Arguments
    /// * `base_url` - The record's base image URL
    /// * `width` - Target width in pixels
    /// * `height` - Target height in pixels
    /// * `crop` - Cropping behavior
    ///
    /// # Returns
    /// * `Ok(String)` - The resized-image URL
    /// * `Err(ResizeError)` if the base URL does not parse
    fn resize_url(
        &self,
        base_url: &str,
        width: u32,
        height: u32,
        crop: &CropMode,
    ) -> Result<String, ResizeError>;
}
