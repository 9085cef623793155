//! The Unsplash media provider
//!
//! Ties the pipeline together: translate the media query, fetch the page,
//! map each raw photo, repair the stream. The provider boundary never
//! surfaces an error: any failure on the way collapses to an empty list
//! and a log line, which the media library renders as "no results".

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::domain::models::{Image, MediaList, MediaQuery, ProviderConfig, SizeRegistry};
use crate::domain::ports::{CropMode, MediaProvider, ResizeError, ResizeUrls};
use crate::infrastructure::unsplash::{UnsplashApiError, UnsplashClient, UnsplashQuery};
use crate::services::{mapper, normalizer, query_translator, resize};

/// Media provider backed by the Unsplash API.
pub struct UnsplashProvider {
    client: UnsplashClient,
    sizes: SizeRegistry,
}

impl UnsplashProvider {
    /// Create a provider with the stock size registry.
    ///
    /// # Errors
    /// Fails only when the HTTP client cannot be built from the
    /// configuration; a missing API key is not an error here.
    pub fn new(config: &ProviderConfig) -> Result<Self, UnsplashApiError> {
        Self::with_sizes(config, SizeRegistry::default())
    }

    /// Create a provider generating the given size variants.
    ///
    /// # Errors
    /// Same failure mode as [`Self::new`].
    pub fn with_sizes(
        config: &ProviderConfig,
        sizes: SizeRegistry,
    ) -> Result<Self, UnsplashApiError> {
        Ok(Self {
            client: UnsplashClient::new(config)?,
            sizes,
        })
    }

    /// Fetch and normalize one listing page.
    async fn request_images(&self, query: &UnsplashQuery) -> Result<MediaList, UnsplashApiError> {
        let photos = self.client.list_photos(query).await?;
        let mapped = photos.iter().map(|photo| mapper::map_photo(photo, &self.sizes));
        Ok(MediaList::new(normalizer::repair_listing(mapped)))
    }

    /// Fetch one search page and assign synthetic dates.
    async fn search_images(&self, query: &UnsplashQuery) -> Result<MediaList, UnsplashApiError> {
        let response = self.client.search_photos(query).await?;
        let mut items: Vec<Image> = response
            .results
            .iter()
            .map(|photo| mapper::map_photo(photo, &self.sizes))
            .collect();
        normalizer::assign_search_dates(&mut items, query.page, query.per_page);
        Ok(MediaList {
            items,
            total: Some(response.total),
        })
    }
}

#[async_trait]
impl MediaProvider for UnsplashProvider {
    fn id(&self) -> &'static str {
        "unsplash"
    }

    fn name(&self) -> &'static str {
        "Unsplash"
    }

    #[instrument(skip(self, query), fields(search = query.is_search()))]
    async fn query(&self, query: &MediaQuery) -> MediaList {
        let translated = query_translator::translate(query);

        let result = if translated.query.is_some() {
            self.search_images(&translated).await
        } else {
            self.request_images(&translated).await
        };

        result.unwrap_or_else(|err| {
            warn!(%err, "media query failed, returning empty list");
            MediaList::empty()
        })
    }

    fn track_download(&self, image: &Image) {
        self.client.track_download(&image.source_id);
    }
}

impl ResizeUrls for UnsplashProvider {
    fn resize_url(
        &self,
        base_url: &str,
        width: u32,
        height: u32,
        crop: &CropMode,
    ) -> Result<String, ResizeError> {
        resize::resize_url(base_url, width, height, crop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_identity() {
        let provider = UnsplashProvider::new(&ProviderConfig::default()).unwrap();
        assert_eq!(provider.id(), "unsplash");
        assert_eq!(provider.name(), "Unsplash");
    }

    #[test]
    fn test_provider_construction_without_key() {
        // The missing-credential case: construction succeeds, requests
        // go out unauthenticated and fail upstream.
        assert!(UnsplashProvider::new(&ProviderConfig::default()).is_ok());
    }
}
