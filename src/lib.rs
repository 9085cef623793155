//! Unsplash media provider
//!
//! Adapts the Unsplash photo API into the data model of a generic
//! media-library provider: paged and searched queries resolve to normalized
//! photo records with unique identifiers, order-consistent dates, named
//! size variants, and attribution, plus dynamic resize URLs and the
//! download reporting the upstream usage terms require.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): normalized models and port traits
//! - **Service Layer** (`services`): query translation, stream
//!   normalization, mapping, resize URL construction, and the provider
//! - **Infrastructure Layer** (`infrastructure`): Unsplash HTTP client,
//!   configuration, logging
//!
//! # Example
//!
//! ```ignore
//! use unsplash_provider::{ConfigLoader, MediaProvider, MediaQuery, UnsplashProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let provider = UnsplashProvider::new(&config)?;
//!
//!     let results = provider
//!         .query(&MediaQuery {
//!             search: Some("mountains".to_string()),
//!             ..Default::default()
//!         })
//!         .await;
//!
//!     for image in &results.items {
//!         println!("{}: {}", image.id, image.url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    ApiKeySource, Image, ImageSize, LoggingConfig, MediaList, MediaQuery, Orientation,
    ProviderConfig, SizeRegistry, SizeSpec, SortDirection, IMAGE_MIME_TYPE,
};
pub use domain::ports::{CropMode, MediaProvider, ResizeError, ResizeUrls};
pub use infrastructure::config::{ConfigError, ConfigLoader, API_KEY_ENV_VAR};
pub use infrastructure::unsplash::{UnsplashApiError, UnsplashClient};
pub use services::{UnsplashProvider, SEARCH_DATE_BASE};
