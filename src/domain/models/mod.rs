pub mod config;
pub mod image;
pub mod query;
pub mod sizes;

pub use config::{ApiKeySource, LoggingConfig, ProviderConfig};
pub use image::{Image, ImageSize, MediaList, Orientation, IMAGE_MIME_TYPE};
pub use query::{MediaQuery, SortDirection};
pub use sizes::{SizeRegistry, SizeSpec};
