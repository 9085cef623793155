pub mod mapper;
pub mod normalizer;
pub mod provider;
pub mod query_translator;
pub mod resize;

pub use normalizer::{DateRepairer, SEARCH_DATE_BASE};
pub use provider::UnsplashProvider;
pub use resize::{resize_url, DEFAULT_CROP_FOCUS};
