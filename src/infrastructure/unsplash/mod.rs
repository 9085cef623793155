pub mod client;
pub mod errors;
pub mod types;

pub use client::UnsplashClient;
pub use errors::UnsplashApiError;
pub use types::{
    OrderBy, RawLinks, RawPhoto, RawSearchResponse, RawUrls, RawUser, RawUserLinks, UnsplashQuery,
    MAX_PER_PAGE,
};
