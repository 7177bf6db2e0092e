pub mod fetcher;
pub mod traits;

pub use fetcher::{HttpFetcher, absolute_url};
pub use traits::PageFetcher;
