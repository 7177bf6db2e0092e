use crate::model::ScraperError;

/// Transport used to download a listing page.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}
