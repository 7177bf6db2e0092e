use crate::classifier::classify;
use crate::config::{COMMAND_INFO_FOUND, COMMAND_INFO_NOT_FOUND, DEFAULT_SHOP_ID, DEFAULT_SITE, SiteConfig};
use crate::model::{ProductRecord, ScraperError, SearchResult};
use crate::parser::{ListingPage, extract};
use crate::scraper::{HttpFetcher, PageFetcher, absolute_url};

use tracing::{info, warn};

/// Looks up `keyword` in the shop's listing using the default site and a fresh HTTP client.
pub fn search(keyword: &str, shop_id: Option<&str>) -> SearchResult {
    search_site(&DEFAULT_SITE, keyword, shop_id)
}

/// Same as [`search`] against a configured site.
pub fn search_site(site: &SiteConfig, keyword: &str, shop_id: Option<&str>) -> SearchResult {
    match HttpFetcher::new(site) {
        Ok(fetcher) => Searcher::new(site, fetcher).search(keyword, shop_id),
        Err(e) => {
            warn!("HTTP client setup failed: {}", e);
            let shop_id = shop_id.unwrap_or(DEFAULT_SHOP_ID);
            SearchResult::not_found(keyword, site.shop_link(shop_id), COMMAND_INFO_NOT_FOUND)
        }
    }
}

pub struct Searcher<'s, F> {
    site: &'s SiteConfig,
    fetcher: F,
}

impl<'s, F: PageFetcher> Searcher<'s, F> {
    pub fn new(site: &'s SiteConfig, fetcher: F) -> Self {
        Self { site, fetcher }
    }

    pub fn search(&self, keyword: &str, shop_id: Option<&str>) -> SearchResult {
        let shop_id = shop_id.unwrap_or(DEFAULT_SHOP_ID);
        let shop_link = self.site.shop_link(shop_id);

        let classification = classify(keyword, shop_id);
        info!(
            "Keyword '{}' classified as {:?} (term '{}', digits: {}) -> {}",
            keyword,
            classification.kind,
            classification.term,
            classification.has_digits,
            classification.path
        );

        let body = match self.fetch_listing(&classification.path) {
            Ok(body) => body,
            Err(e) => {
                warn!("Request failed: {}", e);
                return SearchResult::not_found(keyword, shop_link, COMMAND_INFO_NOT_FOUND);
            }
        };

        let page = ListingPage::parse(&body);
        let matched = match page.matched_items(&classification.term, &self.site.base_url) {
            Ok(items) => items,
            Err(e) => {
                warn!("Unusable keyword '{}': {}", classification.term, e);
                Vec::new()
            }
        };
        info!("Matched {} products for '{}'", matched.len(), keyword);

        if matched.is_empty() {
            return SearchResult::not_found(keyword, shop_link, COMMAND_INFO_NOT_FOUND);
        }

        let results: Vec<ProductRecord> = matched
            .iter()
            .map(|product| extract(product, &self.site.base_url))
            .collect();

        SearchResult::found(keyword, shop_link, COMMAND_INFO_FOUND, results)
    }

    fn fetch_listing(&self, path: &str) -> Result<String, ScraperError> {
        let url = absolute_url(&self.site.base_url, path)?;
        self.fetcher.fetch(&url)
    }
}
