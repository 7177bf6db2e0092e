pub mod classifier;
pub mod config;
pub mod model;
pub mod notifier;
pub mod parser;
pub mod scraper;
pub mod search;

pub use classifier::{Classification, KeywordKind, classify};
pub use config::{AppConfig, SiteConfig};
pub use model::{ProductRecord, SearchResult};
pub use search::{Searcher, search, search_site};
