pub mod dom;
pub mod extractor;
pub mod listing;

pub use extractor::extract;
pub use listing::{ListingPage, RawProduct};
