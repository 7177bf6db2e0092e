// Listing page matching: walks the product list and keeps the items whose name contains the term
use crate::parser::dom::{self, Document, Node, SELECTORS};
use crate::scraper::absolute_url;

use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use tracing::debug;

/// One accepted list entry. Only [`ListingPage::matched_items`] builds these,
/// so the heading is always present.
#[derive(Debug, Clone)]
pub struct RawProduct<'a> {
    element: Node<'a>,
    heading: Node<'a>,
    name: String,
    detail_link: String,
}

impl<'a> RawProduct<'a> {
    pub fn element(&self) -> Node<'a> {
        self.element
    }

    pub fn heading(&self) -> Node<'a> {
        self.heading
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail_link(&self) -> &str {
        &self.detail_link
    }
}

pub struct ListingPage {
    document: Document,
}

impl ListingPage {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Document::parse(body),
        }
    }

    /// Items whose name contains `term` (literally, ignoring case), deduplicated by
    /// name and by detail link, in document order.
    pub fn matched_items(&self, term: &str, base_url: &str) -> Result<Vec<RawProduct<'_>>, regex::Error> {
        let pattern = term_pattern(term)?;

        let mut products = Vec::new();
        let mut seen_names = HashSet::new();
        let mut seen_links = HashSet::new();

        for container in dom::find_all(self.document.root(), &SELECTORS.container) {
            for li in dom::find_all(container, &SELECTORS.item) {
                let Some(heading) = dom::find_first(li, &SELECTORS.heading) else {
                    continue;
                };

                let name = dom::text_of(heading);
                if !pattern.is_match(&name) {
                    continue;
                }
                if seen_names.contains(&name) {
                    debug!("Duplicate name skipped: {}", name);
                    continue;
                }

                let Some(href) = dom::find_first(li, &SELECTORS.anchor)
                    .and_then(|a| dom::attr(a, "href"))
                else {
                    continue;
                };
                let detail_link = match absolute_url(base_url, href) {
                    Ok(link) => link,
                    Err(e) => {
                        debug!("Unresolvable link for {}: {}", name, e);
                        continue;
                    }
                };
                if seen_links.contains(&detail_link) {
                    debug!("Duplicate link skipped: {}", detail_link);
                    continue;
                }

                seen_names.insert(name.clone());
                seen_links.insert(detail_link.clone());
                products.push(RawProduct {
                    element: li,
                    heading,
                    name,
                    detail_link,
                });
            }
        }

        Ok(products)
    }
}

fn term_pattern(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
}
