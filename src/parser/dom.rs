//! Typed tree queries over a parsed HTML document.
//!
//! Thin layer over `scraper` so the listing and extraction code never
//! navigates the tree by hand.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

pub type Node<'a> = ElementRef<'a>;

/// Parsed listing page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    pub fn root(&self) -> Node<'_> {
        self.html.root_element()
    }
}

/// First descendant of `node` matching `selector`, in document order.
pub fn find_first<'a>(node: Node<'a>, selector: &Selector) -> Option<Node<'a>> {
    node.select(selector).next()
}

/// Every descendant of `node` matching `selector`, in document order.
pub fn find_all<'a>(node: Node<'a>, selector: &Selector) -> Vec<Node<'a>> {
    node.select(selector).collect()
}

/// Element children of `node` with the given tag name.
pub fn children_named<'a>(node: Node<'a>, tag: &str) -> Vec<Node<'a>> {
    node.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == tag)
        .collect()
}

pub fn attr<'a>(node: Node<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}

/// Text of `node` with every text fragment trimmed and empty fragments dropped.
pub fn text_of(node: Node<'_>) -> String {
    node.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Selectors for the listing page markup.
pub struct Selectors {
    pub container: Selector,
    pub item: Selector,
    pub heading: Selector,
    pub anchor: Selector,
    pub image_cell: Selector,
    pub image: Selector,
    pub primary_info: Selector,
    pub secondary_info: Selector,
    pub promoted: Selector,
    pub age: Selector,
}

pub static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    container: selector("div.new_lst"),
    item: selector("ul.fa > li"),
    heading: selector("h1"),
    anchor: selector("a"),
    image_cell: selector("dt"),
    image: selector("img"),
    primary_info: selector("div.b1"),
    secondary_info: selector("div.b2"),
    promoted: selector("span.zhutui"),
    age: selector("span.xl"),
});

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}
