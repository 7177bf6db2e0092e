// Field extraction for a single matched list item
use crate::model::{DEFAULT_AGE, DEFAULT_CALL, DEFAULT_FLOW, DEFAULT_IMAGE, ProductRecord};
use crate::parser::dom::{self, Node, SELECTORS};
use crate::parser::listing::RawProduct;
use crate::scraper::absolute_url;

const GENERAL_FLOW_LABEL: &str = "通用流量";
const TARGETED_FLOW_LABEL: &str = "定向流量";
const CALL_LABEL: &str = "通话时长";

/// Builds the record for one matched item. Missing markup falls back to the
/// per-field defaults; nothing here fails.
pub fn extract(product: &RawProduct<'_>, base_url: &str) -> ProductRecord {
    let li = product.element();
    let primary = dom::find_first(li, &SELECTORS.primary_info);

    let mut record = ProductRecord {
        image: image_markdown(li, base_url),
        name: dom::text_of(product.heading()),
        promoted: promoted_flag(primary).to_string(),
        general_flow: DEFAULT_FLOW.to_string(),
        targeted_flow: DEFAULT_FLOW.to_string(),
        call_minutes: DEFAULT_CALL.to_string(),
        age: DEFAULT_AGE.to_string(),
        detail_link: product.detail_link().to_string(),
    };

    if let Some(secondary) = dom::find_first(li, &SELECTORS.secondary_info) {
        for span in dom::children_named(secondary, "span") {
            let text = dom::text_of(span);
            let Some(value) = last_token(&text) else {
                continue;
            };
            if text.contains(GENERAL_FLOW_LABEL) {
                record.general_flow = value.to_string();
            } else if text.contains(TARGETED_FLOW_LABEL) {
                record.targeted_flow = value.to_string();
            } else if text.contains(CALL_LABEL) {
                record.call_minutes = value.to_string();
            }
        }
    }

    if let Some(age) = primary.and_then(|b1| dom::find_first(b1, &SELECTORS.age)) {
        record.age = dom::text_of(age);
    }

    record
}

fn image_markdown(li: Node<'_>, base_url: &str) -> String {
    let src = dom::find_first(li, &SELECTORS.image_cell)
        .and_then(|dt| dom::find_first(dt, &SELECTORS.image))
        .and_then(|img| dom::attr(img, "src"))
        .and_then(|src| absolute_url(base_url, src).ok());

    format!("![图片]({})", src.as_deref().unwrap_or(DEFAULT_IMAGE))
}

fn promoted_flag(primary: Option<Node<'_>>) -> &'static str {
    match primary.and_then(|b1| dom::find_first(b1, &SELECTORS.promoted)) {
        Some(_) => "是",
        None => "否",
    }
}

fn last_token(text: &str) -> Option<&str> {
    text.split_whitespace().last()
}
