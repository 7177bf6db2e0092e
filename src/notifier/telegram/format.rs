// notifier/telegram/format.rs

use crate::model::{ProductRecord, SearchResult};

/// Renders a search result as a chat message, one blank-line separated block per product.
pub fn format_search_result(result: &SearchResult) -> String {
    match result {
        SearchResult::NotFound(r) => format!(
            "🔍 {}\n\n📋 {}\n\n🏪 店铺链接: {}",
            r.message, r.command_info, r.shop_link
        ),
        SearchResult::Found(r) => {
            let mut blocks = Vec::with_capacity(r.results.len() + 2);
            blocks.push(format!("🔍 找到 {} 个包含 '{}' 的产品", r.total_count, r.keyword));
            blocks.extend(
                r.results
                    .iter()
                    .enumerate()
                    .map(|(i, product)| format_product(i + 1, product)),
            );
            blocks.push(format!("🏪 店铺链接: {}", r.shop_link));
            blocks.join("\n\n")
        }
    }
}

fn format_product(index: usize, product: &ProductRecord) -> String {
    let marker = if product.is_promoted() { " 🔥主推" } else { "" };
    format!(
        "{}. {}{}\n📶 通用流量: {}\n🎯 定向流量: {}\n📞 通话时长: {}\n👤 适用年龄: {}\n🔗 {}",
        index,
        product.name,
        marker,
        product.general_flow,
        product.targeted_flow,
        product.call_minutes,
        product.age,
        product.detail_link
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, promoted: &str) -> ProductRecord {
        ProductRecord {
            image: "![图片](None)".into(),
            name: name.into(),
            promoted: promoted.into(),
            general_flow: "100G".into(),
            targeted_flow: "30G".into(),
            call_minutes: "0分钟".into(),
            age: "年龄不限".into(),
            detail_link: format!("https://172.lot-ml.com/d/{name}"),
        }
    }

    #[test]
    fn found_lists_every_product() {
        let result = SearchResult::found(
            "移动",
            "https://shop".into(),
            "usage",
            vec![product("移动19元", "是"), product("移动29元", "否")],
        );
        let text = format_search_result(&result);
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0], "🔍 找到 2 个包含 '移动' 的产品");
        assert!(blocks[1].starts_with("1. 移动19元 🔥主推\n📶 通用流量: 100G"));
        assert!(blocks[2].starts_with("2. 移动29元\n"));
        assert!(blocks[2].ends_with("🔗 https://172.lot-ml.com/d/移动29元"));
        assert_eq!(blocks[3], "🏪 店铺链接: https://shop");
    }

    #[test]
    fn not_found_shows_usage() {
        let result = SearchResult::not_found("9元", "https://shop".into(), "流量卡9元");
        assert_eq!(
            format_search_result(&result),
            "🔍 未找到包含 '9元' 的产品\n\n📋 流量卡9元\n\n🏪 店铺链接: https://shop"
        );
    }
}
