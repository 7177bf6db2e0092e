// Core structs: ProductRecord, SearchResult and the error types
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_IMAGE: &str = "None";
pub const DEFAULT_FLOW: &str = "0G";
pub const DEFAULT_CALL: &str = "0分钟";
pub const DEFAULT_AGE: &str = "年龄不限";

/// One extracted listing entry, serialized with the keys existing consumers read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "md图片")]
    pub image: String,
    #[serde(rename = "产品名称")]
    pub name: String,
    #[serde(rename = "主推")]
    pub promoted: String,
    #[serde(rename = "通用流量")]
    pub general_flow: String,
    #[serde(rename = "定向流量")]
    pub targeted_flow: String,
    #[serde(rename = "通话时长")]
    pub call_minutes: String,
    #[serde(rename = "适用年龄")]
    pub age: String,
    #[serde(rename = "详情链接")]
    pub detail_link: String,
}

impl ProductRecord {
    pub fn is_promoted(&self) -> bool {
        self.promoted == "是"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFound {
    success: bool,
    pub message: String,
    pub shop_link: String,
    pub command_info: String,
    pub results: Vec<ProductRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Found {
    success: bool,
    pub total_count: usize,
    pub keyword: String,
    pub shop_link: String,
    pub command_info: String,
    pub results: Vec<ProductRecord>,
}

/// Top-level answer of a search. Serializes to one of the two legacy JSON shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    NotFound(NotFound),
    Found(Found),
}

impl SearchResult {
    pub fn not_found(keyword: &str, shop_link: String, command_info: &str) -> Self {
        SearchResult::NotFound(NotFound {
            success: false,
            message: format!("未找到包含 '{}' 的产品", keyword),
            shop_link,
            command_info: command_info.to_string(),
            results: Vec::new(),
        })
    }

    pub fn found(
        keyword: &str,
        shop_link: String,
        command_info: &str,
        results: Vec<ProductRecord>,
    ) -> Self {
        SearchResult::Found(Found {
            success: true,
            total_count: results.len(),
            keyword: keyword.to_string(),
            shop_link,
            command_info: command_info.to_string(),
            results,
        })
    }

    pub fn success(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn results(&self) -> &[ProductRecord] {
        match self {
            SearchResult::NotFound(r) => &r.results,
            SearchResult::Found(r) => &r.results,
        }
    }

    pub fn shop_link(&self) -> &str {
        match self {
            SearchResult::NotFound(r) => &r.shop_link,
            SearchResult::Found(r) => &r.shop_link,
        }
    }

    pub fn command_info(&self) -> &str {
        match self {
            SearchResult::NotFound(r) => &r.command_info,
            SearchResult::Found(r) => &r.command_info,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Telegram API responded [{status}]: {body}")]
    Rejected { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> ProductRecord {
        ProductRecord {
            image: "![图片](None)".into(),
            name: "移动19元套餐".into(),
            promoted: "否".into(),
            general_flow: "30G".into(),
            targeted_flow: "0G".into(),
            call_minutes: "0分钟".into(),
            age: "年龄不限".into(),
            detail_link: "https://172.lot-ml.com/p/1".into(),
        }
    }

    #[test]
    fn not_found_serializes_to_legacy_shape() {
        let result = SearchResult::not_found("9元", "https://shop".into(), "usage");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": false,
                "message": "未找到包含 '9元' 的产品",
                "shop_link": "https://shop",
                "command_info": "usage",
                "results": []
            })
        );
    }

    #[test]
    fn found_counts_results_and_uses_legacy_keys() {
        let result = SearchResult::found("移动", "https://shop".into(), "usage", vec![record()]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["total_count"], json!(1));
        assert_eq!(value["keyword"], json!("移动"));
        assert_eq!(value["results"][0]["产品名称"], json!("移动19元套餐"));
        assert_eq!(value["results"][0]["通用流量"], json!("30G"));
        assert_eq!(value["results"][0]["详情链接"], json!("https://172.lot-ml.com/p/1"));
    }

    #[test]
    fn serialized_success_follows_variant() {
        let missing = SearchResult::not_found("9元", "s".into(), "c");
        let hit = SearchResult::found("移动", "s".into(), "c", vec![record()]);
        for result in [missing, hit] {
            let value = serde_json::to_value(&result).unwrap();
            assert_eq!(value["success"], json!(result.success()));
        }
    }

    #[test]
    fn found_keeps_field_order() {
        let result = SearchResult::found("移动", "s".into(), "c", Vec::new());
        let text = serde_json::to_string(&result).unwrap();
        let order = ["success", "total_count", "keyword", "shop_link", "command_info", "results"];
        let positions: Vec<usize> = order.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
