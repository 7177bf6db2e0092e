use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://172.lot-ml.com";
pub const DEFAULT_SHOP_ID: &str = "3abcd2e80b9b4694";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Province, municipality, autonomous region and SAR names, full and short forms.
pub const PROVINCES: &[&str] = &[
    "北京市", "北京", "天津市", "天津", "河北省", "河北", "山西省", "山西",
    "内蒙古自治区", "内蒙古", "辽宁省", "辽宁", "吉林省", "吉林", "黑龙江省", "黑龙江",
    "上海市", "上海", "江苏省", "江苏", "浙江省", "浙江", "安徽省", "安徽",
    "福建省", "福建", "江西省", "江西", "山东省", "山东", "河南省", "河南",
    "湖北省", "湖北", "湖南省", "湖南", "广东省", "广东", "广西壮族自治区", "广西",
    "海南省", "海南", "重庆市", "重庆", "四川省", "四川", "贵州省", "贵州",
    "云南省", "云南", "西藏自治区", "西藏", "陕西省", "陕西", "甘肃省", "甘肃",
    "青海省", "青海", "宁夏回族自治区", "宁夏", "新疆维吾尔自治区", "新疆",
    "香港特别行政区", "香港", "澳门特别行政区", "澳门", "台湾省", "台湾",
];

/// Carrier tokens in match priority order.
pub const CARRIERS: [&str; 3] = ["移动", "联通", "广电"];

/// Usage examples attached to every search result.
pub const COMMAND_INFO_NOT_FOUND: &str = "流量卡< $元 > 例如：流量卡9元\n流量卡< 省 > 例如：流量卡广东";
pub const COMMAND_INFO_FOUND: &str = "流量卡<$元> 例如：流量卡9元\n流量卡<省> 例如：流量卡广东";

/// Site the listings are fetched from.
pub static DEFAULT_SITE: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::default);

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Falls back to the HTTP client's own default when unset.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl SiteConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn province_path(shop_id: &str) -> String {
        format!("/producten/tyindex/{}", shop_id)
    }

    pub fn product_path(shop_id: &str) -> String {
        format!("/ProductEn/Index/{}", shop_id)
    }

    /// Link shown to users for browsing the whole shop.
    pub fn shop_link(&self, shop_id: &str) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            Self::product_path(shop_id)
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            request_timeout_seconds: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    #[serde(default)]
    pub telegram_chat_id: Option<i64>,
    #[serde(default = "default_shop_id")]
    pub shop_id: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    #[serde(default)]
    pub site: SiteConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_shop_id() -> String {
    DEFAULT_SHOP_ID.to_string()
}

fn default_poll_interval() -> u64 {
    1
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let config = parse_config(r#"{ "telegram_bot_token": "t" }"#).unwrap();
        assert_eq!(config.telegram_bot_token, "t");
        assert_eq!(config.telegram_chat_id, None);
        assert_eq!(config.shop_id, DEFAULT_SHOP_ID);
        assert_eq!(config.poll_interval_seconds, 1);
        assert_eq!(config.site.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.site.user_agent, DEFAULT_USER_AGENT);
        assert!(config.site.request_timeout().is_none());
    }

    #[test]
    fn site_section_overrides_defaults() {
        let config = parse_config(
            r#"{
                "telegram_bot_token": "t",
                "telegram_chat_id": -100,
                "site": { "base_url": "http://localhost:8080", "request_timeout_seconds": 5 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.telegram_chat_id, Some(-100));
        assert_eq!(config.site.base_url, "http://localhost:8080");
        assert_eq!(config.site.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.site.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn missing_token_is_a_parse_error() {
        assert!(matches!(parse_config("{}"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn shop_link_uses_product_index() {
        let site = SiteConfig::default();
        assert_eq!(
            site.shop_link("abc"),
            "https://172.lot-ml.com/ProductEn/Index/abc"
        );
    }
}
