use crate::config::{CARRIERS, PROVINCES, SiteConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Province,
    Carrier,
    Generic,
}

/// What a raw keyword resolves to: the term to match names with and the page to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: KeywordKind,
    pub term: String,
    pub path: String,
    pub has_digits: bool,
}

pub fn classify(keyword: &str, shop_id: &str) -> Classification {
    let carrier = carrier_token(keyword);
    let province = is_province(keyword);

    let kind = if province {
        KeywordKind::Province
    } else if carrier.is_some() {
        KeywordKind::Carrier
    } else {
        KeywordKind::Generic
    };

    let path = if province {
        SiteConfig::province_path(shop_id)
    } else {
        SiteConfig::product_path(shop_id)
    };

    Classification {
        kind,
        term: carrier.unwrap_or(keyword).to_string(),
        path,
        has_digits: keyword.chars().any(char::is_numeric),
    }
}

/// First carrier token contained in the keyword, e.g. "移动卡" → "移动".
pub fn carrier_token(keyword: &str) -> Option<&'static str> {
    CARRIERS.into_iter().find(|op| keyword.contains(op))
}

pub fn is_province(keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    PROVINCES.iter().any(|p| p.to_lowercase() == keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOP: &str = "3abcd2e80b9b4694";

    #[test]
    fn province_keywords_use_province_index() {
        for keyword in ["北京", "北京市", "广东", "内蒙古自治区", "香港特别行政区", "台湾"] {
            let c = classify(keyword, SHOP);
            assert_eq!(c.kind, KeywordKind::Province, "{keyword}");
            assert_eq!(c.path, "/producten/tyindex/3abcd2e80b9b4694");
            assert_eq!(c.term, keyword);
        }
    }

    #[test]
    fn every_listed_province_classifies_as_province() {
        assert!(PROVINCES.iter().all(|p| is_province(p)));
    }

    #[test]
    fn province_match_is_exact() {
        for keyword in ["广东移动", "北京 ", "北", "流量卡广东"] {
            let c = classify(keyword, SHOP);
            assert_ne!(c.kind, KeywordKind::Province, "{keyword}");
            assert_eq!(c.path, "/ProductEn/Index/3abcd2e80b9b4694");
        }
    }

    #[test]
    fn carrier_token_becomes_matching_term() {
        let c = classify("移动卡", SHOP);
        assert_eq!(c.kind, KeywordKind::Carrier);
        assert_eq!(c.term, "移动");
        assert_eq!(c.path, "/ProductEn/Index/3abcd2e80b9b4694");
    }

    #[test]
    fn carrier_priority_is_fixed() {
        assert_eq!(carrier_token("联通移动"), Some("移动"));
        assert_eq!(carrier_token("广电联通"), Some("联通"));
        assert_eq!(carrier_token("广电19元"), Some("广电"));
        assert_eq!(carrier_token("电信"), None);
    }

    #[test]
    fn generic_keyword_is_kept_verbatim() {
        let c = classify("19元", SHOP);
        assert_eq!(c.kind, KeywordKind::Generic);
        assert_eq!(c.term, "19元");
        assert!(c.has_digits);
        assert!(!classify("大流量", SHOP).has_digits);
    }

    #[test]
    fn shop_id_is_templated_into_path() {
        assert_eq!(classify("北京", "XYZ").path, "/producten/tyindex/XYZ");
        assert_eq!(classify("9元", "XYZ").path, "/ProductEn/Index/XYZ");
    }
}
