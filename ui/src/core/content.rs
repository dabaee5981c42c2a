//! Static section content and conversion of CMS entries.
//!
//! Titles and descriptions are message ids; CMS-sourced items carry
//! literal text instead, and [`crate::i18n::tr`] passes that through.
//!
//! The "why us" section is published from the CMS. Its collection is
//! exported per locale into `content/` at build time and decoded here;
//! the static catalog below is the fallback when an export is unusable.

use api::{Collection, FeatureAttributes, StrapiClient};
use tracing::warn;

use super::config::site;
use crate::components::feature_section::FeatureItem;
use crate::i18n::primary_subtag;

const WHY_US_EN: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/content/why-us.en.json"
));
const WHY_US_AR: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/content/why-us.ar.json"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label_key(&self) -> &'static str {
        match self {
            RiskLevel::Low => "fund-risk-low",
            RiskLevel::Medium => "fund-risk-medium",
            RiskLevel::High => "fund-risk-high",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            RiskLevel::Low => "fund-card__risk--low",
            RiskLevel::Medium => "fund-card__risk--medium",
            RiskLevel::High => "fund-card__risk--high",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fund {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub risk: RiskLevel,
    pub sharia_compliant: bool,
    pub icon: &'static str,
}

impl Fund {
    pub fn feature_item(&self) -> FeatureItem {
        FeatureItem::new(self.id, self.icon, self.title, self.description)
    }
}

const fn fund(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    risk: RiskLevel,
    icon: &'static str,
) -> Fund {
    Fund {
        id,
        title,
        description,
        risk,
        sharia_compliant: true,
        icon,
    }
}

pub const FUNDS: &[Fund] = &[
    fund(
        "diversified-fund",
        "fund-diversified-title",
        "fund-diversified-description",
        RiskLevel::Low,
        "/images/rombo.webm",
    ),
    fund(
        "mena-equity-fund",
        "fund-mena-equity-title",
        "fund-mena-equity-description",
        RiskLevel::Medium,
        "/images/square.webm",
    ),
    fund(
        "freestyle-equity-fund",
        "fund-freestyle-equity-title",
        "fund-freestyle-equity-description",
        RiskLevel::High,
        "/images/triangle.webm",
    ),
    fund(
        "global-sukuk-fund",
        "fund-global-sukuk-title",
        "fund-global-sukuk-description",
        RiskLevel::Low,
        "/images/rombo.webm",
    ),
    fund(
        "money-market-fund",
        "fund-money-market-title",
        "fund-money-market-description",
        RiskLevel::Low,
        "/images/square.webm",
    ),
    fund(
        "real-estate-fund",
        "fund-real-estate-title",
        "fund-real-estate-description",
        RiskLevel::Medium,
        "/images/triangle.webm",
    ),
    fund(
        "balanced-fund",
        "fund-balanced-title",
        "fund-balanced-description",
        RiskLevel::Medium,
        "/images/rombo.webm",
    ),
    fund(
        "growth-fund",
        "fund-growth-title",
        "fund-growth-description",
        RiskLevel::High,
        "/images/square.webm",
    ),
];

pub fn fund_items() -> Vec<FeatureItem> {
    FUNDS.iter().map(Fund::feature_item).collect()
}

pub fn why_items() -> Vec<FeatureItem> {
    vec![
        FeatureItem::new(
            "secure",
            "/images/why-arrow.webm",
            "why-secure-title",
            "why-secure-description",
        )
        .with_alt("Secure and Trusted"),
        FeatureItem::new(
            "sharia",
            "/images/why-invest.webm",
            "why-sharia-title",
            "why-sharia-description",
        )
        .with_alt("Shariah-Compliant Options"),
        FeatureItem::new(
            "global",
            "/images/why-circle.webm",
            "why-global-title",
            "why-global-description",
        )
        .with_alt("Global Reach, Local Roots"),
    ]
}

pub fn service_items() -> Vec<FeatureItem> {
    vec![
        FeatureItem::new(
            "brokerage",
            "/images/service-brokerage.png",
            "services-brokerage-title",
            "services-brokerage-description",
        ),
        FeatureItem::new(
            "asset",
            "/images/service-asset.png",
            "services-asset-title",
            "services-asset-description",
        ),
        FeatureItem::new(
            "banking",
            "/images/service-banking.png",
            "services-banking-title",
            "services-banking-description",
        ),
        FeatureItem::new(
            "markets",
            "/images/service-markets.png",
            "services-markets-title",
            "services-markets-description",
        ),
    ]
}

pub fn capital_solution_items() -> Vec<FeatureItem> {
    vec![
        FeatureItem::new(
            "advisory",
            "/images/ib-advisory.webm",
            "ib-advisory-title",
            "ib-advisory-description",
        ),
        FeatureItem::new(
            "equity",
            "/images/ib-equity.webm",
            "ib-equity-title",
            "ib-equity-description",
        ),
        FeatureItem::new(
            "debt",
            "/images/ib-debt.webm",
            "ib-debt-title",
            "ib-debt-description",
        ),
    ]
}

/// Exported "why us" collection for `lang`; English unless Arabic.
fn why_us_export(lang: &str) -> &'static str {
    match primary_subtag(lang) {
        "ar" => WHY_US_AR,
        _ => WHY_US_EN,
    }
}

/// "Why us" cards for `lang` as published in the CMS, with media resolved
/// against the configured CMS origin.
///
/// Falls back to [`why_items`] when the export does not decode or is empty.
pub fn why_items_for(lang: &str) -> Vec<FeatureItem> {
    let client = site().cms_client();
    match features_from_cms(200, why_us_export(lang), &client) {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => {
            warn!(lang, "content: empty why-us export; using built-in cards");
            why_items()
        }
        Err(err) => {
            warn!(lang, "content: unusable why-us export ({err}); using built-in cards");
            why_items()
        }
    }
}

/// Convert a decoded Strapi collection into section items.
///
/// Media paths are made absolute against the CMS origin; entries without a
/// usable icon keep an empty `icon`, which renders nothing.
pub fn features_from_collection(
    collection: Collection<FeatureAttributes>,
    client: &StrapiClient,
) -> Vec<FeatureItem> {
    collection
        .data
        .into_iter()
        .map(|entry| {
            let attrs = entry.attributes;
            let icon = attrs
                .icon
                .url()
                .and_then(|path| client.media_url(path).ok())
                .map(|url| url.to_string())
                .unwrap_or_default();
            let alt = attrs.alt.clone().or_else(|| attrs.icon.alt().map(str::to_string));
            let id = attrs.slug.clone().unwrap_or_else(|| entry.id.to_string());
            FeatureItem {
                id,
                icon,
                title: attrs.title,
                description: attrs.description,
                alt,
            }
        })
        .collect()
}

/// Decode a raw CMS response body into section items.
pub fn features_from_cms(
    status: u16,
    body: &str,
    client: &StrapiClient,
) -> Result<Vec<FeatureItem>, api::ApiError> {
    let collection = api::decode_collection::<FeatureAttributes>(status, body)?;
    if let Some(pagination) = collection.meta.pagination {
        if pagination.has_next() {
            warn!(
                page = pagination.page,
                pages = pagination.page_count,
                "content: CMS collection has further pages; only the first is shown"
            );
        }
    }
    Ok(features_from_collection(collection, client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_funds_paginate_into_three_desktop_pages() {
        let items = fund_items();
        assert_eq!(items.len(), 8);
        assert_eq!(items.len().div_ceil(3), 3);
        assert!(FUNDS.iter().all(|f| f.sharia_compliant));
    }

    #[test]
    fn section_sizes_match_their_variants() {
        assert_eq!(why_items().len(), 3);
        assert_eq!(service_items().len(), 4);
        assert_eq!(capital_solution_items().len(), 3);
    }

    #[test]
    fn cms_entries_become_items() {
        let body = r#"{
            "data": [
                { "id": 1, "attributes": {
                    "title": "Secure", "description": "Safe.", "slug": "secure",
                    "icon": { "data": { "id": 9, "attributes": { "url": "/uploads/a.webm", "alternativeText": "A" } } }
                } },
                { "id": 2, "attributes": { "title": "Global", "description": "Far." } }
            ]
        }"#;
        let client = StrapiClient::new("https://cms.example.com");
        let items = features_from_cms(200, body, &client).unwrap();
        assert_eq!(items[0].id, "secure");
        assert_eq!(items[0].icon, "https://cms.example.com/uploads/a.webm");
        assert_eq!(items[0].alt.as_deref(), Some("A"));
        assert_eq!(items[1].id, "2");
        assert!(items[1].icon.is_empty());
    }

    #[test]
    fn why_us_comes_from_the_localized_export() {
        let base = site().cms.base_url.trim_end_matches('/').to_string();

        let english = why_items_for("en-US");
        assert_eq!(english.len(), 3);
        assert_eq!(english[0].title, "Secure and Trusted");
        assert_eq!(english[0].icon, format!("{base}/uploads/why-arrow.webm"));

        let arabic = why_items_for("ar-SA");
        assert_eq!(arabic.len(), 3);
        assert_eq!(arabic[0].id, "secure");
        assert_eq!(arabic[0].title, "آمن وموثوق");
        assert!(arabic.iter().all(|item| item.icon.starts_with(&base)));
    }

    #[test]
    fn exports_are_single_page_collections() {
        for export in [WHY_US_EN, WHY_US_AR] {
            let collection = api::decode_collection::<FeatureAttributes>(200, export).unwrap();
            let pagination = collection.meta.pagination.unwrap();
            assert!(!pagination.has_next());
            assert_eq!(pagination.total as usize, collection.data.len());
        }
    }

    #[test]
    fn cms_errors_propagate() {
        let client = StrapiClient::new("https://cms.example.com");
        assert!(features_from_cms(500, "{}", &client).is_err());
    }
}
