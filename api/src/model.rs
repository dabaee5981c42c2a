//! Response envelopes (Strapi v4 shape) and the content types the site reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: u64,
    pub attributes: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub data: Vec<Entry<T>>,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Single<T> {
    pub data: Option<Entry<T>>,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl Pagination {
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// A single media relation: `{ "data": { "id": .., "attributes": { "url": .. } } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub data: Option<Entry<MediaData>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaData {
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub mime: Option<String>,
}

impl Media {
    pub fn url(&self) -> Option<&str> {
        self.data.as_ref().map(|entry| entry.attributes.url.as_str())
    }

    pub fn alt(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|entry| entry.attributes.alternative_text.as_deref())
    }
}

/// One card of a feature grid or slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAttributes {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Media,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEATURES: &str = r#"{
        "data": [
            {
                "id": 7,
                "attributes": {
                    "title": "Secure and Trusted",
                    "description": "Regulated operations.",
                    "slug": "secure",
                    "locale": "en",
                    "icon": { "data": { "id": 3, "attributes": {
                        "url": "/uploads/why_arrow.webm",
                        "alternativeText": "Arrow",
                        "mime": "video/webm"
                    } } }
                }
            },
            {
                "id": 8,
                "attributes": {
                    "title": "Global Reach",
                    "description": "Markets worldwide.",
                    "icon": { "data": null }
                }
            }
        ],
        "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 2, "total": 30 } }
    }"#;

    #[test]
    fn decodes_collection_with_media() {
        let collection: Collection<FeatureAttributes> = serde_json::from_str(FEATURES).unwrap();
        assert_eq!(collection.data.len(), 2);
        let first = &collection.data[0].attributes;
        assert_eq!(first.icon.url(), Some("/uploads/why_arrow.webm"));
        assert_eq!(first.icon.alt(), Some("Arrow"));
        assert_eq!(collection.data[1].attributes.icon.url(), None);
        let pagination = collection.meta.pagination.unwrap();
        assert_eq!(pagination.total, 30);
        assert!(pagination.has_next());
    }

    #[test]
    fn meta_is_optional() {
        let collection: Collection<FeatureAttributes> =
            serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert!(collection.data.is_empty());
        assert_eq!(collection.meta, Meta::default());
    }
}
