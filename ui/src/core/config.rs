//! Site configuration embedded from `site.toml`.
//!
//! Native builds may override the CMS location with `STRAPI_URL`.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::warn;

use crate::carousel::{CarouselError, SlidesPerView};

const SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

#[cfg(not(target_arch = "wasm32"))]
const CMS_URL_ENV: &str = "STRAPI_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid slider breakpoints: {0}")]
    Carousel(#[from] CarouselError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CmsSettings {
    pub base_url: String,
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_viewport_width: u32,
    pub cms: CmsSettings,
    pub slider: SlidesPerView,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_viewport_width: 1280,
            cms: CmsSettings::default(),
            slider: SlidesPerView::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate; the slider counts must form a usable table.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(src)?;
        config.slider.table()?;
        Ok(config)
    }

    pub fn cms_client(&self) -> api::StrapiClient {
        api::StrapiClient::new(&self.cms.base_url)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
    fn with_env_overrides(mut self) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var(CMS_URL_ENV) {
            if !url.trim().is_empty() {
                self.cms.base_url = url;
            }
        }
        self
    }
}

/// Embedded configuration, falling back to defaults if it does not parse.
pub static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_toml(SITE_TOML)
        .unwrap_or_else(|err| {
            warn!("config: {err}; using defaults");
            SiteConfig::default()
        })
        .with_env_overrides()
});

pub fn site() -> &'static SiteConfig {
    &SITE
}
