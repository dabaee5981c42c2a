//! Shared UI crate for Vitrine. Cross-platform views, the carousel engine
//! and localization live here; the `web` and `desktop` crates only route.

pub mod carousel;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Titled card grid / paginated slider (components/feature_section.rs)
    pub mod feature_section;
    pub use feature_section::{FeatureCard, FeatureItem, FeatureSection, FeatureVariant};
}

pub mod hero;
pub use hero::Hero;
