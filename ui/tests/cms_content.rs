//! The Home "why us" section is fed from the CMS export through the site's
//! configured client; these checks go through the same public calls the
//! page makes.

use ui::carousel::adapter;
use ui::carousel::{CarouselConfig, NavigationController};
use ui::core::config::site;
use ui::core::content::why_items_for;

#[test]
fn why_us_media_is_served_from_the_configured_cms() {
    let client = site().cms_client();
    for lang in ["en-US", "ar"] {
        let items = why_items_for(lang);
        assert_eq!(items.len(), 3, "{lang}");
        for item in &items {
            let expected = client
                .media_url(&format!("/uploads/{}", item.icon.rsplit('/').next().unwrap()))
                .unwrap();
            assert_eq!(item.icon, expected.as_str());
            assert!(item.alt.is_some());
        }
    }
}

#[test]
fn locales_share_slugs_but_not_text() {
    let english = why_items_for("en");
    let arabic = why_items_for("ar-EG");
    let slugs = |items: &[ui::components::FeatureItem]| {
        items.iter().map(|item| item.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(slugs(&english), slugs(&arabic));
    assert_ne!(english[0].title, arabic[0].title);
}

#[test]
fn why_us_fits_one_desktop_page() {
    let items = why_items_for("en-US");
    let nav = NavigationController::new(
        CarouselConfig::new(items.len(), site().slider.breakpoints()).viewport_width(1280),
    )
    .unwrap();
    assert_eq!(nav.page_count(), 1);
    assert!(!adapter::controls_visible(&nav));
}
