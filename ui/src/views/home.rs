use dioxus::prelude::*;

use crate::components::{FeatureSection, FeatureVariant};
use crate::core::content::{fund_items, service_items, why_items_for};
use crate::hero::{BackgroundKind, Hero, HeroLayout};
use crate::i18n::use_language;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    tracing::trace!(lang, "Home render");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code so sections re-render on change.
    let lang = use_language();

    #[cfg(debug_assertions)]
    {
        log_home_render(&lang);
    }

    rsx! {
        section { class: "page page-home", lang: "{lang}",
            Hero {
                title: "home-hero-title",
                subtitle: "home-hero-subtitle",
                cta_text: "home-hero-button",
                cta_link: "#funds",
                background_src: "/images/home-hero.webm",
                background_kind: BackgroundKind::Video,
                layout: HeroLayout::LeftAligned,
            }

            FeatureSection {
                title: "why-title",
                title_highlight: "why-title-highlight",
                subtitle: "why-subtitle",
                items: why_items_for(&lang),
                variant: FeatureVariant::ThreeItems,
            }

            FeatureSection {
                title: "services-title",
                subtitle: "services-subtitle",
                items: service_items(),
                variant: FeatureVariant::FourItems,
                class: "page-home__services",
            }

            div { id: "funds",
                FeatureSection {
                    title: "funds-title",
                    subtitle: "funds-subtitle",
                    items: fund_items(),
                    variant: FeatureVariant::Slider,
                }
            }
        }
    }
}
