use dioxus::prelude::*;

use crate::hero::{Breadcrumb, Hero, HeroLayout};
use crate::i18n::use_language;

#[component]
pub fn InternationalMarkets() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "page page-international-markets", lang: "{lang}",
            Hero {
                title: "international-markets-hero-title",
                subtitle: "international-markets-hero-subtitle",
                cta_text: "international-markets-hero-button",
                background_src: "/images/international-markets-hero.jpg",
                layout: HeroLayout::LeftAligned,
                flip_in_rtl: true,
                breadcrumbs: vec![
                    Breadcrumb { label: "breadcrumb-home".into(), href: Some("/".into()) },
                    Breadcrumb { label: "nav-international-markets".into(), href: None },
                ],
            }
        }
    }
}
