use dioxus::prelude::*;

use crate::hero::{Breadcrumb, Hero, HeroLayout};
use crate::i18n::use_language;

#[component]
pub fn MarginLending() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "page page-margin-lending", lang: "{lang}",
            Hero {
                title: "margin-lending-hero-title",
                subtitle: "margin-lending-hero-subtitle",
                cta_text: "margin-lending-hero-button",
                background_src: "/images/margin-lending-hero.jpg",
                layout: HeroLayout::LeftAligned,
                flip_in_rtl: true,
                breadcrumbs: vec![
                    Breadcrumb { label: "breadcrumb-home".into(), href: Some("/".into()) },
                    Breadcrumb { label: "nav-margin-lending".into(), href: None },
                ],
            }
        }
    }
}
