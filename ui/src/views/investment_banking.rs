use dioxus::prelude::*;

use crate::components::{FeatureSection, FeatureVariant};
use crate::core::content::capital_solution_items;
use crate::hero::{Breadcrumb, Hero};
use crate::i18n::use_language;

#[component]
pub fn InvestmentBanking() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "page page-investment-banking", lang: "{lang}",
            Hero {
                title: "investment-banking-hero-title",
                cta_text: "investment-banking-hero-button",
                cta_link: "#capital-solutions",
                background_src: "/images/investment-banking-hero.png",
                breadcrumbs: vec![
                    Breadcrumb { label: "breadcrumb-home".into(), href: Some("/".into()) },
                    Breadcrumb { label: "nav-investment-banking".into(), href: None },
                ],
            }

            div { id: "capital-solutions",
                FeatureSection {
                    title: "ib-services-title",
                    subtitle: "ib-services-subtitle",
                    items: capital_solution_items(),
                    variant: FeatureVariant::ThreeItems,
                }
            }
        }
    }
}
