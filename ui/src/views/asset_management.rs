use dioxus::prelude::*;

use crate::components::{FeatureSection, FeatureVariant};
use crate::core::content::{fund_items, FUNDS};
use crate::core::typography::{current_classes, TextRole};
use crate::hero::{Breadcrumb, Hero, HeroLayout};
use crate::i18n::{tr, use_language};

struct LegendRow {
    id: &'static str,
    name: String,
    risk_class: &'static str,
    risk_label: String,
    sharia: bool,
}

#[component]
pub fn AssetManagement() -> Element {
    let lang = use_language();
    let body_classes = current_classes(TextRole::Body2);
    let sharia_badge = tr("fund-sharia-badge");
    let legend: Vec<LegendRow> = FUNDS
        .iter()
        .map(|fund| LegendRow {
            id: fund.id,
            name: tr(fund.title),
            risk_class: fund.risk.css_modifier(),
            risk_label: tr(fund.risk.label_key()),
            sharia: fund.sharia_compliant,
        })
        .collect();

    rsx! {
        section { class: "page page-asset-management", lang: "{lang}",
            Hero {
                title: "asset-management-hero-title",
                subtitle: "asset-management-hero-subtitle",
                cta_text: "asset-management-hero-button",
                cta_link: "#funds",
                background_src: "/images/asset-management-hero.png",
                layout: HeroLayout::RightAligned,
                overlay_opacity: 0.45,
                flip_in_rtl: true,
                breadcrumbs: vec![
                    Breadcrumb { label: "breadcrumb-home".into(), href: Some("/".into()) },
                    Breadcrumb { label: "nav-asset-management".into(), href: None },
                ],
            }

            div { id: "funds",
                FeatureSection {
                    title: "funds-title",
                    subtitle: "funds-subtitle",
                    items: fund_items(),
                    variant: FeatureVariant::Slider,
                }
            }

            ul { class: "fund-legend {body_classes}",
                for row in legend {
                    li { key: "{row.id}", class: "fund-legend__item",
                        span { class: "fund-legend__name", "{row.name}" }
                        span { class: "fund-card__risk {row.risk_class}", "{row.risk_label}" }
                        if row.sharia {
                            span { class: "fund-card__badge", "{sharia_badge}" }
                        }
                    }
                }
            }
        }
    }
}
