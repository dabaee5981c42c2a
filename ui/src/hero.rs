use dioxus::prelude::*;

use crate::core::typography::{current_classes, TextRole};
use crate::i18n::{self, tr, use_language};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Horizontal placement of hero copy, in reading-direction terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroLayout {
    #[default]
    Centered,
    /// Start side: left in LTR, right in RTL.
    LeftAligned,
    RightAligned,
}

impl HeroLayout {
    pub fn text_align_class(&self, rtl: bool) -> &'static str {
        match (self, rtl) {
            (HeroLayout::Centered, _) => "hero__copy--center",
            (HeroLayout::LeftAligned, false) | (HeroLayout::RightAligned, true) => {
                "hero__copy--left"
            }
            (HeroLayout::LeftAligned, true) | (HeroLayout::RightAligned, false) => {
                "hero__copy--right"
            }
        }
    }

    pub fn content_align_class(&self, rtl: bool) -> &'static str {
        match (self, rtl) {
            (HeroLayout::Centered, _) => "hero__content--centered",
            (HeroLayout::LeftAligned, true) | (HeroLayout::RightAligned, false) => {
                "hero__content--push-end"
            }
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundKind {
    #[default]
    Image,
    Video,
}

pub fn clamp_opacity(opacity: f32) -> f32 {
    if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    /// Message id or text.
    pub label: String,
    pub href: Option<String>,
}

/// Full-bleed page header with optional CTA and breadcrumbs.
#[component]
pub fn Hero(
    title: String,
    subtitle: Option<String>,
    cta_text: Option<String>,
    cta_link: Option<String>,
    background_src: String,
    #[props(default)] background_kind: BackgroundKind,
    #[props(default)] layout: HeroLayout,
    #[props(default = 0.3)] overlay_opacity: f32,
    /// Mirror the background image horizontally in RTL.
    #[props(default)] flip_in_rtl: bool,
    #[props(default)] breadcrumbs: Vec<Breadcrumb>,
) -> Element {
    let lang = use_language();
    let rtl = i18n::is_rtl_language(&lang);

    let title_text = tr(&title);
    let title_classes = current_classes(TextRole::HeroTitle);
    let subtitle_classes = current_classes(TextRole::SubtitleHero);
    let button_classes = current_classes(TextRole::Button);
    let copy_class = layout.text_align_class(rtl);
    let content_class = layout.content_align_class(rtl);
    let overlay = clamp_opacity(overlay_opacity);
    let flip = if flip_in_rtl && rtl { "hero__background--flipped" } else { "" };
    let link = cta_link.unwrap_or_else(|| "#".to_string());

    let background = match background_kind {
        BackgroundKind::Image => rsx! {
            div {
                class: "hero__background {flip}",
                style: "background-image: url({background_src})",
                aria_hidden: "true",
            }
        },
        BackgroundKind::Video => rsx! {
            video {
                class: "hero__background hero__background--video {flip}",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
                src: "{background_src}",
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { class: "hero",
            {background}
            div { class: "hero__overlay", style: "opacity: {overlay}" }

            div { class: "hero__content {content_class}",
                if !breadcrumbs.is_empty() {
                    nav { class: "hero__breadcrumbs", aria_label: "breadcrumb",
                        for crumb in breadcrumbs.iter() {
                            if let Some(href) = crumb.href.as_deref() {
                                a { class: "hero__breadcrumb", href: "{href}", {tr(&crumb.label)} }
                            } else {
                                span { class: "hero__breadcrumb hero__breadcrumb--current", {tr(&crumb.label)} }
                            }
                        }
                    }
                }
                div { class: "hero__copy {copy_class}",
                    h1 { class: "hero__title {title_classes}", "{title_text}" }
                    if let Some(subtitle) = subtitle.as_deref() {
                        p { class: "hero__subtitle {subtitle_classes}", {tr(subtitle)} }
                    }
                    if let Some(cta) = cta_text.as_deref() {
                        a { class: "button button--primary {button_classes}", href: "{link}", {tr(cta)} }
                    }
                }
            }
        }
    }
}
