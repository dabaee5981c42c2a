//! Feature section: a titled block of feature cards laid out as a three or
//! four column grid, or as a paginated slider.
//!
//! The slider is a thin render adapter over [`crate::carousel`]: it feeds
//! viewport width and direction into a [`NavigationController`], draws the
//! current page window, dots and arrows from [`adapter`] descriptors, and
//! turns clicks, arrow keys and swipes back into [`NavCommand`]s.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::carousel::adapter::{self, NavCommand, SwipeDirection};
use crate::carousel::{CarouselConfig, NavigationController, SlidesPerView};
use crate::core::platform::use_viewport_width;
use crate::core::typography::{current_classes, TextRole};
use crate::i18n::{self, tr, use_language};
use crate::t;

const FEATURE_CSS: Asset = asset!("/assets/styling/feature_section.css");

const DEFAULT_HIGHLIGHT_COLOR: &str = "#F3B660";
const DEFAULT_BACKGROUND: &str = "/images/darkbackground.png";

/// Horizontal travel (CSS px) before a pointer drag counts as a swipe.
const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureItem {
    pub id: String,
    /// Image or `.webm` video URL; empty renders no media.
    pub icon: String,
    /// Message id or literal CMS text.
    pub title: String,
    pub description: String,
    pub alt: Option<String>,
}

impl FeatureItem {
    pub fn new(id: &str, icon: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: &str) -> Self {
        self.alt = Some(alt.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureVariant {
    #[default]
    ThreeItems,
    FourItems,
    Slider,
}

/// Items a variant actually shows: grids are capped, sliders show all.
pub fn visible_items(variant: FeatureVariant, items: &[FeatureItem]) -> &[FeatureItem] {
    let cap = match variant {
        FeatureVariant::ThreeItems => 3,
        FeatureVariant::FourItems => 4,
        FeatureVariant::Slider => items.len(),
    };
    &items[..cap.min(items.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn of(src: &str) -> Self {
        let path = src.split(['?', '#']).next().unwrap_or(src);
        if path.to_ascii_lowercase().ends_with(".webm") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// Split `title` around the first occurrence of `highlight`.
pub fn split_highlight<'a>(
    title: &'a str,
    highlight: &str,
) -> Option<(&'a str, &'a str, &'a str)> {
    if highlight.is_empty() {
        return None;
    }
    let start = title.find(highlight)?;
    let end = start + highlight.len();
    Some((&title[..start], &title[start..end], &title[end..]))
}

#[component]
pub fn FeatureSection(
    title: String,
    subtitle: Option<String>,
    items: Vec<FeatureItem>,
    #[props(default)] variant: FeatureVariant,
    /// Message id (or text) whose translation is highlighted inside the title.
    title_highlight: Option<String>,
    highlight_color: Option<String>,
    background_image: Option<String>,
    slides_per_view: Option<SlidesPerView>,
    #[props(default)] class: String,
) -> Element {
    let _lang = use_language();

    let title_text = tr(&title);
    let highlight_text = title_highlight.as_deref().map(tr).unwrap_or_default();
    let color = highlight_color.unwrap_or_else(|| DEFAULT_HIGHLIGHT_COLOR.to_string());
    let background = background_image.unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());
    let title_classes = current_classes(TextRole::Title);
    let body_classes = current_classes(TextRole::Body);
    let slides = slides_per_view.unwrap_or(crate::core::config::site().slider);
    let shown = visible_items(variant, &items).to_vec();

    let body = match variant {
        FeatureVariant::ThreeItems | FeatureVariant::FourItems => {
            let grid = if variant == FeatureVariant::FourItems {
                "feature-grid feature-grid--four"
            } else {
                "feature-grid feature-grid--three"
            };
            rsx! {
                div { class: grid,
                    for item in shown {
                        FeatureCard { key: "{item.id}", item: item.clone() }
                    }
                }
            }
        }
        // Keyed by length so a new item set gets a fresh controller.
        FeatureVariant::Slider => {
            let count = shown.len();
            rsx! {
                FeatureSlider { key: "{count}", items: shown, slides_per_view: slides }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: FEATURE_CSS }

        section { class: "feature-section {class}",
            div {
                class: "feature-section__background",
                style: "background-image: url({background})",
                aria_hidden: "true",
            }
            div { class: "feature-section__inner",
                header { class: "feature-section__header",
                    h2 { class: "feature-section__title {title_classes}",
                        if let Some((before, marked, after)) = split_highlight(&title_text, &highlight_text) {
                            "{before}"
                            span { style: "color: {color}", "{marked}" }
                            "{after}"
                        } else {
                            "{title_text}"
                        }
                    }
                    if let Some(subtitle) = subtitle.as_deref() {
                        p { class: "feature-section__subtitle {body_classes}", {tr(subtitle)} }
                    }
                }

                {body}
            }
        }
    }
}

#[component]
pub fn FeatureCard(item: FeatureItem, #[props(default)] active: bool) -> Element {
    let title = tr(&item.title);
    let description = tr(&item.description);
    let alt = item.alt.clone().unwrap_or_else(|| title.clone());
    let modifier = if active { "feature-card--active" } else { "" };
    let title_classes = current_classes(TextRole::Title);
    let body_classes = current_classes(TextRole::Body);

    rsx! {
        div { class: "feature-card {modifier}",
            div { class: "feature-card__media",
                MediaIcon { src: item.icon.clone(), alt }
            }
            h3 { class: "feature-card__title {title_classes}", "{title}" }
            p { class: "feature-card__description {body_classes}", "{description}" }
        }
    }
}

/// Autoplaying muted loop for `.webm`, plain image otherwise.
#[component]
pub fn MediaIcon(src: String, alt: String) -> Element {
    if src.is_empty() {
        return rsx! {};
    }
    match MediaKind::of(&src) {
        MediaKind::Video => rsx! {
            video {
                class: "media-icon",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
                controls: false,
                aria_label: "{alt}",
                source { src: "{src}", r#type: "video/webm" }
                {t!("media-unsupported")}
            }
        },
        MediaKind::Image => rsx! {
            img { class: "media-icon", src: "{src}", alt: "{alt}" }
        },
    }
}

fn build_controller(
    total: usize,
    slides: SlidesPerView,
    width: u32,
    rtl: bool,
    announced: Signal<Option<usize>>,
) -> Option<NavigationController> {
    let config = CarouselConfig::new(total, slides.breakpoints())
        .rtl(rtl)
        .viewport_width(width);
    match NavigationController::new(config) {
        Ok(mut controller) => {
            controller.set_listener(Rc::new(move |slide| { let mut announced = announced; announced.set(Some(slide)) }));
            Some(controller)
        }
        Err(err) => {
            warn!("feature slider: {err}; rendering without navigation");
            None
        }
    }
}

struct DotView {
    page: usize,
    class: &'static str,
    current: &'static str,
    label: String,
}

struct ArrowView {
    command: NavCommand,
    class: String,
    disabled: bool,
    label: String,
    chevron: &'static str,
}

#[component]
fn FeatureSlider(items: Vec<FeatureItem>, slides_per_view: SlidesPerView) -> Element {
    let lang = use_language();
    let direction = i18n::TextDirection::of(&lang);
    let rtl = direction.is_rtl();
    let width = use_viewport_width();
    let announced = use_signal(|| Option::<usize>::None);
    let total = items.len();
    let mut controller =
        use_signal(|| build_controller(total, slides_per_view, *width.peek(), rtl, announced));
    let mut drag_start = use_signal(|| Option::<f64>::None);

    use_effect(move || {
        let current = width();
        controller.with_mut(|slot| {
            if let Some(nav) = slot.as_mut() {
                nav.set_viewport_width(current);
            }
        });
    });

    use_effect(use_reactive((&rtl,), move |(rtl,)| {
        controller.with_mut(|slot| {
            if let Some(nav) = slot.as_mut() {
                if nav.is_rtl() != rtl {
                    debug!(rtl, "feature slider: direction changed");
                    *nav = nav.with_direction(rtl);
                }
            }
        });
    }));

    let mut run = move |command: NavCommand| {
        controller.with_mut(|slot| {
            if let Some(nav) = slot.as_mut() {
                adapter::apply(nav, command);
            }
        });
    };

    let state = controller.read();
    let Some(nav) = state.as_ref() else {
        return rsx! {
            div { class: "feature-grid feature-grid--three",
                for item in items {
                    FeatureCard { key: "{item.id}", item: item.clone() }
                }
            }
        };
    };

    let current_slide = nav.current_slide();
    let per_view = nav.items_per_view();
    let show_controls = adapter::controls_visible(nav);
    let status = announced().map(|_| {
        t!(
            "carousel-status",
            page = (nav.current_page() + 1),
            pages = nav.page_count()
        )
    });
    let slides: Vec<(usize, FeatureItem)> = nav
        .page_map()
        .page_range(nav.current_page())
        .filter_map(|index| items.get(index).cloned().map(|item| (index, item)))
        .collect();
    let dots: Vec<DotView> = adapter::dots(nav)
        .into_iter()
        .map(|dot| DotView {
            page: dot.page,
            class: if dot.active {
                "carousel__dot carousel__dot--active"
            } else {
                "carousel__dot"
            },
            current: if dot.active { "true" } else { "false" },
            label: t!("carousel-go-to-page", page = (dot.page + 1)),
        })
        .collect();
    let arrows: Vec<ArrowView> = adapter::arrows(nav)
        .into_iter()
        .map(|arrow| {
            let emphasis = if arrow.is_primary() {
                " carousel__arrow--primary"
            } else {
                ""
            };
            ArrowView {
                command: arrow.command,
                class: format!("carousel__arrow {}{emphasis}", arrow.side.css_modifier()),
                disabled: arrow.disabled,
                label: tr(arrow.label_key()),
                chevron: if arrow.points_right {
                    "M9 5l7 7-7 7"
                } else {
                    "M15 19l-7-7 7-7"
                },
            }
        })
        .collect();
    drop(state);

    rsx! {
        div {
            class: "carousel",
            dir: direction.dir_attr(),
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key().to_string();
                let handled = controller.with_mut(|slot| match slot.as_mut() {
                    Some(nav) => match adapter::command_for_key(&key, nav) {
                        Some(command) => {
                            adapter::apply(nav, command);
                            true
                        }
                        None => false,
                    },
                    None => false,
                });
                if handled {
                    evt.prevent_default();
                }
            },
            onpointerdown: move |evt: PointerEvent| {
                drag_start.set(Some(evt.client_coordinates().x));
            },
            onpointerup: move |evt: PointerEvent| {
                let Some(start) = drag_start.write().take() else {
                    return;
                };
                let delta = evt.client_coordinates().x - start;
                if delta.abs() >= SWIPE_THRESHOLD_PX {
                    let swipe = if delta < 0.0 {
                        SwipeDirection::Left
                    } else {
                        SwipeDirection::Right
                    };
                    run(adapter::command_for_swipe(swipe, rtl));
                }
            },

            div {
                class: "carousel__track",
                style: "--items-per-view: {per_view}",
                for (index, item) in slides {
                    div { key: "{item.id}", class: "carousel__slide",
                        FeatureCard { item: item.clone(), active: index == current_slide }
                    }
                }
            }

            if show_controls {
                div { class: "carousel__controls",
                    div { class: "carousel__dots",
                        for dot in dots {
                            button {
                                key: "{dot.page}",
                                class: dot.class,
                                aria_label: "{dot.label}",
                                aria_current: dot.current,
                                onclick: move |_| run(NavCommand::GoToPage(dot.page)),
                            }
                        }
                    }
                    div { class: "carousel__arrows",
                        for arrow in arrows {
                            button {
                                key: "{arrow.class}",
                                class: "{arrow.class}",
                                disabled: arrow.disabled,
                                aria_label: "{arrow.label}",
                                onclick: move |_| run(arrow.command),
                                svg {
                                    class: "carousel__chevron",
                                    view_box: "0 0 24 24",
                                    fill: "none",
                                    stroke: "currentColor",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        stroke_width: "2",
                                        d: arrow.chevron,
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(status) = status {
                div { class: "visually-hidden", aria_live: "polite", "{status}" }
            }
        }
    }
}
