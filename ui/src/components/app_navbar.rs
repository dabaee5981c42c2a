use crate::i18n::{self, TextDirection};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the localized label and returns a link that already
/// contains it. Without a registered builder, `AppNavbar` renders its
/// `children` instead.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn nav_home(label: &str) -> Element {
///     rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
/// }
/// // ...one function per page...
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: nav_home,
///         asset_management: nav_asset_management,
///         investment_banking: nav_investment_banking,
///         international_markets: nav_international_markets,
///         margin_lending: nav_margin_lending,
///     });
/// }
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub asset_management: fn(label: &str) -> Element,
    pub investment_banking: fn(label: &str) -> Element,
    pub international_markets: fn(label: &str) -> Element,
    pub margin_lending: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Entry of the locale switcher.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleOption {
    pub code: String,
    pub label: String,
    pub dir: &'static str,
}

pub fn locale_options(codes: &[String]) -> Vec<LocaleOption> {
    codes
        .iter()
        .map(|code| LocaleOption {
            code: code.clone(),
            label: i18n::language_display_name(code).to_string(),
            dir: TextDirection::of(code).dir_attr(),
        })
        .collect()
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, when the platform provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        tracing::trace!(lang = %lang_marker, "AppNavbar render");
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(
                    language = %val,
                    dir = TextDirection::of(&val).dir_attr(),
                    "navbar: locale selected"
                );
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(language = %val, "navbar: locale switch failed ({err})"),
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let asset_management = (b.asset_management)(&t!("nav-asset-management"));
        let investment_banking = (b.investment_banking)(&t!("nav-investment-banking"));
        let international_markets = (b.international_markets)(&t!("nav-international-markets"));
        let margin_lending = (b.margin_lending)(&t!("nav-margin-lending"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {asset_management}
                {investment_banking}
                {international_markets}
                {margin_lending}
            }
        }
    });

    let brand = t!("brand-name");
    let tagline = t!("tagline");
    let options = locale_options(&langs());

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps the navbar subscribed to the language signal.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "{brand}" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for entry in options {
                                option {
                                    key: "{entry.code}",
                                    value: "{entry.code}",
                                    dir: entry.dir,
                                    "{entry.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
