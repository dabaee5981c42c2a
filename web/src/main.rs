use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::i18n::{self, TextDirection};
use ui::views::{
    AssetManagement, Home, InternationalMarkets, InvestmentBanking, MarginLending,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/asset-management")]
    AssetManagement {},
    #[route("/investment-banking")]
    InvestmentBanking {},
    #[route("/international-markets")]
    InternationalMarkets {},
    #[route("/margin-lending")]
    MarginLending {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_asset_management(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::AssetManagement {},
        "{label}"
    })
}
fn nav_investment_banking(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::InvestmentBanking {},
        "{label}"
    })
}

fn nav_international_markets(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::InternationalMarkets {},
        "{label}"
    })
}
fn nav_margin_lending(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::MarginLending {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        asset_management: nav_asset_management,
        investment_banking: nav_investment_banking,
        international_markets: nav_international_markets,
        margin_lending: nav_margin_lending,
    });

    // Global language code; AppNavbar updates it on locale selection.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    let dir = TextDirection::of(&lang_code()).dir_attr();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Style { "{THEME_CSS_INLINE}" }

        div { class: "app-root", lang: "{lang_code}", dir: dir,
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared navbar component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
