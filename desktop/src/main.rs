#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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
    #[layout(DesktopNavbar)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();

    // Maximize window on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value)
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Vitrine – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn init_logging() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_asset_management(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::AssetManagement {}, "{label}" })
}
fn nav_investment_banking(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::InvestmentBanking {}, "{label}" })
}
fn nav_international_markets(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::InternationalMarkets {}, "{label}" })
}
fn nav_margin_lending(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::MarginLending {}, "{label}" })
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global language code; AppNavbar updates it on locale selection.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    let dir = TextDirection::of(&lang_code()).dir_attr();

    register_nav(NavBuilder {
        home: nav_home,
        asset_management: nav_asset_management,
        investment_banking: nav_investment_banking,
        international_markets: nav_international_markets,
        margin_lending: nav_margin_lending,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Global app resources
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the routed subtree remounts with the new direction.
        div {
            key: "{lang_code}",
            class: "app-root",
            lang: "{lang_code}",
            dir: dir,
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific Router around the shared navbar component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
