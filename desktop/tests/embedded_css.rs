#![cfg(test)]
//! The desktop shell inlines `ui/assets/theme/main.css`; these checks keep
//! that file in place and carrying the design tokens both scripts rely on.
//! Moving the theme means updating this path and `MAIN_CSS_INLINE` in
//! `desktop/src/main.rs` together.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn theme_is_not_blank() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "ui/assets/theme/main.css is empty");
}

#[test]
fn theme_defines_colour_and_font_tokens() {
    for token in [
        "--color-bg",
        "--color-accent",
        "--font-en-title",
        "--font-en-body",
        "--font-ar-title",
        "--font-ar-body",
    ] {
        assert!(EMBEDDED_CSS.contains(token), "theme lost `{token}`");
    }
}

#[test]
fn arabic_pages_switch_body_font() {
    assert!(EMBEDDED_CSS.contains("[dir=\"rtl\"] body"));
    assert!(EMBEDDED_CSS.contains("font-family: var(--font-ar-body)"));
}
