//! Script-aware font selection.
//!
//! Latin and Arabic pages use different families for the same role, and the
//! Arabic families ship fewer weights. Components ask for a role and get the
//! CSS classes for the active script.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Body,
    Body2,
    SubtitleHero,
    HeroTitle,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub fn class(&self) -> &'static str {
        match self {
            FontWeight::Light => "font-light",
            FontWeight::Regular => "font-normal",
            FontWeight::Medium => "font-medium",
            FontWeight::Semibold => "font-semibold",
            FontWeight::Bold => "font-bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Arabic,
}

impl Script {
    /// Script for a language tag; anything not Arabic renders with Latin fonts.
    ///
    /// Only Arabic has bundled faces, so other RTL languages stay Latin here
    /// even though they lay out right-to-left.
    pub fn for_language(tag: &str) -> Self {
        match crate::i18n::primary_subtag(tag) {
            "ar" => Script::Arabic,
            _ => Script::Latin,
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Script::Latin => "en",
            Script::Arabic => "ar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    pub weight: FontWeight,
    pub css_class: &'static str,
}

pub fn font_spec(script: Script, role: TextRole) -> FontSpec {
    use FontWeight::*;
    use TextRole::*;

    let (family, weight, css_class) = match (script, role) {
        (Script::Latin, Title) => ("Chap", Light, "font-title-en"),
        (Script::Latin, Body | Body2) => ("Jokker", Light, "font-body-en"),
        (Script::Latin, SubtitleHero) => ("Jokker", Light, "subtitle-hero"),
        (Script::Latin, HeroTitle) => ("Jokker", Semibold, "font-body-en"),
        (Script::Latin, Button) => ("Jokker", Regular, "font-body-en"),
        (Script::Arabic, Title) => ("Almarai", Light, "font-title-ar"),
        (Script::Arabic, Body | Body2) => ("Riada", Light, "font-body-ar"),
        (Script::Arabic, SubtitleHero) => ("Riada", Light, "subtitle-hero-ar"),
        (Script::Arabic, HeroTitle) => ("Almarai", Bold, "font-title-ar"),
        (Script::Arabic, Button) => ("Riada", Regular, "font-body-ar"),
    };
    FontSpec {
        family,
        weight,
        css_class,
    }
}

/// `var(--font-<script>-title)` for titles, `...-body` for everything else.
pub fn font_family_var(script: Script, role: TextRole) -> String {
    let slot = if role == TextRole::Title { "title" } else { "body" };
    format!("var(--font-{}-{slot})", script.key())
}

/// Family class plus weight class, ready for a `class` attribute.
pub fn classes(script: Script, role: TextRole) -> String {
    let spec = font_spec(script, role);
    format!("{} {}", spec.css_class, spec.weight.class())
}

/// [`classes`] for the active language.
pub fn current_classes(role: TextRole) -> String {
    classes(Script::for_language(&crate::i18n::current_language()), role)
}
