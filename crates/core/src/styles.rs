//! Per-font style metrics used to nudge baseline alignment.
//!
//! The text-extraction collaborator supplies a style table keyed by font
//! name; each entry carries the ascent as a fraction of the em box. For
//! pages rendered without such a table the Standard 14 families provide a
//! usable fallback.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Metrics for a single font, as supplied per text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    /// Fraction of the em box above the baseline, in (0, 1].
    pub ascent: f64,
}

impl FontStyle {
    pub const fn new(ascent: f64) -> Self {
        Self { ascent }
    }
}

/// Caller-supplied font style table, keyed by font name.
pub type FontStyleMap = FxHashMap<String, FontStyle>;

/// Ascent fractions for the Standard 14 font families, from their AFM
/// metrics.
pub static STANDARD_ASCENTS: Lazy<FxHashMap<&'static str, FontStyle>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    for name in [
        "Courier",
        "Courier-Bold",
        "Courier-Oblique",
        "Courier-BoldOblique",
    ] {
        m.insert(name, FontStyle::new(0.629));
    }
    for name in [
        "Helvetica",
        "Helvetica-Bold",
        "Helvetica-Oblique",
        "Helvetica-BoldOblique",
    ] {
        m.insert(name, FontStyle::new(0.718));
    }
    for name in [
        "Times-Roman",
        "Times-Bold",
        "Times-Italic",
        "Times-BoldItalic",
    ] {
        m.insert(name, FontStyle::new(0.683));
    }
    m.insert("Symbol", FontStyle::new(0.693));
    m.insert("ZapfDingbats", FontStyle::new(0.820));
    m
});

/// Builds an owned style table from the Standard 14 fallback metrics.
pub fn standard_styles() -> FontStyleMap {
    STANDARD_ASCENTS
        .iter()
        .map(|(name, style)| (name.to_string(), *style))
        .collect()
}
