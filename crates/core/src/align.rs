//! Corrective alignment of rendered text items.
//!
//! The font actually available on a rendering surface rarely matches the
//! embedded PDF font's metrics, so after an item is laid out its rendered
//! extent is measured and a horizontal-scale correction is applied, plus a
//! baseline nudge when the font's ascent is known. The surface is reached
//! through the [`TextAnchor`] seam; a DOM node in the original viewer, a
//! recording double in tests.

use itertools::Itertools;

use crate::item::TextItem;
use crate::position::PositionContext;
use crate::styles::FontStyleMap;

/// One rendered text node on the surface, addressable by the layer.
pub trait TextAnchor {
    /// False until the surface has committed the node; alignment is a
    /// no-op for unattached anchors.
    fn attached(&self) -> bool;

    /// Sets the node's font family.
    fn set_font_family(&mut self, family: &str);

    /// Measures the node's rendered extent along its advance axis after
    /// layout: width when upright, height when sideways.
    fn measured_extent(&self, sideways: bool) -> f64;

    /// Replaces the node's corrective transform. An empty transform
    /// clears any previous correction.
    fn apply_transform(&mut self, transform: &StyleTransform);
}

/// The corrective transform emitted by an alignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleTransform {
    /// Horizontal scale matching the substitute font's advance width to
    /// the embedded font's.
    pub scale_x: Option<f64>,
    /// Downward baseline nudge as a percentage of the em box.
    pub translate_y_pct: Option<f64>,
}

impl StyleTransform {
    pub const fn is_empty(&self) -> bool {
        self.scale_x.is_none() && self.translate_y_pct.is_none()
    }

    /// Renders the transform as CSS transform functions.
    pub fn to_css(&self) -> String {
        let scale = self.scale_x.map(|s| format!("scaleX({})", s));
        let translate = self.translate_y_pct.map(|t| format!("translateY({}%)", t));
        scale.into_iter().chain(translate).join(" ")
    }
}

/// Runs one alignment pass over a rendered item.
///
/// Skipped corrections, in order of appearance: the whole pass when the
/// anchor is not attached; the width match when the item carries no
/// advance width or the measured extent is zero or non-finite; the
/// baseline nudge when the style table does not know the font.
pub fn align_text_item(
    anchor: &mut dyn TextAnchor,
    item: &TextItem,
    ctx: &PositionContext,
    styles: &FontStyleMap,
) {
    if !anchor.attached() {
        return;
    }

    anchor.set_font_family(&format!("{}, sans-serif", item.fontname()));

    let mut transform = StyleTransform::default();
    if item.width() > 0.0 {
        let target_width = item.width() * ctx.scale();
        let actual_width = anchor.measured_extent(ctx.sideways());
        if actual_width.is_finite() && actual_width > 0.0 {
            transform.scale_x = Some(target_width / actual_width);
        }
    }
    if let Some(style) = styles.get(item.fontname()) {
        transform.translate_y_pct = Some((1.0 - style.ascent) * 100.0);
    }

    // Applied even when empty so a stale correction from a previous pass
    // never survives an input change.
    anchor.apply_transform(&transform);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::GlyphTransform;
    use crate::styles::FontStyle;
    use crate::viewport::Viewport;

    struct FakeAnchor {
        attached: bool,
        extent: f64,
        family: Option<String>,
        transform: Option<StyleTransform>,
    }

    impl FakeAnchor {
        fn attached_with_extent(extent: f64) -> Self {
            Self {
                attached: true,
                extent,
                family: None,
                transform: None,
            }
        }
    }

    impl TextAnchor for FakeAnchor {
        fn attached(&self) -> bool {
            self.attached
        }
        fn set_font_family(&mut self, family: &str) {
            self.family = Some(family.to_string());
        }
        fn measured_extent(&self, _sideways: bool) -> f64 {
            self.extent
        }
        fn apply_transform(&mut self, transform: &StyleTransform) {
            self.transform = Some(*transform);
        }
    }

    fn ctx() -> PositionContext {
        let vp = Viewport::new(0, (0.0, 0.0, 612.0, 792.0)).unwrap();
        PositionContext::new(vp, 0, 1.0)
    }

    fn item_with_width(width: f64) -> TextItem {
        let t = GlyphTransform::new(12.0, 12.0, 0.0, 0.0, 10.0, 700.0);
        TextItem::builder(t, "Hello", "F1").width(width).build()
    }

    #[test]
    fn emits_scale_x_from_target_over_actual() {
        let mut anchor = FakeAnchor::attached_with_extent(25.0);
        align_text_item(&mut anchor, &item_with_width(50.0), &ctx(), &FontStyleMap::default());

        let transform = anchor.transform.unwrap();
        assert_eq!(transform.scale_x, Some(2.0));
        assert_eq!(transform.to_css(), "scaleX(2)");
        assert_eq!(anchor.family.as_deref(), Some("F1, sans-serif"));
    }

    #[test]
    fn zero_extent_skips_scale_correction() {
        let mut anchor = FakeAnchor::attached_with_extent(0.0);
        align_text_item(&mut anchor, &item_with_width(50.0), &ctx(), &FontStyleMap::default());

        let transform = anchor.transform.unwrap();
        assert_eq!(transform.scale_x, None);
        assert!(transform.is_empty());
        assert_eq!(transform.to_css(), "");
    }

    #[test]
    fn zero_width_item_skips_measurement() {
        let mut anchor = FakeAnchor::attached_with_extent(25.0);
        align_text_item(&mut anchor, &item_with_width(0.0), &ctx(), &FontStyleMap::default());
        assert!(anchor.transform.unwrap().is_empty());
    }

    #[test]
    fn known_font_gets_baseline_nudge() {
        let mut styles = FontStyleMap::default();
        styles.insert("F1".to_string(), FontStyle::new(0.75));

        let mut anchor = FakeAnchor::attached_with_extent(25.0);
        align_text_item(&mut anchor, &item_with_width(50.0), &ctx(), &styles);

        let transform = anchor.transform.unwrap();
        assert_eq!(transform.translate_y_pct, Some(25.0));
        assert_eq!(transform.to_css(), "scaleX(2) translateY(25%)");
    }

    #[test]
    fn unattached_anchor_is_untouched() {
        let mut anchor = FakeAnchor {
            attached: false,
            extent: 25.0,
            family: None,
            transform: None,
        };
        align_text_item(&mut anchor, &item_with_width(50.0), &ctx(), &FontStyleMap::default());
        assert!(anchor.family.is_none());
        assert!(anchor.transform.is_none());
    }
}
