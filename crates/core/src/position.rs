//! Screen-space placement of text items.
//!
//! Converts a glyph transform into font size, top and left offsets against
//! the unrotated viewport. Base geometry is kept unscaled; the scale factor
//! is applied only when a placement is read out for rendering, so rescaling
//! the page never recomputes geometry.

use crate::item::GlyphTransform;
use crate::utils::{is_sideways, normalize_rotation};
use crate::viewport::Viewport;

/// The immutable inputs shared by every item on a page: the unrotated
/// viewport, the viewer-requested rotation, and the render scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionContext {
    viewport: Viewport,
    rotate: i32,
    scale: f64,
}

impl PositionContext {
    /// Creates a context. The requested rotation is folded into [0, 360).
    pub fn new(viewport: Viewport, rotate: i32, scale: f64) -> Self {
        Self {
            viewport,
            rotate: normalize_rotation(rotate),
            scale,
        }
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// The viewer-requested rotation minus the page's own rotation.
    ///
    /// A page that is stored rotated renders its text already oriented;
    /// only the difference decides whether the layer must re-rotate.
    pub fn effective_rotation(&self) -> i32 {
        self.rotate - self.viewport.rotation()
    }

    /// True when glyph advance runs along the vertical screen axis.
    pub fn sideways(&self) -> bool {
        is_sideways(self.effective_rotation())
    }

    /// True when the page's default orientation is already sideways,
    /// regardless of what the viewer requested.
    pub fn default_sideways(&self) -> bool {
        self.viewport.is_sideways()
    }

    /// The rendered font size in user units: the advance-axis metric.
    pub fn font_size(&self, transform: GlyphTransform) -> f64 {
        if self.default_sideways() {
            transform.font_width
        } else {
            transform.font_height
        }
    }

    /// Top offset in user units. PDF y grows upward and screen y grows
    /// downward, so upright pages flip against the viewport's vertical
    /// extent.
    pub fn top(&self, transform: GlyphTransform) -> f64 {
        let (_x0, y0, _x1, y1) = self.viewport.view_box();
        if self.default_sideways() {
            transform.x + transform.offset_x + y0
        } else {
            y1 - (transform.y + transform.offset_y)
        }
    }

    /// Left offset in user units: whichever source axis is horizontal once
    /// default sideways-ness is accounted for.
    pub fn left(&self, transform: GlyphTransform) -> f64 {
        let (x0, _y0, _x1, _y1) = self.viewport.view_box();
        if self.default_sideways() {
            transform.y - x0
        } else {
            transform.x - x0
        }
    }

    /// Computes the full unscaled placement for a glyph transform.
    pub fn place(&self, transform: GlyphTransform) -> Placement {
        Placement {
            font_size: self.font_size(transform),
            top: self.top(transform),
            left: self.left(transform),
            sideways: self.sideways(),
        }
    }
}

/// Unscaled base geometry for one text item. Recomputed from current
/// inputs on every change; nothing here survives an input change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Font size in user units
    pub font_size: f64,
    /// Top offset in user units
    pub top: f64,
    /// Left offset in user units
    pub left: f64,
    /// Glyph advance runs along the vertical screen axis
    pub sideways: bool,
}

impl Placement {
    /// Applies the render scale, producing pixel values.
    pub fn at_scale(&self, scale: f64) -> ScaledPlacement {
        ScaledPlacement {
            font_size_px: self.font_size * scale,
            top_px: self.top * scale,
            left_px: self.left * scale,
            sideways: self.sideways,
        }
    }
}

/// Pixel-space placement, ready for a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledPlacement {
    pub font_size_px: f64,
    pub top_px: f64,
    pub left_px: f64,
    pub sideways: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upright_ctx() -> PositionContext {
        let vp = Viewport::new(0, (0.0, 0.0, 100.0, 200.0)).unwrap();
        PositionContext::new(vp, 0, 1.0)
    }

    fn sideways_ctx() -> PositionContext {
        let vp = Viewport::new(90, (0.0, 0.0, 100.0, 200.0)).unwrap();
        PositionContext::new(vp, 0, 1.0)
    }

    #[test]
    fn effective_rotation_subtracts_page_rotation() {
        let vp = Viewport::new(90, (0.0, 0.0, 100.0, 200.0)).unwrap();
        let ctx = PositionContext::new(vp, 90, 1.0);
        assert_eq!(ctx.effective_rotation(), 0);
        assert!(!ctx.sideways());
        assert!(ctx.default_sideways());
    }

    #[test]
    fn default_sideways_ignores_requested_rotation() {
        let vp = Viewport::new(0, (0.0, 0.0, 100.0, 200.0)).unwrap();
        for rotate in [0, 90, 180, 270] {
            let ctx = PositionContext::new(vp, rotate, 1.0);
            assert!(!ctx.default_sideways());
        }
    }

    #[test]
    fn font_size_picks_advance_axis_metric() {
        let t = GlyphTransform::new(12.0, 8.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(upright_ctx().font_size(t), 12.0);
        assert_eq!(sideways_ctx().font_size(t), 8.0);
    }

    #[test]
    fn top_left_flip() {
        let t = GlyphTransform::new(10.0, 10.0, 0.0, 0.0, 5.0, 50.0);

        let upright = upright_ctx().place(t);
        assert_eq!(upright.top, 150.0);
        assert_eq!(upright.left, 5.0);

        let sideways = sideways_ctx().place(t);
        assert_eq!(sideways.top, 5.0);
        assert_eq!(sideways.left, 50.0);
    }

    #[test]
    fn scale_applies_only_at_readout() {
        let t = GlyphTransform::new(10.0, 10.0, 0.0, 0.0, 5.0, 50.0);
        let base = upright_ctx().place(t);

        let once = base.at_scale(1.5);
        let twice = base.at_scale(3.0);
        assert_eq!(twice.font_size_px, once.font_size_px * 2.0);
        assert_eq!(twice.top_px, once.top_px * 2.0);
        assert_eq!(twice.left_px, once.left_px * 2.0);

        // base geometry untouched by scaling
        assert_eq!(base.top, 150.0);
    }
}
