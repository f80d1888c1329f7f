//! Tests for screen-space placement geometry.
//!
//! Covers rotation handling, the advance-axis font size selection, the
//! PDF-to-screen vertical flip, and scale application at readout.

use calco_core::item::GlyphTransform;
use calco_core::position::PositionContext;
use calco_core::utils::is_sideways;
use calco_core::viewport::{PageGeometry, Viewport};

// ============================================================================
// Helper functions
// ============================================================================

fn ctx_with(viewport_rotation: i32, rotate: i32, scale: f64) -> PositionContext {
    let viewport = Viewport::new(viewport_rotation, (0.0, 0.0, 100.0, 200.0)).unwrap();
    PositionContext::new(viewport, rotate, scale)
}

// ============================================================================
// Rotation tests
// ============================================================================

/// For every rotation r, sideways(r) == (r mod 180 != 0), including
/// negative and >360 inputs.
#[test]
fn test_sideways_matches_mod_180() {
    for r in (-720i32..=720).step_by(90) {
        let expected = r.rem_euclid(180) != 0;
        assert_eq!(
            is_sideways(r),
            expected,
            "sideways({}) should be {}",
            r,
            expected
        );
    }
}

/// Effective rotation is the requested rotation minus the page's own.
#[test]
fn test_effective_rotation_difference() {
    let ctx = ctx_with(90, 270, 1.0);
    assert_eq!(ctx.effective_rotation(), 180);
    assert!(!ctx.sideways());

    let ctx = ctx_with(90, 180, 1.0);
    assert_eq!(ctx.effective_rotation(), 90);
    assert!(ctx.sideways());
}

/// A page stored sideways and viewed without extra rotation keeps its
/// text unrotated (negative effective rotation).
#[test]
fn test_negative_effective_rotation() {
    let ctx = ctx_with(270, 0, 1.0);
    assert_eq!(ctx.effective_rotation(), -270);
    assert!(ctx.sideways());
}

/// defaultSideways depends only on the viewport's own rotation,
/// independent of the viewer-requested rotation.
#[test]
fn test_default_sideways_independent_of_request() {
    for rotate in [0, 90, 180, 270, 360, -90] {
        assert!(!ctx_with(0, rotate, 1.0).default_sideways());
        assert!(ctx_with(90, rotate, 1.0).default_sideways());
        assert!(!ctx_with(180, rotate, 1.0).default_sideways());
        assert!(ctx_with(270, rotate, 1.0).default_sideways());
    }
}

// ============================================================================
// Font size selection tests
// ============================================================================

#[test]
fn test_font_size_selection() {
    let transform = GlyphTransform::new(12.0, 8.0, 0.0, 0.0, 0.0, 0.0);

    assert_eq!(ctx_with(0, 0, 1.0).font_size(transform), 12.0);
    assert_eq!(ctx_with(90, 0, 1.0).font_size(transform), 8.0);
}

// ============================================================================
// Top/left flip tests
// ============================================================================

#[test]
fn test_top_left_upright() {
    let transform = GlyphTransform::new(10.0, 10.0, 0.0, 0.0, 5.0, 50.0);
    let ctx = ctx_with(0, 0, 1.0);

    assert_eq!(ctx.top(transform), 150.0);
    assert_eq!(ctx.left(transform), 5.0);
}

#[test]
fn test_top_left_default_sideways() {
    let transform = GlyphTransform::new(10.0, 10.0, 0.0, 0.0, 5.0, 50.0);
    let ctx = ctx_with(90, 0, 1.0);

    assert_eq!(ctx.top(transform), 5.0);
    assert_eq!(ctx.left(transform), 50.0);
}

/// Baseline offsets shift top along the flipped axis.
#[test]
fn test_offsets_participate_in_top() {
    let transform = GlyphTransform::new(10.0, 10.0, 2.0, 3.0, 5.0, 50.0);

    // upright: yMax - (y + offsetY)
    assert_eq!(ctx_with(0, 0, 1.0).top(transform), 200.0 - 53.0);
    // sideways: x + offsetX + yMin
    assert_eq!(ctx_with(90, 0, 1.0).top(transform), 7.0);
}

/// A view box that does not start at the origin shifts left.
#[test]
fn test_view_box_origin_offset() {
    let viewport = Viewport::new(0, (10.0, 20.0, 110.0, 220.0)).unwrap();
    let ctx = PositionContext::new(viewport, 0, 1.0);
    let transform = GlyphTransform::new(10.0, 10.0, 0.0, 0.0, 15.0, 50.0);

    assert_eq!(ctx.left(transform), 5.0);
    assert_eq!(ctx.top(transform), 220.0 - 50.0);
}

// ============================================================================
// Scale tests
// ============================================================================

/// Doubling the scale doubles all scaled outputs while the unscaled base
/// geometry is unchanged.
#[test]
fn test_scale_idempotence() {
    let transform = GlyphTransform::new(10.0, 10.0, 0.0, 0.0, 5.0, 50.0);
    let placement = ctx_with(0, 0, 1.0).place(transform);

    let s1 = placement.at_scale(1.25);
    let s2 = placement.at_scale(2.5);

    assert_eq!(s2.font_size_px, s1.font_size_px * 2.0);
    assert_eq!(s2.top_px, s1.top_px * 2.0);
    assert_eq!(s2.left_px, s1.left_px * 2.0);
    assert_eq!(s1.sideways, s2.sideways);

    assert_eq!(placement.font_size, 10.0);
    assert_eq!(placement.top, 150.0);
    assert_eq!(placement.left, 5.0);
}

/// The placement's sideways flag follows the effective rotation, not the
/// page's default orientation.
#[test]
fn test_placement_sideways_flag_is_effective() {
    let transform = GlyphTransform::new(10.0, 10.0, 0.0, 0.0, 5.0, 50.0);

    let placement = ctx_with(0, 90, 1.0).place(transform);
    assert!(placement.sideways);

    let placement = ctx_with(90, 90, 1.0).place(transform);
    assert!(!placement.sideways);
}

// ============================================================================
// Page geometry tests
// ============================================================================

#[test]
fn test_page_geometry_derives_unrotated_viewport() {
    let page = PageGeometry::new(90, (0.0, 0.0, 612.0, 792.0)).unwrap();
    let viewport = page.viewport();

    assert_eq!(viewport.rotation(), 90);
    assert!(viewport.is_sideways());
    // sideways pages swap pixel extent
    assert_eq!(viewport.pixel_size(1.0), (792.0, 612.0));
}
