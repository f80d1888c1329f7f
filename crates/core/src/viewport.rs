//! Page viewport mapping.
//!
//! A [`Viewport`] is the scale-aware bridge between PDF user space (origin
//! bottom-left, y growing upward) and screen space (origin top-left, y
//! growing downward). The text-layer positioner always works against the
//! *unrotated* viewport, i.e. the one carrying only the page's intrinsic
//! rotation; the viewer-requested rotation is applied separately.

use crate::error::{LayerError, Result};
use crate::utils::{Matrix, Point, Rect, apply_matrix_pt, is_sideways, mult_matrix, normalize_rotation};

/// A scale-independent mapping from PDF user space to a pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    rotation: i32,
    view_box: Rect,
}

impl Viewport {
    /// Creates a viewport from a rotation and a view box.
    ///
    /// The rotation is folded into [0, 360) and must be a multiple of 90;
    /// the view box must have positive extent on both axes.
    pub fn new(rotation: i32, view_box: Rect) -> Result<Self> {
        let rotation = normalize_rotation(rotation);
        if rotation % 90 != 0 {
            return Err(LayerError::InvalidRotation(rotation));
        }
        let (x0, y0, x1, y1) = view_box;
        if x1 <= x0 || y1 <= y0 {
            return Err(LayerError::InvalidViewBox(view_box));
        }
        Ok(Self { rotation, view_box })
    }

    /// The viewport's own rotation in degrees, in [0, 360).
    pub const fn rotation(&self) -> i32 {
        self.rotation
    }

    /// The view box (x0, y0, x1, y1) in PDF user space.
    pub const fn view_box(&self) -> Rect {
        self.view_box
    }

    /// True when the viewport's own rotation is an odd multiple of 90.
    pub fn is_sideways(&self) -> bool {
        is_sideways(self.rotation)
    }

    /// Horizontal extent in user units, axis-swapped for sideways pages.
    pub fn width(&self) -> f64 {
        let (x0, y0, x1, y1) = self.view_box;
        if self.is_sideways() { y1 - y0 } else { x1 - x0 }
    }

    /// Vertical extent in user units, axis-swapped for sideways pages.
    pub fn height(&self) -> f64 {
        let (x0, y0, x1, y1) = self.view_box;
        if self.is_sideways() { x1 - x0 } else { y1 - y0 }
    }

    /// Pixel size of the rendered page at the given scale.
    pub fn pixel_size(&self, scale: f64) -> (f64, f64) {
        (self.width() * scale, self.height() * scale)
    }

    /// The user-space to pixel-space matrix at the given scale, ignoring
    /// rotation: a y-flip against the view box followed by uniform scaling.
    pub fn transform(&self, scale: f64) -> Matrix {
        let (x0, _y0, _x1, y1) = self.view_box;
        let flip: Matrix = (1.0, 0.0, 0.0, -1.0, -x0, y1);
        let scaled: Matrix = (scale, 0.0, 0.0, scale, 0.0, 0.0);
        mult_matrix(scaled, flip)
    }

    /// Maps a user-space point to pixel space at the given scale.
    pub fn to_pixels(&self, p: Point, scale: f64) -> Point {
        apply_matrix_pt(self.transform(scale), p)
    }
}

/// Intrinsic geometry of a page, as supplied by the page-rendering
/// collaborator: the `/Rotate` entry and the effective media box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    rotate: i32,
    view_box: Rect,
}

impl PageGeometry {
    /// Creates page geometry; rotation is normalized into [0, 360).
    pub fn new(rotate: i32, view_box: Rect) -> Result<Self> {
        let viewport = Viewport::new(rotate, view_box)?;
        Ok(Self {
            rotate: viewport.rotation(),
            view_box,
        })
    }

    /// The page's intrinsic rotation in degrees.
    pub const fn rotate(&self) -> i32 {
        self.rotate
    }

    /// Derives the unrotated viewport, i.e. the one a renderer obtains
    /// without requesting any extra rotation.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            rotation: self.rotate,
            view_box: self.view_box,
        }
    }
}
