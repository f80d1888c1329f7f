//! Text items: the per-run data supplied by the text-extraction collaborator.
//!
//! Use `TextItem::builder()` to construct items with optional fields.

use crate::error::{LayerError, Result};
use crate::utils::Matrix;

/// The 6-number affine transform describing a text run's font metrics and
/// position in PDF user space: `[font_height, font_width, offset_x,
/// offset_y, x, y]`. Immutable once received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphTransform {
    /// Vertical font metric in user units; the rendered font size on
    /// upright pages.
    pub font_height: f64,
    /// Horizontal font metric; the rendered font size on pages whose
    /// default orientation is sideways.
    pub font_width: f64,
    /// Horizontal baseline offset.
    pub offset_x: f64,
    /// Vertical baseline offset.
    pub offset_y: f64,
    /// Run origin, x.
    pub x: f64,
    /// Run origin, y.
    pub y: f64,
}

impl GlyphTransform {
    pub const fn new(
        font_height: f64,
        font_width: f64,
        offset_x: f64,
        offset_y: f64,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            font_height,
            font_width,
            offset_x,
            offset_y,
            x,
            y,
        }
    }

    /// Reads a transform from the 6-element slice produced by text
    /// extraction.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            &[a, b, c, d, e, f] => Ok(Self::new(a, b, c, d, e, f)),
            _ => Err(LayerError::MalformedTransform(values.len())),
        }
    }

    /// Reads a transform from an affine matrix tuple in the same element
    /// order.
    pub const fn from_matrix(m: Matrix) -> Self {
        let (a, b, c, d, e, f) = m;
        Self::new(a, b, c, d, e, f)
    }
}

/// Builder for TextItem with fluent API for optional fields.
///
/// # Example
/// ```ignore
/// let item = TextItem::builder(transform, "Hello", "g_d0_f1")
///     .width(24.5)
///     .item_index(3)
///     .data_start(120)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TextItemBuilder {
    transform: GlyphTransform,
    text: String,
    fontname: String,
    width: f64,
    item_index: usize,
    data_start: usize,
}

impl TextItemBuilder {
    /// Creates a new builder with required fields.
    /// Optional fields default to: width=0.0, item_index=0, data_start=0.
    pub fn new(transform: GlyphTransform, text: &str, fontname: &str) -> Self {
        Self {
            transform,
            text: text.to_string(),
            fontname: fontname.to_string(),
            width: 0.0,
            item_index: 0,
            data_start: 0,
        }
    }

    /// Sets the advance width in user units (default: 0.0, meaning the
    /// width-matching correction is skipped).
    pub const fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the stable index of this item within its page (default: 0).
    pub const fn item_index(mut self, item_index: usize) -> Self {
        self.item_index = item_index;
        self
    }

    /// Sets the character start offset within the page's full text
    /// (default: 0). Used as the surface's DOM anchor key.
    pub const fn data_start(mut self, data_start: usize) -> Self {
        self.data_start = data_start;
        self
    }

    /// Builds the TextItem instance.
    pub fn build(self) -> TextItem {
        TextItem {
            transform: self.transform,
            text: self.text,
            fontname: self.fontname,
            width: self.width,
            item_index: self.item_index,
            data_start: self.data_start,
        }
    }
}

/// One extracted text run, positioned by the text layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    transform: GlyphTransform,
    text: String,
    fontname: String,
    /// Advance width in user units, from the embedded font's metrics
    width: f64,
    /// Stable index within the page
    item_index: usize,
    /// Character start offset within the page's full text
    data_start: usize,
}

impl TextItem {
    /// Creates a new builder for constructing TextItem instances.
    pub fn builder(transform: GlyphTransform, text: &str, fontname: &str) -> TextItemBuilder {
        TextItemBuilder::new(transform, text, fontname)
    }

    pub const fn transform(&self) -> GlyphTransform {
        self.transform
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn fontname(&self) -> &str {
        &self.fontname
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn item_index(&self) -> usize {
        self.item_index
    }

    pub const fn data_start(&self) -> usize {
        self.data_start
    }
}
