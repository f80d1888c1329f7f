//! JSON page descriptions consumed by the CLI tools.
//!
//! The format mirrors what a text-extraction collaborator produces per
//! page: the view box and intrinsic rotation, an optional viewer-requested
//! rotation and scale, a style table keyed by font name, and the text
//! items with their glyph transforms.

use std::collections::HashMap;

use calco_core::{
    FontStyle, FontStyleMap, GlyphTransform, PageGeometry, PositionContext, TextItem, TextLayer,
    standard_styles,
};
use serde::Deserialize;

/// A file may hold a single page description or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PageDescriptions {
    One(PageDescription),
    Many(Vec<PageDescription>),
}

impl PageDescriptions {
    pub fn into_vec(self) -> Vec<PageDescription> {
        match self {
            PageDescriptions::One(page) => vec![page],
            PageDescriptions::Many(pages) => pages,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescription {
    /// Effective media box (x0, y0, x1, y1) in user units
    pub view_box: [f64; 4],
    /// The page's intrinsic rotation in degrees
    #[serde(default)]
    pub rotation: i32,
    /// Viewer-requested rotation; defaults to the intrinsic rotation
    #[serde(default)]
    pub rotate: Option<i32>,
    /// Render scale
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Font style table keyed by font name
    #[serde(default)]
    pub styles: HashMap<String, StyleDescription>,
    #[serde(default)]
    pub items: Vec<ItemDescription>,
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct StyleDescription {
    pub ascent: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDescription {
    /// 6-element glyph transform
    pub transform: Vec<f64>,
    /// Literal text of the run
    #[serde(rename = "str")]
    pub text: String,
    pub font_name: String,
    /// Advance width in user units
    #[serde(default)]
    pub width: f64,
    /// Character start offset within the page's full text
    #[serde(default)]
    pub data_start: usize,
}

impl PageDescription {
    /// Builds a text layer, applying CLI overrides for scale and
    /// requested rotation. An empty style table falls back to the
    /// Standard 14 metrics.
    pub fn into_layer(
        self,
        scale_override: Option<f64>,
        rotate_override: Option<i32>,
    ) -> calco_core::Result<TextLayer> {
        let [x0, y0, x1, y1] = self.view_box;
        let page = PageGeometry::new(self.rotation, (x0, y0, x1, y1))?;

        let rotate = rotate_override.or(self.rotate).unwrap_or(page.rotate());
        let scale = scale_override.unwrap_or(self.scale);
        let ctx = PositionContext::new(page.viewport(), rotate, scale);

        let styles: FontStyleMap = if self.styles.is_empty() {
            standard_styles()
        } else {
            self.styles
                .into_iter()
                .map(|(name, style)| (name, FontStyle::new(style.ascent)))
                .collect()
        };

        let mut items = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.into_iter().enumerate() {
            let transform = GlyphTransform::from_slice(&item.transform)?;
            items.push(
                TextItem::builder(transform, &item.text, &item.font_name)
                    .width(item.width)
                    .item_index(index)
                    .data_start(item.data_start)
                    .build(),
            );
        }

        Ok(TextLayer::with_items(ctx, styles, items))
    }
}
