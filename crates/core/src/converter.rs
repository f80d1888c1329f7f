//! HTML text-layer writer.
//!
//! Writes an assembled [`TextLayer`] as absolutely positioned,
//! selectable-but-invisible HTML spans inside a page-sized container, the
//! static counterpart of what a live rendering surface builds from
//! placements. Scale is applied here, at write time; the layer's base
//! geometry stays unscaled.

use std::borrow::Cow;
use std::io::Write;

use crate::align::StyleTransform;
use crate::error::Result;
use crate::item::TextItem;
use crate::layer::TextLayer;
use crate::position::Placement;

/// Optional override hook: given an item and its placement, returns
/// replacement markup instead of the escaped literal text. Used by
/// surfaces that draw highlights or other decorated runs; pass-through
/// here.
pub type ItemRenderer = Box<dyn Fn(&TextItem, &Placement) -> String>;

/// Encodes a string for HTML output by escaping special characters.
fn enc(x: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(x)
}

/// HTML writer for page text layers.
pub struct HtmlLayerWriter<W: Write> {
    outfp: W,
    pageno: usize,
    renderer: Option<ItemRenderer>,
}

impl<W: Write> HtmlLayerWriter<W> {
    /// Creates a writer and emits the document header.
    pub fn new(outfp: W) -> Result<Self> {
        Self::with_renderer(outfp, None)
    }

    /// Creates a writer with a custom item renderer.
    pub fn with_renderer(outfp: W, renderer: Option<ItemRenderer>) -> Result<Self> {
        let mut writer = Self {
            outfp,
            pageno: 0,
            renderer,
        };
        writer.write_header()?;
        Ok(writer)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.outfp.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        self.write("<html><head>\n")?;
        self.write("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n")?;
        self.write("</head><body>\n")
    }

    fn write_footer(&mut self) -> Result<()> {
        self.write("</body></html>\n")
    }

    /// Writes one page's text layer: a page-sized relative container with
    /// one absolutely positioned span per item.
    pub fn write_layer(&mut self, layer: &TextLayer) -> Result<()> {
        self.pageno += 1;
        let ctx = layer.ctx();
        let scale = ctx.scale();
        let (width, height) = ctx.viewport().pixel_size(scale);

        let container = format!(
            "<div data-page-number=\"{}\" style=\"position:relative; \
             overflow:hidden; width:{}px; height:{}px;\">\n",
            self.pageno, width, height
        );
        self.write(&container)?;

        for (item, placement) in layer.placements() {
            self.place_item(layer, item, &placement)?;
        }

        self.write("</div>\n")
    }

    /// Places a single item span.
    fn place_item(&mut self, layer: &TextLayer, item: &TextItem, placement: &Placement) -> Result<()> {
        let scaled = placement.at_scale(layer.ctx().scale());

        // The ascent nudge is computable without measurement; the width
        // correction needs a live surface and is left to the align pass.
        let transform = StyleTransform {
            scale_x: None,
            translate_y_pct: layer
                .styles()
                .get(item.fontname())
                .map(|style| (1.0 - style.ascent) * 100.0),
        };
        let transform_css = if transform.is_empty() {
            String::new()
        } else {
            format!(" transform:{};", transform.to_css())
        };

        let open = format!(
            "<span data-start=\"{}\" style=\"position:absolute; \
             white-space:pre; height:1em; line-height:1em; \
             transform-origin:left bottom; pointer-events:all; \
             font-family:{}, sans-serif; font-size:{}px; \
             top:{}px; left:{}px;{}\">",
            item.data_start(),
            enc(item.fontname()),
            scaled.font_size_px,
            scaled.top_px,
            scaled.left_px,
            transform_css
        );
        self.write(&open)?;

        let markup = match &self.renderer {
            Some(render) => render(item, placement),
            None => enc(item.get_text()).into_owned(),
        };
        self.write(&markup)?;

        self.write("</span>\n")
    }

    /// Writes the footer, flushes, and returns the underlying writer.
    pub fn close(mut self) -> Result<W> {
        self.write_footer()?;
        self.outfp.flush()?;
        Ok(self.outfp)
    }
}
