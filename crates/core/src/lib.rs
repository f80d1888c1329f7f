//! calco - positions the selectable text layer of rendered PDF pages.
//!
//! Converts PDF-space glyph transform data into screen-space placements
//! (top / left / font-size / horizontal-scale correction) so an invisible
//! text layer aligns with a rendered page image.

pub mod align;
pub mod converter;
pub mod error;
pub mod item;
pub mod layer;
pub mod position;
pub mod realign;
pub mod styles;
pub mod utils;
pub mod viewport;

pub use align::{StyleTransform, TextAnchor, align_text_item};
pub use converter::{HtmlLayerWriter, ItemRenderer};
pub use error::{LayerError, Result};
pub use item::{GlyphTransform, TextItem, TextItemBuilder};
pub use layer::TextLayer;
pub use position::{Placement, PositionContext, ScaledPlacement};
pub use realign::{REALIGN_DELAY, RealignQueue, RealignTicket};
pub use styles::{FontStyle, FontStyleMap, STANDARD_ASCENTS, standard_styles};
pub use viewport::{PageGeometry, Viewport};
