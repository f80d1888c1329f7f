//! Page-level text layer assembly.
//!
//! A [`TextLayer`] owns the positioning context, the font style table and
//! the page's text items, and drives the two-phase alignment commit for a
//! rendering surface:
//!
//! 1. `mount` runs one synchronous alignment pass once the surface has
//!    attached the item's anchor, then schedules the single deferred
//!    realignment on the host's [`RealignQueue`].
//! 2. After the delay the host drains `queue.take_due(now)` from its event
//!    loop and calls [`TextLayer::align`] for each returned index whose
//!    anchor still resolves.
//!
//! Dropping the ticket returned by `mount` (the unmount path) cancels the
//! deferred pass, so a torn-down anchor is never touched again.

use std::time::Instant;

use crate::align::{TextAnchor, align_text_item};
use crate::item::TextItem;
use crate::position::{Placement, PositionContext};
use crate::realign::{RealignQueue, RealignTicket};
use crate::styles::FontStyleMap;

/// The text layer of a single rendered page.
#[derive(Debug, Clone)]
pub struct TextLayer {
    ctx: PositionContext,
    styles: FontStyleMap,
    items: Vec<TextItem>,
}

impl TextLayer {
    pub fn new(ctx: PositionContext, styles: FontStyleMap) -> Self {
        Self {
            ctx,
            styles,
            items: Vec::new(),
        }
    }

    pub fn with_items(ctx: PositionContext, styles: FontStyleMap, items: Vec<TextItem>) -> Self {
        Self { ctx, styles, items }
    }

    /// Appends an item to the layer.
    pub fn push(&mut self, item: TextItem) {
        self.items.push(item);
    }

    pub const fn ctx(&self) -> &PositionContext {
        &self.ctx
    }

    pub const fn styles(&self) -> &FontStyleMap {
        &self.styles
    }

    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    /// Computes the unscaled placement for one item.
    pub fn place(&self, item: &TextItem) -> Placement {
        self.ctx.place(item.transform())
    }

    /// Iterates items with their placements, in layer order.
    pub fn placements(&self) -> impl Iterator<Item = (&TextItem, Placement)> {
        self.items.iter().map(|item| (item, self.place(item)))
    }

    /// Runs one alignment pass for the item at `index` against its
    /// anchor. Out-of-range indices are skipped, not errors: the surface
    /// may have dropped items the layer still remembers.
    pub fn align(&self, index: usize, anchor: &mut dyn TextAnchor) {
        if let Some(item) = self.items.get(index) {
            align_text_item(anchor, item, &self.ctx, &self.styles);
        }
    }

    /// Phase-one commit for a freshly attached anchor: aligns now and
    /// schedules the one-shot deferred realignment. Returns `None` for an
    /// out-of-range index.
    pub fn mount(
        &self,
        index: usize,
        anchor: &mut dyn TextAnchor,
        queue: &RealignQueue,
        now: Instant,
    ) -> Option<RealignTicket> {
        if index >= self.items.len() {
            return None;
        }
        self.align(index, anchor);
        Some(queue.schedule(index, now))
    }
}
