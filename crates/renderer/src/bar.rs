use crate::{
    layout::{self, Layout},
    paint::Canvas,
};
use bar_core::{Alignment, BarError, Item, Result, TextMeasure};
use bar_theme::{BarStyle, Color};
use std::{collections::HashSet, fmt};
use tracing::{debug, warn};

/// Slack a hidden item needs before it is restored.
pub const DEFAULT_MIN_WIDTH_DIFFERENCE: f32 = 2.0;

/// The bar: every registered item plus the visibility state the overflow
/// policy maintains for them.
///
/// Each key lives in exactly one of `left`, `right` or `hidden`.  The two
/// visible lists are always sorted by key; `hidden` is a stack whose top is
/// the most recently hidden item.
///
/// Mutations only mark the bar dirty.  Placement is recomputed once, on the
/// next [`Bar::layout`] or [`Bar::paint`].
pub struct Bar {
    keys:   HashSet<String>,
    left:   Vec<Item>,
    right:  Vec<Item>,
    hidden: Vec<Item>,

    padding:              f32,
    min_width_difference: f32,
    available_width:      Option<f32>,
    style:                BarStyle,

    layout:       Layout,
    needs_layout: bool,
    needs_redraw: bool,

    measure: Box<dyn TextMeasure>,
}

impl Bar {
    pub fn new(padding: f32, measure: impl TextMeasure + 'static) -> Self {
        Self {
            keys:   HashSet::new(),
            left:   Vec::new(),
            right:  Vec::new(),
            hidden: Vec::new(),

            padding:              padding.max(0.0),
            min_width_difference: DEFAULT_MIN_WIDTH_DIFFERENCE,
            available_width:      None,
            style:                BarStyle::default(),

            layout:       Layout::default(),
            needs_layout: true,
            needs_redraw: true,

            measure: Box::new(measure),
        }
    }

    #[must_use]
    pub fn with_min_width_difference(mut self, difference: f32) -> Self {
        self.min_width_difference = difference;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    // ── Registration ──────────────────────────────────────────────────────────

    /// Register a pre-built item.  A key that is already known (visible or
    /// hidden) is logged and ignored.
    pub fn add(&mut self, item: Item) {
        if self.keys.contains(item.key()) {
            warn!("{}; add ignored", BarError::DuplicateKey(item.key().to_string()));
            return;
        }

        self.keys.insert(item.key().to_string());
        let side = match item.alignment() {
            Alignment::Left  => &mut self.left,
            Alignment::Right => &mut self.right,
        };
        insert_sorted(side, item);
        self.invalidate();
    }

    /// Build an item with this bar's measurer and register it.
    ///
    /// Fails only on an unrecognised alignment token.
    pub fn add_item(&mut self, key: &str, value: &str, alignment: &str) -> Result<()> {
        let item = Item::new(key, value, alignment, self.measure.as_ref())?;
        self.add(item);
        Ok(())
    }

    /// Replace an item's value.  Hidden items are updated too so they come
    /// back with current text.
    pub fn update_item(&mut self, key: &str, value: &str) {
        let measure = self.measure.as_ref();
        let found = self
            .left
            .iter_mut()
            .chain(self.right.iter_mut())
            .chain(self.hidden.iter_mut())
            .find(|item| item.key() == key);

        let Some(item) = found else {
            warn!("{}; update ignored", BarError::UnknownKey(key.to_string()));
            return;
        };

        if item.set_value(value, measure) {
            debug!(key, width = item.width(), "item width changed");
        }
        self.invalidate();
    }

    /// Drop an item for good.  Removing a hidden item never restores another.
    pub fn remove_item(&mut self, key: &str) {
        if !self.keys.remove(key) {
            warn!("{}; remove ignored", BarError::UnknownKey(key.to_string()));
            return;
        }

        for list in [&mut self.left, &mut self.right, &mut self.hidden] {
            if let Some(pos) = list.iter().position(|item| item.key() == key) {
                list.remove(pos);
                break;
            }
        }
        self.invalidate();
    }

    // ── Width handling ────────────────────────────────────────────────────────

    /// React to a new available width.
    ///
    /// A width below [`Bar::min_width`] hides items until the rest fits.
    /// A width that grew considers the top of the hidden stack for
    /// restoration; at most one item comes back per call.
    pub fn on_available_width_changed(&mut self, width: f32) {
        let width = if width.is_nan() { 0.0 } else { width.max(0.0) };
        let previous = self.available_width.replace(width);
        if previous != Some(width) {
            self.invalidate();
        }

        if width < self.min_width() {
            self.hide_until_fits(width);
        } else if previous.map_or(true, |p| width > p) {
            self.try_restore(width);
        }
    }

    fn hide_until_fits(&mut self, width: f32) {
        while width < self.min_width() {
            // Ties go to the right side.
            let side = if self.left.len() > self.right.len() {
                &mut self.left
            } else {
                &mut self.right
            };
            let Some(item) = side.pop() else { break };

            debug!(key = item.key(), side = %item.alignment(), "hiding item");
            self.hidden.push(item);
        }
        self.invalidate();
    }

    fn try_restore(&mut self, width: f32) {
        let Some(candidate) = self.hidden.last() else {
            return;
        };

        let candidate_min_width = self.min_width() + self.padding + candidate.width();
        if candidate_min_width - width >= self.min_width_difference {
            return;
        }

        if let Some(item) = self.hidden.pop() {
            debug!(key = item.key(), side = %item.alignment(), "restoring item");
            let side = match item.alignment() {
                Alignment::Left  => &mut self.left,
                Alignment::Right => &mut self.right,
            };
            insert_sorted(side, item);
            self.invalidate();
        }
    }

    /// Width needed to show every visible item without overlap.
    pub fn min_width(&self) -> f32 {
        let count = self.left.len() + self.right.len();
        if count == 0 {
            return 0.0;
        }
        let total: f32 = self.left.iter().chain(&self.right).map(Item::width).sum();
        total + self.padding * (count - 1) as f32
    }

    // ── Style & drawing ───────────────────────────────────────────────────────

    /// Swap the background and text colours.  Layout is untouched.
    pub fn set_style(&mut self, background: Color, text: Color) {
        self.style.background = background;
        self.style.text = text;
        self.needs_redraw = true;
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Run the pending placement pass, if any, and return the result.
    ///
    /// Before the host reports a width the bar is laid out at its own
    /// minimum width.
    pub fn layout(&mut self) -> &Layout {
        if self.needs_layout {
            let width = self.available_width.unwrap_or_else(|| self.min_width());
            self.layout = layout::compute(&self.left, &self.right, self.padding, width);
            self.needs_layout = false;
            self.needs_redraw = true;
        }
        &self.layout
    }

    /// Paint background, then the bottom border, then every visible item.
    pub fn paint<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.layout();

        let style = self.style;
        canvas.fill_background(self.layout.width, style.background);
        canvas.stroke_bottom_border(self.layout.width, style.border);

        // Placements are emitted left-then-right in key order, same as the lists.
        let visible = self.left.iter().chain(&self.right);
        for (item, placement) in visible.zip(&self.layout.items) {
            canvas.draw_item(placement, item.value(), style.text);
        }

        self.needs_redraw = false;
    }

    fn invalidate(&mut self) {
        self.needs_layout = true;
        self.needs_redraw = true;
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn is_visible(&self, key: &str) -> bool {
        self.left.iter().chain(&self.right).any(|item| item.key() == key)
    }

    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.iter().any(|item| item.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.left
            .iter()
            .chain(&self.right)
            .chain(&self.hidden)
            .find(|item| item.key() == key)
    }

    pub fn left(&self) -> &[Item] {
        &self.left
    }

    pub fn right(&self) -> &[Item] {
        &self.right
    }

    /// Hidden items, oldest first.
    pub fn hidden(&self) -> &[Item] {
        &self.hidden
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn available_width(&self) -> Option<f32> {
        self.available_width
    }

    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }
}

impl fmt::Debug for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys = |items: &[Item]| items.iter().map(|i| i.key().to_string()).collect::<Vec<_>>();
        f.debug_struct("Bar")
            .field("left", &keys(&self.left))
            .field("right", &keys(&self.right))
            .field("hidden", &keys(&self.hidden))
            .field("padding", &self.padding)
            .field("available_width", &self.available_width)
            .finish_non_exhaustive()
    }
}

fn insert_sorted(side: &mut Vec<Item>, item: Item) {
    let pos = side.partition_point(|i| i.key() < item.key());
    side.insert(pos, item);
}
