use bar_core::{Alignment, Item};

/// Where one visible item goes.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub key:       String,
    pub alignment: Alignment,
    /// Distance from the anchor edge (leading for left items, trailing for
    /// right items) to the item's nearest edge.
    pub offset:    f32,
    /// Absolute x of the item's leading edge.
    pub x:         f32,
    pub width:     f32,
}

impl Placement {
    /// x of the trailing edge.
    pub fn end(&self) -> f32 {
        self.x + self.width
    }
}

/// A finished placement pass: left items first, then right items, each
/// group in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub items: Vec<Placement>,
}

impl Layout {
    pub fn get(&self, key: &str) -> Option<&Placement> {
        self.items.iter().find(|p| p.key == key)
    }

    pub fn side(&self, alignment: Alignment) -> impl Iterator<Item = &Placement> {
        self.items.iter().filter(move |p| p.alignment == alignment)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Place both sides of a bar that is `width` wide.
///
/// `left` and `right` must already be sorted by key.  The first item of each
/// side sits flush against its edge; every following item starts `padding`
/// past the previous one.
pub fn compute(left: &[Item], right: &[Item], padding: f32, width: f32) -> Layout {
    let mut items = Vec::with_capacity(left.len() + right.len());

    let mut offset = 0.0;
    for item in left {
        items.push(Placement {
            key:       item.key().to_string(),
            alignment: Alignment::Left,
            offset,
            x:         offset,
            width:     item.width(),
        });
        offset += item.width() + padding;
    }

    let mut offset = 0.0;
    for item in right {
        items.push(Placement {
            key:       item.key().to_string(),
            alignment: Alignment::Right,
            offset,
            x:         width - offset - item.width(),
            width:     item.width(),
        });
        offset += item.width() + padding;
    }

    Layout { width, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bar_core::TextMeasure;

    fn numeric(text: &str) -> f32 {
        text.parse().unwrap_or(0.0)
    }

    fn item(key: &str, width: u32, alignment: Alignment) -> Item {
        let measure: &dyn TextMeasure = &numeric;
        Item::with_alignment(key, width.to_string(), alignment, measure)
    }

    #[test]
    fn left_items_chain_from_leading_edge() {
        let left = [item("a", 10, Alignment::Left), item("c", 20, Alignment::Left)];
        let layout = compute(&left, &[], 5.0, 100.0);

        let a = layout.get("a").unwrap();
        let c = layout.get("c").unwrap();
        assert_eq!((a.offset, a.x), (0.0, 0.0));
        assert_eq!((c.offset, c.x), (15.0, 15.0));
        assert_eq!(c.x, a.end() + 5.0);
    }

    #[test]
    fn right_items_chain_from_trailing_edge() {
        let right = [item("b", 10, Alignment::Right), item("d", 20, Alignment::Right)];
        let layout = compute(&[], &right, 5.0, 100.0);

        let b = layout.get("b").unwrap();
        let d = layout.get("d").unwrap();
        assert_eq!((b.offset, b.x, b.end()), (0.0, 90.0, 100.0));
        assert_eq!((d.offset, d.x), (15.0, 65.0));
        assert_eq!(d.end() + 5.0, b.x);
    }

    #[test]
    fn empty_side_is_skipped() {
        let left = [item("a", 10, Alignment::Left)];
        let layout = compute(&left, &[], 5.0, 50.0);
        assert_eq!(layout.side(Alignment::Right).count(), 0);
        assert_eq!(layout.side(Alignment::Left).count(), 1);

        assert!(compute(&[], &[], 5.0, 50.0).is_empty());
    }
}
