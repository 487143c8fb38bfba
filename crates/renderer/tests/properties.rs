use bar_core::Item;
use bar_renderer::Bar;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

/// Widths are the numeric value of the text.
fn numeric(text: &str) -> f32 {
    text.parse().unwrap_or(0.0)
}

// Distinct keys, each with a width and a side.
fn arb_items() -> impl Strategy<Value = Vec<(String, u32, &'static str)>> {
    prop::collection::btree_map("[a-z]{1,4}", (0u32..40, prop_oneof![Just("left"), Just("right")]), 0..24)
        .prop_map(|m: BTreeMap<String, (u32, &'static str)>| {
            m.into_iter().map(|(k, (w, a))| (k, w, a)).collect()
        })
}

fn build(items: &[(String, u32, &'static str)], padding: f32) -> Bar {
    let mut bar = Bar::new(padding, numeric);
    for (key, width, alignment) in items {
        bar.add_item(key, &width.to_string(), alignment).unwrap();
    }
    bar
}

fn keys(items: &[Item]) -> Vec<String> {
    items.iter().map(|i| i.key().to_string()).collect()
}

fn is_strictly_sorted(items: &[Item]) -> bool {
    items.windows(2).all(|w| w[0].key() < w[1].key())
}

/// Everything a host can observe without painting.
fn snapshot(bar: &Bar) -> (Vec<String>, Vec<String>, Vec<String>, f32, usize) {
    (
        keys(bar.left()),
        keys(bar.right()),
        keys(bar.hidden()),
        bar.min_width(),
        bar.len(),
    )
}

fn assert_partitioned(bar: &Bar) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for item in bar.left().iter().chain(bar.right()).chain(bar.hidden()) {
        prop_assert!(seen.insert(item.key().to_string()), "key {} appears twice", item.key());
    }
    prop_assert_eq!(seen.len(), bar.len());
    Ok(())
}

proptest! {
    /// Property: both sides stay sorted after every add, whatever the order
    #[test]
    fn prop_sides_sorted_after_every_add(mut items in arb_items(), seed in any::<u64>()) {
        // Shuffle deterministically so insertion order differs from key order.
        let n = items.len().max(1) as u64;
        items.rotate_left((seed % n) as usize);
        items.reverse();

        let mut bar = Bar::new(1.0, numeric);
        for (key, width, alignment) in &items {
            bar.add_item(key, &width.to_string(), alignment).unwrap();
            prop_assert!(is_strictly_sorted(bar.left()));
            prop_assert!(is_strictly_sorted(bar.right()));
        }
        assert_partitioned(&bar)?;
    }

    /// Property: re-adding any known key (visible or hidden) changes nothing
    #[test]
    fn prop_duplicate_add_is_noop(items in arb_items(), width in 0u32..400, pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let mut bar = build(&items, 3.0);
        bar.on_available_width_changed(width as f32);

        let before = snapshot(&bar);
        let (key, _, alignment) = &items[pick.index(items.len())];
        let other = if *alignment == "left" { "right" } else { "left" };
        bar.add_item(key, "999", other).unwrap();

        prop_assert_eq!(snapshot(&bar), before);
    }

    /// Property: removing a visible item drops min_width by its width plus
    /// one gap, or by its width alone when it was the last one
    #[test]
    fn prop_remove_decreases_min_width(items in arb_items(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let padding = 4.0;
        let mut bar = build(&items, padding);

        let (key, width, _) = &items[pick.index(items.len())];
        let before = bar.min_width();
        let visible = bar.left().len() + bar.right().len();
        bar.remove_item(key);

        let expected = if visible == 1 {
            *width as f32
        } else {
            *width as f32 + padding
        };
        prop_assert!((before - bar.min_width() - expected).abs() < 1e-3);
        assert_partitioned(&bar)?;
    }

    /// Property: shrinking keeps balanced sides balanced, never grows an
    /// existing imbalance, and always leaves the visible items fitting
    #[test]
    fn prop_hide_keeps_sides_balanced(
        items in arb_items(),
        mut widths in prop::collection::vec(0u32..600, 1..12),
    ) {
        widths.sort_unstable_by(|a, b| b.cmp(a));
        widths.dedup();

        let mut bar = build(&items, 2.0);
        let imbalance = |bar: &Bar| (bar.left().len() as i64 - bar.right().len() as i64).abs();
        let mut bound = imbalance(&bar).max(1);

        for width in widths {
            bar.on_available_width_changed(width as f32);
            let now = imbalance(&bar);
            prop_assert!(now <= bound, "imbalance grew from {} to {}", bound, now);
            bound = now.max(1);
            prop_assert!(bar.min_width() <= width as f32);
            prop_assert!(bar.left().iter().chain(bar.right()).all(|i| !bar.is_hidden(i.key())));
            assert_partitioned(&bar)?;
        }
    }

    /// Property: add then remove restores the previous observable state
    #[test]
    fn prop_add_remove_round_trip(items in arb_items(), width in 0u32..40, right in any::<bool>()) {
        let mut bar = build(&items, 2.0);
        let before = snapshot(&bar);

        // Uppercase never collides with the generated keys.
        let alignment = if right { "right" } else { "left" };
        bar.add_item("NEW", &width.to_string(), alignment).unwrap();
        prop_assert!(bar.is_visible("NEW"));
        bar.remove_item("NEW");

        prop_assert_eq!(snapshot(&bar), before);
    }
}
