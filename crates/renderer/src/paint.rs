use crate::layout::Placement;
use bar_theme::Color;

/// Drawing backend for a laid-out bar.
///
/// [`Bar::paint`](crate::Bar::paint) calls these in a fixed order:
/// background, bottom border, then one `draw_item` per visible item.
pub trait Canvas {
    fn fill_background(&mut self, width: f32, color: Color);
    fn stroke_bottom_border(&mut self, width: f32, color: Color);
    fn draw_item(&mut self, placement: &Placement, text: &str, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bar;

    #[derive(Debug, PartialEq)]
    enum Op {
        Background(f32),
        Border(f32),
        Item(String, f32, String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Canvas for Recorder {
        fn fill_background(&mut self, width: f32, _color: Color) {
            self.0.push(Op::Background(width));
        }

        fn stroke_bottom_border(&mut self, width: f32, _color: Color) {
            self.0.push(Op::Border(width));
        }

        fn draw_item(&mut self, placement: &Placement, text: &str, _color: Color) {
            self.0.push(Op::Item(placement.key.clone(), placement.x, text.to_string()));
        }
    }

    fn numeric(text: &str) -> f32 {
        text.parse().unwrap_or(0.0)
    }

    #[test]
    fn paints_background_border_then_items() {
        let mut bar = Bar::new(5.0, numeric);
        bar.add_item("b", "10", "right").unwrap();
        bar.add_item("a", "10", "left").unwrap();
        bar.on_available_width_changed(100.0);

        let mut canvas = Recorder::default();
        bar.paint(&mut canvas);

        assert_eq!(
            canvas.0,
            vec![
                Op::Background(100.0),
                Op::Border(100.0),
                Op::Item("a".into(), 0.0, "10".into()),
                Op::Item("b".into(), 90.0, "10".into()),
            ]
        );
        assert!(!bar.needs_redraw());
    }

    #[test]
    fn style_change_only_requests_redraw() {
        let mut bar = Bar::new(5.0, numeric);
        bar.add_item("a", "10", "left").unwrap();
        bar.paint(&mut Recorder::default());
        assert!(!bar.needs_layout());

        bar.set_style(Color::WHITE, Color::DARK);
        assert!(bar.needs_redraw());
        assert!(!bar.needs_layout());
        assert_eq!(bar.style().background, Color::WHITE);
        assert_eq!(bar.style().text, Color::DARK);
    }
}
