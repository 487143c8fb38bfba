use bar_renderer::{Canvas, Placement};
use bar_theme::Color;
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Renders one bar frame as two terminal rows: the items, then a
/// `─` border underneath.
///
/// Placements are snapped to whole columns.  Anything falling outside
/// `[0, columns)` is clipped.
#[derive(Debug, Clone)]
pub struct TermCanvas {
    /// `None` marks the second column of a wide glyph.
    cells:      Vec<Option<char>>,
    background: Color,
    foreground: Color,
    border:     Option<Color>,
}

impl Default for TermCanvas {
    fn default() -> Self {
        Self {
            cells:      Vec::new(),
            background: Color::TRANSPARENT,
            foreground: Color::WHITE,
            border:     None,
        }
    }
}

impl TermCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    /// The item row without any colour codes.
    pub fn text(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Rows this frame occupies on screen.
    pub fn rows(&self) -> u16 {
        if self.border.is_some() { 2 } else { 1 }
    }

    /// Write the frame with ANSI colours, first moving back over the
    /// `previous_rows` rows of the last frame so the bar repaints in place.
    /// Returns the number of rows written.
    pub fn write_to(&self, out: &mut impl Write, previous_rows: u16) -> io::Result<u16> {
        // `MoveUp(0)` still moves one row on most terminals.
        if previous_rows > 0 {
            queue!(out, MoveUp(previous_rows))?;
        }
        queue!(
            out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetBackgroundColor(to_term(self.background)),
            SetForegroundColor(to_term(self.foreground)),
            Print(self.text()),
            ResetColor,
            Print("\r\n"),
        )?;
        if let Some(border) = self.border {
            queue!(
                out,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                SetBackgroundColor(to_term(self.background)),
                SetForegroundColor(to_term(border)),
                Print("─".repeat(self.columns())),
                ResetColor,
                Print("\r\n"),
            )?;
        }
        out.flush()?;
        Ok(self.rows())
    }
}

impl Canvas for TermCanvas {
    fn fill_background(&mut self, width: f32, color: Color) {
        self.cells = vec![Some(' '); columns(width)];
        self.background = color;
    }

    fn stroke_bottom_border(&mut self, _width: f32, color: Color) {
        self.border = Some(color);
    }

    fn draw_item(&mut self, placement: &Placement, text: &str, color: Color) {
        self.foreground = color;

        let mut col = placement.x.round() as i64;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i64;
            if w == 0 {
                continue;
            }
            if col >= 0 && col + w <= self.cells.len() as i64 {
                let at = col as usize;
                self.cells[at] = Some(ch);
                for cell in &mut self.cells[at + 1..at + w as usize] {
                    *cell = None;
                }
            }
            col += w;
        }
    }
}

fn columns(width: f32) -> usize {
    if width.is_finite() && width > 0.0 {
        width.round() as usize
    } else {
        0
    }
}

fn to_term(color: Color) -> crossterm::style::Color {
    let (r, g, b) = color.to_rgb8();
    crossterm::style::Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bar_core::MonospaceMeasure;
    use bar_renderer::Bar;

    fn painted(bar: &mut Bar) -> TermCanvas {
        let mut canvas = TermCanvas::new();
        bar.paint(&mut canvas);
        canvas
    }

    #[test]
    fn places_left_and_right_groups() {
        let mut bar = Bar::new(1.0, MonospaceMeasure);
        bar.add_item("a", "cpu", "left").unwrap();
        bar.add_item("b", "mem", "left").unwrap();
        bar.add_item("z", "12:00", "right").unwrap();
        bar.on_available_width_changed(20.0);

        let canvas = painted(&mut bar);
        assert_eq!(canvas.columns(), 20);
        assert_eq!(canvas.text(), "cpu mem        12:00");
    }

    #[test]
    fn clips_items_past_the_edge() {
        let mut bar = Bar::new(0.0, MonospaceMeasure);
        bar.add_item("a", "abcdef", "right").unwrap();
        // Restore tolerance lets the item overhang the left edge by a column.
        bar.on_available_width_changed(0.0);
        bar.on_available_width_changed(5.0);
        assert!(bar.is_visible("a"));

        assert_eq!(painted(&mut bar).text(), "bcdef");
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        let mut bar = Bar::new(1.0, MonospaceMeasure);
        bar.add_item("a", "日本", "left").unwrap();
        bar.on_available_width_changed(6.0);

        let canvas = painted(&mut bar);
        assert_eq!(canvas.text(), "日本  ");
    }

    #[test]
    fn writes_border_row() {
        let mut bar = Bar::new(1.0, MonospaceMeasure);
        bar.add_item("a", "x", "left").unwrap();
        bar.on_available_width_changed(3.0);

        let mut out = Vec::new();
        let rows = painted(&mut bar).write_to(&mut out, 0).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(rows, 2);
        assert!(out.contains("x  "));
        assert!(out.contains("───"));
        // First frame: nothing to move back over.
        assert!(!out.contains("\x1b[2A"));
    }

    #[test]
    fn repaints_over_previous_frame() {
        let mut bar = Bar::new(1.0, MonospaceMeasure);
        bar.add_item("a", "x", "left").unwrap();
        bar.on_available_width_changed(3.0);

        let mut out = Vec::new();
        painted(&mut bar).write_to(&mut out, 2).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("\x1b[2A"), "frame should start by moving up: {out:?}");
        assert_eq!(out.matches("\x1b[2K").count(), 2);
    }
}
