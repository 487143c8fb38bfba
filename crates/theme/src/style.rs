use crate::colors::Color;

/// Colours applied uniformly to the bar surface and every item on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub background: Color,
    /// Item text colour.
    pub text:       Color,
    /// Bottom border line.
    pub border:     Color,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            background: Color::DARK,
            text:       Color::WHITE,
            border:     Color::PURPLE,
        }
    }
}
