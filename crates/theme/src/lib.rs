pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::BarStyle;

use bar_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:   Color,
    pub foreground:   Color,
    pub border_color: Color,
    /// `strftime` format string for the clock item.
    pub clock_format: String,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background:   Color::from_hex(&cfg.background).unwrap_or(Color::DARK),
            foreground:   Color::from_hex(&cfg.foreground).unwrap_or(Color::WHITE),
            border_color: Color::from_hex(&cfg.border_color).unwrap_or(Color::PURPLE),
            clock_format: cfg.clock_format.clone(),
        }
    }

    /// The initial style a bar starts with.
    pub fn bar_style(&self) -> BarStyle {
        BarStyle {
            background: self.background,
            text:       self.foreground,
            border:     self.border_color,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
