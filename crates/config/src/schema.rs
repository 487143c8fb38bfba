use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `bar.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Global layout settings.
    pub global: GlobalConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
    /// Items registered at startup, replayed in file order.
    pub items: Vec<ItemConfig>,
}

/// Global bar settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Spacing between neighbouring items, in width units.
    pub padding: f32,
    /// Slack a hidden item needs before it is brought back.
    pub min_width_difference: f32,
    /// Fixed bar width.  `0` follows the terminal width.
    pub width: f32,
    /// Show a clock item that refreshes every tick.
    pub clock: bool,
    /// Side the clock sits on (`"left"` / `"right"`).
    pub clock_side: String,
    /// Tick interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            padding:              2.0,
            min_width_difference: 2.0,
            width:                0.0,
            clock:                true,
            clock_side:           "right".to_string(),
            tick_ms:              1_000,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Bar background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Item text color.
    pub foreground: String,
    /// Bottom border color.
    pub border_color: String,
    /// `strftime` format string for the clock item.
    pub clock_format: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:   "#1e1e2e".to_string(), // Catppuccin Mocha — base
            foreground:   "#cdd6f4".to_string(), // Catppuccin Mocha — text
            border_color: "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            clock_format: "%H:%M:%S".to_string(),
        }
    }
}

/// A single `[[items]]` entry.
///
/// `alignment` stays a raw string so a bad token is reported when the item
/// is built instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default = "default_alignment")]
    pub alignment: String,
}

impl ItemConfig {
    pub fn new(key: impl Into<String>, value: impl Into<String>, alignment: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            alignment: alignment.into(),
        }
    }
}

fn default_alignment() -> String {
    "left".to_string()
}
