use crate::canvas::TermCanvas;
use bar_config::{default_path, load as load_config, BarConfig};
use bar_core::{Message, MonospaceMeasure};
use bar_renderer::Bar;
use bar_theme::{Color, Theme};
use chrono::{DateTime, Local};
use std::{fmt::Write as _, io};
use tracing::{debug, info, warn};

/// Key the clock item is registered under.
pub const CLOCK_KEY: &str = "clock";

/// Whether the event loop should keep going after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A fixed bar width and where it came from.  A `width` command outlives
/// config reloads; a `global.width` pin goes away when the config drops it.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pin {
    Config(f32),
    Command(f32),
}

impl Pin {
    fn width(self) -> f32 {
        match self {
            Self::Config(w) | Self::Command(w) => w,
        }
    }
}

/// Everything the terminal host owns: the loaded config, the compiled theme
/// and the bar built from them.
#[derive(Debug)]
pub struct Host {
    config: BarConfig,
    theme:  Theme,
    bar:    Bar,
    /// Disables terminal polling while set.
    pin: Option<Pin>,
    /// Last width handed to the bar.
    width: Option<f32>,
}

impl Host {
    pub fn new(config: BarConfig) -> Self {
        let theme = Theme::from_config(&config.theme);
        let bar = build_bar(&config, &theme, Local::now());
        let pin = (config.global.width > 0.0).then_some(Pin::Config(config.global.width));

        let mut host = Self {
            config,
            theme,
            bar,
            pin,
            width: None,
        };
        if let Some(pin) = pin {
            host.apply_width(pin.width());
        }
        host
    }

    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    pub fn handle(&mut self, msg: Message) -> Flow {
        match msg {
            Message::AddItem { key, value, alignment } => {
                if let Err(e) = self.bar.add_item(&key, &value, &alignment) {
                    warn!("Cannot add '{key}': {e}");
                }
                self.refit();
            }
            Message::UpdateItem { key, value } => {
                self.bar.update_item(&key, &value);
                self.refit();
            }
            Message::RemoveItem(key) => self.bar.remove_item(&key),
            Message::WidthChanged(width) => {
                self.pin = Some(Pin::Command(width));
                self.apply_width(width);
            }
            Message::StyleChanged { background, text } => {
                match (Color::from_hex(&background), Color::from_hex(&text)) {
                    (Some(bg), Some(fg)) => self.bar.set_style(bg, fg),
                    _ => warn!("Ignoring style change: bad colour in '{background}' / '{text}'"),
                }
            }
            Message::Redraw => self.bar.request_redraw(),
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    self.reload(cfg);
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
            Message::Tick => {
                let columns = crossterm::terminal::size().ok().map(|(cols, _)| cols);
                self.tick_at(Local::now(), columns);
            }
            Message::Shutdown => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Rebuild the bar from `config` by replaying its items, then re-apply
    /// the width the bar had before.
    pub fn reload(&mut self, config: BarConfig) {
        self.theme = Theme::from_config(&config.theme);
        self.bar = build_bar(&config, &self.theme, Local::now());
        self.pin = match self.pin {
            Some(Pin::Command(w)) => Some(Pin::Command(w)),
            _ if config.global.width > 0.0 => Some(Pin::Config(config.global.width)),
            _ => None,
        };
        self.config = config;

        // Once unpinned, the next tick picks the terminal width back up.
        if let Some(width) = self.pin.map(Pin::width).or(self.width) {
            self.width = None;
            self.apply_width(width);
        }
    }

    /// Refresh the clock and, unless the width is pinned, follow the
    /// terminal's column count.
    pub fn tick_at(&mut self, now: DateTime<Local>, terminal_columns: Option<u16>) {
        if self.config.global.clock {
            let value = format_clock(now, &self.theme.clock_format);
            let changed = self.bar.get(CLOCK_KEY).is_some_and(|item| item.value() != value);
            if changed {
                self.bar.update_item(CLOCK_KEY, &value);
                self.refit();
            }
        }

        if self.pin.is_none() {
            if let Some(cols) = terminal_columns {
                self.apply_width(f32::from(cols));
            }
        }
    }

    fn apply_width(&mut self, width: f32) {
        if self.width == Some(width) && width >= self.bar.min_width() {
            return;
        }
        debug!(width, min_width = self.bar.min_width(), "available width changed");
        self.width = Some(width);
        self.bar.on_available_width_changed(width);
    }

    /// Items grew or arrived without the width changing: run the hide pass
    /// again at the current width if they no longer fit.
    fn refit(&mut self) {
        if let Some(width) = self.width {
            if width < self.bar.min_width() {
                debug!(width, min_width = self.bar.min_width(), "items overflow current width");
                self.bar.on_available_width_changed(width);
            }
        }
    }

    /// Paint the bar over the last frame (`previous_rows` tall) if anything
    /// changed.  Returns the height of the new frame, or `None` when nothing
    /// was drawn.
    pub fn paint(&mut self, out: &mut impl io::Write, previous_rows: u16) -> io::Result<Option<u16>> {
        if !self.bar.needs_redraw() {
            return Ok(None);
        }
        let mut canvas = TermCanvas::new();
        self.bar.paint(&mut canvas);
        canvas.write_to(out, previous_rows).map(Some)
    }
}

/// Build a fresh bar: clock first (if enabled), then every configured item
/// in file order.  Items with a bad alignment are logged and skipped.
pub fn build_bar(config: &BarConfig, theme: &Theme, now: DateTime<Local>) -> Bar {
    let g = &config.global;
    let mut bar = Bar::new(g.padding, MonospaceMeasure)
        .with_min_width_difference(g.min_width_difference)
        .with_style(theme.bar_style());

    if g.clock {
        let value = format_clock(now, &theme.clock_format);
        if let Err(e) = bar.add_item(CLOCK_KEY, &value, &g.clock_side) {
            warn!("Clock disabled: {e}");
        }
    }

    for item in &config.items {
        if let Err(e) = bar.add_item(&item.key, &item.value, &item.alignment) {
            warn!("Skipping item '{}': {e}", item.key);
        }
    }

    bar
}

/// `strftime`-format `now`; an invalid format string falls back to `%H:%M`.
fn format_clock(now: DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format("%H:%M"));
    }
    out
}
