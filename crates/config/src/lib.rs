pub mod schema;
pub mod watcher;

pub use schema::{BarConfig, GlobalConfig, ItemConfig, ThemeConfig};
pub use watcher::ConfigWatcher;

use bar_core::{BarError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `BarConfig::default()` if
/// the file doesn't exist so the bar always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<BarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(BarConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| BarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate a config document.
pub fn parse(raw: &str) -> Result<BarConfig> {
    let cfg: BarConfig =
        toml::from_str(raw).map_err(|e| BarError::Config(format!("TOML parse error: {e}")))?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &BarConfig) -> Result<()> {
    let g = &cfg.global;
    let negative = |v: f32| v.is_nan() || v < 0.0;
    if negative(g.padding) {
        return Err(BarError::Config(format!("padding must be >= 0, got {}", g.padding)));
    }
    if negative(g.min_width_difference) {
        return Err(BarError::Config(format!(
            "min_width_difference must be >= 0, got {}",
            g.min_width_difference
        )));
    }
    if negative(g.width) {
        return Err(BarError::Config(format!("width must be >= 0, got {}", g.width)));
    }
    if g.tick_ms == 0 {
        return Err(BarError::Config("tick_ms must be > 0".into()));
    }
    Ok(())
}

/// Return the config path: `$BAR_CONFIG` if set, otherwise
/// `bar/bar.toml` under `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    if let Ok(explicit) = std::env::var("BAR_CONFIG") {
        return PathBuf::from(explicit);
    }
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("bar").join("bar.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load("/definitely/not/here/bar.toml").unwrap();
        assert!(cfg.items.is_empty());
    }

    #[test]
    fn rejects_negative_padding() {
        let err = parse("[global]\npadding = -1.0\n").unwrap_err();
        assert!(matches!(err, BarError::Config(_)));
    }

    #[test]
    fn rejects_zero_tick() {
        assert!(parse("[global]\ntick_ms = 0\n").is_err());
    }

    #[test]
    fn reports_syntax_errors() {
        let err = parse("[global\n").unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
