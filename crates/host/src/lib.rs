//! Terminal host for `bar`.
//!
//! Owns the event loop and wires together everything that feeds the bar:
//! - stdin command reader (add / set / remove / width / style / redraw / quit)
//! - config file watcher (live reload by replaying `[[items]]`)
//! - tick timer (clock item, terminal width polling)
//!
//! Frames go to stdout; logs go to stderr.

pub mod app;
pub mod canvas;
pub mod command;

pub use app::{build_bar, Flow, Host, CLOCK_KEY};
pub use canvas::TermCanvas;

use bar_config::{default_path, load as load_config, BarConfig, ConfigWatcher};
use bar_core::{Message, Result};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

/// Run the bar until `quit` or Ctrl-C.
pub async fn run() -> Result<()> {
    let path = default_path();
    let config = load_config(&path).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        BarConfig::default()
    });
    let tick = Duration::from_millis(config.global.tick_ms);

    let mut host = Host::new(config);
    let (watcher, mut reloads) = ConfigWatcher::spawn(&path);
    info!("Config: {}", watcher.path().display());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut ticker = tokio::time::interval(tick);
    let mut stdout = std::io::stdout();
    let mut painted_rows = 0u16;

    // Created once so a Ctrl-C arriving mid-`handle` is still seen.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let msg = tokio::select! {
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => match command::parse(&line) {
                    Ok(Some(msg)) => msg,
                    Ok(None) => continue,
                    Err(e) => {
                        warn!("{e}");
                        continue;
                    }
                },
                Ok(None) => {
                    info!("stdin closed; running until Ctrl-C");
                    stdin_open = false;
                    continue;
                }
                Err(e) => {
                    error!("Cannot read stdin: {e}");
                    stdin_open = false;
                    continue;
                }
            },
            _ = ticker.tick() => Message::Tick,
            Some(()) = reloads.recv() => Message::ConfigReloaded,
            _ = &mut ctrl_c => Message::Shutdown,
        };

        if host.handle(msg) == Flow::Quit {
            info!("Shutting down");
            break;
        }

        // Several messages may have queued up; they share one layout pass here.
        if let Some(rows) = host.paint(&mut stdout, painted_rows)? {
            painted_rows = rows;
        }
    }

    Ok(())
}
