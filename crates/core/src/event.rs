/// All messages (events) a host can feed into the bar.
///
/// Sources:
/// - stdin command reader   → `AddItem`, `UpdateItem`, `RemoveItem`, `WidthChanged`,
///                            `StyleChanged`, `Redraw`, `Shutdown`
/// - Config watcher task    → `ConfigReloaded`
/// - Timer                  → `Tick`
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ── Registration ──────────────────────────────────────────────────────────
    /// Register a new item.  `alignment` is the raw token; it is validated
    /// when the item is built.
    AddItem {
        key:       String,
        value:     String,
        alignment: String,
    },
    /// Replace the display value of an existing item.
    UpdateItem { key: String, value: String },
    /// Drop an item for good (visible or hidden).
    RemoveItem(String),

    // ── Surface ───────────────────────────────────────────────────────────────
    /// Host surface width changed (pins the width; disables terminal polling).
    WidthChanged(f32),
    /// New background / text colors as hex strings.
    StyleChanged { background: String, text: String },
    /// Repaint even if nothing is dirty.
    Redraw,

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,

    // ── Internal ──────────────────────────────────────────────────────────────
    /// Timer tick — refreshes the clock item and polls the terminal width.
    Tick,
    /// Graceful shutdown requested.
    Shutdown,
}
