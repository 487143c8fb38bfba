//! Layout and drawing engine for the status bar.
//!
//! [`Bar`] owns every registered item and decides which of them fit:
//! - ordering: each side is kept sorted by key
//! - placement: explicit offsets from the anchor edge, see [`Layout`]
//! - overflow: items are hidden one by one as the width shrinks, keeping the
//!   two sides balanced, and brought back (with hysteresis) as it grows
//!
//! Drawing goes through the [`Canvas`] trait so any backend can consume a
//! finished layout.

pub mod bar;
pub mod layout;
pub mod paint;

pub use bar::{Bar, DEFAULT_MIN_WIDTH_DIFFERENCE};
pub use layout::{Layout, Placement};
pub use paint::Canvas;
