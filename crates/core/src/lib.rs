pub mod error;
pub mod event;
pub mod item;
pub mod measure;

pub use error::{BarError, Result};
pub use event::Message;
pub use item::{Alignment, Item};
pub use measure::{MonospaceMeasure, TextMeasure};
