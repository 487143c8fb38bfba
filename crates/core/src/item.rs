use crate::{
    error::{BarError, Result},
    measure::TextMeasure,
};
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// Which edge of the bar an item is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left  => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Alignment {
    type Err = BarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left"  => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _       => Err(BarError::InvalidAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single key/value unit shown on one side of the bar.
///
/// `key` and `alignment` are fixed at construction.  The value can change,
/// and every change is remeasured so `width` always matches the text.
/// Two items are equal when their keys are equal.
#[derive(Debug, Clone)]
pub struct Item {
    key:       String,
    value:     String,
    alignment: Alignment,
    width:     f32,
}

impl Item {
    /// Build an item from a raw alignment token (`"left"` / `"right"`).
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        alignment: &str,
        measure: &dyn TextMeasure,
    ) -> Result<Self> {
        let alignment = alignment.parse::<Alignment>()?;
        Ok(Self::with_alignment(key, value, alignment, measure))
    }

    pub fn with_alignment(
        key: impl Into<String>,
        value: impl Into<String>,
        alignment: Alignment,
        measure: &dyn TextMeasure,
    ) -> Self {
        let value = value.into();
        let width = clamp_width(measure.measure(&value));
        Self {
            key: key.into(),
            value,
            alignment,
            width,
        }
    }

    /// Replace the display text and remeasure it.
    ///
    /// Returns `true` when the measured width changed.
    pub fn set_value(&mut self, value: impl Into<String>, measure: &dyn TextMeasure) -> bool {
        self.value = value.into();
        let width = clamp_width(measure.measure(&self.value));
        let changed = width != self.width;
        self.width = width;
        changed
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

// NaN and negative measurements both collapse to zero.
fn clamp_width(width: f32) -> f32 {
    if width.is_nan() { 0.0 } else { width.max(0.0) }
}
