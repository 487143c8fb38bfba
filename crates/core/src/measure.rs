use unicode_width::UnicodeWidthStr;

/// Supplies the rendered width of a piece of item text.
///
/// The bar never looks at fonts itself; whoever draws the items also
/// measures them.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f32;
}

/// One width unit per terminal column.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasure;

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> f32 {
        text.width() as f32
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}
