//! Text measurement boundary between the paginator and the host font stack.

/// Width and height of a rendered string, in the host's screen units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Measures rendered text for the paginator.
///
/// Implemented by the host over its font metrics; the measurement must be
/// multi-line aware (embedded newlines add line height, a trailing newline
/// counts as an extra line, matching common sprite-font behavior).
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> TextSize;
}

/// Deterministic measurer with a fixed advance per character.
///
/// Stands in for real font metrics in headless hosts and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvanceMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl FixedAdvanceMeasurer {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str) -> TextSize {
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        TextSize {
            width: widest as f32 * self.char_width,
            height: lines as f32 * self.line_height,
        }
    }
}
