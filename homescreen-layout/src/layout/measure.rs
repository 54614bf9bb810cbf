//! Measurement seam between the layout engine and the rendering surface.
//!
//! The engine never looks inside a child. It only asks for the child's
//! intrinsic size at a proposed width, where `None` means the parent
//! imposes no width limit.

use unicode_width::UnicodeWidthChar;

use crate::primitives::Size;

use super::metrics::{Padding, BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT};

/// Something that can report its intrinsic size for a proposed width.
pub trait Measure {
    fn measure(&self, proposed_width: Option<f32>) -> Size;
}

/// A fixed intrinsic size, independent of the proposal.
impl Measure for Size {
    #[inline]
    fn measure(&self, _proposed_width: Option<f32>) -> Size {
        *self
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    #[inline]
    fn measure(&self, proposed_width: Option<f32>) -> Size {
        (**self).measure(proposed_width)
    }
}

impl<M: Measure + ?Sized> Measure for Box<M> {
    #[inline]
    fn measure(&self, proposed_width: Option<f32>) -> Size {
        (**self).measure(proposed_width)
    }
}

/// Adapts a closure into a [`Measure`] implementation.
///
/// ```
/// use homescreen_layout::{Measure, MeasureFn, Size};
///
/// let square = MeasureFn(|w: Option<f32>| {
///     let side = w.unwrap_or(100.0).min(100.0);
///     Size::new(side, side)
/// });
/// assert_eq!(square.measure(Some(40.0)), Size::new(40.0, 40.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MeasureFn<F>(pub F);

impl<F> Measure for MeasureFn<F>
where
    F: Fn(Option<f32>) -> Size,
{
    #[inline]
    fn measure(&self, proposed_width: Option<f32>) -> Size {
        (self.0)(proposed_width)
    }
}

// =========================================================================
// TextBlock
// =========================================================================

/// Display width in cell units (1 for Latin, 2 for CJK, 0 for combining marks).
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

/// A block of text measured with monospace metrics and greedy word wrap.
///
/// Explicit newlines always start a new line. Words wider than the
/// available width are broken between characters.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    /// Font size (if different from default).
    pub font_size: Option<f32>,
    pub padding: Padding,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: None,
            padding: Padding::default(),
        }
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Character width and line height scaled for the font size.
    fn metrics(&self) -> (f32, f32) {
        match self.font_size {
            Some(fs) => {
                let scale = fs / BASE_FONT_SIZE;
                (CHAR_WIDTH * scale, LINE_HEIGHT * scale)
            }
            None => (CHAR_WIDTH, LINE_HEIGHT),
        }
    }

    /// Wrap into lines of at most `max_cells` cells.
    ///
    /// Returns the line count and the widest line in cells.
    fn wrap(&self, max_cells: f32) -> (usize, f32) {
        let mut lines = 0usize;
        let mut widest: f32 = 0.0;

        for paragraph in self.text.split('\n') {
            lines += 1;
            let mut line: f32 = 0.0;

            for word in paragraph.split_whitespace() {
                let word_width = unicode_display_width(word);
                let needed = if line > 0.0 { line + 1.0 + word_width } else { word_width };

                if needed <= max_cells {
                    line = needed;
                } else if word_width <= max_cells {
                    widest = widest.max(line);
                    lines += 1;
                    line = word_width;
                } else {
                    // Hard break a word that cannot fit on any line
                    if line > 0.0 {
                        widest = widest.max(line);
                        lines += 1;
                        line = 0.0;
                    }
                    for ch in word.chars() {
                        let cw = UnicodeWidthChar::width(ch).unwrap_or(0) as f32;
                        if line > 0.0 && line + cw > max_cells {
                            widest = widest.max(line);
                            lines += 1;
                            line = 0.0;
                        }
                        line += cw;
                    }
                }
            }
            widest = widest.max(line);
        }

        (lines, widest)
    }
}

impl Measure for TextBlock {
    fn measure(&self, proposed_width: Option<f32>) -> Size {
        let (char_width, line_height) = self.metrics();
        let max_cells = match proposed_width {
            Some(w) if w.is_finite() => {
                // Epsilon absorbs f32 error when the width is an exact cell multiple
                ((w - self.padding.horizontal()).max(0.0) / char_width + 1e-4).floor()
            }
            _ => f32::INFINITY,
        };

        let (lines, widest) = self.wrap(max_cells);
        let width = widest * char_width + self.padding.horizontal();
        let width = match proposed_width {
            Some(w) if w.is_finite() => width.min(w.max(0.0)),
            _ => width,
        };
        Size::new(width, lines as f32 * line_height + self.padding.vertical())
    }
}
