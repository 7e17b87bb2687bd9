//! Text measurement.
//!
//! The layout engine only needs three numbers from text: the height of one
//! line in a style, the size of a run wrapped at a width, and the size of a
//! run set on a single line. `TextMeasurer` abstracts over whatever shaping
//! backend the host has.

use unicode_width::UnicodeWidthChar;

use super::geometry::Size;
use crate::model::{StyledText, TextStyle};

/// Measures styled text runs.
///
/// # Contract
/// - MUST be deterministic (same inputs, same output)
/// - `measure` MUST NOT report a taller size for a wider `width`
/// - An empty run measures `Size::ZERO`
pub trait TextMeasurer {
    /// Height of a single line set in `style`.
    fn line_height(&self, style: &TextStyle) -> f64;

    /// Size of `text` wrapped at `width`, with no line limit.
    fn measure(&self, text: &StyledText, width: f64) -> Size;

    /// Size of `text` set on one line, independent of any width.
    fn measure_single_line(&self, text: &StyledText) -> Size;
}

/// Measurer with a fixed advance per terminal cell.
///
/// Every glyph advances `font.size * advance_ratio` times its display width
/// (0, 1 or 2 cells per `unicode-width`). Lines wrap greedily at spaces;
/// explicit newlines are hard breaks; a word wider than the column is broken
/// between glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    advance_ratio: f64,
}

impl FixedAdvanceMeasurer {
    /// Typical ratio of glyph advance to point size for proportional UI fonts.
    pub const DEFAULT_ADVANCE_RATIO: f64 = 0.5;

    /// Measurer advancing `font.size * advance_ratio` per cell.
    pub fn new(advance_ratio: f64) -> Self {
        Self { advance_ratio }
    }

    fn advance(&self, style: &TextStyle) -> f64 {
        style.font.size * self.advance_ratio
    }

    fn glyph_width(&self, ch: char, advance: f64) -> f64 {
        ch.width().unwrap_or(0) as f64 * advance
    }

    fn word_width(&self, word: &str, advance: f64) -> f64 {
        word.chars().map(|ch| self.glyph_width(ch, advance)).sum()
    }

    /// Wrap one paragraph. Returns (line count, widest line).
    fn wrap_paragraph(&self, paragraph: &str, width: f64, advance: f64) -> (usize, f64) {
        let space = self.glyph_width(' ', advance);
        let mut lines = 1usize;
        let mut line_width = 0.0f64;
        let mut widest = 0.0f64;

        for word in paragraph.split_whitespace() {
            let word_width = self.word_width(word, advance);

            if line_width > 0.0 {
                if line_width + space + word_width <= width {
                    line_width += space + word_width;
                    continue;
                }
                widest = widest.max(line_width);
                lines += 1;
                line_width = 0.0;
            }

            if word_width <= width {
                line_width = word_width;
                continue;
            }

            // Word alone overflows the column: break between glyphs.
            for ch in word.chars() {
                let glyph = self.glyph_width(ch, advance);
                if line_width > 0.0 && line_width + glyph > width {
                    widest = widest.max(line_width);
                    lines += 1;
                    line_width = 0.0;
                }
                line_width += glyph;
            }
        }

        (lines, widest.max(line_width))
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE_RATIO)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn line_height(&self, style: &TextStyle) -> f64 {
        style.font.line_height()
    }

    fn measure(&self, text: &StyledText, width: f64) -> Size {
        if text.text().is_empty() {
            return Size::ZERO;
        }

        let style = text.style();
        let advance = self.advance(style);
        let mut lines = 0usize;
        let mut widest = 0.0f64;

        for paragraph in text.text().split('\n') {
            let (paragraph_lines, paragraph_width) = self.wrap_paragraph(paragraph, width, advance);
            lines += paragraph_lines;
            widest = widest.max(paragraph_width);
        }

        Size::new(widest, lines as f64 * self.line_height(style))
    }

    fn measure_single_line(&self, text: &StyledText) -> Size {
        if text.text().is_empty() {
            return Size::ZERO;
        }

        let style = text.style();
        let advance = self.advance(style);
        let width = text
            .text()
            .chars()
            .filter(|ch| *ch != '\n' && *ch != '\r')
            .map(|ch| self.glyph_width(ch, advance))
            .sum();

        Size::new(width, self.line_height(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Font};

    // 10pt font, ratio 0.5 => 5pt per cell; line height 10 * 1.5 = 15.
    const STYLE: TextStyle = TextStyle::new(Font::new(10.0, 1.5), Color::BLACK);

    fn run(text: &str) -> StyledText {
        StyledText::new(text, STYLE)
    }

    fn measurer() -> FixedAdvanceMeasurer {
        FixedAdvanceMeasurer::default()
    }

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(measurer().measure(&run(""), 100.0), Size::ZERO);
        assert_eq!(measurer().measure_single_line(&run("")), Size::ZERO);
    }

    #[test]
    fn short_text_fits_one_line() {
        let size = measurer().measure(&run("abc def"), 100.0);
        assert_eq!(size, Size::new(35.0, 15.0));
    }

    #[test]
    fn wraps_at_word_boundary() {
        // "abcd" = 20, "abcd efgh" = 45 > 40
        let size = measurer().measure(&run("abcd efgh"), 40.0);
        assert_eq!(size.height, 30.0);
        assert_eq!(size.width, 20.0);
    }

    #[test]
    fn explicit_newlines_are_hard_breaks() {
        let size = measurer().measure(&run("a\n\nb"), 100.0);
        assert_eq!(size.height, 45.0, "Empty middle paragraph still takes a line");
    }

    #[test]
    fn long_word_breaks_between_glyphs() {
        // 10 glyphs * 5 = 50 at width 20 => 4 per line => 3 lines
        let size = measurer().measure(&run("abcdefghij"), 20.0);
        assert_eq!(size.height, 45.0);
        assert_eq!(size.width, 20.0);
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        let size = measurer().measure_single_line(&run("日本"));
        assert_eq!(size.width, 20.0);
    }

    #[test]
    fn single_line_ignores_width_and_newlines() {
        let size = measurer().measure_single_line(&run("Show more..."));
        assert_eq!(size, Size::new(60.0, 15.0));
    }

    #[test]
    fn line_height_comes_from_font() {
        assert_eq!(measurer().line_height(&STYLE), 15.0);
    }

    #[test]
    fn narrower_width_never_fewer_lines() {
        let text = run("the quick brown fox jumps over the lazy dog again and again");
        let mut previous = f64::INFINITY;
        for width in (30..=300).step_by(10) {
            let height = measurer().measure(&text, width as f64).height;
            assert!(height <= previous, "height grew at width {}", width);
            previous = height;
        }
    }

    #[test]
    fn measurement_is_deterministic() {
        let text = run("repeatable measurement of a fairly long sentence");
        let a = measurer().measure(&text, 77.0);
        let b = measurer().measure(&text, 77.0);
        assert_eq!(a, b);
    }
}
