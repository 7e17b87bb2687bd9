//! Styled text runs.
//!
//! A `StyledText` is a single run of text with one style. The layout engine
//! never looks at colors; it only asks a `TextMeasurer` for metrics of the
//! run's font.

/// Font metrics needed for measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f64,
    /// Line height as a multiple of the point size.
    pub line_height_multiple: f64,
}

impl Font {
    /// Create a font with the given size and line height multiple.
    pub const fn new(size: f64, line_height_multiple: f64) -> Self {
        Self {
            size,
            line_height_multiple,
        }
    }

    /// Height of a single line set in this font.
    pub fn line_height(&self) -> f64 {
        self.size * self.line_height_multiple
    }
}

/// RGBA color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Primary text.
    pub const BLACK: Self = Self(0x000000FF);
    /// Secondary text.
    pub const GRAY: Self = Self(0x8E8E93FF);
    /// Tappable text.
    pub const ACCENT: Self = Self(0x007AFFFF);
}

/// Style of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Face size and line height.
    pub font: Font,
    /// Foreground color.
    pub color: Color,
}

impl TextStyle {
    /// Style from a font and color.
    pub const fn new(font: Font, color: Color) -> Self {
        Self { font, color }
    }
}

/// A run of text rendered in a single style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    text: String,
    style: TextStyle,
}

impl StyledText {
    /// Create a styled run.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Style of the run.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// True when nothing is left after trimming whitespace and newlines.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
