//! Geometry value types in points.

/// A point in row-local coordinates. Origin is the row's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Distance from the left edge.
    pub x: f64,
    /// Distance from the top edge.
    pub y: f64,
}

impl Point {
    /// Point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Empty size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Size of `width` by `height`.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self::new(Point::new(0.0, 0.0), Size::ZERO);

    /// Rectangle at `origin` with `size`.
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// True for a zero-area rectangle.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Check if `point` lies inside (edges on the min side included).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

/// Insets from the edges of a row to its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f64,
    /// Left inset.
    pub left: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Right inset.
    pub right: f64,
}

impl EdgeInsets {
    /// Insets in top, left, bottom, right order.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Sum of left and right insets.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom insets.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(Point::new(12.0, 9.0), Size::new(36.0, 36.0));
        assert_eq!(rect.min_x(), 12.0);
        assert_eq!(rect.min_y(), 9.0);
        assert_eq!(rect.max_x(), 48.0);
        assert_eq!(rect.max_y(), 45.0);
    }

    #[test]
    fn zero_rect_is_empty() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(Point::new(5.0, 5.0), Size::new(10.0, 0.0)).is_empty());
        assert!(!Rect::new(Point::default(), Size::new(1.0, 1.0)).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn insets_sums() {
        let insets = EdgeInsets::new(9.0, 12.0, 9.0, 12.0);
        assert_eq!(insets.horizontal(), 24.0);
        assert_eq!(insets.vertical(), 18.0);
    }
}
