#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are logical pixels stored as `f64`. Layout math is done on the
//! raw values; callers snap to whole pixels with [`Rect::integral`] right
//! before handing frames to a renderer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in row coordinates (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Round both dimensions up to whole pixels.
    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.width.ceil(), self.height.ceil())
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle for column frames and border placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge. Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge. Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Check if `other` lies entirely within `self` (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Smallest rectangle with integer edges that encloses `self`.
    ///
    /// The origin is floored and the far edges are ceiled, so the result
    /// never clips the original. A rectangle with negative width or height is
    /// normalized first.
    pub fn integral(&self) -> Rect {
        let r = self.standardized();
        let x = r.x.floor();
        let y = r.y.floor();
        Rect::new(x, y, r.right().ceil() - x, r.bottom().ceil() - y)
    }

    /// Equivalent rectangle with non-negative width and height.
    pub fn standardized(&self) -> Rect {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Rect::new(x, y, width, height)
    }
}

/// Inner padding around column content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    /// No padding.
    pub const ZERO: Self = Self::all(0.0);

    /// Create insets with explicit values.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create insets with equal values on every side.
    pub const fn all(val: f64) -> Self {
        Self::new(val, val, val, val)
    }

    /// Create insets with one value for top/bottom and one for left/right.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// True when every side is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl From<f64> for Insets {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

impl From<(f64, f64)> for Insets {
    fn from((vertical, horizontal): (f64, f64)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

impl From<(f64, f64, f64, f64)> for Insets {
    fn from((top, left, bottom, right): (f64, f64, f64, f64)) -> Self {
        Self::new(top, left, bottom, right)
    }
}

#[cfg(test)]
mod tests {
    use super::{Insets, Point, Rect, Size};

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.origin(), Point::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn integral_snaps_outward() {
        let r = Rect::new(0.5, 1.25, 10.0, 3.5);
        // 0.5..10.5 -> 0..11, 1.25..4.75 -> 1..5
        assert_eq!(r.integral(), Rect::new(0.0, 1.0, 11.0, 4.0));
    }

    #[test]
    fn integral_keeps_whole_pixels() {
        let r = Rect::new(3.0, 4.0, 5.0, 6.0);
        assert_eq!(r.integral(), r);
    }

    #[test]
    fn integral_negative_origin() {
        let r = Rect::new(-0.5, -2.5, 1.0, 1.0);
        assert_eq!(r.integral(), Rect::new(-1.0, -3.0, 2.0, 2.0));
    }

    #[test]
    fn integral_normalizes_negative_size() {
        let r = Rect::new(10.0, 10.0, -4.5, -2.0);
        assert_eq!(r.integral(), Rect::new(5.0, 8.0, 5.0, 2.0));
    }

    #[test]
    fn contains_rect_inclusive_edges() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_rect(&outer));
        assert!(outer.contains_rect(&Rect::new(2.0, 2.0, 8.0, 8.0)));
        assert!(!outer.contains_rect(&Rect::new(2.0, 2.0, 8.5, 8.0)));
    }

    #[test]
    fn insets_sums() {
        let i = Insets::new(1.0, 4.0, 3.0, 2.0);
        assert_eq!(i.horizontal(), 6.0);
        assert_eq!(i.vertical(), 4.0);
    }

    #[test]
    fn insets_constructors_and_conversions() {
        assert_eq!(Insets::all(3.0), Insets::from(3.0));
        assert_eq!(Insets::from((1.0, 2.0)), Insets::new(1.0, 2.0, 1.0, 2.0));
        assert_eq!(
            Insets::from((1.0, 2.0, 3.0, 4.0)),
            Insets {
                top: 1.0,
                left: 2.0,
                bottom: 3.0,
                right: 4.0,
            }
        );
        assert_eq!(Insets::default(), Insets::ZERO);
    }

    #[test]
    fn insets_validity() {
        assert!(Insets::ZERO.is_valid());
        assert!(!Insets::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Insets::new(0.0, f64::NAN, 0.0, 0.0).is_valid());
        assert!(!Insets::all(f64::INFINITY).is_valid());
    }

    #[test]
    fn size_ceil_and_empty() {
        assert_eq!(Size::new(1.2, 3.0).ceil(), Size::new(2.0, 3.0));
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(5.0, 0.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }
}
