//! Geometric primitives
//!
//! Rectangles here are axis-aligned boxes in surface coordinates. Extents are
//! never negative: every operation that shrinks a rect clamps at zero, which
//! yields a *degenerate* rect rather than an error. Degenerate rects are legal
//! and simply draw nothing.

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn from_points(p1: Point, p2: Point) -> Self {
        let x = p1.x.min(p2.x);
        let y = p1.y.min(p2.y);
        let width = (p2.x - p1.x).abs();
        let height = (p2.y - p1.y).abs();
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True for zero (or negative) extent on either axis
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.max_x()
            && point.y >= self.y
            && point.y <= self.max_y()
    }

    /// True if the two rects share a region of positive area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrink the rect from each edge, clamping the size at zero
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        let width = (self.width - insets.left - insets.right).max(0.0);
        let height = (self.height - insets.top - insets.bottom).max(0.0);
        Self::new(self.x + insets.left, self.y + insets.top, width, height)
    }

    /// Map a point in the unit square onto this rect
    pub fn point_at(&self, unit: UnitPoint) -> Point {
        Point::new(self.x + unit.x * self.width, self.y + unit.y * self.height)
    }

    /// Split the rect into a slice of `amount` taken from `edge` and the
    /// remainder beyond a further `padding` gap.
    ///
    /// The slice never exceeds the rect's extent; the remainder's extent is
    /// `extent - amount - padding` clamped at zero and is pinned against the
    /// opposite edge, so the two never overlap.
    pub fn divided(&self, amount: f32, padding: f32, edge: RectEdge) -> (Rect, Rect) {
        let amount = amount.max(0.0);
        let padding = padding.max(0.0);
        match edge {
            RectEdge::MinX => {
                let slice_w = amount.min(self.width);
                let rest_w = (self.width - amount - padding).max(0.0);
                (
                    Rect::new(self.x, self.y, slice_w, self.height),
                    Rect::new(self.max_x() - rest_w, self.y, rest_w, self.height),
                )
            }
            RectEdge::MaxX => {
                let slice_w = amount.min(self.width);
                let rest_w = (self.width - amount - padding).max(0.0);
                (
                    Rect::new(self.max_x() - slice_w, self.y, slice_w, self.height),
                    Rect::new(self.x, self.y, rest_w, self.height),
                )
            }
            RectEdge::MinY => {
                let slice_h = amount.min(self.height);
                let rest_h = (self.height - amount - padding).max(0.0);
                (
                    Rect::new(self.x, self.y, self.width, slice_h),
                    Rect::new(self.x, self.max_y() - rest_h, self.width, rest_h),
                )
            }
            RectEdge::MaxY => {
                let slice_h = amount.min(self.height);
                let rest_h = (self.height - amount - padding).max(0.0);
                (
                    Rect::new(self.x, self.max_y() - slice_h, self.width, slice_h),
                    Rect::new(self.x, self.y, self.width, rest_h),
                )
            }
        }
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        Rect::new(0.0, 0.0, size.width, size.height)
    }
}

/// The edge a [`Rect::divided`] slice is taken from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectEdge {
    #[default]
    MinX,
    MinY,
    MaxX,
    MaxY,
}

/// Per-edge inset distances
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// A point in the unit square, resolved against a rect at draw time
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    pub const TOP: Self = Self::new(0.5, 0.0);
    pub const TOP_RIGHT: Self = Self::new(1.0, 0.0);
    pub const LEFT: Self = Self::new(0.0, 0.5);
    pub const CENTER: Self = Self::new(0.5, 0.5);
    pub const RIGHT: Self = Self::new(1.0, 0.5);
    pub const BOTTOM_LEFT: Self = Self::new(0.0, 1.0);
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
