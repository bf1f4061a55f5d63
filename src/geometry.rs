//! Core geometry types: Vec2, Size, Rect, Spacing.
//!
//! All values are in pixels, origin top-left, Y growing downward. Child bounds
//! are expressed relative to the content origin of the parent container.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A 2D position, displacement or velocity in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Linearly interpolate between `self` and `other` by `factor`.
    ///
    /// `factor = 0.0` returns `self`, `factor = 1.0` returns `other`.
    #[inline]
    pub fn blend(self, other: Vec2, factor: f32) -> Vec2 {
        Vec2 {
            x: self.x + (other.x - self.x) * factor,
            y: self.y + (other.y - self.y) * factor,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2 { x: self.x * rhs, y: self.y * rhs }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D extent in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to a [`Rect`] positioned at the origin.
    #[inline]
    pub const fn to_rect(self) -> Rect {
        Rect { x: 0.0, y: 0.0, width: self.width, height: self.height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle defined by its top-left corner and size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const EMPTY: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge (`x + width`).
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// Exclusive bottom edge (`y + height`).
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }

    /// The size component.
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the point lies inside the rectangle.
    ///
    /// The left/top edges are inclusive and the right/bottom edges exclusive,
    /// so adjacent rectangles never both claim a point.
    #[inline]
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Move the rectangle by `offset`.
    #[inline]
    pub fn translate(self, offset: Vec2) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, ..self }
    }

    /// Shrink the rectangle by `spacing` on each side. Never produces a negative size.
    #[inline]
    pub fn shrink(self, spacing: Spacing) -> Rect {
        Rect {
            x: self.x + spacing.left,
            y: self.y + spacing.top,
            width: (self.width - spacing.width()).max(0.0),
            height: (self.height - spacing.height()).max(0.0),
        }
    }

    /// The overlapping area of two rectangles, or [`Rect::EMPTY`] if they do not overlap.
    pub fn intersection(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            Rect::EMPTY
        } else {
            Rect { x: x1, y: y1, width: x2 - x1, height: y2 - y1 }
        }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Per-side insets (padding) in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// No spacing on any side.
    pub const ZERO: Spacing = Spacing { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create spacing with explicit values (CSS order: top, right, bottom, left).
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// The same value on all four sides.
    #[inline]
    pub const fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Total horizontal spacing (`left + right`).
    #[inline]
    pub fn width(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical spacing (`top + bottom`).
    #[inline]
    pub fn height(self) -> f32 {
        self.top + self.bottom
    }
}

// ===========================================================================
// Tests
// ===========================================================================
