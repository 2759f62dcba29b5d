//! Bounding boxes and their anchor points.
//!
//! All coordinates are EMUs. Halving uses integer division, so an odd extent
//! puts the midpoint on the lower EMU.

/// A point on the slide, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// One of the four canonical connection points on a box edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    LeftMid,
    RightMid,
    TopCenter,
    BottomCenter,
}

/// Axis-aligned bounding box of a shape, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    #[inline]
    pub const fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> i64 {
        self.left + self.width / 2
    }

    /// Vertical center.
    #[inline]
    pub fn center_y(&self) -> i64 {
        self.top + self.height / 2
    }

    /// `(left + width, top + height/2)`
    pub fn right_mid(&self) -> Point {
        Point::new(self.right(), self.center_y())
    }

    /// `(left, top + height/2)`
    pub fn left_mid(&self) -> Point {
        Point::new(self.left, self.center_y())
    }

    /// `(left + width/2, top)`
    pub fn top_center(&self) -> Point {
        Point::new(self.center_x(), self.top)
    }

    /// `(left + width/2, top + height)`
    pub fn bottom_center(&self) -> Point {
        Point::new(self.center_x(), self.bottom())
    }

    pub fn anchor(&self, anchor: Anchor) -> Point {
        match anchor {
            Anchor::LeftMid => self.left_mid(),
            Anchor::RightMid => self.right_mid(),
            Anchor::TopCenter => self.top_center(),
            Anchor::BottomCenter => self.bottom_center(),
        }
    }
}
