//! Geometry primitives - points and axis-aligned bounds

use serde::{Deserialize, Serialize};

/// A point in canvas space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by a delta
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from this point to the segment (a, b)
    pub fn distance_to_segment(&self, a: &Point, b: &Point) -> f64 {
        let abx = b.x - a.x;
        let aby = b.y - a.y;
        let len_sq = abx * abx + aby * aby;
        if len_sq == 0.0 {
            return self.distance_to(a);
        }
        let t = (((self.x - a.x) * abx + (self.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
        self.distance_to(&Point::new(a.x + t * abx, a.y + t * aby))
    }
}

/// An axis-aligned rectangle with mutable position and size.
///
/// Width and height are never negative: every mutation clamps incoming
/// sizes to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds at (x, y) with the given size (clamped to non-negative)
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Move the upper-left corner to a point, keeping the size
    pub fn move_to(&mut self, point: Point) {
        self.x = point.x;
        self.y = point.y;
    }

    /// Translate by a delta, keeping the size
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Change the size, keeping the upper-left corner
    pub fn resize_to(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Set position and size in one call
    pub fn set(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.x = x;
        self.y = y;
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Upper-left corner
    pub fn upper_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Lower-right corner
    pub fn lower_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check whether a point lies inside (or on the border of) the bounds
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Smallest bounds enclosing both `self` and `other`
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        Bounds::new(x, y, right - x, bottom - y)
    }

    /// Smallest bounds enclosing a set of points. Returns zero-size bounds
    /// at the origin for an empty set.
    pub fn enclosing(points: &[Point]) -> Bounds {
        let Some(first) = points.first() else {
            return Bounds::default();
        };
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
