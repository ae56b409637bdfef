//! Ellipse and Circle
//!
//! Direct analytic scan: each row solves the ellipse boundary equation
//!   for the horizontal half-width.

use std::hash::{Hash, Hasher};

use crate::clip::{scan_rows, Rectangle, Viewport};
use crate::math::{ellipse_half_width, hash_f64, Vector2};
use crate::scan::Scanner;
use crate::Scan;

/// Axis-aligned ellipse
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Ellipse {
    /// Center
    pub center: Vector2,
    /// Horizontal (x) and vertical (y) radius
    pub radii: Vector2,
}

impl Ellipse {
    /// Create a new Ellipse
    pub fn new(center: Vector2, radii: Vector2) -> Self {
        Self { center, radii }
    }
    /// Rows covered before clipping, `[ceil(cy - ry), floor(cy + ry)]`
    pub fn row_extent(&self) -> (i64, i64) {
        let lo = (self.center.y - self.radii.y).ceil();
        let hi = (self.center.y + self.radii.y).floor();
        (lo as i64, hi as i64)
    }
    /// Span of the row y
    ///
    /// Rows outside of the ellipse give a zero width span at the center
    pub fn span_at(&self, y: i64) -> (f64, f64) {
        let dy = self.center.y - y as f64;
        let dx = ellipse_half_width(dy, self.radii.x, self.radii.y);
        (self.center.x - dx, self.center.x + dx)
    }
    pub fn hash_code(&self) -> u32 {
        [self.center.x, self.center.y, self.radii.x, self.radii.y].iter()
            .fold(0, |h, &v| hash_f64(h, v))
    }
}

impl Scan for Ellipse {
    fn scan(&self, scanner: &mut Scanner, clip: &Rectangle<i64>) {
        let (lo, hi) = self.row_extent();
        log::trace!("ellipse center {:?} radii {:?}", self.center, self.radii);
        scan_rows(scanner, clip, lo, hi, |y| self.span_at(y));
    }
    /// Radii strictly positive, all components finite
    fn is_valid(&self) -> bool {
        self.center.is_finite() && self.radii.is_finite()
            && self.radii.x > 0.0 && self.radii.y > 0.0
    }
    fn bounds(&self) -> Viewport {
        Viewport::from_vectors(self.center - self.radii, self.center + self.radii)
    }
}

impl Hash for Ellipse {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

/// Circle
///
/// Scanned as the ellipse with both radii equal to `radius`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Circle {
    /// Center
    pub center: Vector2,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create a new Circle
    pub fn new(center: Vector2, radius: f64) -> Self {
        Self { center, radius }
    }
    /// Equivalent ellipse
    pub fn to_ellipse(&self) -> Ellipse {
        Ellipse::new(self.center, Vector2::splat(self.radius))
    }
    pub fn hash_code(&self) -> u32 {
        let h = self.center.hash_code();
        hash_f64(h, self.radius)
    }
}

impl From<Circle> for Ellipse {
    fn from(c: Circle) -> Ellipse {
        c.to_ellipse()
    }
}

impl Scan for Circle {
    fn scan(&self, scanner: &mut Scanner, clip: &Rectangle<i64>) {
        self.to_ellipse().scan(scanner, clip);
    }
    fn is_valid(&self) -> bool {
        self.to_ellipse().is_valid()
    }
    fn bounds(&self) -> Viewport {
        self.to_ellipse().bounds()
    }
}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
