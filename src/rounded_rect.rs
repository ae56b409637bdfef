//! Rounded Rectangle
//!
//! Rows in the body of the rectangle span its full width. Rows within the
//!   vertical radius of the top or bottom edge are narrowed by the
//!   elliptical corner of radii (rx, ry).

use std::hash::{Hash, Hasher};

use crate::clip::{scan_rows, Rectangle, Viewport};
use crate::math::{ellipse_half_width, hash_f64, Vector2};
use crate::scan::Scanner;
use crate::Scan;

/// Rectangle with elliptical corners
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct RoundedRectangle {
    /// Outer bounds, inclusive
    pub rect: Rectangle<i64>,
    /// Corner radii, horizontal (x) and vertical (y)
    pub radii: Vector2,
}

impl RoundedRectangle {
    /// Create a new RoundedRectangle
    pub fn new(rect: Rectangle<i64>, radii: Vector2) -> Self {
        Self { rect, radii }
    }
    /// Span of the row y
    pub fn span_at(&self, y: i64) -> (f64, f64) {
        let (x1, x2) = (self.rect.x1 as f64, self.rect.x2 as f64);
        let (rx, ry) = (self.radii.x, self.radii.y);
        let y = y as f64;
        let top = self.rect.y1 as f64 + ry;
        let bottom = self.rect.y2 as f64 - ry;
        let dy = if y < top {
            top - y
        } else if y > bottom {
            y - bottom
        } else {
            return (x1, x2);
        };
        // Negative, moves both ends inward
        let dx = ellipse_half_width(dy, rx, ry) - rx;
        (x1 - dx, x2 + dx)
    }
    pub fn hash_code(&self) -> u32 {
        let h = self.rect.hash_code();
        let h = hash_f64(h, self.radii.x);
        hash_f64(h, self.radii.y)
    }
}

impl From<Rectangle<i64>> for RoundedRectangle {
    fn from(rect: Rectangle<i64>) -> Self {
        Self::new(rect, Vector2::default())
    }
}

impl Scan for RoundedRectangle {
    fn scan(&self, scanner: &mut Scanner, clip: &Rectangle<i64>) {
        log::trace!("rounded rect {:?} radii {:?}", self.rect, self.radii);
        scan_rows(scanner, clip, self.rect.y1, self.rect.y2, |y| self.span_at(y));
    }
    /// Radii non-negative and finite, rectangle valid
    fn is_valid(&self) -> bool {
        self.radii.is_finite() && self.radii.x >= 0.0 && self.radii.y >= 0.0
            && self.rect.is_valid()
    }
    fn bounds(&self) -> Viewport {
        self.rect.into()
    }
}

impl Hash for RoundedRectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
