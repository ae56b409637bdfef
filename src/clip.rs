//! Clipping Region
//!
//! Axis-aligned regions, their combinators, and the row clipping protocol
//!   shared by every shape rasterizer

use crate::error::{Error, Result};
use crate::math::{hash_f64, hash_i64, Point, Vector2};
use crate::scan::Scanner;

/// Rows of overscan allowed beyond each side of the clip before hard clipping
pub const LEEWAY_ROWS: i64 = 1;

/// Rectangle
///
/// Bounds are inclusive on both axes. A rectangle with a minimum greater
///   than its maximum on either axis is degenerate, see
///   [is_valid](struct.Rectangle.html#method.is_valid)
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}

/// Floating point region
pub type Viewport = Rectangle<f64>;

fn pmin<T: PartialOrd>(a: T, b: T) -> T { if b < a { b } else { a } }
fn pmax<T: PartialOrd>(a: T, b: T) -> T { if b > a { b } else { a } }

impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Create a Rectangle from its bounds without sorting
    ///
    /// The result may be degenerate
    pub fn from_bounds(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1,y1,x2,y2 }
    }
    /// Minimum is less than or equal to the maximum on both axes
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
    /// Expand if the rectangle is outside
    pub fn expand_rect(&mut self, r: &Rectangle<T>) {
        self.expand(r.x1, r.y1);
        self.expand(r.x2, r.y2);
    }
    /// Intersection with another rectangle
    ///
    /// Disjoint rectangles produce a degenerate result
    pub fn overlap_with(&self, r: &Rectangle<T>) -> Self {
        Self { x1: pmax(self.x1, r.x1), y1: pmax(self.y1, r.y1),
               x2: pmin(self.x2, r.x2), y2: pmin(self.y2, r.y2) }
    }
    /// Smallest rectangle containing both rectangles
    pub fn encompass_with(&self, r: &Rectangle<T>) -> Self {
        Self { x1: pmin(self.x1, r.x1), y1: pmin(self.y1, r.y1),
               x2: pmax(self.x2, r.x2), y2: pmax(self.y2, r.y2) }
    }
}

impl Rectangle<i64> {
    /// Rectangle spanning the points `min` and `max`
    pub fn from_points(min: Point, max: Point) -> Self {
        Self::from_bounds(min.x, min.y, max.x, max.y)
    }
    /// Minimum corner
    pub fn min(&self) -> Point {
        Point::new(self.x1, self.y1)
    }
    /// Maximum corner
    pub fn max(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
    /// Number of columns covered, inclusive
    pub fn width(&self) -> i64 {
        self.x2 - self.x1 + 1
    }
    /// Number of rows covered, inclusive
    pub fn height(&self) -> i64 {
        self.y2 - self.y1 + 1
    }
    pub fn hash_code(&self) -> u32 {
        [self.x1, self.y1, self.x2, self.y2].iter()
            .fold(0, |h, &v| hash_i64(h, v))
    }
}

impl Rectangle<f64> {
    /// Viewport spanning the vectors `min` and `max`
    pub fn from_vectors(min: Vector2, max: Vector2) -> Self {
        Self::from_bounds(min.x, min.y, max.x, max.y)
    }
    pub fn min(&self) -> Vector2 {
        Vector2::new(self.x1, self.y1)
    }
    pub fn max(&self) -> Vector2 {
        Vector2::new(self.x2, self.y2)
    }
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
    pub fn hash_code(&self) -> u32 {
        [self.x1, self.y1, self.x2, self.y2].iter()
            .fold(0, |h, &v| hash_f64(h, v))
    }
}

impl From<Rectangle<i64>> for Rectangle<f64> {
    fn from(r: Rectangle<i64>) -> Self {
        Self::from_bounds(r.x1 as f64, r.y1 as f64, r.x2 as f64, r.y2 as f64)
    }
}

/// Intersection of one or more regions
///
/// The result is the component-wise maximum of the minimums and minimum
///   of the maximums. It is not checked for validity; disjoint regions give
///   a degenerate rectangle.
///
/// An empty list is an error
pub fn overlap<T>(regions: &[Rectangle<T>]) -> Result<Rectangle<T>>
    where T: std::cmp::PartialOrd + Copy
{
    let (first, rest) = regions.split_first().ok_or(Error::EmptyRegionList)?;
    Ok(rest.iter().fold(*first, |acc, r| acc.overlap_with(r)))
}

/// Bounding box of one or more regions
///
/// An empty list is an error
pub fn encompass<T>(regions: &[Rectangle<T>]) -> Result<Rectangle<T>>
    where T: std::cmp::PartialOrd + Copy
{
    let (first, rest) = regions.split_first().ok_or(Error::EmptyRegionList)?;
    Ok(rest.iter().fold(*first, |acc, r| acc.encompass_with(r)))
}

/// Soft clip of a row range
///
/// The natural range of a shape `[lo, hi]` is allowed to extend
///   [LEEWAY_ROWS](constant.LEEWAY_ROWS.html) beyond each side of the clip
///   rectangle; anything further is cut. The returned range may be inverted
///   when the shape lies entirely outside of the clip.
pub fn leeway_rows(lo: i64, hi: i64, clip: &Rectangle<i64>) -> (i64, i64) {
    let lo = lo.max(clip.y1.saturating_sub(LEEWAY_ROWS));
    let hi = hi.min(clip.y2.saturating_add(LEEWAY_ROWS));
    (lo, hi)
}

/// Soft clip, populate and hard clip
///
/// The protocol every shape follows: the natural range is soft clipped
///   and laid out in the scanner, `fill` computes the span of each row of
///   the soft clipped range, and the scanner is then hard clipped to `clip`.
pub(crate) fn scan_rows<F>(scanner: &mut Scanner, clip: &Rectangle<i64>,
                           lo: i64, hi: i64, mut fill: F)
    where F: FnMut(i64) -> (f64, f64)
{
    let (row_min, row_max) = leeway_rows(lo, hi, clip);
    log::trace!("scan rows natural [{}, {}] leeway [{}, {}]", lo, hi, row_min, row_max);
    scanner.set_row_range(row_min, row_max);
    for row in row_min ..= row_max {
        let (min, max) = fill(row);
        scanner.set(row, min, max);
    }
    scanner.hard_clip(clip);
}
