//! Polygon
//!
//! Edge walking accumulator: every edge of the closed vertex loop is
//!   walked row by row and its crossing x folded into a running per-row
//!   minimum and maximum.
//!
//! Only the outermost crossings of each row are kept, so the fill is
//!   correct for polygons that are horizontally convex (every row crosses
//!   the interior in one connected interval). Concave polygons are filled
//!   across their concavities.

use std::hash::{Hash, Hasher};

use crate::clip::{leeway_rows, Rectangle, Viewport};
use crate::math::{hash_f64, lerp, Vector2};
use crate::scan::Scanner;
use crate::Scan;

/// Closed polygon
///
/// The last vertex connects back to the first
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vector2>,
}

impl Polygon {
    /// Create a new Polygon
    pub fn new(vertices: Vec<Vector2>) -> Self {
        Self { vertices }
    }
    /// Create a Polygon from (x,y) pairs
    pub fn from_xy(pts: &[(f64, f64)]) -> Self {
        Self::new(pts.iter().map(|&(x,y)| Vector2::new(x, y)).collect())
    }
    /// Edges of the closed loop as (start, end)
    pub fn edges(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let n = self.vertices.len();
        (0 .. n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
    /// Rows covered before clipping, `[floor(min y), floor(max y)]`
    ///
    /// An empty polygon gives an inverted range
    pub fn row_extent(&self) -> (i64, i64) {
        let (lo, hi) = self.vertices.iter()
            .fold((std::f64::INFINITY, std::f64::NEG_INFINITY),
                  |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));
        (lo.floor() as i64, hi.floor() as i64)
    }
    pub fn hash_code(&self) -> u32 {
        self.vertices.iter().fold(0, |h, v| {
            let h = hash_f64(h, v.x);
            hash_f64(h, v.y)
        })
    }
}

/// Fold a single edge into the per-row spans of the scanner
fn add_edge(scanner: &mut Scanner, v1: Vector2, v2: Vector2) {
    let (row_min, row_max) = (scanner.row_min(), scanner.row_max());
    let (fy1, fy2) = (v1.y.floor(), v2.y.floor());
    if fy1 == fy2 {
        // Horizontal edges on the first and last rows are not folded
        let y = fy1 as i64;
        if y > row_min && y < row_max {
            scanner.widen_span(y, v1.x.min(v2.x), v1.x.max(v2.x));
        }
        return;
    }
    let (v1, v2, fy1, fy2) = if v1.y > v2.y { (v2, v1, fy2, fy1) } else { (v1, v2, fy1, fy2) };
    // Casts saturate for far away vertices; only the clamped bounds are integers
    let (y1, y2) = (fy1 as i64, fy2 as i64);
    if y2 < row_min || y1 > row_max {
        return;
    }
    let dy = fy2 - fy1;
    for row in y1.max(row_min) ..= y2.min(row_max) {
        let x = lerp(v1.x, v2.x, (row as f64 - fy1) / dy);
        scanner.widen(row, x);
    }
}

impl Scan for Polygon {
    fn scan(&self, scanner: &mut Scanner, clip: &Rectangle<i64>) {
        let (lo, hi) = self.row_extent();
        let (row_min, row_max) = leeway_rows(lo, hi, clip);
        log::trace!("polygon {} vertices natural [{}, {}] leeway [{}, {}]",
                    self.vertices.len(), lo, hi, row_min, row_max);
        scanner.set_row_range(row_min, row_max);
        scanner.clear_spans();
        for (v1, v2) in self.edges() {
            add_edge(scanner, v1, v2);
        }
        scanner.hard_clip(clip);
    }
    /// At least three vertices, all finite
    fn is_valid(&self) -> bool {
        self.vertices.len() >= 3 && self.vertices.iter().all(|v| v.is_finite())
    }
    /// Bounding box of the vertices
    ///
    /// An empty polygon gives a degenerate viewport
    fn bounds(&self) -> Viewport {
        let inf = std::f64::INFINITY;
        let mut r = Viewport::from_bounds(inf, inf, -inf, -inf);
        for v in &self.vertices {
            r.expand(v.x, v.y);
        }
        r
    }
}

impl Hash for Polygon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
