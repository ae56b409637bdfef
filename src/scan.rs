//! Row span table
//!
//! A [Scanner](struct.Scanner.html) holds one horizontal
//!   [Span](struct.Span.html) per row over an inclusive row range. It is a
//!   scratch buffer owned by the caller and reused across many shapes; a
//!   shape only writes into it.

use std::ops::Index;
use std::ops::IndexMut;

use crate::clip::Rectangle;

/// Horizontal interval covered on a single row
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Span {
    /// Minimum x value
    pub min: f64,
    /// Maximum x value
    pub max: f64,
}

impl Span {
    /// Span covering nothing, (+inf, -inf)
    ///
    /// Any value folded in with [widen](#method.widen) replaces both ends
    pub const EMPTY: Span = Span { min: std::f64::INFINITY, max: std::f64::NEG_INFINITY };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    /// No coverage on this row, min > max
    pub fn is_empty(&self) -> bool {
        !(self.min <= self.max)
    }
    /// Width of the span, zero if empty
    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max - self.min }
    }
    /// Extend the span to include x
    pub fn widen(&mut self, x: f64) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }
}

impl From<(f64, f64)> for Span {
    fn from((min, max): (f64, f64)) -> Span {
        Span { min, max }
    }
}

impl Default for Span {
    fn default() -> Span {
        Span::EMPTY
    }
}

/// Row span table
#[derive(Debug)]
pub struct Scanner {
    /// First row with storage; spans[0] belongs to this row
    origin: i64,
    row_min: i64,
    row_max: i64,
    spans: Vec<Span>,
    min_clipped: bool,
    max_clipped: bool,
}

impl Scanner {
    /// Create an empty Scanner
    pub fn new() -> Self {
        Self { origin: 0, row_min: 0, row_max: -1,
               spans: vec![],
               min_clipped: false, max_clipped: false }
    }
    /// Set the active rows to min ..= max
    ///
    /// Clip flags are reset. Rows are not guaranteed to be initialized,
    ///   the shape writes every row it uses. An inverted range is empty.
    pub fn set_row_range(&mut self, min: i64, max: i64) {
        let n = if max < min { 0 } else { (max - min) as usize + 1 };
        self.origin = min;
        self.row_min = min;
        self.row_max = max;
        self.min_clipped = false;
        self.max_clipped = false;
        self.spans.resize(n, Span::EMPTY);
    }
    /// Prepare for a new shape, no active rows
    pub fn reset(&mut self) {
        self.set_row_range(0, -1);
    }
    /// First active row
    pub fn row_min(&self) -> i64 {
        self.row_min
    }
    /// Last active row, inclusive
    pub fn row_max(&self) -> i64 {
        self.row_max
    }
    /// Rows laid out by the last [set_row_range](#method.set_row_range)
    ///
    /// After a hard clip this is the soft clipped range, which can be
    ///   wider than [row_min](#method.row_min) ..= [row_max](#method.row_max)
    pub fn span_range(&self) -> (i64, i64) {
        (self.origin, self.origin + self.spans.len() as i64 - 1)
    }
    /// Shape extended below the clip rectangle and was truncated
    pub fn min_clipped(&self) -> bool {
        self.min_clipped
    }
    /// Shape extended above the clip rectangle and was truncated
    pub fn max_clipped(&self) -> bool {
        self.max_clipped
    }
    /// No active rows
    pub fn is_empty(&self) -> bool {
        self.row_max < self.row_min
    }
    /// Number of active rows
    pub fn len(&self) -> usize {
        if self.is_empty() { 0 } else { (self.row_max - self.row_min) as usize + 1 }
    }
    fn offset(&self, row: i64) -> usize {
        debug_assert!(row >= self.origin && row - self.origin < self.spans.len() as i64,
                      "row {} outside of {:?}", row, self.span_range());
        (row - self.origin) as usize
    }
    /// Span of a row
    pub fn get(&self, row: i64) -> Span {
        self[row]
    }
    /// Set the span of a row
    pub fn set(&mut self, row: i64, min: f64, max: f64) {
        self[row] = Span { min, max };
    }
    /// Extend the span of a row to include x
    pub fn widen(&mut self, row: i64, x: f64) {
        self[row].widen(x);
    }
    /// Extend the span of a row to include [min, max]
    pub fn widen_span(&mut self, row: i64, min: f64, max: f64) {
        let span = &mut self[row];
        span.widen(min);
        span.widen(max);
    }
    /// Set every active row to the empty span
    pub fn clear_spans(&mut self) {
        self.spans.iter_mut().for_each(|s| *s = Span::EMPTY);
    }
    /// Truncate the active rows to the clip rectangle
    ///
    /// Sets [min_clipped](#method.min_clipped) or
    ///   [max_clipped](#method.max_clipped) for each side that was cut.
    ///   Spans are not clipped horizontally.
    pub fn hard_clip(&mut self, clip: &Rectangle<i64>) {
        if self.row_min < clip.y1 {
            self.row_min = clip.y1;
            self.min_clipped = true;
        }
        if self.row_max > clip.y2 {
            self.row_max = clip.y2;
            self.max_clipped = true;
        }
        if self.min_clipped || self.max_clipped {
            log::debug!("hard clip to [{}, {}] min {} max {}",
                        self.row_min, self.row_max, self.min_clipped, self.max_clipped);
        }
    }
    /// Iterate over active rows as (row, span)
    pub fn rows(&self) -> impl Iterator<Item = (i64, Span)> + '_ {
        let first = if self.is_empty() { 0 } else { self.offset(self.row_min) };
        self.spans[first..].iter()
            .take(self.len())
            .enumerate()
            .map(move |(i, s)| (self.row_min + i as i64, *s))
    }
}

impl Default for Scanner {
    fn default() -> Scanner {
        Scanner::new()
    }
}

impl Index<i64> for Scanner {
    type Output = Span;
    fn index(&self, row: i64) -> &Span {
        &self.spans[self.offset(row)]
    }
}
impl IndexMut<i64> for Scanner {
    fn index_mut(&mut self, row: i64) -> &mut Span {
        let i = self.offset(row);
        &mut self.spans[i]
    }
}
