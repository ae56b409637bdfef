//! Row span rasterization
//!
//! How does this work
//!
//! ```text
//!    sc    = Scanner::new()              -- reusable, owned by the caller
//!    clip  = Rectangle::new(x1,y1,x2,y2) -- inclusive clip region
//!    shape.scan(&mut sc, &clip)
//!      leeway_rows()        -- natural row extent, one row of overscan
//!      set_row_range()
//!      span per row         -- ellipse equation, edge walk, corner bands
//!      hard_clip()          -- row_min/row_max to clip, min/max_clipped
//!    Output: one (min,max) Span per row in row_min ..= row_max
//!  Consume
//!    buf.fill_spans(&sc, color)
//!      fill_hline() per non-empty row
//! ```

pub mod math;
pub mod error;
pub mod clip;
pub mod scan;
pub mod ellipse;
pub mod polygon;
pub mod rounded_rect;
pub mod shape;
pub mod buffer;
#[cfg(feature = "png")]
pub mod image_io;

pub use math::*;
pub use error::*;
pub use clip::*;
pub use scan::*;
pub use ellipse::*;
pub use polygon::*;
pub use rounded_rect::*;
pub use shape::*;
pub use buffer::*;

/// Produce row spans for the interior of a shape
pub trait Scan {
    /// Write the rows covered by the shape into `scanner`
    ///
    /// The row range is the natural extent of the shape, soft clipped to
    ///   one row beyond `clip`, populated, then hard clipped to `clip`
    ///   with the clip flags recording which sides were cut.
    ///
    /// Invalid shapes are not rejected; the spans produced are unspecified.
    fn scan(&self, scanner: &mut Scanner, clip: &Rectangle<i64>);
    /// Shape parameters describe a non-degenerate shape
    fn is_valid(&self) -> bool;
    /// Unclipped bounding box
    fn bounds(&self) -> Viewport;
}
