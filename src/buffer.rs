//! Rendering buffer
//!
//! Minimal RGB pixel buffer that consumes the spans of a
//!   [Scanner](../scan/struct.Scanner.html)

use crate::scan::Scanner;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), 3 bytes per pixel
#[derive(Debug,Default)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new white buffer of width and height
    pub fn new(width: usize, height: usize) -> Self {
        let bpp = 3;
        RenderingBuffer {
            width, height, bpp, data: vec![255u8; width * height * bpp]
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Clear an image to white
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 255);
    }
    /// Set a single pixel
    pub fn set(&mut self, x: usize, y: usize, color: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i .. i + self.bpp].copy_from_slice(&color);
    }
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width, "request {} >= {} width", x, self.width);
        assert!(y < self.height, "request {} >= {} height", y, self.height);
        ((y * self.width) + x) * self.bpp
    }
    /// Fill horizontal line from x1 to x2 inclusive on row y
    ///
    /// The line is clipped to the buffer
    pub fn fill_hline(&mut self, x1: i64, y: i64, x2: i64, color: [u8; 3]) {
        let (xmax, ymax) = (self.width as i64 - 1, self.height as i64 - 1);
        if y < 0 || y > ymax || x2 < 0 || x1 > xmax || x1 > x2 {
            return;
        }
        let (x1, x2) = (x1.max(0), x2.min(xmax));
        let start = self.offset(x1 as usize, y as usize);
        let end = self.offset(x2 as usize, y as usize) + self.bpp;
        for pix in self.data[start .. end].chunks_mut(self.bpp) {
            pix.copy_from_slice(&color);
        }
    }
    /// Fill every active row of a Scanner
    ///
    /// A pixel x on row y is filled when it lies within the span of the
    ///   row, `span.min <= x <= span.max`. Empty rows are skipped.
    pub fn fill_spans(&mut self, scanner: &Scanner, color: [u8; 3]) {
        for (y, span) in scanner.rows() {
            if span.is_empty() {
                continue;
            }
            self.fill_hline(span.min.ceil() as i64, y, span.max.floor() as i64, color);
        }
    }
    /// Number of pixels equal to color
    pub fn count(&self, color: [u8; 3]) -> usize {
        self.data.chunks(self.bpp).filter(|p| *p == &color[..]).count()
    }
    /// Write the buffer to a png file
    #[cfg(feature = "png")]
    pub fn to_file<P: AsRef<std::path::Path>>(&self, filename: P) -> crate::Result<()> {
        crate::image_io::write_file(&self.data, self.width, self.height, filename)
    }
}

use std::ops::Index;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + self.bpp]
    }
}
