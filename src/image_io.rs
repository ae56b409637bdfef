//! Reading, writing and comparing RGB images
//!
//! Format is chosen from the file extension, png is always available
use std::path::Path;

use crate::error::{Error, Result};

/// Read an image as 8-bit RGB, returned as (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write 8-bit RGB data to an image file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    if buf.len() != width * height * 3 {
        return Err(Error::SizeMismatch { len: buf.len(), width, height });
    }
    image::save_buffer(filename, buf, width as u32, height as u32, image::ColorType::Rgb8)?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are logged at debug level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        log::debug!("image sizes differ {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
