//! Value types and scalar helpers used by the rasterizers

use std::ops::{Add, Div, Mul, Sub};

/// Two dimensional floating point vector
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vector2 {
    /// x component
    pub x: f64,
    /// y component
    pub y: f64,
}

impl Vector2 {
    /// Create a new vector
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Vector with both components set to `v`
    pub fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
    /// Squared length, x*x + y*y
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
    /// Both components are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    /// Hash of both components, see [hash_combine](fn.hash_combine.html)
    pub fn hash_code(&self) -> u32 {
        let h = hash_f64(0, self.x);
        hash_f64(h, self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, s: f64) -> Vector2 {
        Vector2::new(self.x * s, self.y * s)
    }
}
impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, s: f64) -> Vector2 {
        Vector2::new(self.x / s, self.y / s)
    }
}

/// Two dimensional integer point
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Point {
    /// x position
    pub x: i64,
    /// y position
    pub y: i64,
}

impl Point {
    /// Create a new point
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    /// Round a vector to the nearest integer point
    ///
    /// Halfway values round away from zero
    pub fn round(v: Vector2) -> Self {
        Self { x: v.x.round() as i64, y: v.y.round() as i64 }
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Vector2 {
        Vector2::new(p.x as f64, p.y as f64)
    }
}

/// Linear interpolation from `a` to `b` by the fraction `t`
///
/// `t` is not clamped, values outside [0,1] extrapolate
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Combine a 32-bit value into a running hash
///
/// Order sensitive: `hash_combine(hash_combine(0, a), b)` and
///  `hash_combine(hash_combine(0, b), a)` differ in general.
///
/// See boost::hash_combine
pub fn hash_combine(seed: u32, value: u32) -> u32 {
    seed ^ value
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Combine a f64 into a running hash as two 32-bit words
///
/// Negative zero is folded onto positive zero so values that compare
///   equal also hash equal
pub fn hash_f64(seed: u32, v: f64) -> u32 {
    let bits = (v + 0.0).to_bits();
    let h = hash_combine(seed, bits as u32);
    hash_combine(h, (bits >> 32) as u32)
}

/// Combine an i64 into a running hash as two 32-bit words
pub fn hash_i64(seed: u32, v: i64) -> u32 {
    let bits = v as u64;
    let h = hash_combine(seed, bits as u32);
    hash_combine(h, (bits >> 32) as u32)
}

/// Horizontal half-width of an ellipse at vertical offset `dy` from its center
///
/// The argument of the square root is clamped to [0,1]; rows beyond the
///   vertical radius (or a zero vertical radius) give a zero half-width
///   instead of a NaN.
pub(crate) fn ellipse_half_width(dy: f64, rx: f64, ry: f64) -> f64 {
    let q = dy / ry;
    let t = 1.0 - q * q;
    let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
    t.sqrt() * rx
}
