//! Closed set of scannable shapes

use crate::clip::{Rectangle, Viewport};
use crate::ellipse::{Circle, Ellipse};
use crate::polygon::Polygon;
use crate::rounded_rect::RoundedRectangle;
use crate::scan::Scanner;
use crate::Scan;

/// Any of the supported shapes
#[derive(Debug,Clone,PartialEq,Hash)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    RoundedRectangle(RoundedRectangle),
}

impl Scan for Shape {
    fn scan(&self, scanner: &mut Scanner, clip: &Rectangle<i64>) {
        match self {
            Shape::Circle(s)           => s.scan(scanner, clip),
            Shape::Ellipse(s)          => s.scan(scanner, clip),
            Shape::Polygon(s)          => s.scan(scanner, clip),
            Shape::RoundedRectangle(s) => s.scan(scanner, clip),
        }
    }
    fn is_valid(&self) -> bool {
        match self {
            Shape::Circle(s)           => s.is_valid(),
            Shape::Ellipse(s)          => s.is_valid(),
            Shape::Polygon(s)          => s.is_valid(),
            Shape::RoundedRectangle(s) => s.is_valid(),
        }
    }
    fn bounds(&self) -> Viewport {
        match self {
            Shape::Circle(s)           => s.bounds(),
            Shape::Ellipse(s)          => s.bounds(),
            Shape::Polygon(s)          => s.bounds(),
            Shape::RoundedRectangle(s) => s.bounds(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Shape { Shape::Circle(s) }
}
impl From<Ellipse> for Shape {
    fn from(s: Ellipse) -> Shape { Shape::Ellipse(s) }
}
impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Shape { Shape::Polygon(s) }
}
impl From<RoundedRectangle> for Shape {
    fn from(s: RoundedRectangle) -> Shape { Shape::RoundedRectangle(s) }
}
