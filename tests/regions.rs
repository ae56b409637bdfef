
extern crate spanfill;

use spanfill::Rectangle;

fn rects() -> Vec<Rectangle<i64>> {
    vec![
        Rectangle::new(0, 0, 10, 10),
        Rectangle::new(5, -3, 20, 7),
        Rectangle::new(-4, 2, 8, 30),
        Rectangle::new(3, 3, 4, 4),
    ]
}

#[test]
fn overlap_and_encompass() {
    let r = rects();
    let o = spanfill::overlap(&r[..2]).unwrap();
    assert_eq!(o, Rectangle::new(5, 0, 10, 7));
    let e = spanfill::encompass(&r[..2]).unwrap();
    assert_eq!(e, Rectangle::new(0, -3, 20, 10));
    assert_eq!(spanfill::overlap(&r[..1]).unwrap(), r[0]);
    assert_eq!(spanfill::encompass(&r[..1]).unwrap(), r[0]);
}

#[test]
fn commutative() {
    let r = rects();
    let mut rev = r.clone();
    rev.reverse();
    assert_eq!(spanfill::overlap(&r).unwrap(), spanfill::overlap(&rev).unwrap());
    assert_eq!(spanfill::encompass(&r).unwrap(), spanfill::encompass(&rev).unwrap());
    for a in &r {
        for b in &r {
            assert_eq!(a.overlap_with(b), b.overlap_with(a));
            assert_eq!(a.encompass_with(b), b.encompass_with(a));
        }
    }
}

#[test]
fn associative() {
    let r = rects();
    for a in &r {
        for b in &r {
            for c in &r {
                let left = spanfill::overlap(&[spanfill::overlap(&[*a, *b]).unwrap(), *c]).unwrap();
                let right = spanfill::overlap(&[*a, spanfill::overlap(&[*b, *c]).unwrap()]).unwrap();
                assert_eq!(left, right);
                let left = spanfill::encompass(&[spanfill::encompass(&[*a, *b]).unwrap(), *c]).unwrap();
                let right = spanfill::encompass(&[*a, spanfill::encompass(&[*b, *c]).unwrap()]).unwrap();
                assert_eq!(left, right);
            }
        }
    }
}

#[test]
fn overlap_of_encompass() {
    let r = rects();
    for a in &r {
        for b in &r {
            let e = spanfill::encompass(&[*a, *b]).unwrap();
            assert_eq!(spanfill::overlap(&[*a, e]).unwrap(), *a);
        }
    }
}

#[test]
fn disjoint_overlap_is_degenerate() {
    let a = Rectangle::new(0, 0, 5, 5);
    let b = Rectangle::new(10, 10, 15, 15);
    let o = spanfill::overlap(&[a, b]).unwrap();
    assert!(!o.is_valid());
    assert_eq!(o, Rectangle::from_bounds(10, 10, 5, 5));
}

#[test]
fn viewports() {
    let a = spanfill::Viewport::new(0.5, 0.5, 10.25, 4.0);
    let b = spanfill::Viewport::new(-1.0, 2.0, 3.0, 8.5);
    assert_eq!(spanfill::overlap(&[a, b]).unwrap(),
               spanfill::Viewport::from_bounds(0.5, 2.0, 3.0, 4.0));
    assert_eq!(spanfill::encompass(&[a, b]).unwrap(),
               spanfill::Viewport::from_bounds(-1.0, 0.5, 10.25, 8.5));
}

#[test]
fn empty_region_list() {
    let none: Vec<Rectangle<i64>> = vec![];
    match spanfill::overlap(&none) {
        Err(spanfill::Error::EmptyRegionList) => {},
        other => panic!("unexpected {:?}", other),
    }
    match spanfill::encompass(&none) {
        Err(spanfill::Error::EmptyRegionList) => {},
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn expand() {
    let mut r = Rectangle::new(0, 0, 1, 1);
    r.expand(5, -2);
    assert_eq!(r, Rectangle::new(0, -2, 5, 1));
    r.expand_rect(&Rectangle::new(-3, 0, 0, 9));
    assert_eq!(r, Rectangle::new(-3, -2, 5, 9));
    assert_eq!((r.width(), r.height()), (9, 12));
    assert_eq!(r.min(), spanfill::Point::new(-3, -2));
    assert_eq!(r.max(), spanfill::Point::new(5, 9));
}
