
extern crate spanfill;

use spanfill::Scan;

fn everything() -> spanfill::Rectangle<i64> {
    spanfill::Rectangle::new(-1000, -1000, 1000, 1000)
}

#[test]
fn square_corners() {
    let rect = spanfill::Rectangle::new(2, 3, 12, 9);
    let r = spanfill::RoundedRectangle::new(rect, spanfill::Vector2::new(0.0, 0.0));
    assert!(r.is_valid());
    let mut sc = spanfill::Scanner::new();
    r.scan(&mut sc, &everything());
    assert_eq!((sc.row_min(), sc.row_max()), (3, 9));
    for (_, span) in sc.rows() {
        assert_eq!(span, spanfill::Span::new(2.0, 12.0));
    }
    assert_eq!(spanfill::RoundedRectangle::from(rect), r);
}

#[test]
fn zero_vertical_radius_is_square() {
    let rect = spanfill::Rectangle::new(0, 0, 10, 10);
    let r = spanfill::RoundedRectangle::new(rect, spanfill::Vector2::new(4.0, 0.0));
    let mut sc = spanfill::Scanner::new();
    r.scan(&mut sc, &everything());
    for (_, span) in sc.rows() {
        assert_eq!(span, spanfill::Span::new(0.0, 10.0));
    }
}

#[test]
fn corner_bands() {
    let rect = spanfill::Rectangle::new(0, 0, 20, 20);
    let r = spanfill::RoundedRectangle::new(rect, spanfill::Vector2::new(4.0, 4.0));
    let mut sc = spanfill::Scanner::new();
    r.scan(&mut sc, &everything());
    assert_eq!((sc.row_min(), sc.row_max()), (0, 20));

    // Edge rows are inset by the full horizontal radius
    assert_eq!(sc.get(0), spanfill::Span::new(4.0, 16.0));
    assert_eq!(sc.get(20), spanfill::Span::new(4.0, 16.0));

    // Body rows span the whole rectangle
    for y in 4 ..= 16 {
        assert_eq!(sc.get(y), spanfill::Span::new(0.0, 20.0));
    }

    // Inside the band, dy = 2: inset = rx - sqrt(1 - (dy/ry)^2) * rx
    let inset = 4.0 - (1.0f64 - 0.25).sqrt() * 4.0;
    let s = sc.get(2);
    assert!((s.min - inset).abs() < 1e-12);
    assert!((s.max - (20.0 - inset)).abs() < 1e-12);
    assert_eq!(sc.get(2), sc.get(18));

    // Narrowing toward the top and bottom edges
    for y in 0 .. 4 {
        assert!(sc.get(y).width() < sc.get(y + 1).width());
        assert!(sc.get(20 - y).width() < sc.get(19 - y).width());
    }
}

#[test]
fn never_wider_than_rect() {
    let rect = spanfill::Rectangle::new(-7, 3, 25, 17);
    let r = spanfill::RoundedRectangle::new(rect, spanfill::Vector2::new(5.5, 3.25));
    let mut sc = spanfill::Scanner::new();
    r.scan(&mut sc, &everything());
    for (_, span) in sc.rows() {
        assert!(span.min >= -7.0);
        assert!(span.max <= 25.0);
        assert!(span.min <= span.max);
    }
}

#[test]
fn hard_clip() {
    let rect = spanfill::Rectangle::new(0, -10, 20, 30);
    let r = spanfill::RoundedRectangle::new(rect, spanfill::Vector2::new(3.0, 3.0));
    let mut sc = spanfill::Scanner::new();
    r.scan(&mut sc, &spanfill::Rectangle::new(0, 0, 20, 20));
    assert_eq!((sc.row_min(), sc.row_max()), (0, 20));
    assert_eq!(sc.span_range(), (-1, 21));
    assert!(sc.min_clipped() && sc.max_clipped());
    for (_, span) in sc.rows() {
        assert_eq!(span, spanfill::Span::new(0.0, 20.0));
    }
}

#[test]
fn validity() {
    let rect = spanfill::Rectangle::new(0, 0, 20, 20);
    let v = spanfill::Vector2::new;
    assert!(spanfill::RoundedRectangle::new(rect, v(0.0, 0.0)).is_valid());
    assert!(!spanfill::RoundedRectangle::new(rect, v(-1.0, 0.0)).is_valid());
    assert!(!spanfill::RoundedRectangle::new(rect, v(1.0, -1.0)).is_valid());
    let inverted = spanfill::Rectangle::from_bounds(10, 0, 0, 10);
    assert!(!spanfill::RoundedRectangle::new(inverted, v(1.0, 1.0)).is_valid());
}
