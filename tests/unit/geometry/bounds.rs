use super::*;

fn bbox(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
    BoundingBox {
        min_x,
        min_y,
        max_x,
        max_y,
    }
}

#[test]
fn circle_bounds_are_center_plus_minus_radius() {
    let b = BoundingBox::of_circle(Point::new(100.0, 100.0), 20.0);
    assert_eq!(b, bbox(80.0, 80.0, 120.0, 120.0));
    assert_eq!(b.width(), 40.0);
    assert_eq!(b.height(), 40.0);
    assert_eq!(b.center(), Point::new(100.0, 100.0));
}

#[test]
fn union_of_pre_and_post_move_boxes() {
    let before = BoundingBox::of_circle(Point::new(100.0, 100.0), 20.0);
    let after = BoundingBox::of_circle(Point::new(150.0, 100.0), 20.0);
    let dirty = DirtyRect::union_of(before, after);
    assert_eq!(
        dirty,
        DirtyRect {
            x: 80.0,
            y: 80.0,
            width: 90.0,
            height: 40.0,
        }
    );
}

#[test]
fn union_contains_both_inputs_and_is_minimal() {
    let a = bbox(-5.0, 2.0, 10.0, 8.0);
    let b = bbox(0.0, -3.0, 4.0, 12.0);
    let u = DirtyRect::union_of(a, b);

    assert!(u.x <= a.min_x.min(b.min_x));
    assert!(u.y <= a.min_y.min(b.min_y));
    assert!(u.x + u.width >= a.max_x.max(b.max_x));
    assert!(u.y + u.height >= a.max_y.max(b.max_y));

    // Minimal: the edges coincide with the tightest enclosure.
    assert_eq!(u.x, -5.0);
    assert_eq!(u.y, -3.0);
    assert_eq!(u.width, 15.0);
    assert_eq!(u.height, 15.0);
}

#[test]
fn union_is_commutative() {
    let a = bbox(0.0, 0.0, 10.0, 10.0);
    let b = bbox(5.0, -2.0, 20.0, 7.0);
    assert_eq!(DirtyRect::union_of(a, b), DirtyRect::union_of(b, a));
}

#[test]
fn intersection_is_symmetric() {
    let cases = [
        (bbox(0.0, 0.0, 10.0, 10.0), bbox(5.0, 5.0, 15.0, 15.0)),
        (bbox(0.0, 0.0, 10.0, 10.0), bbox(40.0, 40.0, 50.0, 50.0)),
        (bbox(0.0, 0.0, 10.0, 10.0), bbox(10.0, 0.0, 20.0, 10.0)),
    ];
    for (a, b) in cases {
        assert_eq!(
            DirtyRect::from_box(a).intersects(b),
            DirtyRect::from_box(b).intersects(a),
        );
    }
}

#[test]
fn touching_edges_count_as_intersecting() {
    let dirty = DirtyRect {
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 10.0,
    };
    // Shares only the x = 10 edge.
    assert!(dirty.intersects(bbox(10.0, 0.0, 20.0, 10.0)));
    // Shares only the corner at (10, 10).
    assert!(dirty.intersects(bbox(10.0, 10.0, 20.0, 20.0)));
    // One unit of separation.
    assert!(!dirty.intersects(bbox(11.0, 0.0, 20.0, 10.0)));
}

#[test]
fn overlapping_and_disjoint_boxes() {
    let dirty = DirtyRect {
        x: 200.0,
        y: 200.0,
        width: 100.0,
        height: 100.0,
    };
    assert!(dirty.intersects(BoundingBox::of_circle(Point::new(220.0, 220.0), 10.0)));
    assert!(dirty.intersects(BoundingBox::of_circle(Point::new(195.0, 250.0), 10.0)));
    assert!(!dirty.intersects(BoundingBox::of_circle(Point::new(50.0, 50.0), 10.0)));
}

#[test]
fn rect_conversions_agree_with_fields() {
    let b = bbox(1.0, 2.0, 3.0, 5.0);
    assert_eq!(b.to_rect(), Rect::new(1.0, 2.0, 3.0, 5.0));
    let d = DirtyRect::from_box(b);
    assert_eq!(d.to_rect(), Rect::new(1.0, 2.0, 3.0, 5.0));
}
