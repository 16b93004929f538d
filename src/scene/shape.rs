use crate::foundation::core::{Point, Rgba8Premul};
use crate::geometry::bounds::BoundingBox;

/// A drawable filled circle with a cached enclosing box.
///
/// The bounds are derived state: they are recomputed synchronously on every
/// position change, so any intersection test that runs after a mutation sees
/// a box that is exactly `center ± radius` on each axis. Fields are private
/// to keep the cache from drifting out of sync.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    color: Rgba8Premul,
    bounds: BoundingBox,
}

impl Circle {
    /// A circle at `(x, y)` with the given radius and fill color.
    pub fn new(x: f64, y: f64, radius: f64, color: Rgba8Premul) -> Self {
        let center = Point::new(x, y);
        Self {
            center,
            radius,
            color,
            bounds: BoundingBox::of_circle(center, radius),
        }
    }

    /// Move the circle and recompute its bounds.
    pub fn update(&mut self, x: f64, y: f64) {
        self.center = Point::new(x, y);
        self.bounds = BoundingBox::of_circle(self.center, self.radius);
    }

    /// Current center position.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Fill color.
    pub fn color(&self) -> Rgba8Premul {
        self.color
    }

    /// Cached enclosing box, in sync with the current position.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}
