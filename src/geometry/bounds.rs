use crate::foundation::core::{Point, Rect};

/// Axis-aligned box fully enclosing a drawable's visible extent.
///
/// Stored in min/max form. For a circle the bounds are exactly
/// `center ± radius` on each axis; [`crate::Circle::update`] keeps the cached
/// copy in sync with the position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Right edge.
    pub max_x: f64,
    /// Bottom edge.
    pub max_y: f64,
}

impl BoundingBox {
    /// Exact bounds of a circle: center ± radius on each axis.
    pub fn of_circle(center: Point, radius: f64) -> Self {
        Self {
            min_x: center.x - radius,
            min_y: center.y - radius,
            max_x: center.x + radius,
            max_y: center.y + radius,
        }
    }

    /// Horizontal extent.
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Geometric center.
    pub fn center(self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Conversion to a [`kurbo::Rect`].
    pub fn to_rect(self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// Minimal region that changed since the last repaint, in origin + extent form.
///
/// A dirty rectangle lives for exactly one frame: it is recomputed from the
/// moved shape's pre- and post-move bounds and discarded once the repaint
/// consumes it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirtyRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl DirtyRect {
    /// The tightest rectangle containing both boxes: the region that must be
    /// cleared and repainted to erase a shape's old appearance and paint its
    /// new one.
    pub fn union_of(a: BoundingBox, b: BoundingBox) -> Self {
        let x = a.min_x.min(b.min_x);
        let y = a.min_y.min(b.min_y);
        let max_x = a.max_x.max(b.max_x);
        let max_y = a.max_y.max(b.max_y);
        Self {
            x,
            y,
            width: max_x - x,
            height: max_y - y,
        }
    }

    /// A dirty region covering a single box.
    pub fn from_box(b: BoundingBox) -> Self {
        Self {
            x: b.min_x,
            y: b.min_y,
            width: b.width(),
            height: b.height(),
        }
    }

    /// Axis-aligned overlap test against a bounding box, in center +
    /// half-extent form. Inclusive at equality: boxes sharing an edge count
    /// as intersecting, so seams at the clip boundary are repainted.
    pub fn intersects(&self, bounds: BoundingBox) -> bool {
        let half_w = bounds.width() / 2.0;
        let half_h = bounds.height() / 2.0;
        let center = bounds.center();
        let self_center_x = self.x + self.width / 2.0;
        let self_center_y = self.y + self.height / 2.0;

        let dx = (self_center_x - center.x).abs();
        let dy = (self_center_y - center.y).abs();
        dx <= half_w + self.width / 2.0 && dy <= half_h + self.height / 2.0
    }

    /// Conversion to a [`kurbo::Rect`].
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bounds.rs"]
mod tests;
