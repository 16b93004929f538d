use super::*;
use crate::foundation::core::{FrameRgba, Point, Rgba8Premul, SurfaceSize};
use crate::geometry::bounds::BoundingBox;
use crate::scene::shape::Circle;

struct MockSurface {
    size: SurfaceSize,
    calls: Vec<&'static str>,
    filled: Vec<Point>,
    cleared: Vec<DirtyRect>,
}

impl MockSurface {
    fn new(width: f64, height: f64) -> Self {
        Self {
            size: SurfaceSize { width, height },
            calls: Vec::new(),
            filled: Vec::new(),
            cleared: Vec::new(),
        }
    }
}

impl Surface for MockSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear_rect(&mut self, region: DirtyRect) -> FrescoResult<()> {
        self.calls.push("clear_rect");
        self.cleared.push(region);
        Ok(())
    }

    fn fill_rect(&mut self, _region: DirtyRect, _color: Rgba8Premul) -> FrescoResult<()> {
        self.calls.push("fill_rect");
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        _radius: f64,
        _color: Rgba8Premul,
    ) -> FrescoResult<()> {
        self.calls.push("fill_circle");
        self.filled.push(center);
        Ok(())
    }

    fn push_clip(&mut self, _region: DirtyRect) -> FrescoResult<()> {
        self.calls.push("push_clip");
        Ok(())
    }

    fn pop_clip(&mut self) {
        self.calls.push("pop_clip");
    }

    fn blit_frame(&mut self, _frame: &FrameRgba) -> FrescoResult<()> {
        self.calls.push("blit_frame");
        Ok(())
    }

    fn read_frame(&self) -> FrescoResult<FrameRgba> {
        Ok(FrameRgba {
            width: self.size.width as u32,
            height: self.size.height as u32,
            data: Vec::new(),
        })
    }
}

fn circle_at(x: f64, y: f64, r: f64) -> Circle {
    Circle::new(x, y, r, Rgba8Premul::opaque(1, 2, 3))
}

#[test]
fn fallback_triggers_on_either_axis() {
    let size = SurfaceSize {
        width: 500.0,
        height: 500.0,
    };
    let wide = DirtyRect {
        x: 0.0,
        y: 0.0,
        width: 480.0,
        height: 10.0,
    };
    let tall = DirtyRect {
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 480.0,
    };
    let small = DirtyRect {
        x: 200.0,
        y: 200.0,
        width: 100.0,
        height: 100.0,
    };
    assert_eq!(decide_redraw(size, &wide), RedrawMode::Full);
    assert_eq!(decide_redraw(size, &tall), RedrawMode::Full);
    assert_eq!(decide_redraw(size, &small), RedrawMode::Clipped);
}

#[test]
fn fallback_boundary_is_inclusive() {
    let size = SurfaceSize {
        width: 500.0,
        height: 500.0,
    };
    let at_slack = DirtyRect {
        x: 0.0,
        y: 0.0,
        width: 500.0 - FULL_REDRAW_SLACK_PX,
        height: 10.0,
    };
    let under_slack = DirtyRect {
        x: 0.0,
        y: 0.0,
        width: 500.0 - FULL_REDRAW_SLACK_PX - 1.0,
        height: 10.0,
    };
    assert_eq!(decide_redraw(size, &at_slack), RedrawMode::Full);
    assert_eq!(decide_redraw(size, &under_slack), RedrawMode::Clipped);
}

#[test]
fn clipped_repaint_clears_clips_and_draws_only_intersecting_shapes() {
    let mut registry = ShapeRegistry::new();
    registry.push(circle_at(220.0, 220.0, 10.0));
    registry.push(circle_at(50.0, 50.0, 10.0));
    registry.push(circle_at(295.0, 250.0, 10.0));

    let dirty = DirtyRect {
        x: 200.0,
        y: 200.0,
        width: 100.0,
        height: 100.0,
    };
    let mut surface = MockSurface::new(500.0, 500.0);
    let mode = PartialRenderer::render(&mut surface, &registry, &dirty).unwrap();

    assert_eq!(mode, RedrawMode::Clipped);
    assert_eq!(
        surface.calls,
        vec![
            "clear_rect",
            "push_clip",
            "fill_circle",
            "fill_circle",
            "pop_clip",
        ]
    );
    assert_eq!(surface.cleared, vec![dirty]);
    assert_eq!(
        surface.filled,
        vec![Point::new(220.0, 220.0), Point::new(295.0, 250.0)]
    );
}

#[test]
fn near_full_dirty_rect_falls_back_to_full_repaint() {
    let mut registry = ShapeRegistry::new();
    registry.push(circle_at(220.0, 220.0, 10.0));
    registry.push(circle_at(50.0, 50.0, 10.0));

    let dirty = DirtyRect {
        x: 0.0,
        y: 0.0,
        width: 480.0,
        height: 480.0,
    };
    let mut surface = MockSurface::new(500.0, 500.0);
    let mode = PartialRenderer::render(&mut surface, &registry, &dirty).unwrap();

    assert_eq!(mode, RedrawMode::Full);
    // Full repaint: one whole-surface clear, every shape drawn, no clip.
    assert_eq!(
        surface.calls,
        vec!["clear_rect", "fill_circle", "fill_circle"]
    );
    assert_eq!(
        surface.cleared,
        vec![DirtyRect {
            x: 0.0,
            y: 0.0,
            width: 500.0,
            height: 500.0,
        }]
    );
}

#[test]
fn shapes_touching_the_dirty_edge_are_repainted() {
    let mut registry = ShapeRegistry::new();
    // Bounds are [190, 210] x [240, 260]: touches the dirty rect's x = 200 edge region.
    registry.push(circle_at(190.0, 250.0, 10.0));

    let dirty = DirtyRect {
        x: 200.0,
        y: 200.0,
        width: 100.0,
        height: 100.0,
    };
    assert!(dirty.intersects(BoundingBox::of_circle(Point::new(190.0, 250.0), 10.0)));

    let mut surface = MockSurface::new(500.0, 500.0);
    PartialRenderer::render(&mut surface, &registry, &dirty).unwrap();
    assert_eq!(surface.filled.len(), 1);
}

#[test]
fn render_full_draws_every_shape_in_order() {
    let mut registry = ShapeRegistry::new();
    registry.push(circle_at(10.0, 10.0, 5.0));
    registry.push(circle_at(20.0, 20.0, 5.0));
    registry.push(circle_at(30.0, 30.0, 5.0));

    let mut surface = MockSurface::new(100.0, 100.0);
    PartialRenderer::render_full(&mut surface, &registry).unwrap();
    assert_eq!(
        surface.filled,
        vec![
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(30.0, 30.0),
        ]
    );
}
