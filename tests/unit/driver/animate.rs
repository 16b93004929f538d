use super::*;
use crate::driver::scheduler::StepScheduler;
use crate::foundation::core::{Rgba8Premul, SurfaceSize, SurfaceSpec};
use crate::render::partial::decide_redraw;
use crate::render::pixel::PixelSurface;
use crate::scene::shape::Circle;

fn fixed_registry() -> ShapeRegistry {
    let mut registry = ShapeRegistry::new();
    for i in 0..5 {
        let offset = 60.0 + 40.0 * i as f64;
        registry.push(Circle::new(
            offset,
            offset,
            10.0,
            Rgba8Premul::opaque(i as u8, 0, 0),
        ));
    }
    registry
}

fn surface_500() -> PixelSurface {
    PixelSurface::create(SurfaceSpec::new(500.0, 500.0, 1.0).unwrap()).unwrap()
}

#[test]
fn step_moves_exactly_one_shape_inside_the_margins() {
    let mut surface = surface_500();
    let mut driver = AnimationDriver::new(fixed_registry(), 17);
    driver.paint(&mut surface).unwrap();

    let before: Vec<_> = driver.registry().iter().map(|c| c.center()).collect();
    let outcome = driver.step(&mut surface).unwrap().unwrap();
    let after: Vec<_> = driver.registry().iter().map(|c| c.center()).collect();

    let moved: Vec<_> = (0..before.len())
        .filter(|&i| before[i] != after[i])
        .collect();
    assert!(moved.len() <= 1);
    if let Some(&i) = moved.first() {
        assert_eq!(i, outcome.shape);
    }

    let new_center = after[outcome.shape];
    assert!(new_center.x >= EDGE_MARGIN_PX && new_center.x <= 500.0 - EDGE_MARGIN_PX);
    assert!(new_center.y >= EDGE_MARGIN_PX && new_center.y <= 500.0 - EDGE_MARGIN_PX);
}

#[test]
fn step_dirty_rect_covers_old_and_new_bounds() {
    let mut surface = surface_500();
    let mut driver = AnimationDriver::new(fixed_registry(), 23);
    driver.paint(&mut surface).unwrap();

    let before: Vec<_> = driver.registry().iter().map(|c| c.bounds()).collect();
    let outcome = driver.step(&mut surface).unwrap().unwrap();
    let old = before[outcome.shape];
    let new = driver
        .registry()
        .get(outcome.shape)
        .map(|c| c.bounds())
        .unwrap();

    for b in [old, new] {
        assert!(outcome.dirty.x <= b.min_x);
        assert!(outcome.dirty.y <= b.min_y);
        assert!(outcome.dirty.x + outcome.dirty.width >= b.max_x);
        assert!(outcome.dirty.y + outcome.dirty.height >= b.max_y);
    }
}

#[test]
fn step_on_an_empty_registry_does_nothing() {
    let mut surface = surface_500();
    let mut driver = AnimationDriver::new(ShapeRegistry::new(), 1);
    assert_eq!(driver.step(&mut surface).unwrap(), None);
}

#[test]
fn run_consumes_the_scheduler_budget() {
    let mut surface = surface_500();
    let mut driver = AnimationDriver::new(fixed_registry(), 5);
    driver.paint(&mut surface).unwrap();

    let mut scheduler = StepScheduler::new(4);
    let frames = driver.run(&mut surface, &mut scheduler).unwrap();
    assert_eq!(frames, 4);
    assert!(!scheduler.next_frame());
}

#[test]
fn cancelled_scheduler_runs_zero_steps() {
    let mut surface = surface_500();
    let mut driver = AnimationDriver::new(fixed_registry(), 5);

    let mut scheduler = StepScheduler::new(100);
    scheduler.cancel();
    scheduler.cancel();
    assert_eq!(driver.run(&mut surface, &mut scheduler).unwrap(), 0);
}

#[test]
fn step_mode_matches_the_fallback_decision() {
    let mut surface = surface_500();
    let mut driver = AnimationDriver::new(fixed_registry(), 29);
    driver.paint(&mut surface).unwrap();

    let size = SurfaceSize {
        width: 500.0,
        height: 500.0,
    };
    for _ in 0..20 {
        let outcome = driver.step(&mut surface).unwrap().unwrap();
        assert_eq!(outcome.mode, decide_redraw(size, &outcome.dirty));
    }
}
