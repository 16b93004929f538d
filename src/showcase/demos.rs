//! Self-contained animated demos drawing through the [`Surface`] abstraction.

use crate::foundation::error::FrescoResult;
use crate::render::surface::Surface;

pub mod ball;
pub mod flow;
pub mod offscreen;
pub mod part_render;

/// A self-contained animation that paints one frame per step.
///
/// Demos own their scene state; the caller owns the surface and the frame
/// cadence. A demo never schedules itself.
pub trait Demo {
    /// Draw the next frame onto `surface`.
    fn step(&mut self, surface: &mut dyn Surface) -> FrescoResult<()>;
}
