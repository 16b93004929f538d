use crate::driver::scheduler::FrameScheduler;
use crate::foundation::error::FrescoResult;
use crate::foundation::math::Rng64;
use crate::geometry::bounds::DirtyRect;
use crate::render::partial::{PartialRenderer, RedrawMode};
use crate::render::surface::Surface;
use crate::scene::registry::ShapeRegistry;

/// Margin kept clear of the surface edges when placing shapes.
pub const EDGE_MARGIN_PX: f64 = 20.0;

/// Outcome of a single animation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    /// Index of the shape that moved.
    pub shape: usize,
    /// Region that was cleared and repainted.
    pub dirty: DirtyRect,
    /// Repaint strategy that ran.
    pub mode: RedrawMode,
}

/// Per-frame mutate-and-repaint loop over a shape registry.
///
/// Each step moves one uniformly chosen shape to a random position inside the
/// surface margins, derives the dirty rectangle from the union of the shape's
/// pre- and post-move bounds, and hands it to the partial renderer. Steps run
/// to completion inside one scheduler slot; nothing here is shared across
/// threads.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    registry: ShapeRegistry,
    rng: Rng64,
}

impl AnimationDriver {
    /// Driver over `registry`, drawing step randomness from `seed`.
    pub fn new(registry: ShapeRegistry, seed: u64) -> Self {
        Self {
            registry,
            rng: Rng64::new(seed),
        }
    }

    /// The shapes the driver animates.
    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Paint the current scene in full. Call once before stepping so partial
    /// repaints have a complete frame to patch.
    pub fn paint(&self, surface: &mut dyn Surface) -> FrescoResult<()> {
        PartialRenderer::render_full(surface, &self.registry)
    }

    /// Run one animation step. Returns `None` when the registry is empty.
    #[tracing::instrument(skip(self, surface), level = "debug")]
    pub fn step(&mut self, surface: &mut dyn Surface) -> FrescoResult<Option<StepOutcome>> {
        let size = surface.size();
        let Some(index) = self.registry.pick_index(&mut self.rng) else {
            return Ok(None);
        };

        let new_x = self
            .rng
            .number_in_range(EDGE_MARGIN_PX, size.width - EDGE_MARGIN_PX);
        let new_y = self
            .rng
            .number_in_range(EDGE_MARGIN_PX, size.height - EDGE_MARGIN_PX);

        let Some(shape) = self.registry.get_mut(index) else {
            return Ok(None);
        };
        let before = shape.bounds();
        shape.update(new_x, new_y);
        let after = shape.bounds();

        let dirty = DirtyRect::union_of(before, after);
        let mode = PartialRenderer::render(surface, &self.registry, &dirty)?;
        Ok(Some(StepOutcome {
            shape: index,
            dirty,
            mode,
        }))
    }

    /// Step once per scheduler slot until the schedule is cancelled or
    /// exhausted. Returns the number of steps run.
    pub fn run(
        &mut self,
        surface: &mut dyn Surface,
        scheduler: &mut dyn FrameScheduler,
    ) -> FrescoResult<u64> {
        let mut frames = 0;
        while scheduler.next_frame() {
            self.step(surface)?;
            frames += 1;
        }
        Ok(frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/animate.rs"]
mod tests;
