use crate::driver::animate::{AnimationDriver, EDGE_MARGIN_PX};
use crate::foundation::core::SurfaceSpec;
use crate::foundation::error::FrescoResult;
use crate::foundation::math::Rng64;
use crate::render::surface::Surface;
use crate::scene::registry::ShapeRegistry;
use crate::showcase::demos::Demo;

/// Shape count for the showcase field. Large enough that a full repaint per
/// frame is visibly more work than patching the dirty region.
pub const DEFAULT_SHAPE_COUNT: usize = 10_000;

/// The partial-repaint showcase: a dense field of random circles where one
/// circle per frame jumps to a random position and only the dirty region is
/// repainted.
#[derive(Clone, Debug)]
pub struct PartRenderDemo {
    driver: AnimationDriver,
    painted: bool,
}

impl PartRenderDemo {
    /// Field of [`DEFAULT_SHAPE_COUNT`] circles.
    pub fn new(spec: SurfaceSpec, seed: u64) -> FrescoResult<Self> {
        Self::with_count(spec, seed, DEFAULT_SHAPE_COUNT)
    }

    /// Field of `count` circles scattered inside the surface margins.
    pub fn with_count(spec: SurfaceSpec, seed: u64, count: usize) -> FrescoResult<Self> {
        let mut rng = Rng64::new(seed);
        let registry = ShapeRegistry::scatter(spec.size(), count, EDGE_MARGIN_PX, &mut rng);
        Ok(Self {
            driver: AnimationDriver::new(registry, rng.next_u64()),
            painted: false,
        })
    }

    /// The underlying driver, for inspection in tests.
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }
}

impl Demo for PartRenderDemo {
    fn step(&mut self, surface: &mut dyn Surface) -> FrescoResult<()> {
        if !self.painted {
            self.driver.paint(surface)?;
            self.painted = true;
            return Ok(());
        }
        self.driver.step(surface)?;
        Ok(())
    }
}
