use std::thread::JoinHandle;

use crate::foundation::core::{FrameRgba, Point, SurfaceSpec};
use crate::foundation::error::{FrescoError, FrescoResult};
use crate::foundation::math::Rng64;
use crate::render::pixel::PixelSurface;
use crate::render::surface::Surface;
use crate::showcase::demos::Demo;

/// Circle count for the offscreen batch.
pub const BATCH_COUNT: usize = 1_000;
const BATCH_RADIUS: f64 = 20.0;

/// A fire-and-forget batch render running on its own thread.
///
/// The worker builds its own surface from the spec, paints the batch, and
/// hands the finished frame back through [`OffscreenHandle::join`]. There is
/// no ongoing coordination and no shared mutable state with the spawner.
#[derive(Debug)]
pub struct OffscreenHandle {
    handle: JoinHandle<FrescoResult<FrameRgba>>,
}

impl OffscreenHandle {
    /// Block until the worker finishes and take its frame. Worker errors
    /// propagate; a panicked worker is reported as a render error.
    pub fn join(self) -> FrescoResult<FrameRgba> {
        self.handle
            .join()
            .map_err(|_| FrescoError::render("offscreen worker panicked"))?
    }
}

/// Spawn a worker that paints `count` random circles onto a fresh surface
/// built from `spec` and returns the finished frame.
#[tracing::instrument]
pub fn spawn_batch(spec: SurfaceSpec, count: usize, seed: u64) -> OffscreenHandle {
    let handle = std::thread::spawn(move || {
        let mut surface = PixelSurface::create(spec)?;
        let mut rng = Rng64::new(seed);
        for _ in 0..count {
            let x = rng.number_in_range(0.0, spec.width);
            let y = rng.number_in_range(0.0, spec.height);
            surface.fill_circle(Point::new(x, y), BATCH_RADIUS, rng.color())?;
        }
        surface.read_frame()
    });
    OffscreenHandle { handle }
}

/// The offscreen showcase: the first step performs the one-shot batch handoff
/// and composites the result; later steps re-composite the cached frame.
#[derive(Debug)]
pub struct OffscreenBatchDemo {
    spec: SurfaceSpec,
    seed: u64,
    frame: Option<FrameRgba>,
}

impl OffscreenBatchDemo {
    /// Demo rendering [`BATCH_COUNT`] circles off the caller's thread.
    pub fn new(spec: SurfaceSpec, seed: u64) -> FrescoResult<Self> {
        Ok(Self {
            spec,
            seed,
            frame: None,
        })
    }
}

impl Demo for OffscreenBatchDemo {
    fn step(&mut self, surface: &mut dyn Surface) -> FrescoResult<()> {
        if self.frame.is_none() {
            let handle = spawn_batch(self.spec, BATCH_COUNT, self.seed);
            self.frame = Some(handle.join()?);
        }
        match &self.frame {
            Some(frame) => surface.blit_frame(frame),
            None => Ok(()),
        }
    }
}
