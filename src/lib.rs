//! Fresco is a canvas-style animation sandbox built around a dirty-rectangle
//! partial-repaint renderer.
//!
//! # Pipeline overview
//!
//! 1. **Mutate**: the animation driver moves one randomly chosen circle per frame
//! 2. **Track**: the dirty rectangle is the union of the pre- and post-move bounding boxes
//! 3. **Decide**: full repaint when the dirty extent approaches the surface size, clipped otherwise
//! 4. **Repaint**: clear + clip + redraw only the shapes whose bounding boxes intersect the dirty
//!    rectangle
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all randomness flows through a seedable SplitMix64 generator.
//! - **No IO in renderers**: surfaces are in-memory pixel buffers; only the CLI touches files.
//! - **Premultiplied RGBA8** end-to-end: the pixel surface stores premultiplied pixels.
//!
//! Alongside the core, the crate carries a small catalog of self-contained demos
//! (bouncing ball, particle flow, the partial-repaint showcase, an offscreen batch
//! raster) that all draw through the same [`Surface`] abstraction.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod foundation;
mod geometry;
mod render;
mod scene;
mod showcase;

pub use driver::animate::{AnimationDriver, EDGE_MARGIN_PX, StepOutcome};
pub use driver::scheduler::{FixedRateScheduler, FrameScheduler, StepScheduler};
pub use foundation::core::{FrameRgba, Point, Rect, Rgba8Premul, SurfaceSize, SurfaceSpec, Vec2};
pub use foundation::error::{FrescoError, FrescoResult};
pub use foundation::math::Rng64;
pub use geometry::bounds::{BoundingBox, DirtyRect};
pub use render::partial::{FULL_REDRAW_SLACK_PX, PartialRenderer, RedrawMode, decide_redraw};
pub use render::pixel::PixelSurface;
pub use render::surface::Surface;
pub use scene::registry::ShapeRegistry;
pub use scene::shape::Circle;
pub use showcase::demos::Demo;
pub use showcase::demos::ball::BallDemo;
pub use showcase::demos::flow::FlowDemo;
pub use showcase::demos::offscreen::{OffscreenBatchDemo, OffscreenHandle, spawn_batch};
pub use showcase::demos::part_render::PartRenderDemo;
pub use showcase::registry::{DemoCategory, DemoEntry, build_demo, catalog};
