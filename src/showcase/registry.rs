use crate::foundation::core::SurfaceSpec;
use crate::foundation::error::{FrescoError, FrescoResult};
use crate::showcase::demos::Demo;
use crate::showcase::demos::ball::BallDemo;
use crate::showcase::demos::flow::FlowDemo;
use crate::showcase::demos::offscreen::OffscreenBatchDemo;
use crate::showcase::demos::part_render::PartRenderDemo;

/// Grouping used when listing the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoCategory {
    /// Plain animation demos.
    Basic,
    /// Rendering-technique demos.
    Optimization,
}

type BuildFn = fn(SurfaceSpec, u64) -> FrescoResult<Box<dyn Demo>>;

/// One row of the demo catalog.
#[derive(Clone, Copy)]
pub struct DemoEntry {
    /// Stable identifier used on the command line.
    pub slug: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Listing group.
    pub category: DemoCategory,
    build: BuildFn,
}

impl DemoEntry {
    /// Construct this entry's demo for a surface spec and seed.
    pub fn build(&self, spec: SurfaceSpec, seed: u64) -> FrescoResult<Box<dyn Demo>> {
        (self.build)(spec, seed)
    }
}

fn build_ball(spec: SurfaceSpec, seed: u64) -> FrescoResult<Box<dyn Demo>> {
    Ok(Box::new(BallDemo::new(spec, seed)?))
}

fn build_flow(spec: SurfaceSpec, seed: u64) -> FrescoResult<Box<dyn Demo>> {
    Ok(Box::new(FlowDemo::new(spec, seed)?))
}

fn build_part_render(spec: SurfaceSpec, seed: u64) -> FrescoResult<Box<dyn Demo>> {
    Ok(Box::new(PartRenderDemo::new(spec, seed)?))
}

fn build_offscreen(spec: SurfaceSpec, seed: u64) -> FrescoResult<Box<dyn Demo>> {
    Ok(Box::new(OffscreenBatchDemo::new(spec, seed)?))
}

const CATALOG: &[DemoEntry] = &[
    DemoEntry {
        slug: "ball",
        title: "Bouncing ball",
        category: DemoCategory::Basic,
        build: build_ball,
    },
    DemoEntry {
        slug: "flow",
        title: "Particle flow",
        category: DemoCategory::Basic,
        build: build_flow,
    },
    DemoEntry {
        slug: "part-render",
        title: "Partial repaint",
        category: DemoCategory::Optimization,
        build: build_part_render,
    },
    DemoEntry {
        slug: "offscreen",
        title: "Offscreen batch raster",
        category: DemoCategory::Optimization,
        build: build_offscreen,
    },
];

/// The demo catalog, in listing order.
pub fn catalog() -> &'static [DemoEntry] {
    CATALOG
}

/// Build the demo registered under `slug`.
pub fn build_demo(slug: &str, spec: SurfaceSpec, seed: u64) -> FrescoResult<Box<dyn Demo>> {
    let entry = CATALOG
        .iter()
        .find(|e| e.slug == slug)
        .ok_or_else(|| FrescoError::validation(format!("unknown demo '{slug}'")))?;
    entry.build(spec, seed)
}
