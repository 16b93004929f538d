use crate::foundation::core::SurfaceSize;
use crate::foundation::error::FrescoResult;
use crate::geometry::bounds::DirtyRect;
use crate::render::surface::Surface;
use crate::scene::registry::ShapeRegistry;

/// Slack below which a partial repaint stops paying for itself: once the
/// dirty extent comes within this many device-independent pixels of the
/// surface extent on either axis, the frame is repainted in full.
pub const FULL_REDRAW_SLACK_PX: f64 = 50.0;

/// Repaint strategy chosen for a single frame.
///
/// The choice is recomputed from scratch every frame from the current dirty
/// rectangle and surface size; there is no persistent mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RedrawMode {
    /// Repaint the entire surface.
    Full,
    /// Clear and repaint only the dirty rectangle.
    Clipped,
}

/// Pick the repaint strategy for this frame.
pub fn decide_redraw(size: SurfaceSize, dirty: &DirtyRect) -> RedrawMode {
    if size.width - dirty.width <= FULL_REDRAW_SLACK_PX
        || size.height - dirty.height <= FULL_REDRAW_SLACK_PX
    {
        RedrawMode::Full
    } else {
        RedrawMode::Clipped
    }
}

/// Executes full and clipped repaints of a shape registry onto a surface.
pub struct PartialRenderer;

impl PartialRenderer {
    /// Repaint for the given dirty rectangle: full when the dirty extent
    /// approaches the surface size, otherwise clear the dirty region, clip to
    /// it, and redraw only the shapes whose bounds intersect it. Returns the
    /// mode that ran.
    #[tracing::instrument(skip(surface, registry), level = "debug")]
    pub fn render(
        surface: &mut dyn Surface,
        registry: &ShapeRegistry,
        dirty: &DirtyRect,
    ) -> FrescoResult<RedrawMode> {
        let mode = decide_redraw(surface.size(), dirty);
        match mode {
            RedrawMode::Full => Self::render_full(surface, registry)?,
            RedrawMode::Clipped => {
                surface.clear_rect(*dirty)?;
                surface.push_clip(*dirty)?;
                let drawn = draw_intersecting(surface, registry, dirty);
                surface.pop_clip();
                drawn?;
            }
        }
        Ok(mode)
    }

    /// Clear the whole surface and repaint every shape in draw order.
    #[tracing::instrument(skip(surface, registry), level = "debug")]
    pub fn render_full(surface: &mut dyn Surface, registry: &ShapeRegistry) -> FrescoResult<()> {
        let size = surface.size();
        surface.clear_rect(DirtyRect {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        })?;
        for shape in registry.iter() {
            surface.fill_circle(shape.center(), shape.radius(), shape.color())?;
        }
        Ok(())
    }
}

fn draw_intersecting(
    surface: &mut dyn Surface,
    registry: &ShapeRegistry,
    dirty: &DirtyRect,
) -> FrescoResult<()> {
    for shape in registry.iter() {
        if dirty.intersects(shape.bounds()) {
            surface.fill_circle(shape.center(), shape.radius(), shape.color())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/partial.rs"]
mod tests;
