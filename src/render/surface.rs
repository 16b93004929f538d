use crate::foundation::core::{FrameRgba, Point, Rgba8Premul, SurfaceSize};
use crate::foundation::error::FrescoResult;
use crate::geometry::bounds::DirtyRect;

/// Drawing-target abstraction the renderers and demos paint through.
///
/// Coordinates are device-independent; an implementation owns the
/// device-pixel scale it was created with and applies it internally. The
/// trait is object-safe so rendering code takes `&mut dyn Surface` and tests
/// can substitute a recording mock.
pub trait Surface {
    /// Device-independent size of the drawing area.
    fn size(&self) -> SurfaceSize;

    /// Reset `region` to transparent.
    fn clear_rect(&mut self, region: DirtyRect) -> FrescoResult<()>;

    /// Fill `region` with `color`, compositing source-over.
    fn fill_rect(&mut self, region: DirtyRect, color: Rgba8Premul) -> FrescoResult<()>;

    /// Fill a circle at `center` with the given radius, compositing source-over.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8Premul) -> FrescoResult<()>;

    /// Restrict subsequent drawing to `region`, intersected with any clip
    /// already active.
    fn push_clip(&mut self, region: DirtyRect) -> FrescoResult<()>;

    /// Release the most recently pushed clip. Releasing with no active clip
    /// is a no-op.
    fn pop_clip(&mut self);

    /// Composite a finished frame over the whole surface. The frame must
    /// match the surface's backing-store resolution.
    fn blit_frame(&mut self, frame: &FrameRgba) -> FrescoResult<()>;

    /// Read the surface back as a premultiplied RGBA8 frame at backing-store
    /// resolution.
    fn read_frame(&self) -> FrescoResult<FrameRgba>;
}
