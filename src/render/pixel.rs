use crate::foundation::core::{FrameRgba, Point, Rgba8Premul, SurfaceSize, SurfaceSpec};
use crate::foundation::error::{FrescoError, FrescoResult};
use crate::geometry::bounds::DirtyRect;
use crate::render::surface::Surface;

/// Integer rectangle in backing-store space, half-open on the max edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelRect {
    fn is_empty(self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    fn intersect(self, other: Self) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

/// CPU drawing surface over a premultiplied RGBA8 buffer.
///
/// The buffer is allocated once at `width * pixel_ratio` by
/// `height * pixel_ratio` physical pixels and never resized. Drawing takes
/// device-independent coordinates; the pixel-ratio scale is applied here, so
/// callers never see physical units. Regions are rasterized with outward
/// rounding, and clears and clips quantize through the same conversion, so a
/// clipped repaint covers exactly the pixels its clear disturbed.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    spec: SurfaceSpec,
    width: u32,
    height: u32,
    data: Vec<u8>,
    clips: Vec<PixelRect>,
}

impl PixelSurface {
    /// Allocate a surface for `spec`. This is the resource-acquisition
    /// boundary: a spec whose backing store would be empty or would overflow
    /// the address space is fatal and propagates to the caller.
    pub fn create(spec: SurfaceSpec) -> FrescoResult<Self> {
        let width = spec.device_width();
        let height = spec.device_height();
        if width == 0 || height == 0 {
            return Err(FrescoError::surface(format!(
                "backing store for {}x{}@{} would be empty",
                spec.width, spec.height, spec.pixel_ratio
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| FrescoError::surface("backing store dimensions overflow"))?;
        Ok(Self {
            spec,
            width,
            height,
            data: vec![0; len],
            clips: Vec::new(),
        })
    }

    /// The spec this surface was created with.
    pub fn spec(&self) -> SurfaceSpec {
        self.spec
    }

    fn full_rect(&self) -> PixelRect {
        PixelRect {
            x0: 0,
            y0: 0,
            x1: self.width,
            y1: self.height,
        }
    }

    fn active_clip(&self) -> PixelRect {
        self.clips.last().copied().unwrap_or_else(|| self.full_rect())
    }

    /// Outward-rounded conversion of a device-independent region to backing
    /// pixels, clamped to the surface.
    fn device_rect(&self, region: DirtyRect) -> PixelRect {
        if region.width <= 0.0 || region.height <= 0.0 {
            return PixelRect {
                x0: 0,
                y0: 0,
                x1: 0,
                y1: 0,
            };
        }
        let s = self.spec.pixel_ratio;
        let x0 = (region.x * s).floor().clamp(0.0, self.width as f64) as u32;
        let y0 = (region.y * s).floor().clamp(0.0, self.height as f64) as u32;
        let x1 = ((region.x + region.width) * s).ceil().clamp(0.0, self.width as f64) as u32;
        let y1 = ((region.y + region.height) * s).ceil().clamp(0.0, self.height as f64) as u32;
        PixelRect { x0, y0, x1, y1 }
    }

    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba8Premul) {
        let i = self.pixel_index(x, y);
        let dst = [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]];
        let out = over(dst, [color.r, color.g, color.b, color.a]);
        self.data[i..i + 4].copy_from_slice(&out);
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> SurfaceSize {
        self.spec.size()
    }

    fn clear_rect(&mut self, region: DirtyRect) -> FrescoResult<()> {
        let rect = self.device_rect(region).intersect(self.active_clip());
        if rect.is_empty() {
            return Ok(());
        }
        for y in rect.y0..rect.y1 {
            let start = self.pixel_index(rect.x0, y);
            let end = self.pixel_index(rect.x1 - 1, y) + 4;
            self.data[start..end].fill(0);
        }
        Ok(())
    }

    fn fill_rect(&mut self, region: DirtyRect, color: Rgba8Premul) -> FrescoResult<()> {
        let rect = self.device_rect(region).intersect(self.active_clip());
        if rect.is_empty() || color.a == 0 {
            return Ok(());
        }
        for y in rect.y0..rect.y1 {
            for x in rect.x0..rect.x1 {
                self.blend_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8Premul) -> FrescoResult<()> {
        if radius <= 0.0 || color.a == 0 {
            return Ok(());
        }
        let clip = self.active_clip();
        if clip.is_empty() {
            return Ok(());
        }
        let s = self.spec.pixel_ratio;
        let cx = center.x * s;
        let cy = center.y * s;
        let r = radius * s;
        let r2 = r * r;

        let y0 = (cy - r).floor().clamp(clip.y0 as f64, clip.y1 as f64) as u32;
        let y1 = (cy + r).ceil().clamp(clip.y0 as f64, clip.y1 as f64) as u32;
        let x0 = (cx - r).floor().clamp(clip.x0 as f64, clip.x1 as f64) as u32;
        let x1 = (cx + r).ceil().clamp(clip.x0 as f64, clip.x1 as f64) as u32;

        for y in y0..y1 {
            let dy = (y as f64 + 0.5) - cy;
            for x in x0..x1 {
                let dx = (x as f64 + 0.5) - cx;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, color);
                }
            }
        }
        Ok(())
    }

    fn push_clip(&mut self, region: DirtyRect) -> FrescoResult<()> {
        let rect = self.device_rect(region).intersect(self.active_clip());
        self.clips.push(rect);
        Ok(())
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn blit_frame(&mut self, frame: &FrameRgba) -> FrescoResult<()> {
        if frame.width != self.width || frame.height != self.height {
            return Err(FrescoError::render(format!(
                "blit_frame expects a {}x{} frame, got {}x{}",
                self.width, self.height, frame.width, frame.height
            )));
        }
        if frame.data.len() != self.data.len() {
            return Err(FrescoError::render(
                "blit_frame frame buffer length does not match its dimensions",
            ));
        }
        for (d, s) in self.data.chunks_exact_mut(4).zip(frame.data.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
        Ok(())
    }

    fn read_frame(&self) -> FrescoResult<FrameRgba> {
        Ok(FrameRgba {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        })
    }
}

/// Premultiplied source-over.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
