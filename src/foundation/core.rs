use crate::foundation::error::{FrescoError, FrescoResult};

pub use kurbo::{Point, Rect, Vec2};

/// Sizing contract for a drawing surface: device-independent dimensions plus
/// the device pixel ratio applied when the backing store is allocated.
///
/// The backing store is `(width * pixel_ratio) x (height * pixel_ratio)`
/// physical pixels; drawing coordinates stay in device-independent units and
/// the surface applies the scale internally. A spec is fixed at creation; a
/// surface is never resized during a session.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSpec {
    /// Device-independent width.
    pub width: f64,
    /// Device-independent height.
    pub height: f64,
    /// Physical pixels per device-independent pixel.
    pub pixel_ratio: f64,
}

impl SurfaceSpec {
    /// Validate and build a spec. Dimensions and ratio must be finite and positive.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> FrescoResult<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(FrescoError::validation(
                "SurfaceSpec dimensions must be finite and > 0",
            ));
        }
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(FrescoError::validation(
                "SurfaceSpec pixel_ratio must be finite and > 0",
            ));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    /// Device-independent size of the drawing area.
    pub fn size(self) -> SurfaceSize {
        SurfaceSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Backing-store width in physical pixels.
    pub fn device_width(self) -> u32 {
        (self.width * self.pixel_ratio).round() as u32
    }

    /// Backing-store height in physical pixels.
    pub fn device_height(self) -> u32 {
        (self.height * self.pixel_ratio).round() as u32
    }
}

/// Device-independent size of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in device-independent pixels.
    pub width: f64,
    /// Height in device-independent pixels.
    pub height: f64,
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

/// A finished frame read back from a surface: premultiplied RGBA8 bytes at
/// backing-store (physical pixel) resolution, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
    /// `width * height * 4` premultiplied RGBA bytes.
    pub data: Vec<u8>,
}
