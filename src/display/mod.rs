mod pixel_buffer;
mod surface;
#[cfg(feature = "window")]
mod window;

pub use pixel_buffer::PixelBuffer;
pub use surface::{Color, PixelSurface, WriteLog};
#[cfg(feature = "window")]
pub use window::{decode_rgb444, Display, InputEvent, RenderTarget};

use serde::{Deserialize, Serialize};

/// Frame buffer geometry of the 640x480 video core (HMAX x VMAX)
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Fixed surface dimensions handed to the rasterizer at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl SurfaceConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a `WxH` resolution string (e.g. `800x600`)
    pub fn parse_resolution(text: &str) -> Result<Self, String> {
        let (w, h) = text
            .split_once('x')
            .ok_or_else(|| format!("expected WxH, got '{}'", text))?;
        let width = w.trim().parse::<u32>().map_err(|e| e.to_string())?;
        let height = h.trim().parse::<u32>().map_err(|e| e.to_string())?;
        Ok(Self::new(width, height))
    }

    /// A buffer matching this geometry
    pub fn buffer(&self) -> PixelBuffer {
        PixelBuffer::with_size(self.width, self.height)
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
