use super::surface::{Color, PixelSurface};
use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

// ============================================================================
// PixelBuffer
// ============================================================================

/// In-memory frame buffer addressed the same way as the hardware one:
/// one packed color per pixel, row-major, linear offset `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a new pixel buffer with default resolution (640x480)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new pixel buffer with custom resolution, filled with black
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            pixels: vec![color; width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Linear offset of (x, y), computed without any bounds interpretation
    #[inline]
    fn linear_offset(&self, x: i32, y: i32) -> i64 {
        y as i64 * self.width as i64 + x as i64
    }

    /// Read a pixel (bounds checked)
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.linear_offset(x, y) as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Coordinates of every pixel that differs from `background`, row-major
    pub fn painted(&self, background: Color) -> Vec<(i32, i32)> {
        let width = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != background)
            .map(|(i, _)| ((i % width) as i32, (i / width) as i32))
            .collect()
    }

    /// Expand every pixel into RGBA8888 bytes (A, B, G, R in memory) using
    /// `decode` to interpret the packed color.
    pub fn to_rgba_bytes(&self, decode: impl Fn(Color) -> (u8, u8, u8)) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &color in &self.pixels {
            let (r, g, b) = decode(color);
            bytes.extend_from_slice(&[255, b, g, r]);
        }
        bytes
    }
}

impl PixelSurface for PixelBuffer {
    /// Writes at linear offset `y * width + x`. An `x` outside the row spills
    /// into the neighbouring row, as linear addressing does; offsets outside
    /// the whole buffer are dropped.
    #[inline]
    fn write_pixel(&mut self, x: i32, y: i32, color: Color) {
        let offset = self.linear_offset(x, y);
        if offset >= 0 && (offset as usize) < self.pixels.len() {
            self.pixels[offset as usize] = color;
        }
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
