use serde::{Deserialize, Serialize};

// ============================================================================
// Color
// ============================================================================

/// Opaque packed color token.
///
/// The rasterizer never looks at the bits, it only forwards them to the
/// surface. The frame buffer this crate was written for packs 12-bit
/// `0xRGB` values (one nibble per channel), which is what the window
/// viewer assumes when it presents a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000);
    pub const WHITE: Color = Color(0xfff);
    pub const RED: Color = Color(0xf00);
    pub const GREEN: Color = Color(0x0f0);
    pub const BLUE: Color = Color(0x00f);

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

// ============================================================================
// PixelSurface
// ============================================================================

/// The one capability a display exposes: write a single pixel.
///
/// Implementations decide what happens with coordinates outside the grid.
/// Callers (the rasterizer included) do not check bounds before writing.
pub trait PixelSurface {
    fn write_pixel(&mut self, x: i32, y: i32, color: Color);
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    #[inline]
    fn write_pixel(&mut self, x: i32, y: i32, color: Color) {
        (**self).write_pixel(x, y, color);
    }
}

/// Surface that records every write in order and stores nothing else.
///
/// Useful for checking exactly which coordinates a primitive touched,
/// including coordinates a real surface would reject.
#[derive(Debug, Clone, Default)]
pub struct WriteLog {
    writes: Vec<(i32, i32, Color)>,
}

impl WriteLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[(i32, i32, Color)] {
        &self.writes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Written coordinates in write order (duplicates kept)
    pub fn points(&self) -> Vec<(i32, i32)> {
        self.writes.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    /// Written coordinates, sorted and deduplicated
    pub fn point_set(&self) -> Vec<(i32, i32)> {
        let mut points = self.points();
        points.sort_unstable();
        points.dedup();
        points
    }
}

impl PixelSurface for WriteLog {
    fn write_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.writes.push((x, y, color));
    }
}
