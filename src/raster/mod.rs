//! Integer rasterizer over a single-pixel-write surface
//!
//! Every shape decomposes one way only: circles and rounded rectangles into
//! vertical spans, spans into lines, lines into `write_pixel` calls. Nothing
//! is ever read back from the surface and no state survives between calls.
//!
//! Coordinates are not clipped. Drawing outside the surface is the caller's
//! problem; what happens to such writes is up to the surface.

mod circle;
mod line;
mod span;

pub use circle::{ArcSpan, ArcSpans, Quadrants};
pub use line::{Axes, LineSteps};

use crate::display::{Color, PixelSurface, SurfaceConfig};

/// Shape drawing over a borrowed or owned surface of fixed size
pub struct Rasterizer<S> {
    surface: S,
    width: i32,
    height: i32,
}

impl<S: PixelSurface> Rasterizer<S> {
    pub fn new(surface: S, config: SurfaceConfig) -> Self {
        tracing::debug!(
            width = config.width,
            height = config.height,
            "rasterizer attached to surface"
        );
        Self {
            surface,
            width: config.width as i32,
            height: config.height as i32,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back
    pub fn into_inner(self) -> S {
        self.surface
    }

    #[inline]
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.surface.write_pixel(x, y, color);
    }

    /// Paint every pixel of the surface, one write at a time
    pub fn clear_screen(&mut self, color: Color) {
        tracing::trace!(color = color.value(), "clear screen");
        for x in 0..self.width {
            for y in 0..self.height {
                self.surface.write_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{PixelBuffer, WriteLog};

    #[test]
    fn test_clear_screen_writes_every_pixel_once() {
        let mut raster = Rasterizer::new(WriteLog::new(), SurfaceConfig::new(5, 3));
        raster.clear_screen(Color(9));
        let log = raster.into_inner();
        assert_eq!(log.len(), 15);
        assert_eq!(log.point_set().len(), 15);
        // column-major order
        assert_eq!(&log.points()[..4], &[(0, 0), (0, 1), (0, 2), (1, 0)]);
    }

    #[test]
    fn test_borrowed_surface() {
        let mut buffer = PixelBuffer::with_size(4, 4);
        {
            let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::new(4, 4));
            raster.clear_screen(Color::WHITE);
            raster.write_pixel(2, 1, Color::RED);
        }
        assert_eq!(buffer.count(Color::WHITE), 15);
        assert_eq!(buffer.get_pixel(2, 1), Some(Color::RED));
    }
}
