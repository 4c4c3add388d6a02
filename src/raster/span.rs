use super::{Quadrants, Rasterizer};
use crate::display::{Color, PixelSurface};

impl<S: PixelSurface> Rasterizer<S> {
    /// Vertical run of `height` pixels going down from (x, y).
    /// Nothing is drawn for `height <= 0`.
    pub fn draw_vertical_span(&mut self, x: i32, y: i32, height: i32, color: Color) {
        if height <= 0 {
            return;
        }
        self.draw_line(x, y, x, y + height - 1, color);
    }

    /// Horizontal run of `width` pixels going right from (x, y).
    /// Nothing is drawn for `width <= 0`.
    pub fn draw_horizontal_span(&mut self, x: i32, y: i32, width: i32, color: Color) {
        if width <= 0 {
            return;
        }
        self.draw_line(x, y, x + width - 1, y, color);
    }

    /// Solid rectangle `[x, x+w) x [y, y+h)`, one vertical span per column
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for column in x..x + w {
            self.draw_vertical_span(column, y, h, color);
        }
    }

    /// Solid rectangle with quarter-circle corners of radius `r`.
    ///
    /// `r` is clamped to half the shorter side. The straight middle section is
    /// a plain rect; each side pair of corners is a quadrant fill stretched
    /// down by the height left over between the two arcs.
    pub fn fill_rounded_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32, color: Color) {
        let max_radius = w.min(h) / 2;
        let r = r.min(max_radius);

        self.fill_rect(x + r, y, w - 2 * r, h, color);

        let stretch = h - 2 * r - 1;
        self.fill_circle_quadrants(x + w - r - 1, y + r, r, Quadrants::RIGHT, stretch, color);
        self.fill_circle_quadrants(x + r, y + r, r, Quadrants::LEFT, stretch, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{PixelBuffer, SurfaceConfig, WriteLog};

    fn logged(draw: impl FnOnce(&mut Rasterizer<WriteLog>)) -> WriteLog {
        let mut raster = Rasterizer::new(WriteLog::new(), SurfaceConfig::default());
        draw(&mut raster);
        raster.into_inner()
    }

    fn buffer(draw: impl FnOnce(&mut Rasterizer<&mut PixelBuffer>)) -> PixelBuffer {
        let mut buffer = PixelBuffer::new();
        let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::default());
        draw(&mut raster);
        buffer
    }

    #[test]
    fn test_empty_spans_draw_nothing() {
        let log = logged(|r| {
            r.draw_vertical_span(3, 3, 0, Color::RED);
            r.draw_vertical_span(3, 3, -4, Color::RED);
            r.draw_horizontal_span(3, 3, 0, Color::RED);
            r.draw_horizontal_span(3, 3, -1, Color::RED);
            r.fill_rect(3, 3, 0, 5, Color::RED);
            r.fill_rect(3, 3, 5, 0, Color::RED);
        });
        assert!(log.is_empty());
    }

    #[test]
    fn test_spans_touch_each_pixel_once() {
        let log = logged(|r| r.draw_vertical_span(7, -2, 6, Color::RED));
        assert_eq!(log.points(), (-2..4).map(|y| (7, y)).collect::<Vec<_>>());

        let log = logged(|r| r.draw_horizontal_span(-1, 9, 4, Color::RED));
        assert_eq!(log.points(), vec![(-1, 9), (0, 9), (1, 9), (2, 9)]);
    }

    #[test]
    fn test_fill_rect_exact_area() {
        let log = logged(|r| r.fill_rect(10, 10, 5, 3, Color(0x7)));
        assert_eq!(log.len(), 15);
        let set = log.point_set();
        assert_eq!(set.len(), 15);
        assert!(set
            .iter()
            .all(|&(x, y)| (10..15).contains(&x) && (10..13).contains(&y)));
        assert!(log.writes().iter().all(|w| w.2 == Color(0x7)));
    }

    #[test]
    fn test_zero_radius_matches_rect() {
        let rounded = buffer(|r| r.fill_rounded_rect(20, 30, 17, 9, 0, Color::GREEN));
        let plain = buffer(|r| r.fill_rect(20, 30, 17, 9, Color::GREEN));
        assert_eq!(rounded, plain);
    }

    #[test]
    fn test_radius_is_clamped() {
        let oversized = buffer(|r| r.fill_rounded_rect(40, 40, 30, 12, 600, Color::WHITE));
        let clamped = buffer(|r| r.fill_rounded_rect(40, 40, 30, 12, 6, Color::WHITE));
        assert_eq!(oversized, clamped);
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let (x, y, w, h) = (50, 60, 40, 25);
        let out = buffer(|r| r.fill_rounded_rect(x, y, w, h, 8, Color::RED));
        let painted = out.painted(Color::BLACK);
        assert!(painted
            .iter()
            .all(|&(px, py)| px >= x && px < x + w && py >= y && py < y + h));
        // middle row spans the full width
        for px in x..x + w {
            assert_eq!(out.get_pixel(px, y + h / 2), Some(Color::RED));
        }
        // corners are cut
        assert_eq!(out.get_pixel(x, y), Some(Color::BLACK));
        assert_eq!(out.get_pixel(x + w - 1, y + h - 1), Some(Color::BLACK));
        // mirror symmetric left to right
        for &(px, py) in &painted {
            assert_eq!(out.get_pixel(2 * x + w - 1 - px, py), Some(Color::RED));
        }
    }
}
