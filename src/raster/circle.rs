use super::Rasterizer;
use crate::display::{Color, PixelSurface};

/// Which side pairs of a circle a quadrant fill paints.
///
/// `RIGHT` covers the upper and lower right quadrants, `LEFT` the two on the
/// left. Rounded rectangles use one side per call; full circles use `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quadrants(u8);

impl Quadrants {
    pub const NONE: Quadrants = Quadrants(0);
    pub const RIGHT: Quadrants = Quadrants(0b01);
    pub const LEFT: Quadrants = Quadrants(0b10);
    pub const ALL: Quadrants = Quadrants(0b11);

    /// Build from the raw corner bits (bit 0 right, bit 1 left)
    pub const fn from_bits(bits: u8) -> Self {
        Quadrants(bits & 0b11)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Quadrants) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Quadrants {
    type Output = Quadrants;

    fn bitor(self, rhs: Quadrants) -> Quadrants {
        Quadrants(self.0 | rhs.0)
    }
}

/// One column of a filled arc, relative to the circle center.
///
/// The column sits at `dx` either side of the center and runs from `dy`
/// above it to `dy` below it (`2 * dy + 1` pixels before any stretch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcSpan {
    pub dx: i32,
    pub dy: i32,
}

/// Midpoint circle walk producing the fill columns of one half-circle side,
/// center column excluded.
///
/// Each step of the walk over the first octant can yield a column at the
/// current `x` and, when `y` has just moved, the mirrored column at the
/// previous `y`. A column is never produced twice.
#[derive(Debug, Clone)]
pub struct ArcSpans {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
    prev_x: i32,
    prev_y: i32,
    pending: Option<ArcSpan>,
}

impl ArcSpans {
    pub fn new(r: i32) -> Self {
        Self {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
            prev_x: 0,
            prev_y: r,
            pending: None,
        }
    }
}

impl Iterator for ArcSpans {
    type Item = ArcSpan;

    fn next(&mut self) -> Option<ArcSpan> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }

        while self.x < self.y {
            if self.f >= 0 {
                self.y -= 1;
                self.ddf_y += 2;
                self.f += self.ddf_y;
            }
            self.x += 1;
            self.ddf_x += 2;
            self.f += self.ddf_x;

            let inner = (self.x < self.y + 1).then_some(ArcSpan {
                dx: self.x,
                dy: self.y,
            });
            let outer = (self.y != self.prev_y).then_some(ArcSpan {
                dx: self.prev_y,
                dy: self.prev_x,
            });
            if outer.is_some() {
                self.prev_y = self.y;
            }
            self.prev_x = self.x;

            match (inner, outer) {
                (Some(a), b) => {
                    self.pending = b;
                    return Some(a);
                },
                (None, Some(b)) => return Some(b),
                (None, None) => {},
            }
        }
        None
    }
}

impl<S: PixelSurface> Rasterizer<S> {
    /// Solid disc of radius `r` centered on (x0, y0), `2r + 1` pixels across
    pub fn fill_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        self.draw_vertical_span(x0, y0 - r, 2 * r + 1, color);
        self.fill_circle_quadrants(x0, y0, r, Quadrants::ALL, 0, color);
    }

    /// Fill the selected sides of a circle, center column excluded.
    ///
    /// Every column is lengthened downward by `stretch` pixels, which turns a
    /// pair of quarter arcs into a rounded edge `stretch` pixels taller.
    pub fn fill_circle_quadrants(
        &mut self,
        x0: i32,
        y0: i32,
        r: i32,
        quadrants: Quadrants,
        stretch: i32,
        color: Color,
    ) {
        let extra = stretch + 1;
        for ArcSpan { dx, dy } in ArcSpans::new(r) {
            let top = y0 - dy;
            let height = 2 * dy + extra;
            if quadrants.contains(Quadrants::RIGHT) {
                self.draw_vertical_span(x0 + dx, top, height, color);
            }
            if quadrants.contains(Quadrants::LEFT) {
                self.draw_vertical_span(x0 - dx, top, height, color);
            }
        }
    }
}
