use super::Rasterizer;
use crate::display::{Color, PixelSurface};

/// Which surface axis a line steps along.
///
/// Steep lines are stepped along y by transposing into a frame where the
/// long axis is always the first coordinate, then transposed back for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axes {
    /// Step along x
    Normal,
    /// Step along y (x and y swapped)
    Transposed,
}

impl Axes {
    /// Pick the stepping frame for a segment: transposed when |dy| > |dx|
    pub fn for_segment(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let span = |a: i32, b: i32| (b as i64 - a as i64).abs();
        if span(y0, y1) > span(x0, x1) {
            Axes::Transposed
        } else {
            Axes::Normal
        }
    }

    /// Surface coordinates to (major, minor)
    #[inline]
    pub fn project(self, x: i32, y: i32) -> (i32, i32) {
        match self {
            Axes::Normal => (x, y),
            Axes::Transposed => (y, x),
        }
    }

    /// (major, minor) back to surface coordinates
    #[inline]
    pub fn unproject(self, major: i32, minor: i32) -> (i32, i32) {
        // the transpose is its own inverse
        self.project(major, minor)
    }
}

/// Pixels of a Bresenham line, in stepping order.
///
/// Integer only. Yields exactly one point per unit step of the long axis,
/// `max(|dx|, |dy|) + 1` points in total, 8-connected. Both endpoint orders
/// produce the same sequence since the walk always starts from the endpoint
/// with the smaller long-axis coordinate.
///
/// Stepping state is kept in i64 so segments reaching the ends of the i32
/// range walk without overflow.
#[derive(Debug, Clone)]
pub struct LineSteps {
    axes: Axes,
    major: i64,
    end: i64,
    minor: i64,
    delta_major: i64,
    delta_minor: i64,
    err: i64,
    minor_step: i64,
}

impl LineSteps {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let axes = Axes::for_segment(x0, y0, x1, y1);
        let (mut a0, mut b0) = axes.project(x0, y0);
        let (mut a1, mut b1) = axes.project(x1, y1);
        if a0 > a1 {
            std::mem::swap(&mut a0, &mut a1);
            std::mem::swap(&mut b0, &mut b1);
        }

        let (a0, a1, b0, b1) = (a0 as i64, a1 as i64, b0 as i64, b1 as i64);
        let delta_major = a1 - a0;
        Self {
            axes,
            major: a0,
            end: a1,
            minor: b0,
            delta_major,
            delta_minor: (b1 - b0).abs(),
            err: delta_major / 2,
            minor_step: if b0 < b1 { 1 } else { -1 },
        }
    }

    pub fn axes(&self) -> Axes {
        self.axes
    }
}

impl Iterator for LineSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.major > self.end {
            return None;
        }
        // both lie between the endpoints here, so they fit in i32
        let point = self.axes.unproject(self.major as i32, self.minor as i32);

        self.err -= self.delta_minor;
        if self.err < 0 {
            self.minor += self.minor_step;
            self.err += self.delta_major;
        }
        self.major += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.major + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineSteps {}

impl<S: PixelSurface> Rasterizer<S> {
    /// Draw a single-pixel-wide line between two inclusive endpoints
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        for (x, y) in LineSteps::new(x0, y0, x1, y1) {
            self.write_pixel(x, y, color);
        }
    }
}
