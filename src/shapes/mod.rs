mod patterns;
mod scene;

pub use scene::Scene;

use crate::display::{Color, PixelSurface};
use crate::raster::Rasterizer;
use serde::{Deserialize, Serialize};

/// A single draw request, as stored in scene files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Clear {
        color: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    RoundedRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        r: i32,
        color: Color,
    },
    Circle {
        x: i32,
        y: i32,
        r: i32,
        color: Color,
    },
}

impl Shape {
    pub fn color(&self) -> Color {
        match *self {
            Shape::Clear { color }
            | Shape::Line { color, .. }
            | Shape::Rect { color, .. }
            | Shape::RoundedRect { color, .. }
            | Shape::Circle { color, .. } => color,
        }
    }

    pub fn draw<S: PixelSurface>(&self, raster: &mut Rasterizer<S>) {
        match *self {
            Shape::Clear { color } => raster.clear_screen(color),
            Shape::Line {
                x0,
                y0,
                x1,
                y1,
                color,
            } => raster.draw_line(x0, y0, x1, y1, color),
            Shape::Rect { x, y, w, h, color } => raster.fill_rect(x, y, w, h, color),
            Shape::RoundedRect {
                x,
                y,
                w,
                h,
                r,
                color,
            } => raster.fill_rounded_rect(x, y, w, h, r, color),
            Shape::Circle { x, y, r, color } => raster.fill_circle(x, y, r, color),
        }
    }
}
