//! Built-in scenes

use super::{Scene, Shape};
use crate::display::{Color, SurfaceConfig};
use crate::util::Rng;

const HILL_DARK: Color = Color(0x092);
const HILL_MID: Color = Color(0x0db);
const HILL_LIGHT: Color = Color(0x16d);
const BURST_BACKGROUND: Color = Color(0x008);

fn rounded(x: i32, y: i32, w: i32, h: i32, r: i32, color: Color) -> Shape {
    Shape::RoundedRect {
        x,
        y,
        w,
        h,
        r,
        color,
    }
}

impl Scene {
    /// Two layered hills on a white sky, a black ground strip and two
    /// framed panels, laid out for 640x480.
    ///
    /// The near hill starts left of the surface; its columns land wherever
    /// the surface puts negative coordinates.
    pub fn landscape() -> Self {
        let mut scene = Scene::new("landscape").with_surface(SurfaceConfig::default());
        scene.extend([
            Shape::Clear {
                color: Color::WHITE,
            },
            // near hill, radii clamp to half the height
            rounded(-50, 300, 400, 150, 600, HILL_DARK),
            rounded(-40, 305, 380, 140, 200, HILL_MID),
            rounded(-30, 315, 360, 120, 200, HILL_LIGHT),
            // far hill
            rounded(330, 130, 300, 90, 600, HILL_DARK),
            rounded(340, 135, 280, 80, 200, HILL_MID),
            rounded(350, 140, 260, 70, 200, HILL_LIGHT),
            // ground strip with a text panel
            Shape::Rect {
                x: 0,
                y: 380,
                w: 640,
                h: 100,
                color: Color::BLACK,
            },
            rounded(10, 385, 620, 95, 20, Color::WHITE),
            // lower right panel
            rounded(400, 240, 240, 140, 20, Color::BLACK),
            rounded(405, 245, 230, 130, 20, Color::WHITE),
            // upper left panel
            rounded(3, 40, 240, 80, 20, Color::BLACK),
            rounded(8, 45, 230, 70, 20, Color::WHITE),
        ]);
        scene
    }

    /// `count` lines fanning out from `origin` to random points on the
    /// surface, in random 9-bit colors, over a dark green background.
    pub fn line_burst(
        surface: SurfaceConfig,
        origin: (i32, i32),
        count: usize,
        rng: &mut Rng,
    ) -> Self {
        let mut scene = Scene::new("line burst").with_surface(surface);
        scene.push(Shape::Clear {
            color: BURST_BACKGROUND,
        });
        for _ in 0..count {
            let x1 = rng.below(surface.width) as i32;
            let y1 = rng.below(surface.height) as i32;
            let color = Color(rng.below(512));
            scene.push(Shape::Line {
                x0: origin.0,
                y0: origin.1,
                x1,
                y1,
                color,
            });
        }
        scene
    }
}
