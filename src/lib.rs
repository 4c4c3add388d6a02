//! Integer software rasterizer for frame buffers that can only be written one
//! pixel at a time.
//!
//! ```
//! use pixel_raster::{Color, PixelBuffer, Rasterizer, SurfaceConfig};
//!
//! let mut buffer = PixelBuffer::new();
//! let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::default());
//! raster.clear_screen(Color::BLACK);
//! raster.fill_rounded_rect(10, 10, 120, 40, 8, Color(0x0db));
//! raster.draw_line(0, 0, 4, 2, Color::RED);
//! assert_eq!(buffer.get_pixel(2, 1), Some(Color::RED));
//! ```

pub mod display;
pub mod raster;
pub mod shapes;
pub mod util;

pub use display::{Color, PixelBuffer, PixelSurface, SurfaceConfig, WriteLog};
pub use raster::{Quadrants, Rasterizer};
pub use shapes::{Scene, Shape};
