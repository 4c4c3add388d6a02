use super::{Color, PixelBuffer};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
}

/// Interpret a packed 12-bit `0xRGB` color, widening each nibble to 8 bits
pub fn decode_rgb444(color: Color) -> (u8, u8, u8) {
    let v = color.value();
    let nibble = |shift: u32| ((v >> shift) & 0xf) as u8 * 17;
    (nibble(8), nibble(4), nibble(0))
}

impl Display {
    /// Create display with custom resolution and VSync settings
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                canvas,
                event_pump,
            },
            texture_creator,
        ))
    }

    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        buffer: &PixelBuffer,
    ) -> Result<(), String> {
        if (buffer.width(), buffer.height()) != (target.width, target.height) {
            return Err(format!(
                "buffer is {}x{} but render target is {}x{}",
                buffer.width(),
                buffer.height(),
                target.width,
                target.height
            ));
        }
        let bytes = buffer.to_rgba_bytes(decode_rgb444);
        target
            .texture
            .update(None, &bytes, (buffer.width() * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    /// Create render target with custom resolution
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}
