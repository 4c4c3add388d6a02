use pixel_raster::display::{Display, InputEvent, RenderTarget};
use pixel_raster::util::Rng;
use pixel_raster::{PixelBuffer, Rasterizer, Scene, SurfaceConfig};
use sdl2::keyboard::Keycode;
use tracing::subscriber::SetGlobalDefaultError;

const BURST_ORIGIN: (i32, i32) = (400, 200);
const SAVE_PATH: &str = "scene.json";

struct Options {
    surface: SurfaceConfig,
    vsync: bool,
    scene_path: Option<String>,
    burst: usize,
    seed: u64,
}

/// Parse command line arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        surface: SurfaceConfig::default(),
        vsync: true,
        scene_path: None,
        burst: 20,
        seed: 1,
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--no-vsync" => options.vsync = false,
            "--width" | "-w" => {
                if let Some(w) = value.and_then(|v| v.parse::<u32>().ok()) {
                    options.surface.width = w;
                }
                i += 1;
            },
            "--height" | "-h" => {
                if let Some(h) = value.and_then(|v| v.parse::<u32>().ok()) {
                    options.surface.height = h;
                }
                i += 1;
            },
            "--resolution" | "-r" => {
                match value.map(|v| SurfaceConfig::parse_resolution(v)) {
                    Some(Ok(surface)) => options.surface = surface,
                    Some(Err(e)) => eprintln!("Ignoring resolution: {}", e),
                    None => {},
                }
                i += 1;
            },
            "--scene" | "-s" => {
                options.scene_path = value.cloned();
                i += 1;
            },
            "--burst" => {
                if let Some(n) = value.and_then(|v| v.parse::<usize>().ok()) {
                    options.burst = n;
                }
                i += 1;
            },
            "--seed" => {
                if let Some(n) = value.and_then(|v| v.parse::<u64>().ok()) {
                    options.seed = n;
                }
                i += 1;
            },
            "--help" => {
                println!("Usage: pixel-raster [OPTIONS]");
                println!();
                println!("Options:");
                let SurfaceConfig { width, height } = options.surface;
                println!("  --width W, -w W           Surface width (default: {})", width);
                println!("  --height H, -h H          Surface height (default: {})", height);
                println!("  --resolution WxH, -r WxH  Surface size (e.g., 800x600)");
                println!("  --scene PATH, -s PATH     Draw a JSON scene instead of the landscape");
                println!("  --burst N                 Lines per burst (default: 20)");
                println!("  --seed N                  Burst RNG seed (default: 1)");
                println!("  --no-vsync                Disable VSync");
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            other => eprintln!("Ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    options
}

fn try_init_tracing() -> Result<(), SetGlobalDefaultError> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);
    tracing::dispatcher::set_global_default(registry.into())
}

/// Redraw `scene` from scratch into `buffer`
fn draw(buffer: &mut PixelBuffer, surface: SurfaceConfig, scene: &Scene) {
    let mut raster = Rasterizer::new(buffer, surface);
    scene.render(&mut raster);
}

fn main() -> Result<(), String> {
    if let Err(e) = try_init_tracing() {
        eprintln!("Tracing already initialised: {}", e);
    }
    let options = parse_args();

    let mut scene = match &options.scene_path {
        Some(path) => Scene::load(path)?,
        None => Scene::landscape(),
    };
    let surface = scene.surface.unwrap_or(options.surface);
    let mut rng = Rng::new(options.seed);

    let (mut display, texture_creator) =
        Display::with_options("pixel-raster", surface.width, surface.height, options.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, surface.width, surface.height)?;
    let mut buffer = surface.buffer();

    tracing::info!(
        width = surface.width,
        height = surface.height,
        scene = %scene.name,
        "viewer started"
    );
    println!("Controls:");
    println!("  Space   - New line burst");
    println!("  L       - Landscape");
    println!("  S       - Save current scene to {}", SAVE_PATH);
    println!("  Escape  - Quit");

    draw(&mut buffer, surface, &scene);

    'main: loop {
        let mut dirty = false;
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::Space) => {
                    scene = Scene::line_burst(surface, BURST_ORIGIN, options.burst, &mut rng);
                    dirty = true;
                },
                InputEvent::KeyDown(Keycode::L) => {
                    scene = Scene::landscape();
                    dirty = true;
                },
                InputEvent::KeyDown(Keycode::S) => match scene.save(SAVE_PATH) {
                    Ok(()) => println!("Scene saved to {}", SAVE_PATH),
                    Err(e) => eprintln!("Failed to save: {}", e),
                },
                InputEvent::KeyDown(_) => {},
            }
        }

        if dirty {
            draw(&mut buffer, surface, &scene);
        }
        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
