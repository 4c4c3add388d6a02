use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixel_raster::{Color, PixelBuffer, Rasterizer, Scene, SurfaceConfig};

fn bench_clear(c: &mut Criterion) {
    let mut buffer = PixelBuffer::new();
    c.bench_function("clear_screen_640x480", |b| {
        let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::default());
        b.iter(|| raster.clear_screen(black_box(Color::WHITE)));
    });
}

fn bench_lines(c: &mut Criterion) {
    let mut buffer = PixelBuffer::new();
    c.bench_function("line_fan_64", |b| {
        let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::default());
        b.iter(|| {
            for i in 0..64 {
                raster.draw_line(320, 240, i * 10, black_box(0), Color(i as u32));
                raster.draw_line(320, 240, i * 10, black_box(479), Color(i as u32));
            }
        });
    });
}

fn bench_fills(c: &mut Criterion) {
    let mut buffer = PixelBuffer::new();
    c.bench_function("fill_circle_r100", |b| {
        let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::default());
        b.iter(|| raster.fill_circle(320, 240, black_box(100), Color::RED));
    });
    c.bench_function("fill_rounded_rect_400x150", |b| {
        let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::default());
        b.iter(|| raster.fill_rounded_rect(black_box(50), 300, 400, 150, 60, Color::GREEN));
    });
    c.bench_function("landscape_scene", |b| {
        let scene = Scene::landscape();
        let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::default());
        b.iter(|| scene.render(&mut raster));
    });
}

criterion_group!(benches, bench_clear, bench_lines, bench_fills);
criterion_main!(benches);
