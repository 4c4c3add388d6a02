use super::Shape;
use crate::display::{PixelSurface, SurfaceConfig};
use crate::raster::Rasterizer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An ordered list of draw requests, replayed front to back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    /// Surface the scene was laid out for, if it cares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<SurfaceConfig>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surface: None,
            shapes: Vec::new(),
        }
    }

    pub fn with_surface(mut self, surface: SurfaceConfig) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Draw every shape in order; later shapes overwrite earlier ones
    pub fn render<S: PixelSurface>(&self, raster: &mut Rasterizer<S>) {
        tracing::debug!(scene = %self.name, shapes = self.shapes.len(), "rendering scene");
        for shape in &self.shapes {
            shape.draw(raster);
        }
    }

    /// Save scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| format!("{}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), "scene saved");
        Ok(())
    }

    /// Load scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let scene: Scene = serde_json::from_str(&json).map_err(|e| e.to_string())?;
        tracing::debug!(path = %path.display(), shapes = scene.shapes.len(), "scene loaded");
        Ok(scene)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{Color, PixelBuffer};

    fn sample() -> Scene {
        let mut scene = Scene::new("sample").with_surface(SurfaceConfig::new(64, 48));
        scene.push(Shape::Clear { color: Color::WHITE });
        scene.push(Shape::Circle {
            x: 20,
            y: 20,
            r: 5,
            color: Color::RED,
        });
        scene.push(Shape::Rect {
            x: 18,
            y: 18,
            w: 5,
            h: 5,
            color: Color::BLUE,
        });
        scene
    }

    #[test]
    fn test_save_and_load() {
        let name = format!("pixel-raster-scene-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let scene = sample();
        scene.save(&path).unwrap();
        let loaded = Scene::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = Scene::load("/nonexistent/pixel-raster/scene.json").unwrap_err();
        assert!(err.contains("scene.json"));
    }

    #[test]
    fn test_minimal_json() {
        let scene: Scene = serde_json::from_str(r#"{ "name": "empty" }"#).unwrap();
        assert!(scene.is_empty());
        assert_eq!(scene.surface, None);
    }

    #[test]
    fn test_render_overwrites_in_order() {
        let scene = sample();
        let mut buffer = PixelBuffer::with_size(64, 48);
        let mut raster = Rasterizer::new(&mut buffer, SurfaceConfig::new(64, 48));
        scene.render(&mut raster);
        assert_eq!(buffer.get_pixel(20, 20), Some(Color::BLUE));
        assert_eq!(buffer.get_pixel(20, 15), Some(Color::RED));
        assert_eq!(buffer.get_pixel(0, 0), Some(Color::WHITE));
        assert_eq!(buffer.count(Color::BLUE), 25);
    }
}
