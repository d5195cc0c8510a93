use crate::error::{FrameError, Result};
use framebuffer::{Color, GraphicBuffer};
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// A decoded image, readable as a graphic buffer so it can be blitted
pub struct Bitmap(RgbaImage);

impl Bitmap {
    pub fn new(image: RgbaImage) -> Bitmap {
        Bitmap(image)
    }
}

impl GraphicBuffer<Color> for Bitmap {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn get_point(&self, x: i64, y: i64) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }

        self.0
            .get_pixel_checked(x as u32, y as u32)
            .map(|Rgba([r, g, b, alpha])| Color::rgba(*r, *g, *b, *alpha))
    }

    fn put_point(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 {
            return;
        }

        if let Some(pixel) = self.0.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = Rgba([color.r, color.g, color.b, color.alpha]);
        }
    }
}

/// Registered images, keyed by the file name they were loaded from
pub struct ImageStore {
    root: PathBuf,
    images: HashMap<String, Bitmap>,
}

impl ImageStore {
    /// Creates an empty store resolving names against the given directory
    pub fn new(root: impl Into<PathBuf>) -> ImageStore {
        ImageStore {
            root: root.into(),
            images: HashMap::new(),
        }
    }

    /// Decodes the named file and registers it, replacing any earlier image
    /// with the same name
    pub fn load(&mut self, name: &str) -> Result<()> {
        let path = self.root.join(name);
        let image = image::open(&path).map_err(|source| FrameError::Image {
            name: name.to_string(),
            source,
        })?;

        let image = image.to_rgba8();
        debug!(name, width = image.width(), height = image.height(), "registered image");
        self.images.insert(name.to_string(), Bitmap::new(image));
        Ok(())
    }

    /// Registers an already decoded image
    pub fn insert(&mut self, name: &str, image: RgbaImage) {
        self.images.insert(name.to_string(), Bitmap::new(image));
    }

    pub fn get(&self, name: &str) -> Option<&Bitmap> {
        self.images.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }
}
