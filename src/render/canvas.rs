//! RGBA pixel buffer with the primitive draw operations

use std::path::Path;

use glam::IVec2;
use image::error::{UnsupportedError, UnsupportedErrorKind};
use image::{ImageError, ImageFormat, RgbaImage};

use super::geometry::{ellipse_outline, ellipse_pixels, polygon_outline, polygon_pixels};
use super::types::{Paint, Primitive};
use crate::errors::SpriteError;
use crate::log::{debug, info, warn};
use crate::types::{Color, PixelRect};

/// In-memory sprite image.
///
/// Draw operations overwrite pixels with the paint color as-is, including
/// its alpha; nothing is blended with what was there before.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            image: RgbaImage::from_pixel(width, height, Color::TRANSPARENT.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at (x, y), or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|px| Color::from(*px))
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        let target: image::Rgba<u8> = color.into();
        self.image.pixels().filter(|px| **px == target).count()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    fn put(&mut self, p: IVec2, color: Color) {
        let (Ok(x), Ok(y)) = (u32::try_from(p.x), u32::try_from(p.y)) else {
            return;
        };
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color.into());
        }
    }

    fn put_all(&mut self, pixels: impl IntoIterator<Item = IVec2>, color: Color) {
        for p in pixels {
            self.put(p, color);
        }
    }

    /// Fill every pixel inside `bounds`
    pub fn fill_rect(&mut self, bounds: PixelRect, color: Color) {
        self.put_all(bounds.pixels(), color);
    }

    /// One-pixel border ring of `bounds`
    pub fn stroke_rect(&mut self, bounds: PixelRect, color: Color) {
        self.put_all(bounds.pixels().filter(|p| bounds.on_border(*p)), color);
    }

    /// Fill the ellipse inscribed in `bounds`
    pub fn fill_ellipse(&mut self, bounds: PixelRect, color: Color) {
        self.put_all(ellipse_pixels(bounds), color);
    }

    pub fn stroke_ellipse(&mut self, bounds: PixelRect, color: Color) {
        self.put_all(ellipse_outline(bounds), color);
    }

    pub fn fill_polygon(&mut self, vertices: &[IVec2], color: Color) {
        self.put_all(polygon_pixels(vertices), color);
    }

    pub fn stroke_polygon(&mut self, vertices: &[IVec2], color: Color) {
        self.put_all(polygon_outline(vertices), color);
    }

    /// Draw a primitive: interior first, then its outline on top
    pub fn draw(&mut self, primitive: &Primitive) {
        let Paint { fill, outline } = primitive.paint();
        debug!(kind = primitive.kind(), ?fill, ?outline, "draw");
        match primitive {
            Primitive::Rect { bounds, .. } => {
                if let Some(c) = fill {
                    self.fill_rect(*bounds, c);
                }
                if let Some(c) = outline {
                    self.stroke_rect(*bounds, c);
                }
            }
            Primitive::Ellipse { bounds, .. } => {
                if let Some(c) = fill {
                    self.fill_ellipse(*bounds, c);
                }
                if let Some(c) = outline {
                    self.stroke_ellipse(*bounds, c);
                }
            }
            Primitive::Polygon { vertices, .. } => {
                if let Some(c) = fill {
                    self.fill_polygon(vertices, c);
                }
                if let Some(c) = outline {
                    self.stroke_polygon(vertices, c);
                }
            }
        }
    }

    /// Encode to `path`; the format follows the file extension.
    ///
    /// A failed save never leaves a new file behind at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SpriteError> {
        let path = path.as_ref();
        let existed = path.exists();
        match self.encode(path) {
            Ok(()) => {
                info!(path = %path.display(), "sprite written");
                Ok(())
            }
            Err(source) => {
                // encoders create the file before they can fail
                if !existed {
                    std::fs::remove_file(path).ok();
                }
                warn!(path = %path.display(), error = %source, "sprite write failed");
                Err(SpriteError::from_image(path, source))
            }
        }
    }

    fn encode(&self, path: &Path) -> Result<(), ImageError> {
        let format = ImageFormat::from_path(path)?;
        if !format.writing_enabled() {
            return Err(ImageError::Unsupported(UnsupportedError::from_format_and_kind(
                format.into(),
                UnsupportedErrorKind::Format(format.into()),
            )));
        }
        self.image.save_with_format(path, format)
    }
}
