//! Value types shared by the resolvers and the rasterizer.

use std::fmt;

use glam::IVec2;

/// 8-bit RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Fully opaque color
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Components in (r, g, b, a) order
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba(c.to_array())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color { r, g, b, a }
    }
}

/// Tuple notation, e.g. `(139, 69, 19, 255)`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Free-text sprite description.
///
/// Matching always runs against the lowercased text; the raw text is kept
/// for echoing back to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    raw: String,
    normalized: String,
}

impl Prompt {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.to_lowercase();
        Prompt { raw, normalized }
    }

    /// The text as the user typed it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lowercased text used for keyword matching and hashing
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether any of `keywords` occurs as a substring of the normalized text
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.normalized.contains(k))
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Axis-aligned pixel rectangle with inclusive corners
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl PixelRect {
    /// Bounds from corner coordinates; corners are reordered if needed
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let a = IVec2::new(x0, y0);
        let b = IVec2::new(x1, y1);
        PixelRect {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Number of pixel columns covered
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// Number of pixel rows covered
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    pub fn contains(&self, p: IVec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Whether `p` lies on the one-pixel border ring
    pub fn on_border(&self, p: IVec2) -> bool {
        self.contains(p)
            && (p.x == self.min.x || p.x == self.max.x || p.y == self.min.y || p.y == self.max.y)
    }

    /// Every pixel in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = IVec2> + use<> {
        let PixelRect { min, max } = *self;
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| IVec2::new(x, y)))
    }

    /// Smallest rectangle covering all `points`, or `None` when empty
    pub fn bounding(points: &[IVec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(PixelRect { min, max })
    }
}
