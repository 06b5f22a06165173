//! Pixel coverage for ellipses, polygons and lines.
//!
//! All coordinates are integer pixel positions and every test is exact
//! integer arithmetic, so a shape always covers the same pixels.

use glam::IVec2;

use crate::types::PixelRect;

/// Whether pixel `p` lies inside the ellipse inscribed in `bounds`.
///
/// The ellipse touches the outer edges of the boundary pixels: with
/// `w`/`h` the pixel width/height of the bounds, `p` is inside when
/// `((2x - x0 - x1) / w)² + ((2y - y0 - y1) / h)² <= 1`.
pub fn ellipse_contains(bounds: PixelRect, p: IVec2) -> bool {
    let w = i64::from(bounds.width());
    let h = i64::from(bounds.height());
    let dx = i64::from(2 * p.x - bounds.min.x - bounds.max.x);
    let dy = i64::from(2 * p.y - bounds.min.y - bounds.max.y);
    dx * dx * h * h + dy * dy * w * w <= w * w * h * h
}

/// Pixels covered by the ellipse inscribed in `bounds`
pub fn ellipse_pixels(bounds: PixelRect) -> Vec<IVec2> {
    bounds.pixels().filter(|p| ellipse_contains(bounds, *p)).collect()
}

/// Inside pixels with at least one 4-neighbour outside
pub fn ellipse_outline(bounds: PixelRect) -> Vec<IVec2> {
    bounds
        .pixels()
        .filter(|p| ellipse_contains(bounds, *p))
        .filter(|p| neighbours(*p).iter().any(|n| !ellipse_contains(bounds, *n)))
        .collect()
}

fn neighbours(p: IVec2) -> [IVec2; 4] {
    [p - IVec2::X, p + IVec2::X, p - IVec2::Y, p + IVec2::Y]
}

/// Whether `p` lies on the segment `a`-`b`
fn on_segment(a: IVec2, b: IVec2, p: IVec2) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    cross == 0 && p.cmpge(a.min(b)).all() && p.cmple(a.max(b)).all()
}

/// Even-odd containment that also counts points on an edge as inside
pub fn polygon_contains(vertices: &[IVec2], p: IVec2) -> bool {
    let mut inside = false;
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        if on_segment(a, b, p) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            // p.x < crossing x, cross-multiplied by (b.y - a.y)
            let lhs = (p.x - a.x) * (b.y - a.y);
            let rhs = (p.y - a.y) * (b.x - a.x);
            let left_of_edge = if b.y > a.y { lhs < rhs } else { lhs > rhs };
            if left_of_edge {
                inside = !inside;
            }
        }
    }
    inside
}

/// Pixels covered by a closed polygon, edges included
pub fn polygon_pixels(vertices: &[IVec2]) -> Vec<IVec2> {
    let Some(bounds) = PixelRect::bounding(vertices) else {
        return Vec::new();
    };
    bounds
        .pixels()
        .filter(|p| polygon_contains(vertices, *p))
        .collect()
}

/// Bresenham line from `from` to `to`, both endpoints included
pub fn line_pixels(from: IVec2, to: IVec2) -> Vec<IVec2> {
    let d = (to - from).abs();
    let step = (to - from).signum();
    let mut err = d.x - d.y;
    let mut p = from;
    let mut out = Vec::with_capacity(d.max_element() as usize + 1);
    loop {
        out.push(p);
        if p == to {
            break;
        }
        let e2 = 2 * err;
        if e2 > -d.y {
            err -= d.y;
            p.x += step.x;
        }
        if e2 < d.x {
            err += d.x;
            p.y += step.y;
        }
    }
    out
}

/// Pixels along every edge of a closed polygon
pub fn polygon_outline(vertices: &[IVec2]) -> Vec<IVec2> {
    vertices
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| line_pixels(a, vertices[(i + 1) % vertices.len()]))
        .collect()
}
