//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::settings::Color;

/// Generate vertices for a filled regular polygon.
///
/// The first corner sits at `rotation_deg` (0° points along +x, screen y
/// grows downward); the rest follow at equal steps.
pub fn polygon(
    center: Vec2,
    radius: f32,
    sides: u32,
    rotation_deg: f32,
    color: Color,
) -> Vec<Vertex> {
    if sides < 3 {
        return Vec::new();
    }

    let start = rotation_deg.to_radians();
    let step = std::f32::consts::TAU / sides as f32;
    let corner = |i: u32| {
        let theta = start + step * i as f32;
        center + Vec2::new(theta.cos(), theta.sin()) * radius
    };

    let mut vertices = Vec::with_capacity((sides * 3) as usize);
    for i in 0..sides {
        let a = corner(i);
        let b = corner((i + 1) % sides);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(origin: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle outline of the given stroke width,
/// centered on the rectangle's edges
pub fn rect_outline(origin: Vec2, size: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let half = width / 2.0;
    let outer = origin - Vec2::splat(half);
    let outer_size = size + Vec2::splat(width);

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full outer width
    vertices.extend(rect(outer, Vec2::new(outer_size.x, width), color));
    vertices.extend(rect(
        Vec2::new(outer.x, origin.y + size.y - half),
        Vec2::new(outer_size.x, width),
        color,
    ));
    // Left and right fill the gap between them
    let side_height = (outer_size.y - 2.0 * width).max(0.0);
    vertices.extend(rect(
        Vec2::new(outer.x, outer.y + width),
        Vec2::new(width, side_height),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(origin.x + size.x - half, outer.y + width),
        Vec2::new(width, side_height),
        color,
    ));

    vertices
}
