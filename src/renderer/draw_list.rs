//! Recording draw surface
//!
//! Keeps every call as a [`DrawCommand`] and tessellates shapes into a
//! single triangle list, ready to upload as one vertex buffer.

use glam::Vec2;

use super::shapes;
use super::text::TextImage;
use super::vertex::Vertex;
use super::DrawSurface;
use crate::settings::Color;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon {
        center: Vec2,
        radius: f32,
        sides: u32,
        rotation_deg: f32,
        color: Color,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeRect {
        origin: Vec2,
        size: Vec2,
        width: f32,
        color: Color,
    },
    Image {
        text: String,
        position: Vec2,
        tint: Color,
    },
}

/// Headless [`DrawSurface`]
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    pub vertices: Vec<Vertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame
    pub fn clear(&mut self) {
        self.commands.clear();
        self.vertices.clear();
    }

    /// Raw vertex data for a GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn polygons(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
    }

    /// Captions drawn this frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for DrawList {
    type Image = TextImage;

    fn draw_filled_polygon(
        &mut self,
        center: Vec2,
        radius: f32,
        sides: u32,
        rotation_deg: f32,
        color: Color,
    ) {
        self.vertices.extend(shapes::polygon(center, radius, sides, rotation_deg, color));
        self.commands.push(DrawCommand::Polygon {
            center,
            radius,
            sides,
            rotation_deg,
            color,
        });
    }

    fn draw_filled_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.vertices.extend(shapes::rect(origin, size, color));
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, width: f32, color: Color) {
        self.vertices.extend(shapes::rect_outline(origin, size, width, color));
        self.commands.push(DrawCommand::StrokeRect {
            origin,
            size,
            width,
            color,
        });
    }

    fn draw_image(&mut self, image: &TextImage, position: Vec2, tint: Color) {
        // Text is textured, not tessellated
        self.commands.push(DrawCommand::Image {
            text: image.text.clone(),
            position,
            tint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_tessellates() {
        let mut list = DrawList::new();
        list.draw_filled_polygon(Vec2::ZERO, 10.0, 6, 0.0, [1.0; 4]);
        list.draw_filled_rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        assert_eq!(list.commands.len(), 2);
        assert_eq!(list.vertices.len(), 18 + 6);
        assert_eq!(list.vertex_bytes().len(), 24 * std::mem::size_of::<Vertex>());

        list.clear();
        assert!(list.commands.is_empty());
        assert!(list.vertex_bytes().is_empty());
    }
}
