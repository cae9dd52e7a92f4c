//! Rendering module
//!
//! The trainer draws through two collaborators: a [`DrawSurface`] that takes
//! filled shapes and images, and a [`TextRasterizer`] that turns captions
//! into images. [`DrawList`] and [`MonoRasterizer`] implement both headless.

pub mod draw_list;
pub mod frame;
pub mod shapes;
pub mod text;
pub mod vertex;

use glam::Vec2;

use crate::settings::Color;

pub use draw_list::{DrawCommand, DrawList};
pub use frame::draw_frame;
pub use text::{FontFace, Labels, MonoRasterizer, TextImage};
pub use vertex::Vertex;

/// Target of a frame's draw calls
pub trait DrawSurface {
    type Image;

    /// Regular polygon; `rotation_deg` places the first corner
    fn draw_filled_polygon(
        &mut self,
        center: Vec2,
        radius: f32,
        sides: u32,
        rotation_deg: f32,
        color: Color,
    );

    fn draw_filled_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, width: f32, color: Color);

    /// Blit `image` with its top-left corner at `position`, multiplied by `tint`
    fn draw_image(&mut self, image: &Self::Image, position: Vec2, tint: Color);
}

/// Turns captions into images the surface can draw
pub trait TextRasterizer {
    type Image;

    /// Image sized to the text's glyph bounds
    fn render_text(&mut self, text: &str, color: Color, face: FontFace) -> Self::Image;
}
