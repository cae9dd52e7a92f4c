//! Text labels
//!
//! Every caption is rasterized once at startup; frames only blit the
//! resulting images.

use glam::Vec2;

use super::TextRasterizer;
use crate::Settings;
use crate::settings::Color;

/// Font selection passed to the rasterizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontFace {
    /// Size in points
    pub size: f32,
}

impl FontFace {
    /// Face used for markers, objective and outcome captions
    pub fn regular(settings: &Settings) -> Self {
        Self {
            size: settings.font_size,
        }
    }

    /// Face used for the button caption
    pub fn small(settings: &Settings) -> Self {
        Self {
            size: settings.small_font_size,
        }
    }
}

/// Pre-rendered captions
#[derive(Debug, Clone)]
pub struct Labels<I> {
    /// Column markers "A" to "D"
    pub markers: [I; 4],
    pub button: I,
    pub alpha: I,
    pub beta: I,
    pub win: I,
    pub lose: I,
}

impl<I> Labels<I> {
    /// Rasterize every caption with `rasterizer`
    pub fn render<R>(rasterizer: &mut R, settings: &Settings) -> Self
    where
        R: TextRasterizer<Image = I>,
    {
        let regular = FontFace::regular(settings);
        let small = FontFace::small(settings);
        let p = &settings.palette;
        let mut text =
            |s: &str, color: Color, face: FontFace| rasterizer.render_text(s, color, face);

        Self {
            markers: [
                text("A", p.red, regular),
                text("B", p.yellow, regular),
                text("C", p.blue, regular),
                text("D", p.purple, regular),
            ],
            button: text("Try!", p.white, small),
            alpha: text("Alpha", p.white, regular),
            beta: text("Beta", p.white, regular),
            win: text("Great Success!", p.green, regular),
            lose: text("Oh, my bad!", p.red, regular),
        }
    }
}

/// Text image produced by [`MonoRasterizer`]
#[derive(Debug, Clone, PartialEq)]
pub struct TextImage {
    pub text: String,
    pub color: Color,
    /// Glyph-bounds size in pixels
    pub size: Vec2,
}

/// Fixed-metric rasterizer for headless runs: every glyph advances by
/// `advance` em and the line is one em tall.
#[derive(Debug, Clone, Copy)]
pub struct MonoRasterizer {
    pub advance: f32,
}

impl Default for MonoRasterizer {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextRasterizer for MonoRasterizer {
    type Image = TextImage;

    fn render_text(&mut self, text: &str, color: Color, face: FontFace) -> TextImage {
        let glyphs = text.chars().count() as f32;
        TextImage {
            text: text.to_string(),
            color,
            size: Vec2::new(glyphs * face.size * self.advance, face.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_rendered_once() {
        let settings = Settings::default();
        let labels = Labels::render(&mut MonoRasterizer::default(), &settings);

        assert_eq!(labels.markers[2].text, "C");
        assert_eq!(labels.markers[2].color, settings.palette.blue);
        assert_eq!(labels.win.text, "Great Success!");
        assert_eq!(labels.lose.color, settings.palette.red);
        assert_eq!(labels.alpha.size, Vec2::new(5.0 * 70.0 * 0.6, 70.0));
    }

    #[test]
    fn test_small_face_sizes_button() {
        let settings = Settings::default();
        let mut rasterizer = MonoRasterizer::default();

        let small = FontFace::small(&settings);
        assert_eq!(small.size, 50.0);
        let image = rasterizer.render_text("Try!", settings.palette.white, small);
        assert_eq!(image.size, Vec2::new(4.0 * 50.0 * 0.6, 50.0));

        let labels = Labels::render(&mut rasterizer, &settings);
        assert_eq!(labels.button, image);
        assert_eq!(labels.win.size.y, 70.0);
    }
}
