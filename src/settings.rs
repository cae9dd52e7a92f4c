//! Trainer settings
//!
//! Built once at startup and passed by reference to every component.
//! Optionally loaded from the JSON file named by `TRAINER_SETTINGS`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_TIME;
use crate::error::ConfigError;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Named colors used by the frame composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub red: Color,
    pub blue: Color,
    pub yellow: Color,
    pub purple: Color,
    pub dark_purple: Color,
    pub dark_green: Color,
    pub green: Color,
    pub white: Color,
    pub gray: Color,
    pub light_gray: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            red: [1.0, 0.0, 0.0, 1.0],
            blue: [0.0, 0.0, 1.0, 1.0],
            yellow: [1.0, 1.0, 0.0, 1.0],
            purple: [1.0, 0.0, 1.0, 1.0],
            dark_purple: [0.533, 0.0, 0.533, 1.0],
            dark_green: [0.0, 0.533, 0.0, 1.0],
            green: [0.0, 1.0, 0.0, 1.0],
            white: [1.0, 1.0, 1.0, 1.0],
            gray: [0.067, 0.067, 0.067, 1.0],
            light_gray: [0.533, 0.533, 0.533, 1.0],
        }
    }
}

impl Palette {
    /// Tint for an objective column group (0..4)
    pub fn column_group(&self, group: u8) -> Color {
        match group {
            0 => self.red,
            1 => self.green,
            2 => self.blue,
            _ => self.purple,
        }
    }
}

/// Trainer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Logical screen size in pixels
    pub screen_size: Vec2,

    // === Board geometry ===
    /// Base tile radius
    pub tile_radius: f32,
    /// Pointer hit box half-size, as a multiple of the tile radius
    pub hit_radius_factor: f32,
    /// Horizontal distance between columns, in tile radii
    pub col_spacing: f32,
    /// Vertical distance between rows, in tile radii
    pub row_spacing: f32,
    /// Offset of cell (0, 0) from the screen corner, in tile radii
    pub board_margin: f32,

    // === Timing ===
    /// Countdown length in seconds
    pub max_time: f32,
    /// Symbol spin speed in degrees per second
    pub spin_speed: f32,

    // === HUD ===
    pub button_size: Vec2,
    pub bar_origin: Vec2,
    pub bar_size: Vec2,
    pub bar_outline: f32,
    pub tether_width: f32,
    pub objective_label_pos: Vec2,
    pub status_label_pos: Vec2,
    /// Position of the first column marker ("A"); the rest follow at `marker_step`
    pub marker_origin: Vec2,
    pub marker_step: f32,
    /// Offset of the button caption from the button corner
    pub button_label_offset: Vec2,
    /// Text size in points for the default face
    pub font_size: f32,
    /// Text size in points for the small face
    pub small_font_size: f32,

    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        let screen_size = Vec2::new(1920.0, 1080.0);
        Self {
            screen_size,

            tile_radius: 60.0,
            hit_radius_factor: 1.25,
            col_spacing: 3.0,
            row_spacing: 2.5,
            board_margin: 3.0,

            max_time: MAX_TIME,
            spin_speed: 60.0,

            button_size: Vec2::new(300.0, 100.0),
            bar_origin: Vec2::new(40.0, screen_size.y - 200.0),
            bar_size: Vec2::new(1400.0, 100.0),
            bar_outline: 3.0,
            tether_width: 5.0,
            objective_label_pos: Vec2::new(screen_size.x - 400.0, 100.0),
            status_label_pos: Vec2::new(500.0, 900.0),
            marker_origin: Vec2::new(150.0, 0.0),
            marker_step: 360.0,
            button_label_offset: Vec2::new(70.0, -10.0),
            font_size: 70.0,
            small_font_size: 50.0,

            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming an optional settings file
    const ENV_PATH: &'static str = "TRAINER_SETTINGS";

    /// Pixel center of board cell (row, col)
    pub fn tile_position(&self, row: usize, col: usize) -> Vec2 {
        let r = self.tile_radius;
        let origin = Vec2::splat(r * self.board_margin);
        origin + Vec2::new(col as f32 * r * self.col_spacing, row as f32 * r * self.row_spacing)
    }

    /// Half-size of a cell's pointer hit box
    pub fn hit_radius(&self) -> f32 {
        self.tile_radius * self.hit_radius_factor
    }

    /// Top-left corner of the start / try-again button
    pub fn button_origin(&self) -> Vec2 {
        Vec2::new(
            self.screen_size.x - self.button_size.x * 1.5,
            self.screen_size.y / 2.0 - self.button_size.y / 2.0,
        )
    }

    /// Reject values that would break layout or the countdown
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_time > 0.0) {
            return Err(ConfigError::Invalid {
                field: "max_time",
                reason: "must be positive",
            });
        }
        if !(self.tile_radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "tile_radius",
                reason: "must be positive",
            });
        }
        if !(self.font_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "font_size",
                reason: "must be positive",
            });
        }
        if !(self.small_font_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "small_font_size",
                reason: "must be positive",
            });
        }
        if !(self.hit_radius_factor > 0.0) {
            return Err(ConfigError::Invalid {
                field: "hit_radius_factor",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from_path(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings from `TRAINER_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        match std::env::var(Self::ENV_PATH) {
            Ok(path) => match Self::load_from_path(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("{}; using default settings", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_position_grid() {
        let settings = Settings::default();
        assert_eq!(settings.tile_position(0, 0), Vec2::new(180.0, 180.0));
        assert_eq!(settings.tile_position(0, 1), Vec2::new(360.0, 180.0));
        assert_eq!(settings.tile_position(2, 0), Vec2::new(180.0, 480.0));
        assert_eq!(settings.hit_radius(), 75.0);
    }

    #[test]
    fn test_button_origin() {
        let settings = Settings::default();
        assert_eq!(settings.button_origin(), Vec2::new(1470.0, 490.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "max_time": 5.0 }"#).unwrap();
        assert_eq!(settings.max_time, 5.0);
        assert_eq!(settings.tile_radius, 60.0);
        assert_eq!(settings.palette, Palette::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "max_time": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_time", .. }));

        let err = Settings::from_json(r#"{ "small_font_size": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "small_font_size", .. }));

        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from_path("/nonexistent/trainer.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
