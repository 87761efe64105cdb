use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::background::DEFAULT_BACKGROUNDS;
use crate::brush::{DEFAULT_DIAMETER, MAX_DIAMETER, MIN_DIAMETER};
use crate::error::{BoardError, BoardResult};

/// Startup configuration for the board.
///
/// Every field has a default, so a config file only needs to name what it
/// changes. Colors are hex strings (`#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct BoardConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub brush_color: String,
    pub brush_diameter: f32,
    pub backgrounds: Vec<String>,
    pub initial_background: String,
    /// Directory holding `<name>.png` for every background
    pub asset_dir: PathBuf,
    /// Fill used when a background image cannot be loaded
    pub fallback_background: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            brush_color: "#242424".to_string(),
            brush_diameter: DEFAULT_DIAMETER,
            backgrounds: DEFAULT_BACKGROUNDS.iter().map(|name| name.to_string()).collect(),
            initial_background: DEFAULT_BACKGROUNDS[0].to_string(),
            asset_dir: PathBuf::from("assets/backgrounds"),
            fallback_background: "#f4efe6".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> BoardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded board config from {}", path.display());
        Ok(config)
    }

    /// Check every field for values the board cannot work with
    pub fn validate(&self) -> BoardResult<()> {
        let size_ok = |v: f32| v.is_finite() && v > 0.0;
        if !size_ok(self.canvas_width) || !size_ok(self.canvas_height) {
            return Err(BoardError::InvalidCanvasSize {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(MIN_DIAMETER..=MAX_DIAMETER).contains(&self.brush_diameter) {
            return Err(BoardError::InvalidBrushDiameter(self.brush_diameter));
        }
        self.brush_color()?;
        self.fallback_background()?;
        if self.backgrounds.is_empty() {
            return Err(BoardError::NoBackgrounds);
        }
        if !self.backgrounds.contains(&self.initial_background) {
            return Err(BoardError::UnknownBackground(self.initial_background.clone()));
        }
        Ok(())
    }

    pub fn brush_color(&self) -> BoardResult<Color32> {
        parse_color(&self.brush_color)
    }

    pub fn fallback_background(&self) -> BoardResult<Color32> {
        parse_color(&self.fallback_background)
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width, self.canvas_height)
    }
}

fn parse_color(value: &str) -> BoardResult<Color32> {
    Color32::from_hex(value).map_err(|_| BoardError::InvalidColor {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.brush_color().unwrap(), Color32::from_rgb(0x24, 0x24, 0x24));
        assert_eq!(config.canvas_size(), egui::vec2(800.0, 600.0));
        assert_eq!(config.initial_background, "book");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BoardConfig::from_json_str(r##"{ "brush_color": "#ff0000", "brush_diameter": 12 }"##).unwrap();
        assert_eq!(config.brush_color().unwrap(), Color32::from_rgb(255, 0, 0));
        assert_eq!(config.brush_diameter, 12.0);
        assert_eq!(config.backgrounds.len(), 5);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = BoardConfig::from_json_str(r#"{ "brush_color": "red" }"#);
        assert!(matches!(result, Err(BoardError::InvalidColor { value }) if value == "red"));
    }

    #[test]
    fn test_out_of_range_diameter_is_rejected() {
        let result = BoardConfig::from_json_str(r#"{ "brush_diameter": 40 }"#);
        assert!(matches!(result, Err(BoardError::InvalidBrushDiameter(d)) if d == 40.0));
    }

    #[test]
    fn test_initial_background_must_be_listed() {
        let result = BoardConfig::from_json_str(r#"{ "backgrounds": ["tree"], "initial_background": "book" }"#);
        assert!(matches!(result, Err(BoardError::UnknownBackground(name)) if name == "book"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = BoardConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(BoardError::ConfigParse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = BoardConfig::load("/definitely/not/here/board.json");
        assert!(matches!(result, Err(BoardError::ConfigIo(_))));
    }
}
