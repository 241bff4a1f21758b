use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Process parameters: 600x600 surface, 20 px tiles, a 20 px header
/// band above the grid, 300 ms auto-step cadence. A JSON file may
/// override any subset of fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Framebuffer width in pixels.
    pub screen_width: u32,
    /// Framebuffer height in pixels.
    pub screen_height: u32,
    /// Cell edge length in pixels.
    pub tile_size: u32,
    /// Height of the band above the grid, in pixels.
    pub grid_top: u32,
    /// Auto-step interval in milliseconds.
    pub step_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 600,
            screen_height: 600,
            tile_size: 20,
            grid_top: 20,
            step_interval_ms: 300,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Grid width in cells.
    pub fn grid_width(&self) -> u32 {
        self.screen_width / self.tile_size
    }

    /// Grid height in cells. The header band pushes the bottom row
    /// partially off the surface.
    pub fn grid_height(&self) -> u32 {
        self.screen_height / self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.screen_width, 600);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.tile_size, 20);
        assert_eq!(config.grid_top, 20);
        assert_eq!(config.step_interval_ms, 300);
        assert_eq!(config.grid_width(), 30);
        assert_eq!(config.grid_height(), 30);
    }

    #[test]
    fn partial_file_overrides_named_fields_only() {
        let config: Config =
            serde_json::from_str(r#"{ "tile_size": 10, "step_interval_ms": 100 }"#).unwrap();
        assert_eq!(config.tile_size, 10);
        assert_eq!(config.step_interval_ms, 100);
        assert_eq!(config.screen_width, 600);
        assert_eq!(config.grid_width(), 60);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result: Result<Config, serde_json::Error> = serde_json::from_str("{ nope");
        assert!(result.is_err());
    }
}
