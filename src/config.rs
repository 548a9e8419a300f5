//! file: config.rs
//! author: Jacob Xie
//! date: 2025/12/17 21:20:44 Wednesday
//! brief: settings from config/default.toml, an optional file and `SNAKE__*` env vars

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{error::ConfigError, game::Grid};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub pacing: PacingSettings,
    pub storage: StorageSettings,
    pub display: DisplaySettings,
    /// Fixed RNG seed for goal placement; entropy when unset.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub cols: i32,
    pub rows: i32,
    pub initial_length: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cols: 30,
            rows: 30,
            initial_length: 3,
        }
    }
}

/// Speeds are in ticks per second.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PacingSettings {
    pub initial_speed: u32,
    pub speed_increment: u32,
    pub max_speed: u32,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            initial_speed: 15,
            speed_increment: 1,
            max_speed: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub high_score_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from("high_score.txt"),
        }
    }
}

/// Rendering geometry only.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub cell_px: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            cell_px: 20.0,
            window_width: 700.0,
            window_height: 700.0,
        }
    }
}

impl Settings {
    /// Layers `config/default.toml` (if present), then `path` (if given and
    /// present), then `SNAKE__*` environment variables (`__` nests keys).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SNAKE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        let fit = Grid::new(grid.cols, grid.rows).max_initial_length();
        if grid.initial_length == 0 || grid.initial_length > fit {
            return Err(ConfigError::GridTooSmall {
                cols: grid.cols,
                rows: grid.rows,
                initial_length: grid.initial_length,
            });
        }

        let pacing = &self.pacing;
        if pacing.initial_speed == 0 {
            return Err(ConfigError::Pacing("initial_speed must be positive"));
        }
        if pacing.max_speed < pacing.initial_speed {
            return Err(ConfigError::Pacing("max_speed is below initial_speed"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.grid.cols, 30);
        assert_eq!(settings.pacing.max_speed, 30);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_narrow_grid() {
        let mut settings = Settings::default();
        settings.grid.cols = 3;
        settings.grid.initial_length = 3;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::GridTooSmall { .. })
        ));
        settings.grid.cols = 4;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_speeds() {
        let mut settings = Settings::default();
        settings.pacing.max_speed = 5;
        assert!(matches!(settings.validate(), Err(ConfigError::Pacing(_))));
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "seed = 9\n[grid]\ncols = 12\nrows = 8").expect("write");

        let settings = Settings::load(Some(file.path())).expect("loads");
        assert_eq!(settings.grid.cols, 12);
        assert_eq!(settings.grid.rows, 8);
        assert_eq!(settings.grid.initial_length, 3);
        assert_eq!(settings.seed, Some(9));
    }
}
