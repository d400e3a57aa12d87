use crate::MazeError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub play_area: PlayAreaConfig,
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub gem: GemConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayAreaConfig {
    #[serde(default = "default_play_width")]
    pub width: f32,
    #[serde(default = "default_play_height")]
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MazeConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f32,
    #[serde(default = "default_min_size")]
    pub min_size: i32,
    #[serde(default = "default_max_size")]
    pub max_size: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_size")]
    pub size: f32,
    #[serde(default = "default_player_speed")]
    pub speed: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GemConfig {
    #[serde(default = "default_gem_size")]
    pub size: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: f32,
    #[serde(default = "default_version_label")]
    pub version_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_event_log")]
    pub enable_event_log: bool,
    #[serde(default = "default_event_log_path")]
    pub event_log_path: String,
}

// Default values
fn default_play_width() -> f32 { 800.0 }
fn default_play_height() -> f32 { 800.0 }
fn default_cell_size() -> f32 { 40.0 }
fn default_wall_thickness() -> f32 { 4.0 }
fn default_min_size() -> i32 { 5 }
fn default_max_size() -> i32 { 20 }
fn default_player_size() -> f32 { 30.0 }
fn default_player_speed() -> f32 { 5.0 }
fn default_gem_size() -> f32 { 20.0 }
fn default_window_title() -> String { "Maze Arrow Game".to_string() }
fn default_bg_r() -> u8 { 255 }
fn default_bg_g() -> u8 { 255 }
fn default_bg_b() -> u8 { 255 }
fn default_ticks_per_second() -> f32 { 60.0 }
fn default_version_label() -> String { "1.0.0".to_string() }
fn default_enable_event_log() -> bool { false }
fn default_event_log_path() -> String { "event_log.json".to_string() }

impl Default for PlayAreaConfig {
    fn default() -> Self {
        Self {
            width: default_play_width(),
            height: default_play_height(),
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            wall_thickness: default_wall_thickness(),
            min_size: default_min_size(),
            max_size: default_max_size(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: default_player_size(),
            speed: default_player_speed(),
        }
    }
}

impl Default for GemConfig {
    fn default() -> Self {
        Self {
            size: default_gem_size(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            ticks_per_second: default_ticks_per_second(),
            version_label: default_version_label(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_event_log: default_enable_event_log(),
            event_log_path: default_event_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            play_area: PlayAreaConfig::default(),
            maze: MazeConfig::default(),
            player: PlayerConfig::default(),
            gem: GemConfig::default(),
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if it is missing or malformed
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No {} found, using default configuration", path.display());
                Config::default()
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Check that the constants describe a playable game
    pub fn validate(&self) -> Result<(), MazeError> {
        let invalid = |reason: String| -> Result<(), MazeError> { Err(MazeError::InvalidConfig(reason)) };
        let maze = &self.maze;

        if maze.cell_size <= 0.0 || maze.wall_thickness <= 0.0 {
            return invalid("cell_size and wall_thickness must be positive".to_string());
        }
        if self.player.size <= 0.0 || self.gem.size <= 0.0 || self.player.speed <= 0.0 {
            return invalid("player and gem sizes and player speed must be positive".to_string());
        }
        // Spawn sits in cell (1, 1) and the gem in (size - 2, size - 2)
        if maze.min_size < 4 {
            return invalid(format!("min_size {} is below 4", maze.min_size));
        }
        if maze.max_size < maze.min_size {
            return invalid(format!("max_size {} is below min_size {}", maze.max_size, maze.min_size));
        }

        let extent = maze.max_size as f32 * maze.cell_size;
        if extent > self.play_area.width || extent > self.play_area.height {
            return invalid(format!(
                "a {}x{} maze ({}px) does not fit the {}x{} play area",
                maze.max_size, maze.max_size, extent, self.play_area.width, self.play_area.height
            ));
        }

        let corridor = maze.cell_size - maze.wall_thickness;
        if self.player.size >= corridor || self.gem.size >= corridor {
            return invalid(format!(
                "player ({}) and gem ({}) must be narrower than a {}px corridor",
                self.player.size, self.gem.size, corridor
            ));
        }
        if self.visual.ticks_per_second <= 0.0 {
            return invalid("ticks_per_second must be positive".to_string());
        }

        Ok(())
    }
}
