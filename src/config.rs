//! Game configuration and user options
//!
//! Two small JSON files, both optional:
//!
//! - `assets/config/game.json` tunes the match itself (round length).
//! - `<home>/.untitled-boxing/options.json` holds per-user audio volumes.
//!
//! Loading is best-effort. A missing file is the normal case and silently
//! uses defaults; a malformed file is reported once and then ignored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

pub const GAME_CONFIG_PATH: &str = "assets/config/game.json";

/// Errors from reading or parsing a config file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read file: {}", e),
            ConfigError::Parse(e) => write!(f, "could not parse JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error)
    }
}

/// Match tuning loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Round length in seconds
    pub round_time_seconds: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            round_time_seconds: 5.0,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &str) -> Result<GameConfig, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Best-effort load: absent or broken files fall back to defaults.
    pub fn load_or_default(path: &str) -> GameConfig {
        match Self::load_from_file(path) {
            Ok(config) => {
                println!("Loaded game config from {}", path);
                config.sanitized()
            }
            Err(ConfigError::Io(_)) => GameConfig::default(),
            Err(e) => {
                eprintln!("Warning: ignoring {}: {}", path, e);
                GameConfig::default()
            }
        }
    }

    /// Replaces unusable values with defaults. A round has to last at
    /// least one second.
    pub fn sanitized(mut self) -> Self {
        if !self.round_time_seconds.is_finite() || self.round_time_seconds < 1.0 {
            eprintln!(
                "Warning: round_time_seconds {} out of range, using default",
                self.round_time_seconds
            );
            self.round_time_seconds = GameConfig::default().round_time_seconds;
        }
        self
    }
}

/// Per-user audio options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Music volume, 0.0 to 1.0
    pub music_volume: f32,

    /// Sound cue volume, 0.0 to 1.0
    pub sound_volume: f32,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            music_volume: 0.5,
            sound_volume: 0.85,
        }
    }
}

impl Options {
    /// Where the options file lives, if a home directory exists.
    pub fn options_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".untitled-boxing").join("options.json"))
    }

    /// Loads the user's options, falling back to defaults.
    pub fn load() -> Options {
        let path = match Self::options_path() {
            Some(path) => path,
            None => return Options::default(),
        };
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return Options::default(),
        };
        match serde_json::from_str::<Options>(&contents) {
            Ok(options) => options.clamped(),
            Err(e) => {
                eprintln!("Warning: ignoring {}: {}", path.display(), e);
                Options::default()
            }
        }
    }

    pub fn clamped(mut self) -> Self {
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.sound_volume = self.sound_volume.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_time() {
        let config = GameConfig::default();
        assert_eq!(config.round_time_seconds, 5.0);
    }

    #[test]
    fn test_parse_game_config() {
        let config: GameConfig = serde_json::from_str(r#"{"round_time_seconds": 90.0}"#)
            .expect("valid config JSON");
        assert_eq!(config.round_time_seconds, 90.0);
    }

    #[test]
    fn test_parse_empty_object_uses_defaults() {
        let config: GameConfig = serde_json::from_str("{}").expect("empty object");
        assert_eq!(config.round_time_seconds, 5.0);
    }

    #[test]
    fn test_sanitize_rejects_bad_round_times() {
        let config = GameConfig {
            round_time_seconds: -3.0,
        };
        assert_eq!(config.sanitized().round_time_seconds, 5.0);

        let config = GameConfig {
            round_time_seconds: f32::NAN,
        };
        assert_eq!(config.sanitized().round_time_seconds, 5.0);

        let config = GameConfig {
            round_time_seconds: 90.0,
        };
        assert_eq!(config.sanitized().round_time_seconds, 90.0);
    }

    #[test]
    fn test_options_clamp_volumes() {
        let options = Options {
            music_volume: 1.7,
            sound_volume: -0.2,
        }
        .clamped();
        assert_eq!(options.music_volume, 1.0);
        assert_eq!(options.sound_volume, 0.0);
    }

    #[test]
    fn test_config_error_display() {
        let parse_error = serde_json::from_str::<GameConfig>("not json").unwrap_err();
        let error = ConfigError::from(parse_error);
        assert!(error.to_string().contains("parse"));
    }
}
