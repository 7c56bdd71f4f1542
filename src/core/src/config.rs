use crate::r#match::{Difficulty, PlayArea};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;

pub const MAX_PLAYERS_PER_TEAM: usize = 5;

/// Immutable match configuration. Built once at match start and handed by
/// reference to every component constructor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub window: WindowConfig,
    pub field: FieldConfig,
    pub ball: BallConfig,
    pub player: PlayerConfig,
    pub teams: TeamsConfig,
    pub force_field: ForceFieldConfig,
    pub ai: AiConfig,
    pub mode: GameMode,
    #[serde(rename = "match")]
    pub match_settings: MatchSettings,
    pub tuning: TuningConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig { fps: 60 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub goal_width: f32,
    pub goal_depth: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            width: 960.0,
            height: 540.0,
            margin: 40.0,
            goal_width: 140.0,
            goal_depth: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub restitution: f32,
    pub friction: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        BallConfig {
            radius: 10.0,
            base_speed: 320.0,
            max_speed: 520.0,
            restitution: 0.98,
            friction: 0.995,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f32,
    #[serde(alias = "max_speed")]
    pub speed: f32,
    pub accel: f32,
    pub drag: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            radius: 16.0,
            speed: 260.0,
            accel: 2600.0,
            drag: 0.90,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamsConfig {
    pub per_team: i32,
    pub max_per_team: i32,
    pub restrict_half: bool,
}

impl Default for TeamsConfig {
    fn default() -> Self {
        TeamsConfig {
            per_team: 2,
            max_per_team: MAX_PLAYERS_PER_TEAM as i32,
            restrict_half: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceFieldConfig {
    pub enabled: bool,
    pub strength: f32,
}

impl Default for ForceFieldConfig {
    fn default() -> Self {
        ForceFieldConfig {
            enabled: false,
            strength: 80.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub enabled: bool,
    pub difficulty: Difficulty,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: true,
            difficulty: Difficulty::Normal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub minutes: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings { minutes: 2 }
    }
}

/// Empirical constants with no physical derivation, kept tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub kick_strength: f32,
    pub momentum_transfer: f32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        TuningConfig {
            kick_strength: 220.0,
            momentum_transfer: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Multiplayer,
    HumanVsAi,
    #[serde(alias = "multiplayer_ai", alias = "two_plus_ai")]
    AiVsAi,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl MatchConfig {
    /// Parses a JSON document. Missing sections and keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            debug!("config {} not found, using defaults", path.display());
            return MatchConfig::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("config {} is malformed ({}), using defaults", path.display(), err);
                MatchConfig::default()
            }
        }
    }

    /// Per-team count clamped into `[1, max_per_team]`, where `max_per_team`
    /// itself never exceeds [`MAX_PLAYERS_PER_TEAM`].
    pub fn players_per_team(&self) -> usize {
        let max = self.teams.max_per_team.clamp(1, MAX_PLAYERS_PER_TEAM as i32);
        self.teams.per_team.clamp(1, max) as usize
    }

    /// Writes the clamped team sizes back, warning once per corrected value.
    pub fn normalized(mut self) -> Self {
        let max = self.teams.max_per_team.clamp(1, MAX_PLAYERS_PER_TEAM as i32);

        if max != self.teams.max_per_team {
            warn!("max_per_team {} out of range, clamped to {}", self.teams.max_per_team, max);
            self.teams.max_per_team = max;
        }

        let count = self.players_per_team() as i32;

        if count != self.teams.per_team {
            warn!("per_team {} out of range, clamped to {}", self.teams.per_team, count);
            self.teams.per_team = count;
        }

        self
    }

    pub fn match_seconds(&self) -> f32 {
        self.match_settings.minutes.max(1) as f32 * 60.0
    }

    pub fn frame_dt(&self) -> f32 {
        1.0 / self.window.fps.max(1) as f32
    }

    pub fn play_area(&self) -> PlayArea {
        let margin = self.field.margin;

        PlayArea::new(
            margin,
            margin,
            self.field.width - margin,
            self.field.height - margin,
        )
    }
}
