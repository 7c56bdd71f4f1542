use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "Easy")]
    Easy,
    #[default]
    #[serde(alias = "Normal")]
    Normal,
    #[serde(alias = "Hard")]
    Hard,
}

impl Difficulty {
    /// Seconds between two target recomputations.
    pub fn reaction_interval(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.1,
            Difficulty::Normal => 0.05,
            Difficulty::Hard => 0.03,
        }
    }

    /// Half-width of the uniform positional error added to every target.
    pub fn error_range(&self) -> f32 {
        match self {
            Difficulty::Easy => 9.0,
            Difficulty::Normal => 6.0,
            Difficulty::Hard => 2.0,
        }
    }

    /// Probability that a ball carrier passes instead of shooting.
    pub fn awareness(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 0.8,
            Difficulty::Hard => 0.95,
        }
    }

    /// Half-width of the vertical aiming error on shots.
    pub fn aim_error(&self) -> f32 {
        match self {
            Difficulty::Easy => 100.0,
            Difficulty::Normal => 50.0,
            Difficulty::Hard => 20.0,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Normal => write!(f, "Normal"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}
