pub mod manager;

pub use manager::*;

use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchState {
    Countdown,
    Playing,
    GoalPause,
    Finished,
}

impl Display for MatchState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchState::Countdown => write!(f, "Countdown"),
            MatchState::Playing => write!(f, "Playing"),
            MatchState::GoalPause => write!(f, "Goal pause"),
            MatchState::Finished => write!(f, "Finished"),
        }
    }
}
