use crate::r#match::{MatchPlayer, MatchState, PlayerSide, SideTally};
use nalgebra::Vector2;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BallSnapshot {
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub id: u32,
    pub side: PlayerSide,
    pub index: usize,
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub is_active: bool,
    pub has_ball: bool,
    pub ai_target: Option<Vector2<f32>>,
}

impl PlayerSnapshot {
    pub fn from_player(player: &MatchPlayer, ai_target: Option<Vector2<f32>>) -> Self {
        PlayerSnapshot {
            id: player.id,
            side: player.side,
            index: player.index,
            position: player.position,
            velocity: player.velocity,
            is_active: player.is_active,
            has_ball: player.has_ball,
            ai_target,
        }
    }
}

/// Read-only view of one frame, everything a renderer or HUD needs.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub state: MatchState,
    pub time_left: f32,
    pub countdown: f32,
    pub paused: bool,
    pub score: SideTally,
    pub hits: SideTally,
    pub ball: BallSnapshot,
    pub players: Vec<PlayerSnapshot>,
}

impl MatchSnapshot {
    pub fn players_of(&self, side: PlayerSide) -> impl Iterator<Item = &PlayerSnapshot> {
        self.players.iter().filter(move |p| p.side == side)
    }
}
