use crate::r#match::PlayerSide;
use nalgebra::Vector2;
use serde::Serialize;
use std::collections::HashMap;

/// One counter per side: goals or ball hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SideTally {
    pub left: u32,
    pub right: u32,
}

impl SideTally {
    pub fn increment(&mut self, side: PlayerSide) {
        match side {
            PlayerSide::Left => self.left += 1,
            PlayerSide::Right => self.right += 1,
        }
    }

    pub fn add(&mut self, side: PlayerSide, amount: u32) {
        match side {
            PlayerSide::Left => self.left += amount,
            PlayerSide::Right => self.right += amount,
        }
    }

    pub fn get(&self, side: PlayerSide) -> u32 {
        match side {
            PlayerSide::Left => self.left,
            PlayerSide::Right => self.right,
        }
    }

    pub fn total(&self) -> u32 {
        self.left + self.right
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub score: SideTally,
    pub hits: SideTally,
    pub duration_ms: u64,
    pub winner: Option<PlayerSide>,
    #[serde(skip_serializing_if = "ResultMatchPositionData::is_empty")]
    pub position_data: ResultMatchPositionData,
}

impl MatchResult {
    pub fn new(
        score: SideTally,
        hits: SideTally,
        duration_ms: u64,
        position_data: ResultMatchPositionData,
    ) -> Self {
        MatchResult {
            score,
            hits,
            duration_ms,
            winner: Self::winner_of(&score),
            position_data,
        }
    }

    /// `None` on a draw.
    pub fn winner(&self) -> Option<PlayerSide> {
        self.winner
    }

    fn winner_of(score: &SideTally) -> Option<PlayerSide> {
        match score.left.cmp(&score.right) {
            std::cmp::Ordering::Greater => Some(PlayerSide::Left),
            std::cmp::Ordering::Less => Some(PlayerSide::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultPositionDataItem {
    pub timestamp: u64,
    pub position: Vector2<f32>,
}

impl ResultPositionDataItem {
    pub fn new(timestamp: u64, position: Vector2<f32>) -> Self {
        ResultPositionDataItem {
            timestamp,
            position,
        }
    }
}

/// Replay track of the ball and every player, keyed by match milliseconds.
/// A sample is stored only when the position changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultMatchPositionData {
    ball: Vec<ResultPositionDataItem>,
    players: HashMap<u32, Vec<ResultPositionDataItem>>,
}

impl ResultMatchPositionData {
    pub fn new() -> Self {
        ResultMatchPositionData {
            ball: Vec::new(),
            players: HashMap::with_capacity(2 * crate::config::MAX_PLAYERS_PER_TEAM),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ball.is_empty() && self.players.is_empty()
    }

    pub fn add_player_positions(&mut self, player_id: u32, timestamp: u64, position: Vector2<f32>) {
        let track = self.players.entry(player_id).or_default();
        push_if_moved(track, timestamp, position);
    }

    pub fn add_ball_positions(&mut self, timestamp: u64, position: Vector2<f32>) {
        push_if_moved(&mut self.ball, timestamp, position);
    }

    pub fn max_timestamp(&self) -> u64 {
        self.ball.last().map(|item| item.timestamp).unwrap_or(0)
    }

    /// Ball position of the sample nearest to `timestamp`.
    pub fn get_ball_position_at(&self, timestamp: u64) -> Option<Vector2<f32>> {
        nearest(&self.ball, timestamp)
    }

    pub fn get_player_position_at(&self, player_id: u32, timestamp: u64) -> Option<Vector2<f32>> {
        nearest(self.players.get(&player_id)?, timestamp)
    }

    pub fn get_player_ids(&self) -> Vec<u32> {
        self.players.keys().copied().collect()
    }

    pub fn ball_samples(&self) -> usize {
        self.ball.len()
    }
}

fn push_if_moved(track: &mut Vec<ResultPositionDataItem>, timestamp: u64, position: Vector2<f32>) {
    if track.last().is_some_and(|last| last.position == position) {
        return;
    }

    track.push(ResultPositionDataItem::new(timestamp, position));
}

fn nearest(track: &[ResultPositionDataItem], timestamp: u64) -> Option<Vector2<f32>> {
    if track.is_empty() {
        return None;
    }

    let idx = track
        .binary_search_by_key(&timestamp, |item| item.timestamp)
        .unwrap_or_else(|idx| {
            if idx == 0 {
                0
            } else if idx >= track.len() {
                track.len() - 1
            } else {
                let before = &track[idx - 1];
                let after = &track[idx];
                if timestamp - before.timestamp < after.timestamp - timestamp {
                    idx - 1
                } else {
                    idx
                }
            }
        });

    Some(track[idx].position)
}
