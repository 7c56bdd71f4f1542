use crate::config::MatchConfig;
use crate::r#match::{Ball, KinematicBody, PlayArea, VectorExtensions};
use nalgebra::Vector2;
use serde::Serialize;

/// Extra reach (beyond touching) within which an explicit kick connects.
const KICK_TOLERANCE: f32 = 2.0;

/// Extra reach within which a player counts as having the ball.
const POSSESSION_MARGIN: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    pub fn opposite(&self) -> PlayerSide {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }

    /// +1 when attacking towards increasing x.
    pub fn attack_direction(&self) -> f32 {
        match self {
            PlayerSide::Left => 1.0,
            PlayerSide::Right => -1.0,
        }
    }

    fn id_base(&self) -> u32 {
        match self {
            PlayerSide::Left => 0,
            PlayerSide::Right => 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub id: u32,
    pub index: usize,
    pub side: PlayerSide,

    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub radius: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    pub drag: f32,
    pub kick_strength: f32,

    /// Human-selected player of its team.
    pub is_active: bool,
    /// Ball proximity, recomputed every simulation step. Never carried over
    /// as possession.
    pub has_ball: bool,

    pub home_x: f32,
    pub home_y: f32,
}

impl MatchPlayer {
    pub fn new(side: PlayerSide, index: usize, position: Vector2<f32>, config: &MatchConfig) -> Self {
        MatchPlayer {
            id: side.id_base() + index as u32 + 1,
            index,
            side,
            position,
            velocity: Vector2::zeros(),
            radius: config.player.radius,
            acceleration: config.player.accel,
            max_speed: config.player.speed,
            drag: config.player.drag,
            kick_strength: config.tuning.kick_strength,
            is_active: false,
            has_ball: false,
            home_x: position.x,
            home_y: position.y,
        }
    }

    /// One movement step. The order accelerate, drag, clamp speed, integrate,
    /// clamp position is fixed.
    pub fn move_with(&mut self, direction: Vector2<f32>, dt: f32, area: &PlayArea) {
        if direction.norm_squared() > 0.0 {
            self.velocity += direction.normalize_or_default() * self.acceleration * dt;
        }

        self.velocity *= self.drag;

        self.clamp_speed();

        self.position += self.velocity * dt;

        self.position = area.clamp_circle(self.position, self.radius);
    }

    /// Impulse of `kick_strength` along player→ball when the ball is within
    /// reach. Coincident centres kick towards `(1, 0)`.
    pub fn kick(&self, ball: &mut Ball) -> bool {
        let delta = ball.position - self.position;
        let reach = self.radius + ball.radius + KICK_TOLERANCE;

        if delta.norm_squared() <= reach * reach {
            ball.apply_force(delta.normalize_or_default() * self.kick_strength);
            return true;
        }

        false
    }

    pub fn update_possession(&mut self, ball: &Ball) {
        let margin = self.radius + ball.radius + POSSESSION_MARGIN;
        self.has_ball = self.position.distance_squared_to(&ball.position) <= margin * margin;
    }

    pub fn reset_to_home(&mut self) {
        self.position = Vector2::new(self.home_x, self.home_y);
        self.velocity = Vector2::zeros();
        self.has_ball = false;
    }
}

impl KinematicBody for MatchPlayer {
    #[inline]
    fn velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    #[inline]
    fn set_velocity(&mut self, velocity: Vector2<f32>) {
        self.velocity = velocity;
    }

    #[inline]
    fn max_speed(&self) -> f32 {
        self.max_speed
    }
}
