use crate::r#match::ai::roles::{
    APPROACH_BUFFER, PlayerRole, TARGET_MARGIN, ball_heading_to_goal, ball_in_corner,
    collision_point, corner_escape_target, corner_hold_target, defensive_target,
    find_open_teammate, goal_points, in_safe_zone, support_target,
};
use crate::r#match::{Ball, Difficulty, MatchPlayer, PlayArea, PlayerSide, VectorExtensions};
use crate::utils::FloatUtils;
use itertools::Itertools;
use log::debug;
use nalgebra::Vector2;

/// Rule-based controller for one side. Targets are recomputed wholesale once
/// per reaction interval and stay in effect in between.
#[derive(Debug, Clone)]
pub struct AiController {
    pub side: PlayerSide,
    difficulty: Difficulty,
    timer: f32,
    targets: Vec<Option<Vector2<f32>>>,
}

impl AiController {
    pub fn new(side: PlayerSide, difficulty: Difficulty) -> Self {
        AiController {
            side,
            difficulty,
            timer: 0.0,
            targets: Vec::new(),
        }
    }

    /// Accumulates `dt` and recomputes every target once the reaction
    /// interval has elapsed. Returns whether a recomputation happened.
    pub fn update(&mut self, dt: f32, area: &PlayArea, ball: &Ball, players: &[MatchPlayer]) -> bool {
        self.timer += dt;

        if self.timer < self.difficulty.reaction_interval() {
            return false;
        }

        self.timer = 0.0;
        self.recompute(area, ball, players);

        true
    }

    pub fn recompute(&mut self, area: &PlayArea, ball: &Ball, players: &[MatchPlayer]) {
        let ball_position = ball.position;
        let (own_goal, opponent_goal) = goal_points(self.side, area);
        let corner_stuck = ball_in_corner(ball_position, area);

        let mut by_distance = players
            .iter()
            .sorted_by(|a, b| {
                a.position
                    .distance_squared_to(&ball_position)
                    .total_cmp(&b.position.distance_squared_to(&ball_position))
            })
            .map(|p| p.index);

        let nearest = by_distance.next();
        let second_nearest = by_distance.next();

        let apply_error = !ball_heading_to_goal(self.side, ball_position, ball.velocity, area);
        let error_range = self.difficulty.error_range();

        let mut targets = vec![None; players.iter().map(|p| p.index + 1).max().unwrap_or(0)];

        for (slot, player) in players.iter().enumerate() {
            let role = PlayerRole::assign(
                player.index,
                nearest,
                second_nearest,
                corner_stuck,
                player.has_ball,
            );

            let approach = player.radius + ball.radius + APPROACH_BUFFER;

            let target = match role {
                PlayerRole::CornerEscape => {
                    if in_safe_zone(ball_position, area) {
                        collision_point(ball_position, opponent_goal, approach)
                    } else {
                        corner_escape_target(self.side, ball_position, area)
                    }
                }
                PlayerRole::CornerHold => corner_hold_target(slot, players.len(), area),
                PlayerRole::Carrier => {
                    let aim = self.carrier_aim(players, player, opponent_goal);
                    collision_point(ball_position, aim, approach)
                }
                PlayerRole::Striker => collision_point(ball_position, opponent_goal, approach),
                PlayerRole::Support => {
                    support_target(ball_position, opponent_goal, FloatUtils::random_sign())
                }
                PlayerRole::Defender => defensive_target(self.side, ball_position, area),
            };

            let mut target = area.clamp_with_margin(target, TARGET_MARGIN);

            if apply_error {
                target += Vector2::new(
                    FloatUtils::symmetric(error_range),
                    FloatUtils::symmetric(error_range),
                );
            }

            targets[player.index] = Some(target);
        }

        debug!(
            "{:?} AI targets recomputed (corner: {}, own goal: {:?})",
            self.side, corner_stuck, own_goal
        );

        self.targets = targets;
    }

    /// Pass to the nearest teammate with probability `awareness`, otherwise
    /// shoot with a vertical aiming error.
    fn carrier_aim(
        &self,
        players: &[MatchPlayer],
        carrier: &MatchPlayer,
        opponent_goal: Vector2<f32>,
    ) -> Vector2<f32> {
        if let Some(teammate) = find_open_teammate(players, carrier) {
            if FloatUtils::chance(self.difficulty.awareness()) {
                return teammate.position;
            }
        }

        Vector2::new(
            opponent_goal.x,
            opponent_goal.y + FloatUtils::symmetric(self.difficulty.aim_error()),
        )
    }

    /// Unit vector towards the stored target, zero when there is none or the
    /// player already stands on it.
    pub fn advise_direction(&self, player: &MatchPlayer) -> Vector2<f32> {
        match self.target(player.index) {
            Some(target) => (target - player.position).normalize_or_zero(),
            None => Vector2::zeros(),
        }
    }

    pub fn target(&self, index: usize) -> Option<Vector2<f32>> {
        self.targets.get(index).copied().flatten()
    }

    pub fn targets(&self) -> &[Option<Vector2<f32>>] {
        &self.targets
    }

    /// Drops every target and restarts the reaction timer.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
        self.timer = 0.0;
    }
}
