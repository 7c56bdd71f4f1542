use crate::config::MatchConfig;
use crate::r#match::{Ball, MatchPlayer, MatchTeam, PlayerSide};
use log::debug;
use nalgebra::Vector2;
use serde::Serialize;

/// Axis-aligned rectangle every body is confined to. All simulation
/// coordinates live in this space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlayArea {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        PlayArea {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    pub fn contains(&self, point: Vector2<f32>) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Keeps a circle of `radius` fully inside the area.
    pub fn clamp_circle(&self, point: Vector2<f32>, radius: f32) -> Vector2<f32> {
        self.clamp_with_margin(point, radius)
    }

    pub fn clamp_with_margin(&self, point: Vector2<f32>, margin: f32) -> Vector2<f32> {
        Vector2::new(
            point.x.max(self.left + margin).min(self.right - margin),
            point.y.max(self.top + margin).min(self.bottom - margin),
        )
    }
}

/// Thin scoring rectangle in front of the goal defended by `side`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalSensor {
    pub side: PlayerSide,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GoalSensor {
    pub fn new(side: PlayerSide, area: &PlayArea, goal_width: f32, goal_depth: f32) -> Self {
        let y = area.center().y - goal_width / 2.0;

        let x = match side {
            PlayerSide::Left => area.left,
            PlayerSide::Right => area.right - goal_depth,
        };

        GoalSensor {
            side,
            x,
            y,
            width: goal_depth,
            height: goal_width,
        }
    }

    /// Half-open containment of a single point.
    pub fn contains(&self, point: Vector2<f32>) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Side credited with a goal when the ball enters this sensor.
    #[inline]
    pub fn scoring_side(&self) -> PlayerSide {
        self.side.opposite()
    }
}

pub struct MatchField {
    pub area: PlayArea,
    pub ball: Ball,

    pub left_team: MatchTeam,
    pub right_team: MatchTeam,

    pub left_goal: GoalSensor,
    pub right_goal: GoalSensor,

    goal_width: f32,
    goal_depth: f32,
}

impl MatchField {
    pub fn new(config: &MatchConfig) -> Self {
        let area = config.play_area();

        MatchField {
            area,
            ball: Ball::new(&config.ball, area.center()),
            left_team: MatchTeam::new(PlayerSide::Left, config, &area),
            right_team: MatchTeam::new(PlayerSide::Right, config, &area),
            left_goal: GoalSensor::new(
                PlayerSide::Left,
                &area,
                config.field.goal_width,
                config.field.goal_depth,
            ),
            right_goal: GoalSensor::new(
                PlayerSide::Right,
                &area,
                config.field.goal_width,
                config.field.goal_depth,
            ),
            goal_width: config.field.goal_width,
            goal_depth: config.field.goal_depth,
        }
    }

    /// Rebuilds goal geometry for new bounds. Body positions are left as they
    /// are and get clamped by the next movement step.
    pub fn resize(&mut self, area: PlayArea) {
        debug!("play area resized to {:?}", area);

        self.area = area;
        self.left_goal = GoalSensor::new(PlayerSide::Left, &area, self.goal_width, self.goal_depth);
        self.right_goal =
            GoalSensor::new(PlayerSide::Right, &area, self.goal_width, self.goal_depth);
    }

    /// Re-forms both teams at their home spots and re-spawns the ball at the
    /// centre, at rest on kickoff, along a random heading otherwise.
    pub fn reset_positions(&mut self, kickoff: bool) {
        self.left_team.reset_formation(&self.area);
        self.right_team.reset_formation(&self.area);

        self.ball.spawn(self.area.center(), !kickoff);
    }

    pub fn team_mut(&mut self, side: PlayerSide) -> &mut MatchTeam {
        match side {
            PlayerSide::Left => &mut self.left_team,
            PlayerSide::Right => &mut self.right_team,
        }
    }

    pub fn players(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.left_team.players.iter().chain(self.right_team.players.iter())
    }

    /// Side credited with a goal if the ball centre lies in either sensor.
    pub fn check_goal(&self) -> Option<PlayerSide> {
        [&self.left_goal, &self.right_goal]
            .into_iter()
            .find(|sensor| sensor.contains(self.ball.position))
            .map(|sensor| sensor.scoring_side())
    }
}
