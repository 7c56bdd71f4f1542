use crate::r#match::{MatchPlayer, PlayArea, PlayerSide, VectorExtensions};
use nalgebra::Vector2;
use serde::Serialize;

/// Distance from a corner, on both axes, under which the ball is stuck.
pub const CORNER_MARGIN: f32 = 50.0;

/// Inset the ball has to clear before the corner escaper goes back to shooting.
pub const SAFE_ZONE_MARGIN: f32 = 150.0;

/// Distance the escape target pulls the ball out of the corner, per axis.
pub const CORNER_ESCAPE_DISTANCE: f32 = 200.0;

/// Escape targets never get closer than this to the attacked edge.
pub const CORNER_ESCAPE_EDGE: f32 = 100.0;

/// Radius of the ring teammates hold around the centre while the ball is stuck.
pub const CORNER_HOLD_RADIUS: f32 = 200.0;

/// Extra clearance behind the ball on top of both radii.
pub const APPROACH_BUFFER: f32 = 5.0;

pub const SUPPORT_OFFSET: f32 = 120.0;

/// Defensive line as a fraction of the width from the own edge.
pub const DEFENSIVE_LINE: f32 = 0.25;

/// Goal reference points sit this far inside the play area.
pub const GOAL_INSET: f32 = 20.0;

/// Every target is kept this far inside the play area.
pub const TARGET_MARGIN: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerRole {
    /// Nearest player while the ball is stuck in a corner.
    CornerEscape,
    /// Everyone else while the ball is stuck in a corner.
    CornerHold,
    Carrier,
    Striker,
    Support,
    Defender,
}

impl PlayerRole {
    /// Role priority: corner handling, then possession, then distance rank.
    pub fn assign(
        index: usize,
        nearest: Option<usize>,
        second_nearest: Option<usize>,
        corner_stuck: bool,
        has_ball: bool,
    ) -> PlayerRole {
        let is_nearest = nearest == Some(index);

        if corner_stuck {
            return if is_nearest {
                PlayerRole::CornerEscape
            } else {
                PlayerRole::CornerHold
            };
        }

        if has_ball {
            PlayerRole::Carrier
        } else if is_nearest {
            PlayerRole::Striker
        } else if second_nearest == Some(index) {
            PlayerRole::Support
        } else {
            PlayerRole::Defender
        }
    }
}

/// Goal reference points `(own, opponent)` for `side`.
pub fn goal_points(side: PlayerSide, area: &PlayArea) -> (Vector2<f32>, Vector2<f32>) {
    let cy = area.center().y;

    let left = Vector2::new(area.left + GOAL_INSET, cy);
    let right = Vector2::new(area.right - GOAL_INSET, cy);

    match side {
        PlayerSide::Left => (left, right),
        PlayerSide::Right => (right, left),
    }
}

/// Spot behind the ball on the line from the ball to `aim`, `approach` away
/// from the ball centre. Running through it kicks the ball towards `aim`.
pub fn collision_point(ball: Vector2<f32>, aim: Vector2<f32>, approach: f32) -> Vector2<f32> {
    let direction = (aim - ball).normalize_or_default();
    ball - direction * approach
}

pub fn ball_in_corner(ball: Vector2<f32>, area: &PlayArea) -> bool {
    let near_x = ball.x < area.left + CORNER_MARGIN || ball.x > area.right - CORNER_MARGIN;
    let near_y = ball.y < area.top + CORNER_MARGIN || ball.y > area.bottom - CORNER_MARGIN;

    near_x && near_y
}

pub fn in_safe_zone(ball: Vector2<f32>, area: &PlayArea) -> bool {
    area.left + SAFE_ZONE_MARGIN < ball.x
        && ball.x < area.right - SAFE_ZONE_MARGIN
        && area.top + SAFE_ZONE_MARGIN < ball.y
        && ball.y < area.bottom - SAFE_ZONE_MARGIN
}

/// Ball is in the own half and travelling towards the own goal.
pub fn ball_heading_to_goal(
    side: PlayerSide,
    ball: Vector2<f32>,
    velocity: Vector2<f32>,
    area: &PlayArea,
) -> bool {
    let cx = area.center().x;

    match side {
        PlayerSide::Left => velocity.x < 0.0 && ball.x < cx,
        PlayerSide::Right => velocity.x > 0.0 && ball.x > cx,
    }
}

/// Pulls the ball towards the attacking half and the vertical centre, never
/// back towards the own goal.
pub fn corner_escape_target(side: PlayerSide, ball: Vector2<f32>, area: &PlayArea) -> Vector2<f32> {
    let center = area.center();

    let x = match side {
        PlayerSide::Left => (area.right - CORNER_ESCAPE_EDGE).min(ball.x + CORNER_ESCAPE_DISTANCE),
        PlayerSide::Right => (area.left + CORNER_ESCAPE_EDGE).max(ball.x - CORNER_ESCAPE_DISTANCE),
    };

    let y = if ball.y < center.y {
        center.y.min(ball.y + CORNER_ESCAPE_DISTANCE)
    } else {
        center.y.max(ball.y - CORNER_ESCAPE_DISTANCE)
    };

    Vector2::new(x, y)
}

/// Ring spot for the `slot`-th of `count` players around the centre.
pub fn corner_hold_target(slot: usize, count: usize, area: &PlayArea) -> Vector2<f32> {
    let angle = (slot + 1) as f32 * (360.0 / count.max(1) as f32);
    area.center() + Vector2::new(CORNER_HOLD_RADIUS, 0.0).rotate_degrees(angle)
}

pub fn defensive_target(side: PlayerSide, ball: Vector2<f32>, area: &PlayArea) -> Vector2<f32> {
    let x = match side {
        PlayerSide::Left => area.left + area.width() * DEFENSIVE_LINE,
        PlayerSide::Right => area.right - area.width() * DEFENSIVE_LINE,
    };

    Vector2::new(x, ball.y)
}

/// Offset perpendicular to the ball→goal line; `sign` picks the side.
pub fn support_target(ball: Vector2<f32>, goal: Vector2<f32>, sign: f32) -> Vector2<f32> {
    let direction = (goal - ball).normalize_or_default();
    let perpendicular = Vector2::new(-direction.y, direction.x);

    ball + perpendicular * SUPPORT_OFFSET * sign
}

/// Nearest teammate of the carrier, the carrier itself excluded.
pub fn find_open_teammate<'p>(
    players: &'p [MatchPlayer],
    carrier: &MatchPlayer,
) -> Option<&'p MatchPlayer> {
    players
        .iter()
        .filter(|p| p.index != carrier.index)
        .min_by(|a, b| {
            a.position
                .distance_squared_to(&carrier.position)
                .total_cmp(&b.position.distance_squared_to(&carrier.position))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;

    const EPSILON: f32 = 1e-3;

    fn area() -> PlayArea {
        PlayArea::new(40.0, 40.0, 920.0, 500.0)
    }

    #[test]
    fn test_role_priority() {
        assert_eq!(PlayerRole::assign(0, Some(0), Some(1), true, true), PlayerRole::CornerEscape);
        assert_eq!(PlayerRole::assign(1, Some(0), Some(1), true, true), PlayerRole::CornerHold);
        assert_eq!(PlayerRole::assign(1, Some(0), Some(1), false, true), PlayerRole::Carrier);
        assert_eq!(PlayerRole::assign(0, Some(0), Some(1), false, false), PlayerRole::Striker);
        assert_eq!(PlayerRole::assign(1, Some(0), Some(1), false, false), PlayerRole::Support);
        assert_eq!(PlayerRole::assign(2, Some(0), Some(1), false, false), PlayerRole::Defender);
    }

    #[test]
    fn test_goal_points_are_mirrored() {
        let (own, opponent) = goal_points(PlayerSide::Left, &area());

        assert_eq!(own, Vector2::new(60.0, 270.0));
        assert_eq!(opponent, Vector2::new(900.0, 270.0));
        assert_eq!(goal_points(PlayerSide::Right, &area()), (opponent, own));
    }

    #[test]
    fn test_collision_point_is_behind_ball() {
        let point = collision_point(Vector2::new(400.0, 270.0), Vector2::new(900.0, 270.0), 31.0);
        assert_eq!(point, Vector2::new(369.0, 270.0));
    }

    #[test]
    fn test_collision_point_with_coincident_aim() {
        let ball = Vector2::new(400.0, 270.0);
        let point = collision_point(ball, ball, 31.0);
        assert_eq!(point, Vector2::new(369.0, 270.0));
    }

    #[test]
    fn test_corner_detection_needs_both_axes() {
        let area = area();

        assert!(ball_in_corner(Vector2::new(50.0, 50.0), &area));
        assert!(ball_in_corner(Vector2::new(910.0, 490.0), &area));
        assert!(!ball_in_corner(Vector2::new(50.0, 270.0), &area));
        assert!(!ball_in_corner(Vector2::new(480.0, 50.0), &area));
    }

    #[test]
    fn test_safe_zone() {
        assert!(in_safe_zone(Vector2::new(480.0, 270.0), &area()));
        assert!(!in_safe_zone(Vector2::new(180.0, 270.0), &area()));
    }

    #[test]
    fn test_heading_to_goal() {
        let area = area();
        let ball = Vector2::new(300.0, 270.0);

        assert!(ball_heading_to_goal(PlayerSide::Left, ball, Vector2::new(-10.0, 0.0), &area));
        assert!(!ball_heading_to_goal(PlayerSide::Left, ball, Vector2::new(10.0, 0.0), &area));
        assert!(!ball_heading_to_goal(PlayerSide::Right, ball, Vector2::new(10.0, 0.0), &area));
    }

    #[test]
    fn test_corner_escape_never_goes_backwards() {
        let area = area();

        let left = corner_escape_target(PlayerSide::Left, Vector2::new(880.0, 60.0), &area);
        assert_eq!(left, Vector2::new(820.0, 260.0));

        let right = corner_escape_target(PlayerSide::Right, Vector2::new(60.0, 480.0), &area);
        assert_eq!(right, Vector2::new(140.0, 280.0));
    }

    #[test]
    fn test_corner_hold_ring() {
        let first = corner_hold_target(0, 2, &area());
        let second = corner_hold_target(1, 2, &area());

        assert!((first - Vector2::new(280.0, 270.0)).norm() < EPSILON);
        assert!((second - Vector2::new(680.0, 270.0)).norm() < EPSILON);
    }

    #[test]
    fn test_support_is_perpendicular() {
        let ball = Vector2::new(400.0, 270.0);
        let target = support_target(ball, Vector2::new(900.0, 270.0), 1.0);

        assert_eq!(target, Vector2::new(400.0, 390.0));
    }

    #[test]
    fn test_defensive_line() {
        let target = defensive_target(PlayerSide::Right, Vector2::new(100.0, 123.0), &area());
        assert_eq!(target, Vector2::new(700.0, 123.0));
    }

    #[test]
    fn test_open_teammate_excludes_carrier() {
        let config = MatchConfig::default();
        let players = vec![
            MatchPlayer::new(PlayerSide::Left, 0, Vector2::new(100.0, 100.0), &config),
            MatchPlayer::new(PlayerSide::Left, 1, Vector2::new(400.0, 100.0), &config),
            MatchPlayer::new(PlayerSide::Left, 2, Vector2::new(150.0, 100.0), &config),
        ];

        let teammate = find_open_teammate(&players, &players[0]);
        assert_eq!(teammate.map(|p| p.index), Some(2));

        assert!(find_open_teammate(&players[..1], &players[0]).is_none());
    }
}
