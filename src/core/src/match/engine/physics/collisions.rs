use crate::r#match::{Ball, KinematicBody, MatchPlayer, PlayArea, VectorExtensions};
use nalgebra::Vector2;

/// Gap left between ball and player after separation so the pair does not
/// re-collide on the next step.
const SEPARATION_EPSILON: f32 = 0.01;

/// Clamps the ball into `area` and reflects it off every wall it crossed.
/// Left/right and top/bottom are checked independently, so a corner reflects
/// both axes in one call. Returns whether anything was reflected.
pub fn resolve_walls(ball: &mut Ball, area: &PlayArea) -> bool {
    let radius = ball.radius;
    let mut reflected = false;

    if ball.position.x - radius < area.left {
        ball.position.x = area.left + radius;
        ball.velocity = ball.velocity.reflect(&Vector2::new(1.0, 0.0));
        reflected = true;
    } else if ball.position.x + radius > area.right {
        ball.position.x = area.right - radius;
        ball.velocity = ball.velocity.reflect(&Vector2::new(1.0, 0.0));
        reflected = true;
    }

    if ball.position.y - radius < area.top {
        ball.position.y = area.top + radius;
        ball.velocity = ball.velocity.reflect(&Vector2::new(0.0, 1.0));
        reflected = true;
    } else if ball.position.y + radius > area.bottom {
        ball.position.y = area.bottom - radius;
        ball.velocity = ball.velocity.reflect(&Vector2::new(0.0, 1.0));
        reflected = true;
    }

    if reflected {
        let speed = ball.velocity.norm();
        if speed > 0.0 {
            ball.velocity = ball.velocity.scale_to_length(speed * ball.restitution);
        }
    }

    reflected
}

/// Circle-circle response between the ball and one player: separate, reflect
/// about the contact normal, apply restitution, then add a share of the
/// player's velocity. Coincident centres resolve along `(1, 0)`.
pub fn resolve_ball_player(ball: &mut Ball, player: &MatchPlayer, momentum_transfer: f32) -> bool {
    let radius_sum = ball.radius + player.radius;

    let mut delta = ball.position - player.position;
    let mut distance = delta.norm();

    if distance == 0.0 {
        delta = Vector2::new(1.0, 0.0);
        distance = 1.0;
    }

    if distance >= radius_sum {
        return false;
    }

    let normal = delta / distance;

    ball.position = player.position + normal * (radius_sum + SEPARATION_EPSILON);

    let previous_speed = ball.speed();

    ball.velocity = ball.velocity.reflect(&normal);

    if previous_speed > 0.0 {
        ball.velocity = ball.velocity.scale_to_length(previous_speed * ball.restitution);
    }

    ball.velocity += player.velocity * momentum_transfer;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BallConfig, MatchConfig};
    use crate::r#match::PlayerSide;

    const EPSILON: f32 = 1e-3;

    fn area() -> PlayArea {
        PlayArea::new(40.0, 40.0, 920.0, 500.0)
    }

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::new(&BallConfig::default(), Vector2::new(x, y));
        ball.velocity = Vector2::new(vx, vy);
        ball
    }

    fn player(x: f32, y: f32) -> MatchPlayer {
        MatchPlayer::new(PlayerSide::Left, 0, Vector2::new(x, y), &MatchConfig::default())
    }

    #[test]
    fn test_left_wall_bounce() {
        let area = area();
        let mut ball = ball(area.left - 5.0, 270.0, -100.0, 0.0);

        assert!(resolve_walls(&mut ball, &area));
        assert_eq!(ball.position.x, area.left + ball.radius);
        assert!(ball.velocity.x > 0.0);
        assert!((ball.velocity.x - 98.0).abs() < EPSILON);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let area = area();
        let mut ball = ball(915.0, 495.0, 100.0, 50.0);

        assert!(resolve_walls(&mut ball, &area));
        assert_eq!(ball.position, Vector2::new(910.0, 490.0));
        assert!(ball.velocity.x < 0.0);
        assert!(ball.velocity.y < 0.0);
    }

    #[test]
    fn test_walls_idempotent() {
        let area = area();
        let mut ball = ball(30.0, 30.0, -80.0, -80.0);

        assert!(resolve_walls(&mut ball, &area));
        assert!(!resolve_walls(&mut ball, &area));
    }

    #[test]
    fn test_ball_inside_untouched() {
        let area = area();
        let mut ball = ball(480.0, 270.0, 30.0, 40.0);

        assert!(!resolve_walls(&mut ball, &area));
        assert_eq!(ball.velocity, Vector2::new(30.0, 40.0));
    }

    #[test]
    fn test_ball_player_leaves_no_overlap() {
        let player = player(200.0, 200.0);
        let mut ball = ball(210.0, 205.0, -150.0, 0.0);

        assert!(resolve_ball_player(&mut ball, &player, 0.25));
        assert!(ball.position.distance_to(&player.position) >= ball.radius + player.radius);
    }

    #[test]
    fn test_ball_player_loses_energy() {
        let player = player(200.0, 200.0);
        let mut ball = ball(220.0, 200.0, -200.0, 30.0);
        let before = ball.speed();

        resolve_ball_player(&mut ball, &player, 0.25);

        assert!(ball.speed() <= before * ball.restitution + EPSILON);
        assert!(ball.velocity.x > 0.0);
    }

    #[test]
    fn test_momentum_transfer_from_moving_player() {
        let mut player = player(200.0, 200.0);
        player.velocity = Vector2::new(100.0, 0.0);
        let mut ball = ball(220.0, 200.0, 0.0, 0.0);

        assert!(resolve_ball_player(&mut ball, &player, 0.25));
        assert!((ball.velocity.x - 25.0).abs() < EPSILON);
        assert_eq!(ball.velocity.y, 0.0);
    }

    #[test]
    fn test_coincident_centres_push_right() {
        let player = player(300.0, 300.0);
        let mut ball = ball(300.0, 300.0, 0.0, 0.0);

        assert!(resolve_ball_player(&mut ball, &player, 0.25));
        assert!(ball.position.x > 300.0);
        assert_eq!(ball.position.y, 300.0);
    }

    #[test]
    fn test_separated_pair_not_resolved() {
        let player = player(300.0, 300.0);
        let mut ball = ball(326.0, 300.0, -10.0, 0.0);

        assert!(!resolve_ball_player(&mut ball, &player, 0.25));
        assert_eq!(ball.velocity, Vector2::new(-10.0, 0.0));
    }
}
