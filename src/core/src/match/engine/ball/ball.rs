use crate::config::BallConfig;
use crate::r#match::{KinematicBody, VectorExtensions};
use crate::utils::FloatUtils;
use nalgebra::Vector2;

/// Below this squared speed the ball is considered at rest.
const STOP_THRESHOLD_SQUARED: f32 = 1e-2;

/// Spread (radians) of the random kickoff heading around the x axis.
const SPAWN_ANGLE_SPREAD: f32 = 0.6;

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub radius: f32,
    pub max_speed: f32,
    pub base_speed: f32,

    /// Per-step multiplicative velocity decay, in `(0, 1)`.
    pub friction: f32,
    /// Fraction of speed kept through a collision, in `(0, 1]`.
    pub restitution: f32,
}

impl Ball {
    pub fn new(config: &BallConfig, center: Vector2<f32>) -> Self {
        Ball {
            position: center,
            velocity: Vector2::zeros(),
            radius: config.radius,
            max_speed: config.max_speed,
            base_speed: config.base_speed,
            friction: config.friction,
            restitution: config.restitution,
        }
    }

    /// Integrates one step: move, decay, stop micro-drift, clamp speed.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;

        self.velocity *= self.friction;

        if self.velocity.norm_squared() < STOP_THRESHOLD_SQUARED {
            self.velocity = Vector2::zeros();
        }

        self.clamp_speed();
    }

    /// Re-centres the ball. With `direction_randomized` it gets `base_speed`
    /// along a random heading within ±0.6 rad of either goal direction,
    /// otherwise it is left at rest.
    pub fn spawn(&mut self, center: Vector2<f32>, direction_randomized: bool) {
        self.position = center;

        self.velocity = if direction_randomized {
            let angle = FloatUtils::symmetric(SPAWN_ANGLE_SPREAD);
            let mut direction = Vector2::new(1.0, 0.0).rotate_radians(angle);

            if FloatUtils::chance(0.5) {
                direction.x = -direction.x;
            }

            direction * self.base_speed
        } else {
            Vector2::zeros()
        };
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.velocity.x == 0.0 && self.velocity.y == 0.0
    }
}

impl KinematicBody for Ball {
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

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn ball() -> Ball {
        Ball::new(&BallConfig::default(), Vector2::new(480.0, 270.0))
    }

    #[test]
    fn test_new_ball_is_at_rest_in_center() {
        let ball = ball();
        assert_eq!(ball.position, Vector2::new(480.0, 270.0));
        assert!(ball.is_stopped());
    }

    #[test]
    fn test_update_integrates_then_applies_friction() {
        let mut ball = ball();
        ball.velocity = Vector2::new(100.0, 0.0);

        ball.update(0.5);

        assert!((ball.position.x - 530.0).abs() < EPSILON);
        assert!((ball.velocity.x - 100.0 * ball.friction).abs() < EPSILON);
    }

    #[test]
    fn test_update_stops_micro_drift() {
        let mut ball = ball();
        ball.velocity = Vector2::new(0.05, 0.05);

        ball.update(1.0 / 60.0);

        assert!(ball.is_stopped());
    }

    #[test]
    fn test_update_clamps_speed() {
        let mut ball = ball();
        ball.friction = 1.0;
        ball.velocity = Vector2::new(2000.0, 0.0);

        ball.update(1.0 / 60.0);

        assert!(ball.velocity.norm() <= ball.max_speed + EPSILON);
    }

    #[test]
    fn test_apply_force_clamps_to_max_speed() {
        let mut ball = ball();
        ball.max_speed = 620.0;
        ball.velocity = Vector2::new(700.0, 0.0);

        ball.apply_force(Vector2::zeros());

        assert!((ball.velocity.norm() - 620.0).abs() < EPSILON);
    }

    #[test]
    fn test_kickoff_spawn_is_at_rest() {
        let mut ball = ball();
        ball.velocity = Vector2::new(50.0, 50.0);
        ball.position = Vector2::new(10.0, 10.0);

        ball.spawn(Vector2::new(480.0, 270.0), false);

        assert_eq!(ball.position, Vector2::new(480.0, 270.0));
        assert_eq!(ball.velocity, Vector2::zeros());
    }

    #[test]
    fn test_randomized_spawn_uses_base_speed_and_spread() {
        let mut ball = ball();

        for _ in 0..200 {
            ball.spawn(Vector2::new(480.0, 270.0), true);

            assert!((ball.velocity.norm() - ball.base_speed).abs() < 0.01);

            let heading = (ball.velocity.y / ball.velocity.x.abs()).atan();
            assert!(heading.abs() <= SPAWN_ANGLE_SPREAD + EPSILON);
        }
    }
}
