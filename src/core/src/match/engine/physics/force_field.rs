use crate::config::ForceFieldConfig;
use crate::r#match::{Ball, KinematicBody};
use nalgebra::Vector2;

/// Floor on the squared distance, bounding the pull near the centre.
const MIN_DISTANCE_SQUARED: f32 = 50.0;

/// Optional inverse-square attraction of the ball towards a point.
#[derive(Debug, Clone)]
pub struct ForceField {
    pub center: Vector2<f32>,
    pub strength: f32,
    pub enabled: bool,
}

impl ForceField {
    pub fn new(config: &ForceFieldConfig, center: Vector2<f32>) -> Self {
        ForceField {
            center,
            strength: config.strength,
            enabled: config.enabled,
        }
    }

    pub fn apply(&self, ball: &mut Ball, dt: f32) {
        if !self.enabled {
            return;
        }

        let d = self.center - ball.position;
        let d2 = d.norm_squared().max(MIN_DISTANCE_SQUARED);

        ball.apply_force(d * (self.strength / d2) * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BallConfig;

    fn field(enabled: bool) -> ForceField {
        ForceField::new(
            &ForceFieldConfig {
                enabled,
                strength: 80.0,
            },
            Vector2::new(480.0, 270.0),
        )
    }

    #[test]
    fn test_disabled_field_does_nothing() {
        let mut ball = Ball::new(&BallConfig::default(), Vector2::new(100.0, 100.0));
        field(false).apply(&mut ball, 1.0);
        assert_eq!(ball.velocity, Vector2::zeros());
    }

    #[test]
    fn test_pulls_towards_center() {
        let mut ball = Ball::new(&BallConfig::default(), Vector2::new(380.0, 270.0));

        field(true).apply(&mut ball, 1.0);

        assert!((ball.velocity.x - 0.8).abs() < 1e-4);
        assert_eq!(ball.velocity.y, 0.0);
    }

    #[test]
    fn test_force_is_bounded_near_center() {
        let mut ball = Ball::new(&BallConfig::default(), Vector2::new(481.0, 270.0));

        field(true).apply(&mut ball, 1.0);

        assert!((ball.velocity.x + 80.0 / 50.0).abs() < 1e-4);
    }
}
