use crate::r#match::VectorExtensions;
use nalgebra::Vector2;

/// Shared circular-body behaviour for the ball and the players.
///
/// Every external influence (kicks, force fields) goes through
/// [`KinematicBody::apply_force`] so that all of them share one
/// speed-limiting path.
pub trait KinematicBody {
    fn velocity(&self) -> Vector2<f32>;
    fn set_velocity(&mut self, velocity: Vector2<f32>);
    fn max_speed(&self) -> f32;

    #[inline]
    fn speed(&self) -> f32 {
        self.velocity().norm()
    }

    fn apply_force(&mut self, force: Vector2<f32>) {
        self.set_velocity(self.velocity() + force);
        self.clamp_speed();
    }

    fn clamp_speed(&mut self) {
        let limited = self.velocity().limit_magnitude(self.max_speed());
        self.set_velocity(limited);
    }
}
