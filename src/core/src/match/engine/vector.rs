use nalgebra::Vector2;

/// Fallback direction used whenever a zero-length vector has to be turned
/// into a direction.
#[inline]
pub fn default_direction() -> Vector2<f32> {
    Vector2::new(1.0, 0.0)
}

pub trait VectorExtensions {
    fn distance_to(&self, other: &Vector2<f32>) -> f32;
    fn distance_squared_to(&self, other: &Vector2<f32>) -> f32;

    /// Unit vector, or `(1, 0)` when the vector has zero length.
    fn normalize_or_default(&self) -> Vector2<f32>;

    /// Unit vector, or the zero vector when the vector has zero length.
    fn normalize_or_zero(&self) -> Vector2<f32>;

    /// Mirror about the line whose normal is `normal`. The normal does not
    /// need to be unit length; a zero normal is treated as `(1, 0)`.
    fn reflect(&self, normal: &Vector2<f32>) -> Vector2<f32>;

    fn rotate_radians(&self, angle: f32) -> Vector2<f32>;
    fn rotate_degrees(&self, angle: f32) -> Vector2<f32>;

    fn limit_magnitude(&self, max: f32) -> Vector2<f32>;

    /// Same direction, new length. The zero vector stays zero.
    fn scale_to_length(&self, length: f32) -> Vector2<f32>;
}

impl VectorExtensions for Vector2<f32> {
    #[inline]
    fn distance_to(&self, other: &Vector2<f32>) -> f32 {
        (self - other).norm()
    }

    #[inline]
    fn distance_squared_to(&self, other: &Vector2<f32>) -> f32 {
        (self - other).norm_squared()
    }

    #[inline]
    fn normalize_or_default(&self) -> Vector2<f32> {
        let length = self.norm();
        if length > 0.0 {
            self / length
        } else {
            default_direction()
        }
    }

    #[inline]
    fn normalize_or_zero(&self) -> Vector2<f32> {
        let length = self.norm();
        if length > 0.0 {
            self / length
        } else {
            Vector2::zeros()
        }
    }

    fn reflect(&self, normal: &Vector2<f32>) -> Vector2<f32> {
        let n = normal.normalize_or_default();
        self - n * (2.0 * self.dot(&n))
    }

    fn rotate_radians(&self, angle: f32) -> Vector2<f32> {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn rotate_degrees(&self, angle: f32) -> Vector2<f32> {
        self.rotate_radians(angle.to_radians())
    }

    #[inline]
    fn limit_magnitude(&self, max: f32) -> Vector2<f32> {
        let length = self.norm();
        if length > max && length > 0.0 {
            self * (max / length)
        } else {
            *self
        }
    }

    #[inline]
    fn scale_to_length(&self, length: f32) -> Vector2<f32> {
        self.normalize_or_zero() * length
    }
}
