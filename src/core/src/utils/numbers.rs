pub struct FloatUtils;

impl FloatUtils {
    /// Uniform sample from `[min, max)`. Returns `min` for an empty range.
    #[inline]
    pub fn random(min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }

        min + rand::random::<f32>() * (max - min)
    }

    /// Uniform sample from `[-range, range)`.
    #[inline]
    pub fn symmetric(range: f32) -> f32 {
        Self::random(-range, range)
    }

    /// True with probability `probability` (clamped into `[0, 1]`).
    #[inline]
    pub fn chance(probability: f32) -> bool {
        rand::random::<f32>() < probability.clamp(0.0, 1.0)
    }

    /// Uniformly chooses `1.0` or `-1.0`.
    #[inline]
    pub fn random_sign() -> f32 {
        if rand::random::<f32>() > 0.5 { 1.0 } else { -1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_in_range() {
        for _ in 0..1000 {
            let value = FloatUtils::random(-5.0, 5.0);
            assert!((-5.0..5.0).contains(&value));
        }
    }

    #[test]
    fn test_random_empty_range_returns_min() {
        assert_eq!(FloatUtils::random(3.0, 3.0), 3.0);
        assert_eq!(FloatUtils::random(3.0, 1.0), 3.0);
    }

    #[test]
    fn test_chance_extremes() {
        for _ in 0..100 {
            assert!(!FloatUtils::chance(0.0));
            assert!(FloatUtils::chance(1.0));
        }
    }

    #[test]
    fn test_random_sign() {
        for _ in 0..100 {
            let sign = FloatUtils::random_sign();
            assert!(sign == 1.0 || sign == -1.0);
        }
    }
}
