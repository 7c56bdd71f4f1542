use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Runs `action` and returns its result with the elapsed wall time in milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_returns_action_result() {
        let (result, _) = TimeEstimation::estimate(|| 2 + 2);
        assert_eq!(result, 4);
    }
}
