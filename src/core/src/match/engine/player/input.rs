use crate::r#match::PlayArea;
use nalgebra::Vector2;

/// Per-frame input of one human-controlled team. `direction` is raw
/// (−1/0/+1 per axis); normalisation happens in the core.
#[derive(Debug, Clone, Default)]
pub struct TeamInput {
    pub direction: Vector2<f32>,
    pub cycle_selection: bool,
    pub select_index: Option<usize>,
    pub kick: bool,
}

impl TeamInput {
    /// Builds the direction from four digital keys.
    pub fn from_keys(up: bool, down: bool, left: bool, right: bool) -> Self {
        let axis = |negative: bool, positive: bool| match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        TeamInput {
            direction: Vector2::new(axis(left, right), axis(up, down)),
            ..Default::default()
        }
    }

    pub fn with_kick(mut self) -> Self {
        self.kick = true;
        self
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.select_index = Some(index);
        self
    }

    pub fn with_cycle(mut self) -> Self {
        self.cycle_selection = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub left: TeamInput,
    pub right: TeamInput,
    pub restart: bool,
    pub toggle_pause: bool,
    /// New bounds reported by the adapter, if the window changed.
    pub resize: Option<PlayArea>,
}

impl FrameInput {
    pub fn idle() -> Self {
        FrameInput::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keys() {
        let input = TeamInput::from_keys(true, false, false, true);
        assert_eq!(input.direction, Vector2::new(1.0, -1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = TeamInput::from_keys(true, true, true, true);
        assert_eq!(input.direction, Vector2::zeros());
    }
}
