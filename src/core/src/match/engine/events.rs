use crate::r#match::{MatchState, PlayerSide};
use serde::Serialize;

/// Something adapters may want to react to (sound, HUD flashes). Emitting
/// events never affects the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MatchEvent {
    /// Side credited with the goal.
    Goal(PlayerSide),
    WallBounce,
    /// Side and id of the player the ball bounced off.
    PlayerHit(PlayerSide, u32),
    StateChanged(MatchState, MatchState),
}

#[derive(Debug, Default)]
pub struct EventCollection {
    events: Vec<MatchEvent>,
}

impl EventCollection {
    pub fn new() -> Self {
        EventCollection {
            events: Vec::with_capacity(8),
        }
    }

    pub fn add(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_vec(self) -> Vec<MatchEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keeps_order() {
        let mut events = EventCollection::new();
        events.add(MatchEvent::WallBounce);
        events.add(MatchEvent::Goal(PlayerSide::Left));
        events.add(MatchEvent::PlayerHit(PlayerSide::Right, 101));

        assert_eq!(events.len(), 3);

        assert_eq!(
            events.to_vec(),
            vec![
                MatchEvent::WallBounce,
                MatchEvent::Goal(PlayerSide::Left),
                MatchEvent::PlayerHit(PlayerSide::Right, 101),
            ]
        );
    }
}
