use crate::r#match::events::{EventCollection, MatchEvent};
use crate::r#match::{MatchContext, MatchState, PlayerSide};
use log::{debug, info};

pub const COUNTDOWN_SECONDS: f32 = 3.0;
pub const GOAL_PAUSE_SECONDS: f32 = 3.0;

/// What the caller should do with the rest of the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTick {
    /// Timers only; no physics, AI or collisions this step.
    Hold,
    /// Run the full simulation pipeline.
    Simulate,
}

pub struct StateManager;

impl StateManager {
    /// Advances the lifecycle timers by `dt`. Transition steps never simulate.
    pub fn tick(context: &mut MatchContext, dt: f32, events: &mut EventCollection) -> StateTick {
        match context.state {
            MatchState::Countdown | MatchState::GoalPause => {
                context.countdown_timer -= dt;

                if context.countdown_timer <= 0.0 {
                    Self::transition(context, MatchState::Playing, events);
                }

                StateTick::Hold
            }
            MatchState::Playing => {
                context.time_left -= dt;

                if context.time_left <= 0.0 {
                    context.time_left = 0.0;
                    Self::transition(context, MatchState::Finished, events);

                    info!(
                        "match finished {}:{}",
                        context.score.left, context.score.right
                    );

                    return StateTick::Hold;
                }

                StateTick::Simulate
            }
            MatchState::Finished => StateTick::Hold,
        }
    }

    /// Credits `side` and enters the goal pause. Checks in the pause never
    /// reach here, so one overlap scores once.
    pub fn goal_scored(context: &mut MatchContext, side: PlayerSide, events: &mut EventCollection) {
        if context.state != MatchState::Playing {
            return;
        }

        context.score.increment(side);
        context.countdown_timer = GOAL_PAUSE_SECONDS;

        info!(
            "goal for {:?}, score {}:{}",
            side, context.score.left, context.score.right
        );

        events.add(MatchEvent::Goal(side));
        Self::transition(context, MatchState::GoalPause, events);
    }

    /// Full reset back to the countdown, only from `Finished`. Returns whether
    /// the reset happened; otherwise the caller only re-forms positions.
    pub fn restart(context: &mut MatchContext, events: &mut EventCollection) -> bool {
        if context.state != MatchState::Finished {
            debug!("mid-match reset, score kept");
            return false;
        }

        context.reset();
        Self::transition(context, MatchState::Countdown, events);

        info!("match restarted");

        true
    }

    fn transition(context: &mut MatchContext, next: MatchState, events: &mut EventCollection) {
        let previous = context.state;

        if previous == next {
            return;
        }

        debug!("match state: {} -> {}", previous, next);

        context.state = next;
        events.add(MatchEvent::StateChanged(previous, next));
    }
}
