use crate::config::MatchConfig;
use crate::r#match::{COUNTDOWN_SECONDS, MatchState, SideTally};

/// Timers, tallies and lifecycle state of one match.
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub state: MatchState,

    pub match_time: f32,
    pub time_left: f32,
    pub countdown_timer: f32,

    pub score: SideTally,
    pub hits: SideTally,

    pub paused: bool,

    /// Simulated seconds since kickoff, countdowns included.
    elapsed: f64,
}

impl MatchContext {
    pub fn new(config: &MatchConfig) -> Self {
        let match_time = config.match_seconds();

        MatchContext {
            state: MatchState::Countdown,
            match_time,
            time_left: match_time,
            countdown_timer: COUNTDOWN_SECONDS,
            score: SideTally::default(),
            hits: SideTally::default(),
            paused: false,
            elapsed: 0.0,
        }
    }

    pub fn add_time(&mut self, dt: f32) {
        self.elapsed += dt as f64;
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed * 1000.0) as u64
    }

    /// Played time, countdowns excluded.
    #[inline]
    pub fn played_ms(&self) -> u64 {
        ((self.match_time - self.time_left).max(0.0) * 1000.0) as u64
    }

    pub fn reset(&mut self) {
        self.score.reset();
        self.hits.reset();
        self.time_left = self.match_time;
        self.countdown_timer = COUNTDOWN_SECONDS;
        self.elapsed = 0.0;
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == MatchState::Finished
    }
}
