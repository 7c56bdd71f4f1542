use crate::config::{GameMode, MatchConfig};
use crate::r#match::events::{EventCollection, MatchEvent};
use crate::r#match::physics::{ForceField, resolve_walls};
use crate::r#match::{
    AiController, BallSnapshot, FrameInput, KinematicBody, MatchContext, MatchField,
    MatchResult, MatchSnapshot, MatchState, PlayArea, PlayerSide, PlayerSnapshot,
    ResultMatchPositionData, StateManager, StateTick, TeamInput,
};
use log::{debug, info};

/// Above this fraction of its max speed the ball is simulated in two half
/// steps per frame.
const SUBSTEP_SPEED_RATIO: f32 = 0.75;

pub struct FootballEngine {
    config: MatchConfig,

    pub field: MatchField,
    pub context: MatchContext,

    force_field: ForceField,

    left_ai: Option<AiController>,
    right_ai: Option<AiController>,

    position_data: Option<ResultMatchPositionData>,
}

impl FootballEngine {
    pub fn new(config: MatchConfig) -> Self {
        let config = config.normalized();

        let field = MatchField::new(&config);
        let context = MatchContext::new(&config);
        let force_field = ForceField::new(&config.force_field, field.area.center());

        let (left_ai, right_ai) = Self::ai_controllers(&config);

        info!(
            "new match: {:?}, {} per team, {} min, AI {}",
            config.mode,
            config.players_per_team(),
            config.match_settings.minutes.max(1),
            config.ai.difficulty
        );

        let mut engine = FootballEngine {
            config,
            field,
            context,
            force_field,
            left_ai,
            right_ai,
            position_data: None,
        };

        engine.field.reset_positions(true);
        engine
    }

    /// Same as [`FootballEngine::new`], recording replay positions every frame.
    pub fn with_tracking(config: MatchConfig) -> Self {
        let mut engine = Self::new(config);
        engine.position_data = Some(ResultMatchPositionData::new());
        engine
    }

    fn ai_controllers(config: &MatchConfig) -> (Option<AiController>, Option<AiController>) {
        if !config.ai.enabled {
            return (None, None);
        }

        let difficulty = config.ai.difficulty;

        match config.mode {
            GameMode::Multiplayer => (None, None),
            GameMode::HumanVsAi => (None, Some(AiController::new(PlayerSide::Right, difficulty))),
            GameMode::AiVsAi => (
                Some(AiController::new(PlayerSide::Left, difficulty)),
                Some(AiController::new(PlayerSide::Right, difficulty)),
            ),
        }
    }

    /// Runs a whole headless match with idle input at the configured frame
    /// rate.
    pub fn play(config: MatchConfig) -> MatchResult {
        let dt = config.frame_dt();
        let idle = FrameInput::idle();

        let mut engine = FootballEngine::new(config);

        while !engine.is_finished() {
            engine.frame(&idle, dt);
        }

        engine.into_result()
    }

    /// One rendered frame: input, controls, then one or two simulation
    /// steps. Returns what happened for sound and HUD adapters.
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> Vec<MatchEvent> {
        let mut events = EventCollection::new();

        if let Some(area) = input.resize {
            self.resize(area);
        }

        if input.toggle_pause {
            self.context.paused = !self.context.paused;
            info!("{}", if self.context.paused { "paused" } else { "resumed" });
            return events.to_vec();
        }

        if self.context.paused {
            return events.to_vec();
        }

        if input.restart {
            self.restart(&mut events);
        }

        if !self.is_finished() {
            self.apply_controls(input, dt);
        }

        let steps = if self.field.ball.speed() > SUBSTEP_SPEED_RATIO * self.field.ball.max_speed {
            2
        } else {
            1
        };

        let step_dt = dt / steps as f32;

        for _ in 0..steps {
            self.update(step_dt, &mut events);
        }

        self.write_match_positions();

        events.to_vec()
    }

    fn apply_controls(&mut self, input: &FrameInput, dt: f32) {
        self.control_side(PlayerSide::Left, &input.left, dt);
        self.control_side(PlayerSide::Right, &input.right, dt);

        if input.left.kick && self.left_ai.is_none() {
            self.field.left_team.try_kick(&mut self.field.ball);
        }

        if input.right.kick && self.right_ai.is_none() {
            self.field.right_team.try_kick(&mut self.field.ball);
        }

        // auto-kick on overlap
        self.field.left_team.try_kick(&mut self.field.ball);
        self.field.right_team.try_kick(&mut self.field.ball);
    }

    fn control_side(&mut self, side: PlayerSide, input: &TeamInput, dt: f32) {
        let area = self.field.area;

        let ai = match side {
            PlayerSide::Left => self.left_ai.as_ref(),
            PlayerSide::Right => self.right_ai.as_ref(),
        };

        let team = self.field.team_mut(side);

        match ai {
            Some(ai) => team.move_by_ai(ai, dt, &area),
            None => team.handle_input(input, dt, &area),
        }
    }

    /// One simulation step: lifecycle timers, then (while playing) ball,
    /// force field, walls, AI, possession, ball-player collisions and goals.
    pub fn update(&mut self, dt: f32, events: &mut EventCollection) {
        self.context.add_time(dt);

        if StateManager::tick(&mut self.context, dt, events) == StateTick::Hold {
            return;
        }

        self.field.ball.update(dt);

        self.force_field.apply(&mut self.field.ball, dt);

        if resolve_walls(&mut self.field.ball, &self.field.area) {
            events.add(MatchEvent::WallBounce);
        }

        if let Some(ai) = self.left_ai.as_mut() {
            ai.update(dt, &self.field.area, &self.field.ball, &self.field.left_team.players);
        }

        if let Some(ai) = self.right_ai.as_mut() {
            ai.update(dt, &self.field.area, &self.field.ball, &self.field.right_team.players);
        }

        self.field.left_team.update_possession(&self.field.ball);
        self.field.right_team.update_possession(&self.field.ball);

        let momentum_transfer = self.config.tuning.momentum_transfer;

        let left_hits = self.field.left_team.resolve_ball_collisions(
            &mut self.field.ball,
            momentum_transfer,
            events,
        );
        let right_hits = self.field.right_team.resolve_ball_collisions(
            &mut self.field.ball,
            momentum_transfer,
            events,
        );

        self.context.hits.add(PlayerSide::Left, left_hits);
        self.context.hits.add(PlayerSide::Right, right_hits);

        if let Some(side) = self.field.check_goal() {
            self.goal_scored(side, events);
        }
    }

    fn goal_scored(&mut self, side: PlayerSide, events: &mut EventCollection) {
        StateManager::goal_scored(&mut self.context, side, events);

        let center = self.field.area.center();
        self.field.ball.spawn(center, false);

        self.reset_positions(false);
    }

    /// From `Finished`: new match. Otherwise: kickoff positions, score kept.
    pub fn restart(&mut self, events: &mut EventCollection) {
        if StateManager::restart(&mut self.context, events) {
            // replay timestamps restart with the clock
            if let Some(position_data) = self.position_data.as_mut() {
                *position_data = ResultMatchPositionData::new();
            }
        }

        self.reset_positions(true);
    }

    fn reset_positions(&mut self, kickoff: bool) {
        self.field.reset_positions(kickoff);

        for ai in [self.left_ai.as_mut(), self.right_ai.as_mut()].into_iter().flatten() {
            ai.clear_targets();
        }
    }

    pub fn resize(&mut self, area: PlayArea) {
        self.field.resize(area);
        self.force_field.center = area.center();
    }

    pub fn ai(&self, side: PlayerSide) -> Option<&AiController> {
        match side {
            PlayerSide::Left => self.left_ai.as_ref(),
            PlayerSide::Right => self.right_ai.as_ref(),
        }
    }

    pub fn write_match_positions(&mut self) {
        let Some(match_data) = self.position_data.as_mut() else {
            return;
        };

        let timestamp = self.context.elapsed_ms();

        self.field.players().for_each(|player| {
            match_data.add_player_positions(player.id, timestamp, player.position);
        });

        match_data.add_ball_positions(timestamp, self.field.ball.position);
    }

    #[inline]
    pub fn state(&self) -> MatchState {
        self.context.state
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.context.is_finished()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let players = self
            .field
            .players()
            .map(|player| {
                let target = self.ai(player.side).and_then(|ai| ai.target(player.index));
                PlayerSnapshot::from_player(player, target)
            })
            .collect();

        MatchSnapshot {
            state: self.context.state,
            time_left: self.context.time_left,
            countdown: self.context.countdown_timer,
            paused: self.context.paused,
            score: self.context.score,
            hits: self.context.hits,
            ball: BallSnapshot {
                position: self.field.ball.position,
                velocity: self.field.ball.velocity,
            },
            players,
        }
    }

    pub fn result(&self) -> MatchResult {
        MatchResult::new(
            self.context.score,
            self.context.hits,
            self.context.played_ms(),
            self.position_data.clone().unwrap_or_default(),
        )
    }

    pub fn into_result(self) -> MatchResult {
        debug!("collecting result at {} ms", self.context.elapsed_ms());

        MatchResult::new(
            self.context.score,
            self.context.hits,
            self.context.played_ms(),
            self.position_data.unwrap_or_default(),
        )
    }
}
