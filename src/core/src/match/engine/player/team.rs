use crate::config::MatchConfig;
use crate::r#match::events::{EventCollection, MatchEvent};
use crate::r#match::physics::resolve_ball_player;
use crate::r#match::{AiController, Ball, MatchPlayer, PlayArea, PlayerSide, TeamInput};
use log::debug;
use nalgebra::Vector2;

/// Kickoff line as a fraction of the play-area width from the own edge.
const FORMATION_DEPTH: f32 = 0.15;

/// Vertical spacing between teammates, in player radii.
const FORMATION_SPACING: f32 = 3.0;

pub struct MatchTeam {
    pub side: PlayerSide,
    pub players: Vec<MatchPlayer>,
    pub selected_index: usize,
    restrict_half: bool,
}

impl MatchTeam {
    pub fn new(side: PlayerSide, config: &MatchConfig, area: &PlayArea) -> Self {
        let count = config.players_per_team();

        let players = (0..count)
            .map(|index| {
                let spot = formation_spot(side, index, count, config.player.radius, area);
                MatchPlayer::new(side, index, spot, config)
            })
            .collect();

        let mut team = MatchTeam {
            side,
            players,
            selected_index: 0,
            restrict_half: config.teams.restrict_half,
        };

        team.mark_selected();
        team
    }

    /// Puts every player back on its kickoff spot for `area` and selects
    /// player 0.
    pub fn reset_formation(&mut self, area: &PlayArea) {
        let count = self.players.len();
        let side = self.side;

        for player in self.players.iter_mut() {
            let spot = formation_spot(side, player.index, count, player.radius, area);

            player.home_x = spot.x;
            player.home_y = spot.y;
            player.reset_to_home();
        }

        self.selected_index = 0;
        self.mark_selected();
    }

    /// Selects player `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.players.len() {
            return false;
        }

        self.selected_index = index;
        self.mark_selected();

        debug!("{:?} team selected player {}", self.side, index);

        true
    }

    pub fn cycle(&mut self) {
        if self.players.is_empty() {
            return;
        }

        self.select((self.selected_index + 1) % self.players.len());
    }

    /// Applies selection events, then moves only the selected player.
    pub fn handle_input(&mut self, input: &TeamInput, dt: f32, area: &PlayArea) {
        if let Some(index) = input.select_index {
            self.select(index);
        }

        if input.cycle_selection {
            self.cycle();
        }

        let restrict_half = self.restrict_half;

        if let Some(player) = self.players.get_mut(self.selected_index) {
            player.move_with(input.direction, dt, area);

            if restrict_half {
                Self::clamp_half(player, area);
            }
        }
    }

    /// Keeps `player` on its own side of the centre line.
    pub fn clamp_half(player: &mut MatchPlayer, area: &PlayArea) {
        let cx = area.center().x;

        match player.side {
            PlayerSide::Left => player.position.x = player.position.x.min(cx - player.radius),
            PlayerSide::Right => player.position.x = player.position.x.max(cx + player.radius),
        }
    }

    /// Every player tries to kick; true if any connected.
    pub fn try_kick(&self, ball: &mut Ball) -> bool {
        self.players
            .iter()
            .fold(false, |kicked, player| player.kick(ball) || kicked)
    }

    pub fn move_by_ai(&mut self, ai: &AiController, dt: f32, area: &PlayArea) {
        for player in self.players.iter_mut() {
            let direction = ai.advise_direction(player);
            player.move_with(direction, dt, area);
        }
    }

    pub fn update_possession(&mut self, ball: &Ball) {
        for player in self.players.iter_mut() {
            player.update_possession(ball);
        }
    }

    /// Resolves ball overlaps against every player. Returns the hit count.
    pub fn resolve_ball_collisions(
        &self,
        ball: &mut Ball,
        momentum_transfer: f32,
        events: &mut EventCollection,
    ) -> u32 {
        let mut hits = 0;

        for player in &self.players {
            if resolve_ball_player(ball, player, momentum_transfer) {
                hits += 1;
                events.add(MatchEvent::PlayerHit(self.side, player.id));
            }
        }

        hits
    }

    fn mark_selected(&mut self) {
        let selected = self.selected_index;

        for player in self.players.iter_mut() {
            player.is_active = player.index == selected;
        }
    }
}

fn formation_spot(
    side: PlayerSide,
    index: usize,
    count: usize,
    radius: f32,
    area: &PlayArea,
) -> Vector2<f32> {
    let x = match side {
        PlayerSide::Left => area.left + area.width() * FORMATION_DEPTH,
        PlayerSide::Right => area.right - area.width() * FORMATION_DEPTH,
    };

    let offset = index as f32 - (count as f32 - 1.0) / 2.0;
    let y = area.center().y + offset * radius * FORMATION_SPACING;

    Vector2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BallConfig;

    const DT: f32 = 1.0 / 60.0;

    fn config_with(per_team: i32) -> MatchConfig {
        let mut config = MatchConfig::default();
        config.teams.per_team = per_team;
        config
    }

    fn team(side: PlayerSide, per_team: i32) -> (MatchTeam, PlayArea) {
        let config = config_with(per_team);
        let area = config.play_area();
        (MatchTeam::new(side, &config, &area), area)
    }

    fn active_count(team: &MatchTeam) -> usize {
        team.players.iter().filter(|p| p.is_active).count()
    }

    #[test]
    fn test_kickoff_formation() {
        let (left, _) = team(PlayerSide::Left, 3);
        let (right, _) = team(PlayerSide::Right, 3);

        assert_eq!(left.players.len(), 3);
        assert!((left.players[0].position.x - 172.0).abs() < 1e-3);
        assert!((right.players[0].position.x - 788.0).abs() < 1e-3);

        assert!((left.players[0].position.y - 222.0).abs() < 1e-3);
        assert!((left.players[1].position.y - 270.0).abs() < 1e-3);
        assert!((left.players[2].position.y - 318.0).abs() < 1e-3);

        assert_eq!(left.players[2].home_y, left.players[2].position.y);
    }

    #[test]
    fn test_exactly_one_player_active() {
        let (mut team, _) = team(PlayerSide::Left, 4);
        assert_eq!(active_count(&team), 1);
        assert!(team.players[0].is_active);

        team.select(2);
        assert_eq!(active_count(&team), 1);
        assert!(team.players[2].is_active);

        team.cycle();
        team.cycle();
        assert_eq!(team.selected_index, 0);
        assert_eq!(active_count(&team), 1);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let (mut team, _) = team(PlayerSide::Right, 2);

        assert!(!team.select(4));
        assert_eq!(team.selected_index, 0);
        assert!(team.players[0].is_active);
    }

    #[test]
    fn test_input_moves_only_selected_player() {
        let (mut team, area) = team(PlayerSide::Left, 2);
        let input = TeamInput::from_keys(false, false, false, true).with_selection(1);

        team.handle_input(&input, DT, &area);

        assert_eq!(team.players[0].velocity, Vector2::zeros());
        assert!(team.players[1].velocity.x > 0.0);
    }

    #[test]
    fn test_cycle_input_moves_next_player() {
        let (mut team, area) = team(PlayerSide::Right, 3);
        let input = TeamInput::from_keys(true, false, false, false).with_cycle();

        team.handle_input(&input, DT, &area);

        assert_eq!(team.selected_index, 1);
        assert_eq!(active_count(&team), 1);
        assert!(team.players[1].velocity.y < 0.0);
        assert_eq!(team.players[0].velocity, Vector2::zeros());

        team.handle_input(&TeamInput::default().with_cycle(), DT, &area);
        team.handle_input(&TeamInput::default().with_cycle(), DT, &area);
        assert_eq!(team.selected_index, 0);
    }

    #[test]
    fn test_clamp_half() {
        let (mut team, area) = team(PlayerSide::Left, 1);
        let player = &mut team.players[0];
        player.position.x = 700.0;

        MatchTeam::clamp_half(player, &area);

        assert_eq!(player.position.x, 480.0 - player.radius);
    }

    #[test]
    fn test_restricted_half_applies_to_input() {
        let mut config = config_with(1);
        config.teams.restrict_half = true;
        let area = config.play_area();
        let mut team = MatchTeam::new(PlayerSide::Right, &config, &area);
        team.players[0].position.x = 490.0;

        team.handle_input(&TeamInput::from_keys(false, false, true, false), DT, &area);

        assert!(team.players[0].position.x >= 480.0 + team.players[0].radius);
    }

    #[test]
    fn test_try_kick_reports_any_connection() {
        let (team, area) = team(PlayerSide::Left, 2);
        let mut far = Ball::new(&BallConfig::default(), area.center());
        assert!(!team.try_kick(&mut far));

        let mut near = Ball::new(&BallConfig::default(), team.players[1].position);
        assert!(team.try_kick(&mut near));
    }

    #[test]
    fn test_reset_formation_restores_selection() {
        let (mut team, area) = team(PlayerSide::Left, 3);
        team.select(2);
        team.players[1].position = Vector2::new(600.0, 100.0);
        team.players[1].has_ball = true;

        team.reset_formation(&area);

        assert_eq!(team.selected_index, 0);
        assert!(team.players[0].is_active);
        assert_eq!(team.players[1].position.y, 270.0);
        assert!(!team.players[1].has_ball);
    }

    #[test]
    fn test_collisions_count_hits() {
        let (team, _) = team(PlayerSide::Right, 1);
        let mut ball = Ball::new(&BallConfig::default(), team.players[0].position);
        let mut events = EventCollection::new();

        let hits = team.resolve_ball_collisions(&mut ball, 0.25, &mut events);

        assert_eq!(hits, 1);
        assert_eq!(events.len(), 1);
    }
}
