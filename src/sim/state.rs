//! Game state and core simulation types
//!
//! `GameState` is the single owned simulation context; nothing in the core
//! lives in globals, so a fresh state is a fresh game.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::menu::{Difficulty, MenuSelection};
use super::obstacles::ObstaclePool;
use super::scroll::scroll_offset_for;
use crate::Vector2;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty selection
    #[default]
    Menu,
    /// Active episode
    Playing,
    /// Reached the door
    Win,
    /// Hit an obstacle
    Lose,
}

/// Designed outcomes surfaced to the host for audio/effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    DifficultySelected(Difficulty),
    Jumped,
    ObstacleSpawned,
    Won,
    Lost,
    ReturnedToMenu,
    ExitRequested,
}

/// Speeds held for the duration of one Playing episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub level: Difficulty,
    pub obstacle_base_speed: f64,
    pub player_horizontal_speed: f64,
}

/// The player body
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Respawn point
    pub origin: Vector2,
    /// World-space top-left corner
    pub position: Vector2,
    pub velocity: Vector2,
    /// `position` minus the scroll offset on x
    pub screen_position: Vector2,
    pub size: Vector2,
}

impl Player {
    pub fn new(origin: Vector2, size: Vector2) -> Self {
        Self {
            origin,
            position: origin,
            velocity: Vector2::ZERO,
            screen_position: origin,
            size,
        }
    }

    /// Back to the respawn point, at rest
    pub fn reset(&mut self, scroll_offset: i32) {
        self.position = self.origin;
        self.velocity = Vector2::ZERO;
        self.sync_screen(scroll_offset);
    }

    /// Re-derive the screen position from the world position
    #[inline]
    pub fn sync_screen(&mut self, scroll_offset: i32) {
        self.screen_position = self.position - Vector2::new(scroll_offset as f64, 0.0);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// The exit door
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub position: Vector2,
    pub size: Vector2,
}

impl Goal {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Read-only after construction
    pub settings: Settings,
    /// Spawn decisions, positions and speed jitter all draw from here
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: ObstaclePool,
    pub goal: Goal,
    /// Camera offset along x, `0..=world_width - screen_width`
    pub scroll_offset: i32,
    pub menu: MenuSelection,
    /// Set when leaving the menu, cleared on returning to it
    pub difficulty: Option<DifficultyProfile>,
    /// Set when the exit row is confirmed
    pub exit_requested: bool,
    /// Events raised during the latest tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with default settings and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), Pcg32::seed_from_u64(seed))
    }

    /// Create a game state with explicit settings and random source
    pub fn with_settings(settings: Settings, rng: Pcg32) -> Self {
        debug_assert!(
            settings.validate().is_ok(),
            "invalid settings: {:?}",
            settings.validate().err()
        );
        let player = Player::new(settings.player_origin, settings.player_size);
        let goal = Goal {
            position: settings.goal_position,
            size: settings.goal_size,
        };
        Self {
            rng,
            time_ticks: 0,
            phase: GamePhase::Menu,
            player,
            obstacles: ObstaclePool::new(),
            goal,
            scroll_offset: 0,
            menu: MenuSelection::default(),
            difficulty: None,
            exit_requested: false,
            events: Vec::new(),
            settings,
        }
    }

    /// Move the player and re-derive the camera and screen position
    pub fn place_player(&mut self, position: Vector2) {
        self.player.position = position;
        self.scroll_offset = scroll_offset_for(position.x, &self.settings.world);
        self.player.sync_screen(self.scroll_offset);
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> SimulationSnapshot {
        let scroll = Vector2::new(self.scroll_offset as f64, 0.0);
        SimulationSnapshot {
            tick: self.time_ticks,
            phase: self.phase,
            player_screen_position: self.player.screen_position,
            scroll_offset: self.scroll_offset,
            obstacles: self.obstacles.iter().map(|o| o.position - scroll).collect(),
            goal_screen_position: self.goal.position - scroll,
            menu_selection: self.menu.index(),
            difficulty: self.difficulty.map(|d| d.level),
            won: self.phase == GamePhase::Win,
            lost: self.phase == GamePhase::Lose,
            exit_requested: self.exit_requested,
            events: self.events.clone(),
        }
    }
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub player_screen_position: Vector2,
    pub scroll_offset: i32,
    /// Obstacle screen positions, in spawn order
    pub obstacles: Vec<Vector2>,
    pub goal_screen_position: Vector2,
    pub menu_selection: usize,
    pub difficulty: Option<Difficulty>,
    pub won: bool,
    pub lost: bool,
    pub exit_requested: bool,
    pub events: Vec<GameEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_in_menu() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.scroll_offset, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.difficulty.is_none());
        assert_eq!(state.player.position, state.player.origin);
        assert_eq!(state.player.screen_position, state.player.origin);
    }

    #[test]
    fn test_place_player_keeps_screen_invariant() {
        let mut state = GameState::new(1);
        state.place_player(Vector2::new(3000.0, 200.0));
        assert_eq!(state.scroll_offset, 3000 - 640);
        assert_eq!(
            state.player.screen_position,
            state.player.position - Vector2::new(state.scroll_offset as f64, 0.0)
        );
    }

    #[test]
    fn test_player_reset() {
        let mut player = Player::new(Vector2::new(100.0, 350.0), Vector2::new(50.0, 68.0));
        player.position = Vector2::new(900.0, 10.0);
        player.velocity = Vector2::new(2.5, -5.0);
        player.reset(0);
        assert_eq!(player.position, player.origin);
        assert_eq!(player.velocity, Vector2::ZERO);
        assert_eq!(player.screen_position, player.origin);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(7);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Menu\""));
    }
}
