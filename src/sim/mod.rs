//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacles kept in spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod menu;
pub mod obstacles;
pub mod physics;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use menu::{Difficulty, MENU_ROWS, MenuRow, MenuSelection};
pub use obstacles::{Obstacle, ObstaclePool};
pub use physics::{Horizontal, integrate};
pub use scroll::scroll_offset_for;
pub use state::{
    DifficultyProfile, GameEvent, GamePhase, GameState, Goal, Player, SimulationSnapshot,
};
pub use tick::{TickInput, tick};
