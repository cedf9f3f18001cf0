//! Flap Dodge - a side-scrolling dodge-and-reach-the-door arcade game
//!
//! Core modules:
//! - `sim`: Deterministic tick simulation (phases, physics, obstacles, collisions)
//! - `settings`: World bounds and gameplay tuning
//! - `platform`: Host-side helpers (edge-triggered input, fixed timestep)
//!
//! Rendering, audio, fonts and windowing belong to the host. The host calls
//! [`sim::tick()`] once per fixed step and draws from the returned
//! [`sim::SimulationSnapshot`].

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, WorldBounds};

/// World-space position or velocity in pixels
pub type Vector2 = glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Viewport dimensions
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 960;
    /// Full scrollable level width (four screens)
    pub const WORLD_WIDTH: i32 = SCREEN_WIDTH * 4;

    /// Player physics, in pixels per tick
    pub const GRAVITY: f64 = 0.5;
    pub const JUMP_POWER: f64 = 5.0;
    pub const MAX_FALL_SPEED: f64 = 5.0;
    /// Distance between the bottom of the screen and the lowest player top edge
    pub const FLOOR_MARGIN: f64 = 40.0;

    /// Sprite footprints
    pub const PLAYER_WIDTH: f64 = 50.0;
    pub const PLAYER_HEIGHT: f64 = 68.0;
    pub const OBSTACLE_WIDTH: f64 = 49.0;
    pub const OBSTACLE_HEIGHT: f64 = 29.0;
    pub const GOAL_WIDTH: f64 = 120.0;
    pub const GOAL_HEIGHT: f64 = 160.0;

    /// Respawn point
    pub const PLAYER_ORIGIN_X: f64 = 100.0;
    pub const PLAYER_ORIGIN_Y: f64 = 350.0;

    /// Per-tick obstacle spawn probability
    pub const SPAWN_CHANCE: f64 = 0.07;
    /// Upper bound of the uniform speed jitter added to each spawned obstacle
    pub const SPEED_JITTER: f64 = 3.0;
    /// Obstacles are recycled once they are this far past the left world edge
    pub const RECYCLE_MARGIN: f64 = 20.0;

    /// Speeds before the difficulty bonus is applied
    pub const OBSTACLE_BASE_SPEED: f64 = 5.0;
    pub const PLAYER_BASE_SPEED: f64 = 2.5;
}
