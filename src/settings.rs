//! Gameplay settings and world bounds
//!
//! Read once at startup and held read-only by the simulation. Every field
//! falls back to the values in [`crate::consts`] when missing from a JSON
//! settings file.

use std::path::Path;

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use crate::Vector2;
use crate::consts::*;

/// Viewport and level extents, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Full scrollable width of the level
    pub world_width: i32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            world_width: WORLD_WIDTH,
        }
    }
}

impl WorldBounds {
    /// Largest scroll offset the camera may reach
    #[inline]
    pub fn max_scroll(&self) -> i32 {
        self.world_width - self.screen_width
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world: WorldBounds,

    // === Player physics (per tick) ===
    pub gravity: f64,
    pub jump_power: f64,
    pub max_fall_speed: f64,
    /// Vertical rebound limit is `screen_height - floor_margin`
    pub floor_margin: f64,

    // === Entity footprints ===
    pub player_size: Vector2,
    pub obstacle_size: Vector2,
    pub goal_size: Vector2,
    pub player_origin: Vector2,
    pub goal_position: Vector2,

    // === Obstacles ===
    pub spawn_chance: f64,
    pub speed_jitter: f64,
    pub recycle_margin: f64,

    // === Difficulty baselines ===
    pub obstacle_base_speed: f64,
    pub player_base_speed: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world: WorldBounds::default(),

            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            max_fall_speed: MAX_FALL_SPEED,
            floor_margin: FLOOR_MARGIN,

            player_size: Vector2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            obstacle_size: Vector2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            goal_size: Vector2::new(GOAL_WIDTH, GOAL_HEIGHT),
            player_origin: Vector2::new(PLAYER_ORIGIN_X, PLAYER_ORIGIN_Y),
            // Door stands on the bottom edge near the far end of the level
            goal_position: Vector2::new(
                (WORLD_WIDTH - 300) as f64,
                SCREEN_HEIGHT as f64 - GOAL_HEIGHT,
            ),

            spawn_chance: SPAWN_CHANCE,
            speed_jitter: SPEED_JITTER,
            recycle_margin: RECYCLE_MARGIN,

            obstacle_base_speed: OBSTACLE_BASE_SPEED,
            player_base_speed: PLAYER_BASE_SPEED,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings: Self = serde_json::from_str(json).context("malformed settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        let w = &self.world;
        ensure!(
            w.screen_width > 0 && w.screen_height > 0,
            "screen must have a positive size, got {}x{}",
            w.screen_width,
            w.screen_height
        );
        ensure!(
            w.world_width >= w.screen_width,
            "world width {} is narrower than the screen ({})",
            w.world_width,
            w.screen_width
        );
        for (name, size) in [
            ("player", self.player_size),
            ("obstacle", self.obstacle_size),
            ("goal", self.goal_size),
        ] {
            ensure!(
                size.x > 0.0 && size.y > 0.0,
                "{name} size must be positive, got {size}"
            );
        }
        ensure!(
            (0.0..=1.0).contains(&self.spawn_chance),
            "spawn chance {} is not a probability",
            self.spawn_chance
        );
        ensure!(self.speed_jitter >= 0.0, "speed jitter must not be negative");
        ensure!(
            self.obstacle_base_speed > 0.0 && self.player_base_speed > 0.0,
            "base speeds must be positive"
        );
        ensure!(
            self.jump_power >= 0.0,
            "jump power {} must not be negative",
            self.jump_power
        );
        ensure!(
            self.recycle_margin >= 0.0,
            "recycle margin {} must not be negative",
            self.recycle_margin
        );
        ensure!(
            self.gravity >= 0.0 && self.max_fall_speed > 0.0,
            "gravity must not be negative and max fall speed must be positive"
        );
        ensure!(
            self.floor_margin >= 0.0 && self.floor_margin < w.screen_height as f64,
            "floor margin {} must lie inside the screen",
            self.floor_margin
        );
        Ok(())
    }

    /// Lowest allowed top edge for the player, in screen space
    #[inline]
    pub fn floor_limit(&self) -> f64 {
        self.world.screen_height as f64 - self.floor_margin
    }
}
