//! Obstacle lifecycle: spawn, advance, recycle
//!
//! Obstacles carry no external references, so the pool is a plain `Vec`
//! compacted in place each tick. Spawn order is preserved for stable
//! iteration and deterministic replays.

use rand::Rng;

use super::collision::Rect;
use super::state::DifficultyProfile;
use crate::Vector2;
use crate::settings::Settings;

/// A leftward-moving hazard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// World-space top-left corner
    pub position: Vector2,
    /// Leftward speed in pixels per tick
    pub velocity: f64,
    /// Marked for removal; never cleared once set
    pub expired: bool,
}

impl Obstacle {
    pub fn new(position: Vector2, velocity: f64) -> Self {
        Self {
            position,
            velocity,
            expired: false,
        }
    }

    pub fn rect(&self, size: Vector2) -> Rect {
        Rect::new(self.position, size)
    }
}

/// Owns the live obstacles
#[derive(Debug, Clone, Default)]
pub struct ObstaclePool {
    live: Vec<Obstacle>,
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the per-tick spawn chance; on success add an obstacle at the
    /// right edge of the world and return a copy of it
    pub fn try_spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        difficulty: &DifficultyProfile,
        settings: &Settings,
    ) -> Option<Obstacle> {
        if rng.random::<f64>() >= settings.spawn_chance {
            return None;
        }

        let y = rng.random::<f64>() * settings.world.screen_height as f64;
        let speed = difficulty.obstacle_base_speed + rng.random::<f64>() * settings.speed_jitter;
        let obstacle = Obstacle::new(
            Vector2::new(settings.world.world_width as f64, y),
            speed,
        );
        log::debug!("Spawned obstacle at y {:.1}, speed {:.2}", y, speed);
        self.live.push(obstacle);
        Some(obstacle)
    }

    /// Add an already-built obstacle
    pub fn push(&mut self, obstacle: Obstacle) {
        self.live.push(obstacle);
    }

    /// Move every live obstacle left by its own speed
    pub fn advance(&mut self) {
        for obstacle in &mut self.live {
            obstacle.position.x -= obstacle.velocity;
        }
    }

    /// Expire obstacles past the left edge (beyond `margin`) and drop them
    ///
    /// Single O(n) pass that keeps survivors in order. Returns how many were
    /// removed.
    pub fn recycle(&mut self, margin: f64) -> usize {
        for obstacle in &mut self.live {
            if obstacle.position.x < -margin {
                obstacle.expired = true;
            }
        }
        let before = self.live.len();
        self.live.retain(|o| !o.expired);
        let removed = before - self.live.len();
        if removed > 0 {
            log::debug!("Recycled {} obstacles, {} live", removed, self.live.len());
        }
        removed
    }

    /// Drop every obstacle
    pub fn clear(&mut self) {
        self.live.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.live
    }
}
