//! Player integrator
//!
//! Gravity, edge-triggered jump impulses and input-driven horizontal speed,
//! with a velocity-inverting rebound at the viewport edges instead of a
//! position clamp.

use super::scroll::scroll_offset_for;
use super::state::Player;
use crate::Vector2;
use crate::settings::Settings;

/// Held horizontal control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    Left,
    #[default]
    Idle,
    Right,
}

impl Horizontal {
    /// Signed direction: -1, 0 or 1
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Horizontal::Left => -1.0,
            Horizontal::Idle => 0.0,
            Horizontal::Right => 1.0,
        }
    }

    /// Resolve two held keys; pressing both cancels out
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => Horizontal::Left,
            (false, true) => Horizontal::Right,
            _ => Horizontal::Idle,
        }
    }
}

/// Advance the player by one tick and return the new scroll offset
///
/// `scroll_offset` is the camera offset the candidate move is judged
/// against. An axis whose candidate screen coordinate leaves the viewport
/// keeps its position and has its velocity inverted and doubled.
pub fn integrate(
    player: &mut Player,
    horizontal: Horizontal,
    jump: bool,
    horizontal_speed: f64,
    scroll_offset: i32,
    settings: &Settings,
) -> i32 {
    player.velocity.y += settings.gravity;
    if player.velocity.y > settings.max_fall_speed {
        player.velocity.y = settings.max_fall_speed;
    }

    if jump {
        player.velocity.y = -settings.jump_power;
    }

    player.velocity.x = horizontal.sign() * horizontal_speed;

    let candidate = player.position + player.velocity;
    let candidate_screen = candidate - Vector2::new(scroll_offset as f64, 0.0);

    let screen_width = settings.world.screen_width as f64;
    if candidate_screen.x < 0.0 || candidate_screen.x > screen_width {
        log::trace!("x rebound at screen x {:.1}", candidate_screen.x);
        player.velocity.x *= -2.0;
    } else {
        player.position.x = candidate.x;
    }

    if candidate_screen.y < 0.0 || candidate_screen.y > settings.floor_limit() {
        log::trace!("y rebound at screen y {:.1}", candidate_screen.y);
        player.velocity.y *= -2.0;
    } else {
        player.position.y = candidate.y;
    }

    let scroll_offset = scroll_offset_for(player.position.x, &settings.world);
    player.sync_screen(scroll_offset);
    scroll_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f64, y: f64) -> Player {
        let settings = Settings::default();
        let mut player = Player::new(Vector2::new(x, y), settings.player_size);
        player.sync_screen(scroll_offset_for(x, &settings.world));
        player
    }

    #[test]
    fn test_gravity_single_tick() {
        let settings = Settings::default();
        let mut player = player_at(100.0, 350.0);

        let scroll = integrate(&mut player, Horizontal::Idle, false, 2.5, 0, &settings);

        assert_eq!(player.velocity.y, settings.gravity);
        assert_eq!(player.position, Vector2::new(100.0, 350.0 + settings.gravity));
        assert_eq!(scroll, 0);
        assert_eq!(player.screen_position, player.position);
    }

    #[test]
    fn test_fall_speed_clamped() {
        let settings = Settings::default();
        let mut player = player_at(100.0, 100.0);
        player.velocity.y = settings.max_fall_speed;

        integrate(&mut player, Horizontal::Idle, false, 2.5, 0, &settings);

        assert_eq!(player.velocity.y, settings.max_fall_speed);
        assert_eq!(player.position.y, 100.0 + settings.max_fall_speed);
    }

    #[test]
    fn test_jump_overrides_vertical_velocity() {
        let settings = Settings::default();
        let mut player = player_at(100.0, 350.0);
        player.velocity.y = 4.0;

        integrate(&mut player, Horizontal::Idle, true, 2.5, 0, &settings);

        assert_eq!(player.velocity.y, -settings.jump_power);
        assert_eq!(player.position.y, 350.0 - settings.jump_power);

        // A second impulse does not stack
        integrate(&mut player, Horizontal::Idle, true, 2.5, 0, &settings);
        assert_eq!(player.velocity.y, -settings.jump_power);
    }

    #[test]
    fn test_horizontal_is_input_driven() {
        let settings = Settings::default();
        let mut player = player_at(100.0, 350.0);

        integrate(&mut player, Horizontal::Right, false, 2.5, 0, &settings);
        assert_eq!(player.velocity.x, 2.5);
        assert_eq!(player.position.x, 102.5);

        integrate(&mut player, Horizontal::Idle, false, 2.5, 0, &settings);
        assert_eq!(player.velocity.x, 0.0);
        assert_eq!(player.position.x, 102.5);
    }

    #[test]
    fn test_left_edge_rebound() {
        let settings = Settings::default();
        let mut player = player_at(1.0, 350.0);

        integrate(&mut player, Horizontal::Left, false, 2.5, 0, &settings);

        assert_eq!(player.position.x, 1.0);
        assert_eq!(player.velocity.x, 5.0);
    }

    #[test]
    fn test_right_edge_rebound() {
        let settings = Settings::default();
        let mut player = player_at(5119.0, 350.0);
        let scroll = settings.world.max_scroll();
        assert_eq!(player.screen_position.x, 1279.0);

        let scroll = integrate(&mut player, Horizontal::Right, false, 2.5, scroll, &settings);

        // Candidate screen x 1281.5 is past the viewport, judged at scroll 3840
        assert_eq!(scroll, 3840);
        assert_eq!(player.position.x, 5119.0);
        assert_eq!(player.velocity.x, -5.0);
        assert_eq!(player.position.y, 350.0 + settings.gravity);
        assert_eq!(
            player.screen_position,
            player.position - Vector2::new(scroll as f64, 0.0)
        );
    }

    #[test]
    fn test_x_judged_against_current_scroll() {
        let settings = Settings::default();
        // Screen x 1279 at scroll 1000; the same step would be legal at the
        // camera the new position implies, but not at the current one
        let mut player = player_at(2279.0, 350.0);

        let scroll = integrate(&mut player, Horizontal::Right, false, 2.5, 1000, &settings);

        assert_eq!(player.position.x, 2279.0);
        assert_eq!(player.velocity.x, -5.0);
        assert_eq!(scroll, 2279 - 640);
        assert_eq!(
            player.screen_position,
            player.position - Vector2::new(scroll as f64, 0.0)
        );
    }

    #[test]
    fn test_floor_rebound() {
        let settings = Settings::default();
        let floor = settings.floor_limit();
        let mut player = player_at(100.0, floor - 1.0);
        player.velocity.y = settings.max_fall_speed;

        integrate(&mut player, Horizontal::Idle, false, 2.5, 0, &settings);

        assert_eq!(player.position.y, floor - 1.0);
        assert_eq!(player.velocity.y, -2.0 * settings.max_fall_speed);
    }

    #[test]
    fn test_ceiling_rebound() {
        let settings = Settings::default();
        let mut player = player_at(100.0, 2.0);

        integrate(&mut player, Horizontal::Idle, true, 2.5, 0, &settings);

        assert_eq!(player.position.y, 2.0);
        assert_eq!(player.velocity.y, 2.0 * settings.jump_power);
    }

    #[test]
    fn test_camera_follows_and_screen_invariant_holds() {
        let settings = Settings::default();
        let mut player = player_at(2000.0, 350.0);
        let scroll = scroll_offset_for(2000.0, &settings.world);

        let scroll = integrate(&mut player, Horizontal::Right, false, 2.5, scroll, &settings);

        assert_eq!(scroll, 2002 - 640);
        assert_eq!(
            player.screen_position,
            player.position - Vector2::new(scroll as f64, 0.0)
        );
    }

    #[test]
    fn test_horizontal_from_keys() {
        assert_eq!(Horizontal::from_keys(true, false), Horizontal::Left);
        assert_eq!(Horizontal::from_keys(false, true), Horizontal::Right);
        assert_eq!(Horizontal::from_keys(true, true), Horizontal::Idle);
        assert_eq!(Horizontal::from_keys(false, false), Horizontal::Idle);
    }
}
