//! Camera offset derivation

use crate::settings::WorldBounds;

/// Camera offset that centres the player, pinned at the world edges
///
/// Always lands in `0..=world_width - screen_width`; out-of-range requests
/// are clamped, never rejected.
#[inline]
pub fn scroll_offset_for(player_x: f64, world: &WorldBounds) -> i32 {
    // Saturating float-to-int cast, NaN maps to 0
    let centred = (player_x as i32).saturating_sub(world.screen_width / 2);
    centred.clamp(0, world.max_scroll().max(0))
}
