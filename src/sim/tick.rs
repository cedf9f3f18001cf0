//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by exactly one step.

use super::collision::overlaps;
use super::menu::{Difficulty, MenuRow};
use super::physics::{self, Horizontal};
use super::state::{GameEvent, GamePhase, GameState, SimulationSnapshot};

/// Input commands for a single tick
///
/// Everything except `horizontal` is edge-triggered: true only on the tick
/// the control went from released to pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held left/right state
    pub horizontal: Horizontal,
    pub jump: bool,
    /// Enter on the menu and end screens
    pub confirm: bool,
    pub up: bool,
    pub down: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> SimulationSnapshot {
    state.events.clear();
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => update_menu(state, input),
        GamePhase::Playing => update_playing(state, input),
        GamePhase::Win | GamePhase::Lose => update_end_screen(state, input),
    }

    state.snapshot()
}

fn update_menu(state: &mut GameState, input: &TickInput) {
    if input.down {
        state.menu.move_down();
    }
    if input.up {
        state.menu.move_up();
    }
    if !input.confirm {
        return;
    }

    match state.menu.current() {
        MenuRow::Play(difficulty) => start_episode(state, difficulty),
        MenuRow::Exit => {
            log::info!("Exit requested from menu");
            state.exit_requested = true;
            state.events.push(GameEvent::ExitRequested);
        }
        MenuRow::Spacer => {}
    }
}

/// Leave the menu with `difficulty` and reset the world
fn start_episode(state: &mut GameState, difficulty: Difficulty) {
    let profile = difficulty.profile(&state.settings);
    log::info!(
        "Starting {} episode (obstacles {:.1} px/tick, player {:.1} px/tick)",
        difficulty.as_str(),
        profile.obstacle_base_speed,
        profile.player_horizontal_speed
    );

    state.difficulty = Some(profile);
    state.scroll_offset = 0;
    state.player.reset(0);
    state.obstacles.clear();
    state.phase = GamePhase::Playing;
    state.events.push(GameEvent::DifficultySelected(difficulty));
}

fn update_playing(state: &mut GameState, input: &TickInput) {
    // Playing is only entered through start_episode
    let profile = state
        .difficulty
        .unwrap_or_else(|| Difficulty::Normal.profile(&state.settings));

    if input.jump {
        state.events.push(GameEvent::Jumped);
    }
    state.scroll_offset = physics::integrate(
        &mut state.player,
        input.horizontal,
        input.jump,
        profile.player_horizontal_speed,
        state.scroll_offset,
        &state.settings,
    );

    if state
        .obstacles
        .try_spawn(&mut state.rng, &profile, &state.settings)
        .is_some()
    {
        state.events.push(GameEvent::ObstacleSpawned);
    }
    state.obstacles.advance();

    // Obstacles before the goal; the first hit decides the tick
    let player = state.player.rect();
    let obstacle_size = state.settings.obstacle_size;
    if state
        .obstacles
        .iter()
        .any(|o| overlaps(&player, &o.rect(obstacle_size)))
    {
        finish_episode(state, GamePhase::Lose);
        return;
    }
    if overlaps(&player, &state.goal.rect()) {
        finish_episode(state, GamePhase::Win);
        return;
    }

    state.obstacles.recycle(state.settings.recycle_margin);
}

fn finish_episode(state: &mut GameState, outcome: GamePhase) {
    let event = match outcome {
        GamePhase::Win => GameEvent::Won,
        _ => GameEvent::Lost,
    };
    log::info!(
        "Episode ended: {:?} at tick {} (x {:.1})",
        outcome,
        state.time_ticks,
        state.player.position.x
    );

    state.obstacles.clear();
    state.player.reset(state.scroll_offset);
    state.phase = outcome;
    state.events.push(event);
}

fn update_end_screen(state: &mut GameState, input: &TickInput) {
    if input.confirm && state.obstacles.is_empty() {
        log::info!("Returning to menu");
        state.difficulty = None;
        state.phase = GamePhase::Menu;
        state.events.push(GameEvent::ReturnedToMenu);
    }
}
