//! Fixed timestep runner tick
//!
//! Euler stepping with floor/ceiling clamping, leftward obstacle scroll
//! with removal-on-exit scoring, gap-threshold spawning, and an AABB
//! game-over check.

use crate::consts::*;
use crate::frame_scale;
use crate::sim::collision::aabb_overlap;

use super::state::{RunnerPhase, RunnerState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct RunnerInput {
    /// Flip gravity (key/click/tap); also starts the run from Ready
    pub flip: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the runner state by one fixed timestep
pub fn runner_tick(state: &mut RunnerState, input: &RunnerInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            RunnerPhase::Playing | RunnerPhase::Ready => {
                state.phase = RunnerPhase::Paused;
                return;
            }
            RunnerPhase::Paused => {
                // A run paused before the first flip goes back to waiting
                state.phase = if state.run_started {
                    RunnerPhase::Playing
                } else {
                    RunnerPhase::Ready
                };
            }
            RunnerPhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        RunnerPhase::Paused | RunnerPhase::GameOver => return,
        _ => {}
    }

    state.time_ticks += 1;

    if state.phase == RunnerPhase::Ready {
        if input.flip {
            state.phase = RunnerPhase::Playing;
            state.run_started = true;
        }
        return;
    }

    let scale = frame_scale(dt);

    // Gravity flip and Euler integration
    if input.flip {
        state.player.gravity_sign = -state.player.gravity_sign;
    }
    state.player.vel += RUNNER_GRAVITY * state.player.gravity_sign * scale;
    state.player.vel = state.player.vel.clamp(-MAX_FALL_SPEED, MAX_FALL_SPEED);
    state.player.y += state.player.vel * scale;

    // Clamp to floor/ceiling and kill velocity on contact
    let floor_y = RUNNER_HEIGHT - PLAYER_SIZE;
    if state.player.y <= 0.0 {
        state.player.y = 0.0;
        state.player.vel = 0.0;
    } else if state.player.y >= floor_y {
        state.player.y = floor_y;
        state.player.vel = 0.0;
    }

    // Advance obstacles leftward
    for obstacle in &mut state.obstacles {
        obstacle.x -= state.speed * scale;
    }

    // Remove obstacles that left the playfield; each one dodged is a
    // point and a speed bump
    let before = state.obstacles.len();
    state.obstacles.retain(|o| o.x + OBSTACLE_WIDTH > 0.0);
    let dodged = (before - state.obstacles.len()) as u64;
    if dodged > 0 {
        state.score += dodged;
        state.speed += RUNNER_SPEED_INCREMENT * dodged as f32;
    }

    // Spawn when the field is empty or the rightmost obstacle has
    // traveled past the gap threshold
    let should_spawn = match state.rightmost_x() {
        None => true,
        Some(x) => x < RUNNER_WIDTH - OBSTACLE_GAP,
    };
    if should_spawn {
        state.spawn_obstacle();
    }

    // Any overlap ends the run
    let player_box = state.player.aabb();
    let hit = state
        .obstacles
        .iter()
        .any(|o| aabb_overlap(&player_box, &o.aabb()));
    if hit {
        state.phase = RunnerPhase::GameOver;
        log::info!("Runner over: score {} after {} ticks", state.score, state.time_ticks);
    }

    state.normalize_order();
}
