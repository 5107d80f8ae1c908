//! Fixed timestep shooter tick
//!
//! Path advance, fire-time tangent aiming, entity pool updates with
//! deferred removal, circle collision checks, and the two terminal
//! conditions (enemy escape, enemy-ship contact).

use crate::consts::*;
use crate::frame_scale;
use crate::sim::collision::circle_overlap;

use super::aim::tangent_direction;
use super::state::{Bullet, ShooterPhase, ShooterState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct ShooterInput {
    /// Fire one shot (click/tap/space)
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the shooter state by one fixed timestep
pub fn shooter_tick(state: &mut ShooterState, input: &ShooterInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            ShooterPhase::Playing => {
                state.phase = ShooterPhase::Paused;
                return;
            }
            ShooterPhase::Paused => {
                state.phase = ShooterPhase::Playing;
            }
            ShooterPhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        ShooterPhase::Paused | ShooterPhase::GameOver => return,
        _ => {}
    }

    state.time_ticks += 1;
    let scale = frame_scale(dt);

    // Advance along the flight path
    state.path_x += PATH_SCROLL * scale;

    // Fire: direction is fixed at this instant from the tangent slope
    if input.fire {
        let id = state.next_entity_id();
        let dir = tangent_direction(state.path_x);
        state.bullets.push(Bullet {
            id,
            pos: state.ship_pos(),
            vel: dir * BULLET_SPEED,
        });
    }

    // Advance bullets; drop the ones that left the playfield
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel * scale;
    }
    state.bullets.retain(|b| {
        b.pos.x - BULLET_RADIUS < SHOOTER_WIDTH
            && b.pos.y + BULLET_RADIUS > 0.0
            && b.pos.y - BULLET_RADIUS < SHOOTER_HEIGHT
    });

    // Enemy spawn cadence
    state.spawn_timer = state.spawn_timer.saturating_sub(1);
    if state.spawn_timer == 0 {
        state.spawn_enemy();
        state.spawn_timer = ENEMY_SPAWN_TICKS;
    }

    // Advance enemies leftward
    for enemy in &mut state.enemies {
        enemy.pos.x -= ENEMY_SPEED * scale;
    }

    // Bullet/enemy hits (deferred removal keeps iteration order stable)
    let mut dead_bullets: Vec<u32> = Vec::new();
    let mut dead_enemies: Vec<u32> = Vec::new();
    for bullet in &state.bullets {
        for enemy in &state.enemies {
            if dead_enemies.contains(&enemy.id) || dead_bullets.contains(&bullet.id) {
                continue;
            }
            if circle_overlap(bullet.pos, BULLET_RADIUS, enemy.pos, ENEMY_RADIUS) {
                dead_bullets.push(bullet.id);
                dead_enemies.push(enemy.id);
            }
        }
    }
    if !dead_enemies.is_empty() {
        state.score += ENEMY_KILL_SCORE * dead_enemies.len() as u64;
        state.bullets.retain(|b| !dead_bullets.contains(&b.id));
        state.enemies.retain(|e| !dead_enemies.contains(&e.id));
    }

    // Terminal conditions: an enemy slipping past, or ramming the ship
    let ship = state.ship_pos();
    let escaped = state.enemies.iter().any(|e| e.pos.x + ENEMY_RADIUS < 0.0);
    let rammed = state
        .enemies
        .iter()
        .any(|e| circle_overlap(ship, SHIP_RADIUS, e.pos, ENEMY_RADIUS));
    if escaped || rammed {
        state.phase = ShooterPhase::GameOver;
        log::info!("Shooter over: score {} after {} ticks", state.score, state.time_ticks);
    }

    state.normalize_order();
}
