//! Shooter game state

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::aim::path_y;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShooterPhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended
    GameOver,
}

/// A projectile with a fixed direction set at fire time
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// An enemy advancing leftward at constant speed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
}

/// Complete shooter state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShooterState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: ShooterPhase,
    /// Flight path parameter (advances each tick; the ship's y and the
    /// shot tangent are both functions of it)
    pub path_x: f32,
    /// Active bullets (sorted by id for determinism)
    pub bullets: Vec<Bullet>,
    /// Active enemies (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    /// Ticks until the next enemy spawn
    pub spawn_timer: u32,
    /// Enemies spawned so far (feeds the per-spawn RNG stream)
    pub spawn_count: u32,
    next_id: u32,
}

impl ShooterState {
    /// Create a new shooter state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            time_ticks: 0,
            phase: ShooterPhase::Playing,
            path_x: 0.0,
            bullets: Vec::new(),
            enemies: Vec::new(),
            spawn_timer: ENEMY_SPAWN_TICKS,
            spawn_count: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Ship position on the flight path
    pub fn ship_pos(&self) -> Vec2 {
        Vec2::new(SHIP_X, path_y(self.path_x))
    }

    /// Spawn one enemy just off the right edge at a seeded random height
    pub fn spawn_enemy(&mut self) {
        let spawn_seed = self
            .seed
            .wrapping_add((self.spawn_count as u64).wrapping_mul(2654435761));
        let mut rng = Pcg32::seed_from_u64(spawn_seed);
        let y = rng.random_range(ENEMY_RADIUS..=(SHOOTER_HEIGHT - ENEMY_RADIUS));

        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos: Vec2::new(SHOOTER_WIDTH + ENEMY_RADIUS, y),
        });
        self.spawn_count += 1;
    }

    /// Ensure entity pools are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.bullets.sort_by_key(|b| b.id);
        self.enemies.sort_by_key(|e| e.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_plays_immediately() {
        let state = ShooterState::new(9);
        assert_eq!(state.phase, ShooterPhase::Playing);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.spawn_timer, ENEMY_SPAWN_TICKS);
    }

    #[test]
    fn test_ship_starts_at_path_origin() {
        let state = ShooterState::new(9);
        let pos = state.ship_pos();
        assert_eq!(pos.x, SHIP_X);
        assert_eq!(pos.y, PATH_MID); // sin(0) = 0
    }

    #[test]
    fn test_spawned_enemy_height_in_bounds() {
        let mut state = ShooterState::new(11);
        for _ in 0..50 {
            state.spawn_enemy();
        }
        for e in &state.enemies {
            assert!(e.pos.y >= ENEMY_RADIUS);
            assert!(e.pos.y <= SHOOTER_HEIGHT - ENEMY_RADIUS);
            assert_eq!(e.pos.x, SHOOTER_WIDTH + ENEMY_RADIUS);
        }
    }

    #[test]
    fn test_spawns_are_seed_deterministic() {
        let mut a = ShooterState::new(77);
        let mut b = ShooterState::new(77);
        for _ in 0..10 {
            a.spawn_enemy();
            b.spawn_enemy();
        }
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
        }
    }
}
