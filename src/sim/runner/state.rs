//! Runner game state
//!
//! All state that must survive a pause or a serialization round-trip
//! lives here; per-tick logic is in `tick.rs`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::collision::Aabb;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerPhase {
    /// Waiting for the first flip input
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended (collision detected)
    GameOver,
}

/// The player square (fixed x, vertical motion only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Top edge of the square
    pub y: f32,
    /// Vertical velocity (pixels per reference frame, positive = down)
    pub vel: f32,
    /// Gravity sign: 1.0 pulls toward the floor, -1.0 toward the ceiling
    pub gravity_sign: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            // Start resting on the floor
            y: RUNNER_HEIGHT - PLAYER_SIZE,
            vel: 0.0,
            gravity_sign: 1.0,
        }
    }
}

impl Player {
    /// Bounding box for collision checks
    pub fn aabb(&self) -> Aabb {
        Aabb::new(PLAYER_X, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// True when resting on the floor or ceiling
    pub fn grounded(&self) -> bool {
        self.y <= 0.0 || self.y >= RUNNER_HEIGHT - PLAYER_SIZE
    }
}

/// Which edge an obstacle grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Floor,
    Ceiling,
}

/// A scrolling obstacle column
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub height: f32,
    pub anchor: Anchor,
}

impl Obstacle {
    /// Bounding box for collision checks
    pub fn aabb(&self) -> Aabb {
        let y = match self.anchor {
            Anchor::Floor => RUNNER_HEIGHT - self.height,
            Anchor::Ceiling => 0.0,
        };
        Aabb::new(self.x, y, OBSTACLE_WIDTH, self.height)
    }
}

/// Complete runner state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacles dodged
    pub score: u64,
    /// Scroll speed (pixels per reference frame, grows with score)
    pub speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: RunnerPhase,
    pub player: Player,
    /// Active obstacles (sorted by id for determinism)
    pub obstacles: Vec<Obstacle>,
    /// Obstacles spawned so far (feeds the per-spawn RNG stream)
    pub spawn_count: u32,
    /// True once the first flip has started the run; unpause restores
    /// Ready until then
    pub run_started: bool,
    next_id: u32,
}

impl RunnerState {
    /// Create a new runner state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            speed: RUNNER_BASE_SPEED,
            time_ticks: 0,
            phase: RunnerPhase::Ready,
            player: Player::default(),
            obstacles: Vec::new(),
            spawn_count: 0,
            run_started: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one obstacle at the right edge
    ///
    /// Height and floor/ceiling placement come from a per-spawn RNG stream
    /// derived from the run seed, so the layout is a pure function of the
    /// seed and the spawn count.
    pub fn spawn_obstacle(&mut self) {
        let spawn_seed = self
            .seed
            .wrapping_add((self.spawn_count as u64).wrapping_mul(2654435761));
        let mut rng = Pcg32::seed_from_u64(spawn_seed);

        let height = rng.random_range(OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT);
        let anchor = if rng.random_bool(0.5) {
            Anchor::Floor
        } else {
            Anchor::Ceiling
        };

        let id = self.next_entity_id();
        self.obstacles.push(Obstacle {
            id,
            x: RUNNER_WIDTH,
            height,
            anchor,
        });
        self.spawn_count += 1;
    }

    /// Rightmost obstacle x, if any
    pub fn rightmost_x(&self) -> Option<f32> {
        self.obstacles
            .iter()
            .map(|o| o.x)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Ensure obstacles are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|o| o.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_ready_on_floor() {
        let state = RunnerState::new(42);
        assert_eq!(state.phase, RunnerPhase::Ready);
        assert!(state.player.grounded());
        assert_eq!(state.player.gravity_sign, 1.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.speed, RUNNER_BASE_SPEED);
    }

    #[test]
    fn test_spawn_obstacle_in_range() {
        let mut state = RunnerState::new(7);
        for _ in 0..50 {
            state.spawn_obstacle();
        }
        for o in &state.obstacles {
            assert!(o.height >= OBSTACLE_MIN_HEIGHT && o.height <= OBSTACLE_MAX_HEIGHT);
            assert_eq!(o.x, RUNNER_WIDTH);
        }
        // Ids are unique and ascending
        for pair in state.obstacles.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_spawns_are_seed_deterministic() {
        let mut a = RunnerState::new(123);
        let mut b = RunnerState::new(123);
        for _ in 0..10 {
            a.spawn_obstacle();
            b.spawn_obstacle();
        }
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.height, ob.height);
            assert_eq!(oa.anchor, ob.anchor);
        }
    }

    #[test]
    fn test_obstacle_aabb_anchoring() {
        let floor = Obstacle {
            id: 1,
            x: 500.0,
            height: 100.0,
            anchor: Anchor::Floor,
        };
        assert_eq!(floor.aabb().pos.y, RUNNER_HEIGHT - 100.0);
        assert_eq!(floor.aabb().bottom(), RUNNER_HEIGHT);

        let ceiling = Obstacle {
            anchor: Anchor::Ceiling,
            ..floor
        };
        assert_eq!(ceiling.aabb().pos.y, 0.0);
        assert_eq!(ceiling.aabb().bottom(), 100.0);
    }
}
