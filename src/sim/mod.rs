//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod quiz;
pub mod runner;
pub mod shooter;

pub use collision::{Aabb, aabb_overlap, circle_aabb_overlap, circle_overlap};
pub use quiz::{Problem, QuizPhase, QuizState};
pub use runner::{Obstacle, Player, RunnerInput, RunnerPhase, RunnerState, runner_tick};
pub use shooter::{
    Bullet, Enemy, ShooterInput, ShooterPhase, ShooterState, shooter_tick, tangent_direction,
};
