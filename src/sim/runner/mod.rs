//! Gravity-flip obstacle runner
//!
//! The player square hugs the floor or ceiling; flipping inverts the
//! gravity sign. Obstacles scroll left at an ever-increasing speed and
//! any overlap ends the run.

pub mod state;
pub mod tick;

pub use state::{Anchor, Obstacle, Player, RunnerPhase, RunnerState};
pub use tick::{RunnerInput, runner_tick};
