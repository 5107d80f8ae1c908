//! Side-scrolling shooter with tangent-aimed projectiles
//!
//! The ship rides a fixed sinusoidal flight path; firing computes the
//! projectile direction once, from the path's tangent slope at the
//! moment of the shot.

pub mod aim;
pub mod state;
pub mod tick;

pub use aim::{path_slope, path_y, tangent_direction};
pub use state::{Bullet, Enemy, ShooterPhase, ShooterState};
pub use tick::{ShooterInput, shooter_tick};
