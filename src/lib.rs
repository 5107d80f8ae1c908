//! Math Arcade - three standalone browser mini-games
//!
//! Core modules:
//! - `sim`: Deterministic simulation cores (one per game, plus shared collision)
//! - `render`: Canvas2D drawing (wasm32 only)
//! - `settings`: Persisted player preferences
//!
//! The host page picks the game by the DOM elements it provides; see
//! `main.rs` for the wiring.

pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod render;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Speeds below are in pixels per reference frame (60 Hz); ticks
    /// integrate with `frame_scale(dt)` so the numbers read like the
    /// classic per-frame values.
    pub const REF_FRAME_RATE: f32 = 60.0;

    /// Runner playfield
    pub const RUNNER_WIDTH: f32 = 800.0;
    pub const RUNNER_HEIGHT: f32 = 400.0;

    /// Runner player (axis-aligned square)
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_X: f32 = 80.0;
    /// Gravity magnitude (sign flips at runtime)
    pub const RUNNER_GRAVITY: f32 = 0.6;
    /// Terminal vertical speed
    pub const MAX_FALL_SPEED: f32 = 12.0;

    /// Runner obstacles
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 60.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 150.0;
    /// Horizontal gap behind the rightmost obstacle before the next spawn
    pub const OBSTACLE_GAP: f32 = 300.0;
    pub const RUNNER_BASE_SPEED: f32 = 4.0;
    /// Speed gain per dodged obstacle
    pub const RUNNER_SPEED_INCREMENT: f32 = 0.1;

    /// Shooter playfield
    pub const SHOOTER_WIDTH: f32 = 800.0;
    pub const SHOOTER_HEIGHT: f32 = 450.0;

    /// Ship flight path: y = PATH_MID + PATH_AMPLITUDE * sin(PATH_FREQUENCY * x)
    pub const PATH_MID: f32 = 225.0;
    pub const PATH_AMPLITUDE: f32 = 120.0;
    /// Angular frequency in radians per pixel of path parameter
    pub const PATH_FREQUENCY: f32 = 0.02;
    /// Path parameter advance per reference frame
    pub const PATH_SCROLL: f32 = 2.0;

    pub const SHIP_X: f32 = 120.0;
    pub const SHIP_RADIUS: f32 = 14.0;
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const ENEMY_RADIUS: f32 = 16.0;
    pub const ENEMY_SPEED: f32 = 3.0;
    /// Ticks between enemy spawns (1.5 s at 120 Hz)
    pub const ENEMY_SPAWN_TICKS: u32 = 180;
    /// Points per destroyed enemy
    pub const ENEMY_KILL_SCORE: u64 = 10;

    /// Quiz timing and answer tolerance
    pub const QUIZ_MAX_TIME: f32 = 15.0;
    pub const ANSWER_EPSILON: f64 = 0.01;
}

/// Scale factor converting per-reference-frame speeds to this tick's dt
#[inline]
pub fn frame_scale(dt: f32) -> f32 {
    dt * consts::REF_FRAME_RATE
}
