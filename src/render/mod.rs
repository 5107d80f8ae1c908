//! Canvas2D rendering (wasm32 only)
//!
//! Drawing reads simulation state and never mutates it. The quiz has no
//! canvas; its surface is plain DOM text plus the timer bar, handled in
//! `main.rs`.

pub mod runner;
pub mod shooter;

use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

/// Fill a circle at (x, y)
pub(crate) fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
    ctx.begin_path();
    let _ = ctx.arc(x, y, radius, 0.0, TAU);
    ctx.fill();
}
