//! Runner frame drawing

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::runner::{Anchor, RunnerState};

const BG_COLOR: &str = "#101018";
const EDGE_COLOR: &str = "#3a3a55";
const PLAYER_COLOR: &str = "#ffd166";
const PLAYER_FLIPPED_COLOR: &str = "#66d1ff";
const FLOOR_OBSTACLE_COLOR: &str = "#ef476f";
const CEILING_OBSTACLE_COLOR: &str = "#b04a8f";

/// Draw one frame of the runner
pub fn draw(ctx: &CanvasRenderingContext2d, state: &RunnerState) {
    ctx.set_fill_style_str(BG_COLOR);
    ctx.fill_rect(0.0, 0.0, RUNNER_WIDTH as f64, RUNNER_HEIGHT as f64);

    // Floor and ceiling edges
    ctx.set_fill_style_str(EDGE_COLOR);
    ctx.fill_rect(0.0, 0.0, RUNNER_WIDTH as f64, 4.0);
    ctx.fill_rect(0.0, (RUNNER_HEIGHT - 4.0) as f64, RUNNER_WIDTH as f64, 4.0);

    // Obstacles
    for obstacle in &state.obstacles {
        let rect = obstacle.aabb();
        let color = match obstacle.anchor {
            Anchor::Floor => FLOOR_OBSTACLE_COLOR,
            Anchor::Ceiling => CEILING_OBSTACLE_COLOR,
        };
        ctx.set_fill_style_str(color);
        ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    // Player square, tinted by gravity direction
    let color = if state.player.gravity_sign > 0.0 {
        PLAYER_COLOR
    } else {
        PLAYER_FLIPPED_COLOR
    };
    ctx.set_fill_style_str(color);
    ctx.fill_rect(
        PLAYER_X as f64,
        state.player.y as f64,
        PLAYER_SIZE as f64,
        PLAYER_SIZE as f64,
    );
}
