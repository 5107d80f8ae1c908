//! Shooter frame drawing

use web_sys::CanvasRenderingContext2d;

use super::fill_circle;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::shooter::{ShooterState, path_slope, path_y};

const BG_COLOR: &str = "#0b1020";
const PATH_COLOR: &str = "#2a3a5e";
const SHIP_COLOR: &str = "#06d6a0";
const AIM_COLOR: &str = "#9af0d8";
const BULLET_COLOR: &str = "#ffd166";
const ENEMY_COLOR: &str = "#ef476f";

/// Draw one frame of the shooter
pub fn draw(ctx: &CanvasRenderingContext2d, state: &ShooterState, settings: &Settings) {
    ctx.set_fill_style_str(BG_COLOR);
    ctx.fill_rect(0.0, 0.0, SHOOTER_WIDTH as f64, SHOOTER_HEIGHT as f64);

    // Flight path guide, scrolled so the curve passes through the ship.
    // The scrolling curve is the dominant background motion, so reduced
    // motion drops it and keeps only the ship's aim line.
    if !settings.reduced_motion {
        ctx.set_stroke_style_str(PATH_COLOR);
        ctx.set_line_width(1.5);
        ctx.begin_path();
        let mut first = true;
        let mut x = 0.0f32;
        while x <= SHOOTER_WIDTH {
            let y = path_y(state.path_x + x - SHIP_X);
            if first {
                ctx.move_to(x as f64, y as f64);
                first = false;
            } else {
                ctx.line_to(x as f64, y as f64);
            }
            x += 8.0;
        }
        ctx.stroke();
    }

    // Ship with a short tangent-aligned aim line
    let ship = state.ship_pos();
    ctx.set_fill_style_str(SHIP_COLOR);
    fill_circle(ctx, ship.x as f64, ship.y as f64, SHIP_RADIUS as f64);

    let slope = path_slope(state.path_x);
    let theta = slope.atan();
    let aim_len = SHIP_RADIUS * 2.0;
    ctx.set_stroke_style_str(AIM_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(ship.x as f64, ship.y as f64);
    ctx.line_to(
        (ship.x + theta.cos() * aim_len) as f64,
        (ship.y + theta.sin() * aim_len) as f64,
    );
    ctx.stroke();

    // Bullets
    ctx.set_fill_style_str(BULLET_COLOR);
    for bullet in &state.bullets {
        fill_circle(
            ctx,
            bullet.pos.x as f64,
            bullet.pos.y as f64,
            BULLET_RADIUS as f64,
        );
    }

    // Enemies
    ctx.set_fill_style_str(ENEMY_COLOR);
    for enemy in &state.enemies {
        fill_circle(
            ctx,
            enemy.pos.x as f64,
            enemy.pos.y as f64,
            ENEMY_RADIUS as f64,
        );
    }
}
