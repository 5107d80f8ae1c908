//! Closed-form aiming math for the sinusoidal flight path
//!
//! The path is y(x) = PATH_MID + PATH_AMPLITUDE * sin(PATH_FREQUENCY * x)
//! in screen coordinates (y grows downward). A shot leaves along the
//! tangent, so the direction is a one-shot arctangent of the derivative,
//! not an iterative solve.

use glam::Vec2;

use crate::consts::*;

/// Height of the flight path at parameter `x`
#[inline]
pub fn path_y(x: f32) -> f32 {
    PATH_MID + PATH_AMPLITUDE * (PATH_FREQUENCY * x).sin()
}

/// Tangent slope dy/dx at parameter `x`: A·k·cos(k·x)
#[inline]
pub fn path_slope(x: f32) -> f32 {
    PATH_AMPLITUDE * PATH_FREQUENCY * (PATH_FREQUENCY * x).cos()
}

/// Unit direction of a shot fired at parameter `x`
///
/// θ = atan(slope) keeps the direction in the forward (positive-x)
/// half-plane, so shots always travel rightward along the tangent.
pub fn tangent_direction(x: f32) -> Vec2 {
    let theta = path_slope(x).atan();
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_direction_is_unit_length() {
        for x in [0.0, 13.7, 100.0, 555.5, 10_000.0] {
            let dir = tangent_direction(x);
            assert!((dir.length() - 1.0).abs() < 1e-5, "x = {x}");
        }
    }

    #[test]
    fn test_flat_tangent_at_crest() {
        // sin peaks where k·x = π/2; the derivative is zero there
        let crest_x = FRAC_PI_2 / PATH_FREQUENCY;
        assert!(path_slope(crest_x).abs() < 1e-4);

        let dir = tangent_direction(crest_x);
        assert!((dir.x - 1.0).abs() < 1e-5);
        assert!(dir.y.abs() < 1e-4);
    }

    #[test]
    fn test_steepest_tangent_at_zero_crossing() {
        // At x = 0 the derivative is A·k exactly
        let slope = path_slope(0.0);
        assert!((slope - PATH_AMPLITUDE * PATH_FREQUENCY).abs() < 1e-6);

        let dir = tangent_direction(0.0);
        let expected_theta = slope.atan();
        assert!((dir.y / dir.x - expected_theta.tan()).abs() < 1e-4);
        // Forward half-plane, sloping downward in screen coords
        assert!(dir.x > 0.0);
        assert!(dir.y > 0.0);
    }

    #[test]
    fn test_path_y_stays_within_amplitude() {
        for i in 0..1000 {
            let x = i as f32 * 3.3;
            let y = path_y(x);
            assert!(y >= PATH_MID - PATH_AMPLITUDE - 1e-3);
            assert!(y <= PATH_MID + PATH_AMPLITUDE + 1e-3);
        }
    }
}
