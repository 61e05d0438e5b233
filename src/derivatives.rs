//! Equations of motion for the ball in flight.
//!
//! 2D point-mass model: gravity, quadratic drag anti-parallel to
//! velocity, and Magnus lift perpendicular to velocity. The spin axis is
//! taken perpendicular to the plane of motion, so the lift direction is
//! the velocity rotated 90° counter-clockwise.

use nalgebra::Vector2;

use crate::launcher::PhysicsConstants;

/// Drag force magnitude at speed `v`: 0.5 * rho * v² * A * C_D.
///
/// Zero at zero speed. The branch is on exact zero speed, not a
/// tolerance, so the output is reproducible bit-for-bit.
pub fn drag_force_magnitude(constants: &PhysicsConstants, v: f64) -> f64 {
    if v > 0.0 {
        0.5 * constants.rho_air * v * v * constants.area * constants.drag_coeff
    } else {
        0.0
    }
}

/// Magnus force magnitude at speed `v` for ball spin `spin` (rad/s).
///
/// The lift coefficient is linear in the spin parameter S = omega*r/V:
/// C_L = alpha * S, F = 0.5 * rho * v² * A * C_L. Zero at zero speed,
/// where S is undefined.
pub fn magnus_force_magnitude(constants: &PhysicsConstants, v: f64, spin: f64) -> f64 {
    if v > 0.0 {
        let spin_param = spin * constants.ball_radius / v;
        let lift_coeff = constants.magnus_lift_factor * spin_param;
        0.5 * constants.rho_air * v * v * constants.area * lift_coeff
    } else {
        0.0
    }
}

/// ODE right-hand side for the state `[x, y, Vx, Vy]`.
///
/// `spin` is the ball's angular velocity, fixed at launch for the whole
/// flight (spin decay is not modeled). Returns
/// `[dx/dt, dy/dt, dVx/dt, dVy/dt]`.
pub fn compute_derivatives(state: &[f64; 4], constants: &PhysicsConstants, spin: f64) -> [f64; 4] {
    let vel = Vector2::new(state[2], state[3]);
    let v = vel.norm();

    let mut accel = Vector2::new(0.0, -constants.g);

    if v > 0.0 {
        let unit = vel / v;
        let m = constants.ball_mass;

        // Drag opposes the velocity.
        accel -= (drag_force_magnitude(constants, v) / m) * unit;

        // Magnus lift is the velocity direction rotated +90° (CCW):
        // (Vx, Vy) -> (-Vy, Vx). With backspin this pushes the ball up
        // on the ascending leg and stretches the trajectory.
        let perp = Vector2::new(-unit.y, unit.x);
        accel += (magnus_force_magnitude(constants, v, spin) / m) * perp;
    }

    [vel.x, vel.y, accel.x, accel.y]
}
