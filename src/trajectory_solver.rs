//! Fixed-step RK4 trajectory integration.
//!
//! Steps the ball's equations of motion from launch until it returns to
//! ground level or a flight-time ceiling is reached, recording one
//! sample per step.

use serde::Serialize;

use crate::derivatives::{compute_derivatives, drag_force_magnitude, magnus_force_magnitude};
use crate::launcher::{compute_exit_conditions, PhysicsConstants};

/// Mutable integration state for one trajectory run.
///
/// Owned by a single integration pass; never shared across runs. Time is
/// carried alongside the kinematic state and advanced by exactly `dt`
/// each step.
#[derive(Debug, Clone, Copy)]
pub struct SimulationState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub t: f64,
}

impl SimulationState {
    fn as_array(&self) -> [f64; 4] {
        [self.x, self.y, self.vx, self.vy]
    }
}

/// One time-stamped sample of the flight.
///
/// The drag and Magnus magnitudes are the instantaneous force values at
/// the sample, recorded for diagnostic display; they are recomputed by
/// the integrator stages and not read back from here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub t: f64,
    pub vx: f64,
    pub vy: f64,
    pub speed: f64,
    pub drag_force: f64,
    pub magnus_force: f64,
}

/// Integrate one full flight and return the ordered sample sequence.
///
/// Exit conditions are computed from `wheel_speed` via the impulse
/// model; the resulting spin is held constant for the whole flight.
/// The loop records a sample, then takes one RK4 step of `dt`, and
/// repeats while `t < max_time && y >= 0.0`; both terminal predicates
/// are checked before emission, so the stored sequence never contains a
/// point observed below ground, and a negative `initial_height` yields
/// an empty sequence. Ground crossing is not interpolated; the spatial
/// error at impact is bounded by one step.
///
/// Total over IEEE doubles: degenerate constants (zero mass, zero
/// inertia) propagate as NaN/infinity rather than raising an error.
/// Validation belongs to the caller; see `cli_api::TrajectorySolver`.
pub fn simulate_trajectory(
    constants: &PhysicsConstants,
    wheel_speed: f64,
    launch_angle_deg: f64,
    initial_height: f64,
    dt: f64,
    max_time: f64,
) -> Vec<TrajectoryPoint> {
    let exit = compute_exit_conditions(constants, wheel_speed);
    let theta = launch_angle_deg.to_radians();

    let mut state = SimulationState {
        x: 0.0,
        y: initial_height,
        vx: exit.exit_speed * theta.cos(),
        vy: exit.exit_speed * theta.sin(),
        t: 0.0,
    };

    let capacity = if dt > 0.0 && max_time > 0.0 {
        (max_time / dt) as usize + 1
    } else {
        0
    };
    let mut trajectory = Vec::with_capacity(capacity);

    while state.t < max_time && state.y >= 0.0 {
        let speed = (state.vx * state.vx + state.vy * state.vy).sqrt();
        trajectory.push(TrajectoryPoint {
            x: state.x,
            y: state.y,
            t: state.t,
            vx: state.vx,
            vy: state.vy,
            speed,
            drag_force: drag_force_magnitude(constants, speed),
            magnus_force: magnus_force_magnitude(constants, speed, exit.exit_spin),
        });

        state = rk4_step(&state, constants, exit.exit_spin, dt);
    }

    trajectory
}

/// One classical RK4 step of size `dt`.
///
/// Time does not feed back into the derivatives (the RHS is autonomous),
/// so it is advanced by exactly `dt` rather than through the stage
/// combination.
fn rk4_step(
    state: &SimulationState,
    constants: &PhysicsConstants,
    spin: f64,
    dt: f64,
) -> SimulationState {
    let y0 = state.as_array();

    let k1 = compute_derivatives(&y0, constants, spin);

    let mut y1 = y0;
    for j in 0..4 {
        y1[j] = y0[j] + 0.5 * dt * k1[j];
    }
    let k2 = compute_derivatives(&y1, constants, spin);

    let mut y2 = y0;
    for j in 0..4 {
        y2[j] = y0[j] + 0.5 * dt * k2[j];
    }
    let k3 = compute_derivatives(&y2, constants, spin);

    let mut y3 = y0;
    for j in 0..4 {
        y3[j] = y0[j] + dt * k3[j];
    }
    let k4 = compute_derivatives(&y3, constants, spin);

    let mut next = y0;
    for j in 0..4 {
        next[j] = y0[j] + dt * (k1[j] + 2.0 * k2[j] + 2.0 * k3[j] + k4[j]) / 6.0;
    }

    SimulationState {
        x: next[0],
        y: next[1],
        vx: next[2],
        vy: next[3],
        t: state.t + dt,
    }
}

/// Aggregate flight statistics derived from a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightSummary {
    pub max_range: f64,
    pub max_height: f64,
    pub max_speed: f64,
    pub time_of_flight: f64,
    pub impact_speed: f64,
    pub impact_energy: f64,
}

/// Summarize a computed trajectory. Returns `None` for an empty
/// sequence (negative launch height or a non-positive time budget).
pub fn summarize(points: &[TrajectoryPoint], ball_mass: f64) -> Option<FlightSummary> {
    let last = points.last()?;

    let mut max_range = f64::NEG_INFINITY;
    let mut max_height = f64::NEG_INFINITY;
    let mut max_speed = f64::NEG_INFINITY;
    for p in points {
        max_range = max_range.max(p.x);
        max_height = max_height.max(p.y);
        max_speed = max_speed.max(p.speed);
    }

    Some(FlightSummary {
        max_range,
        max_height,
        max_speed,
        time_of_flight: last.t,
        impact_speed: last.speed,
        impact_energy: 0.5 * ball_mass * last.speed * last.speed,
    })
}
