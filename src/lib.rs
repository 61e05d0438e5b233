//! # flywheel-sim
//!
//! Trajectory engine for flywheel-launched FTC game balls. An
//! impulse-momentum model converts wheel speed into ball exit speed and
//! spin; a fixed-step RK4 integrator then flies the ball under gravity,
//! quadratic drag and Magnus lift until it reaches the floor.

// Re-export the main types and functions
pub use cli_api::{
    ExitConditionsReport, SimulationError, SimulationParameters, TrajectoryResult,
    TrajectorySolver,
};
pub use launcher::{compute_exit_conditions, ExitConditions, PhysicsConstants};
pub use trajectory_sampling::{point_at_time, resample_at_interval};
pub use trajectory_solver::{
    simulate_trajectory, summarize, FlightSummary, SimulationState, TrajectoryPoint,
};

// Module declarations
pub mod cli_api;
pub mod constants;
mod derivatives;
mod launcher;
mod trajectory_sampling;
mod trajectory_solver;
