// Public API module - simplified interfaces for the CLI and renderers
use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::constants::{
    DEFAULT_LAUNCH_ANGLE_DEG, DEFAULT_LAUNCH_HEIGHT, DEFAULT_MAX_FLIGHT_TIME, DEFAULT_TIME_STEP,
    DEFAULT_WHEEL_SPEED, RADS_TO_RPM,
};
use crate::launcher::{compute_exit_conditions, ExitConditions, PhysicsConstants};
use crate::trajectory_solver::{simulate_trajectory, summarize, FlightSummary, TrajectoryPoint};

// Error type for simulation operations
#[derive(Debug)]
pub struct SimulationError {
    message: String,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SimulationError {}

impl From<String> for SimulationError {
    fn from(msg: String) -> Self {
        SimulationError { message: msg }
    }
}

impl From<&str> for SimulationError {
    fn from(msg: &str) -> Self {
        SimulationError { message: msg.to_string() }
    }
}

/// User-tunable inputs for one simulation request.
///
/// Supplied fresh per request; carries no identity beyond the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Initial wheel angular velocity (rad/s)
    pub wheel_speed: f64,
    /// Launch angle above horizontal (degrees)
    pub launch_angle_deg: f64,
    /// Ball exit height above the floor (m)
    pub initial_height: f64,
    /// Wheel mass override (kg); the nominal wheel is used when unset
    pub wheel_mass: Option<f64>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            wheel_speed: DEFAULT_WHEEL_SPEED,
            launch_angle_deg: DEFAULT_LAUNCH_ANGLE_DEG,
            initial_height: DEFAULT_LAUNCH_HEIGHT,
            wheel_mass: None,
        }
    }
}

impl SimulationParameters {
    /// Reject inputs the physics model cannot give a meaningful answer
    /// for. The inner integrator itself does not validate; this is the
    /// fail-fast boundary for callers going through `TrajectorySolver`.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.wheel_speed.is_finite() || self.wheel_speed <= 0.0 {
            return Err(format!("wheel speed must be positive, got {}", self.wheel_speed).into());
        }
        if !self.launch_angle_deg.is_finite() {
            return Err("launch angle must be finite".into());
        }
        if !self.initial_height.is_finite() || self.initial_height < 0.0 {
            return Err(format!(
                "initial height must be non-negative, got {}",
                self.initial_height
            )
            .into());
        }
        if let Some(m_w) = self.wheel_mass {
            if !m_w.is_finite() || m_w <= 0.0 {
                return Err(format!("wheel mass must be positive, got {}", m_w).into());
            }
        }
        Ok(())
    }
}

/// Exit conditions with display-friendly units attached.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExitConditionsReport {
    pub exit_speed_mps: f64,
    pub exit_spin_rads: f64,
    pub exit_spin_rpm: f64,
    pub wheel_speed_rads: f64,
    pub wheel_speed_rpm: f64,
}

/// Complete result of one trajectory solve.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryResult {
    pub exit_speed: f64,
    pub exit_spin: f64,
    pub summary: FlightSummary,
    pub points: Vec<TrajectoryPoint>,
}

// Trajectory solver facade
pub struct TrajectorySolver {
    constants: PhysicsConstants,
    params: SimulationParameters,
    time_step: f64,
    max_time: f64,
}

impl TrajectorySolver {
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            constants: PhysicsConstants::default(),
            params,
            time_step: DEFAULT_TIME_STEP,
            max_time: DEFAULT_MAX_FLIGHT_TIME,
        }
    }

    /// Replace the default physical constants (for what-if runs with a
    /// different ball or venue).
    pub fn with_constants(mut self, constants: PhysicsConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn set_time_step(&mut self, step: f64) {
        self.time_step = step;
    }

    pub fn set_max_time(&mut self, max_time: f64) {
        self.max_time = max_time;
    }

    /// Constants for this run, with the wheel-mass override applied.
    fn effective_constants(&self) -> PhysicsConstants {
        match self.params.wheel_mass {
            Some(m_w) => self.constants.with_wheel_mass(m_w),
            None => self.constants,
        }
    }

    /// Preview launch conditions without running a trajectory.
    pub fn exit_conditions(&self) -> Result<ExitConditionsReport, SimulationError> {
        self.params.validate()?;

        let constants = self.effective_constants();
        let exit = compute_exit_conditions(&constants, self.params.wheel_speed);
        Ok(ExitConditionsReport {
            exit_speed_mps: exit.exit_speed,
            exit_spin_rads: exit.exit_spin,
            exit_spin_rpm: exit.exit_spin * RADS_TO_RPM,
            wheel_speed_rads: self.params.wheel_speed,
            wheel_speed_rpm: self.params.wheel_speed * RADS_TO_RPM,
        })
    }

    /// Run the full flight and return the summary plus the ordered
    /// sample sequence.
    pub fn solve(&self) -> Result<TrajectoryResult, SimulationError> {
        self.params.validate()?;
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(format!("time step must be positive, got {}", self.time_step).into());
        }
        if !self.max_time.is_finite() || self.max_time <= 0.0 {
            return Err(format!("max flight time must be positive, got {}", self.max_time).into());
        }

        let constants = self.effective_constants();
        let ExitConditions { exit_speed, exit_spin } =
            compute_exit_conditions(&constants, self.params.wheel_speed);

        let points = simulate_trajectory(
            &constants,
            self.params.wheel_speed,
            self.params.launch_angle_deg,
            self.params.initial_height,
            self.time_step,
            self.max_time,
        );

        // Validation guarantees height >= 0 and max_time > 0, so the
        // sequence is non-empty here.
        let summary = summarize(&points, constants.ball_mass)
            .ok_or_else(|| SimulationError::from("integration produced no samples"))?;

        Ok(TrajectoryResult { exit_speed, exit_spin, summary, points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let p = SimulationParameters::default();

        assert_eq!(p.wheel_speed, 628.0);
        assert_eq!(p.launch_angle_deg, 45.0);
        assert_eq!(p.initial_height, 0.17272);
        assert!(p.wheel_mass.is_none());
    }

    #[test]
    fn test_validation_rejects_bad_inputs() {
        let bad = [
            SimulationParameters { wheel_speed: 0.0, ..Default::default() },
            SimulationParameters { wheel_speed: -10.0, ..Default::default() },
            SimulationParameters { wheel_speed: f64::NAN, ..Default::default() },
            SimulationParameters { initial_height: -0.1, ..Default::default() },
            SimulationParameters { launch_angle_deg: f64::INFINITY, ..Default::default() },
            SimulationParameters { wheel_mass: Some(0.0), ..Default::default() },
        ];

        for p in bad {
            assert!(p.validate().is_err(), "{:?} should fail validation", p);
        }
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_solver_rejects_bad_step() {
        let mut solver = TrajectorySolver::new(SimulationParameters::default());
        solver.set_time_step(0.0);
        assert!(solver.solve().is_err());

        let mut solver = TrajectorySolver::new(SimulationParameters::default());
        solver.set_max_time(-1.0);
        assert!(solver.solve().is_err());
    }

    #[test]
    fn test_solve_default_scenario() {
        let solver = TrajectorySolver::new(SimulationParameters::default());
        let result = solver.solve().unwrap();

        assert!(!result.points.is_empty());
        assert_eq!(result.points[0].t, 0.0);
        assert!(result.summary.max_range > 0.0);
        assert!(result.summary.max_height >= 0.17272);
        assert!((result.points[0].speed - result.exit_speed).abs() < 1e-12);
    }

    #[test]
    fn test_exit_conditions_report_units() {
        let solver = TrajectorySolver::new(SimulationParameters::default());
        let report = solver.exit_conditions().unwrap();

        assert!((report.wheel_speed_rpm - 628.0 * RADS_TO_RPM).abs() < 1e-9);
        assert!((report.exit_spin_rpm - report.exit_spin_rads * RADS_TO_RPM).abs() < 1e-9);
        assert!(report.exit_speed_mps > 0.0);
    }

    #[test]
    fn test_wheel_mass_override_changes_result() {
        let base = TrajectorySolver::new(SimulationParameters::default())
            .solve()
            .unwrap();
        let heavy = TrajectorySolver::new(SimulationParameters {
            wheel_mass: Some(0.3),
            ..Default::default()
        })
        .solve()
        .unwrap();

        assert!(heavy.exit_speed > base.exit_speed);
        assert!(heavy.summary.max_range > base.summary.max_range);
    }
}
