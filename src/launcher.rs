//! Flywheel launcher model.
//!
//! Converts wheel angular velocity into ball exit speed and spin via an
//! impulse-momentum balance across the frictional wheel/ball contact.

use crate::constants::*;

/// Immutable physical parameters for one simulation run.
///
/// Derived quantities (cross-sectional area, ball and wheel moments of
/// inertia) are computed once at construction; `area` is always derived
/// from `ball_radius`, never set independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConstants {
    /// Air density (kg/m³)
    pub rho_air: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Drag coefficient
    pub drag_coeff: f64,
    /// Magnus lift factor alpha in C_L = alpha * S
    pub magnus_lift_factor: f64,
    /// Ball mass (kg)
    pub ball_mass: f64,
    /// Ball radius (m)
    pub ball_radius: f64,
    /// Inertia shape factor k in I_b = k * m * r²
    pub inertia_factor: f64,
    /// Wheel radius (m)
    pub wheel_radius: f64,
    /// Wheel mass (kg)
    pub wheel_mass: f64,
    /// Ball cross-sectional area (m²), derived
    pub area: f64,
    /// Ball moment of inertia (kg·m²), derived
    pub ball_inertia: f64,
    /// Wheel moment of inertia (kg·m²), derived as a solid disc
    pub wheel_inertia: f64,
}

impl PhysicsConstants {
    pub fn new(
        rho_air: f64,
        g: f64,
        drag_coeff: f64,
        magnus_lift_factor: f64,
        ball_mass: f64,
        ball_radius: f64,
        inertia_factor: f64,
        wheel_radius: f64,
        wheel_mass: f64,
    ) -> Self {
        Self {
            rho_air,
            g,
            drag_coeff,
            magnus_lift_factor,
            ball_mass,
            ball_radius,
            inertia_factor,
            wheel_radius,
            wheel_mass,
            area: std::f64::consts::PI * ball_radius * ball_radius,
            ball_inertia: inertia_factor * ball_mass * ball_radius * ball_radius,
            wheel_inertia: 0.5 * wheel_mass * wheel_radius * wheel_radius,
        }
    }

    /// Same constants with a different wheel mass; wheel inertia is
    /// re-derived.
    pub fn with_wheel_mass(&self, wheel_mass: f64) -> Self {
        Self::new(
            self.rho_air,
            self.g,
            self.drag_coeff,
            self.magnus_lift_factor,
            self.ball_mass,
            self.ball_radius,
            self.inertia_factor,
            self.wheel_radius,
            wheel_mass,
        )
    }
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self::new(
            RHO_AIR,
            G_ACCEL,
            DRAG_COEFF,
            MAGNUS_LIFT_FACTOR,
            BALL_MASS,
            BALL_RADIUS,
            SPHERE_INERTIA_FACTOR,
            WHEEL_RADIUS,
            WHEEL_MASS,
        )
    }
}

/// Ball state the instant it leaves the launcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitConditions {
    /// Linear speed of the ball center (m/s)
    pub exit_speed: f64,
    /// Backspin angular velocity (rad/s)
    pub exit_spin: f64,
}

/// Compute ball exit speed and spin from the initial wheel angular
/// velocity.
///
/// Impulse-momentum balance: the tangential contact impulse J acts
/// against the effective compliance of the ball's translation, the
/// ball's rotation and the wheel's rotation,
/// `denom = 1/m + r_b²/I_b + R_w²/I_w`, giving
/// `J = omega_w0 * R_w / denom`, `V_b = J/m`, `omega_b = J*r_b/I_b`.
///
/// Pure function of the constants and `wheel_speed`; finite,
/// non-negative and monotone in `wheel_speed` for positive, finite
/// constants. Zero moments of inertia are a caller-contract violation
/// and yield non-finite output rather than an error.
pub fn compute_exit_conditions(constants: &PhysicsConstants, wheel_speed: f64) -> ExitConditions {
    let m = constants.ball_mass;
    let r_b = constants.ball_radius;
    let r_w = constants.wheel_radius;

    let denom = 1.0 / m
        + (r_b * r_b) / constants.ball_inertia
        + (r_w * r_w) / constants.wheel_inertia;
    let impulse = (wheel_speed * r_w) / denom;

    ExitConditions {
        exit_speed: impulse / m,
        exit_spin: (impulse * r_b) / constants.ball_inertia,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_quantities() {
        let c = PhysicsConstants::default();

        assert!((c.area - std::f64::consts::PI * 0.0635 * 0.0635).abs() < 1e-15);
        assert!((c.ball_inertia - 0.4 * 0.0748 * 0.0635 * 0.0635).abs() < 1e-15);
        assert!((c.wheel_inertia - 0.5 * 0.106 * 0.048 * 0.048).abs() < 1e-15);
    }

    #[test]
    fn test_default_scenario_matches_impulse_formula() {
        let c = PhysicsConstants::default();
        let exit = compute_exit_conditions(&c, 628.0);

        // Expected values evaluated independently from the documented
        // constants: rho=1.225, g=9.81, C_D=0.50, alpha=0.2, m=0.0748,
        // r_b=0.0635, k=0.4, R_w=0.048, m_w=0.106.
        let i_b = 0.4 * 0.0748 * 0.0635_f64.powi(2);
        let i_w = 0.5 * 0.106 * 0.048_f64.powi(2);
        let denom = 1.0 / 0.0748 + 0.0635_f64.powi(2) / i_b + 0.048_f64.powi(2) / i_w;
        let j = 628.0 * 0.048 / denom;
        let v_b = j / 0.0748;
        let omega_b = j * 0.0635 / i_b;

        assert!((exit.exit_speed - v_b).abs() / v_b < 1e-9);
        assert!((exit.exit_spin - omega_b).abs() / omega_b < 1e-9);
    }

    #[test]
    fn test_exit_conditions_finite_and_nonnegative() {
        let c = PhysicsConstants::default();

        for &omega in &[1.0, 10.0, 100.0, 628.0, 5000.0] {
            let exit = compute_exit_conditions(&c, omega);
            assert!(exit.exit_speed.is_finite() && exit.exit_speed >= 0.0);
            assert!(exit.exit_spin.is_finite() && exit.exit_spin >= 0.0);
        }
    }

    #[test]
    fn test_exit_conditions_monotone_in_wheel_speed() {
        let c = PhysicsConstants::default();
        let mut prev = compute_exit_conditions(&c, 1.0);

        for &omega in &[50.0, 200.0, 628.0, 1000.0, 4000.0] {
            let exit = compute_exit_conditions(&c, omega);
            assert!(exit.exit_speed > prev.exit_speed);
            assert!(exit.exit_spin > prev.exit_spin);
            prev = exit;
        }
    }

    #[test]
    fn test_zero_wheel_speed_gives_zero_exit() {
        let c = PhysicsConstants::default();
        let exit = compute_exit_conditions(&c, 0.0);

        assert_eq!(exit.exit_speed, 0.0);
        assert_eq!(exit.exit_spin, 0.0);
    }

    #[test]
    fn test_wheel_mass_override_rederives_inertia() {
        let c = PhysicsConstants::default();
        let heavier = c.with_wheel_mass(0.212);

        assert!((heavier.wheel_inertia - 2.0 * c.wheel_inertia).abs() < 1e-15);
        // A heavier wheel holds more angular momentum, so the ball
        // leaves faster.
        let base = compute_exit_conditions(&c, 628.0);
        let boosted = compute_exit_conditions(&heavier, 628.0);
        assert!(boosted.exit_speed > base.exit_speed);
    }
}
