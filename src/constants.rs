/// Physical constants for the flywheel launcher and ball flight model

/// Air density at sea level (kg/m³)
///
/// Standard atmosphere value at 15°C, 1013.25 hPa. Indoor competition
/// venues are close enough to this that no altitude correction is made.
pub const RHO_AIR: f64 = 1.225;

/// Gravitational acceleration (m/s²)
pub const G_ACCEL: f64 = 9.81;

/// Drag coefficient for the ball
///
/// Value: 0.50 (dimensionless)
/// Estimate for a smooth sphere at the Reynolds numbers reached by a
/// flywheel launch (roughly 10 m/s on a 12.7 cm ball). Treated as
/// constant over the whole flight.
pub const DRAG_COEFF: f64 = 0.50;

/// Magnus lift factor alpha in C_L = alpha * S
///
/// Value: 0.2 (dimensionless)
/// S is the spin parameter omega*r/V. The linear C_L(S) model is a
/// common approximation for sports balls at moderate spin ratios.
pub const MAGNUS_LIFT_FACTOR: f64 = 0.2;

/// Ball mass (kg), FTC Artifact game ball
pub const BALL_MASS: f64 = 0.0748;

/// Ball radius (m), 5 in diameter game ball
pub const BALL_RADIUS: f64 = 0.1270 / 2.0;

/// Moment-of-inertia shape factor for the ball
///
/// Value: 0.4, the solid-sphere factor in I = k*m*r².
/// The game ball is foam throughout, so the solid-sphere value is used
/// rather than the thin-shell 2/3.
pub const SPHERE_INERTIA_FACTOR: f64 = 0.4;

/// Launcher wheel radius (m)
pub const WHEEL_RADIUS: f64 = 0.048;

/// Launcher wheel mass (kg)
pub const WHEEL_MASS: f64 = 0.106;

/// Default initial wheel angular velocity (rad/s), roughly 6000 RPM
pub const DEFAULT_WHEEL_SPEED: f64 = 628.0;

/// Default launch angle above horizontal (degrees)
pub const DEFAULT_LAUNCH_ANGLE_DEG: f64 = 45.0;

/// Default launch height above the floor (m)
///
/// 0.17272 m = 6.8 in, a typical ball-exit height for a robot-mounted
/// launcher.
pub const DEFAULT_LAUNCH_HEIGHT: f64 = 0.17272;

/// Default integration time step (s)
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Default flight-time ceiling (s)
///
/// Safety bound on the integration loop; a launched game ball lands
/// well inside this window for any realistic wheel speed.
pub const DEFAULT_MAX_FLIGHT_TIME: f64 = 5.0;

/// Conversion factor: rad/s to revolutions per minute
pub const RADS_TO_RPM: f64 = 60.0 / (2.0 * std::f64::consts::PI);
