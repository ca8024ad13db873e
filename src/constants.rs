/// Physical constants used in trajectory calculations.

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.80665;

/// Standard sea-level air density (kg/m³), ICAO
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Standard sea-level temperature (°C), ICAO
pub const STANDARD_TEMPERATURE_C: f64 = 15.0;

/// Standard sea-level pressure (hPa), ICAO
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

/// Specific gas constant for dry air (J/(kg·K))
pub const R_DRY: f64 = 287.05;

/// Specific gas constant for water vapor (J/(kg·K))
pub const R_VAPOR: f64 = 461.495;

/// Heat capacity ratio for air
pub const GAMMA: f64 = 1.4;

/// Tropospheric temperature lapse rate (K/m), ICAO
pub const LAPSE_RATE_K_PER_M: f64 = -0.0065;

// Numerical stability thresholds.

/// Minimum velocity magnitude (m/s) before the projectile counts as stopped.
/// Also guards the Mach-number division.
pub const MIN_VELOCITY_THRESHOLD: f64 = 1e-6;

/// Minimum denominator magnitude for interpolation divisions
pub const MIN_DIVISION_THRESHOLD: f64 = 1e-12;

/// Flight time (s) below which the spin-drift acceleration is not applied;
/// the empirical displacement curve is singular as t -> 0.
pub const SPIN_DRIFT_MIN_TIME_S: f64 = 0.1;

// Zero-finding (sighting pre-pass) bounds.

/// Convergence tolerance on line-of-sight miss at the zero distance (m)
pub const ZERO_FINDING_TOLERANCE_M: f64 = 1e-3;

/// Maximum bisection iterations for the sighting solve
pub const ZERO_FINDING_MAX_ITER: usize = 60;

/// Bore-angle search bracket (radians, about ±11 degrees)
pub const ZERO_ANGLE_BRACKET_RAD: f64 = 0.2;

// Solver defaults.

/// Default integration time step (s)
pub const DEFAULT_TIME_STEP_S: f64 = 0.001;

/// Default downrange bound (yards) guaranteeing termination
pub const DEFAULT_MAX_RANGE_YD: f64 = 5000.0;

/// Default elapsed-time bound (s) guaranteeing termination
pub const DEFAULT_MAX_TIME_S: f64 = 60.0;

/// Vertical offset below the line of sight (m) treated as ground impact
pub const GROUND_BOUND_M: f64 = -100.0;
