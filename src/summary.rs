//! Trajectory output types and the point-sequence reduction.

use serde::Serialize;

/// One retained integration sample. Produced only by the solver; owned by
/// the [`TrajectoryResult`] sequence.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryPoint {
    /// Time since departure (s)
    pub time_s: f64,
    /// Downrange distance along the line of sight (yd)
    pub downrange_yd: f64,
    /// Vertical offset relative to the line of sight (yd)
    pub vertical_offset_yd: f64,
    /// Lateral drift, + to the shooter's right (yd)
    pub drift_yd: f64,
    /// Scalar velocity (fps)
    pub velocity_fps: f64,
    /// Mach number at this sample
    pub mach: f64,
    /// Kinetic energy (ft·lbs)
    pub energy_ftlbs: f64,
}

/// Which stopping condition ended the integration. All of these are normal
/// termination paths, distinct from solver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    /// Velocity decayed to near zero or stopped moving forward
    VelocityDecayed,
    /// Configured downrange bound reached
    MaxRangeReached,
    /// Configured elapsed-time bound reached
    MaxTimeReached,
    /// Vertical offset fell below the ground bound
    GroundImpact,
}

/// Full solve output: the ordered point sequence plus derived scalars.
/// Constructed once per solve, immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryResult {
    /// Time-ascending samples, one per retained integration step
    pub points: Vec<TrajectoryPoint>,
    /// Last point's downrange distance (yd)
    pub max_range_yd: f64,
    /// Maximum vertical offset over the flight (yd)
    pub max_height_yd: f64,
    /// Last point's time (s)
    pub time_of_flight_s: f64,
    /// Last point's velocity (fps)
    pub impact_velocity_fps: f64,
    /// Last point's energy (ft·lbs)
    pub impact_energy_ftlbs: f64,
    /// Energy at departure (ft·lbs)
    pub muzzle_energy_ftlbs: f64,
    /// Miller gyroscopic stability factor; 0 when spin drift is disabled
    pub stability_factor: f64,
    /// Stopping condition that ended the flight
    pub termination: TerminationReason,
}

/// Reduce the sampled sequence into summary statistics.
///
/// Pure reduction. Returns `None` for an empty sequence, which the solver
/// treats as an invariant violation; the solver always records the initial
/// state before stepping, so a non-empty sequence is guaranteed in practice.
pub(crate) fn aggregate(
    points: Vec<TrajectoryPoint>,
    termination: TerminationReason,
    muzzle_energy_ftlbs: f64,
    stability_factor: f64,
) -> Option<TrajectoryResult> {
    let last = points.last()?;
    let max_height_yd = points
        .iter()
        .map(|p| p.vertical_offset_yd)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(TrajectoryResult {
        max_range_yd: last.downrange_yd,
        max_height_yd,
        time_of_flight_s: last.time_s,
        impact_velocity_fps: last.velocity_fps,
        impact_energy_ftlbs: last.energy_ftlbs,
        muzzle_energy_ftlbs,
        stability_factor,
        termination,
        points,
    })
}
