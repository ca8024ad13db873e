//! The trajectory integration engine.
//!
//! One `TrajectorySolver` performs one solve: a sighting pre-pass, then an
//! RK4 time-stepping loop that advances the projectile state under gravity,
//! table-driven drag on the wind-relative velocity, and a simplified
//! spin-drift lateral term, recording a sample per step until a stopping
//! condition fires.
//!
//! Frame: +z downrange along the line of sight, +y the perpendicular offset
//! from the line of sight in the vertical plane, +x lateral to the
//! shooter's right. For an inclined shot the whole frame tilts with the
//! sight line and gravity picks up an along-axis component; the vertical
//! offset a shooter dials for is then the y coordinate directly.

use nalgebra::Vector3;

use crate::atmosphere::LocalAtmosphere;
use crate::constants::{
    DEFAULT_MAX_RANGE_YD, DEFAULT_MAX_TIME_S, DEFAULT_TIME_STEP_S, G_ACCEL_MPS2, GROUND_BOUND_M,
    MIN_VELOCITY_THRESHOLD, SPIN_DRIFT_MIN_TIME_S,
};
use crate::error::BallisticsError;
use crate::inputs::{AtmosphericConditions, BallisticInputs, WindConditions};
use crate::stability::{spin_drift_m, stability_factor};
use crate::summary::{aggregate, TerminationReason, TrajectoryPoint, TrajectoryResult};
use crate::units;
use crate::wind::wind_vector;
use crate::zeroing::solve_zero_angle;
use crate::DragModel;

/// Solve parameters converted to SI once, shared by the sighting pre-pass
/// and the main integration.
#[derive(Debug, Clone)]
pub(crate) struct SolveParams {
    pub mass_kg: f64,
    pub area_m2: f64,
    pub ballistic_coefficient: f64,
    pub drag_model: DragModel,
    pub muzzle_velocity_mps: f64,
    pub sight_height_m: f64,
    pub zero_distance_m: f64,
    pub shooting_angle_rad: f64,
    /// Miller stability factor; 0 disables the spin-drift term
    pub stability: f64,
    pub is_twist_right: bool,
}

impl SolveParams {
    pub(crate) fn from_inputs(inputs: &BallisticInputs, density_ratio: f64) -> Self {
        let diameter_m = units::inches_to_meters(inputs.bullet_diameter_inches);
        let stability = if inputs.twist_rate_inches > 0.0 {
            stability_factor(inputs, density_ratio)
        } else {
            0.0
        };
        Self {
            mass_kg: units::grains_to_kg(inputs.bullet_mass_grains),
            area_m2: std::f64::consts::PI * (diameter_m / 2.0).powi(2),
            ballistic_coefficient: inputs.ballistic_coefficient,
            drag_model: inputs.drag_model,
            muzzle_velocity_mps: units::fps_to_mps(inputs.muzzle_velocity_fps),
            sight_height_m: units::inches_to_meters(inputs.sight_height_inches),
            zero_distance_m: units::yards_to_meters(inputs.zero_distance_yards),
            shooting_angle_rad: inputs.shooting_angle_degrees.to_radians(),
            stability,
            is_twist_right: inputs.is_twist_right,
        }
    }
}

/// Net acceleration on the projectile: gravity, drag opposing the
/// wind-relative velocity, and (when enabled) the spin-drift lateral term.
///
/// The drag deceleration combines the reference-curve coefficient with the
/// ballistic coefficient and local air density:
/// `0.5 · ρ · Cd(M) · A · |v_rel|² / (BC · m)`.
pub(crate) fn net_acceleration(
    velocity: &Vector3<f64>,
    time_s: f64,
    wind: &Vector3<f64>,
    gravity: &Vector3<f64>,
    params: &SolveParams,
    atmosphere: &LocalAtmosphere,
    with_spin: bool,
) -> Vector3<f64> {
    // Wind affects only the aerodynamic force, never gravity.
    let relative = velocity - wind;
    let relative_speed = relative.norm();
    if relative_speed < MIN_VELOCITY_THRESHOLD {
        return *gravity;
    }

    let mach = relative_speed / atmosphere.speed_of_sound_mps;
    let cd = params.drag_model.drag_coefficient(mach);
    let drag_magnitude = 0.5
        * atmosphere.air_density_kg_m3
        * relative_speed
        * relative_speed
        * cd
        * params.area_m2
        / (params.ballistic_coefficient * params.mass_kg);

    let mut acceleration = gravity - relative * (drag_magnitude / relative_speed);

    if with_spin && params.stability > 0.0 && time_s > SPIN_DRIFT_MIN_TIME_S {
        // Recover an equivalent constant acceleration from the empirical
        // displacement curve: d = a·t²/2.
        let drift = spin_drift_m(time_s, params.stability, params.is_twist_right);
        acceleration.x += 2.0 * drift / (time_s * time_s);
    }

    acceleration
}

/// Single-use trajectory solver. Construction validates all inputs and
/// resolves the atmosphere; `solve` runs the sighting pre-pass and the main
/// integration, producing exactly one `TrajectoryResult` or one error.
pub struct TrajectorySolver {
    inputs: BallisticInputs,
    wind: WindConditions,
    atmosphere: LocalAtmosphere,
    max_range_yd: f64,
    max_time_s: f64,
    time_step_s: f64,
}

impl TrajectorySolver {
    /// Bind inputs for one solve. Absent wind means still air; absent
    /// atmospheric conditions mean the ICAO standard atmosphere. Malformed
    /// inputs are rejected here, before any integration step executes.
    pub fn new(
        inputs: BallisticInputs,
        wind: Option<WindConditions>,
        conditions: Option<AtmosphericConditions>,
    ) -> Result<Self, BallisticsError> {
        inputs.validate()?;
        let wind = wind.unwrap_or_default();
        wind.validate()?;
        let atmosphere = LocalAtmosphere::new(&conditions.unwrap_or_default())?;

        Ok(Self {
            inputs,
            wind,
            atmosphere,
            max_range_yd: DEFAULT_MAX_RANGE_YD,
            max_time_s: DEFAULT_MAX_TIME_S,
            time_step_s: DEFAULT_TIME_STEP_S,
        })
    }

    /// Downrange bound (yards) that terminates the flight.
    pub fn set_max_range(&mut self, yards: f64) -> Result<(), BallisticsError> {
        if !yards.is_finite() || yards <= 0.0 {
            return Err(BallisticsError::invalid(
                "max_range_yards",
                format!("must be > 0 (got {yards})"),
            ));
        }
        self.max_range_yd = yards;
        Ok(())
    }

    /// Elapsed-time bound (seconds) that terminates the flight.
    pub fn set_max_time(&mut self, seconds: f64) -> Result<(), BallisticsError> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(BallisticsError::invalid(
                "max_time_seconds",
                format!("must be > 0 (got {seconds})"),
            ));
        }
        self.max_time_s = seconds;
        Ok(())
    }

    /// Integration step (seconds). Steps above ~10 ms under-resolve
    /// high-velocity drag.
    pub fn set_time_step(&mut self, seconds: f64) -> Result<(), BallisticsError> {
        if !seconds.is_finite() || !(1e-6..=0.01).contains(&seconds) {
            return Err(BallisticsError::invalid(
                "time_step_seconds",
                format!("must be within 1e-6..0.01 s (got {seconds})"),
            ));
        }
        self.time_step_s = seconds;
        Ok(())
    }

    /// Run the solve: sighting pre-pass, then RK4 integration to a stopping
    /// condition.
    pub fn solve(&self) -> Result<TrajectoryResult, BallisticsError> {
        let params = SolveParams::from_inputs(&self.inputs, self.atmosphere.density_ratio);

        let zero_angle_rad = solve_zero_angle(&params, &self.atmosphere, self.time_step_s)?;

        // Gravity in the line-of-sight frame: an inclined sight line tilts
        // part of gravity along the range axis.
        let alpha = params.shooting_angle_rad;
        let gravity = Vector3::new(0.0, -G_ACCEL_MPS2 * alpha.cos(), -G_ACCEL_MPS2 * alpha.sin());
        let wind = wind_vector(&self.wind);

        let mut position = Vector3::new(0.0, -params.sight_height_m, 0.0);
        let mut velocity = Vector3::new(
            0.0,
            params.muzzle_velocity_mps * zero_angle_rad.sin(),
            params.muzzle_velocity_mps * zero_angle_rad.cos(),
        );
        let mut time = 0.0;

        let max_range_m = units::yards_to_meters(self.max_range_yd);
        let muzzle_energy_ftlbs = units::joules_to_ftlbs(
            0.5 * params.mass_kg * params.muzzle_velocity_mps * params.muzzle_velocity_mps,
        );

        let estimated_points = (self.max_time_s / self.time_step_s).min(1e6) as usize;
        let mut points: Vec<TrajectoryPoint> = Vec::with_capacity(estimated_points.min(65_536));

        let termination = loop {
            points.push(self.sample(time, &position, &velocity, &params));

            // First stopping condition reached wins.
            let speed = velocity.norm();
            if speed < MIN_VELOCITY_THRESHOLD || velocity.z <= MIN_VELOCITY_THRESHOLD {
                break TerminationReason::VelocityDecayed;
            }
            if position.z >= max_range_m {
                break TerminationReason::MaxRangeReached;
            }
            if time >= self.max_time_s {
                break TerminationReason::MaxTimeReached;
            }
            if position.y <= GROUND_BOUND_M {
                break TerminationReason::GroundImpact;
            }

            let dt = self.time_step_s;
            let acc1 =
                net_acceleration(&velocity, time, &wind, &gravity, &params, &self.atmosphere, true);
            let vel2 = velocity + acc1 * (dt * 0.5);
            let acc2 = net_acceleration(
                &vel2,
                time + dt * 0.5,
                &wind,
                &gravity,
                &params,
                &self.atmosphere,
                true,
            );
            let vel3 = velocity + acc2 * (dt * 0.5);
            let acc3 = net_acceleration(
                &vel3,
                time + dt * 0.5,
                &wind,
                &gravity,
                &params,
                &self.atmosphere,
                true,
            );
            let vel4 = velocity + acc3 * dt;
            let acc4 = net_acceleration(
                &vel4,
                time + dt,
                &wind,
                &gravity,
                &params,
                &self.atmosphere,
                true,
            );

            position += (velocity + vel2 * 2.0 + vel3 * 2.0 + vel4) * (dt / 6.0);
            velocity += (acc1 + acc2 * 2.0 + acc3 * 2.0 + acc4) * (dt / 6.0);
            time += dt;

            if !position.iter().all(|c| c.is_finite()) || !velocity.iter().all(|c| c.is_finite())
            {
                return Err(BallisticsError::NumericalInstability(format!(
                    "non-finite projectile state at t = {time:.4} s"
                )));
            }
        };

        aggregate(points, termination, muzzle_energy_ftlbs, params.stability).ok_or_else(|| {
            BallisticsError::NumericalInstability("no trajectory points generated".into())
        })
    }

    fn sample(
        &self,
        time_s: f64,
        position: &Vector3<f64>,
        velocity: &Vector3<f64>,
        params: &SolveParams,
    ) -> TrajectoryPoint {
        let speed_mps = velocity.norm();
        let energy_j = 0.5 * params.mass_kg * speed_mps * speed_mps;
        TrajectoryPoint {
            time_s,
            downrange_yd: units::meters_to_yards(position.z),
            vertical_offset_yd: units::meters_to_yards(position.y),
            drift_yd: units::meters_to_yards(position.x),
            velocity_fps: units::mps_to_fps(speed_mps),
            mach: speed_mps / self.atmosphere.speed_of_sound_mps,
            energy_ftlbs: units::joules_to_ftlbs(energy_j),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(inputs: BallisticInputs) -> TrajectorySolver {
        TrajectorySolver::new(inputs, None, None).unwrap()
    }

    #[test]
    fn test_invalid_inputs_rejected_at_construction() {
        let inputs = BallisticInputs {
            ballistic_coefficient: -0.1,
            ..Default::default()
        };
        assert!(TrajectorySolver::new(inputs, None, None).is_err());
    }

    #[test]
    fn test_invalid_wind_rejected_at_construction() {
        let wind = WindConditions {
            speed_mph: f64::INFINITY,
            direction_degrees: 0.0,
        };
        assert!(TrajectorySolver::new(BallisticInputs::default(), Some(wind), None).is_err());
    }

    #[test]
    fn test_config_setters_validate() {
        let mut s = solver(BallisticInputs::default());
        assert!(s.set_max_range(-10.0).is_err());
        assert!(s.set_max_time(0.0).is_err());
        assert!(s.set_time_step(0.5).is_err());
        assert!(s.set_max_range(1000.0).is_ok());
        assert!(s.set_time_step(0.002).is_ok());
    }

    #[test]
    fn test_unreachable_zero_distance_fails_the_solve() {
        let s = solver(BallisticInputs {
            zero_distance_yards: 4000.0,
            ..Default::default()
        });
        let err = s.solve().unwrap_err();
        assert!(matches!(err, BallisticsError::NumericalInstability(_)), "{err}");
    }

    #[test]
    fn test_solve_produces_nonempty_ascending_points() {
        let mut s = solver(BallisticInputs::default());
        s.set_max_range(300.0).unwrap();
        let result = s.solve().unwrap();
        assert!(!result.points.is_empty());
        for pair in result.points.windows(2) {
            assert!(pair[1].time_s > pair[0].time_s);
        }
    }

    #[test]
    fn test_first_point_is_departure_state() {
        let mut s = solver(BallisticInputs::default());
        s.set_max_range(200.0).unwrap();
        let result = s.solve().unwrap();
        let first = &result.points[0];
        assert_eq!(first.time_s, 0.0);
        assert_eq!(first.downrange_yd, 0.0);
        // Starts a sight height below the line of sight
        let sight_height_yd = 1.5 / 36.0;
        assert!((first.vertical_offset_yd + sight_height_yd).abs() < 1e-9);
        assert!((first.velocity_fps - 2650.0).abs() < 1e-6);
    }

    #[test]
    fn test_max_range_termination() {
        let mut s = solver(BallisticInputs::default());
        s.set_max_range(200.0).unwrap();
        let result = s.solve().unwrap();
        assert_eq!(result.termination, TerminationReason::MaxRangeReached);
        assert!(result.max_range_yd >= 200.0);
        assert!(result.max_range_yd < 210.0, "overshoot: {}", result.max_range_yd);
    }

    #[test]
    fn test_max_time_termination() {
        let mut s = solver(BallisticInputs::default());
        s.set_max_time(0.05).unwrap();
        let result = s.solve().unwrap();
        assert_eq!(result.termination, TerminationReason::MaxTimeReached);
        assert!(result.time_of_flight_s >= 0.05);
        assert!(result.time_of_flight_s < 0.06);
    }

    #[test]
    fn test_still_air_no_spin_has_zero_drift() {
        let mut s = solver(BallisticInputs {
            twist_rate_inches: 0.0,
            ..Default::default()
        });
        s.set_max_range(500.0).unwrap();
        let result = s.solve().unwrap();
        for p in &result.points {
            assert_eq!(p.drift_yd, 0.0, "drift at {} yd", p.downrange_yd);
        }
    }

    #[test]
    fn test_right_twist_drifts_right_left_twist_drifts_left() {
        let mut right = solver(BallisticInputs::default());
        right.set_max_range(800.0).unwrap();
        let right_drift = right.solve().unwrap().points.last().unwrap().drift_yd;

        let mut left = solver(BallisticInputs {
            is_twist_right: false,
            ..Default::default()
        });
        left.set_max_range(800.0).unwrap();
        let left_drift = left.solve().unwrap().points.last().unwrap().drift_yd;

        assert!(right_drift > 0.0, "right twist drift: {right_drift}");
        assert!(left_drift < 0.0, "left twist drift: {left_drift}");
    }

    #[test]
    fn test_velocity_monotonically_decreasing_in_still_air_flat_fire() {
        let mut s = solver(BallisticInputs::default());
        s.set_max_range(600.0).unwrap();
        let result = s.solve().unwrap();
        for pair in result.points.windows(2) {
            assert!(
                pair[1].velocity_fps <= pair[0].velocity_fps + 1e-9,
                "velocity rose near {} yd",
                pair[0].downrange_yd
            );
        }
    }

    #[test]
    fn test_headwind_shortens_tailwind_lengthens() {
        let head = TrajectorySolver::new(
            BallisticInputs::default(),
            Some(WindConditions {
                speed_mph: 20.0,
                direction_degrees: 0.0,
            }),
            None,
        )
        .unwrap();
        let tail = TrajectorySolver::new(
            BallisticInputs::default(),
            Some(WindConditions {
                speed_mph: 20.0,
                direction_degrees: 180.0,
            }),
            None,
        )
        .unwrap();
        let head_range = head.solve().unwrap().max_range_yd;
        let tail_range = tail.solve().unwrap().max_range_yd;
        assert!(
            tail_range > head_range,
            "tail {tail_range} yd vs head {head_range} yd"
        );
    }
}
