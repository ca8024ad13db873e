//! Sighting adjustment: solve the bore angle for the requested zero distance.
//!
//! The sight line sits above (or below) the bore axis, so the bore must be
//! inclined until the trajectory crosses the line of sight at the zero
//! distance. This is a bounded bisection over the bore angle, run as a
//! separate pre-pass before the main integration: each candidate angle is
//! integrated flat (no wind, no spin, level gravity) out to the zero range
//! and the line-of-sight miss distance drives the bracket.

use nalgebra::Vector3;

use crate::atmosphere::LocalAtmosphere;
use crate::constants::{
    G_ACCEL_MPS2, MIN_VELOCITY_THRESHOLD, ZERO_ANGLE_BRACKET_RAD, ZERO_FINDING_MAX_ITER,
    ZERO_FINDING_TOLERANCE_M,
};
use crate::error::BallisticsError;
use crate::solver::{net_acceleration, SolveParams};

/// Bore angle above the line of sight (radians) that zeroes the sights at
/// `params.zero_distance_m`. A zero distance of 0 skips the solve.
pub(crate) fn solve_zero_angle(
    params: &SolveParams,
    atmosphere: &LocalAtmosphere,
    time_step_s: f64,
) -> Result<f64, BallisticsError> {
    if params.zero_distance_m <= 0.0 {
        return Ok(0.0);
    }

    let mut low = -ZERO_ANGLE_BRACKET_RAD;
    let mut high = ZERO_ANGLE_BRACKET_RAD;

    for _ in 0..ZERO_FINDING_MAX_ITER {
        let mid = 0.5 * (low + high);

        match offset_at_zero_range(mid, params, atmosphere, time_step_s) {
            Some(miss_m) => {
                if miss_m.abs() < ZERO_FINDING_TOLERANCE_M {
                    return Ok(mid);
                }
                if miss_m > 0.0 {
                    high = mid;
                } else {
                    low = mid;
                }
            }
            // Trajectory never reached the zero range; aim higher.
            None => low = mid,
        }

        // A collapsed bracket only counts as converged if the midpoint
        // actually lands within tolerance; an unreachable zero distance
        // collapses the bracket without ever crossing the line of sight.
        if (high - low).abs() < 1e-9 {
            let mid = 0.5 * (low + high);
            if let Some(miss_m) = offset_at_zero_range(mid, params, atmosphere, time_step_s) {
                if miss_m.abs() < ZERO_FINDING_TOLERANCE_M {
                    return Ok(mid);
                }
            }
            break;
        }
    }

    Err(BallisticsError::NumericalInstability(format!(
        "sighting adjustment did not converge for zero distance {:.1} m",
        params.zero_distance_m
    )))
}

/// Miss distance above (+) or below (-) the line of sight at the zero range,
/// or `None` if the trajectory stops short.
fn offset_at_zero_range(
    bore_angle_rad: f64,
    params: &SolveParams,
    atmosphere: &LocalAtmosphere,
    time_step_s: f64,
) -> Option<f64> {
    let gravity = Vector3::new(0.0, -G_ACCEL_MPS2, 0.0);
    let wind = Vector3::zeros();

    let mut position = Vector3::new(0.0, -params.sight_height_m, 0.0);
    let mut velocity = Vector3::new(
        0.0,
        params.muzzle_velocity_mps * bore_angle_rad.sin(),
        params.muzzle_velocity_mps * bore_angle_rad.cos(),
    );
    let mut time = 0.0;

    // Hard cap so a pathological candidate angle cannot loop forever.
    let max_steps = (10.0 / time_step_s).ceil() as usize;

    for _ in 0..max_steps {
        let prev = position;

        let dt = time_step_s;
        let acc1 = net_acceleration(&velocity, time, &wind, &gravity, params, atmosphere, false);
        let vel2 = velocity + acc1 * (dt * 0.5);
        let acc2 = net_acceleration(&vel2, time, &wind, &gravity, params, atmosphere, false);
        let vel3 = velocity + acc2 * (dt * 0.5);
        let acc3 = net_acceleration(&vel3, time, &wind, &gravity, params, atmosphere, false);
        let vel4 = velocity + acc3 * dt;
        let acc4 = net_acceleration(&vel4, time, &wind, &gravity, params, atmosphere, false);

        position += (velocity + vel2 * 2.0 + vel3 * 2.0 + vel4) * (dt / 6.0);
        velocity += (acc1 + acc2 * 2.0 + acc3 * 2.0 + acc4) * (dt / 6.0);
        time += dt;

        if !position.iter().all(|c| c.is_finite()) || !velocity.iter().all(|c| c.is_finite()) {
            return None;
        }

        if position.z >= params.zero_distance_m {
            // Linear interpolation across the crossing step
            let span = position.z - prev.z;
            if span.abs() < f64::EPSILON {
                return Some(position.y);
            }
            let t = (params.zero_distance_m - prev.z) / span;
            return Some(prev.y + t * (position.y - prev.y));
        }

        if velocity.z <= MIN_VELOCITY_THRESHOLD {
            return None;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TIME_STEP_S;
    use crate::inputs::{AtmosphericConditions, BallisticInputs};

    fn params() -> SolveParams {
        SolveParams::from_inputs(&BallisticInputs::default(), 1.0)
    }

    fn standard() -> LocalAtmosphere {
        LocalAtmosphere::new(&AtmosphericConditions::default()).unwrap()
    }

    #[test]
    fn test_zero_distance_zero_skips_solve() {
        let mut p = params();
        p.zero_distance_m = 0.0;
        let angle = solve_zero_angle(&p, &standard(), DEFAULT_TIME_STEP_S).unwrap();
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_zero_angle_is_small_and_positive() {
        // With the sight above the bore and a 100 yd zero, the bore points
        // slightly up: fractions of a degree.
        let angle = solve_zero_angle(&params(), &standard(), DEFAULT_TIME_STEP_S).unwrap();
        assert!(angle > 0.0, "zero angle {angle}");
        assert!(angle < 0.02, "zero angle {angle} rad should be a few mrad");
    }

    #[test]
    fn test_solved_angle_crosses_los_at_zero_range() {
        let p = params();
        let atmo = standard();
        let angle = solve_zero_angle(&p, &atmo, DEFAULT_TIME_STEP_S).unwrap();
        let miss = offset_at_zero_range(angle, &p, &atmo, DEFAULT_TIME_STEP_S).unwrap();
        assert!(miss.abs() < 2.0 * ZERO_FINDING_TOLERANCE_M, "miss = {miss} m");
    }

    #[test]
    fn test_longer_zero_needs_more_elevation() {
        let atmo = standard();
        let mut near = params();
        near.zero_distance_m = 91.44;
        let mut far = params();
        far.zero_distance_m = 548.64; // 600 yd
        let near_angle = solve_zero_angle(&near, &atmo, DEFAULT_TIME_STEP_S).unwrap();
        let far_angle = solve_zero_angle(&far, &atmo, DEFAULT_TIME_STEP_S).unwrap();
        assert!(far_angle > near_angle);
    }

    #[test]
    fn test_unreachable_zero_distance_is_an_error() {
        // The trajectory falls away long before 4000 yd, so no bore angle
        // inside the bracket can satisfy the zero; the solve must report
        // non-convergence rather than hand back a bracket-edge angle.
        let mut p = params();
        p.zero_distance_m = 3657.6; // 4000 yd
        let result = solve_zero_angle(&p, &standard(), DEFAULT_TIME_STEP_S);
        assert!(matches!(
            result,
            Err(BallisticsError::NumericalInstability(_))
        ));
    }

    #[test]
    fn test_under_bore_sight_zeroes_downward() {
        let atmo = standard();
        let mut p = params();
        p.sight_height_m = -0.03;
        p.zero_distance_m = 45.72; // 50 yd, short enough that drop < sight offset
        let angle = solve_zero_angle(&p, &atmo, DEFAULT_TIME_STEP_S).unwrap();
        assert!(angle < 0.0, "under-bore sight should zero below the bore: {angle}");
    }
}
