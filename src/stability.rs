//! Gyroscopic stability and the simplified spin-drift term.
//!
//! A spin-stabilized bullet's nose rides slightly to the right of its
//! velocity vector (for right-hand twist), producing a small lateral drift
//! that grows with time of flight. Full 6-DOF modeling is out of scope;
//! this module uses the Miller stability formula and a rescaled Litz-form
//! empirical displacement, which captures the effect to well under an MOA
//! at practical ranges.

use crate::inputs::BallisticInputs;
use crate::units::INCHES_TO_METERS;

/// Miller gyroscopic stability factor (SG). Values above ~1.5 indicate a
/// well-stabilized bullet; 0 means no spin (twist rate of zero).
///
/// `density_ratio` is local air density over the sea-level standard; thinner
/// air stabilizes the bullet more for the same spin.
pub fn stability_factor(inputs: &BallisticInputs, density_ratio: f64) -> f64 {
    if inputs.twist_rate_inches <= 0.0
        || inputs.bullet_length_inches <= 0.0
        || inputs.bullet_diameter_inches <= 0.0
    {
        return 0.0;
    }

    const MILLER_CONST: f64 = 30.0;
    const VEL_REF_FPS: f64 = 2800.0;

    let twist_calibers = inputs.twist_rate_inches / inputs.bullet_diameter_inches;
    let length_calibers = inputs.bullet_length_inches / inputs.bullet_diameter_inches;

    let mass_term = MILLER_CONST * inputs.bullet_mass_grains;
    let geom_term = twist_calibers.powi(2)
        * inputs.bullet_diameter_inches.powi(3)
        * length_calibers
        * (1.0 + length_calibers.powi(2));
    if geom_term <= 0.0 {
        return 0.0;
    }

    let velocity_correction = (inputs.muzzle_velocity_fps / VEL_REF_FPS).powf(1.0 / 3.0);
    let density_correction = if density_ratio > 0.0 {
        1.0 / density_ratio
    } else {
        1.0
    };

    (mass_term / geom_term) * velocity_correction * density_correction
}

/// Lateral spin-drift displacement (m) at time `time_s`, signed by twist
/// handedness (+ drifts right).
///
/// Rescaled Litz form: drift_in = 0.075 * (SG + 1.2) * t^1.83. The original
/// 1.25 coefficient overestimates badly at short times of flight.
pub fn spin_drift_m(time_s: f64, stability: f64, is_twist_right: bool) -> f64 {
    if stability <= 0.0 || time_s <= 0.0 {
        return 0.0;
    }
    const SCALING: f64 = 0.075;
    let sign = if is_twist_right { 1.0 } else { -1.0 };
    let drift_inches = sign * SCALING * (stability + 1.2) * time_s.powf(1.83);
    drift_inches * INCHES_TO_METERS
}
