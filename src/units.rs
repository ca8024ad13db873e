//! Imperial/SI unit conversions.
//!
//! Inputs and outputs are imperial (grains, fps, inches, yards, °F, inHg);
//! all physics runs in SI. Every function here is a pure scaling with no
//! state, so the solver can convert at the boundary and nowhere else.

/// Grains to kilograms
pub const GRAINS_TO_KG: f64 = 0.000_064_798_91;

/// Feet per second to meters per second
pub const FPS_TO_MPS: f64 = 0.3048;

/// Meters per second to feet per second
pub const MPS_TO_FPS: f64 = 1.0 / FPS_TO_MPS;

/// Inches to meters
pub const INCHES_TO_METERS: f64 = 0.0254;

/// Yards to meters
pub const YARDS_TO_METERS: f64 = 0.9144;

/// Meters to yards
pub const METERS_TO_YARDS: f64 = 1.0 / YARDS_TO_METERS;

/// Feet to meters
pub const FEET_TO_METERS: f64 = 0.3048;

/// Miles per hour to meters per second
pub const MPH_TO_MPS: f64 = 0.44704;

/// Inches of mercury to hectopascals
pub const INHG_TO_HPA: f64 = 33.863_89;

/// Joules to foot-pounds
pub const JOULES_TO_FTLBS: f64 = 0.737_562_149;

#[inline]
pub fn grains_to_kg(grains: f64) -> f64 {
    grains * GRAINS_TO_KG
}

#[inline]
pub fn fps_to_mps(fps: f64) -> f64 {
    fps * FPS_TO_MPS
}

#[inline]
pub fn mps_to_fps(mps: f64) -> f64 {
    mps * MPS_TO_FPS
}

#[inline]
pub fn inches_to_meters(inches: f64) -> f64 {
    inches * INCHES_TO_METERS
}

#[inline]
pub fn yards_to_meters(yards: f64) -> f64 {
    yards * YARDS_TO_METERS
}

#[inline]
pub fn meters_to_yards(meters: f64) -> f64 {
    meters * METERS_TO_YARDS
}

#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FEET_TO_METERS
}

#[inline]
pub fn mph_to_mps(mph: f64) -> f64 {
    mph * MPH_TO_MPS
}

#[inline]
pub fn fahrenheit_to_celsius(deg_f: f64) -> f64 {
    (deg_f - 32.0) * 5.0 / 9.0
}

#[inline]
pub fn inhg_to_hpa(inhg: f64) -> f64 {
    inhg * INHG_TO_HPA
}

#[inline]
pub fn joules_to_ftlbs(joules: f64) -> f64 {
    joules * JOULES_TO_FTLBS
}
