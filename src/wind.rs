//! Wind decomposition relative to the firing line.
//!
//! Direction is where the wind blows *from*, measured off the
//! muzzle-to-target axis: 0° is a pure headwind, 90° blows from the
//! shooter's right. The solver frame puts +z downrange and +x to the
//! shooter's right, so a 90° wind carries the bullet toward -x.

use nalgebra::Vector3;

use crate::inputs::WindConditions;
use crate::units;

/// Wind as a velocity vector in the solver frame (m/s).
///
/// Pure and total over validated conditions; still air maps to the zero
/// vector.
pub fn wind_vector(wind: &WindConditions) -> Vector3<f64> {
    let speed_mps = units::mph_to_mps(wind.speed_mph);
    if speed_mps == 0.0 {
        return Vector3::zeros();
    }
    let direction_rad = wind.normalized_direction_degrees().to_radians();

    // Air moves opposite the direction it blows from.
    Vector3::new(
        -speed_mps * direction_rad.sin(), // cross-axis (+right)
        0.0,
        -speed_mps * direction_rad.cos(), // range-axis (+downrange)
    )
}
