//! Input value structs for a single solve.
//!
//! Fields are imperial, matching the firing-solution data a shooter actually
//! has on hand; the solver converts to SI internally. All validation happens
//! eagerly in `validate()` so the integrator can assume well-formed inputs.

use serde::{Deserialize, Serialize};

use crate::drag::DragModel;
use crate::error::BallisticsError;

/// Projectile and firing parameters, immutable for the duration of one solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallisticInputs {
    /// Ballistic coefficient, relative to `drag_model`
    pub ballistic_coefficient: f64,
    /// Reference drag curve the BC is measured against
    pub drag_model: DragModel,
    /// Bullet mass (grains)
    pub bullet_mass_grains: f64,
    /// Muzzle velocity (fps)
    pub muzzle_velocity_fps: f64,
    /// Bullet diameter (inches)
    pub bullet_diameter_inches: f64,
    /// Bullet length (inches)
    pub bullet_length_inches: f64,
    /// Sight height above the bore (inches); negative for under-bore optics
    pub sight_height_inches: f64,
    /// Range at which the sights are zeroed (yards); 0 skips the sighting solve
    pub zero_distance_yards: f64,
    /// Uphill/downhill shooting angle (degrees, -90..90)
    pub shooting_angle_degrees: f64,
    /// Barrel twist rate (inches per turn); 0 disables spin drift
    pub twist_rate_inches: f64,
    /// Right-hand twist drifts right, left-hand drifts left
    pub is_twist_right: bool,
}

impl Default for BallisticInputs {
    fn default() -> Self {
        // 168 gr .308 match load, typical of the G7-referenced data
        // this engine is usually fed.
        Self {
            ballistic_coefficient: 0.223,
            drag_model: DragModel::G7,
            bullet_mass_grains: 168.0,
            muzzle_velocity_fps: 2650.0,
            bullet_diameter_inches: 0.308,
            bullet_length_inches: 1.2,
            sight_height_inches: 1.5,
            zero_distance_yards: 100.0,
            shooting_angle_degrees: 0.0,
            twist_rate_inches: 11.25,
            is_twist_right: true,
        }
    }
}

impl BallisticInputs {
    /// Check every field against its documented bound.
    pub fn validate(&self) -> Result<(), BallisticsError> {
        require_finite("ballistic_coefficient", self.ballistic_coefficient)?;
        if self.ballistic_coefficient <= 0.0 {
            return Err(BallisticsError::invalid(
                "ballistic_coefficient",
                format!("must be > 0 (got {})", self.ballistic_coefficient),
            ));
        }
        require_positive("bullet_mass_grains", self.bullet_mass_grains)?;
        require_positive("muzzle_velocity_fps", self.muzzle_velocity_fps)?;
        require_positive("bullet_diameter_inches", self.bullet_diameter_inches)?;
        require_positive("bullet_length_inches", self.bullet_length_inches)?;
        require_finite("sight_height_inches", self.sight_height_inches)?;
        require_finite("zero_distance_yards", self.zero_distance_yards)?;
        if self.zero_distance_yards < 0.0 {
            return Err(BallisticsError::invalid(
                "zero_distance_yards",
                format!("must be >= 0 (got {})", self.zero_distance_yards),
            ));
        }
        require_finite("shooting_angle_degrees", self.shooting_angle_degrees)?;
        if !(-90.0..=90.0).contains(&self.shooting_angle_degrees) {
            return Err(BallisticsError::invalid(
                "shooting_angle_degrees",
                format!("must be within -90..90 (got {})", self.shooting_angle_degrees),
            ));
        }
        require_finite("twist_rate_inches", self.twist_rate_inches)?;
        if self.twist_rate_inches < 0.0 {
            return Err(BallisticsError::invalid(
                "twist_rate_inches",
                format!("must be >= 0, 0 meaning no spin drift (got {})", self.twist_rate_inches),
            ));
        }
        Ok(())
    }
}

/// Surface wind, decomposed by the solver into range-axis and cross-axis
/// components. Absent wind conditions mean still air.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindConditions {
    /// Wind speed (mph)
    pub speed_mph: f64,
    /// Direction the wind blows from, measured from the muzzle-to-target
    /// axis (degrees): 0 = headwind, 90 = wind from the shooter's right
    pub direction_degrees: f64,
}

impl Default for WindConditions {
    fn default() -> Self {
        Self {
            speed_mph: 0.0,
            direction_degrees: 0.0,
        }
    }
}

impl WindConditions {
    pub fn validate(&self) -> Result<(), BallisticsError> {
        require_finite("wind_speed_mph", self.speed_mph)?;
        if self.speed_mph < 0.0 {
            return Err(BallisticsError::invalid(
                "wind_speed_mph",
                format!("must be >= 0 (got {})", self.speed_mph),
            ));
        }
        require_finite("wind_direction_degrees", self.direction_degrees)?;
        Ok(())
    }

    /// Direction normalized into [0, 360).
    pub fn normalized_direction_degrees(&self) -> f64 {
        self.direction_degrees.rem_euclid(360.0)
    }
}

/// Station atmospheric conditions. Absent conditions mean the ICAO standard
/// atmosphere: 59 °F, 29.92 inHg, 0 % humidity, sea level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphericConditions {
    /// Temperature (°F)
    pub temperature_f: f64,
    /// Station pressure (inHg)
    pub pressure_inhg: f64,
    /// Relative humidity (0-100 %)
    pub humidity_percent: f64,
    /// Altitude (feet); negative for below-sea-level ranges
    pub altitude_feet: f64,
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self {
            temperature_f: 59.0,
            pressure_inhg: 29.92,
            humidity_percent: 0.0,
            altitude_feet: 0.0,
        }
    }
}

/// Absolute zero in Fahrenheit; temperatures at or below are unphysical.
const ABSOLUTE_ZERO_F: f64 = -459.67;

impl AtmosphericConditions {
    pub fn validate(&self) -> Result<(), BallisticsError> {
        require_finite("temperature_f", self.temperature_f)?;
        if self.temperature_f <= ABSOLUTE_ZERO_F {
            return Err(BallisticsError::invalid(
                "temperature_f",
                format!("must be above absolute zero ({ABSOLUTE_ZERO_F} °F), got {}", self.temperature_f),
            ));
        }
        require_finite("pressure_inhg", self.pressure_inhg)?;
        if self.pressure_inhg <= 0.0 {
            return Err(BallisticsError::invalid(
                "pressure_inhg",
                format!("must be > 0 (got {})", self.pressure_inhg),
            ));
        }
        require_finite("humidity_percent", self.humidity_percent)?;
        if !(0.0..=100.0).contains(&self.humidity_percent) {
            return Err(BallisticsError::invalid(
                "humidity_percent",
                format!("must be within 0..100 (got {})", self.humidity_percent),
            ));
        }
        require_finite("altitude_feet", self.altitude_feet)?;
        Ok(())
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), BallisticsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BallisticsError::invalid(field, format!("must be finite (got {value})")))
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), BallisticsError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(BallisticsError::invalid(field, format!("must be > 0 (got {value})")))
    }
}
