//! Atmospheric density and speed-of-sound model.
//!
//! Converts station conditions (temperature, pressure, humidity, altitude)
//! into the air-density ratio and local speed of sound the integrator needs.
//! The model applies a standard barometric pressure-lapse correction for
//! altitude, then a two-gas humid-air density formula: water vapor is less
//! dense than dry air, so humidity slightly reduces effective density.
//! Conditions are assumed uniform over one flight.

use crate::constants::{
    G_ACCEL_MPS2, GAMMA, LAPSE_RATE_K_PER_M, R_DRY, R_VAPOR, STANDARD_AIR_DENSITY,
};
use crate::error::BallisticsError;
use crate::inputs::AtmosphericConditions;
use crate::units;

/// Resolved local atmosphere, computed once per solve.
#[derive(Debug, Clone, Copy)]
pub struct LocalAtmosphere {
    /// Absolute air density (kg/m³)
    pub air_density_kg_m3: f64,
    /// Density relative to the ICAO sea-level standard
    pub density_ratio: f64,
    /// Local speed of sound (m/s)
    pub speed_of_sound_mps: f64,
}

impl LocalAtmosphere {
    /// Resolve station conditions into density and speed of sound.
    ///
    /// Rejects degenerate inputs (non-positive pressure, humidity outside
    /// 0-100, temperature below absolute zero) here rather than letting a
    /// NaN reach the integrator.
    pub fn new(conditions: &AtmosphericConditions) -> Result<Self, BallisticsError> {
        conditions.validate()?;

        let temp_c = units::fahrenheit_to_celsius(conditions.temperature_f);
        let temp_k = temp_c + 273.15;
        let station_pressure_hpa = units::inhg_to_hpa(conditions.pressure_inhg);
        let altitude_m = units::feet_to_meters(conditions.altitude_feet);

        // Barometric pressure-lapse correction for altitude, referenced to
        // the supplied temperature.
        let pressure_hpa = pressure_at_altitude(station_pressure_hpa, temp_k, altitude_m);
        let pressure_pa = pressure_hpa * 100.0;

        // Partial pressures of water vapor and dry air.
        let vapor_pressure_pa =
            conditions.humidity_percent / 100.0 * saturation_vapor_pressure_hpa(temp_c) * 100.0;
        let vapor_pressure_pa = vapor_pressure_pa.min(pressure_pa);
        let dry_pressure_pa = pressure_pa - vapor_pressure_pa;

        let air_density_kg_m3 =
            dry_pressure_pa / (R_DRY * temp_k) + vapor_pressure_pa / (R_VAPOR * temp_k);

        // Speed of sound in moist air: humidity lowers the effective heat
        // capacity ratio but raises the gas constant, for a small net
        // increase over dry air.
        let mole_fraction_vapor = if pressure_pa > 0.0 {
            vapor_pressure_pa / pressure_pa
        } else {
            0.0
        };
        let gamma_moist = GAMMA * (1.0 - 0.11 * mole_fraction_vapor);
        let r_moist = R_DRY * (1.0 + 0.6078 * mole_fraction_vapor);
        let speed_of_sound_mps = (gamma_moist * r_moist * temp_k).sqrt();

        let atmosphere = Self {
            air_density_kg_m3,
            density_ratio: air_density_kg_m3 / STANDARD_AIR_DENSITY,
            speed_of_sound_mps,
        };

        if !atmosphere.air_density_kg_m3.is_finite() || !atmosphere.speed_of_sound_mps.is_finite() {
            return Err(BallisticsError::NumericalInstability(format!(
                "atmosphere model produced non-finite values for {conditions:?}"
            )));
        }
        Ok(atmosphere)
    }

    /// The ICAO standard atmosphere used when no conditions are supplied.
    pub fn standard() -> Self {
        // Default conditions always validate
        Self::new(&AtmosphericConditions::default())
            .unwrap_or(Self {
                air_density_kg_m3: STANDARD_AIR_DENSITY,
                density_ratio: 1.0,
                speed_of_sound_mps: 340.29,
            })
    }
}

/// Barometric formula with the standard tropospheric lapse rate.
fn pressure_at_altitude(station_pressure_hpa: f64, station_temp_k: f64, altitude_m: f64) -> f64 {
    if altitude_m.abs() < 1e-9 {
        return station_pressure_hpa;
    }
    let temp_ratio = 1.0 + LAPSE_RATE_K_PER_M * altitude_m / station_temp_k;
    // Altitudes past the point where the lapse extrapolation breaks down are
    // outside the model's envelope; clamp instead of producing NaN.
    let temp_ratio = temp_ratio.max(0.05);
    station_pressure_hpa * temp_ratio.powf(-G_ACCEL_MPS2 / (LAPSE_RATE_K_PER_M * R_DRY))
}

/// Arden Buck saturation vapor pressure (hPa) over water or ice.
fn saturation_vapor_pressure_hpa(temp_c: f64) -> f64 {
    if temp_c >= 0.0 {
        6.1121 * ((18.678 - temp_c / 234.5) * (temp_c / (257.14 + temp_c))).exp()
    } else {
        6.1115 * ((23.036 - temp_c / 333.7) * (temp_c / (279.82 + temp_c))).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_atmosphere() {
        let atmo = LocalAtmosphere::standard();
        assert!((atmo.air_density_kg_m3 - 1.225).abs() < 0.01, "{}", atmo.air_density_kg_m3);
        assert!((atmo.density_ratio - 1.0).abs() < 0.01);
        assert!((atmo.speed_of_sound_mps - 340.3).abs() < 1.0, "{}", atmo.speed_of_sound_mps);
    }

    #[test]
    fn test_humidity_reduces_density() {
        let dry = LocalAtmosphere::new(&AtmosphericConditions {
            humidity_percent: 0.0,
            temperature_f: 86.0,
            ..Default::default()
        })
        .unwrap();
        let humid = LocalAtmosphere::new(&AtmosphericConditions {
            humidity_percent: 90.0,
            temperature_f: 86.0,
            ..Default::default()
        })
        .unwrap();
        assert!(humid.air_density_kg_m3 < dry.air_density_kg_m3);
        // and slightly raises the speed of sound
        assert!(humid.speed_of_sound_mps > dry.speed_of_sound_mps);
    }

    #[test]
    fn test_altitude_reduces_density() {
        let sea_level = LocalAtmosphere::new(&AtmosphericConditions::default()).unwrap();
        let high = LocalAtmosphere::new(&AtmosphericConditions {
            altitude_feet: 10_000.0,
            ..Default::default()
        })
        .unwrap();
        assert!(high.air_density_kg_m3 < sea_level.air_density_kg_m3);
        assert!(high.density_ratio < 0.85, "ratio at 10k ft: {}", high.density_ratio);
    }

    #[test]
    fn test_below_sea_level_increases_density() {
        let sea_level = LocalAtmosphere::new(&AtmosphericConditions::default()).unwrap();
        let below = LocalAtmosphere::new(&AtmosphericConditions {
            altitude_feet: -280.0,
            ..Default::default()
        })
        .unwrap();
        assert!(below.air_density_kg_m3 > sea_level.air_density_kg_m3);
    }

    #[test]
    fn test_cold_air_is_denser() {
        let cold = LocalAtmosphere::new(&AtmosphericConditions {
            temperature_f: 0.0,
            ..Default::default()
        })
        .unwrap();
        let hot = LocalAtmosphere::new(&AtmosphericConditions {
            temperature_f: 100.0,
            ..Default::default()
        })
        .unwrap();
        assert!(cold.air_density_kg_m3 > hot.air_density_kg_m3);
        // Speed of sound rises with temperature
        assert!(hot.speed_of_sound_mps > cold.speed_of_sound_mps);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(LocalAtmosphere::new(&AtmosphericConditions {
            pressure_inhg: 0.0,
            ..Default::default()
        })
        .is_err());
        assert!(LocalAtmosphere::new(&AtmosphericConditions {
            humidity_percent: 150.0,
            ..Default::default()
        })
        .is_err());
        assert!(LocalAtmosphere::new(&AtmosphericConditions {
            temperature_f: -460.0,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_saturation_vapor_pressure_anchor() {
        // ~23.4 hPa at 20 °C
        let es = saturation_vapor_pressure_hpa(20.0);
        assert!((es - 23.4).abs() < 0.5, "es(20C) = {es}");
        // ~6.1 hPa at 0 °C from either branch
        assert!((saturation_vapor_pressure_hpa(0.0) - 6.11).abs() < 0.05);
    }
}
