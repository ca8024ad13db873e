//! Reference drag curves and coefficient lookup.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_DIVISION_THRESHOLD;
use crate::drag_tables::{G1_TABLE, G7_TABLE, G8_TABLE};

/// Standard reference drag curve a ballistic coefficient is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragModel {
    G1,
    G7,
    G8,
}

impl DragModel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "G1" => Some(DragModel::G1),
            "G7" => Some(DragModel::G7),
            "G8" => Some(DragModel::G8),
            _ => None,
        }
    }

    fn table(&self) -> &'static DragTable {
        match self {
            DragModel::G1 => &G1_TABLE,
            DragModel::G7 => &G7_TABLE,
            DragModel::G8 => &G8_TABLE,
        }
    }

    /// Drag coefficient of the reference projectile at the given Mach number.
    ///
    /// Total over all finite, non-negative Mach inputs: values outside the
    /// table are clamped to the boundary coefficient rather than
    /// extrapolated, so very low or very high speeds never produce a
    /// runaway drag force.
    pub fn drag_coefficient(&self, mach: f64) -> f64 {
        self.table().lookup(mach)
    }
}

impl std::fmt::Display for DragModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A fixed, sorted Mach -> Cd table.
#[derive(Debug, Clone)]
pub struct DragTable {
    mach_values: Vec<f64>,
    cd_values: Vec<f64>,
}

impl DragTable {
    /// Build from (Mach, Cd) pairs. The pairs must already be sorted by
    /// Mach; the embedded reference tables are.
    pub(crate) fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        debug_assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
        Self {
            mach_values: pairs.iter().map(|(m, _)| *m).collect(),
            cd_values: pairs.iter().map(|(_, cd)| *cd).collect(),
        }
    }

    pub(crate) fn mach_values(&self) -> &[f64] {
        &self.mach_values
    }

    pub(crate) fn cd_values(&self) -> &[f64] {
        &self.cd_values
    }

    /// Interpolated lookup, clamped at the table bounds.
    pub fn lookup(&self, mach: f64) -> f64 {
        let n = self.mach_values.len();
        debug_assert!(n >= 2);

        if mach <= self.mach_values[0] {
            return self.cd_values[0];
        }
        if mach >= self.mach_values[n - 1] {
            return self.cd_values[n - 1];
        }

        // Binary search for the bracketing segment
        let idx = match self
            .mach_values
            .binary_search_by(|m| m.partial_cmp(&mach).unwrap_or(std::cmp::Ordering::Less))
        {
            Ok(exact) => return self.cd_values[exact],
            Err(insert) => insert - 1,
        };

        let x0 = self.mach_values[idx];
        let x1 = self.mach_values[idx + 1];
        let y0 = self.cd_values[idx];
        let y1 = self.cd_values[idx + 1];

        if (x1 - x0).abs() < MIN_DIVISION_THRESHOLD {
            return y0;
        }
        let t = (mach - x0) / (x1 - x0);
        y0 + t * (y1 - y0)
    }
}
