//! Point-mass exterior ballistics.
//!
//! Computes small-arms trajectories from departure to a stopping condition:
//! standard-curve drag (G1/G7/G8) scaled by ballistic coefficient, a local
//! atmosphere built from field conditions, constant wind, a simplified
//! spin-drift term, and an automatic sighting pre-pass so outputs are
//! relative to the line of sight.
//!
//! ```no_run
//! use exterior_ballistics::{BallisticInputs, TrajectorySolver};
//!
//! let solver = TrajectorySolver::new(BallisticInputs::default(), None, None)?;
//! let result = solver.solve()?;
//! println!(
//!     "{:.2} s to {:.0} yd, impact {:.0} fps",
//!     result.time_of_flight_s, result.max_range_yd, result.impact_velocity_fps
//! );
//! # Ok::<(), exterior_ballistics::BallisticsError>(())
//! ```

pub mod atmosphere;
pub mod constants;
pub mod drag;
mod drag_tables;
pub mod error;
pub mod inputs;
pub mod solver;
pub mod stability;
pub mod summary;
pub mod units;
pub mod wind;
mod zeroing;

pub use atmosphere::LocalAtmosphere;
pub use drag::DragModel;
pub use error::BallisticsError;
pub use inputs::{AtmosphericConditions, BallisticInputs, WindConditions};
pub use solver::TrajectorySolver;
pub use summary::{TerminationReason, TrajectoryPoint, TrajectoryResult};
