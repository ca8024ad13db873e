use thiserror::Error;

/// Errors returned by input validation and the trajectory solver.
///
/// Runtime bounds (max range, max time, ground impact) are normal
/// termination paths, not errors; see
/// [`TerminationReason`](crate::summary::TerminationReason).
#[derive(Debug, Error)]
pub enum BallisticsError {
    /// An input field is out of range. Reported per field with the violated
    /// bound so the caller can correct the request.
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// A non-finite value appeared during integration, or the sighting
    /// adjustment failed to converge within its iteration budget.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}

impl BallisticsError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BallisticsError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
