//! Terminal states of a fit.

use serde::{Deserialize, Serialize};

/// How a fit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitStatus {
    /// The residual error reached the tolerance.
    Converged,

    /// The refinement budget ran out before the tolerance was reached.
    BudgetExhausted,

    /// A refinement step produced NaN; the last valid parameters were kept.
    NumericFailureRecovered,
}

impl FitStatus {
    /// Returns true if the fit reached the error tolerance.
    pub fn is_converged(&self) -> bool {
        matches!(self, FitStatus::Converged)
    }

    /// Returns a description of the status.
    pub fn description(&self) -> &'static str {
        match self {
            FitStatus::Converged => "Converged: error within tolerance",
            FitStatus::BudgetExhausted => "Terminated: maximum iterations reached",
            FitStatus::NumericFailureRecovered => {
                "Terminated: numerical error, last valid parameters kept"
            }
        }
    }
}
