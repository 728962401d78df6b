//! Implementation of the Levenberg-Marquardt fit.
//!
//! The fit runs in two phases. Bracketing searches for a workable damping
//! factor by comparing a step at the current damping against a step at
//! `damping / v`. Refinement then takes steps at that damping until the L1
//! error drops to the tolerance, the iteration budget runs out, or a step
//! produces NaN.
//!
//! Bracketing keeps going while the baseline error is below either candidate
//! error *or* the counter is below `max_iterations`. That condition can both
//! overrun and undercut the budget, and with zero damping and no improving
//! candidate it never becomes false on its own. It is kept as is; a separate
//! ceiling (`FitConfig::bracketing_ceiling`) bounds the overrun. Bracketing
//! also does not guard against NaN.

use log::{debug, trace, warn};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dataset::Dataset;
use crate::error::{LmCurveError, Result};
use crate::model::Model;

use super::config::FitConfig;
use super::convergence::FitStatus;
use super::residual::parameter_error;
use super::step::step;

/// Result of a Levenberg-Marquardt fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Fitted parameter values
    pub parameter_values: Array1<f64>,

    /// Sum of absolute residuals at `parameter_values`
    pub parameter_error: f64,

    /// Number of refinement steps completed
    pub iterations: usize,

    /// Number of damping bracketing iterations
    pub bracketing_steps: usize,

    /// Damping factor used during refinement
    pub damping: f64,

    /// How the fit ended
    pub status: FitStatus,
}

impl FitResult {
    /// Returns true if the error tolerance was reached.
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }

    /// Evaluate the fitted model at the given x values.
    pub fn predict<M: Model>(&self, model: &M, x: &Array1<f64>) -> Array1<f64> {
        model.eval(&self.parameter_values, x)
    }
}

impl fmt::Display for FitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fit Result:")?;
        writeln!(f, "  Status: {}", self.status.description())?;
        writeln!(f, "  Error: {:.6e}", self.parameter_error)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Bracketing steps: {}", self.bracketing_steps)?;
        writeln!(f, "  Damping: {:.6e}", self.damping)?;
        writeln!(f, "  Parameters: {:?}", self.parameter_values)?;
        Ok(())
    }
}

/// The Levenberg-Marquardt fitter.
#[derive(Debug, Clone, Default)]
pub struct LevenbergMarquardt {
    /// Configuration options
    config: FitConfig,
}

impl LevenbergMarquardt {
    /// Create a new fitter with default configuration.
    ///
    /// Initial values must still be set before fitting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new fitter with the given configuration.
    pub fn with_config(config: FitConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Set the initial damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the finite-difference step.
    pub fn with_gradient_difference(mut self, gradient_difference: f64) -> Self {
        self.config.gradient_difference = gradient_difference;
        self
    }

    /// Set the starting parameter vector.
    pub fn with_initial_values(mut self, initial_values: Array1<f64>) -> Self {
        self.config.initial_values = Some(initial_values);
        self
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the error tolerance.
    pub fn with_error_tolerance(mut self, error_tolerance: f64) -> Self {
        self.config.error_tolerance = error_tolerance;
        self
    }

    /// Set the damping adjustment factor.
    pub fn with_v(mut self, v: f64) -> Self {
        self.config.v = v;
        self
    }

    /// Set the cap on damping bracketing iterations.
    pub fn with_bracketing_ceiling(mut self, ceiling: usize) -> Self {
        self.config.bracketing_ceiling = Some(ceiling);
        self
    }

    /// Fit the model to the data.
    ///
    /// # Arguments
    ///
    /// * `data` - The samples to fit
    /// * `model` - The model whose parameters are fitted
    ///
    /// # Returns
    ///
    /// * `Result<FitResult>` - The fit result, or a configuration error
    pub fn fit<M: Model>(&self, data: &Dataset, model: &M) -> Result<FitResult> {
        fit(data, model, &self.config)
    }
}

/// Fit a model to data with the Levenberg-Marquardt method.
///
/// Numerical trouble during the fit is not an error: the result carries the
/// last valid parameters and `FitStatus::NumericFailureRecovered`.
///
/// # Errors
///
/// * `LmCurveError::MissingInitialValues` or `LmCurveError::InvalidConfig`
///   if the configuration does not validate
/// * `LmCurveError::DimensionMismatch` if the model declares a parameter
///   count different from the length of the initial values
pub fn fit<M: Model>(data: &Dataset, model: &M, config: &FitConfig) -> Result<FitResult> {
    let initial_values = config.validate()?;
    if let Some(expected) = model.parameter_count() {
        if expected != initial_values.len() {
            return Err(LmCurveError::DimensionMismatch(format!(
                "Expected {} parameters, got {}",
                expected,
                initial_values.len()
            )));
        }
    }

    let gradient_difference = config.gradient_difference;
    let v = config.v;
    let max_iterations = config.max_iterations;

    let mut parameters = initial_values.clone();
    let mut error = parameter_error(data, &parameters, model);
    let mut damping = config.damping;
    debug!("initial error {:.6e} at {:?}", error, parameters);

    // Damping bracketing
    let ceiling = config.effective_bracketing_ceiling();
    let mut bracketing_steps = 0;
    loop {
        let step_d = step(data, &parameters, damping, gradient_difference, model);
        let error_d = parameter_error(data, &step_d, model);
        let step_v = step(data, &parameters, damping / v, gradient_difference, model);
        let error_v = parameter_error(data, &step_v, model);
        trace!(
            "bracketing {}: damping {:.3e}, error {:.6e}, error_d {:.6e}, error_v {:.6e}",
            bracketing_steps,
            damping,
            error,
            error_d,
            error_v
        );

        if error > error_d || error > error_v {
            if error_d > error_v {
                parameters = step_v;
                damping /= v;
            } else {
                break;
            }
        } else {
            damping *= v;
        }
        bracketing_steps += 1;

        if !(error < error_d || error < error_v || bracketing_steps < max_iterations) {
            break;
        }
        if bracketing_steps >= ceiling {
            warn!(
                "damping bracketing stopped at ceiling of {} iterations, damping {:.3e}",
                ceiling, damping
            );
            break;
        }
    }
    if parameters.iter().any(|p| !p.is_finite()) || !damping.is_finite() {
        warn!(
            "damping bracketing left non-finite state: damping {}, parameters {:?}",
            damping, parameters
        );
    }

    // Refinement
    let mut converged = error <= config.error_tolerance;
    let mut iterations = 0;
    while iterations < max_iterations && !converged {
        let candidate = step(data, &parameters, damping, gradient_difference, model);
        error = parameter_error(data, &candidate, model);
        if error.is_nan() {
            warn!(
                "refinement step {} produced NaN, keeping last valid parameters",
                iterations + 1
            );
            break;
        }

        parameters = candidate;
        converged = error <= config.error_tolerance;
        iterations += 1;
        debug!("iteration {}: error {:.6e}", iterations, error);
    }

    let status = if error.is_nan() {
        error = parameter_error(data, &parameters, model);
        FitStatus::NumericFailureRecovered
    } else if converged {
        FitStatus::Converged
    } else {
        FitStatus::BudgetExhausted
    };
    debug!(
        "fit finished after {} iterations: {} (error {:.6e})",
        iterations,
        status.description(),
        error
    );

    Ok(FitResult {
        parameter_values: parameters,
        parameter_error: error,
        iterations,
        bracketing_steps,
        damping,
        status,
    })
}
