//! Exponential model for fitting.

use crate::model::Model;
use ndarray::Array1;

/// An exponential model for fitting exponential decay or growth
///
/// The exponential function is defined as:
///
/// f(x) = amplitude * exp(-x/decay) + baseline
///
/// Where:
/// - amplitude: the amplitude of the exponential
/// - decay: the decay constant (positive for decay, negative for growth)
/// - baseline: the baseline offset
///
/// A zero `decay` yields NaN or infinite output, which the fitter treats as
/// a failed step.
#[derive(Debug, Clone, Default)]
pub struct ExponentialModel {
    prefix: String,
}

impl ExponentialModel {
    /// Create a new exponential model with the specified parameter prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl Model for ExponentialModel {
    fn build(&self, params: &Array1<f64>) -> impl Fn(f64) -> f64 + use<> {
        let (amplitude, decay, baseline) = (params[0], params[1], params[2]);
        move |x| amplitude * f64::exp(-x / decay) + baseline
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(3)
    }

    fn parameter_names(&self) -> Vec<String> {
        ["amplitude", "decay", "baseline"]
            .iter()
            .map(|name| format!("{}{}", self.prefix, name))
            .collect()
    }
}
