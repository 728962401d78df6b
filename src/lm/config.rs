//! Configuration options for the Levenberg-Marquardt fit.
//!
//! Every field has a default except the initial parameter values, which the
//! caller must supply with the length the model expects.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{LmCurveError, Result};

/// Configuration options for the Levenberg-Marquardt fit.
///
/// Partial JSON objects deserialize with defaults for the missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Initial damping factor. Default: 0.0
    pub damping: f64,

    /// Absolute finite-difference step for every parameter. Default: 0.1
    pub gradient_difference: f64,

    /// Starting parameter vector. Required.
    /// In JSON this is a plain array of numbers.
    #[serde(with = "plain_values")]
    pub initial_values: Option<Array1<f64>>,

    /// Iteration budget for the refinement phase. Default: 100
    pub max_iterations: usize,

    /// Fit succeeds once the L1 residual error is at or below this. Default: 0.01
    pub error_tolerance: f64,

    /// Damping adjustment factor, must exceed 1. Default: 1.5
    pub v: f64,

    /// Hard cap on damping bracketing iterations.
    /// Default: `None`, meaning ten times `max_iterations`.
    pub bracketing_ceiling: Option<usize>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            damping: 0.0,
            gradient_difference: 0.1,
            initial_values: None,
            max_iterations: 100,
            error_tolerance: 0.01,
            v: 1.5,
            bracketing_ceiling: None,
        }
    }
}

impl FitConfig {
    /// Create a configuration with default settings and the given starting point.
    pub fn new(initial_values: Array1<f64>) -> Self {
        Self {
            initial_values: Some(initial_values),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FitConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Set the initial damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the finite-difference step.
    pub fn with_gradient_difference(mut self, gradient_difference: f64) -> Self {
        self.gradient_difference = gradient_difference;
        self
    }

    /// Set the starting parameter vector.
    pub fn with_initial_values(mut self, initial_values: Array1<f64>) -> Self {
        self.initial_values = Some(initial_values);
        self
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the error tolerance.
    pub fn with_error_tolerance(mut self, error_tolerance: f64) -> Self {
        self.error_tolerance = error_tolerance;
        self
    }

    /// Set the damping adjustment factor.
    pub fn with_v(mut self, v: f64) -> Self {
        self.v = v;
        self
    }

    /// Set the cap on damping bracketing iterations.
    pub fn with_bracketing_ceiling(mut self, ceiling: usize) -> Self {
        self.bracketing_ceiling = Some(ceiling);
        self
    }

    /// The bracketing cap in effect.
    pub fn effective_bracketing_ceiling(&self) -> usize {
        self.bracketing_ceiling
            .unwrap_or_else(|| self.max_iterations.saturating_mul(10))
    }

    /// Check the configuration and return the initial values.
    ///
    /// # Errors
    ///
    /// * `LmCurveError::MissingInitialValues` if no starting point is set
    /// * `LmCurveError::InvalidConfig` if a field is out of range
    pub fn validate(&self) -> Result<&Array1<f64>> {
        let initial_values = self
            .initial_values
            .as_ref()
            .ok_or(LmCurveError::MissingInitialValues)?;

        if initial_values.is_empty() {
            return Err(LmCurveError::InvalidConfig(
                "initial_values must contain at least one parameter".to_string(),
            ));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(LmCurveError::InvalidConfig(format!(
                "damping must be finite and non-negative, got {}",
                self.damping
            )));
        }
        if !(self.gradient_difference.is_finite() && self.gradient_difference != 0.0) {
            return Err(LmCurveError::InvalidConfig(format!(
                "gradient_difference must be finite and non-zero, got {}",
                self.gradient_difference
            )));
        }
        if !(self.v.is_finite() && self.v > 1.0) {
            return Err(LmCurveError::InvalidConfig(format!(
                "v must be finite and greater than 1, got {}",
                self.v
            )));
        }
        if self.error_tolerance.is_nan() || self.error_tolerance < 0.0 {
            return Err(LmCurveError::InvalidConfig(format!(
                "error_tolerance must be non-negative, got {}",
                self.error_tolerance
            )));
        }

        Ok(initial_values)
    }
}

/// Serde adapter writing `Option<Array1<f64>>` as a plain list of numbers.
mod plain_values {
    use ndarray::Array1;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(values: &Option<Array1<f64>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        values.as_ref().map(|v| v.to_vec()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Array1<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Vec<f64>>::deserialize(deserializer)?.map(Array1::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_defaults() {
        let config = FitConfig::default();

        assert_eq!(config.damping, 0.0);
        assert_eq!(config.gradient_difference, 0.1);
        assert!(config.initial_values.is_none());
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.error_tolerance, 0.01);
        assert_eq!(config.v, 1.5);
        assert_eq!(config.effective_bracketing_ceiling(), 1000);
    }

    #[test]
    fn test_missing_initial_values() {
        let config = FitConfig::default();
        let result = config.validate();
        assert!(matches!(result, Err(LmCurveError::MissingInitialValues)));
    }

    #[test]
    fn test_invalid_fields() {
        let base = FitConfig::new(array![1.0, 2.0]);
        assert!(base.validate().is_ok());

        let cases = [
            base.clone().with_damping(-1.0),
            base.clone().with_damping(f64::NAN),
            base.clone().with_gradient_difference(0.0),
            base.clone().with_v(1.0),
            base.clone().with_v(0.5),
            base.clone().with_error_tolerance(-0.1),
            base.clone().with_initial_values(Array1::zeros(0)),
        ];
        for config in cases.iter() {
            assert!(
                matches!(config.validate(), Err(LmCurveError::InvalidConfig(_))),
                "expected rejection of {:?}",
                config
            );
        }
    }

    #[test]
    fn test_from_json_partial() {
        let config = FitConfig::from_json(
            r#"{"damping": 1.5, "max_iterations": 20, "initial_values": [1.0, 2.0]}"#,
        )
        .unwrap();

        assert_eq!(config.damping, 1.5);
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.initial_values, Some(array![1.0, 2.0]));
        assert_eq!(config.gradient_difference, 0.1);
        assert_eq!(config.v, 1.5);
        assert_eq!(config.effective_bracketing_ceiling(), 200);
    }

    #[test]
    fn test_json_initial_values_are_plain_array() {
        let config = FitConfig::new(array![0.5, -1.0]).with_bracketing_ceiling(7);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""initial_values":[0.5,-1.0]"#), "{}", json);
        assert_eq!(FitConfig::from_json(&json).unwrap(), config);

        let unset = serde_json::to_value(FitConfig::default()).unwrap();
        assert!(unset["initial_values"].is_null());
        let parsed = FitConfig::from_json(r#"{"initial_values": null}"#).unwrap();
        assert!(parsed.initial_values.is_none());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = FitConfig::from_json("{\"damping\": ");
        assert!(matches!(result, Err(LmCurveError::JsonError(_))));
    }
}
