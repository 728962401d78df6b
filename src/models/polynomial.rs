//! Polynomial models for fitting data.

use crate::model::Model;
use ndarray::Array1;

/// A straight line.
///
/// f(x) = slope * x + intercept
///
/// Parameter order: `[slope, intercept]`.
#[derive(Debug, Clone, Default)]
pub struct LinearModel {
    prefix: String,
}

impl LinearModel {
    /// Create a new linear model with the specified parameter prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl Model for LinearModel {
    fn build(&self, params: &Array1<f64>) -> impl Fn(f64) -> f64 + use<> {
        let (slope, intercept) = (params[0], params[1]);
        move |x| slope * x + intercept
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(2)
    }

    fn parameter_names(&self) -> Vec<String> {
        vec![
            format!("{}slope", self.prefix),
            format!("{}intercept", self.prefix),
        ]
    }
}

/// A polynomial model of arbitrary degree
///
/// The polynomial function is defined as:
///
/// f(x) = c[0] + c[1]*x + c[2]*x^2 + ... + c[n]*x^n
///
/// Where c[i] are the polynomial coefficients, in ascending order.
#[derive(Debug, Clone)]
pub struct PolynomialModel {
    prefix: String,
    degree: usize,
}

impl PolynomialModel {
    /// Create a new polynomial model with the specified degree
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix for parameter names
    /// * `degree` - The degree of the polynomial
    pub fn new(prefix: &str, degree: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            degree,
        }
    }

    /// The degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.degree
    }
}

impl Model for PolynomialModel {
    fn build(&self, params: &Array1<f64>) -> impl Fn(f64) -> f64 + use<> {
        let coefficients = params.to_vec();
        // Horner's scheme, highest power first
        move |x| coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(self.degree + 1)
    }

    fn parameter_names(&self) -> Vec<String> {
        (0..=self.degree)
            .map(|i| format!("{}c{}", self.prefix, i))
            .collect()
    }
}
