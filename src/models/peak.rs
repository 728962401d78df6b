//! Peak models for fitting data.
//!
//! This module provides models for common peak functions like Gaussian and Lorentzian,
//! which are widely used in spectroscopy, diffraction, and other scientific fields.

use crate::model::Model;
use ndarray::Array1;

/// A Gaussian peak model.
///
/// The Gaussian function is defined as:
/// f(x) = amplitude * exp(-(x - center)² / (2 * sigma²)) + baseline
///
/// It is characterized by:
/// - `amplitude`: The height of the peak
/// - `center`: The position of the peak center
/// - `sigma`: The standard deviation, controlling the width
/// - `baseline`: The baseline offset, only present when requested
///
/// The Full Width at Half Maximum (FWHM) is related to sigma by:
/// FWHM = 2 * sqrt(2 * ln(2)) * sigma ≈ 2.3548 * sigma
#[derive(Debug, Clone)]
pub struct GaussianModel {
    prefix: String,
    with_baseline: bool,
}

impl GaussianModel {
    /// Create a new Gaussian model.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for parameter names
    /// * `with_baseline` - Whether to include a baseline parameter
    pub fn new(prefix: &str, with_baseline: bool) -> Self {
        Self {
            prefix: prefix.to_string(),
            with_baseline,
        }
    }
}

impl Model for GaussianModel {
    fn build(&self, params: &Array1<f64>) -> impl Fn(f64) -> f64 + use<> {
        let (amplitude, center, sigma) = (params[0], params[1], params[2]);
        let baseline = if self.with_baseline { params[3] } else { 0.0 };
        move |x| {
            let arg = (x - center) / sigma;
            amplitude * f64::exp(-0.5 * arg * arg) + baseline
        }
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(if self.with_baseline { 4 } else { 3 })
    }

    fn parameter_names(&self) -> Vec<String> {
        peak_names(&self.prefix, "sigma", self.with_baseline)
    }
}

/// A Lorentzian peak model.
///
/// f(x) = amplitude * gamma² / ((x - center)² + gamma²) + baseline
///
/// `gamma` is the half width at half maximum.
#[derive(Debug, Clone)]
pub struct LorentzianModel {
    prefix: String,
    with_baseline: bool,
}

impl LorentzianModel {
    /// Create a new Lorentzian model.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for parameter names
    /// * `with_baseline` - Whether to include a baseline parameter
    pub fn new(prefix: &str, with_baseline: bool) -> Self {
        Self {
            prefix: prefix.to_string(),
            with_baseline,
        }
    }
}

impl Model for LorentzianModel {
    fn build(&self, params: &Array1<f64>) -> impl Fn(f64) -> f64 + use<> {
        let (amplitude, center, gamma) = (params[0], params[1], params[2]);
        let baseline = if self.with_baseline { params[3] } else { 0.0 };
        let gamma_sq = gamma * gamma;
        move |x| {
            let dx = x - center;
            amplitude * gamma_sq / (dx * dx + gamma_sq) + baseline
        }
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(if self.with_baseline { 4 } else { 3 })
    }

    fn parameter_names(&self) -> Vec<String> {
        peak_names(&self.prefix, "gamma", self.with_baseline)
    }
}

fn peak_names(prefix: &str, width: &str, with_baseline: bool) -> Vec<String> {
    let mut names = vec![
        format!("{}amplitude", prefix),
        format!("{}center", prefix),
        format!("{}{}", prefix, width),
    ];
    if with_baseline {
        names.push(format!("{}baseline", prefix));
    }
    names
}
