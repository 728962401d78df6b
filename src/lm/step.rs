//! Step calculation for the Levenberg-Marquardt algorithm.
//!
//! One step solves the damped normal equations built from the finite
//! difference gradient matrix `J` (`n_params × n_samples`):
//!
//! ```text
//! A = I·(λ·h²) + J·Jᵀ
//! δ = h · A⁻¹ · J · r
//! p' = p - δ
//! ```
//!
//! where `λ` is the damping, `h` the finite-difference step and `r = y - f(x)`
//! the residuals. `J` already carries a factor `-h`, so the `h` terms cancel to
//! a Gauss-Newton update for `λ = 0` and shrink towards a scaled gradient
//! step as `λ` grows.

use ndarray::{Array1, Array2};

use crate::dataset::Dataset;
use crate::model::Model;
use crate::utils::{gradient_function, inverse};

/// Compute the next parameter vector.
///
/// A singular normal matrix is not detected here. Its NaN inverse yields a
/// NaN parameter vector and the caller decides what to do with it. The
/// returned vector always has the same length as `params`.
///
/// # Arguments
///
/// * `data` - The samples being fitted
/// * `params` - The current parameter values
/// * `damping` - The damping factor `λ`
/// * `gradient_difference` - The finite-difference step `h`
/// * `model` - The model under fit
pub fn step<M: Model>(
    data: &Dataset,
    params: &Array1<f64>,
    damping: f64,
    gradient_difference: f64,
    model: &M,
) -> Array1<f64> {
    let evaluated_data = model.eval(params, data.x());
    let gradient = gradient_function(data, &evaluated_data, params, gradient_difference, model);
    let residuals = data.y() - &evaluated_data;

    let n_params = params.len();
    let damped = Array2::<f64>::eye(n_params) * (damping * gradient_difference * gradient_difference);
    let normal = damped + gradient.dot(&gradient.t());

    let delta = inverse(&normal).dot(&gradient.dot(&residuals)) * gradient_difference;

    params - &delta
}
