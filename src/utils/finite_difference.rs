//! Finite difference sensitivity of a model to its parameters.
//!
//! The step is an absolute constant: each parameter is shifted by exactly
//! `gradient_difference`, whatever its magnitude. Large parameters therefore
//! see a relatively tiny perturbation and small ones a relatively huge one.
//! The fitter's step formula is written against this unscaled matrix, so
//! changing the scaling here changes every fit.

use ndarray::{Array1, Array2};

use crate::dataset::Dataset;
use crate::model::Model;

/// Compute the forward-difference gradient matrix of a model.
///
/// Row `p`, column `i` holds `evaluated_data[i] - f_p(x_i)`, where `f_p` is
/// the model built with parameter `p` increased by `gradient_difference`.
/// This is the negative Jacobian (transposed) scaled by the step size.
///
/// # Arguments
///
/// * `data` - The samples the model is evaluated at
/// * `evaluated_data` - The model output at `params` for every sample
/// * `params` - The parameter values at which to evaluate the gradient
/// * `gradient_difference` - The absolute perturbation applied to each parameter
/// * `model` - The model under fit
///
/// # Returns
///
/// * An `n_params × n_samples` matrix
pub fn gradient_function<M: Model>(
    data: &Dataset,
    evaluated_data: &Array1<f64>,
    params: &Array1<f64>,
    gradient_difference: f64,
    model: &M,
) -> Array2<f64> {
    let n_params = params.len();
    let x = data.x();

    let mut gradient = Array2::zeros((n_params, x.len()));

    for param in 0..n_params {
        let mut perturbed = params.clone();
        perturbed[param] += gradient_difference;
        let evaluator = model.build(&perturbed);

        for (point, &x_val) in x.iter().enumerate() {
            gradient[[param, point]] = evaluated_data[point] - evaluator(x_val);
        }
    }

    gradient
}
