//! Model trait for parameterized scalar functions.
//!
//! A model is a factory: given a parameter vector it builds an evaluator, a
//! plain `f64 -> f64` function. The fitter never inspects the model beyond
//! this contract, so the model must be pure and deterministic.
//!
//! Any closure of the form `|params: &Array1<f64>| move |x: f64| ...` is a
//! model through the blanket implementation below.

use ndarray::Array1;

/// A parameterized model that can be fit to data.
pub trait Model {
    /// Builds the evaluator for the given parameter values.
    ///
    /// # Arguments
    ///
    /// * `params` - The parameter values the evaluator is built from
    ///
    /// # Returns
    ///
    /// * A scalar function `x -> f(x; params)`
    fn build(&self, params: &Array1<f64>) -> impl Fn(f64) -> f64 + use<Self>;

    /// Number of parameters the model expects, if it declares one.
    ///
    /// When `Some`, the fitter rejects initial values of any other length.
    fn parameter_count(&self) -> Option<usize> {
        None
    }

    /// Names of the model's parameters, in vector order.
    fn parameter_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Evaluates the model at every x value for the given parameters.
    fn eval(&self, params: &Array1<f64>, x: &Array1<f64>) -> Array1<f64> {
        let evaluator = self.build(params);
        x.mapv(|x_val| evaluator(x_val))
    }
}

impl<F, E> Model for F
where
    F: Fn(&Array1<f64>) -> E,
    E: Fn(f64) -> f64,
{
    fn build(&self, params: &Array1<f64>) -> impl Fn(f64) -> f64 + use<F, E> {
        self(params)
    }
}
