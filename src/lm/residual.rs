//! Aggregate discrepancy between a model and the data.

use ndarray::Array1;

use crate::dataset::Dataset;
use crate::model::Model;

/// Sum of absolute residuals `Σ |y_i - f(x_i)|` for the given parameters.
///
/// NaN produced by the model is not caught; it makes the whole sum NaN,
/// which is how the optimizer notices a failed step.
pub fn parameter_error<M: Model>(data: &Dataset, params: &Array1<f64>, model: &M) -> f64 {
    let evaluator = model.build(params);

    data.x()
        .iter()
        .zip(data.y().iter())
        .map(|(&x, &y)| (y - evaluator(x)).abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn line(params: &Array1<f64>) -> impl Fn(f64) -> f64 {
        let (slope, intercept) = (params[0], params[1]);
        move |x| slope * x + intercept
    }

    #[test]
    fn test_exact_l1_residual() {
        let data = Dataset::from_points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 4.0)]).unwrap();

        assert_relative_eq!(parameter_error(&data, &array![2.0, 1.0], &line), 1.0);
        // residuals: 1 - 0, 3 - 1, 4 - 2
        assert_relative_eq!(parameter_error(&data, &array![1.0, 0.0], &line), 5.0);
    }

    #[test]
    fn test_deterministic_and_pure() {
        let data = Dataset::from_points(&[(0.5, 2.0), (1.5, -1.0)]).unwrap();
        let snapshot = data.clone();
        let params = array![0.3, -0.7];

        let first = parameter_error(&data, &params, &line);
        let second = parameter_error(&data, &params, &line);

        assert_eq!(first, second);
        assert_eq!(data, snapshot);
        assert_eq!(params, array![0.3, -0.7]);
    }

    #[test]
    fn test_nan_propagates() {
        let data = Dataset::from_points(&[(0.0, 1.0), (1.0, 1.0)]).unwrap();
        let ratio = |params: &Array1<f64>| {
            let denom = params[0];
            move |x: f64| x / denom
        };

        // 0 / 0 at the first sample
        assert!(parameter_error(&data, &array![0.0], &ratio).is_nan());
    }
}
