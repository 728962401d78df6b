//! Sample data for a fit.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{LmCurveError, Result};
use crate::model::Model;

/// Paired `(x, y)` samples.
///
/// The fields are private so a dataset cannot change while a fit borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset", into = "RawDataset")]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

/// Wire form with plain number lists, checked through `Dataset::new` on
/// deserialization.
#[derive(Serialize, Deserialize)]
struct RawDataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = LmCurveError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(Array1::from(raw.x), Array1::from(raw.y))
    }
}

impl From<Dataset> for RawDataset {
    fn from(data: Dataset) -> Self {
        Self {
            x: data.x.to_vec(),
            y: data.y.to_vec(),
        }
    }
}

impl Dataset {
    /// Create a dataset from independent and dependent values.
    ///
    /// # Errors
    ///
    /// * `LmCurveError::DimensionMismatch` if `x` and `y` differ in length
    /// * `LmCurveError::InvalidInput` if there are no samples
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(LmCurveError::DimensionMismatch(format!(
                "x has {} samples, y has {}",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(LmCurveError::InvalidInput(
                "dataset must contain at least one sample".to_string(),
            ));
        }

        Ok(Self { x, y })
    }

    /// Create a dataset from `(x, y)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let x = points.iter().map(|&(x, _)| x).collect::<Array1<f64>>();
        let y = points.iter().map(|&(_, y)| y).collect::<Array1<f64>>();
        Self::new(x, y)
    }

    /// Sample a model at the given x values.
    ///
    /// Handy for building synthetic data with known parameters.
    pub fn from_model<M: Model>(model: &M, params: &Array1<f64>, x: Array1<f64>) -> Result<Self> {
        let y = model.eval(params, &x);
        Self::new(x, y)
    }

    /// Independent values.
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// Observed values.
    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let result = Dataset::new(array![1.0, 2.0, 3.0], array![1.0, 2.0]);
        assert!(matches!(result, Err(LmCurveError::DimensionMismatch(_))));
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = Dataset::new(Array1::zeros(0), Array1::zeros(0));
        assert!(matches!(result, Err(LmCurveError::InvalidInput(_))));
    }

    #[test]
    fn test_from_points() {
        let data = Dataset::from_points(&[(0.0, 1.0), (1.0, 3.0)]).unwrap();

        assert_eq!(data.len(), 2);
        assert!(!data.is_empty());
        assert_eq!(data.x(), &array![0.0, 1.0]);
        assert_eq!(data.y(), &array![1.0, 3.0]);
    }

    #[test]
    fn test_from_model() {
        let model = |params: &Array1<f64>| {
            let offset = params[0];
            move |x: f64| x + offset
        };

        let data = Dataset::from_model(&model, &array![10.0], array![1.0, 2.0]).unwrap();
        assert_eq!(data.y(), &array![11.0, 12.0]);
    }

    #[test]
    fn test_deserialize_validates() {
        let data = Dataset::from_points(&[(0.0, 1.0), (1.0, 3.0)]).unwrap();
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"x":[0.0,1.0],"y":[1.0,3.0]}"#);
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);

        let bad = r#"{"x":[0.0,1.0],"y":[1.0]}"#;
        assert!(serde_json::from_str::<Dataset>(bad).is_err());
    }
}
