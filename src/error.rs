use thiserror::Error;

/// Error types for the lmcurve-rs library.
///
/// Numeric failures during a fit (singular normal matrices, models producing
/// NaN) are not reported here; they flow through the fit as non-finite values
/// and are handled by the optimizer. These variants cover input that cannot
/// be fitted at all.
#[derive(Error, Debug)]
pub enum LmCurveError {
    /// Error indicating a mismatch in vector dimensions.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configuration field is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration carries no initial parameter values.
    #[error("Initial parameter values must be supplied explicitly")]
    MissingInitialValues,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for lmcurve-rs operations.
pub type Result<T> = std::result::Result<T, LmCurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LmCurveError::DimensionMismatch("x has 3 samples, y has 2".to_string());
        assert!(format!("{}", err).contains("x has 3 samples, y has 2"));

        let err = LmCurveError::InvalidConfig("v must be greater than 1".to_string());
        assert!(format!("{}", err).contains("v must be greater than 1"));

        let err = LmCurveError::MissingInitialValues;
        assert!(format!("{}", err).contains("explicitly"));
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LmCurveError = json_err.into();

        match err {
            LmCurveError::JsonError(_) => (),
            _ => panic!("Expected JsonError variant"),
        }
    }
}
