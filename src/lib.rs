//! # lmcurve-rs
//!
//! `lmcurve-rs` fits parameterized scalar models `y = f(x; p)` to sampled
//! data with a derivative-free Levenberg-Marquardt method.
//!
//! The library provides:
//! - A finite-difference Levenberg-Marquardt fitter with damping bracketing
//! - A `Model` trait implemented by closures and by built-in models
//! - Explicit, serde-friendly fit configuration
//!
//! ## Basic Usage
//!
//! ```
//! use lmcurve_rs::{fit, Dataset, FitConfig};
//! use ndarray::{array, Array1};
//!
//! let data = Dataset::from_points(&[(0.0, 1.0), (1.0, 3.0)]).unwrap();
//! let line = |p: &Array1<f64>| {
//!     let (slope, intercept) = (p[0], p[1]);
//!     move |x: f64| slope * x + intercept
//! };
//!
//! let result = fit(&data, &line, &FitConfig::new(array![1.0, 1.0])).unwrap();
//! assert!(result.is_converged());
//! assert!((result.parameter_values[0] - 2.0).abs() < 1e-6);
//! ```

// Public modules
pub mod dataset;
pub mod error;
pub mod lm;
pub mod model;
pub mod models;

mod utils;

// Re-exports for convenience
pub use dataset::Dataset;
pub use error::{LmCurveError, Result};
pub use lm::{fit, FitConfig, FitResult, FitStatus, LevenbergMarquardt};
pub use model::Model;
pub use utils::gradient_function;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
