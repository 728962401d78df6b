//! Levenberg-Marquardt algorithm implementation.
//!
//! This module provides a derivative-free Levenberg-Marquardt fitter for
//! scalar models: a finite-difference gradient, a damped normal-equations
//! step, and a two-phase driver that brackets the damping factor before
//! refining the parameters.

// Include module declarations and re-exports
pub mod algorithm;
pub mod config;
pub mod convergence;
pub mod residual;
pub mod step;

// Re-export key types
pub use algorithm::{fit, FitResult, LevenbergMarquardt};
pub use config::FitConfig;
pub use convergence::FitStatus;
pub use residual::parameter_error;
pub use step::step;
