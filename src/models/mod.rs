//! Built-in model implementations for common fitting problems.
//!
//! This module provides a collection of commonly used model functions
//! for fitting data, such as Gaussian, Lorentzian, exponential, and
//! polynomial models. Each one declares its parameter count, so the fitter
//! rejects initial values of the wrong length up front.

mod exponential;
mod peak;
mod polynomial;

// Re-export the models
pub use exponential::ExponentialModel;
pub use peak::{GaussianModel, LorentzianModel};
pub use polynomial::{LinearModel, PolynomialModel};
