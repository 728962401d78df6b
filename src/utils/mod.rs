//! Utility functions and helpers for the lmcurve-rs library.

pub mod finite_difference;
pub mod matrix_convert;

// Re-export commonly used utilities
pub use finite_difference::gradient_function;
pub use matrix_convert::inverse;
