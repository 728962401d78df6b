//! Matrix conversion utilities for the lmcurve-rs library.
//!
//! The fitter works on ndarray arrays throughout and borrows nalgebra's LU
//! decomposition for the one operation ndarray lacks: the inverse of the
//! damped normal matrix.

use log::trace;
use nalgebra::DMatrix;
use ndarray::Array2;

/// Convert an ndarray Array2 to a nalgebra DMatrix.
///
/// ndarray is row-major by default while nalgebra is column-major, so the
/// copy goes element by element.
pub fn ndarray_to_nalgebra(arr: &Array2<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(arr.nrows(), arr.ncols(), |i, j| arr[[i, j]])
}

/// Convert a nalgebra DMatrix to an ndarray Array2.
pub fn nalgebra_to_ndarray(mat: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((mat.nrows(), mat.ncols()), |(i, j)| mat[(i, j)])
}

/// Invert a square matrix.
///
/// A singular matrix does not abort the fit: the result is filled with NaN
/// so the failure travels downstream as a numeric value. Nearly singular
/// input inverts to very large or infinite entries.
///
/// # Arguments
///
/// * `arr` - The square matrix to invert
///
/// # Returns
///
/// * The inverse, or a NaN matrix of the same shape
pub fn inverse(arr: &Array2<f64>) -> Array2<f64> {
    let shape = (arr.nrows(), arr.ncols());
    if shape.0 != shape.1 {
        trace!("cannot invert non-square {}x{} matrix", shape.0, shape.1);
        return Array2::from_elem(shape, f64::NAN);
    }

    match ndarray_to_nalgebra(arr).try_inverse() {
        Some(inv) => nalgebra_to_ndarray(&inv),
        None => {
            trace!("singular {}x{} matrix, inverse filled with NaN", shape.0, shape.1);
            Array2::from_elem(shape, f64::NAN)
        }
    }
}
