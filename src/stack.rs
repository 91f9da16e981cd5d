//! Stack composition and global amplitude extraction.
//!
//! The system matrix of a stack is the left-to-right product of its
//! element matrices in physical order, incidence side to exit side. The
//! global amplitude transmittance and reflectance then follow from the
//! first column: `t = 1/M00`, `r = M10/M00`.

use ndarray::Array2;
use num_complex::Complex;

use crate::error::{EngineError, Result};
use crate::matrix::MatrixField;
use crate::precision::{Backend, RealScalar};


/// Global amplitude reflectance and transmittance over the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Amplitudes<T: RealScalar> {
    pub r: Array2<Complex<T>>,
    pub t: Array2<Complex<T>>,
}

/// Composes an ordered sequence of element matrices into the system matrix.
///
/// The slice must be in physical stacking order, incidence side first;
/// matrix multiplication does not commute and reordering changes the
/// physics.
pub fn system<T: RealScalar>(
    matrices: &[MatrixField<T>],
    backend: Backend,
) -> Result<MatrixField<T>> {
    let (first, rest) = matrices.split_first().ok_or(EngineError::EmptyStack)?;
    rest.iter()
        .try_fold(first.clone(), |acc, m| acc.compose(m, backend))
}

/// Extracts the global amplitudes from a composed system matrix.
pub fn amplitudes<T: RealScalar>(system: &MatrixField<T>) -> Amplitudes<T> {
    Amplitudes {
        r: system.reflectance(),
        t: system.transmittance(),
    }
}
