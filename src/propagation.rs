//! Phase and attenuation through a homogeneous bulk layer.
//!
//! Coherent propagation over a thickness `d` multiplies the forward and
//! backward amplitudes by conjugate complex exponentials of the phase
//! thickness `δ = (2π/λ)·n_z·d`. For strongly absorbing or very thick
//! layers `|Im δ|` can exceed what the growing exponential represents in
//! finite precision, so the attenuation magnitude is clamped before the
//! exponentials are formed. The clamp only activates when the layer is
//! already optically opaque.

use nalgebra::{Matrix2, Vector2};
use ndarray::{Array1, Array2};
use num_complex::Complex;

use crate::config;
use crate::error::Result;
use crate::grid;
use crate::matrix::MatrixField;
use crate::precision::{Backend, RealScalar};
use crate::snell;


/// Computes the diagonal propagation matrix of a bulk layer of index `n`
/// and thickness `d` over the whole grid.
///
/// **Context**: Between two interfaces the forward and backward waves only
/// pick up phase and attenuation; the matrix is diagonal with conjugate
/// exponents.
///
/// **How it Works**: Per cell, `δ = (2π/λ)·n_z·d` is split into the pure
/// phase `φ = Re δ` and the attenuation magnitude `α = |Im δ|`. `α` is
/// clamped to [`config::ATTENUATION_CLAMP`] and the matrix is
/// `diag(exp(-iδ'), exp(+iδ'))` with `δ' = φ + iα`.
pub fn matrix<T: RealScalar>(
    n: &Array1<Complex<T>>,
    d: T,
    wavelengths: &Array1<T>,
    nx: &Array2<Complex<T>>,
    backend: Backend,
) -> Result<MatrixField<T>> {
    let (rows, _) = nx.dim();
    grid::check_spectral("n", n.len(), rows)?;
    grid::check_spectral("wavelengths", wavelengths.len(), rows)?;
    let clamp = T::from_f64(config::ATTENUATION_CLAMP);
    let two_pi = T::from_f64(2.0) * T::PI();
    Ok(MatrixField::build(nx.dim(), backend, |i, j| {
        let nz = snell::longitudinal(n[i], nx[[i, j]]);
        let delta = nz * (two_pi / wavelengths[i] * d);
        let phi = delta.re;
        let alpha = delta.im.abs().min(clamp);
        // exp(-i(φ+iα)) and exp(+i(φ+iα))
        let backward = Complex::new(alpha, -phi).exp();
        let forward = Complex::new(-alpha, phi).exp();
        Matrix2::from_diagonal(&Vector2::new(backward, forward))
    }))
}
