//! Characteristic matrix of a single planar interface.
//!
//! The interface matrix is assembled from the Fresnel coefficients as
//! `M = (1/t)·[[1, r],[r, 1]]`, so that extracting `t = 1/M00` and
//! `r = M10/M00` from a composed system reproduces the Fresnel amplitudes
//! exactly.

use nalgebra::Matrix2;
use ndarray::{Array1, Array2};
use num_complex::Complex;

use crate::error::Result;
use crate::fresnel::{self, Polarization};
use crate::grid;
use crate::matrix::MatrixField;
use crate::precision::{Backend, RealScalar};
use crate::snell;


/// Computes the characteristic matrix of the interface from medium `ni`
/// into medium `nf`, for one polarization, over the whole grid.
///
/// **Context**: Crossing a boundary couples the forward and backward field
/// amplitudes through the Fresnel coefficients. Writing that coupling as a
/// 2x2 matrix lets interfaces and propagation segments compose into a full
/// stack by matrix multiplication alone.
///
/// **How it Works**: For each grid cell the longitudinal wavevectors
/// `niz = sqrt(ni² - nx²)` and `nfz = sqrt(nf² - nx²)` are taken on the
/// passive-medium branch, the polarization-resolved Fresnel `r` and `t`
/// follow, and the cell matrix is `(1/t)·[[1, r],[r, 1]]`.
///
/// Cells where `niz + nfz` vanishes (degenerate grazing configurations) are
/// an unsupported input region and come out non-finite; the rest of the
/// batch is unaffected.
pub fn matrix<T: RealScalar>(
    pol: Polarization,
    ni: &Array1<Complex<T>>,
    nf: &Array1<Complex<T>>,
    nx: &Array2<Complex<T>>,
    backend: Backend,
) -> Result<MatrixField<T>> {
    let (rows, _) = nx.dim();
    grid::check_spectral("ni", ni.len(), rows)?;
    grid::check_spectral("nf", nf.len(), rows)?;
    Ok(MatrixField::build(nx.dim(), backend, |i, j| {
        let niz = snell::longitudinal(ni[i], nx[[i, j]]);
        let nfz = snell::longitudinal(nf[i], nx[[i, j]]);
        let r = fresnel::refl(pol, ni[i], nf[i], niz, nfz);
        let inv_t = fresnel::refr(pol, ni[i], nf[i], niz, nfz).finv();
        Matrix2::new(inv_t, r * inv_t, r * inv_t, inv_t)
    }))
}
