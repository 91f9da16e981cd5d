//! Coherent finite layer referenced to the ambient medium.
//!
//! A single physical layer is the product of three matrices: the entry
//! interface from the ambient reference medium into the layer, bulk
//! propagation through the layer, and the exit interface back into the
//! ambient medium. Callers sandwich the result between their actual
//! environment and substrate interfaces to model a layer inside a real
//! stack. The ambient reference index is fixed at
//! [`config::AMBIENT_REFR_INDEX`] (vacuum/air).

use ndarray::{Array1, Array2};
use num_complex::Complex;

use crate::config;
use crate::error::Result;
use crate::fresnel::Polarization;
use crate::interface;
use crate::matrix::MatrixField;
use crate::precision::{Backend, RealScalar};
use crate::propagation;


/// Computes the characteristic matrix of one coherent layer of index `n`
/// and thickness `d`, embedded between two half-spaces of the ambient
/// reference medium: entry interface x bulk propagation x exit interface,
/// composed per grid cell in that order.
pub fn coherent<T: RealScalar>(
    pol: Polarization,
    n: &Array1<Complex<T>>,
    d: T,
    wavelengths: &Array1<T>,
    nx: &Array2<Complex<T>>,
    backend: Backend,
) -> Result<MatrixField<T>> {
    let ambient = Array1::from_elem(
        n.len(),
        Complex::new(T::from_f64(config::AMBIENT_REFR_INDEX), T::zero()),
    );
    let entry = interface::matrix(pol, &ambient, n, nx, backend)?;
    let bulk = propagation::matrix(n, d, wavelengths, nx, backend)?;
    let exit = interface::matrix(pol, n, &ambient, nx, backend)?;
    entry.compose(&bulk, backend)?.compose(&exit, backend)
}
