//! Engine façade: precision- and backend-configured transfer-matrix
//! evaluation.
//!
//! A [`Solver`] fixes the numeric configuration once, at construction: the
//! scalar type parameter selects single or double complex precision and the
//! [`Backend`] selects serial or thread-pool evaluation. Every method is a
//! pure function of its inputs; the solver holds no state between calls and
//! concurrent use on independent inputs is always safe.

use std::marker::PhantomData;

use ndarray::{Array1, Array2};
use num_complex::Complex;

use crate::error::Result;
use crate::fresnel::Polarization;
use crate::interface;
use crate::layer;
use crate::matrix::MatrixField;
use crate::precision::{Backend, Precision, RealScalar};
use crate::propagation;
use crate::stack::{self, Amplitudes};


/// Batched transfer-matrix engine with fixed precision and backend.
#[derive(Debug, Clone, Copy)]
pub struct Solver<T: RealScalar> {
    backend: Backend,
    scalar: PhantomData<T>,
}

impl<T: RealScalar> Solver<T> {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            scalar: PhantomData,
        }
    }

    /// The complex precision this solver computes in.
    pub fn precision(&self) -> Precision {
        T::PRECISION
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Characteristic matrix of a single interface from `ni` into `nf`.
    pub fn interface(
        &self,
        pol: Polarization,
        ni: &Array1<Complex<T>>,
        nf: &Array1<Complex<T>>,
        nx: &Array2<Complex<T>>,
    ) -> Result<MatrixField<T>> {
        interface::matrix(pol, ni, nf, nx, self.backend)
    }

    /// Diagonal propagation matrix through a bulk layer.
    pub fn propagation(
        &self,
        n: &Array1<Complex<T>>,
        d: T,
        wavelengths: &Array1<T>,
        nx: &Array2<Complex<T>>,
    ) -> Result<MatrixField<T>> {
        propagation::matrix(n, d, wavelengths, nx, self.backend)
    }

    /// Matrix of one coherent layer embedded in the ambient reference
    /// medium.
    pub fn coherent_layer(
        &self,
        pol: Polarization,
        n: &Array1<Complex<T>>,
        d: T,
        wavelengths: &Array1<T>,
        nx: &Array2<Complex<T>>,
    ) -> Result<MatrixField<T>> {
        layer::coherent(pol, n, d, wavelengths, nx, self.backend)
    }

    /// System matrix of an ordered stack of element matrices.
    pub fn system(&self, matrices: &[MatrixField<T>]) -> Result<MatrixField<T>> {
        stack::system(matrices, self.backend)
    }

    /// Global amplitudes of a composed system matrix.
    pub fn amplitudes(&self, system: &MatrixField<T>) -> Amplitudes<T> {
        stack::amplitudes(system)
    }
}
