//! Batched 2x2 complex transfer matrices over the evaluation grid.
//!
//! A [`MatrixField`] holds one characteristic matrix per `(wavelength,
//! angle)` cell. Matrices relate forward and backward field amplitudes
//! across an optical element and compose by ordinary matrix multiplication,
//! performed independently per cell. Multiplication order is not commutative
//! and must follow the physical stacking order, incidence side first.

use nalgebra::Matrix2;
use ndarray::Array2;
use num_complex::Complex;
use rayon::prelude::*;

use crate::error::{EngineError, Result};
use crate::precision::{Backend, RealScalar};

#[cfg(test)]
mod tests {

    use nalgebra::Matrix2;
    use num_complex::Complex;

    use super::*;

    fn constant(dim: (usize, usize), m: Matrix2<Complex<f64>>) -> MatrixField<f64> {
        MatrixField::build(dim, Backend::Cpu, |_, _| m)
    }

    #[test]
    fn identity_composes_to_identity() {
        let id = MatrixField::<f64>::identity((3, 4));
        let composed = id.compose(&id, Backend::Cpu).unwrap();
        assert_eq!(composed, id);
    }

    #[test]
    fn composition_is_ordered() {
        let c = |re: f64| Complex::new(re, 0.0);
        let a = constant((2, 2), Matrix2::new(c(1.0), c(1.0), c(0.0), c(1.0)));
        let b = constant((2, 2), Matrix2::new(c(1.0), c(0.0), c(1.0), c(1.0)));
        let ab = a.compose(&b, Backend::Cpu).unwrap();
        let ba = b.compose(&a, Backend::Cpu).unwrap();
        assert!((ab.get(0, 0)[(0, 0)].re - 2.0).abs() < 1e-12);
        assert!((ba.get(0, 0)[(0, 0)].re - 1.0).abs() < 1e-12);
        assert_ne!(ab, ba);
    }

    #[test]
    fn backends_agree() {
        let field = MatrixField::<f64>::build((5, 7), Backend::Cpu, |i, j| {
            Matrix2::from_element(Complex::new(i as f64, j as f64))
        });
        let parallel = MatrixField::<f64>::build((5, 7), Backend::Parallel, |i, j| {
            Matrix2::from_element(Complex::new(i as f64, j as f64))
        });
        assert_eq!(field, parallel);
        let square_cpu = field.compose(&field, Backend::Cpu).unwrap();
        let square_par = field.compose(&field, Backend::Parallel).unwrap();
        assert_eq!(square_cpu, square_par);
    }

    #[test]
    fn amplitude_extraction() {
        let c = Complex::new(2.0_f64, 0.0);
        let r = Complex::new(0.5_f64, 0.0);
        let field = constant((1, 1), Matrix2::new(c, r * c, r * c, c));
        let t_out = field.transmittance();
        let r_out = field.reflectance();
        assert!((t_out[[0, 0]].re - 0.5).abs() < 1e-12);
        assert!((r_out[[0, 0]].re - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mismatched_grids_refuse_to_compose() {
        let a = MatrixField::<f64>::identity((2, 3));
        let b = MatrixField::<f64>::identity((3, 2));
        let err = a.compose(&b, Backend::Cpu).unwrap_err();
        assert_eq!(
            err,
            EngineError::ShapeMismatch {
                param: "rhs",
                expected: (2, 3),
                got: (3, 2)
            }
        );
    }
}

/// One 2x2 complex characteristic matrix per grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixField<T: RealScalar> {
    data: Array2<Matrix2<Complex<T>>>,
}

impl<T: RealScalar> MatrixField<T> {
    /// Evaluates `f` at every grid cell, either serially or across the
    /// rayon pool. Cells are independent, so the backends agree exactly.
    pub(crate) fn build<F>(dim: (usize, usize), backend: Backend, f: F) -> Self
    where
        F: Fn(usize, usize) -> Matrix2<Complex<T>> + Send + Sync,
    {
        let data = match backend {
            Backend::Cpu => Array2::from_shape_fn(dim, |(i, j)| f(i, j)),
            Backend::Parallel => {
                let (rows, cols) = dim;
                let cells: Vec<_> = (0..rows * cols)
                    .into_par_iter()
                    .map(|k| f(k / cols, k % cols))
                    .collect();
                Array2::from_shape_vec(dim, cells).expect("cell count matches the grid")
            }
        };
        Self { data }
    }

    /// The identity field: r = 0, t = 1 at every cell.
    pub fn identity(dim: (usize, usize)) -> Self {
        Self {
            data: Array2::from_elem(dim, Matrix2::identity()),
        }
    }

    /// Grid dimensions as (wavelengths, angles).
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// The matrix at one grid cell.
    pub fn get(&self, i: usize, j: usize) -> &Matrix2<Complex<T>> {
        &self.data[[i, j]]
    }

    /// Per-cell matrix product `self · rhs`, in physical stacking order
    /// (self on the incidence side).
    pub fn compose(&self, rhs: &Self, backend: Backend) -> Result<Self> {
        if self.dim() != rhs.dim() {
            return Err(EngineError::ShapeMismatch {
                param: "rhs",
                expected: self.dim(),
                got: rhs.dim(),
            });
        }
        Ok(Self::build(self.dim(), backend, |i, j| {
            self.data[[i, j]] * rhs.data[[i, j]]
        }))
    }

    /// Global amplitude transmittance `t = 1/M00` per cell.
    pub fn transmittance(&self) -> Array2<Complex<T>> {
        self.data.mapv(|m| m[(0, 0)].finv())
    }

    /// Global amplitude reflectance `r = M10/M00` per cell.
    pub fn reflectance(&self) -> Array2<Complex<T>> {
        self.data.mapv(|m| m[(1, 0)] / m[(0, 0)])
    }

    /// True when every entry of every cell is finite.
    pub fn is_finite(&self) -> bool {
        self.data
            .iter()
            .all(|m| m.iter().all(|z| z.re.is_finite() && z.im.is_finite()))
    }
}
