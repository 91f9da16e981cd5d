//! Wavelength-angle evaluation grid.
//!
//! Every computation in the engine is batched elementwise over the same
//! two-dimensional grid: vacuum wavelengths along the first axis, angles of
//! incidence (in degrees, measured in the reference medium) along the
//! second. The grid also derives the transverse wavevector field
//! `nx = n_ref(λ)·sin(θ)`, which Snell's law makes an invariant of the whole
//! stack once the reference medium is fixed.

use ndarray::{Array1, Array2};
use num_complex::Complex;
use num_traits::ToPrimitive;

use crate::error::{EngineError, Result};
use crate::precision::RealScalar;

#[cfg(test)]
mod tests {

    use ndarray::{array, Array1};
    use num_complex::Complex;

    use super::*;

    #[test]
    fn transverse_field_values() {
        let grid = Grid::new(array![500.0_f64, 600.0], array![0.0, 30.0, 90.0]).unwrap();
        let n_ref = Array1::from_elem(2, Complex::new(2.0, 0.0));
        let nx = grid.transverse_field(&n_ref).unwrap();
        assert_eq!(nx.dim(), (2, 3));
        assert!(nx[[0, 0]].norm() < 1e-12);
        assert!((nx[[1, 1]].re - 1.0).abs() < 1e-12);
        assert!((nx[[0, 2]].re - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_wavelength() {
        let err = Grid::new(array![400.0_f64, -1.0], array![0.0]).unwrap_err();
        assert_eq!(
            err,
            EngineError::NonPositiveWavelength {
                index: 1,
                value: -1.0
            }
        );
    }

    #[test]
    fn rejects_empty_axes() {
        let err = Grid::new(Array1::<f64>::zeros(0), array![0.0]).unwrap_err();
        assert_eq!(err, EngineError::EmptyAxis { param: "wavelengths" });
        let err = Grid::new(array![500.0_f64], Array1::<f64>::zeros(0)).unwrap_err();
        assert_eq!(err, EngineError::EmptyAxis { param: "angles" });
    }

    #[test]
    fn rejects_mismatched_reference_index() {
        let grid = Grid::new(array![500.0_f64, 600.0], array![0.0]).unwrap();
        let n_ref = Array1::from_elem(3, Complex::new(1.0, 0.0));
        let err = grid.transverse_field(&n_ref).unwrap_err();
        assert_eq!(
            err,
            EngineError::LengthMismatch {
                param: "n_ref",
                expected: 2,
                got: 3
            }
        );
    }
}

/// Wavelength and angle axes of a batched computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: RealScalar> {
    /// Vacuum wavelengths, strictly positive, in the units of the thickness.
    pub wavelengths: Array1<T>,
    /// Angles of incidence in degrees in the reference medium.
    pub angles: Array1<T>,
}

impl<T: RealScalar> Grid<T> {
    /// Creates a grid after checking the axis invariants.
    pub fn new(wavelengths: Array1<T>, angles: Array1<T>) -> Result<Self> {
        if wavelengths.is_empty() {
            return Err(EngineError::EmptyAxis { param: "wavelengths" });
        }
        if angles.is_empty() {
            return Err(EngineError::EmptyAxis { param: "angles" });
        }
        for (index, &w) in wavelengths.iter().enumerate() {
            if w <= T::zero() {
                return Err(EngineError::NonPositiveWavelength {
                    index,
                    value: w.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self {
            wavelengths,
            angles,
        })
    }

    /// Grid dimensions as (wavelengths, angles).
    pub fn dim(&self) -> (usize, usize) {
        (self.wavelengths.len(), self.angles.len())
    }

    /// Transverse wavevector field `nx = n_ref(λ)·sin(θ)`.
    ///
    /// Computed once against the reference medium and reused by every
    /// interface and layer evaluation in the stack.
    pub fn transverse_field(&self, n_ref: &Array1<Complex<T>>) -> Result<Array2<Complex<T>>> {
        check_spectral("n_ref", n_ref.len(), self.wavelengths.len())?;
        let sines: Vec<T> = self
            .angles
            .iter()
            .map(|theta| theta.to_radians().sin())
            .collect();
        Ok(Array2::from_shape_fn(self.dim(), |(i, j)| {
            n_ref[i] * sines[j]
        }))
    }
}

/// Checks that a per-wavelength array matches the wavelength-axis length.
pub(crate) fn check_spectral(param: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(EngineError::LengthMismatch {
            param,
            expected,
            got,
        });
    }
    Ok(())
}
