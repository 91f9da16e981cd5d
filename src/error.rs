//! Error taxonomy for the transfer-matrix engine.
//!
//! All precondition failures are local and immediate. Numerical degeneracy
//! (a vanishing interface denominator at grazing or index-crossing
//! configurations) is not an error: the affected grid cells carry non-finite
//! values and the rest of the batch is unaffected.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A per-wavelength array does not match the wavelength axis.
    #[error("`{param}` has {got} samples but the wavelength axis has {expected}")]
    LengthMismatch {
        param: &'static str,
        expected: usize,
        got: usize,
    },

    /// A gridded field does not match the wavelength-angle grid.
    #[error("`{param}` has shape {got:?} but the grid is {expected:?}")]
    ShapeMismatch {
        param: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Polarization tag outside {s, p}.
    #[error("polarization must be `s` or `p`, got `{0}`")]
    InvalidPolarization(String),

    /// Vacuum wavelengths must be strictly positive.
    #[error("wavelength {value} at index {index} is not positive")]
    NonPositiveWavelength { index: usize, value: f64 },

    /// A grid axis has no samples.
    #[error("`{param}` must not be empty")]
    EmptyAxis { param: &'static str },

    /// System composition over zero matrices.
    #[error("cannot compose an empty sequence of matrices")]
    EmptyStack,
}
