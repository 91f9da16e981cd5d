//! Numeric precision and evaluation backend configuration.
//!
//! Precision is fixed when a solver is constructed and carried at the type
//! level: a `Solver<f32>` computes in single-precision complex arithmetic,
//! a `Solver<f64>` in double. Every intermediate value in a pipeline shares
//! the scalar type, so mixing precisions is rejected at compile time.

use std::fmt::{Debug, Display};

use clap::ValueEnum;
use num_traits::{Float, FloatConst, NumAssign};
use serde::{Deserialize, Serialize};

/// Complex arithmetic width used throughout a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit real parts (complex64 equivalent).
    Single,
    /// 64-bit real parts (complex128 equivalent).
    Double,
}

/// How grid cells are evaluated.
///
/// Both backends must produce identical numeric results; the choice only
/// affects how the per-cell work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Serial evaluation on the calling thread.
    Cpu,
    /// Cells mapped across the rayon thread pool.
    Parallel,
}

/// Scalar bound for the engine. Implemented for `f32` and `f64` only.
pub trait RealScalar:
    Float + FloatConst + NumAssign + Debug + Display + Send + Sync + 'static
{
    /// The precision tag this scalar corresponds to.
    const PRECISION: Precision;

    /// Lossy conversion from a double-precision literal or setting.
    fn from_f64(value: f64) -> Self;
}

impl RealScalar for f32 {
    const PRECISION: Precision = Precision::Single;

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl RealScalar for f64 {
    const PRECISION: Precision = Precision::Double;

    fn from_f64(value: f64) -> Self {
        value
    }
}
