//! Fresnel equations for electromagnetic boundary conditions.
//!
//! This module implements the Fresnel equations that govern electromagnetic
//! wave reflection and transmission at planar interfaces between isotropic
//! media. They provide the exact boundary conditions the characteristic
//! matrices are assembled from.
//!
//! The Fresnel calculations provide:
//! - Reflection coefficients for s and p polarizations
//! - Transmission coefficients with impedance matching
//! - Complex refractive index support for absorbing materials
//! - Formulation in terms of longitudinal wavevectors, valid at oblique
//!   incidence and for evanescent configurations

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::precision::RealScalar;


/// Linear polarization state for oblique incidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Polarization {
    /// Electric field perpendicular to the plane of incidence.
    S,
    /// Electric field parallel to the plane of incidence.
    P,
}

impl FromStr for Polarization {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" | "S" => Ok(Polarization::S),
            "p" | "P" => Ok(Polarization::P),
            other => Err(EngineError::InvalidPolarization(other.to_string())),
        }
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarization::S => write!(f, "s"),
            Polarization::P => write!(f, "p"),
        }
    }
}

/// Computes the Fresnel reflection coefficient of a single interface.
///
/// **Context**: When an electromagnetic wave crosses the boundary between
/// media of indices `ni` and `nf`, the reflected amplitude depends on
/// polarization and on the longitudinal wavevectors `niz`, `nfz` on either
/// side. Expressing the coefficients through the longitudinal components
/// keeps them valid for absorbing media and past the critical angle.
///
/// **How it Works**: Applies the classic Fresnel formulas, `r = (niz - nfz) /
/// (niz + nfz)` for s-polarization and `r = (nf²·niz - ni²·nfz) / (nf²·niz +
/// ni²·nfz)` for p. A vanishing denominator (degenerate grazing
/// configuration) yields a non-finite coefficient; such inputs are outside
/// the supported region and are not corrected.
pub fn refl<T: RealScalar>(
    pol: Polarization,
    ni: Complex<T>,
    nf: Complex<T>,
    niz: Complex<T>,
    nfz: Complex<T>,
) -> Complex<T> {
    match pol {
        Polarization::S => (niz - nfz) / (niz + nfz),
        Polarization::P => (nf * nf * niz - ni * ni * nfz) / (nf * nf * niz + ni * ni * nfz),
    }
}

/// Computes the Fresnel transmission coefficient of a single interface.
///
/// **Context**: Transmitted amplitudes scale differently from reflected
/// ones; the coefficients account for the impedance difference between the
/// two media.
///
/// **How it Works**: `t = 2·niz / (niz + nfz)` for s-polarization and
/// `t = 2·ni·nf·niz / (nf²·niz + ni²·nfz)` for p, sharing the denominator
/// and degeneracy behavior of [`refl`].
pub fn refr<T: RealScalar>(
    pol: Polarization,
    ni: Complex<T>,
    nf: Complex<T>,
    niz: Complex<T>,
    nfz: Complex<T>,
) -> Complex<T> {
    let two = T::from_f64(2.0);
    match pol {
        Polarization::S => niz * two / (niz + nfz),
        Polarization::P => ni * nf * niz * two / (nf * nf * niz + ni * ni * nfz),
    }
}
