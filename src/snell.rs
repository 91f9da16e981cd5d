//! Wavevector decomposition in stratified media with complex refractive indices.
//!
//! Once a reference medium fixes the transverse wavevector `nx`, the
//! longitudinal component in any medium follows from `n_z = sqrt(n² - nx²)`.
//! The square root of a complex number has two branches, and picking the
//! wrong one turns a decaying evanescent or absorbed wave into one that
//! grows without bound. The passive-medium convention used here keeps the
//! imaginary part of `n_z` non-negative so that every forward-propagating
//! solution decays into the medium.
//!
//! # Mathematical Foundation
//!
//! - Transverse wavevector conservation (Snell's law) across all interfaces
//! - Principal square root with explicit branch correction
//! - Valid for absorbing media, evanescent waves, and total internal
//!   reflection

use num_complex::Complex;

use crate::precision::RealScalar;


/// Complex square root on the passive-medium branch.
///
/// Takes the principal square root and negates it when the imaginary part
/// comes out negative, so the result always satisfies `Im >= 0`. Applied to
/// `n² - nx²` this guarantees that absorbing and evanescent solutions decay
/// rather than grow.
pub fn branch_sqrt<T: RealScalar>(z: Complex<T>) -> Complex<T> {
    let w = z.sqrt();
    if w.im < T::zero() {
        -w
    } else {
        w
    }
}

/// Longitudinal wavevector `n_z = sqrt(n² - nx²)` for a medium of index `n`
/// at transverse wavevector `nx`.
pub fn longitudinal<T: RealScalar>(n: Complex<T>, nx: Complex<T>) -> Complex<T> {
    branch_sqrt(n * n - nx * nx)
}
