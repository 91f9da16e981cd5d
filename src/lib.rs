//! LAMELLA - coherent transfer-matrix optics of planar stratified media.
//!
//! Computes reflection and transmission amplitudes of layered media under
//! coherent plane-wave illumination with the 2x2 characteristic-matrix
//! method, batched elementwise over a wavelength-angle grid, for both
//! polarization states and complex (absorbing) refractive indices.
//!
//! The engine is built from small pure pieces:
//! - [`grid`]: wavelength and angle axes plus the transverse wavevector
//!   field shared by the whole stack
//! - [`snell`]: branch-correct longitudinal wavevectors
//! - [`fresnel`]: polarization-resolved interface coefficients
//! - [`interface`], [`propagation`], [`layer`]: the element matrices
//! - [`stack`]: ordered composition and amplitude extraction
//! - [`solver`]: the precision- and backend-configured façade
//!
//! Everything else ([`settings`], [`problem`], [`output`]) is the runtime
//! driver around the engine.

pub mod config;
pub mod error;
pub mod fresnel;
pub mod grid;
pub mod interface;
pub mod layer;
pub mod matrix;
pub mod output;
pub mod precision;
pub mod problem;
pub mod propagation;
pub mod settings;
pub mod snell;
pub mod solver;
pub mod stack;
