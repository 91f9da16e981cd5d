/// Upper bound on the attenuation part of the phase thickness. `exp(-60)` is
/// around 8.8e-27, far below any measurable transmitted amplitude, while
/// `exp(60)` still fits comfortably in single precision.
pub const ATTENUATION_CLAMP: f64 = 60.0;
/// Refractive index of the reference ambient medium that coherent layers are
/// embedded in (vacuum/air).
pub const AMBIENT_REFR_INDEX: f64 = 1.0;
