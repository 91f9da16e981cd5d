//! Single-scenario stack assembly and solution.
//!
//! A [`Problem`] binds settings to a grid and a solver, assembles the
//! environment, coherent layer and substrate matrices, and extracts the
//! global amplitudes. It is the driver around the engine, mirroring the
//! original script entry points; the engine itself stays a pure numeric
//! API.

use std::time::Instant;

use anyhow::Result;
use log::info;
use ndarray::Array1;
use num_complex::Complex;

use crate::config;
use crate::grid::Grid;
use crate::output;
use crate::precision::RealScalar;
use crate::settings::Settings;
use crate::solver::Solver;
use crate::stack::Amplitudes;

#[cfg(test)]
mod tests {

    use num_complex::Complex;

    use super::*;
    use crate::fresnel::Polarization;
    use crate::precision::Backend;
    use crate::settings::SweepSettings;

    fn test_settings() -> Settings {
        Settings {
            wavelength: SweepSettings {
                min: 400.0,
                max: 800.0,
                samples: 41,
            },
            angle: SweepSettings {
                min: 0.0,
                max: 89.0,
                samples: 10,
            },
            polarization: Polarization::S,
            medium_refr_index: Complex::new(1.0, 0.0),
            layer_refr_index: Complex::new(3.0, 1.0),
            layer_thickness: 10.0,
            substrate_refr_index: Complex::new(1.52, 0.0),
            precision: crate::precision::Precision::Double,
            backend: Backend::Cpu,
        }
    }

    #[test]
    fn solves_configured_scenario() {
        let mut problem = Problem::<f64>::new(test_settings()).unwrap();
        problem.solve().unwrap();
        let result = problem.result.unwrap();
        assert_eq!(result.r.dim(), (41, 10));
        assert!(result
            .t
            .iter()
            .all(|z| z.re.is_finite() && z.im.is_finite()));
    }
}

/// One configured single-layer computation over the full grid.
#[derive(Debug, Clone)]
pub struct Problem<T: RealScalar> {
    pub settings: Settings,
    pub grid: Grid<T>,
    solver: Solver<T>,
    pub result: Option<Amplitudes<T>>,
}

impl<T: RealScalar> Problem<T> {
    /// Builds the grid and solver from settings.
    pub fn new(settings: Settings) -> Result<Self> {
        let grid = Grid::new(
            Array1::linspace(
                T::from_f64(settings.wavelength.min),
                T::from_f64(settings.wavelength.max),
                settings.wavelength.samples,
            ),
            Array1::linspace(
                T::from_f64(settings.angle.min),
                T::from_f64(settings.angle.max),
                settings.angle.samples,
            ),
        )?;
        let solver = Solver::new(settings.backend);
        Ok(Self {
            settings,
            grid,
            solver,
            result: None,
        })
    }

    fn spectral(&self, n: Complex<f64>) -> Array1<Complex<T>> {
        Array1::from_elem(
            self.grid.wavelengths.len(),
            Complex::new(T::from_f64(n.re), T::from_f64(n.im)),
        )
    }

    /// Assembles environment, coherent layer and substrate into the system
    /// matrix and extracts the global amplitudes.
    pub fn solve(&mut self) -> Result<()> {
        let start = Instant::now();
        let pol = self.settings.polarization;

        let n_env = self.spectral(self.settings.medium_refr_index);
        let n_layer = self.spectral(self.settings.layer_refr_index);
        let n_subs = self.spectral(self.settings.substrate_refr_index);
        let ambient = self.spectral(Complex::new(config::AMBIENT_REFR_INDEX, 0.0));

        let nx = self.grid.transverse_field(&n_env)?;
        let entry = self.solver.interface(pol, &n_env, &ambient, &nx)?;
        let layer = self.solver.coherent_layer(
            pol,
            &n_layer,
            T::from_f64(self.settings.layer_thickness),
            &self.grid.wavelengths,
            &nx,
        )?;
        let exit = self.solver.interface(pol, &ambient, &n_subs, &nx)?;

        let system = self.solver.system(&[entry, layer, exit])?;
        self.result = Some(self.solver.amplitudes(&system));

        let (rows, cols) = self.grid.dim();
        info!(
            "solved {}x{} grid ({} pol, {:?}) in {:.2?}",
            rows,
            cols,
            pol,
            self.solver.precision(),
            start.elapsed()
        );
        Ok(())
    }

    /// Writes the amplitude grid and a run summary to the working
    /// directory.
    pub fn writeup(&self) -> Result<()> {
        let result = self
            .result
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no result to write, call solve first"))?;
        output::write_amplitudes(&self.grid, result)?;
        output::write_summary(&self.settings)?;
        Ok(())
    }
}
