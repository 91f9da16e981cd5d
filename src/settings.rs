use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use crate::fresnel::Polarization;
use crate::precision::{Backend, Precision};


/// Uniformly sampled closed interval for one grid axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepSettings {
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

/// Runtime configuration for the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub wavelength: SweepSettings,
    /// Angle of incidence sweep in degrees.
    pub angle: SweepSettings,
    pub polarization: Polarization,
    #[serde(with = "complex_reim")]
    pub medium_refr_index: Complex<f64>,
    #[serde(with = "complex_reim")]
    pub layer_refr_index: Complex<f64>,
    pub layer_thickness: f64,
    #[serde(with = "complex_reim")]
    pub substrate_refr_index: Complex<f64>,
    #[serde(default = "default_precision")]
    pub precision: Precision,
    #[serde(default = "default_backend")]
    pub backend: Backend,
}

/// Serde adapter for `Complex<f64>` as a `{ re, im }` TOML table, matching the
/// configuration format used by `config/default.toml` and the CLI docs.
mod complex_reim {
    use num_complex::Complex;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct ReIm {
        re: f64,
        im: f64,
    }

    pub fn serialize<S: Serializer>(value: &Complex<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        ReIm {
            re: value.re,
            im: value.im,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Complex<f64>, D::Error> {
        let ReIm { re, im } = ReIm::deserialize(deserializer)?;
        Ok(Complex::new(re, im))
    }
}

fn default_precision() -> Precision {
    Precision::Double
}

fn default_backend() -> Backend {
    Backend::Cpu
}

pub fn load_default_config() -> Result<Settings> {
    let root = retrieve_project_root()?;
    let default_config_file = root.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()?;

    let config: Settings = settings.try_deserialize()?;
    validate_config(&config)?;

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    let root = retrieve_project_root()?;

    let default_config_file = root.join("config/default.toml");
    let local_config = root.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        log::debug!("using local configuration: {:?}", local_config);
        local_config
    } else {
        log::debug!("using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("lamella"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(sweep) = args.wavelength {
        config.wavelength = parse_sweep(&sweep)?;
    }
    if let Some(sweep) = args.angle {
        config.angle = parse_sweep(&sweep)?;
    }
    if let Some(pol) = args.pol {
        config.polarization = pol;
    }
    if let Some(medium) = args.ri0 {
        config.medium_refr_index = medium;
    }
    if let Some(layer) = args.ri {
        config.layer_refr_index = layer;
    }
    if let Some(substrate) = args.ris {
        config.substrate_refr_index = substrate;
    }
    if let Some(thickness) = args.d {
        config.layer_thickness = thickness;
    }
    if let Some(precision) = args.precision {
        config.precision = precision;
    }
    if let Some(backend) = args.backend {
        config.backend = backend;
    }

    validate_config(&config)?;

    println!("{}", config);

    Ok(config)
}

/// Retrieve the project root directory.
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the LAMELLA_ROOT_DIR environment variable is set, use it.
/// 3. Otherwise walk up from the executable looking for a "config" subdirectory.
fn retrieve_project_root() -> Result<std::path::PathBuf> {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        return Ok(std::path::PathBuf::from(manifest_dir));
    }
    if let Ok(path) = env::var("LAMELLA_ROOT_DIR") {
        return Ok(std::path::PathBuf::from(path));
    }

    let exe_path = env::current_exe()?;
    let mut current_dir = exe_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("failed to get executable directory"))?
        .to_path_buf();

    loop {
        if current_dir.join("config").is_dir() {
            return Ok(current_dir);
        }
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(anyhow::anyhow!("could not find project root directory")),
        }
    }
}

fn parse_sweep(values: &[f64]) -> Result<SweepSettings> {
    if values.len() != 3 {
        return Err(anyhow::anyhow!(
            "sweep specification needs exactly three values: min max samples, got {}",
            values.len()
        ));
    }
    Ok(SweepSettings {
        min: values[0],
        max: values[1],
        samples: values[2] as usize,
    })
}

fn validate_config(config: &Settings) -> Result<()> {
    if config.wavelength.min <= 0.0 {
        return Err(anyhow::anyhow!("wavelengths must be greater than 0"));
    }
    if config.wavelength.max < config.wavelength.min || config.angle.max < config.angle.min {
        return Err(anyhow::anyhow!("sweep max must not be below min"));
    }
    if config.wavelength.samples == 0 || config.angle.samples == 0 {
        return Err(anyhow::anyhow!("sweeps need at least one sample"));
    }
    if config.layer_thickness < 0.0 {
        return Err(anyhow::anyhow!("layer thickness must not be negative"));
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "LAMELLA - coherent transfer-matrix optics of planar stratified media"
)]
pub struct CliArgs {
    /// Wavelength sweep: min max samples (units of the thickness).
    #[arg(short, long, num_args = 3, value_delimiter = ' ')]
    wavelength: Option<Vec<f64>>,

    /// Angle-of-incidence sweep in degrees: min max samples.
    #[arg(short, long, num_args = 3, value_delimiter = ' ')]
    angle: Option<Vec<f64>>,

    /// Polarization state, s or p.
    #[arg(short, long)]
    pol: Option<Polarization>,

    /// The refractive index of the incidence medium.
    #[arg(long)]
    ri0: Option<Complex<f64>>,

    /// The refractive index of the layer.
    #[arg(long)]
    ri: Option<Complex<f64>>,

    /// The refractive index of the substrate.
    #[arg(long)]
    ris: Option<Complex<f64>>,

    /// Layer thickness in the units of the wavelength.
    #[arg(short, long)]
    d: Option<f64>,

    /// Complex arithmetic width.
    #[arg(long)]
    precision: Option<Precision>,

    /// Grid evaluation backend.
    #[arg(long)]
    backend: Option<Backend>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Wavelengths: {:.1} to {:.1} ({} samples)
  - Angles: {:.1} to {:.1} degrees ({} samples)
  - Polarization: {}
  - Medium Refractive Index: {:.4} + {:.4}i
  - Layer Refractive Index: {:.4} + {:.4}i
  - Layer Thickness: {:.4}
  - Substrate Refractive Index: {:.4} + {:.4}i
  - Precision: {:?}
  - Backend: {:?}
  ",
            self.wavelength.min,
            self.wavelength.max,
            self.wavelength.samples,
            self.angle.min,
            self.angle.max,
            self.angle.samples,
            self.polarization,
            self.medium_refr_index.re,
            self.medium_refr_index.im,
            self.layer_refr_index.re,
            self.layer_refr_index.im,
            self.layer_thickness,
            self.substrate_refr_index.re,
            self.substrate_refr_index.im,
            self.precision,
            self.backend,
        )
    }
}
