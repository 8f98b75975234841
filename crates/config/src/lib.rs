//! Request manifests for stargen: serde models and YAML/TOML loaders.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use stargen_core::constants::{
    DEFAULT_ECCENTRICITY_COEFFICIENT, DEFAULT_FLAG_CHAR, DEFAULT_INNER_PLANET_FACTOR, DEFAULT_NAME,
};
use thiserror::Error;

/// One generation request as written in a manifest. Omitted fields take the
/// same defaults as a freshly initialised request.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RequestConfig {
    #[serde(default = "default_name")]
    pub system_name: String,
    #[serde(default = "default_flag_char")]
    pub flag_char: char,
    #[serde(default)]
    pub sys_no: i32,
    #[serde(default)]
    pub rng_seed: u64,
    #[serde(default)]
    pub star: Option<StarConfig>,
    #[serde(default)]
    pub inner_dust_limit: f64,
    #[serde(default)]
    pub outer_planet_limit: f64,
    #[serde(default = "default_eccentricity_coefficient")]
    pub eccentricity_coefficient: f64,
    #[serde(default = "default_inner_planet_factor")]
    pub inner_planet_factor: f64,
    #[serde(default)]
    pub do_gases: bool,
    #[serde(default)]
    pub do_moons: bool,
    /// When present, generation runs in seed mode around these bodies.
    #[serde(default)]
    pub seed_system: Option<Vec<SeedBodyConfig>>,
}

/// Host star block of a manifest.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StarConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub mass: f64,
    #[serde(default)]
    pub luminosity: f64,
}

/// Pre-existing body supplied as part of a seed system.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedBodyConfig {
    pub semi_major_axis_au: f64,
    #[serde(default)]
    pub eccentricity: f64,
    #[serde(default)]
    pub dust_mass: f64,
    #[serde(default)]
    pub gas_mass: f64,
    #[serde(default)]
    pub moons: Vec<SeedBodyConfig>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_flag_char() -> char {
    DEFAULT_FLAG_CHAR
}

fn default_eccentricity_coefficient() -> f64 {
    DEFAULT_ECCENTRICITY_COEFFICIENT
}

fn default_inner_planet_factor() -> f64 {
    DEFAULT_INNER_PLANET_FACTOR
}

/// Load request manifests from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<RequestConfig>, ConfigError> {
    load_records(path)
}

/// Parse a single TOML manifest held in memory.
pub fn parse_request_toml(contents: &str) -> Result<RequestConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
