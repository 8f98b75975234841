//! Inputs handed to a generator.

use stargen_bodies::{BodyList, Star};
use stargen_core::constants::{DEFAULT_ECCENTRICITY_COEFFICIENT, DEFAULT_INNER_PLANET_FACTOR};

/// Numeric tuning and feature switches for generation.
///
/// A limit of `0.0` means "no limit / use the generator's default".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    /// Inner edge of the dust disk (AU).
    pub inner_dust_limit: f64,
    /// Outermost orbit a planet may occupy (AU).
    pub outer_planet_limit: f64,
    pub eccentricity_coefficient: f64,
    pub inner_planet_factor: f64,
    /// Compute atmospheric gas composition.
    pub do_gases: bool,
    /// Generate moons.
    pub do_moons: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            inner_dust_limit: 0.0,
            outer_planet_limit: 0.0,
            eccentricity_coefficient: DEFAULT_ECCENTRICITY_COEFFICIENT,
            inner_planet_factor: DEFAULT_INNER_PLANET_FACTOR,
            do_gases: false,
            do_moons: false,
        }
    }
}

/// Borrowed view of a validated request.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorInput<'a> {
    pub star: &'a Star,
    /// Present exactly when seed mode is on.
    pub seed_system: Option<&'a BodyList>,
    pub flag_char: char,
    pub sys_no: i32,
    pub system_name: &'a str,
    pub parameters: &'a GenerationParameters,
}
