//! Re-exported APIs for consumers of the request crate.

pub use crate::error::{ErrorKind, GenerationError};
pub use crate::request::{GenerationRequest, GenerationState};
pub use stargen_bodies::{Atmosphere, BodyKind, BodyList, CelestialBody, ReleaseReport, Star};
pub use stargen_generator::{
    AccretionGenerator, GeneratedSystem, GenerationParameters, Generator, GeneratorError,
    GeneratorInput, StellarProfile,
};

pub mod manifest {
    use stargen_bodies::{BodyList, CelestialBody, Star};
    use stargen_config::{RequestConfig, SeedBodyConfig, StarConfig};
    use stargen_generator::GenerationParameters;

    use crate::request::GenerationRequest;

    /// Build a pending request from a parsed manifest.
    ///
    /// Seed mode is switched on exactly when the manifest carries a seed system.
    pub fn from_config(config: &RequestConfig) -> GenerationRequest {
        let mut request = GenerationRequest::new();
        request.flag_char = config.flag_char;
        request.sys_no = config.sys_no;
        request.system_name = Some(config.system_name.clone());
        request.rng_seed = config.rng_seed;
        request.star = config.star.as_ref().map(star_from_config);
        request.parameters = GenerationParameters {
            inner_dust_limit: config.inner_dust_limit,
            outer_planet_limit: config.outer_planet_limit,
            eccentricity_coefficient: config.eccentricity_coefficient,
            inner_planet_factor: config.inner_planet_factor,
            do_gases: config.do_gases,
            do_moons: config.do_moons,
        };
        if let Some(seed) = &config.seed_system {
            request.attach_seed_system(seed.iter().map(seed_body_from_config).collect());
        }
        request
    }

    pub fn star_from_config(config: &StarConfig) -> Star {
        Star::new()
            .with_name(config.name.clone())
            .with_mass(config.mass)
            .with_luminosity(config.luminosity)
    }

    fn seed_body_from_config(config: &SeedBodyConfig) -> CelestialBody {
        let mut body = CelestialBody::new()
            .with_orbit(config.semi_major_axis_au, config.eccentricity)
            .with_mass(config.dust_mass, config.gas_mass);
        body.moons = config
            .moons
            .iter()
            .map(seed_body_from_config)
            .collect::<BodyList>();
        body
    }
}
