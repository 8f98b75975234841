//! Reference generator: places planet nuclei between the planet limits and
//! dresses them with masses, classifications, atmospheres, and moons.
//!
//! The model is intentionally coarse. It honours every input the request
//! validates and is fully reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use stargen_bodies::{Atmosphere, BodyKind, BodyList, CelestialBody, Star};
use stargen_core::constants::{
    DEFAULT_ECCENTRICITY_COEFFICIENT, DEFAULT_INNER_PLANET_FACTOR, DEFAULT_NAME, EARTH_RADIUS_KM,
};
use stargen_core::stellar;
use stargen_core::units::earth_to_solar_masses;
use tracing::debug;

use crate::input::{GenerationParameters, GeneratorInput};
use crate::output::{GeneratedSystem, StellarProfile};
use crate::{Generator, GeneratorError};

/// Gas identifiers (atomic numbers; molecules use the 900 range).
mod gases {
    pub const HYDROGEN: u32 = 1;
    pub const HELIUM: u32 = 2;
    pub const NITROGEN: u32 = 7;
    pub const OXYGEN: u32 = 8;
    pub const ARGON: u32 = 18;
    pub const CARBON_DIOXIDE: u32 = 900;
    pub const METHANE: u32 = 909;
}

/// Core mass (Earth masses) above which a nucleus beyond the snow line captures gas.
const CRITICAL_CORE_MASS_EARTH: f64 = 5.0;
/// Smallest rocky body (Earth masses) that holds an atmosphere.
const MIN_ATMOSPHERE_MASS_EARTH: f64 = 0.05;
/// Cap on the number of planet nuclei placed from scratch.
const MAX_NUCLEI: usize = 32;
const MAX_MOONS: u32 = 4;
/// Equilibrium temperature (K) of a body at 1 AU from a 1 L☉ star.
const EARTH_EQUILIBRIUM_TEMPERATURE_K: f64 = 278.6;

/// Accretion-style generator driven by a seeded ChaCha stream.
#[derive(Debug, Clone)]
pub struct AccretionGenerator {
    seed: u64,
}

impl AccretionGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for AccretionGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Nucleus {
    semi_major_axis_au: f64,
    eccentricity: f64,
    dust_mass: f64,
    gas_mass: f64,
}

/// Planet-zone bounds after defaults have been applied.
#[derive(Debug, Clone, Copy)]
struct Zone {
    inner_au: f64,
    outer_au: f64,
    eccentricity_coefficient: f64,
}

impl Generator for AccretionGenerator {
    fn generate(&mut self, input: &GeneratorInput<'_>) -> Result<GeneratedSystem, GeneratorError> {
        let mut rng = ChaChaRng::seed_from_u64(self.seed ^ input.sys_no as u64);
        let profile = resolve_star(input.star, &mut rng)?;
        let zone = planet_zone(&profile, input.parameters)?;

        let mut nuclei = match input.seed_system {
            Some(seed) => seed_nuclei(seed),
            None => place_nuclei(&profile, &zone, &mut rng),
        };
        nuclei.sort_by(|a, b| a.semi_major_axis_au.total_cmp(&b.semi_major_axis_au));

        let planets: BodyList = nuclei
            .iter()
            .enumerate()
            .map(|(index, nucleus)| {
                build_planet(index, nucleus, &profile, input.parameters, &mut rng)
            })
            .collect();

        debug!(
            "generated {} planets for system {} ({})",
            planets.len(),
            input.sys_no,
            input.system_name
        );

        Ok(GeneratedSystem {
            stellar_profile: profile,
            planets,
        })
    }
}

fn resolve_star(star: &Star, rng: &mut ChaChaRng) -> Result<StellarProfile, GeneratorError> {
    if !(star.mass >= 0.0 && star.luminosity >= 0.0) {
        return Err(GeneratorError::InvalidInput(format!(
            "star mass {} and luminosity {} must be non-negative",
            star.mass, star.luminosity
        )));
    }
    let (mass, luminosity) = match (star.mass, star.luminosity) {
        (m, l) if m > 0.0 && l > 0.0 => (m, l),
        (m, _) if m > 0.0 => (m, stellar::luminosity_from_mass(m)),
        (_, l) if l > 0.0 => (stellar::mass_from_luminosity(l), l),
        _ => {
            return Err(GeneratorError::InvalidInput(
                "star needs a mass or a luminosity".to_string(),
            ));
        }
    };

    let lifetime_years = stellar::main_sequence_lifetime(mass, luminosity);
    let max_age = lifetime_years.min(6.0e9);
    let age_years = if max_age > 1.0e9 {
        rng.random_range(1.0e9..max_age)
    } else {
        max_age * 0.5
    };

    Ok(StellarProfile {
        name: star.name().unwrap_or(DEFAULT_NAME).to_string(),
        mass,
        luminosity,
        ecosphere_radius_au: stellar::ecosphere_radius(luminosity),
        lifetime_years,
        age_years,
    })
}

fn planet_zone(
    profile: &StellarProfile,
    parameters: &GenerationParameters,
) -> Result<Zone, GeneratorError> {
    let inner_planet_factor = non_zero_or(parameters.inner_planet_factor, DEFAULT_INNER_PLANET_FACTOR);
    let eccentricity_coefficient = non_zero_or(
        parameters.eccentricity_coefficient,
        DEFAULT_ECCENTRICITY_COEFFICIENT,
    );

    let inner_au = stellar::innermost_planet(profile.mass, inner_planet_factor)
        .max(parameters.inner_dust_limit);
    let outer_au = non_zero_or(
        parameters.outer_planet_limit,
        stellar::outermost_planet(profile.mass),
    )
    .min(stellar::stellar_dust_limit(profile.mass));

    if inner_au >= outer_au {
        return Err(GeneratorError::EmptyPlanetZone { inner_au, outer_au });
    }
    Ok(Zone {
        inner_au,
        outer_au,
        eccentricity_coefficient,
    })
}

fn non_zero_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 { value } else { fallback }
}

fn seed_nuclei(seed: &BodyList) -> Vec<Nucleus> {
    seed.iter()
        .filter(|body| body.semi_major_axis_au > 0.0)
        .map(|body| Nucleus {
            semi_major_axis_au: body.semi_major_axis_au,
            eccentricity: body.eccentricity.clamp(0.0, 0.99),
            dust_mass: body.dust_mass.max(0.0),
            gas_mass: body.gas_mass.max(0.0),
        })
        .collect()
}

fn place_nuclei(profile: &StellarProfile, zone: &Zone, rng: &mut ChaChaRng) -> Vec<Nucleus> {
    let snow_line = stellar::snow_line(profile.luminosity);
    let mut nuclei = Vec::new();
    // The first nucleus always lands inside the zone, however narrow.
    let first_max = (zone.inner_au * 1.3).min(zone.outer_au);
    let mut a = if first_max > zone.inner_au {
        rng.random_range(zone.inner_au..first_max)
    } else {
        zone.inner_au
    };

    while a < zone.outer_au && nuclei.len() < MAX_NUCLEI {
        let eccentricity = random_eccentricity(zone.eccentricity_coefficient, rng);
        let core_earth = 10f64.powf(rng.random_range(-1.5..1.2)) * profile.mass.sqrt();
        let gas_earth = if a > snow_line && core_earth > CRITICAL_CORE_MASS_EARTH {
            core_earth * rng.random_range(5.0..60.0)
        } else {
            0.0
        };
        nuclei.push(Nucleus {
            semi_major_axis_au: a,
            eccentricity,
            dust_mass: earth_to_solar_masses(core_earth),
            gas_mass: earth_to_solar_masses(gas_earth),
        });
        a *= rng.random_range(1.4..2.0);
    }
    nuclei
}

fn random_eccentricity(coefficient: f64, rng: &mut ChaChaRng) -> f64 {
    let u: f64 = rng.random();
    (1.0 - u.powf(coefficient)).clamp(0.0, 0.99)
}

fn build_planet(
    index: usize,
    nucleus: &Nucleus,
    profile: &StellarProfile,
    parameters: &GenerationParameters,
    rng: &mut ChaChaRng,
) -> CelestialBody {
    let mut planet = CelestialBody::new()
        .with_orbit(nucleus.semi_major_axis_au, nucleus.eccentricity)
        .with_mass(nucleus.dust_mass, nucleus.gas_mass);
    planet.number = index as u32 + 1;
    planet.axial_tilt_deg = rng.random_range(0.0..40.0);
    planet.kind = classify(&planet, profile);
    planet.surface_temperature_k = equilibrium_temperature(profile.luminosity, planet.semi_major_axis_au);
    fill_structure(&mut planet);

    if parameters.do_gases {
        if let Some(atmosphere) = atmosphere_for(&planet, rng) {
            planet.surface_pressure_mb = atmosphere.total_pressure_mb();
            planet.atmosphere = Some(atmosphere);
        }
    }
    fill_surface(&mut planet, rng);

    if planet.is_gas_giant() {
        planet.minor_moons = rng.random_range(0..20);
    }
    if parameters.do_moons {
        planet.moons = build_moons(&planet, profile, parameters, rng);
    }
    planet
}

fn classify(body: &CelestialBody, profile: &StellarProfile) -> BodyKind {
    let mass_earth = body.mass_earth();
    let a = body.semi_major_axis_au;
    let eco = profile.ecosphere_radius_au;

    if body.gas_mass > body.dust_mass {
        return match mass_earth {
            m if m > 50.0 => BodyKind::GasGiant,
            m if m > 10.0 => BodyKind::SubGasGiant,
            _ => BodyKind::SubSubGasGiant,
        };
    }
    if mass_earth < 0.001 {
        return BodyKind::Asteroids;
    }
    if a < 0.1 * eco {
        return BodyKind::OneFace;
    }
    if a < 0.7 * eco {
        return if mass_earth > 0.5 {
            BodyKind::Venusian
        } else {
            BodyKind::Rock
        };
    }
    if a <= 1.5 * eco {
        return if mass_earth > 0.3 {
            BodyKind::Terrestrial
        } else {
            BodyKind::Martian
        };
    }
    if a < stellar::snow_line(profile.luminosity) {
        return if mass_earth > 2.0 {
            BodyKind::Water
        } else {
            BodyKind::Martian
        };
    }
    BodyKind::Ice
}

fn equilibrium_temperature(luminosity: f64, a: f64) -> f64 {
    EARTH_EQUILIBRIUM_TEMPERATURE_K * luminosity.powf(0.25) / a.sqrt()
}

fn fill_structure(body: &mut CelestialBody) {
    let mass_earth = body.mass_earth().max(1e-9);
    let radius_earth = if body.is_gas_giant() {
        (mass_earth.powf(0.5) * 1.2).min(12.0)
    } else {
        mass_earth.powf(0.27)
    };
    body.radius_km = radius_earth * EARTH_RADIUS_KM;
    // Earth: 5.51 g/cm³ at one Earth mass and radius.
    body.density_g_cm3 = 5.51 * mass_earth / radius_earth.powi(3);
}

fn atmosphere_for(body: &CelestialBody, rng: &mut ChaChaRng) -> Option<Atmosphere> {
    use self::gases::*;

    if body.is_gas_giant() {
        let total = rng.random_range(1.0e5..1.0e6);
        return Some(
            Atmosphere::new()
                .with_gas(HYDROGEN, total * 0.86)
                .with_gas(HELIUM, total * 0.14),
        );
    }
    if body.mass_earth() < MIN_ATMOSPHERE_MASS_EARTH {
        return None;
    }

    let scale = body.mass_earth().powf(1.5);
    let atmosphere = match body.kind {
        BodyKind::Venusian => {
            let total = 90_000.0 * scale * rng.random_range(0.5..1.5);
            Atmosphere::new()
                .with_gas(CARBON_DIOXIDE, total * 0.965)
                .with_gas(NITROGEN, total * 0.035)
        }
        BodyKind::Terrestrial | BodyKind::Water => {
            let total = 1_013.0 * scale * rng.random_range(0.5..2.0);
            Atmosphere::new()
                .with_gas(NITROGEN, total * 0.78)
                .with_gas(OXYGEN, total * 0.21)
                .with_gas(ARGON, total * 0.01)
        }
        BodyKind::Ice => {
            let total = 15.0 * scale * rng.random_range(0.1..2.0);
            Atmosphere::new()
                .with_gas(NITROGEN, total * 0.95)
                .with_gas(METHANE, total * 0.05)
        }
        BodyKind::Martian | BodyKind::Rock => {
            let total = 6.0 * scale * rng.random_range(0.1..2.0);
            Atmosphere::new()
                .with_gas(CARBON_DIOXIDE, total * 0.95)
                .with_gas(NITROGEN, total * 0.03)
                .with_gas(ARGON, total * 0.02)
        }
        _ => return None,
    };
    Some(atmosphere)
}

fn fill_surface(body: &mut CelestialBody, rng: &mut ChaChaRng) {
    match body.kind {
        BodyKind::Terrestrial => {
            body.hydrosphere = rng.random_range(0.3..0.9);
            body.cloud_cover = rng.random_range(0.2..0.7);
            body.ice_cover = rng.random_range(0.0..0.1);
        }
        BodyKind::Water => {
            body.hydrosphere = 1.0;
            body.cloud_cover = rng.random_range(0.5..1.0);
        }
        BodyKind::Venusian => body.cloud_cover = 1.0,
        BodyKind::Ice => body.ice_cover = rng.random_range(0.7..1.0),
        _ => {}
    }
}

fn build_moons(
    planet: &CelestialBody,
    profile: &StellarProfile,
    parameters: &GenerationParameters,
    rng: &mut ChaChaRng,
) -> BodyList {
    let mass_earth = planet.mass_earth();
    let count = if planet.is_gas_giant() {
        rng.random_range(1..=MAX_MOONS)
    } else if mass_earth > 0.5 {
        rng.random_range(0..=1)
    } else {
        0
    };

    // Moons live inside a fraction of the planet's Hill radius.
    let hill_au = planet.semi_major_axis_au
        * (1.0 - planet.eccentricity)
        * (planet.mass() / (3.0 * profile.mass)).cbrt();

    (0..count)
        .map(|index| {
            let moon_earth = mass_earth * rng.random_range(1.0e-5..1.0e-3);
            let mut moon = CelestialBody::new()
                .with_orbit(
                    hill_au * 0.02 * f64::from(index + 1),
                    rng.random_range(0.0..0.05),
                )
                .with_mass(earth_to_solar_masses(moon_earth), 0.0);
            moon.number = index + 1;
            moon.kind = if planet.semi_major_axis_au < stellar::snow_line(profile.luminosity) {
                BodyKind::Rock
            } else {
                BodyKind::Ice
            };
            moon.surface_temperature_k = planet.surface_temperature_k;
            fill_structure(&mut moon);
            if parameters.do_gases && moon.mass_earth() >= MIN_ATMOSPHERE_MASS_EARTH {
                if let Some(atmosphere) = atmosphere_for(&moon, rng) {
                    moon.surface_pressure_mb = atmosphere.total_pressure_mb();
                    moon.atmosphere = Some(atmosphere);
                }
            }
            moon
        })
        .collect()
}
