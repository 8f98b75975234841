//! The generation request: inputs, validation gate, one-shot state, and teardown.

use stargen_bodies::{BodyList, ReleaseReport, Star};
use stargen_core::constants::{DEFAULT_FLAG_CHAR, DEFAULT_NAME};
use stargen_generator::{
    AccretionGenerator, GeneratedSystem, GenerationParameters, Generator, GeneratorInput,
    StellarProfile,
};
use tracing::{debug, info, warn};

use crate::error::GenerationError;

/// Lifecycle of a request. The output tree only exists inside `Generated`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationState {
    #[default]
    Pending,
    Generated(GeneratedSystem),
    /// Generated once, output since released.
    Released,
}

/// Everything needed to generate one star system, plus the result once generated.
///
/// The request owns whatever is attached to it. `generate` succeeds at most
/// once; a refused call leaves the request untouched so the caller can fix
/// the inputs and try again.
#[derive(Debug)]
pub struct GenerationRequest {
    pub star: Option<Star>,
    pub use_seed_system: bool,
    pub seed_system: Option<BodyList>,
    pub flag_char: char,
    pub sys_no: i32,
    pub system_name: Option<String>,
    /// Seed for [`GenerationRequest::generate_with_default`].
    pub rng_seed: u64,
    pub parameters: GenerationParameters,
    state: GenerationState,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationRequest {
    pub fn new() -> Self {
        Self {
            star: None,
            use_seed_system: false,
            seed_system: None,
            flag_char: DEFAULT_FLAG_CHAR,
            sys_no: 0,
            system_name: Some(DEFAULT_NAME.to_string()),
            rng_seed: 0,
            parameters: GenerationParameters::default(),
            state: GenerationState::Pending,
        }
    }

    /// Take ownership of `star`, returning any star previously attached.
    pub fn attach_star(&mut self, star: Star) -> Option<Star> {
        self.star.replace(star)
    }

    /// Take ownership of a seed system and switch seed mode on.
    pub fn attach_seed_system(&mut self, seed: BodyList) -> Option<BodyList> {
        self.use_seed_system = true;
        self.seed_system.replace(seed)
    }

    pub fn set_system_name(&mut self, name: impl Into<String>) {
        self.system_name = Some(name.into());
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// True once generation has succeeded, including after the output was released.
    pub fn is_generated(&self) -> bool {
        !matches!(self.state, GenerationState::Pending)
    }

    /// Run the validation gate without generating.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn validate(&self) -> Result<GeneratorInput<'_>, GenerationError> {
        if self.is_generated() {
            return Err(rejected(GenerationError::InvalidState(
                "system has already been generated",
            )));
        }
        let seed_system = if self.use_seed_system {
            match &self.seed_system {
                Some(seed) if !seed.is_empty() => Some(seed),
                _ => return Err(rejected(GenerationError::NullReference("seed system"))),
            }
        } else {
            None
        };
        let Some(system_name) = self.system_name.as_deref() else {
            return Err(rejected(GenerationError::NullReference("system name")));
        };
        let Some(star) = &self.star else {
            return Err(rejected(GenerationError::NullReference("star")));
        };
        if !star.has_mass_or_luminosity() {
            return Err(rejected(GenerationError::MasslessStar));
        }
        if self.sys_no < 0 {
            return Err(rejected(GenerationError::InvalidArgument {
                field: "sys_no",
                value: f64::from(self.sys_no),
            }));
        }

        let p = &self.parameters;
        non_negative("inner_dust_limit", p.inner_dust_limit)?;
        non_negative("outer_planet_limit", p.outer_planet_limit)?;
        non_negative("eccentricity_coefficient", p.eccentricity_coefficient)?;
        non_negative("inner_planet_factor", p.inner_planet_factor)?;

        Ok(GeneratorInput {
            star,
            seed_system,
            flag_char: self.flag_char,
            sys_no: self.sys_no,
            system_name,
            parameters: p,
        })
    }

    /// Validate, then hand the inputs to `generator` exactly once.
    ///
    /// On success the generator's output is owned by the request and the
    /// request is permanently marked generated. On failure nothing changes.
    pub fn generate<G>(&mut self, generator: &mut G) -> Result<&GeneratedSystem, GenerationError>
    where
        G: Generator + ?Sized,
    {
        let system = {
            let input = self.validate()?;
            generator
                .generate(&input)
                .map_err(|err| rejected(GenerationError::Generator(err)))?
        };

        info!(
            "generated system {} '{}': {} planets, {} moons",
            self.sys_no,
            self.system_name.as_deref().unwrap_or(DEFAULT_NAME),
            system.planet_count(),
            system.moon_count()
        );
        self.state = GenerationState::Generated(system);
        self.generated_system()
    }

    /// Generate with the bundled [`AccretionGenerator`] seeded from `rng_seed`.
    pub fn generate_with_default(&mut self) -> Result<&GeneratedSystem, GenerationError> {
        let mut generator = AccretionGenerator::new(self.rng_seed);
        self.generate(&mut generator)
    }

    /// The generated system, or `InvalidState` if there is none to view.
    pub fn generated_system(&self) -> Result<&GeneratedSystem, GenerationError> {
        match &self.state {
            GenerationState::Generated(system) => Ok(system),
            GenerationState::Pending => Err(GenerationError::InvalidState(
                "system has not been generated",
            )),
            GenerationState::Released => Err(GenerationError::InvalidState(
                "generated system was released",
            )),
        }
    }

    /// Innermost-to-outermost planets of the generated system.
    pub fn planets(&self) -> Result<&BodyList, GenerationError> {
        self.generated_system().map(|system| &system.planets)
    }

    pub fn stellar_profile(&self) -> Result<&StellarProfile, GenerationError> {
        self.generated_system().map(|system| &system.stellar_profile)
    }

    /// Release the star, seed system, system name, and generated output.
    ///
    /// Anything absent is skipped. A second call releases nothing. A request
    /// that had generated stays marked as generated.
    pub fn release(&mut self) -> ReleaseReport {
        let mut report = ReleaseReport::default();

        if let Some(mut star) = self.star.take() {
            report += star.release();
            report.stars += 1;
        }
        if let Some(mut seed) = self.seed_system.take() {
            report += seed.release();
        }
        if self.system_name.take().is_some() {
            report.names += 1;
        }
        self.state = match std::mem::take(&mut self.state) {
            GenerationState::Generated(mut system) => {
                report += system.planets.release();
                GenerationState::Released
            }
            other => other,
        };

        if !report.is_empty() {
            debug!(
                "released request: {} bodies, {} atmospheres, {} records total",
                report.bodies,
                report.atmospheres,
                report.allocations()
            );
        }
        report
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), GenerationError> {
    // NaN fails this check too.
    if value >= 0.0 {
        Ok(())
    } else {
        Err(rejected(GenerationError::InvalidArgument { field, value }))
    }
}

fn rejected(err: GenerationError) -> GenerationError {
    warn!("generation refused: {err}");
    err
}

#[cfg(test)]
mod tests {
    use stargen_bodies::{Atmosphere, CelestialBody};
    use stargen_generator::GeneratorError;

    use super::*;
    use crate::error::ErrorKind;

    /// Generator double that counts calls and returns a fixed tree.
    struct Recording {
        calls: usize,
        planets: usize,
        moons: usize,
    }

    impl Recording {
        fn new(planets: usize, moons: usize) -> Self {
            Self {
                calls: 0,
                planets,
                moons,
            }
        }
    }

    impl Generator for Recording {
        fn generate(
            &mut self,
            input: &GeneratorInput<'_>,
        ) -> Result<GeneratedSystem, GeneratorError> {
            self.calls += 1;
            let planets = (0..self.planets)
                .map(|i| {
                    let mut planet = CelestialBody::new()
                        .with_orbit(1.0 + i as f64, 0.0)
                        .with_atmosphere(Atmosphere::new().with_gas(7, 1_000.0));
                    for _ in 0..self.moons {
                        planet = planet.with_moon(CelestialBody::new());
                    }
                    planet
                })
                .collect();
            Ok(GeneratedSystem {
                stellar_profile: StellarProfile {
                    name: input.system_name.to_string(),
                    mass: input.star.mass,
                    luminosity: input.star.luminosity,
                    ecosphere_radius_au: 1.0,
                    lifetime_years: 1.0e10,
                    age_years: 4.6e9,
                },
                planets,
            })
        }
    }

    struct Failing;

    impl Generator for Failing {
        fn generate(&mut self, _: &GeneratorInput<'_>) -> Result<GeneratedSystem, GeneratorError> {
            Err(GeneratorError::InvalidInput("boom".to_string()))
        }
    }

    fn ready_request() -> GenerationRequest {
        let mut request = GenerationRequest::new();
        request.attach_star(Star::new().with_mass(1.0));
        request
    }

    #[test]
    fn new_request_has_documented_defaults() {
        let request = GenerationRequest::new();
        assert!(request.star.is_none());
        assert!(!request.use_seed_system);
        assert!(request.seed_system.is_none());
        assert_eq!(request.flag_char, '?');
        assert_eq!(request.sys_no, 0);
        assert_eq!(request.system_name.as_deref(), Some("Unnamed"));
        assert_eq!(request.parameters.inner_dust_limit, 0.0);
        assert_eq!(request.parameters.outer_planet_limit, 0.0);
        assert_eq!(request.parameters.eccentricity_coefficient, 0.077);
        assert_eq!(request.parameters.inner_planet_factor, 0.3);
        assert!(!request.parameters.do_gases);
        assert!(!request.parameters.do_moons);
        assert!(!request.is_generated());
        assert_eq!(request.state(), &GenerationState::Pending);
    }

    #[test]
    fn checks_run_in_order() {
        let mut request = GenerationRequest::new();
        request.use_seed_system = true;
        request.system_name = None;
        request.sys_no = -1;
        assert_eq!(
            request.validate().unwrap_err(),
            GenerationError::NullReference("seed system")
        );

        request.use_seed_system = false;
        assert_eq!(
            request.validate().unwrap_err(),
            GenerationError::NullReference("system name")
        );

        request.set_system_name("Ordered");
        assert_eq!(
            request.validate().unwrap_err(),
            GenerationError::NullReference("star")
        );

        request.attach_star(Star::new());
        assert_eq!(request.validate().unwrap_err(), GenerationError::MasslessStar);

        request.star = Some(Star::new().with_luminosity(1.0));
        assert_eq!(request.validate().unwrap_err().kind(), ErrorKind::InvalidArgument);

        request.sys_no = 0;
        request.parameters.inner_dust_limit = -0.5;
        request.parameters.inner_planet_factor = -1.0;
        assert_eq!(
            request.validate().unwrap_err(),
            GenerationError::InvalidArgument {
                field: "inner_dust_limit",
                value: -0.5
            }
        );
    }

    #[test]
    fn empty_seed_system_counts_as_missing() {
        let mut request = ready_request();
        request.attach_seed_system(BodyList::new());
        let mut generator = Recording::new(1, 0);
        assert_eq!(
            request.generate(&mut generator).unwrap_err(),
            GenerationError::NullReference("seed system")
        );
        assert_eq!(generator.calls, 0);
        assert!(!request.is_generated());
    }

    #[test]
    fn each_negative_parameter_is_rejected() {
        let setters: [fn(&mut GenerationParameters); 4] = [
            |p| p.inner_dust_limit = -1.0,
            |p| p.outer_planet_limit = -1.0,
            |p| p.eccentricity_coefficient = -1.0,
            |p| p.inner_planet_factor = -1.0,
        ];
        for set in setters {
            let mut request = ready_request();
            set(&mut request.parameters);
            let mut generator = Recording::new(1, 0);
            let err = request.generate(&mut generator).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(generator.calls, 0);
            assert!(!request.is_generated());
        }
    }

    #[test]
    fn nan_parameter_is_rejected() {
        let mut request = ready_request();
        request.parameters.outer_planet_limit = f64::NAN;
        assert_eq!(
            request.validate().unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn generator_runs_once_and_output_is_kept() {
        let mut request = ready_request();
        let mut generator = Recording::new(3, 2);

        let planets = request.generate(&mut generator).expect("first").planet_count();
        assert_eq!(planets, 3);
        let before = request.generated_system().expect("output").clone();

        let err = request.generate(&mut generator).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(generator.calls, 1);
        assert_eq!(request.generated_system().expect("output"), &before);
    }

    #[test]
    fn generator_failure_leaves_request_pending() {
        let mut request = ready_request();
        let err = request.generate(&mut Failing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GeneratorFailure);
        assert!(!request.is_generated());

        request.generate(&mut Recording::new(1, 0)).expect("retry");
        assert!(request.is_generated());
    }

    #[test]
    fn views_before_generation_are_invalid_state() {
        let request = ready_request();
        assert_eq!(
            request.planets().unwrap_err().kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            request.stellar_profile().unwrap_err().kind(),
            ErrorKind::InvalidState
        );
    }

    #[test]
    fn release_counts_everything_and_is_idempotent() {
        let (n, m) = (3, 2);
        let mut request = ready_request();
        request.attach_seed_system(vec![CelestialBody::new().with_orbit(1.0, 0.0)].into());
        request.generate(&mut Recording::new(n, m)).expect("generate");

        let report = request.release();
        assert_eq!(report.stars, 1);
        // star name + system name
        assert_eq!(report.names, 2);
        assert_eq!(report.lists, 2);
        assert_eq!(report.bodies, 1 + n * (m + 1));
        assert_eq!(report.atmospheres, n);

        assert!(request.star.is_none());
        assert!(request.seed_system.is_none());
        assert!(request.system_name.is_none());
        assert_eq!(request.state(), &GenerationState::Released);
        assert!(request.is_generated());

        assert!(request.release().is_empty());
        assert_eq!(
            request.generate(&mut Recording::new(1, 0)).unwrap_err().kind(),
            ErrorKind::InvalidState
        );
    }

    #[test]
    fn release_of_fresh_request_only_drops_the_name() {
        let mut request = GenerationRequest::new();
        let report = request.release();
        assert_eq!(report.names, 1);
        assert_eq!(report.allocations(), 1);
        assert_eq!(request.state(), &GenerationState::Pending);
    }
}
