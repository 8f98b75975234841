//! The generator boundary: validated inputs go in, an owned body tree comes out.
//!
//! [`AccretionGenerator`] is the bundled implementation. Anything implementing
//! [`Generator`] (including a plain closure) can be driven by a generation
//! request instead.

pub mod accretion;
pub mod input;
pub mod output;

pub use accretion::AccretionGenerator;
pub use input::{GenerationParameters, GeneratorInput};
pub use output::{GeneratedSystem, StellarProfile};

use thiserror::Error;

/// Failures reported by a generator. Generators return these instead of aborting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("generator rejected its input: {0}")]
    InvalidInput(String),
    #[error("no room for planets between {inner_au:.3} AU and {outer_au:.3} AU")]
    EmptyPlanetZone { inner_au: f64, outer_au: f64 },
}

/// Produces a planetary system from validated inputs.
///
/// Implementations are called at most once per request and must not keep
/// references into the input after returning.
pub trait Generator {
    fn generate(&mut self, input: &GeneratorInput<'_>) -> Result<GeneratedSystem, GeneratorError>;
}

impl<F> Generator for F
where
    F: FnMut(&GeneratorInput<'_>) -> Result<GeneratedSystem, GeneratorError>,
{
    fn generate(&mut self, input: &GeneratorInput<'_>) -> Result<GeneratedSystem, GeneratorError> {
        self(input)
    }
}
