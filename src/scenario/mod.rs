//! Batch generation from request manifests.

use std::path::Path;

use stargen_config::{ConfigError, load_requests};
use stargen_request::manifest::from_config;
use stargen_request::{GenerationError, GenerationRequest};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to load manifest: {0}")]
    Config(#[from] ConfigError),
    #[error("system '{name}' failed to generate: {source}")]
    Generation {
        name: String,
        #[source]
        source: GenerationError,
    },
}

/// Build pending requests for every entry in a manifest.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Vec<GenerationRequest>, ScenarioError> {
    Ok(load_requests(path)?.iter().map(from_config).collect())
}

/// Load a manifest and generate every system in it with the bundled generator.
///
/// Stops at the first system that fails validation or generation.
pub fn generate_scenario<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<GenerationRequest>, ScenarioError> {
    let mut requests = load_scenario(path)?;
    for request in &mut requests {
        let outcome = request.generate_with_default().map(|_| ());
        if let Err(source) = outcome {
            return Err(ScenarioError::Generation {
                name: request.system_name.clone().unwrap_or_default(),
                source,
            });
        }
    }
    Ok(requests)
}
